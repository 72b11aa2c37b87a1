#[cfg(test)]
mod tests {
    use crate::cli::commands::DEFAULT_OUT;
    use crate::cli::{Cli, Command, ModeArg};
    use clap::Parser;
    use layerpack_config::Mode;
    use std::path::PathBuf;

    #[test]
    fn test_compose_defaults() {
        let cli = Cli::try_parse_from(["layerpack", "compose"]).unwrap();
        match cli.command {
            Command::Compose(args) => {
                assert!(args.mode.is_none());
                assert!(args.project.is_none());
                assert_eq!(args.out, PathBuf::from(DEFAULT_OUT));
                assert!(!args.stdout);
            }
            _ => panic!("Expected Compose command"),
        }
    }

    #[test]
    fn test_compose_with_mode() {
        let cli = Cli::try_parse_from(["layerpack", "compose", "--mode", "buildProd"]).unwrap();
        match cli.command {
            Command::Compose(args) => assert_eq!(args.mode, Some(ModeArg::BuildProd)),
            _ => panic!("Expected Compose command"),
        }

        // kebab-case alias
        let cli = Cli::try_parse_from(["layerpack", "compose", "-m", "build-prod"]).unwrap();
        match cli.command {
            Command::Compose(args) => assert_eq!(args.mode, Some(ModeArg::BuildProd)),
            _ => panic!("Expected Compose command"),
        }
    }

    #[test]
    fn test_compose_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["layerpack", "compose", "--mode", "release"]).is_err());
    }

    #[test]
    fn test_compose_stdout_conflicts_with_out() {
        let result = Cli::try_parse_from([
            "layerpack",
            "compose",
            "--stdout",
            "--out",
            "config.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_default_file() {
        let cli = Cli::try_parse_from(["layerpack", "check"]).unwrap();
        match cli.command {
            Command::Check(args) => assert_eq!(args.file, PathBuf::from(DEFAULT_OUT)),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_schema_out() {
        let cli = Cli::try_parse_from(["layerpack", "schema", "-o", "schema.json"]).unwrap();
        match cli.command {
            Command::Schema(args) => assert_eq!(args.out, Some(PathBuf::from("schema.json"))),
            _ => panic!("Expected Schema command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["layerpack", "compose", "--verbose", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["layerpack", "-v", "-q", "compose"]).is_err());
    }

    #[test]
    fn test_mode_arg_conversion() {
        assert_eq!(Mode::from(ModeArg::Default), Mode::Default);
        assert_eq!(Mode::from(ModeArg::Build), Mode::Build);
        assert_eq!(Mode::from(ModeArg::BuildProd), Mode::BuildProd);
    }
}
