use clap::ValueEnum;
use layerpack_config::Mode;

/// Build mode selected on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Development server with hot module replacement
    ///
    /// Styles are injected by the script bundle and source maps are inlined
    /// for fast rebuilds. Output goes to the unsuffixed build directory.
    #[value(name = "default")]
    Default,

    /// Development build written to `<build>/dev`
    ///
    /// Styles are extracted to their own file and output names are hashed.
    #[value(name = "build")]
    Build,

    /// Production build written to `<build>/prod`
    ///
    /// Adds vendor chunk splitting, a production `NODE_ENV` and minification.
    #[value(name = "buildProd", alias = "build-prod")]
    BuildProd,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Default => Mode::Default,
            ModeArg::Build => Mode::Build,
            ModeArg::BuildProd => Mode::BuildProd,
        }
    }
}
