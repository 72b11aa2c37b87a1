//! Compose command implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use layerpack_config::{
    ComposeEnv, Composer, ConfigError, MergedConfig, ProjectConfig, ProjectDiscovery,
};

use crate::cli::ComposeArgs;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the compose command.
///
/// # Steps
///
/// 1. Apply `--mode` over the environment-derived mode
/// 2. Load the project settings from `--project` or the current directory
/// 3. Compose and validate the configuration
/// 4. Write it to `--out` (relative to the project) or stdout
///
/// `env` is read once by the caller; nothing below looks at the process
/// environment again.
pub fn execute(args: ComposeArgs, env: ComposeEnv) -> Result<()> {
    let start = Instant::now();

    let config = compose(&args, env.clone())?;
    let mode = args.mode.map(Into::into).unwrap_or(env.mode);
    let json = config.to_json()?;

    let destination = if args.stdout {
        println!("{json}");
        "stdout".to_string()
    } else {
        let root = project_root(args.project.as_deref())?;
        let path = resolve_out(&root, &args.out);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, format!("{json}\n")).with_path(&path)?;
        tracing::debug!(path = %path.display(), "wrote configuration");
        path.display().to_string()
    };

    ui::print_compose_summary(&ui::ComposeSummary {
        mode: mode.to_string(),
        destination,
        entries: config.entry.keys().cloned().collect(),
        plugins: config.plugin_names().map(str::to_string).collect(),
        loaders: config.module.loaders.len(),
        bytes: json.len() as u64,
        elapsed: start.elapsed(),
    });

    Ok(())
}

/// Load the project and compose its configuration without writing anything.
pub fn compose(args: &ComposeArgs, env: ComposeEnv) -> Result<MergedConfig> {
    let env = match args.mode {
        Some(mode) => env.with_mode(mode.into()),
        None => env,
    };
    let project = load_project(args.project.as_deref())?;
    tracing::debug!(root = %project.root.display(), mode = %env.mode, "loaded project");

    Ok(Composer::new(project, env).compose()?)
}

/// Load project settings from a directory or an explicit project file.
pub fn load_project(project: Option<&Path>) -> Result<ProjectConfig> {
    let root = project_root(project)?;
    let discovery = ProjectDiscovery::new(&root);

    match project {
        Some(path) if path.is_file() => Ok(discovery.load_from(&std::path::absolute(path)?)?),
        _ => Ok(discovery.load()?),
    }
}

/// Directory the project resolves against: the `--project` directory, the
/// directory of a `--project` file, or the current directory.
fn project_root(project: Option<&Path>) -> Result<PathBuf> {
    let Some(path) = project else {
        return Ok(std::env::current_dir()?);
    };
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }

    let path = std::path::absolute(path)?;
    if path.is_file() {
        Ok(path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")))
    } else {
        Ok(path)
    }
}

fn resolve_out(root: &Path, out: &Path) -> PathBuf {
    if out.is_absolute() {
        out.to_path_buf()
    } else {
        root.join(out)
    }
}
