//! Check command implementation.
//!
//! Validates an emitted configuration file without composing anything.

use std::fs;

use serde_json::Value;

use crate::cli::CheckArgs;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Read and parse the file as JSON
/// 2. Check top-level keys and the schema of every section
/// 3. Run the typed rules (entries present, loader patterns compile, ...)
///
/// # Errors
///
/// Returns the first problem found, naming the offending key.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info(&format!("Checking {}...", args.file.display()));

    let content = fs::read_to_string(&args.file).with_path(&args.file)?;
    let value: Value = serde_json::from_str(&content)
        .with_hint("The file must contain a single JSON object")?;

    let config = layerpack_config::validate_value(&value)?;

    ui::success(&format!(
        "Configuration is valid: {} entries, {} loaders, {} plugins",
        config.entry.len(),
        config.module.loaders.len(),
        config.plugins.len()
    ));
    Ok(())
}
