//! Schema command implementation.

use std::fs;

use crate::cli::SchemaArgs;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Print the JSON schema a composed configuration satisfies, or write it to
/// `--out`.
pub fn execute(args: SchemaArgs) -> Result<()> {
    let schema = layerpack_config::merged_config_schema()?;
    let json = serde_json::to_string_pretty(&schema)?;

    match args.out {
        Some(path) => {
            fs::write(&path, format!("{json}\n")).with_path(&path)?;
            ui::success(&format!("Wrote schema to {}", path.display()));
        }
        None => println!("{json}"),
    }
    Ok(())
}
