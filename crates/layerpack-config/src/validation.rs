//! Validation of merged configurations.
//!
//! Two strategies run before a configuration is handed to the engine:
//! [`RuleValidator`] checks typed invariants (entries present, patterns
//! compile, names usable) and [`SchemaValidator`] checks the serialized
//! document against the JSON schema of [`Fragment`], which rejects keys the
//! engine contract does not know.

use regex::Regex;
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::fragment::{Fragment, MergedConfig};

/// Keys a merged configuration cannot do without.
pub const REQUIRED_KEYS: &[&str] = &["entry", "output", "plugins"];
pub const REQUIRED_OUTPUT_KEYS: &[&str] = &["path", "filename"];

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &Fragment) -> Result<()>;
}

/// Typed checks on a merged fragment.
pub struct RuleValidator;

impl ConfigValidator for RuleValidator {
    fn validate(&self, config: &Fragment) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }
        for (name, modules) in &config.entry {
            if name.trim().is_empty() {
                return Err(schema_error("entry", "entry names cannot be empty"));
            }
            if modules.is_empty() || modules.iter().any(|m| m.trim().is_empty()) {
                return Err(schema_error(
                    format!("entry.{name}"),
                    "every entry needs at least one non-empty module",
                ));
            }
        }

        match &config.output.path {
            Some(path) if !path.as_os_str().is_empty() => {}
            _ => return Err(schema_error("output.path", "output directory is required")),
        }
        let Some(filename) = config.output.filename.as_deref() else {
            return Err(schema_error("output.filename", "filename template is required"));
        };
        // Several chunks written under one fixed name would overwrite each other
        if config.entry.len() > 1 && !filename.contains("[name]") && !filename.contains("[id]") {
            return Err(schema_error(
                "output.filename",
                format!("'{filename}' must contain [name] or [id] when there are several entries"),
            ));
        }

        for (index, rule) in config.module.loaders.iter().enumerate() {
            if let Err(err) = Regex::new(&rule.test) {
                return Err(schema_error(
                    format!("module.loaders[{index}].test"),
                    err.to_string(),
                ));
            }
            if rule.loaders.is_empty() {
                return Err(schema_error(
                    format!("module.loaders[{index}].loaders"),
                    "a rule needs at least one loader",
                ));
            }
            if rule.include.is_empty() {
                return Err(schema_error(
                    format!("module.loaders[{index}].include"),
                    "rules must be scoped to at least one directory",
                ));
            }
        }

        for (index, plugin) in config.plugins.iter().enumerate() {
            if plugin.name.trim().is_empty() {
                return Err(schema_error(
                    format!("plugins[{index}].name"),
                    "plugin name cannot be empty",
                ));
            }
        }

        Ok(())
    }
}

/// JSON-schema check of the serialized configuration.
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn validate_value(&self, value: &Value) -> Result<()> {
        let Some(object) = value.as_object() else {
            return Err(schema_error("config", "configuration must be a JSON object"));
        };

        let schema = merged_config_schema()?;

        // Top-level keys are checked by hand so the error names the key
        if let Some(known) = schema.get("properties").and_then(Value::as_object) {
            if let Some(unknown) = object.keys().find(|key| !known.contains_key(*key)) {
                return Err(schema_error(unknown.clone(), "unrecognized top-level key"));
            }
        }
        if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !object.contains_key(**key)) {
            return Err(schema_error(*missing, "required key is missing"));
        }

        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| schema_error("schema", e.to_string()))?;
        if let Some(error) = validator.iter_errors(value).next() {
            return Err(schema_error("config", error.to_string()));
        }

        Ok(())
    }
}

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &Fragment) -> Result<()> {
        let value = serde_json::to_value(config).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })?;
        self.validate_value(&value)
    }
}

/// JSON schema of a merged configuration.
pub fn merged_config_schema() -> Result<Value> {
    let schema = schemars::schema_for!(Fragment);
    let mut value = serde_json::to_value(&schema).map_err(|e| ConfigError::InvalidValue {
        field: "schema".to_string(),
        hint: Some(e.to_string()),
    })?;

    // Fragments may leave anything out; a merged configuration may not.
    if let Some(root) = value.as_object_mut() {
        root.insert("required".to_string(), Value::from(REQUIRED_KEYS.to_vec()));
    }
    if let Some(output) = value
        .pointer_mut("/$defs/OutputSection")
        .and_then(Value::as_object_mut)
    {
        output.insert(
            "required".to_string(),
            Value::from(REQUIRED_OUTPUT_KEYS.to_vec()),
        );
    }

    Ok(value)
}

/// Validate a merged fragment, producing the configuration handed to the engine.
pub fn validate(fragment: Fragment) -> Result<MergedConfig> {
    RuleValidator.validate(&fragment)?;
    SchemaValidator.validate(&fragment)?;
    tracing::debug!(
        entries = fragment.entry.len(),
        loaders = fragment.module.loaders.len(),
        plugins = fragment.plugins.len(),
        "configuration validated"
    );
    Ok(MergedConfig::new_unchecked(fragment))
}

/// Validate a configuration document produced elsewhere, e.g. an emitted file.
pub fn validate_value(value: &Value) -> Result<MergedConfig> {
    SchemaValidator.validate_value(value)?;
    let fragment: Fragment =
        serde_json::from_value(value.clone()).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })?;
    RuleValidator.validate(&fragment)?;
    Ok(MergedConfig::new_unchecked(fragment))
}

fn schema_error(key: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::SchemaValidation {
        key: key.into(),
        message: message.into(),
    }
}
