use std::fs;
use std::io;
use std::path::Path;

use combo_core::{Action, Filter, Value};
use combo_logging::{combo_info, combo_warn};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("unknown filter: {0}")]
    UnknownFilter(String),
}

/// Static settings of a combobox, as a host would write them in markup.
///
/// Boolean settings accept attribute-style strings (`"off"`, `"0"`, ...) as well
/// as real booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboConfig {
    #[serde(deserialize_with = "flag")]
    pub disabled: bool,
    #[serde(deserialize_with = "flag")]
    pub filtering: bool,
    #[serde(deserialize_with = "flag")]
    pub auto_add: bool,
    pub text_field: Option<String>,
    /// Name of a built-in filter: `substring`, `prefix` or `identity`.
    pub filter: Option<String>,
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            filtering: true,
            auto_add: false,
            text_field: None,
            filter: None,
        }
    }
}

impl ComboConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_ron_str(&content)?;
        combo_info!("Loaded combobox config from {:?}", path);
        Ok(config)
    }

    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    /// Actions that bring a fresh state in line with this configuration.
    pub fn initial_actions(&self) -> Result<Vec<Action>, ConfigError> {
        let mut actions = vec![
            Action::TextField(self.text_field.clone()),
            Action::AutoAdd(self.auto_add),
            Action::Filtering(self.filtering),
        ];
        if let Some(name) = &self.filter {
            let filter = Filter::builtin(name).ok_or_else(|| {
                combo_warn!("Unknown filter {:?} in config", name);
                ConfigError::UnknownFilter(name.clone())
            })?;
            actions.push(Action::Filter(filter));
        }
        if self.disabled {
            actions.push(Action::Disable);
        }
        Ok(actions)
    }
}

/// Attribute-style boolean: empty, `false`, `no`, `off` and `0` are false.
pub fn to_boolean(text: &str) -> bool {
    !matches!(
        text.trim().to_lowercase().as_str(),
        "" | "false" | "no" | "off" | "0"
    )
}

/// Truthiness of a loosely typed flag value.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => to_boolean(text),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FlagRepr::deserialize(deserializer)? {
        FlagRepr::Bool(flag) => flag,
        FlagRepr::Int(n) => n != 0,
        FlagRepr::Float(n) => n != 0.0,
        FlagRepr::Text(text) => to_boolean(&text),
    })
}
