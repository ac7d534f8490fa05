//! Settings supplied by the host.
//!
//! The host owns persistence; this crate only parses the settings blob it is
//! handed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculator::SymbolTable;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("constant {name} is not a finite number")]
    NonFiniteConstant { name: String },
}

/// Inline calculator settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Prefix shown before the value in the suggestion list.
    pub render_prefix: String,
    /// Text inserted between the `=` and the value on acceptance.
    pub insert_prefix: String,
    /// Extra constants on top of the built-in symbol table.
    pub constants: BTreeMap<String, f64>,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            render_prefix: "↵ ".to_string(),
            insert_prefix: " ".to_string(),
            constants: BTreeMap::new(),
        }
    }
}

impl CalcConfig {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.constants.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, _)) => Err(ConfigError::NonFiniteConstant { name: name.clone() }),
            None => Ok(()),
        }
    }

    /// Built-in constants plus the configured ones.
    pub fn symbol_table(&self) -> SymbolTable {
        self.constants
            .iter()
            .fold(SymbolTable::builtin(), |table, (name, value)| {
                table.with_constant(name, *value)
            })
    }
}
