// crates/product-core/src/config.rs

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Service configuration, deserialized from a TOML file:
///
/// ```toml
/// [attribute-values]
/// exclusion-list = ["N/A", "Not Applied"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessorConfig {
    #[serde(rename = "attribute-values", default)]
    pub attribute_values: AttributeValuesConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttributeValuesConfig {
    #[serde(rename = "exclusion-list", default)]
    pub exclusion_list: Vec<String>,
}

impl ProcessorConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn exclusion_list(&self) -> ExclusionList {
        ExclusionList::from(self.attribute_values.exclusion_list.clone())
    }
}

/// The set of attribute values the filter stage strips from every product.
/// Built once at startup and shared read-only afterwards. Membership is
/// case-sensitive exact equality.
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    values: HashSet<String>,
}

impl ExclusionList {
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<String>> for ExclusionList {
    fn from(values: Vec<String>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}
