use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Engine settings, loadable from TOML.
///
/// ```toml
/// max_rule_depth = 32
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// How deeply rule applications may nest while a goal is built.
    ///
    /// Rules are expanded eagerly, so a recursive rule would otherwise
    /// expand forever.
    pub max_rule_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { max_rule_depth: 64 }
    }
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn reads_rule_depth() {
        let config = EngineConfig::from_toml_str("max_rule_depth = 3").unwrap();
        assert_eq!(config.max_rule_depth, 3);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            EngineConfig::from_toml_str("max_depth = 3"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = EngineConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
