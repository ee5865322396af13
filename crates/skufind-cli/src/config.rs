//! `skufind.toml` loading.
//!
//! Every section is optional; an empty file yields the seeded registry and
//! text output.

use serde::Deserialize;
use skufind_core::{Details, FindabilityStatus, FindabilityUpdate, SkuFindError, SkuFindResult};
use skufind_registry::SkuRegistry;
use std::path::Path;
use tracing::{debug, info};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "skufind.toml";

/// Top-level contents of `skufind.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct SkufindConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Extra records inserted after seeding.
    #[serde(default)]
    pub records: Vec<RecordConfig>,
}

#[derive(Debug, Deserialize)]
pub struct RegistryConfig {
    /// Start from the built-in example records.
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How command output is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// A `[[records]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordConfig {
    pub sku: String,
    pub status: FindabilityStatus,
    pub confidence_score: f64,
    #[serde(default)]
    pub details: Details,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl RecordConfig {
    fn into_update(self) -> (String, FindabilityUpdate) {
        let update = FindabilityUpdate {
            status: self.status,
            confidence_score: self.confidence_score,
            details: self.details,
            recommendations: self.recommendations,
        };
        (self.sku, update)
    }
}

fn default_seed() -> bool {
    true
}

impl SkufindConfig {
    /// Loads the config at `path`.
    ///
    /// A missing file is an error when `explicit` is set (the user named it),
    /// and means defaults otherwise.
    pub fn load(path: &Path, explicit: bool) -> SkuFindResult<Self> {
        if !explicit && !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SkuFindError::Config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        Self::parse(&raw).map_err(|e| match e {
            SkuFindError::Config(msg) => {
                SkuFindError::Config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Parses TOML config text.
    pub fn parse(raw: &str) -> SkuFindResult<Self> {
        toml::from_str(raw).map_err(|e| SkuFindError::Config(e.to_string()))
    }

    /// Builds the registry this config describes.
    ///
    /// Fails if any configured record is refused (duplicate SKU or
    /// confidence outside `[0.0, 1.0]`).
    pub fn build_registry(&self) -> SkuFindResult<SkuRegistry> {
        let mut registry = if self.registry.seed {
            SkuRegistry::new()
        } else {
            SkuRegistry::empty()
        };

        for record in self.records.iter().cloned() {
            let (sku, update) = record.into_update();
            let confidence = update.confidence_score;
            if !registry.insert(sku.clone(), update) {
                return Err(SkuFindError::InvalidRecord(format!(
                    "'{sku}' is a duplicate or has confidence {confidence} outside [0, 1]"
                )));
            }
        }
        if !self.records.is_empty() {
            info!(count = self.records.len(), "Inserted configured records");
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skufind_core::DetailValue;
    use std::io::Write;

    const SAMPLE: &str = r#"
[registry]
seed = true

[output]
format = "json"

[[records]]
sku = "DD0004"
status = "FOUND"
confidence_score = 0.8
recommendations = ["Label shelf D2"]

[records.details]
location = "Warehouse D"
quantity = 12
"#;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SkufindConfig::parse("").unwrap();
        assert!(config.registry.seed);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.records.is_empty());
        assert_eq!(config.build_registry().unwrap().len(), 3);
    }

    #[test]
    fn test_sample_config() {
        let config = SkufindConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);

        let registry = config.build_registry().unwrap();
        assert_eq!(registry.len(), 4);
        let record = registry.lookup("DD0004").unwrap();
        assert_eq!(record.status, FindabilityStatus::Found);
        assert_eq!(record.details.get("quantity"), Some(&DetailValue::Integer(12)));
        let keys: Vec<&str> = record.details.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["location", "quantity"]);
    }

    #[test]
    fn test_unseeded_registry() {
        let config = SkufindConfig::parse("[registry]\nseed = false\n").unwrap();
        assert!(config.build_registry().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_record_is_rejected() {
        let raw = r#"
[[records]]
sku = "AA0001"
status = "FOUND"
confidence_score = 0.5
"#;
        let config = SkufindConfig::parse(raw).unwrap();
        let err = config.build_registry().unwrap_err();
        assert!(matches!(err, SkuFindError::InvalidRecord(_)));
    }

    #[test]
    fn test_out_of_range_record_is_rejected() {
        let raw = r#"
[[records]]
sku = "DD0004"
status = "NOT_FOUND"
confidence_score = 1.5
"#;
        let config = SkufindConfig::parse(raw).unwrap();
        assert!(config.build_registry().is_err());
    }

    #[test]
    fn test_unknown_status_is_a_config_error() {
        let raw = r#"
[[records]]
sku = "DD0004"
status = "LOST"
confidence_score = 0.5
"#;
        let err = SkufindConfig::parse(raw).unwrap_err();
        assert!(matches!(err, SkuFindError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = SkufindConfig::load(file.path(), true).unwrap();
        assert_eq!(config.records.len(), 1);
    }

    #[test]
    fn test_missing_default_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG);
        let config = SkufindConfig::load(&path, false).unwrap();
        assert!(config.registry.seed);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = SkufindConfig::load(&path, true).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
