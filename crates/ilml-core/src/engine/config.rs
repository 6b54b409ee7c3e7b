use crate::core::chemistry::families::{FamilyLoadError, FamilyTables};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Families(#[from] FamilyLoadError),
}

/// Settings of a featurization run.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturizationConfig {
    /// Name of an entry in [`crate::engine::featurizers::ION_FEATURIZERS`].
    pub ion_featurizer: String,
    /// Name of an entry in [`crate::engine::combining::COMBINING_RULES`].
    pub combining_rule: String,
    /// Ionic liquids containing any other element are skipped. `None` keeps all.
    pub allowed_elements: Option<BTreeSet<String>>,
    pub families: FamilyTables,
}

#[derive(Default)]
pub struct FeaturizationConfigBuilder {
    ion_featurizer: Option<String>,
    combining_rule: Option<String>,
    allowed_elements: Option<BTreeSet<String>>,
    families: Option<FamilyTables>,
}

impl FeaturizationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ion_featurizer(mut self, name: impl Into<String>) -> Self {
        self.ion_featurizer = Some(name.into());
        self
    }
    pub fn combining_rule(mut self, name: impl Into<String>) -> Self {
        self.combining_rule = Some(name.into());
        self
    }
    pub fn allowed_elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_elements = Some(elements.into_iter().map(Into::into).collect());
        self
    }
    pub fn families(mut self, families: FamilyTables) -> Self {
        self.families = Some(families);
        self
    }

    pub fn build(self) -> Result<FeaturizationConfig, ConfigError> {
        Ok(FeaturizationConfig {
            ion_featurizer: self
                .ion_featurizer
                .ok_or(ConfigError::MissingParameter("ion_featurizer"))?,
            combining_rule: self
                .combining_rule
                .ok_or(ConfigError::MissingParameter("combining_rule"))?,
            allowed_elements: self.allowed_elements,
            families: self.families.unwrap_or_default(),
        })
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileConfig {
    ion_featurizer: Option<String>,
    combining_rule: Option<String>,
    allowed_elements: Option<Vec<String>>,
    families: Option<PathBuf>,
}

impl FeaturizationConfig {
    /// Reads a TOML configuration file. A relative `families` path is resolved
    /// against the directory holding the configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: FileConfig = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        debug!(?file, "Parsed featurization config file.");

        let mut builder = FeaturizationConfigBuilder::new();
        if let Some(name) = file.ion_featurizer {
            builder = builder.ion_featurizer(name);
        }
        if let Some(name) = file.combining_rule {
            builder = builder.combining_rule(name);
        }
        if let Some(elements) = file.allowed_elements {
            builder = builder.allowed_elements(elements);
        }
        if let Some(families_path) = file.families {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            builder = builder.families(FamilyTables::load(&base.join(families_path))?);
        }
        builder.build()
    }
}
