use thiserror::Error;

use super::config::ConfigError;
use super::featurizers::DescriptorTableError;
use crate::core::chemistry::error::ChemistryError;
use crate::core::chemistry::families::FamilyLoadError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown ion featurizer '{0}'")]
    UnknownIonFeaturizer(String),

    #[error("Unknown combining rule '{0}'")]
    UnknownCombiningRule(String),

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Chemistry error: {source}")]
    Chemistry {
        #[from]
        source: ChemistryError,
    },

    #[error("Family table error: {source}")]
    Families {
        #[from]
        source: FamilyLoadError,
    },

    #[error("Descriptor table error: {source}")]
    DescriptorTable {
        #[from]
        source: DescriptorTableError,
    },
}
