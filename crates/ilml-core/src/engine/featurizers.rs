use super::error::EngineError;
use super::memory::{CacheStats, Memoized};
use crate::core::chemistry::error::ChemistryError;
use crate::core::chemistry::ion::Ion;
use crate::core::chemistry::toolkit::{DescriptorValue, Descriptors, Molecule, Toolkit, ToolkitId};
use phf::{OrderedMap, phf_ordered_map};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

/// Named numeric features of an ion or ionic liquid.
pub type Features = BTreeMap<String, f64>;

/// Toolkit descriptor computation keyed by producing toolkit and isomeric
/// canonical SMILES.
pub type DescriptorCache = Memoized<Arc<dyn Molecule>, (ToolkitId, String), Arc<Descriptors>>;

pub fn descriptor_cache(name: &'static str) -> DescriptorCache {
    Memoized::new(
        name,
        |molecule: &Arc<dyn Molecule>| (molecule.toolkit_id(), molecule.to_smiles(true)),
        |molecule: &Arc<dyn Molecule>| Arc::new(molecule.descriptors()),
    )
}

/// Shared by every [`ToolkitDescriptorFeaturizer`] for the lifetime of the process.
static TOOLKIT_DESCRIPTORS: LazyLock<DescriptorCache> =
    LazyLock::new(|| descriptor_cache("toolkit_descriptors"));

pub fn descriptor_cache_stats() -> CacheStats {
    TOOLKIT_DESCRIPTORS.stats()
}

/// Maps an ion to a set of named numeric features.
///
/// Implementors only supply [`IonFeaturizer::raw_features`]; [`IonFeaturizer::featurize`]
/// coerces every raw value to a number and silently drops the ones that do not
/// coerce, so the resulting feature set may differ from ion to ion.
pub trait IonFeaturizer: Send + Sync {
    fn raw_features(&self, ion: &Ion) -> Descriptors;

    fn featurize(&self, ion: &Ion) -> Features {
        self.raw_features(ion)
            .into_iter()
            .filter_map(|(name, value)| value.as_f64().map(|value| (name, value)))
            .collect()
    }
}

/// Uses the full descriptor set of the molecular-structure toolkit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolkitDescriptorFeaturizer;

impl IonFeaturizer for ToolkitDescriptorFeaturizer {
    fn raw_features(&self, ion: &Ion) -> Descriptors {
        Descriptors::clone(&TOOLKIT_DESCRIPTORS.call(ion.shared_molecule()))
    }
}

/// Built-in ion featurizers by name, in registration order.
pub static ION_FEATURIZERS: OrderedMap<&'static str, &'static dyn IonFeaturizer> = phf_ordered_map! {
    "descriptors" => &ToolkitDescriptorFeaturizer as &dyn IonFeaturizer,
};

pub fn ion_featurizer(name: &str) -> Result<&'static dyn IonFeaturizer, EngineError> {
    ION_FEATURIZERS
        .get(name)
        .copied()
        .ok_or_else(|| EngineError::UnknownIonFeaturizer(name.to_string()))
}

/// Serves precomputed descriptors read from a CSV table with a `smiles` column.
///
/// Rows are keyed by canonical SMILES, so the table may spell ions differently
/// from the input records. Ions missing from the table have no features.
#[derive(Debug, Clone, Default)]
pub struct TabulatedFeaturizer {
    rows: HashMap<String, Descriptors>,
}

#[derive(Debug, Error)]
pub enum DescriptorTableError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Descriptor table '{path}' has no 'smiles' column")]
    MissingSmilesColumn { path: String },
    #[error("Invalid ion on line {line} of '{path}': {source}")]
    Chemistry {
        path: String,
        line: u64,
        source: ChemistryError,
    },
}

impl TabulatedFeaturizer {
    pub const SMILES_COLUMN: &'static str = "smiles";

    pub fn load(path: &Path, toolkit: &dyn Toolkit) -> Result<Self, DescriptorTableError> {
        let path_str = path.to_string_lossy().to_string();
        let reader = csv::Reader::from_path(path).map_err(|e| DescriptorTableError::Csv {
            path: path_str.clone(),
            source: e,
        })?;
        Self::from_csv_reader(reader, &path_str, toolkit)
    }

    pub fn from_reader(reader: impl Read, toolkit: &dyn Toolkit) -> Result<Self, DescriptorTableError> {
        Self::from_csv_reader(csv::Reader::from_reader(reader), "<reader>", toolkit)
    }

    fn from_csv_reader<R: Read>(
        mut reader: csv::Reader<R>,
        path: &str,
        toolkit: &dyn Toolkit,
    ) -> Result<Self, DescriptorTableError> {
        let csv_error = |e| DescriptorTableError::Csv {
            path: path.to_string(),
            source: e,
        };

        let headers = reader.headers().map_err(csv_error)?.clone();
        let smiles_index = headers
            .iter()
            .position(|h| h.trim() == Self::SMILES_COLUMN)
            .ok_or_else(|| DescriptorTableError::MissingSmilesColumn {
                path: path.to_string(),
            })?;

        let mut rows = HashMap::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            let line = record.position().map_or(0, |p| p.line());
            let smiles = record.get(smiles_index).unwrap_or_default().trim();
            let ion = Ion::from_smiles(toolkit, smiles).map_err(|e| DescriptorTableError::Chemistry {
                path: path.to_string(),
                line,
                source: e,
            })?;

            let descriptors: Descriptors = headers
                .iter()
                .zip(record.iter())
                .enumerate()
                .filter(|(index, _)| *index != smiles_index)
                .map(|(_, (name, value))| (name.trim().to_string(), DescriptorValue::from(value)))
                .collect();
            rows.insert(ion.smiles().to_string(), descriptors);
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IonFeaturizer for TabulatedFeaturizer {
    fn raw_features(&self, ion: &Ion) -> Descriptors {
        self.rows.get(ion.smiles()).cloned().unwrap_or_default()
    }
}
