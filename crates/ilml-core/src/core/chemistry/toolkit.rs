use super::error::ParseError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Raw descriptors as reported by a toolkit, keyed by descriptor name.
pub type Descriptors = BTreeMap<String, DescriptorValue>;

/// A single descriptor value as reported by a molecular-structure toolkit.
///
/// Toolkits are free to report categorical or undefined values alongside numeric
/// ones; consumers decide what to keep via [`DescriptorValue::as_f64`].
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorValue {
    Float(f64),
    Integer(i64),
    Boolean(bool),
    Text(String),
    Undefined,
}

impl DescriptorValue {
    /// Coerces the value to a finite number.
    ///
    /// Returns `None` for undefined values, text that does not parse as a number,
    /// and anything that ends up NaN or infinite.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Float(value) => *value,
            Self::Integer(value) => *value as f64,
            Self::Boolean(value) => f64::from(u8::from(*value)),
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Undefined => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for DescriptorValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for DescriptorValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for DescriptorValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for DescriptorValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Process-unique identity of a [`Toolkit`] instance.
///
/// A toolkit allocates one on construction and stamps it on every structure it
/// produces. Cached results are never shared across identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolkitId(u64);

impl ToolkitId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// An in-memory molecular structure produced by a [`Toolkit`].
///
/// Every structural query the chemistry layer needs goes through this trait, so
/// the handle is all an [`Ion`](super::ion::Ion) has to carry.
pub trait Molecule: fmt::Debug + Send + Sync {
    /// Identity of the toolkit that produced this structure.
    fn toolkit_id(&self) -> ToolkitId;

    /// Writes the structure back out as canonical SMILES. With `isomeric` unset,
    /// stereochemistry and isotope labels are discarded.
    fn to_smiles(&self, isomeric: bool) -> String;

    fn formal_charge(&self) -> i32;

    fn element_symbols(&self) -> BTreeSet<String>;

    fn atom_count(&self) -> usize;

    fn molecular_weight(&self) -> f64;

    /// Reports whether the SMARTS `pattern` matches anywhere in the structure.
    fn has_substructure_match(&self, pattern: &str) -> bool;

    /// Computes the toolkit's full descriptor set. Potentially expensive; callers
    /// should go through the memoized path in [`crate::engine::featurizers`].
    fn descriptors(&self) -> Descriptors;
}

/// Entry point of a molecular-structure toolkit.
pub trait Toolkit: Send + Sync {
    fn parse_smiles(&self, smiles: &str) -> Result<Arc<dyn Molecule>, ParseError>;
}
