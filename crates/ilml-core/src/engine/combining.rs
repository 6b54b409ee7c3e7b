//! Combining rules merge a cation feature value and an anion feature value into
//! one ionic-liquid-level value.

use super::error::EngineError;
use crate::core::chemistry::ionic_liquid::IonicLiquid;
use phf::{OrderedMap, phf_ordered_map};
use std::fmt;

pub type CombiningFn = fn(&IonicLiquid, f64, f64) -> f64;

/// A named, pure combining function.
#[derive(Clone, Copy)]
pub struct CombiningRule {
    name: &'static str,
    func: CombiningFn,
}

impl CombiningRule {
    pub const fn new(name: &'static str, func: CombiningFn) -> Self {
        Self { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn apply(&self, ionic_liquid: &IonicLiquid, cation_value: f64, anion_value: f64) -> f64 {
        (self.func)(ionic_liquid, cation_value, anion_value)
    }
}

impl fmt::Debug for CombiningRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CombiningRule").field(&self.name).finish()
    }
}

impl PartialEq for CombiningRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Name of the registry entry that keeps both sides instead of combining them.
pub const CONCATENATE: &str = "concatenate";

/// All combining rules by name, in registration order. The `concatenate` entry
/// carries no function.
pub static COMBINING_RULES: OrderedMap<&'static str, Option<CombiningRule>> = phf_ordered_map! {
    "concatenate" => None,
    "sum" => Some(CombiningRule::new("sum", sum)),
    "min_abs" => Some(CombiningRule::new("min_abs", min_abs)),
    "max_abs" => Some(CombiningRule::new("max_abs", max_abs)),
    "mean" => Some(CombiningRule::new("mean", mean)),
    "mean_atom_count" => Some(CombiningRule::new("mean_atom_count", mean_atom_count)),
    "mean_molecular_weight" => Some(CombiningRule::new("mean_molecular_weight", mean_molecular_weight)),
};

/// Looks up a combining rule; `Ok(None)` means concatenation.
pub fn combining_rule(name: &str) -> Result<Option<CombiningRule>, EngineError> {
    COMBINING_RULES
        .get(name)
        .copied()
        .ok_or_else(|| EngineError::UnknownCombiningRule(name.to_string()))
}

pub fn sum(_: &IonicLiquid, cation_value: f64, anion_value: f64) -> f64 {
    cation_value + anion_value
}

pub fn min_abs(_: &IonicLiquid, cation_value: f64, anion_value: f64) -> f64 {
    cation_value.abs().min(anion_value.abs())
}

pub fn max_abs(_: &IonicLiquid, cation_value: f64, anion_value: f64) -> f64 {
    cation_value.abs().max(anion_value.abs())
}

pub fn mean(_: &IonicLiquid, cation_value: f64, anion_value: f64) -> f64 {
    0.5 * (cation_value + anion_value)
}

/// Average weighted by the number of atoms in each ion.
pub fn mean_atom_count(ionic_liquid: &IonicLiquid, cation_value: f64, anion_value: f64) -> f64 {
    let cation_atoms = ionic_liquid.cation.atom_count() as f64;
    let anion_atoms = ionic_liquid.anion.atom_count() as f64;
    (cation_atoms * cation_value + anion_atoms * anion_value) / ionic_liquid.atom_count() as f64
}

/// Average weighted by the molecular weight of each ion.
pub fn mean_molecular_weight(
    ionic_liquid: &IonicLiquid,
    cation_value: f64,
    anion_value: f64,
) -> f64 {
    let cation_weight = ionic_liquid.cation.molecular_weight();
    let anion_weight = ionic_liquid.anion.molecular_weight();
    (cation_weight * cation_value + anion_weight * anion_value) / ionic_liquid.molecular_weight()
}
