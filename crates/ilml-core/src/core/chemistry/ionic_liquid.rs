use super::error::{ChemistryError, InvalidChargeError};
use super::families::FamilyTables;
use super::ion::{Anion, Cation, Ion, IonSpecies};
use super::toolkit::Toolkit;
use std::collections::BTreeSet;

/// A cation/anion pair treated as a single chemical entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IonicLiquid {
    pub cation: Cation,
    pub anion: Anion,
}

impl IonicLiquid {
    pub fn new(cation: Cation, anion: Anion) -> Self {
        Self { cation, anion }
    }

    /// Builds an ionic liquid from a two-fragment SMILES such as `"[Na+].[Cl-]"`.
    ///
    /// The fragments may appear in either order; the negatively charged one
    /// becomes the anion.
    pub fn from_smiles(toolkit: &dyn Toolkit, smiles: &str) -> Result<Self, ChemistryError> {
        let fragments: Vec<&str> = smiles.split('.').collect();
        let [left, right] = fragments.as_slice() else {
            return Err(ChemistryError::FragmentCount {
                smiles: smiles.to_string(),
                found: fragments.len(),
            });
        };

        let left = Ion::from_smiles(toolkit, left)?;
        let right = Ion::from_smiles(toolkit, right)?;

        let (cation, anion) = match (left.charge() > 0, right.charge() > 0) {
            (true, false) => (left, right),
            (false, true) => (right, left),
            _ => {
                return Err(InvalidChargeError::Unpairable {
                    left: left.charge(),
                    right: right.charge(),
                }
                .into());
            }
        };

        Ok(Self::new(Cation::try_from(cation)?, Anion::try_from(anion)?))
    }

    /// The combined notation, cation first.
    pub fn smiles(&self) -> String {
        format!("{}.{}", self.cation.smiles(), self.anion.smiles())
    }

    pub fn element_set(&self) -> BTreeSet<String> {
        let mut elements = self.cation.element_set();
        elements.extend(self.anion.element_set());
        elements
    }

    pub fn atom_count(&self) -> usize {
        self.cation.atom_count() + self.anion.atom_count()
    }

    pub fn molecular_weight(&self) -> f64 {
        self.cation.molecular_weight() + self.anion.molecular_weight()
    }

    /// Cation family under the built-in table. See [`Self::families`] for
    /// configured tables.
    pub fn cation_family(&self) -> Option<&'static str> {
        self.cation.chemical_family()
    }

    /// Anion family under the built-in table. See [`Self::families`] for
    /// configured tables.
    pub fn anion_family(&self) -> Option<&'static str> {
        self.anion.chemical_family()
    }

    /// Cation and anion families under `tables`.
    pub fn families<'t>(&self, tables: &'t FamilyTables) -> (Option<&'t str>, Option<&'t str>) {
        (
            tables.cation.classify(self.cation.molecule()),
            tables.anion.classify(self.anion.molecule()),
        )
    }

    /// Element symbols of this ionic liquid that are not in `allowed`.
    pub fn disallowed_elements(&self, allowed: &BTreeSet<String>) -> BTreeSet<String> {
        self.element_set()
            .into_iter()
            .filter(|element| !allowed.contains(element))
            .collect()
    }
}
