use super::error::{ChemistryError, InvalidChargeError};
use super::families::{ANION_FAMILY_PATTERNS, CATION_FAMILY_PATTERNS, FamilyPatterns, first_matching_family};
use super::toolkit::{Molecule, Toolkit};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

/// A charged structure together with its canonical, non-isomeric SMILES.
///
/// Two ions are equal when their canonical SMILES are equal, regardless of how
/// the input notation was spelled.
#[derive(Clone)]
pub struct Ion {
    smiles: String,
    molecule: Arc<dyn Molecule>,
}

impl Ion {
    pub fn from_smiles(toolkit: &dyn Toolkit, smiles: &str) -> Result<Self, ChemistryError> {
        let molecule = toolkit.parse_smiles(smiles)?;
        Ok(Self::from_molecule(molecule)?)
    }

    pub fn from_molecule(molecule: Arc<dyn Molecule>) -> Result<Self, InvalidChargeError> {
        let smiles = molecule.to_smiles(false);
        debug!(%smiles, "Canonicalized ion.");

        if molecule.formal_charge() == 0 {
            return Err(InvalidChargeError::Neutral);
        }
        Ok(Self { smiles, molecule })
    }

    pub fn smiles(&self) -> &str {
        &self.smiles
    }

    pub fn molecule(&self) -> &dyn Molecule {
        self.molecule.as_ref()
    }

    pub fn shared_molecule(&self) -> &Arc<dyn Molecule> {
        &self.molecule
    }

    pub fn charge(&self) -> i32 {
        self.molecule.formal_charge()
    }

    pub fn element_set(&self) -> BTreeSet<String> {
        self.molecule.element_symbols()
    }

    pub fn atom_count(&self) -> usize {
        self.molecule.atom_count()
    }

    pub fn molecular_weight(&self) -> f64 {
        self.molecule.molecular_weight()
    }
}

impl fmt::Debug for Ion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ion")
            .field("smiles", &self.smiles)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Ion {
    fn eq(&self, other: &Self) -> bool {
        self.smiles == other.smiles
    }
}

impl Eq for Ion {}

impl Hash for Ion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.smiles.hash(state);
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Cation {}
    impl Sealed for super::Anion {}
}

/// Behaviour shared by the two ion polarities.
///
/// Implemented only by [`Cation`] and [`Anion`]; each carries its own family
/// table and charge-sign check.
pub trait IonSpecies: sealed::Sealed + Deref<Target = Ion> + TryFrom<Ion, Error = InvalidChargeError> {
    /// Family table in classification order.
    fn family_patterns() -> &'static [FamilyPatterns];

    fn check_charge(charge: i32) -> Result<(), InvalidChargeError>;

    fn from_smiles(toolkit: &dyn Toolkit, smiles: &str) -> Result<Self, ChemistryError> {
        let ion = Ion::from_smiles(toolkit, smiles)?;
        Ok(Self::try_from(ion)?)
    }

    fn from_molecule(molecule: Arc<dyn Molecule>) -> Result<Self, InvalidChargeError> {
        Self::try_from(Ion::from_molecule(molecule)?)
    }

    /// The first family of [`Self::family_patterns`] matching this ion, if any.
    fn chemical_family(&self) -> Option<&'static str> {
        first_matching_family(self.molecule(), Self::family_patterns().iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cation(Ion);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Anion(Ion);

impl IonSpecies for Cation {
    fn family_patterns() -> &'static [FamilyPatterns] {
        CATION_FAMILY_PATTERNS
    }

    fn check_charge(charge: i32) -> Result<(), InvalidChargeError> {
        if charge < 0 {
            return Err(InvalidChargeError::NotPositive { charge });
        }
        Ok(())
    }
}

impl IonSpecies for Anion {
    fn family_patterns() -> &'static [FamilyPatterns] {
        ANION_FAMILY_PATTERNS
    }

    fn check_charge(charge: i32) -> Result<(), InvalidChargeError> {
        if charge > 0 {
            return Err(InvalidChargeError::NotNegative { charge });
        }
        Ok(())
    }
}

impl TryFrom<Ion> for Cation {
    type Error = InvalidChargeError;

    fn try_from(ion: Ion) -> Result<Self, Self::Error> {
        Self::check_charge(ion.charge())?;
        Ok(Self(ion))
    }
}

impl TryFrom<Ion> for Anion {
    type Error = InvalidChargeError;

    fn try_from(ion: Ion) -> Result<Self, Self::Error> {
        Self::check_charge(ion.charge())?;
        Ok(Self(ion))
    }
}

impl Deref for Cation {
    type Target = Ion;

    fn deref(&self) -> &Ion {
        &self.0
    }
}

impl Deref for Anion {
    type Target = Ion;

    fn deref(&self) -> &Ion {
        &self.0
    }
}

impl From<Cation> for Ion {
    fn from(cation: Cation) -> Self {
        cation.0
    }
}

impl From<Anion> for Ion {
    fn from(anion: Anion) -> Self {
        anion.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chemistry::error::ParseError;
    use crate::core::chemistry::testing::*;

    #[test]
    fn from_smiles_stores_canonical_notation() {
        let toolkit = toolkit();
        let ion = Ion::from_smiles(&toolkit, EMIM_ALIAS).unwrap();
        assert_eq!(ion.smiles(), EMIM);
        assert_eq!(ion, Ion::from_smiles(&toolkit, EMIM).unwrap());
    }

    #[test]
    fn canonical_notation_is_idempotent() {
        let toolkit = toolkit();
        let first = Ion::from_smiles(&toolkit, CHIRAL_AMMONIUM_ISOMERIC).unwrap();
        let second = Ion::from_smiles(&toolkit, first.smiles()).unwrap();
        assert_eq!(first.smiles(), CHIRAL_AMMONIUM);
        assert_eq!(second.smiles(), first.smiles());
    }

    #[test]
    fn from_smiles_propagates_parse_errors() {
        let toolkit = toolkit();
        let result = Ion::from_smiles(&toolkit, "C1CC(");
        assert_eq!(
            result.unwrap_err(),
            ChemistryError::Parse(ParseError::new("C1CC(", "unrecognized structure"))
        );
    }

    #[test]
    fn neutral_structures_are_rejected() {
        let toolkit = toolkit();
        assert_eq!(
            Ion::from_smiles(&toolkit, ETHANOL).unwrap_err(),
            ChemistryError::InvalidCharge(InvalidChargeError::Neutral)
        );
        assert_eq!(
            Cation::from_smiles(&toolkit, ETHANOL).unwrap_err(),
            ChemistryError::InvalidCharge(InvalidChargeError::Neutral)
        );
    }

    #[test]
    fn cation_rejects_negative_structure() {
        let toolkit = toolkit();
        let err = Cation::from_smiles(&toolkit, SULFATE).unwrap_err();
        assert_eq!(
            err,
            ChemistryError::InvalidCharge(InvalidChargeError::NotPositive { charge: -2 })
        );
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn anion_rejects_positive_structure() {
        let toolkit = toolkit();
        let err = Anion::from_smiles(&toolkit, EMIM).unwrap_err();
        assert_eq!(
            err,
            ChemistryError::InvalidCharge(InvalidChargeError::NotNegative { charge: 1 })
        );
        assert!(err.to_string().contains("+1"));
    }

    #[test]
    fn properties_come_from_the_structure() {
        let toolkit = toolkit();
        let anion = Anion::from_smiles(&toolkit, BF4).unwrap();
        assert_eq!(anion.charge(), -1);
        assert_eq!(anion.atom_count(), 5);
        assert_eq!(anion.molecular_weight(), 86.805);
        assert_eq!(
            anion.element_set(),
            ["B", "F"].iter().map(|s| s.to_string()).collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn species_are_classified_with_their_own_tables() {
        let toolkit = toolkit();
        assert_eq!(
            Cation::from_smiles(&toolkit, EMIM).unwrap().chemical_family(),
            Some("imidazolium")
        );
        assert_eq!(
            Cation::from_smiles(&toolkit, BMPY).unwrap().chemical_family(),
            Some("pyridinium")
        );
        assert_eq!(
            Cation::from_smiles(&toolkit, P4444).unwrap().chemical_family(),
            Some("phosphonium")
        );
        assert_eq!(
            Anion::from_smiles(&toolkit, NTF2).unwrap().chemical_family(),
            Some("bistriflamides")
        );
        assert_eq!(
            Anion::from_smiles(&toolkit, CHLORIDE).unwrap().chemical_family(),
            Some("inorganics")
        );
    }

    #[test]
    fn unmatched_ion_has_no_family() {
        let toolkit = toolkit();
        assert_eq!(
            Cation::from_smiles(&toolkit, SODIUM).unwrap().chemical_family(),
            None
        );
    }

    #[test]
    fn from_molecule_skips_parsing() {
        let toolkit = toolkit();
        let molecule = toolkit.molecule(CHLORIDE);
        let anion = Anion::from_molecule(molecule).unwrap();
        assert_eq!(anion.smiles(), CHLORIDE);
    }

    #[test]
    fn debug_output_omits_the_structure_handle() {
        let toolkit = toolkit();
        let ion = Ion::from_smiles(&toolkit, CHLORIDE).unwrap();
        assert_eq!(format!("{ion:?}"), "Ion { smiles: \"[Cl-]\", .. }");
    }
}
