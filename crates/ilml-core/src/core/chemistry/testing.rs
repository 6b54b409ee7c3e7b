//! Table-driven stand-in for a molecular-structure toolkit, used by unit tests.

use super::error::ParseError;
use super::toolkit::{DescriptorValue, Descriptors, Molecule, Toolkit, ToolkitId};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub(crate) struct FakeMolecule {
    toolkit_id: ToolkitId,
    canonical: String,
    isomeric: String,
    charge: i32,
    elements: BTreeSet<String>,
    atom_count: usize,
    molecular_weight: f64,
    matching_patterns: Vec<String>,
    descriptors: Descriptors,
    descriptor_calls: AtomicUsize,
}

impl FakeMolecule {
    pub(crate) fn new(canonical: &str, charge: i32) -> Self {
        Self {
            toolkit_id: ToolkitId::next(),
            canonical: canonical.to_string(),
            isomeric: canonical.to_string(),
            charge,
            elements: BTreeSet::new(),
            atom_count: 1,
            molecular_weight: 0.0,
            matching_patterns: Vec::new(),
            descriptors: Descriptors::new(),
            descriptor_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn isomeric(mut self, smiles: &str) -> Self {
        self.isomeric = smiles.to_string();
        self
    }

    pub(crate) fn elements(mut self, symbols: &[&str]) -> Self {
        self.elements = symbols.iter().map(|s| s.to_string()).collect();
        self
    }

    pub(crate) fn atoms(mut self, count: usize) -> Self {
        self.atom_count = count;
        self
    }

    pub(crate) fn weight(mut self, molecular_weight: f64) -> Self {
        self.molecular_weight = molecular_weight;
        self
    }

    pub(crate) fn matching(mut self, patterns: &[&str]) -> Self {
        self.matching_patterns = patterns.iter().map(|p| p.to_string()).collect();
        self
    }

    pub(crate) fn descriptor(mut self, name: &str, value: impl Into<DescriptorValue>) -> Self {
        self.descriptors.insert(name.to_string(), value.into());
        self
    }

    pub(crate) fn descriptor_calls(&self) -> usize {
        self.descriptor_calls.load(Ordering::SeqCst)
    }
}

impl Molecule for FakeMolecule {
    fn toolkit_id(&self) -> ToolkitId {
        self.toolkit_id
    }

    fn to_smiles(&self, isomeric: bool) -> String {
        if isomeric {
            self.isomeric.clone()
        } else {
            self.canonical.clone()
        }
    }

    fn formal_charge(&self) -> i32 {
        self.charge
    }

    fn element_symbols(&self) -> BTreeSet<String> {
        self.elements.clone()
    }

    fn atom_count(&self) -> usize {
        self.atom_count
    }

    fn molecular_weight(&self) -> f64 {
        self.molecular_weight
    }

    fn has_substructure_match(&self, pattern: &str) -> bool {
        self.matching_patterns.iter().any(|p| p == pattern)
    }

    fn descriptors(&self) -> Descriptors {
        self.descriptor_calls.fetch_add(1, Ordering::SeqCst);
        self.descriptors.clone()
    }
}

#[derive(Debug)]
pub(crate) struct FakeToolkit {
    id: ToolkitId,
    entries: HashMap<String, Arc<FakeMolecule>>,
}

impl FakeToolkit {
    pub(crate) fn new() -> Self {
        Self {
            id: ToolkitId::next(),
            entries: HashMap::new(),
        }
    }

    /// Registers `molecule` under its canonical and isomeric notations plus any
    /// extra spellings in `aliases`.
    pub(crate) fn with(mut self, mut molecule: FakeMolecule, aliases: &[&str]) -> Self {
        molecule.toolkit_id = self.id;
        let molecule = Arc::new(molecule);
        let spellings = [molecule.canonical.as_str(), molecule.isomeric.as_str()]
            .into_iter()
            .chain(aliases.iter().copied())
            .map(str::to_string)
            .collect::<Vec<_>>();
        for spelling in spellings {
            self.entries.insert(spelling, Arc::clone(&molecule));
        }
        self
    }

    pub(crate) fn molecule(&self, smiles: &str) -> Arc<FakeMolecule> {
        Arc::clone(&self.entries[smiles])
    }
}

impl Toolkit for FakeToolkit {
    fn parse_smiles(&self, smiles: &str) -> Result<Arc<dyn Molecule>, ParseError> {
        self.entries
            .get(smiles)
            .map(|molecule| Arc::clone(molecule) as Arc<dyn Molecule>)
            .ok_or_else(|| ParseError::new(smiles, "unrecognized structure"))
    }
}

pub(crate) const EMIM: &str = "CCn1cc[n+](C)c1";
pub(crate) const EMIM_ALIAS: &str = "C[n+]1ccn(CC)c1";
pub(crate) const BMPY: &str = "CCCC[n+]1ccccc1";
pub(crate) const P4444: &str = "CCCC[P+](CCCC)(CCCC)CCCC";
pub(crate) const SODIUM: &str = "[Na+]";
pub(crate) const BF4: &str = "F[B-](F)(F)F";
pub(crate) const CHLORIDE: &str = "[Cl-]";
pub(crate) const NTF2: &str = "O=S(=O)([N-]S(=O)(=O)C(F)(F)F)C(F)(F)F";
pub(crate) const SULFATE: &str = "O=S(=O)([O-])[O-]";
pub(crate) const ETHANOL: &str = "CCO";
pub(crate) const CHIRAL_AMMONIUM: &str = "CC(O)CC[N+](C)(C)C";
pub(crate) const CHIRAL_AMMONIUM_ISOMERIC: &str = "C[C@@H](O)CC[N+](C)(C)C";

/// A toolkit knowing a handful of common ionic-liquid ions.
pub(crate) fn toolkit() -> FakeToolkit {
    FakeToolkit::new()
        .with(
            FakeMolecule::new(EMIM, 1)
                .elements(&["C", "N"])
                .atoms(8)
                .weight(111.168)
                .matching(&["c1c[n+]cn1", "[#7+]"])
                .descriptor("MolWt", 111.168)
                .descriptor("HeavyAtomCount", 8_i64)
                .descriptor("NumAromaticRings", 1_i64)
                .descriptor("Ipc", f64::NAN)
                .descriptor("RingSystem", "imidazole"),
            &[EMIM_ALIAS],
        )
        .with(
            FakeMolecule::new(BMPY, 1)
                .elements(&["C", "N"])
                .atoms(10)
                .weight(136.218)
                .matching(&["c1cc[n+]cc1", "[#7+]"])
                .descriptor("MolWt", 136.218)
                .descriptor("HeavyAtomCount", 10_i64),
            &[],
        )
        .with(
            FakeMolecule::new(P4444, 1)
                .elements(&["C", "P"])
                .atoms(17)
                .weight(259.437)
                .matching(&["[#15+]"]),
            &[],
        )
        .with(
            FakeMolecule::new(SODIUM, 1)
                .elements(&["Na"])
                .weight(22.990),
            &[],
        )
        .with(
            FakeMolecule::new(BF4, -1)
                .elements(&["B", "F"])
                .atoms(5)
                .weight(86.805)
                .matching(&["[#5-]"])
                .descriptor("MolWt", 86.805)
                .descriptor("HeavyAtomCount", 5_i64)
                .descriptor("TPSA", 0.0)
                .descriptor("Ipc", DescriptorValue::Undefined),
            &["FB(F)(F)[F-]"],
        )
        .with(
            FakeMolecule::new(CHLORIDE, -1)
                .elements(&["Cl"])
                .weight(35.453)
                .matching(&["[F,Cl,Br,I;-]"]),
            &[],
        )
        .with(
            FakeMolecule::new(NTF2, -1)
                .elements(&["C", "F", "N", "O", "S"])
                .atoms(15)
                .weight(280.14)
                .matching(&["O=S(=O)[#7-]S(=O)=O", "[#7-]S(=O)=O", "[#7-]"]),
            &[],
        )
        .with(
            FakeMolecule::new(SULFATE, -2)
                .elements(&["O", "S"])
                .atoms(5)
                .weight(96.06)
                .matching(&["[#8]S([#8-])(=O)=O", "[#8-]S(=O)=O"]),
            &[],
        )
        .with(
            FakeMolecule::new(ETHANOL, 0)
                .elements(&["C", "O"])
                .atoms(3)
                .weight(46.069),
            &[],
        )
        .with(
            FakeMolecule::new(CHIRAL_AMMONIUM, 1)
                .isomeric(CHIRAL_AMMONIUM_ISOMERIC)
                .elements(&["C", "N", "O"])
                .atoms(9)
                .weight(132.227)
                .matching(&["[#7+]"]),
            &[],
        )
}
