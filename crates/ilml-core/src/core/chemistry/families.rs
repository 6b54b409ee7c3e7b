//! Chemical-family classification of ions by ordered SMARTS matching.
//!
//! A family table is an ordered list of `(family, patterns)` entries. An ion
//! belongs to the first family with at least one matching pattern, so more
//! specific families are declared ahead of the generic ones they overlap with
//! (pyridinium before ammonium, sulfates before sulfonates, and so on).

use super::toolkit::Molecule;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// A built-in family entry: the family name and its SMARTS patterns.
pub type FamilyPatterns = (&'static str, &'static [&'static str]);

#[rustfmt::skip]
pub static CATION_FAMILY_PATTERNS: &[FamilyPatterns] = &[
    ("imidazolium", &["c1c[n+]cn1"]),
    ("pyrazolium", &["c1cn[n+]c1"]),
    ("triazolium", &["c1nnc[n+]1", "c1c[n+]nn1", "c1n[n+]cn1"]),
    ("thiazolium", &["c1csc[n+]1"]),
    ("quinolinium", &["c1ccc2[n+]cccc2c1", "c1ccc2c[n+]ccc2c1"]),
    ("pyridinium", &["c1cc[n+]cc1"]),
    ("pyrrolidinium", &["[#6]-1-[#6]-[#6]-[#7+]-[#6]-1"]),
    ("piperidinium", &["[#6]-1-[#6]-[#6]-[#7+]-[#6]-[#6]-1"]),
    ("piperazinium", &["[#6]-1-[#6]-[#7]-[#6]-[#6]-[#7]-1"]),
    ("morpholinium", &["[#6]-1-[#6]-[#8]-[#6]-[#6]-[#7+]-1"]),
    ("phosphonium", &["[#15+]"]),
    ("guanidinium", &["[#7]-[#6](-[#7])=[#7+]"]),
    ("amidium", &["[!#1!#6][#6]=[#7+]"]),
    ("ammonium", &["[#7+]"]),
    ("cyclopropenium", &["[#7]-[#6]1=,:[#6](-[#7])[#6+]1-[#7]"]),
    ("cyclic sulfonium", &[
        "[#6]-1-[#6]-[#6]-[#16+]-[#6]-1",
        "[#6]-1-[#6]-[#6]-[#16+]-[#6]-[#6]-1",
    ]),
    ("sulfonium", &["[#16+]"]),
];

#[rustfmt::skip]
pub static ANION_FAMILY_PATTERNS: &[FamilyPatterns] = &[
    ("bistriflamides", &["O=S(=O)[#7-]S(=O)=O", "[#7-]S(=O)=O"]),
    ("cyclic amides", &[
        "c1c[n-]cn1", "c1cn[n-]c1", "c1nnn[n-]1",
        "c1c[n-]nn1", "c1nc[n-]n1", "c1cc[n-]c1",
    ]),
    ("methanides", &["[#6-]"]),
    ("borates", &["[#5-]"]),
    ("phosphates", &["[#15-]"]),
    ("inorganics", &[
        "[F,Cl,Br,I;-]",
        "[#8-]-[#7+](-[#8-])=O",
        "[#16-]C#N",
        "[#8-][Cl+3]([#8-])([#8-])[#8-]",
        "[#7-]=[N+]=[#7-]",
    ]),
    ("sulfates", &["[#8]S([#8-])(=O)=O"]),
    ("sulfonates", &["[#8-]S(=O)=O"]),
    ("organic phosphates", &["[#8]P([#8])([#8-])=O", "[#8]-[#15](-[#8-])=O", "[#8-]-[#15]=O"]),
    ("carboxylates", &["[#8-]-[#6]=O"]),
    ("phenolates", &["[#8-]-c:1:*:*:*:*:*:1"]),
    ("carboanions", &["[#8-]-[#6]=[#6]"]),
    ("amides", &["[#7-]"]),
];

/// Returns the first family, in iteration order, with a pattern matching `molecule`.
pub fn first_matching_family<'a, I, P>(molecule: &dyn Molecule, families: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, &'a [P])>,
    P: AsRef<str> + 'a,
{
    let family = families
        .into_iter()
        .find(|(_, patterns)| {
            patterns
                .iter()
                .any(|pattern| molecule.has_substructure_match(pattern.as_ref()))
        })
        .map(|(name, _)| name);
    debug!(?family, "Classified structure.");
    family
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChemicalFamily {
    pub name: String,
    pub patterns: Vec<String>,
}

/// An owned, ordered family table, either built in or loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FamilyTable {
    families: Vec<ChemicalFamily>,
}

impl FamilyTable {
    pub fn new(families: Vec<ChemicalFamily>) -> Self {
        Self { families }
    }

    pub fn cations() -> Self {
        Self::from_static(CATION_FAMILY_PATTERNS)
    }

    pub fn anions() -> Self {
        Self::from_static(ANION_FAMILY_PATTERNS)
    }

    fn from_static(patterns: &[FamilyPatterns]) -> Self {
        Self::new(
            patterns
                .iter()
                .map(|(name, patterns)| ChemicalFamily {
                    name: name.to_string(),
                    patterns: patterns.iter().map(|p| p.to_string()).collect(),
                })
                .collect(),
        )
    }

    pub fn families(&self) -> &[ChemicalFamily] {
        &self.families
    }

    pub fn classify(&self, molecule: &dyn Molecule) -> Option<&str> {
        first_matching_family(
            molecule,
            self.families
                .iter()
                .map(|family| (family.name.as_str(), family.patterns.as_slice())),
        )
    }
}

/// Cation and anion family tables used together during classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyTables {
    pub cation: FamilyTable,
    pub anion: FamilyTable,
}

impl Default for FamilyTables {
    fn default() -> Self {
        Self {
            cation: FamilyTable::cations(),
            anion: FamilyTable::anions(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFamilyTables {
    #[serde(default)]
    cation: Vec<ChemicalFamily>,
    #[serde(default)]
    anion: Vec<ChemicalFamily>,
}

impl FamilyTables {
    /// Loads custom tables from TOML written as `[[cation]]` and `[[anion]]`
    /// arrays. A side missing from the file keeps its built-in table.
    pub fn load(path: &Path) -> Result<Self, FamilyLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| FamilyLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            FamilyLoadError::Toml { source, .. } => FamilyLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, FamilyLoadError> {
        let raw: RawFamilyTables = toml::from_str(content).map_err(|e| FamilyLoadError::Toml {
            path: "<string>".to_string(),
            source: e,
        })?;

        if let Some(empty) = raw
            .cation
            .iter()
            .chain(raw.anion.iter())
            .find(|family| family.patterns.is_empty())
        {
            return Err(FamilyLoadError::EmptyFamily(empty.name.clone()));
        }

        let defaults = Self::default();
        Ok(Self {
            cation: if raw.cation.is_empty() {
                defaults.cation
            } else {
                FamilyTable::new(raw.cation)
            },
            anion: if raw.anion.is_empty() {
                defaults.anion
            } else {
                FamilyTable::new(raw.anion)
            },
        })
    }
}

#[derive(Debug, Error)]
pub enum FamilyLoadError {
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
    #[error("Chemical family '{0}' declares no patterns")]
    EmptyFamily(String),
}
