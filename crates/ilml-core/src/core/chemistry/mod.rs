//! # Chemistry Module
//!
//! Data model for ionic liquids and their constituent ions.
//!
//! ## Overview
//!
//! An [`ionic_liquid::IonicLiquid`] is a validated pair of one [`ion::Cation`] and one
//! [`ion::Anion`]. Every ion wraps a structure handle obtained from a molecular-structure
//! toolkit, which is consumed only through the traits in [`toolkit`]. Ions are built
//! from SMILES, canonicalized, checked for charge, and can be classified into a
//! chemical family by ordered substructure matching ([`families`]).
//!
//! ## Key Components
//!
//! - [`toolkit`] - Toolkit and structure traits, descriptor values
//! - [`ion`] - Ions and the sealed cation/anion specializations
//! - [`ionic_liquid`] - Cation/anion pairs and their aggregate properties
//! - [`families`] - Built-in and configurable chemical-family tables
//! - [`error`] - Parse and charge validation errors
//!
//! ## Usage
//!
//! ```ignore
//! use ilml::core::chemistry::{ionic_liquid::IonicLiquid, ion::IonSpecies};
//!
//! let ionic_liquid = IonicLiquid::from_smiles(&toolkit, "CCn1cc[n+](C)c1.F[B-](F)(F)F")?;
//! assert_eq!(ionic_liquid.cation.chemical_family(), Some("imidazolium"));
//! ```

pub mod error;
pub mod families;
pub mod ion;
pub mod ionic_liquid;
pub mod toolkit;

#[cfg(test)]
pub(crate) mod testing;
