//! # Engine Module
//!
//! Featurization machinery built on top of the [`crate::core`] data model.
//!
//! ## Overview
//!
//! An [`featurizers::IonFeaturizer`] turns a single ion into named numeric
//! features. An [`ionic_liquid_featurizer::IonicLiquidFeaturizer`] runs it on both
//! ions of an ionic liquid and merges the two feature sets, either through a
//! [`combining::CombiningRule`] or by concatenating them under side-specific names.
//!
//! ## Architecture
//!
//! - **Featurizers** ([`featurizers`]) - Ion featurizer trait, registry, toolkit and tabulated featurizers
//! - **Combining Rules** ([`combining`]) - Pure two-value merge functions and their registry
//! - **Ionic Liquid Featurizer** ([`ionic_liquid_featurizer`]) - Per-ionic-liquid feature assembly
//! - **Memoization** ([`memory`]) - Thread-safe, single-flight result caches
//! - **Configuration** ([`config`]) - Featurization settings and their TOML form
//! - **Error Handling** ([`error`]) - Engine-level error aggregation
//!
//! ## Key Capabilities
//!
//! - **Structure-keyed descriptor cache** shared by every featurization in the process
//! - **Name-based registries** resolving featurizers and combining rules from configuration
//! - **Deterministic output** independent of call order or thread count

pub mod combining;
pub mod config;
pub mod error;
pub mod featurizers;
pub mod ionic_liquid_featurizer;
pub mod memory;
