//! # ILML Core Library
//!
//! Featurization of ionic liquids for machine-learning models: every ionic liquid
//! (one cation paired with one anion) is turned into a deterministic mapping from
//! feature names to numbers.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that chemistry, featurization
//! and batch orchestration stay independent of each other.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Ion`, `Cation`, `Anion`,
//!   `IonicLiquid`), chemical-family tables, and the traits through which an external
//!   molecular-structure toolkit is consumed.
//!
//! - **[`engine`]: The Featurization Core.** Ion featurizers, combining rules, the
//!   ionic-liquid featurizer, the process-wide descriptor cache, and configuration.
//!
//! - **[`workflows`]: The Public API.** Batch entry points that validate records,
//!   classify them, and featurize them in parallel.

pub mod core;
pub mod engine;
pub mod workflows;
