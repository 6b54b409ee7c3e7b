//! # Workflows Module
//!
//! High-level entry points that run a complete featurization over a batch of
//! ionic-liquid records.
//!
//! ## Overview
//!
//! A workflow resolves its components from a [`crate::engine::config::FeaturizationConfig`],
//! validates and de-duplicates the input records, classifies each ionic liquid into
//! cation and anion families, and featurizes the survivors in parallel. Records
//! that fail validation are reported rather than aborting the batch.
//!
//! ## Available Workflows
//!
//! - [`featurize`] - Batch featurization of ionic-liquid SMILES
//!
//! ## Usage
//!
//! ```ignore
//! use ilml::engine::config::FeaturizationConfigBuilder;
//! use ilml::workflows::featurize;
//!
//! let config = FeaturizationConfigBuilder::new()
//!     .ion_featurizer("descriptors")
//!     .combining_rule("mean")
//!     .build()?;
//! let report = featurize::run(&toolkit, &["CCn1cc[n+](C)c1.F[B-](F)(F)F"], &config)?;
//! ```

pub mod featurize;
