//! # Core Module
//!
//! Stateless building blocks of ILML: the ion and ionic-liquid data model, the
//! molecular-structure toolkit boundary, and chemical-family classification.
//!
//! ## Architecture
//!
//! - **Chemistry** ([`chemistry`]) - Ions, ionic liquids, family tables, and the toolkit traits
//!
//! Nothing in this layer caches or aggregates; featurization lives in
//! [`crate::engine`].

pub mod chemistry;
