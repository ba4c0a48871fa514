#![forbid(unsafe_code)]

//! Physical-quantity database.
//!
//! A read-only registry of named physical quantities, each carrying its
//! [`DimensionVector`](mensura_dimension::DimensionVector), conventional unit
//! strings, aliases and symbols. Lookup by primary name is case- and
//! whitespace-insensitive; reverse lookup finds every quantity registered
//! with an exact dimension; free-text search covers names, aliases, symbols
//! and units.

mod data;
mod registry;

pub use registry::{registry, QuantityDef, QuantityRegistry};
