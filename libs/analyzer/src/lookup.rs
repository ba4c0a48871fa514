//! Quantity lookup trait for injected name resolution
//!
//! The analyzer never owns quantity data; it resolves identifiers through
//! this read-only capability. Implementations exist for the
//! [`mensura_quantity`] registry and, in tests, for fixed fake tables.

use mensura_dimension::DimensionVector;
use mensura_quantity::QuantityRegistry;

/// Read-only access to a quantity database.
///
/// Only [`resolve`](QuantityLookup::resolve) is consumed during analysis;
/// `units_for` and `names_for` exist for presentation layers describing an
/// analysis result.
///
/// # Example
///
/// ```
/// use mensura_analyzer::QuantityLookup;
/// use mensura_dimension::DimensionVector;
///
/// struct FakeTable;
///
/// impl QuantityLookup for FakeTable {
///     fn resolve(&self, name: &str) -> Option<DimensionVector> {
///         match name.to_lowercase().as_str() {
///             "mass" => Some(DimensionVector::MASS),
///             _ => None,
///         }
///     }
///
///     fn units_for(&self, _dimension: DimensionVector) -> Vec<String> {
///         Vec::new()
///     }
///
///     fn names_for(&self, _dimension: DimensionVector) -> Vec<String> {
///         Vec::new()
///     }
/// }
/// ```
pub trait QuantityLookup {
    /// Resolve a quantity's primary name to its dimension.
    ///
    /// Expected to be case-insensitive and whitespace-insensitive; returns
    /// `None` for unknown names.
    fn resolve(&self, name: &str) -> Option<DimensionVector>;

    /// Conventional unit strings for quantities of the given dimension.
    fn units_for(&self, dimension: DimensionVector) -> Vec<String>;

    /// Primary quantity names registered with the given dimension.
    fn names_for(&self, dimension: DimensionVector) -> Vec<String>;
}

impl QuantityLookup for QuantityRegistry {
    fn resolve(&self, name: &str) -> Option<DimensionVector> {
        QuantityRegistry::resolve(self, name)
    }

    fn units_for(&self, dimension: DimensionVector) -> Vec<String> {
        QuantityRegistry::units_for(self, dimension)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn names_for(&self, dimension: DimensionVector) -> Vec<String> {
        QuantityRegistry::names_for(self, dimension)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
