use crate::data::QUANTITIES;
use mensura_dimension::DimensionVector;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// One registered physical quantity.
///
/// `name` is the primary lookup key. `aliases` and `symbols` exist for
/// free-text search only; [`QuantityRegistry::resolve`] matches primary
/// names exclusively.
#[derive(Debug, Clone, Copy)]
pub struct QuantityDef {
    pub name: &'static str,
    pub dimension: DimensionVector,
    pub units: &'static [&'static str],
    pub aliases: &'static [&'static str],
    pub symbols: &'static [&'static str],
}

/// Read-only index over the static quantity table.
pub struct QuantityRegistry {
    by_name: HashMap<&'static str, &'static QuantityDef>,
}

static REGISTRY: Lazy<QuantityRegistry> = Lazy::new(QuantityRegistry::build);

/// The process-wide registry, built on first use.
pub fn registry() -> &'static QuantityRegistry {
    &REGISTRY
}

impl QuantityRegistry {
    fn build() -> Self {
        let mut by_name = HashMap::with_capacity(QUANTITIES.len());
        for def in QUANTITIES {
            by_name.insert(def.name, def);
        }
        Self { by_name }
    }

    /// Look up a quantity's dimension by primary name. Case-insensitive and
    /// whitespace-insensitive: `"Angular Velocity"` resolves the
    /// `angularvelocity` entry.
    pub fn resolve(&self, name: &str) -> Option<DimensionVector> {
        let key: String = name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        self.by_name.get(key.as_str()).map(|def| def.dimension)
    }

    /// Conventional unit strings across every quantity with exactly the
    /// given dimension, deduplicated, in table order.
    pub fn units_for(&self, dimension: DimensionVector) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        let mut units = Vec::new();
        for def in QUANTITIES {
            if def.dimension != dimension {
                continue;
            }
            for unit in def.units {
                if seen.insert(*unit) {
                    units.push(*unit);
                }
            }
        }
        units
    }

    /// Primary names of every quantity with exactly the given dimension.
    pub fn names_for(&self, dimension: DimensionVector) -> Vec<&'static str> {
        QUANTITIES
            .iter()
            .filter(|def| def.dimension == dimension)
            .map(|def| def.name)
            .collect()
    }

    /// Case-insensitive substring search over names, aliases, symbols and
    /// unit strings.
    pub fn search(&self, query: &str) -> Vec<&'static QuantityDef> {
        let needle = query.to_lowercase();
        QUANTITIES
            .iter()
            .filter(|def| {
                def.name.to_lowercase().contains(&needle)
                    || def
                        .aliases
                        .iter()
                        .any(|alias| alias.to_lowercase().contains(&needle))
                    || def
                        .symbols
                        .iter()
                        .any(|symbol| symbol.to_lowercase().contains(&needle))
                    || def
                        .units
                        .iter()
                        .any(|unit| unit.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Every registered quantity, in table order.
    pub fn all(&self) -> impl Iterator<Item = &'static QuantityDef> {
        QUANTITIES.iter()
    }
}
