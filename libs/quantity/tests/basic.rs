use mensura_dimension::DimensionVector;
use mensura_quantity::registry;

#[test]
fn resolve_is_case_insensitive() {
    assert_eq!(registry().resolve("Force"), Some(DimensionVector::FORCE));
    assert_eq!(registry().resolve("FORCE"), Some(DimensionVector::FORCE));
}

#[test]
fn resolve_ignores_whitespace() {
    assert_eq!(
        registry().resolve("angular velocity"),
        Some(DimensionVector::FREQUENCY)
    );
}

#[test]
fn resolve_misses_unknown_names() {
    assert_eq!(registry().resolve("flux capacitance"), None);
}

#[test]
fn resolve_matches_primary_names_only() {
    // "newton" is an alias of force, not a primary name.
    assert_eq!(registry().resolve("newton"), None);
}

#[test]
fn units_for_force_includes_newton() {
    let units = registry().units_for(DimensionVector::FORCE);
    assert!(units.contains(&"N"));
    // weight and force share the dimension; units are deduplicated
    assert_eq!(units.iter().filter(|u| **u == "N").count(), 1);
}

#[test]
fn names_for_energy_dimension() {
    let names = registry().names_for(DimensionVector::ENERGY);
    assert!(names.contains(&"energy"));
    assert!(names.contains(&"work"));
    assert!(names.contains(&"heat"));
    // torque has the same dimension only as N·m, which is the same vector
    assert!(names.contains(&"torque"));
}

#[test]
fn search_finds_by_substring() {
    let hits = registry().search("velo");
    assert!(hits.iter().any(|def| def.name == "velocity"));
    assert!(hits.iter().any(|def| def.name == "angularvelocity"));
}

#[test]
fn search_covers_aliases_and_units() {
    assert!(registry().search("horsepower").iter().any(|d| d.name == "power"));
    assert!(registry().search("kWh").iter().any(|d| d.name == "energy"));
}

#[test]
fn all_is_nonempty_and_stable() {
    let count = registry().all().count();
    assert!(count > 60);
    assert_eq!(registry().all().next().map(|d| d.name), Some("length"));
}
