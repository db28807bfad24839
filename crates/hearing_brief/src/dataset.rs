//! Access to the bundled country table.
//!
//! The table ships inside the crate as JSON and is deserialized once on first
//! access.  It is read-only for the lifetime of the process; every consumer
//! borrows rows from the same static slice.

use std::sync::OnceLock;

use crate::model::CountryRecord;

const COUNTRIES_JSON: &str = include_str!("../data/countries.json");

static COUNTRIES: OnceLock<Vec<CountryRecord>> = OnceLock::new();

/// Returns the full country table in its published order.
///
/// The order is load-bearing: prevalence ranking breaks ties by position in
/// this slice.
pub fn countries() -> &'static [CountryRecord] {
    COUNTRIES.get_or_init(|| {
        serde_json::from_str(COUNTRIES_JSON).expect("bundled country dataset is well-formed")
    })
}

/// Looks a country up by its exact name.
pub fn find(name: &str) -> Option<&'static CountryRecord> {
    countries().iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_loads_and_is_nonempty() {
        assert_eq!(countries().len(), 204);
    }

    #[test]
    fn names_are_unique_keys() {
        let mut names: Vec<&str> = countries().iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), countries().len());
    }

    #[test]
    fn find_is_exact_match() {
        assert!(find("Japan").is_some());
        assert!(find("japan").is_none());
        assert!(find("Atlantis").is_none());
    }

    #[test]
    fn accented_names_survive_the_embedding() {
        assert!(find("Côte d'Ivoire").is_some());
        assert!(find("São Tomé and Príncipe").is_some());
    }
}
