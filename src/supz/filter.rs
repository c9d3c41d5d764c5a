//! Case-insensitive substring filter over the supplier collection.
//!
//! Pure and total: no state, no errors, any query string is valid. Unlike
//! a ranked search, matches keep their relative order from the source
//! collection so the rendered list never reshuffles while the user types.

use crate::model::Supplier;

/// Suppliers whose name or category contains `query`, case-insensitively.
/// An empty query matches everything.
pub fn matching<'a>(suppliers: &'a [Supplier], query: &str) -> Vec<&'a Supplier> {
    if query.is_empty() {
        return suppliers.iter().collect();
    }

    let query = query.to_lowercase();
    suppliers
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&query) || s.category.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn empty_query_returns_all_in_order() {
        let store = StoreFixture::new()
            .with_supplier("Acme", "Tools")
            .with_supplier("Borealis", "Lighting")
            .with_supplier("Cobalt", "Tools")
            .store;

        let all = matching(store.suppliers(), "");
        let names: Vec<_> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Borealis", "Cobalt"]);
    }

    #[test]
    fn matches_name_case_insensitively() {
        let store = StoreFixture::new().with_supplier("Acme", "Tools").store;
        assert_eq!(matching(store.suppliers(), "ACME").len(), 1);
        assert_eq!(matching(store.suppliers(), "cme").len(), 1);
    }

    #[test]
    fn matches_category_case_insensitively() {
        let store = StoreFixture::new()
            .with_supplier("Acme", "Tools")
            .with_supplier("Borealis", "Lighting")
            .store;

        let hits = matching(store.suppliers(), "light");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Borealis");
    }

    #[test]
    fn preserves_relative_order_of_matches() {
        let store = StoreFixture::new()
            .with_supplier("Acme", "Tools")
            .with_supplier("Borealis", "Lighting")
            .with_supplier("Cobalt", "Tools")
            .store;

        let hits = matching(store.suppliers(), "tools");
        let names: Vec<_> = hits.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Cobalt"]);
    }

    #[test]
    fn no_match_returns_empty() {
        let store = StoreFixture::new().with_supplier("Acme", "Tools").store;
        assert!(matching(store.suppliers(), "zzz").is_empty());
    }

    #[test]
    fn special_characters_are_plain_text() {
        let store = StoreFixture::new()
            .with_supplier("O'Neil & Sons", "Piping")
            .store;

        assert_eq!(matching(store.suppliers(), "'n").len(), 1);
        assert_eq!(matching(store.suppliers(), "& sons").len(), 1);
        assert!(matching(store.suppliers(), ".*").is_empty());
    }
}
