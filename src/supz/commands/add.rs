use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SupplierStore;

/// Commit the draft: validate, append a new supplier, reset the draft.
/// Fails with `MissingField` when any required field is empty, leaving
/// both the collection and the draft untouched.
pub fn run(store: &mut SupplierStore, placeholder: &str) -> Result<CmdResult> {
    let supplier = store.commit(placeholder)?;

    let mut result = CmdResult::default().with_draft(store.draft().clone());
    result.add_message(CmdMessage::success(format!(
        "Added \"{}\" ({})",
        supplier.name, supplier.category
    )));
    result.added = Some(supplier);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SupzError;
    use crate::model::Field;

    const PLACEHOLDER: &str = "builtin://test-placeholder";

    fn store_with_full_draft() -> SupplierStore {
        let mut store = SupplierStore::new();
        store.set_field(Field::Name, "Acme".into());
        store.set_field(Field::Address, "1 Main St".into());
        store.set_field(Field::Contact, "555-0100".into());
        store.set_field(Field::Category, "Tools".into());
        store
    }

    #[test]
    fn adds_supplier_and_reports_success() {
        let mut store = store_with_full_draft();
        let result = run(&mut store, PLACEHOLDER).unwrap();

        assert_eq!(store.suppliers().len(), 1);
        let added = result.added.unwrap();
        assert_eq!(added.name, "Acme");
        assert_eq!(added.image, PLACEHOLDER);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("Acme"));
    }

    #[test]
    fn returned_draft_snapshot_is_reset() {
        let mut store = store_with_full_draft();
        let result = run(&mut store, PLACEHOLDER).unwrap();
        assert!(result.draft.unwrap().is_empty());
    }

    #[test]
    fn missing_field_fails_without_side_effects() {
        let mut store = store_with_full_draft();
        store.set_field(Field::Address, String::new());

        let err = run(&mut store, PLACEHOLDER).unwrap_err();
        assert!(matches!(err, SupzError::MissingField("address")));
        assert_eq!(store.suppliers().len(), 0);
        assert_eq!(store.draft().name, "Acme");
    }

    #[test]
    fn empty_draft_reports_first_missing_field() {
        let mut store = SupplierStore::new();
        let err = run(&mut store, PLACEHOLDER).unwrap_err();
        assert!(matches!(err, SupzError::MissingField("name")));
    }
}
