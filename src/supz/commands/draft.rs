use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Field;
use crate::store::SupplierStore;

/// Set one required text field on the draft. Never fails; any value is
/// accepted, validation happens at commit time.
pub fn set(store: &mut SupplierStore, field: Field, value: String) -> Result<CmdResult> {
    store.set_field(field, value);
    Ok(CmdResult::default().with_draft(store.draft().clone()))
}

/// Snapshot the current draft for display.
pub fn show(store: &SupplierStore) -> Result<CmdResult> {
    Ok(CmdResult::default().with_draft(store.draft().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_updates_single_field() {
        let mut store = SupplierStore::new();
        let result = set(&mut store, Field::Name, "Acme".into()).unwrap();

        let draft = result.draft.unwrap();
        assert_eq!(draft.name, "Acme");
        assert_eq!(draft.address, "");
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = SupplierStore::new();
        set(&mut store, Field::Category, "Tools".into()).unwrap();
        set(&mut store, Field::Category, "Hardware".into()).unwrap();

        assert_eq!(store.draft().category, "Hardware");
    }

    #[test]
    fn set_accepts_empty_value() {
        let mut store = SupplierStore::new();
        set(&mut store, Field::Name, "Acme".into()).unwrap();
        set(&mut store, Field::Name, String::new()).unwrap();

        assert_eq!(store.draft().name, "");
    }

    #[test]
    fn show_reflects_draft_state() {
        let mut store = SupplierStore::new();
        store.set_field(Field::Contact, "555-0100".into());

        let result = show(&store).unwrap();
        assert_eq!(result.draft.unwrap().contact, "555-0100");
    }
}
