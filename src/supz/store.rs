//! # Registry State
//!
//! [`SupplierStore`] is the single owner of all mutable registry state:
//! the committed supplier collection plus the one in-progress [`Draft`].
//! Nothing else mutates either; every change goes through the enumerable
//! operations below, so there is no ambient global state anywhere in the
//! crate.
//!
//! The collection is append-only and insertion-ordered. Committed records
//! are never updated or deleted, and nothing is persisted: the store lives
//! and dies with the process.

use crate::error::{Result, SupzError};
use crate::model::{Draft, Field, Supplier};

#[derive(Debug, Default)]
pub struct SupplierStore {
    suppliers: Vec<Supplier>,
    draft: Draft,
}

impl SupplierStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed suppliers, in insertion order.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Set one of the four required text fields on the draft.
    /// Unconditional; any string value is accepted here.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    pub fn set_image(&mut self, uri: String) {
        self.draft.image = Some(uri);
    }

    pub fn clear_image(&mut self) {
        self.draft.image = None;
    }

    /// Validate the draft and append it to the collection as a new supplier.
    ///
    /// All four text fields must be non-empty as typed (no trimming, so
    /// whitespace-only input counts as filled). On the first empty field
    /// this fails with [`SupzError::MissingField`] and neither the
    /// collection nor the draft changes.
    ///
    /// On success the new record gets a fresh id, the draft's image or
    /// `placeholder` when none was selected, and the draft is reset.
    /// Committing the same field values twice yields two records with
    /// distinct ids; there is no dedup.
    pub fn commit(&mut self, placeholder: &str) -> Result<Supplier> {
        for field in Field::ALL {
            if self.draft.get(field).is_empty() {
                return Err(SupzError::MissingField(field.as_str()));
            }
        }

        let draft = std::mem::take(&mut self.draft);
        let supplier = Supplier::new(
            draft.name,
            draft.address,
            draft.contact,
            draft.category,
            draft.image.unwrap_or_else(|| placeholder.to_string()),
        );
        self.suppliers.push(supplier.clone());
        Ok(supplier)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::config::DEFAULT_PLACEHOLDER_IMAGE;

    pub struct StoreFixture {
        pub store: SupplierStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: SupplierStore::new(),
            }
        }

        pub fn with_supplier(mut self, name: &str, category: &str) -> Self {
            self.store.set_field(Field::Name, name.to_string());
            self.store
                .set_field(Field::Address, format!("{} HQ", name));
            self.store.set_field(Field::Contact, "555-0000".to_string());
            self.store.set_field(Field::Category, category.to_string());
            self.store.commit(DEFAULT_PLACEHOLDER_IMAGE).unwrap();
            self
        }

        pub fn with_suppliers(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_supplier(
                    &format!("Supplier {}", i + 1),
                    &format!("Category {}", i + 1),
                );
            }
            self
        }
    }
}
