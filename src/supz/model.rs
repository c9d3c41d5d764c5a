use crate::error::SupzError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A committed supplier record. Immutable once created; the collection is
/// append-only and never updates or removes entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub address: String,
    pub contact: String,
    pub category: String,
    /// URI of the supplier's image. Always set: the placeholder reference
    /// is substituted at commit time when no image was selected.
    pub image: String,
}

impl Supplier {
    pub fn new(
        name: String,
        address: String,
        contact: String,
        category: String,
        image: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name,
            address,
            contact,
            category,
            image,
        }
    }
}

/// One of the four required text fields on a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Address,
    Contact,
    Category,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Address, Field::Contact, Field::Category];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::Contact => "contact",
            Field::Category => "category",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = SupzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "address" => Ok(Field::Address),
            "contact" => Ok(Field::Contact),
            "category" => Ok(Field::Category),
            other => Err(SupzError::Api(format!("unknown field: {}", other))),
        }
    }
}

/// The in-progress, uncommitted form state. There is exactly one draft per
/// store; it is reset after every successful commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub category: String,
    pub image: Option<String>,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Contact => &self.contact,
            Field::Category => &self.category,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Address => self.address = value,
            Field::Contact => self.contact = value,
            Field::Category => self.category = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty()) && self.image.is_none()
    }

    pub fn clear(&mut self) {
        *self = Draft::default();
    }
}
