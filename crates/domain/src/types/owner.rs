//! Owner entity
//!
//! A clinic customer record that owns pets. The validated fields
//! (`first_name`, `telephone`) are private and mutated through setters
//! that silently discard invalid input.

use serde::{Deserialize, Serialize};

use crate::types::Pet;
use crate::validation;

/// A clinic customer record that owns pets.
///
/// `id` is `None` until the owner is persisted for the first time; the
/// storage layer assigns it once and it is immutable afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Owner {
    pub id: Option<i64>,
    first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    telephone: String,
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Create a blank, unpersisted owner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage-layer constructor. Values read back from the database are
    /// trusted as already validated and bypass the setter rules.
    pub fn from_parts(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            telephone: telephone.into(),
            pets: Vec::new(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Set the first name. Input that fails the letters-only rule is
    /// silently discarded and the field keeps its previous value.
    pub fn set_first_name(&mut self, value: &str) {
        if validation::valid_first_name(value) {
            self.first_name = value.to_owned();
        }
    }

    pub fn telephone(&self) -> &str {
        &self.telephone
    }

    /// Set the telephone number. Non-numeric or implausibly short or long
    /// input is silently discarded.
    pub fn set_telephone(&mut self, value: &str) {
        if validation::valid_telephone(value) {
            self.telephone = value.to_owned();
        }
    }

    /// Attach a pet to this owner, wiring the back reference when the
    /// owner already has an id.
    pub fn add_pet(&mut self, mut pet: Pet) {
        pet.owner_id = self.id;
        self.pets.push(pet);
    }
}
