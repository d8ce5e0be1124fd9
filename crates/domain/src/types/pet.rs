//! Pet and pet type entities

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Visit;
use crate::validation;

/// An animal record belonging to one owner, typed by [`PetType`], with a
/// history of visits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pet {
    pub id: Option<i64>,
    pub name: String,
    birth_date: Option<NaiveDate>,
    pub pet_type: PetType,
    pub owner_id: Option<i64>,
    pub visits: Vec<Visit>,
}

impl Pet {
    /// Create a blank, unpersisted pet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage-layer constructor. Values read back from the database are
    /// trusted as already validated and bypass the setter rules.
    pub fn from_parts(
        id: i64,
        name: impl Into<String>,
        birth_date: Option<NaiveDate>,
        pet_type: PetType,
        owner_id: Option<i64>,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            birth_date,
            pet_type,
            owner_id,
            visits: Vec::new(),
        }
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Set the birth date. Dates outside the plausible window (before the
    /// 1900 floor or after today) are silently discarded.
    pub fn set_birth_date(&mut self, date: NaiveDate) {
        if validation::valid_birth_date(date, Utc::now().date_naive()) {
            self.birth_date = Some(date);
        }
    }

    /// Attach a visit to this pet, wiring the back reference when the pet
    /// already has an id.
    pub fn add_visit(&mut self, mut visit: Visit) {
        visit.pet_id = self.id;
        self.visits.push(visit);
    }
}

/// Shared reference data describing the kind of animal a pet is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetType {
    pub id: Option<i64>,
    pub name: String,
}
