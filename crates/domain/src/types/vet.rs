//! Vet and specialty entities

use serde::{Deserialize, Serialize};

/// A veterinarian record with a set of specialties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vet {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    /// Specialties held by this vet, ordered by name.
    pub specialties: Vec<Specialty>,
}

impl Vet {
    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}

/// Shared reference data describing a veterinary specialty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: Option<i64>,
    pub name: String,
}
