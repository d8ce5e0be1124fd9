//! Visit entity

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A dated clinical encounter record for one pet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    pub id: Option<i64>,
    pub pet_id: Option<i64>,
    pub date: NaiveDate,
    pub description: String,
}

impl Visit {
    /// Create a new visit dated today.
    pub fn new() -> Self {
        Self {
            id: None,
            pet_id: None,
            date: Utc::now().date_naive(),
            description: String::new(),
        }
    }
}

impl Default for Visit {
    fn default() -> Self {
        Self::new()
    }
}
