use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalogued movie.
///
/// Actor relations live in the store's association set, not on the entity,
/// so neither side owns the other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
}

impl Movie {
    pub fn new(title: String, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            date,
        }
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.date)
    }
}
