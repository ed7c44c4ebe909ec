use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Someone taking part in the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Id<Participant>,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    pub fn create(name: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            created_at: Utc::now(),
        }
    }
}
