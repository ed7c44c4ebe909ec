use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::participant::Participant;

/// A set of participants who must not draw each other (a couple, a household).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Id<Group>,
    pub name: String,
    pub participant_ids: Vec<Id<Participant>>,
    pub created_at: DateTime<Utc>,
}

impl Group {
    pub fn create(name: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            participant_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn contains(&self, participant_id: Id<Participant>) -> bool {
        self.participant_ids.contains(&participant_id)
    }
}
