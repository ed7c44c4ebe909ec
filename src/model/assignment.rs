use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::participant::Participant;

/// One giver → receiver pairing inside a generated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Id<Assignment>,
    pub giver_id: Id<Participant>,
    pub receiver_id: Id<Participant>,
    pub revealed: bool,
    pub revealed_at: Option<DateTime<Utc>>,
}

impl Assignment {
    pub fn create(giver_id: Id<Participant>, receiver_id: Id<Participant>) -> Self {
        Self {
            id: Id::generate(),
            giver_id,
            receiver_id,
            revealed: false,
            revealed_at: None,
        }
    }

    pub fn reveal(&mut self, at: DateTime<Utc>) {
        self.revealed = true;
        self.revealed_at = Some(at);
    }
}
