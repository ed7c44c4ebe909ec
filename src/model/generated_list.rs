use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::assignment::Assignment;
use super::group::Group;
use super::ids::Id;
use super::participant::Participant;

/// A drawn set of assignments together with the roster it was drawn from.
///
/// The roster is copied at generation time, so later edits to the live
/// participants and groups never change what a historical list means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedList {
    pub id: Id<GeneratedList>,
    pub timestamp: DateTime<Utc>,
    pub assignments: Vec<Assignment>,
    pub participants: Vec<Participant>,
    pub groups: Vec<Group>,
}

impl GeneratedList {
    pub fn create(assignments: Vec<Assignment>, participants: &[Participant], groups: &[Group]) -> Self {
        Self {
            id: Id::generate(),
            timestamp: Utc::now(),
            assignments,
            participants: participants.to_vec(),
            groups: groups.to_vec(),
        }
    }

    pub fn participant_name(&self, id: Id<Participant>) -> Option<&str> {
        self.participants
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }
}
