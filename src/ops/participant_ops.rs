use tracing::info;

use crate::error::{SantaError, SantaResult};
use crate::model::{Id, Participant};
use crate::ops::group_ops;
use crate::session::Session;
use crate::validation;

pub fn add_participant(session: &mut Session, name: &str) -> SantaResult<Participant> {
    let valid_name = validation::participant_name(name, &session.participants)?;
    let participant = Participant::create(valid_name);
    session.participants.push(participant.clone());
    info!(participant = %participant.name, "added participant");
    Ok(participant)
}

/// Removes a participant and drops them from every group.
pub fn remove_participant(session: &mut Session, participant_id: Id<Participant>) -> SantaResult<Participant> {
    let index = session
        .participants
        .iter()
        .position(|p| p.id == participant_id)
        .ok_or_else(|| SantaError::NotFound {
            entity_type: "Participant".into(),
            id: participant_id.to_string(),
        })?;

    let removed = session.participants.remove(index);
    group_ops::remove_participant_from_all_groups(session, participant_id);
    info!(participant = %removed.name, "removed participant");
    Ok(removed)
}

/// Clears the roster. Groups cannot outlive their members, so they go too.
pub fn clear_participants(session: &mut Session) {
    session.participants.clear();
    group_ops::clear_groups(session);
}
