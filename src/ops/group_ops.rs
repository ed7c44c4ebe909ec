use tracing::info;

use crate::error::{SantaError, SantaResult};
use crate::model::{Group, Id, Participant};
use crate::session::Session;
use crate::validation;

fn group_not_found(group_id: Id<Group>) -> SantaError {
    SantaError::NotFound {
        entity_type: "Group".into(),
        id: group_id.to_string(),
    }
}

pub fn create_group(session: &mut Session, name: &str) -> SantaResult<Group> {
    let valid_name = validation::group_name(name, &session.groups)?;
    let group = Group::create(valid_name);
    session.groups.push(group.clone());
    info!(group = %group.name, "created group");
    Ok(group)
}

pub fn remove_group(session: &mut Session, group_id: Id<Group>) -> SantaResult<Group> {
    let index = session
        .groups
        .iter()
        .position(|g| g.id == group_id)
        .ok_or_else(|| group_not_found(group_id))?;
    Ok(session.groups.remove(index))
}

pub fn clear_groups(session: &mut Session) {
    session.groups.clear();
}

pub fn add_member(
    session: &mut Session,
    group_id: Id<Group>,
    participant_id: Id<Participant>,
) -> SantaResult<Group> {
    if !session.participants.iter().any(|p| p.id == participant_id) {
        return Err(SantaError::NotFound {
            entity_type: "Participant".into(),
            id: participant_id.to_string(),
        });
    }

    let group = session
        .groups
        .iter_mut()
        .find(|g| g.id == group_id)
        .ok_or_else(|| group_not_found(group_id))?;

    if group.contains(participant_id) {
        return Err(SantaError::AlreadyExists {
            entity_type: "Group member".into(),
            identifier: participant_id.to_string(),
        });
    }

    group.participant_ids.push(participant_id);
    Ok(group.clone())
}

/// Removes one member. A group left with no members is deleted, in which
/// case `None` is returned.
pub fn remove_member(
    session: &mut Session,
    group_id: Id<Group>,
    participant_id: Id<Participant>,
) -> SantaResult<Option<Group>> {
    let group = session
        .groups
        .iter_mut()
        .find(|g| g.id == group_id)
        .ok_or_else(|| group_not_found(group_id))?;

    let position = group
        .participant_ids
        .iter()
        .position(|id| *id == participant_id)
        .ok_or_else(|| SantaError::NotFound {
            entity_type: "Group member".into(),
            id: participant_id.to_string(),
        })?;

    group.participant_ids.remove(position);

    if group.participant_ids.is_empty() {
        remove_group(session, group_id)?;
        return Ok(None);
    }
    Ok(Some(group.clone()))
}

/// Drops a participant from every group, deleting groups that end up empty.
/// Returns true if any group changed.
pub fn remove_participant_from_all_groups(session: &mut Session, participant_id: Id<Participant>) -> bool {
    let mut modified = false;
    for group in &mut session.groups {
        let before = group.participant_ids.len();
        group.participant_ids.retain(|id| *id != participant_id);
        modified |= group.participant_ids.len() != before;
    }
    session.groups.retain(|g| !g.participant_ids.is_empty());
    modified
}

/// Caller-side check run before a draw.
pub fn validate_groups(session: &Session) -> SantaResult<()> {
    validation::group_configuration(&session.groups, &session.participants)
}
