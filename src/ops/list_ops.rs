use chrono::Utc;
use tracing::info;

use crate::config::GenerationConfig;
use crate::engine;
use crate::error::{SantaError, SantaResult};
use crate::model::{Assignment, GeneratedList, Id};
use crate::session::Session;
use crate::validation;

/// Draws a new list from the live roster with the default engine settings.
pub fn generate(session: &mut Session) -> SantaResult<GeneratedList> {
    generate_with(session, &GenerationConfig::default())
}

/// Draws a new list, makes it current and records it in history.
pub fn generate_with(session: &mut Session, config: &GenerationConfig) -> SantaResult<GeneratedList> {
    validation::minimum_participants(&session.participants)?;
    if !session.groups.is_empty() {
        validation::group_configuration(&session.groups, &session.participants)?;
    }

    let result = engine::generate_assignments(&session.participants, &session.groups, config);
    let attempts = result.attempts;
    let assignments = result.into_assignments()?;

    let list = GeneratedList::create(assignments, &session.participants, &session.groups);
    info!(list = %list.id, attempts, "new list is current");

    session.current_list = Some(list.clone());
    session.history.insert(0, list.clone());
    let max = session.config.sanitized().max_history_count;
    trim_history(session, max);

    Ok(list)
}

/// Makes a history entry current again, provided it still validates against
/// its own roster snapshot.
pub fn load_from_history(session: &mut Session, list_id: Id<GeneratedList>) -> SantaResult<GeneratedList> {
    let list = session
        .history
        .iter()
        .find(|l| l.id == list_id)
        .ok_or_else(|| SantaError::NotFound {
            entity_type: "History entry".into(),
            id: list_id.to_string(),
        })?;

    if !engine::validate_assignments(&list.assignments, &list.participants, &list.groups) {
        return Err(SantaError::InvalidHistoryEntry);
    }

    let list = list.clone();
    info!(list = %list.id, "reloaded list from history");
    session.current_list = Some(list.clone());
    Ok(list)
}

/// Marks an assignment of the current list as revealed, mirroring the change
/// into the matching history entry.
pub fn reveal_assignment(session: &mut Session, assignment_id: Id<Assignment>) -> SantaResult<Assignment> {
    let current = session.current_list.as_mut().ok_or(SantaError::NoCurrentList)?;
    let assignment = current
        .assignments
        .iter_mut()
        .find(|a| a.id == assignment_id)
        .ok_or_else(|| SantaError::NotFound {
            entity_type: "Assignment".into(),
            id: assignment_id.to_string(),
        })?;

    assignment.reveal(Utc::now());
    let revealed = assignment.clone();
    let list_id = current.id;

    if let Some(entry) = session.history.iter_mut().find(|l| l.id == list_id) {
        if let Some(a) = entry.assignments.iter_mut().find(|a| a.id == assignment_id) {
            *a = revealed.clone();
        }
    }

    info!(assignment = %revealed.id, "revealed assignment");
    Ok(revealed)
}

pub fn clear_current(session: &mut Session) {
    session.current_list = None;
}

pub fn clear_history(session: &mut Session) {
    session.history.clear();
}

pub fn remove_from_history(session: &mut Session, list_id: Id<GeneratedList>) -> SantaResult<GeneratedList> {
    let index = session
        .history
        .iter()
        .position(|l| l.id == list_id)
        .ok_or_else(|| SantaError::NotFound {
            entity_type: "History entry".into(),
            id: list_id.to_string(),
        })?;
    Ok(session.history.remove(index))
}

/// Keeps only the `max_count` newest history entries.
pub fn trim_history(session: &mut Session, max_count: usize) {
    session.history.truncate(max_count);
}
