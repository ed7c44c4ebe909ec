use std::collections::HashSet;

use crate::engine::GenerationError;
use crate::error::{SantaError, SantaResult};
use crate::model::{Group, Id, Participant};

pub const PARTICIPANT_NAME_MIN: usize = 2;
pub const PARTICIPANT_NAME_MAX: usize = 50;
pub const GROUP_NAME_MIN: usize = 2;
pub const GROUP_NAME_MAX: usize = 30;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> SantaResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(SantaError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates the character count of an already trimmed value.
pub fn length_between(value: &str, min: usize, max: usize, field: &str) -> SantaResult<()> {
    let len = value.chars().count();
    if len < min {
        Err(SantaError::TooShort {
            field: field.to_string(),
            min,
        })
    } else if len > max {
        Err(SantaError::TooLong {
            field: field.to_string(),
            max,
        })
    } else {
        Ok(())
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-' || c == '\''
}

/// Validates a new participant name against the existing roster.
/// Returns the trimmed name.
pub fn participant_name(name: &str, existing: &[Participant]) -> SantaResult<String> {
    let name = non_blank(name, "Name")?;
    length_between(&name, PARTICIPANT_NAME_MIN, PARTICIPANT_NAME_MAX, "Name")?;

    if !name.chars().all(is_name_char) {
        return Err(SantaError::InvalidCharacters {
            field: "Name".into(),
        });
    }

    let lower = name.to_lowercase();
    if existing.iter().any(|p| p.name.to_lowercase() == lower) {
        return Err(SantaError::AlreadyExists {
            entity_type: "Participant".into(),
            identifier: name,
        });
    }

    Ok(name)
}

/// Validates a new group name against the existing groups.
/// Returns the trimmed name.
pub fn group_name(name: &str, existing: &[Group]) -> SantaResult<String> {
    let name = non_blank(name, "Group name")?;
    length_between(&name, GROUP_NAME_MIN, GROUP_NAME_MAX, "Group name")?;

    let lower = name.to_lowercase();
    if existing.iter().any(|g| g.name.to_lowercase() == lower) {
        return Err(SantaError::AlreadyExists {
            entity_type: "Group".into(),
            identifier: name,
        });
    }

    Ok(name)
}

/// Checks the groups are usable for a draw: none empty, none with a single
/// member, none covering everyone, none pointing at removed participants.
pub fn group_configuration(groups: &[Group], participants: &[Participant]) -> SantaResult<()> {
    let invalid = |group: &Group, reason: &str| SantaError::InvalidGroup {
        group: group.name.clone(),
        reason: reason.to_string(),
    };

    if let Some(g) = groups.iter().find(|g| g.participant_ids.is_empty()) {
        return Err(invalid(g, "is empty. Please add participants or remove the group."));
    }

    if let Some(g) = groups.iter().find(|g| g.participant_ids.len() == 1) {
        return Err(invalid(
            g,
            "has only one member. Groups should have at least 2 members or be removed.",
        ));
    }

    let distinct = |g: &Group| g.participant_ids.iter().collect::<HashSet<_>>().len();
    if let Some(g) = groups.iter().find(|g| distinct(*g) == participants.len()) {
        return Err(invalid(
            g,
            "contains all participants. This makes it impossible to generate assignments.",
        ));
    }

    let known: HashSet<Id<Participant>> = participants.iter().map(|p| p.id).collect();
    if let Some(g) = groups
        .iter()
        .find(|g| g.participant_ids.iter().any(|id| !known.contains(id)))
    {
        return Err(invalid(g, "contains participants that no longer exist."));
    }

    Ok(())
}

pub fn minimum_participants(participants: &[Participant]) -> SantaResult<()> {
    if participants.len() < 2 {
        Err(GenerationError::InsufficientParticipants.into())
    } else {
        Ok(())
    }
}

/// Confirms the person asking to see an assignment typed the giver's name.
pub fn verification_name(input: &str, expected: &str) -> SantaResult<()> {
    let input = non_blank(input, "Your name")?;
    if input.to_lowercase() != expected.trim().to_lowercase() {
        return Err(SantaError::NameMismatch);
    }
    Ok(())
}
