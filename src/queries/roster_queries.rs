use crate::model::{Group, Id, Participant};

pub fn participant_by_id(id: Id<Participant>, participants: &[Participant]) -> Option<&Participant> {
    participants.iter().find(|p| p.id == id)
}

/// Exact, case-insensitive name lookup.
pub fn participant_by_name<'a>(name: &str, participants: &'a [Participant]) -> Option<&'a Participant> {
    let name = name.trim();
    participants.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Partial, case-insensitive name search.
pub fn find_participants<'a>(query: &str, participants: &'a [Participant]) -> Vec<&'a Participant> {
    let lower = query.trim().to_lowercase();
    participants
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&lower))
        .collect()
}

pub fn group_by_id(id: Id<Group>, groups: &[Group]) -> Option<&Group> {
    groups.iter().find(|g| g.id == id)
}

pub fn find_groups<'a>(query: &str, groups: &'a [Group]) -> Vec<&'a Group> {
    let lower = query.trim().to_lowercase();
    groups
        .iter()
        .filter(|g| g.name.to_lowercase().contains(&lower))
        .collect()
}

pub fn groups_for_participant(participant_id: Id<Participant>, groups: &[Group]) -> Vec<&Group> {
    groups.iter().filter(|g| g.contains(participant_id)).collect()
}

pub fn in_same_group(a: Id<Participant>, b: Id<Participant>, groups: &[Group]) -> bool {
    groups.iter().any(|g| g.contains(a) && g.contains(b))
}

/// Member names of a group, sorted, skipping ids no longer on the roster.
pub fn member_names<'a>(group: &Group, participants: &'a [Participant]) -> Vec<&'a str> {
    let mut names: Vec<&str> = group
        .participant_ids
        .iter()
        .filter_map(|id| participant_by_id(*id, participants))
        .map(|p| p.name.as_str())
        .collect();
    names.sort_unstable();
    names
}
