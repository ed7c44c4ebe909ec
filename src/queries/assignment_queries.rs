use std::collections::HashSet;

use crate::model::{Assignment, GeneratedList, Group, Id, Participant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentStats {
    pub total_assignments: usize,
    pub revealed_count: usize,
    pub unrevealed_count: usize,
    /// Distinct participants listed in at least one group.
    pub participants_with_groups: usize,
    pub participants_without_groups: usize,
}

pub fn assignment_for_giver(giver_id: Id<Participant>, assignments: &[Assignment]) -> Option<&Assignment> {
    assignments.iter().find(|a| a.giver_id == giver_id)
}

pub fn assignment_for_receiver(receiver_id: Id<Participant>, assignments: &[Assignment]) -> Option<&Assignment> {
    assignments.iter().find(|a| a.receiver_id == receiver_id)
}

pub fn assignment_stats(assignments: &[Assignment], participants: &[Participant], groups: &[Group]) -> AssignmentStats {
    let revealed_count = assignments.iter().filter(|a| a.revealed).count();

    let grouped: HashSet<Id<Participant>> = groups
        .iter()
        .flat_map(|g| g.participant_ids.iter().copied())
        .collect();

    AssignmentStats {
        total_assignments: assignments.len(),
        revealed_count,
        unrevealed_count: assignments.len() - revealed_count,
        participants_with_groups: grouped.len(),
        participants_without_groups: participants.len().saturating_sub(grouped.len()),
    }
}

/// Stats for a whole list against its own roster snapshot.
pub fn list_stats(list: &GeneratedList) -> AssignmentStats {
    assignment_stats(&list.assignments, &list.participants, &list.groups)
}

pub fn revealed(list: &GeneratedList) -> Vec<&Assignment> {
    list.assignments.iter().filter(|a| a.revealed).collect()
}

pub fn unrevealed(list: &GeneratedList) -> Vec<&Assignment> {
    list.assignments.iter().filter(|a| !a.revealed).collect()
}
