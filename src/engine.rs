//! Assignment engine.
//!
//! Draws a random giver → receiver permutation in which nobody gives to
//! themselves or to someone they share a group with. Each attempt walks the
//! givers (grouped participants first) over an independently shuffled receiver
//! order and takes the first admissible receiver. An attempt that dead-ends is
//! thrown away whole and the draw is retried, up to `max_attempts` times.
//! Configurations that can never succeed are rejected before any attempt.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::GenerationConfig;
use crate::model::{Assignment, Group, Id, Participant};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("At least 2 participants are required for Secret Santa")]
    InsufficientParticipants,

    #[error("Group \"{group}\" contains all participants. No valid assignments possible.")]
    GroupSpansAllParticipants { group: String },

    #[error("Participant \"{participant}\" has no valid receivers due to group constraints.")]
    NoEligibleReceivers { participant: String },

    #[error("Could not generate valid assignments after {max_attempts} attempts. Try removing some group constraints.")]
    ExhaustedAttempts { max_attempts: u32 },
}

impl GenerationError {
    /// True when no amount of retrying can succeed without changing the groups.
    pub fn is_impossible(&self) -> bool {
        matches!(
            self,
            Self::GroupSpansAllParticipants { .. } | Self::NoEligibleReceivers { .. }
        )
    }
}

/// Outcome of [`generate_assignments`] plus the number of attempts consumed.
/// Pre-check failures report zero attempts.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub outcome: Result<Vec<Assignment>, GenerationError>,
    pub attempts: u32,
}

impl GenerationResult {
    fn failed(error: GenerationError, attempts: u32) -> Self {
        Self {
            outcome: Err(error),
            attempts,
        }
    }

    pub fn success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn assignments(&self) -> Option<&[Assignment]> {
        self.outcome.as_deref().ok()
    }

    pub fn error(&self) -> Option<&GenerationError> {
        self.outcome.as_ref().err()
    }

    pub fn into_assignments(self) -> Result<Vec<Assignment>, GenerationError> {
        self.outcome
    }
}

/// Co-membership lookup: for every grouped participant, everyone they share
/// at least one group with (themselves included).
struct Exclusions {
    co_members: HashMap<Id<Participant>, HashSet<Id<Participant>>>,
}

impl Exclusions {
    fn build(groups: &[Group]) -> Self {
        let mut co_members: HashMap<Id<Participant>, HashSet<Id<Participant>>> = HashMap::new();
        for group in groups {
            for member in &group.participant_ids {
                co_members
                    .entry(*member)
                    .or_default()
                    .extend(group.participant_ids.iter().copied());
            }
        }
        Self { co_members }
    }

    fn is_grouped(&self, id: Id<Participant>) -> bool {
        self.co_members.contains_key(&id)
    }

    fn share_group(&self, a: Id<Participant>, b: Id<Participant>) -> bool {
        self.co_members
            .get(&a)
            .map_or(false, |members| members.contains(&b))
    }

    fn allows(&self, giver: Id<Participant>, receiver: Id<Participant>, config: &GenerationConfig) -> bool {
        if !config.allow_self_assignment && giver == receiver {
            return false;
        }
        if config.enforce_group_constraints && self.share_group(giver, receiver) {
            return false;
        }
        true
    }
}

/// Generates assignments using the thread-local RNG.
pub fn generate_assignments(
    participants: &[Participant],
    groups: &[Group],
    config: &GenerationConfig,
) -> GenerationResult {
    generate_assignments_with_rng(participants, groups, config, &mut rand::thread_rng())
}

pub fn generate_assignments_with_rng<R: Rng + ?Sized>(
    participants: &[Participant],
    groups: &[Group],
    config: &GenerationConfig,
    rng: &mut R,
) -> GenerationResult {
    if participants.len() < 2 {
        return GenerationResult::failed(GenerationError::InsufficientParticipants, 0);
    }

    let exclusions = Exclusions::build(groups);
    if let Err(e) = check_feasibility(participants, groups, &exclusions) {
        debug!(error = %e, "configuration rejected before drawing");
        return GenerationResult::failed(e, 0);
    }

    let givers = ordered_givers(participants, &exclusions);

    for attempt in 1..=config.max_attempts {
        let Some(assignments) = draw(&givers, participants, &exclusions, config, rng) else {
            debug!(attempt, "draw dead-ended");
            continue;
        };

        if !validate_assignments(&assignments, participants, groups) {
            warn!(attempt, "generated assignments failed validation, retrying");
            continue;
        }

        info!(
            attempts = attempt,
            participants = participants.len(),
            groups = groups.len(),
            "generated assignments"
        );
        return GenerationResult {
            outcome: Ok(assignments),
            attempts: attempt,
        };
    }

    warn!(max_attempts = config.max_attempts, "no valid draw found");
    GenerationResult::failed(
        GenerationError::ExhaustedAttempts {
            max_attempts: config.max_attempts,
        },
        config.max_attempts,
    )
}

fn check_feasibility(
    participants: &[Participant],
    groups: &[Group],
    exclusions: &Exclusions,
) -> Result<(), GenerationError> {
    for group in groups {
        let distinct: HashSet<&Id<Participant>> = group.participant_ids.iter().collect();
        if distinct.len() == participants.len() {
            return Err(GenerationError::GroupSpansAllParticipants {
                group: group.name.clone(),
            });
        }
    }

    for participant in participants {
        let has_receiver = participants
            .iter()
            .any(|p| p.id != participant.id && !exclusions.share_group(participant.id, p.id));
        if !has_receiver {
            return Err(GenerationError::NoEligibleReceivers {
                participant: participant.name.clone(),
            });
        }
    }

    Ok(())
}

/// Grouped participants first: they have the fewest admissible receivers and
/// should pick while the pool is still full. Input order is kept within each half.
fn ordered_givers<'a>(participants: &'a [Participant], exclusions: &Exclusions) -> Vec<&'a Participant> {
    let (grouped, ungrouped): (Vec<&Participant>, Vec<&Participant>) = participants
        .iter()
        .partition(|p| exclusions.is_grouped(p.id));
    grouped.into_iter().chain(ungrouped).collect()
}

fn draw<R: Rng + ?Sized>(
    givers: &[&Participant],
    participants: &[Participant],
    exclusions: &Exclusions,
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<Vec<Assignment>> {
    let mut receivers: Vec<Id<Participant>> = participants.iter().map(|p| p.id).collect();
    receivers.shuffle(rng);

    let mut used: HashSet<Id<Participant>> = HashSet::with_capacity(receivers.len());
    let mut assignments = Vec::with_capacity(givers.len());

    for giver in givers {
        let receiver = receivers
            .iter()
            .copied()
            .find(|r| !used.contains(r) && exclusions.allows(giver.id, *r, config))?;
        used.insert(receiver);
        assignments.push(Assignment::create(giver.id, receiver));
    }

    Some(assignments)
}

/// Checks a complete assignment set against the roster it claims to cover.
///
/// Pure and safe on stored lists: every participant must give exactly once
/// and receive exactly once, and no pairing may be self-to-self or inside a
/// shared group. Ids that are not in `participants` make the set invalid.
pub fn validate_assignments(assignments: &[Assignment], participants: &[Participant], groups: &[Group]) -> bool {
    if assignments.len() != participants.len() {
        return false;
    }

    let expected: HashSet<Id<Participant>> = participants.iter().map(|p| p.id).collect();
    let givers: HashSet<Id<Participant>> = assignments.iter().map(|a| a.giver_id).collect();
    let receivers: HashSet<Id<Participant>> = assignments.iter().map(|a| a.receiver_id).collect();

    if givers.len() != participants.len() || givers != expected {
        return false;
    }
    if receivers.len() != participants.len() || receivers != expected {
        return false;
    }

    let exclusions = Exclusions::build(groups);
    let rules = GenerationConfig::default();
    assignments
        .iter()
        .all(|a| exclusions.allows(a.giver_id, a.receiver_id, &rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn people(names: &[&str]) -> Vec<Participant> {
        names.iter().map(|n| Participant::create(n.to_string())).collect()
    }

    fn group(name: &str, members: &[&Participant]) -> Group {
        let mut g = Group::create(name.into());
        g.participant_ids = members.iter().map(|p| p.id).collect();
        g
    }

    #[test]
    fn exclusions_cover_every_shared_group() {
        let p = people(&["Alice", "Bob", "Charlie", "Diana"]);
        let groups = vec![group("Couple", &[&p[0], &p[1]]), group("Work", &[&p[1], &p[2]])];
        let ex = Exclusions::build(&groups);

        assert!(ex.share_group(p[0].id, p[1].id));
        assert!(ex.share_group(p[1].id, p[2].id));
        assert!(!ex.share_group(p[0].id, p[2].id));
        assert!(!ex.share_group(p[3].id, p[0].id));
        assert!(!ex.is_grouped(p[3].id));
    }

    #[test]
    fn relaxed_config_allows_self_and_group_pairs() {
        let p = people(&["Alice", "Bob"]);
        let ex = Exclusions::build(&[group("Couple", &[&p[0], &p[1]])]);
        let relaxed = GenerationConfig {
            allow_self_assignment: true,
            enforce_group_constraints: false,
            ..GenerationConfig::default()
        };

        assert!(ex.allows(p[0].id, p[1].id, &relaxed));
        assert!(ex.allows(p[0].id, p[0].id, &relaxed));
        assert!(!ex.allows(p[0].id, p[1].id, &GenerationConfig::default()));
    }

    #[test]
    fn grouped_givers_come_first_in_input_order() {
        let p = people(&["Alice", "Bob", "Charlie", "Diana", "Eve"]);
        let ex = Exclusions::build(&[group("Family", &[&p[3], &p[1]])]);
        let givers = ordered_givers(&p, &ex);
        let names: Vec<&str> = givers.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Diana", "Alice", "Charlie", "Eve"]);
    }

    #[test]
    fn feasibility_names_the_stranded_participant() {
        // Bob shares a group with everyone else.
        let p = people(&["Alice", "Bob", "Charlie"]);
        let groups = vec![group("Left", &[&p[0], &p[1]]), group("Right", &[&p[1], &p[2]])];
        let err = check_feasibility(&p, &groups, &Exclusions::build(&groups)).unwrap_err();
        assert_eq!(
            err,
            GenerationError::NoEligibleReceivers {
                participant: "Bob".into()
            }
        );
        assert!(err.is_impossible());
    }

    #[test]
    fn duplicate_member_ids_do_not_count_twice() {
        let p = people(&["Alice", "Bob", "Charlie"]);
        let mut g = group("Couple", &[&p[0], &p[1]]);
        g.participant_ids.push(p[0].id);
        let groups = vec![g];
        assert!(check_feasibility(&p, &groups, &Exclusions::build(&groups)).is_ok());
    }

    #[test]
    fn draw_is_reproducible_with_a_seed() {
        let p = people(&["Alice", "Bob", "Charlie", "Diana"]);
        let ex = Exclusions::build(&[]);
        let givers = ordered_givers(&p, &ex);
        let config = GenerationConfig::default();

        let pairs = |seed: u64| -> Vec<(Id<Participant>, Id<Participant>)> {
            let mut rng = StdRng::seed_from_u64(seed);
            draw(&givers, &p, &ex, &config, &mut rng)
                .unwrap_or_default()
                .into_iter()
                .map(|a| (a.giver_id, a.receiver_id))
                .collect()
        };
        assert_eq!(pairs(7), pairs(7));
    }

    #[test]
    fn result_accessors_reflect_outcome() {
        let failed = GenerationResult::failed(GenerationError::InsufficientParticipants, 0);
        assert!(!failed.success());
        assert!(failed.assignments().is_none());
        assert_eq!(failed.error(), Some(&GenerationError::InsufficientParticipants));
    }
}
