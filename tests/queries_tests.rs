use chrono::Utc;
use santa::model::*;
use santa::queries::*;

fn people(names: &[&str]) -> Vec<Participant> {
    names.iter().map(|n| Participant::create(n.to_string())).collect()
}

fn group(name: &str, members: &[&Participant]) -> Group {
    let mut g = Group::create(name.into());
    g.participant_ids = members.iter().map(|p| p.id).collect();
    g
}

/// Alice → Bob → Charlie → Alice
fn ring(p: &[Participant]) -> Vec<Assignment> {
    vec![
        Assignment::create(p[0].id, p[1].id),
        Assignment::create(p[1].id, p[2].id),
        Assignment::create(p[2].id, p[0].id),
    ]
}

// ==========================================================================
// ASSIGNMENT QUERIES TESTS
// ==========================================================================

#[test]
fn finds_assignment_by_giver() {
    let p = people(&["Alice", "Bob", "Charlie"]);
    let assignments = ring(&p);
    let found = assignment_queries::assignment_for_giver(p[1].id, &assignments).unwrap();
    assert_eq!(found.receiver_id, p[2].id);
}

#[test]
fn finds_assignment_by_receiver() {
    let p = people(&["Alice", "Bob", "Charlie"]);
    let assignments = ring(&p);
    let found = assignment_queries::assignment_for_receiver(p[0].id, &assignments).unwrap();
    assert_eq!(found.giver_id, p[2].id);
}

#[test]
fn unknown_ids_find_nothing() {
    let p = people(&["Alice", "Bob", "Charlie"]);
    let assignments = ring(&p);
    assert!(assignment_queries::assignment_for_giver(Id::generate(), &assignments).is_none());
    assert!(assignment_queries::assignment_for_receiver(Id::generate(), &[]).is_none());
}

#[test]
fn stats_count_reveals_and_grouping() {
    let p = people(&["Alice", "Bob", "Charlie", "Diana", "Eve"]);
    let mut assignments = vec![
        Assignment::create(p[0].id, p[2].id),
        Assignment::create(p[1].id, p[3].id),
        Assignment::create(p[2].id, p[4].id),
        Assignment::create(p[3].id, p[0].id),
        Assignment::create(p[4].id, p[1].id),
    ];
    assignments[0].reveal(Utc::now());
    assignments[3].reveal(Utc::now());
    // Bob sits in both groups and counts once.
    let groups = vec![group("Couple", &[&p[0], &p[1]]), group("Office", &[&p[1], &p[2]])];

    let stats = assignment_queries::assignment_stats(&assignments, &p, &groups);
    assert_eq!(
        stats,
        assignment_queries::AssignmentStats {
            total_assignments: 5,
            revealed_count: 2,
            unrevealed_count: 3,
            participants_with_groups: 3,
            participants_without_groups: 2,
        }
    );
}

#[test]
fn stats_for_empty_list() {
    let stats = assignment_queries::assignment_stats(&[], &[], &[]);
    assert_eq!(stats.total_assignments, 0);
    assert_eq!(stats.participants_without_groups, 0);
}

#[test]
fn revealed_and_unrevealed_partition_the_list() {
    let p = people(&["Alice", "Bob", "Charlie"]);
    let mut assignments = ring(&p);
    assignments[1].reveal(Utc::now());
    let list = GeneratedList::create(assignments, &p, &[]);

    let revealed = assignment_queries::revealed(&list);
    let unrevealed = assignment_queries::unrevealed(&list);
    assert_eq!(revealed.len(), 1);
    assert_eq!(revealed[0].giver_id, p[1].id);
    assert_eq!(unrevealed.len(), 2);
    assert_eq!(assignment_queries::list_stats(&list).revealed_count, 1);
}

// ==========================================================================
// ROSTER QUERIES TESTS
// ==========================================================================

#[test]
fn participant_by_name_ignores_case_and_padding() {
    let p = people(&["Alice", "Bob"]);
    let found = roster_queries::participant_by_name("  bOB ", &p).unwrap();
    assert_eq!(found.id, p[1].id);
    assert!(roster_queries::participant_by_name("Bo", &p).is_none());
}

#[test]
fn find_participants_matches_partially() {
    let p = people(&["Alice", "Alicia", "Bob"]);
    let found = roster_queries::find_participants("ali", &p);
    assert_eq!(found.len(), 2);
}

#[test]
fn groups_for_participant_and_shared_membership() {
    let p = people(&["Alice", "Bob", "Charlie"]);
    let groups = vec![group("Couple", &[&p[0], &p[1]]), group("Office", &[&p[1], &p[2]])];

    assert_eq!(roster_queries::groups_for_participant(p[1].id, &groups).len(), 2);
    assert_eq!(roster_queries::groups_for_participant(p[0].id, &groups).len(), 1);
    assert!(roster_queries::in_same_group(p[0].id, p[1].id, &groups));
    assert!(!roster_queries::in_same_group(p[0].id, p[2].id, &groups));
}

#[test]
fn group_lookup_by_id_and_name() {
    let groups = vec![Group::create("Smiths".into()), Group::create("Joneses".into())];
    assert_eq!(roster_queries::group_by_id(groups[1].id, &groups).map(|g| g.name.as_str()), Some("Joneses"));
    assert_eq!(roster_queries::find_groups("smi", &groups).len(), 1);
}

#[test]
fn member_names_are_sorted_and_skip_removed() {
    let p = people(&["Zoe", "Adam", "Mia"]);
    let ghost = Participant::create("Ghost".into());
    let g = group("Family", &[&p[0], &ghost, &p[1]]);
    assert_eq!(roster_queries::member_names(&g, &p), vec!["Adam", "Zoe"]);
}
