use chrono::Utc;
use santa::model::*;

// ==========================================================================
// ID TESTS
// ==========================================================================

#[test]
fn id_generate_creates_unique_ids() {
    let id1 = Id::<Participant>::generate();
    let id2 = Id::<Participant>::generate();
    assert_ne!(id1, id2);
}

#[test]
fn id_is_type_safe() {
    let participant_id = Id::<Participant>::generate();
    let group_id = Id::<Group>::generate();
    // Different types at compile time; the UUIDs also differ.
    assert_ne!(participant_id.value, group_id.value);
}

// ==========================================================================
// ENTITY TESTS
// ==========================================================================

#[test]
fn participant_create_stamps_time() {
    let before = Utc::now();
    let p = Participant::create("Alice".into());
    assert_eq!(p.name, "Alice");
    assert!(p.created_at >= before);
}

#[test]
fn group_create_has_no_members() {
    let g = Group::create("Family".into());
    assert_eq!(g.name, "Family");
    assert!(g.participant_ids.is_empty());
}

#[test]
fn group_contains_checks_membership() {
    let alice = Participant::create("Alice".into());
    let bob = Participant::create("Bob".into());
    let mut g = Group::create("Couple".into());
    g.participant_ids.push(alice.id);
    assert!(g.contains(alice.id));
    assert!(!g.contains(bob.id));
}

#[test]
fn assignment_starts_hidden() {
    let a = Assignment::create(Id::generate(), Id::generate());
    assert!(!a.revealed);
    assert!(a.revealed_at.is_none());
}

#[test]
fn assignment_reveal_sets_timestamp() {
    let mut a = Assignment::create(Id::generate(), Id::generate());
    let at = Utc::now();
    a.reveal(at);
    assert!(a.revealed);
    assert_eq!(a.revealed_at, Some(at));
}

// ==========================================================================
// GENERATED LIST TESTS
// ==========================================================================

#[test]
fn generated_list_copies_roster() {
    let mut participants = vec![Participant::create("Alice".into()), Participant::create("Bob".into())];
    let assignments = vec![
        Assignment::create(participants[0].id, participants[1].id),
        Assignment::create(participants[1].id, participants[0].id),
    ];
    let list = GeneratedList::create(assignments, &participants, &[]);

    participants[0].name = "Renamed".into();
    assert_eq!(list.participants[0].name, "Alice");
    assert_eq!(list.participant_name(list.participants[1].id), Some("Bob"));
    assert_eq!(list.participant_name(Id::generate()), None);
}

#[test]
fn generated_list_json_uses_plain_ids() {
    let alice = Participant::create("Alice".into());
    let bob = Participant::create("Bob".into());
    let list = GeneratedList::create(
        vec![Assignment::create(alice.id, bob.id), Assignment::create(bob.id, alice.id)],
        &[alice.clone(), bob],
        &[],
    );

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["assignments"][0]["giver_id"], alice.id.value.to_string());
    assert_eq!(json["assignments"][0]["revealed"], false);
    assert!(json["assignments"][0]["revealed_at"].is_null());
}
