use recordbook::{
    core::store::RecordStore,
    error::{StoreError, ValidationError},
    record::RecordDraft,
    ticket::{self, Ticket},
    types::{TicketStatus, TicketType},
};
use serde_json::json;

fn draft(value: serde_json::Value) -> RecordDraft {
    value.as_object().cloned().expect("draft must be an object")
}

fn t100() -> RecordDraft {
    draft(json!({"id": "T100", "title": "Test", "type": "technical", "priority": 2, "status": "new"}))
}

#[test]
fn seeds_contain_expected_ids() {
    let (tickets, escalated) = ticket::initialize();
    let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["T001", "T002", "T003", "T004", "T005"]);
    let ids: Vec<&str> = escalated.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["E001", "E002"]);
}

#[test]
fn add_then_remove_restores_store() {
    let (mut tickets, _) = ticket::initialize();
    tickets.add(&t100()).unwrap();
    assert_eq!(tickets.len(), 6);

    let expected = Ticket::new("T100", "Test", TicketType::Technical, 2, TicketStatus::New);
    assert_eq!(tickets.get(5), Some(&expected));

    let removed = tickets.remove(5).unwrap();
    assert_eq!(removed, expected);
    assert_eq!(tickets.len(), 5);
}

#[test]
fn add_to_empty_and_remove_only_record() {
    let mut tickets = RecordStore::<Ticket>::new();
    tickets.add(&t100()).unwrap();
    assert_eq!(tickets.len(), 1);
    let removed = tickets.remove(0).unwrap();
    assert!(tickets.is_empty());
    assert_eq!(removed.id, "T100");
}

#[test]
fn invalid_drafts_are_rejected_without_mutation() {
    let (mut tickets, _) = ticket::initialize();
    let bad = [
        json!({"id": "X999", "title": "Invalid"}),
        json!({"id": "T999", "title": "Invalid", "type": "invalid_type", "priority": 2, "status": "new"}),
        json!({"id": "T999", "title": "Invalid", "type": "technical", "priority": 10, "status": "new"}),
        json!({"id": "T999", "title": "Invalid", "type": "technical", "priority": 2, "status": "invalid_status"}),
        json!({"id": "T999", "title": "Invalid", "type": "technical", "priority": "2", "status": "new"}),
    ];
    for value in bad {
        let err = tickets.add(&draft(value)).unwrap_err();
        assert!(err.is_validation(), "unexpected {err:?}");
    }
    assert_eq!(tickets.len(), 5);
}

#[test]
fn missing_field_is_named() {
    let mut tickets = RecordStore::<Ticket>::new();
    let err = tickets
        .add(&draft(json!({"id": "X999", "title": "Invalid"})))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(ValidationError::MissingField { field: "type" })
    );
}

#[test]
fn remove_out_of_range() {
    let (mut tickets, _) = ticket::initialize();
    let err = tickets.remove(tickets.len() + 5).unwrap_err();
    assert_eq!(err, StoreError::IndexOutOfRange { index: 10, len: 5 });
}

#[test]
fn sort_by_priority_and_id() {
    let (mut tickets, _) = ticket::initialize();
    tickets.sort("priority").unwrap();
    let priorities: Vec<u8> = tickets.iter().map(|t| t.priority).collect();
    assert_eq!(priorities, [1, 2, 2, 3, 4]);
    // T002 and T003 tie on priority and keep their seed order.
    assert_eq!(tickets.get(1).unwrap().id, "T002");
    assert_eq!(tickets.get(2).unwrap().id, "T003");

    tickets.sort("id").unwrap();
    let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn sort_rejects_unknown_key() {
    let (mut tickets, _) = ticket::initialize();
    let before = tickets.clone();
    let err = tickets.sort("invalid_key").unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(ValidationError::UnknownSortKey("invalid_key".into()))
    );
    assert_eq!(tickets, before);
    assert!(RecordStore::<Ticket>::new().sort("id").unwrap().is_empty());
}

#[test]
fn filters_by_type_status_and_keyword() {
    let (tickets, _) = ticket::initialize();

    let technical = tickets.filter("type", "technical").unwrap();
    assert!(!technical.is_empty());
    assert!(technical.iter().all(|t| t.kind == TicketType::Technical));

    let open = tickets.filter("status", "open").unwrap();
    assert_eq!(open.len(), 2);
    assert!(open.iter().all(|t| t.status == TicketStatus::Open));

    let payment = tickets.filter("keyword", "PAYMENT").unwrap();
    let ids: Vec<&str> = payment.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["T002", "T005"]);

    assert!(tickets.filter("invalid_filter", "value").unwrap_err().is_validation());
    assert!(tickets.filter("status", "pending").unwrap_err().is_validation());
    assert!(
        RecordStore::<Ticket>::new()
            .filter("type", "technical")
            .unwrap()
            .is_empty()
    );
}

#[test]
fn priority_lookup_checks_level() {
    let (tickets, _) = ticket::initialize();
    let critical = ticket::by_priority(&tickets, 1).unwrap();
    assert!(critical.iter().all(|t| t.priority == 1));
    let low = ticket::by_priority(&tickets, 4).unwrap();
    assert_eq!(low.len(), 1);

    assert!(ticket::by_priority(&tickets, 0).unwrap_err().is_validation());
    assert!(ticket::by_priority(&tickets, 5).unwrap_err().is_validation());
}

#[test]
fn combine_keeps_both_orders() {
    let (tickets, escalated) = ticket::initialize();
    let combined = tickets.combine(&escalated);
    assert_eq!(combined.len(), 7);
    assert_eq!(&combined.records()[..5], tickets.records());
    assert_eq!(&combined.records()[5..], escalated.records());

    assert_eq!(RecordStore::new().combine(&escalated), escalated);
}

#[test]
fn update_status_and_priority() {
    let (mut tickets, _) = ticket::initialize();

    let err = tickets.update_field(0, "status", "invalid_status").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(tickets.get(0).unwrap().status, TicketStatus::Open);

    let updated = tickets.update_field(0, "status", "resolved").unwrap();
    assert_eq!(updated.status, TicketStatus::Resolved);

    let last = tickets.len() - 1;
    tickets.update_field(last, "status", "closed").unwrap();
    assert_eq!(tickets.get(last).unwrap().status, TicketStatus::Closed);

    let updated = tickets.update_field(1, "priority", "3").unwrap();
    assert_eq!(updated.priority, 3);
}

#[test]
fn update_rejections() {
    let (mut tickets, _) = ticket::initialize();
    let before = tickets.clone();

    assert!(tickets.update_field(10, "status", "resolved").unwrap_err().is_index_out_of_range());
    assert!(tickets.update_field(0, "priority", "10").unwrap_err().is_validation());
    assert!(tickets.update_field(0, "priority", "high").unwrap_err().is_validation());
    assert_eq!(
        tickets.update_field(0, "id", "T999").unwrap_err(),
        StoreError::Validation(ValidationError::NotUpdatable("id"))
    );
    assert_eq!(
        tickets.update_field(0, "owner", "me").unwrap_err(),
        StoreError::Validation(ValidationError::UnknownField("owner".into()))
    );
    assert_eq!(tickets, before);
}

#[test]
fn duplicate_makes_independent_copies() {
    let (tickets, _) = ticket::initialize();
    let mut copies = tickets.duplicate(2, 3).unwrap();
    assert_eq!(copies.len(), 3);
    assert!(copies.iter().all(|c| c == tickets.get(2).unwrap()));

    copies[0].title.push_str(" (copy)");
    assert_ne!(copies[0], copies[1]);
    assert_eq!(copies[1], *tickets.get(2).unwrap());

    assert!(tickets.duplicate(9, 1).unwrap_err().is_index_out_of_range());
    assert_eq!(
        tickets.duplicate(0, 0).unwrap_err(),
        StoreError::Validation(ValidationError::InvalidCount(0))
    );
}

#[test]
fn find_by_id_reports_index() {
    let (tickets, _) = ticket::initialize();
    let (index, found) = tickets.find_by_id("T003").unwrap();
    assert_eq!(index, 2);
    assert_eq!(found.title, "Cannot reset account password");
    assert!(tickets.find_by_id("T404").is_none());
}

#[test]
fn store_snapshot_reloads_and_rechecks_fields() {
    let (tickets, _) = ticket::initialize();
    let snapshot = serde_json::to_value(&tickets).unwrap();
    let reloaded: RecordStore<Ticket> = serde_json::from_value(snapshot).unwrap();
    assert_eq!(reloaded, tickets);

    let tampered = json!({
        "records": [
            {"id": "T900", "title": "", "type": "technical", "priority": 9, "status": "new"}
        ]
    });
    let err = serde_json::from_value::<RecordStore<Ticket>>(tampered).unwrap_err();
    assert!(err.to_string().contains("title"), "{err}");
}
