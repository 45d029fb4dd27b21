use recordbook::{
    core::queue::{BoundedQueue, QUEUE_CAPACITY, QueueOutcome},
    error::{StoreError, ValidationError},
    op::QueueOp,
    ticket::{self, Ticket},
    types::TicketStatus,
};

#[test]
fn fills_to_capacity_then_rejects() {
    let (tickets, _) = ticket::initialize();
    let mut queue = BoundedQueue::<Ticket>::new();

    for i in 0..QUEUE_CAPACITY {
        queue.manage(&tickets, QueueOp::Add(i)).unwrap();
    }
    assert_eq!(queue.len(), 5);
    assert!(queue.is_full());

    let err = queue.manage(&tickets, QueueOp::Add(0)).unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(ValidationError::CapacityExceeded { capacity: 5 })
    );
    assert_eq!(queue.len(), 5);
}

#[test]
fn add_remove_clear_by_name() {
    let (tickets, _) = ticket::initialize();
    let mut queue = BoundedQueue::new();

    for i in 0..3 {
        let out = queue.manage_named(&tickets, "add", Some(i)).unwrap();
        assert_eq!(out, QueueOutcome::Added(i + 1));
        assert_eq!(queue.entries()[i], *tickets.get(i).unwrap());
    }

    let out = queue.manage_named(&tickets, "remove", Some(1)).unwrap();
    assert_eq!(out, QueueOutcome::Removed(tickets.get(1).unwrap().clone()));
    assert_eq!(queue.len(), 2);

    let out = queue.manage_named(&tickets, "clear", None).unwrap();
    assert_eq!(out, QueueOutcome::Cleared);
    assert!(queue.is_empty());
}

#[test]
fn invalid_operations_and_indices() {
    let (tickets, _) = ticket::initialize();
    let mut queue = BoundedQueue::new();

    assert!(
        queue
            .manage_named(&tickets, "invalid_operation", None)
            .unwrap_err()
            .is_validation()
    );
    assert!(
        queue
            .manage_named(&tickets, "add", Some(tickets.len() + 10))
            .unwrap_err()
            .is_index_out_of_range()
    );
    assert!(queue.manage(&tickets, QueueOp::Remove(0)).unwrap_err().is_index_out_of_range());
    assert!(queue.manage_named(&tickets, "add", None).unwrap_err().is_index_out_of_range());
    assert!(queue.is_empty());
}

#[test]
fn entries_are_snapshots_of_the_store() {
    let (mut tickets, _) = ticket::initialize();
    let mut queue = BoundedQueue::new();
    queue.add(&tickets, 0).unwrap();

    tickets.update_field(0, "status", "closed").unwrap();
    assert_eq!(tickets.get(0).unwrap().status, TicketStatus::Closed);
    assert_eq!(queue.entries()[0].status, TicketStatus::Open);

    tickets.remove(0).unwrap();
    assert_eq!(queue.entries()[0].id, "T001");
}

#[test]
fn loading_a_queue_enforces_capacity() {
    let (tickets, _) = ticket::initialize();
    let mut queue = BoundedQueue::new();
    for i in 0..QUEUE_CAPACITY {
        queue.add(&tickets, i).unwrap();
    }

    let full = serde_json::to_value(&queue).unwrap();
    let loaded: BoundedQueue<Ticket> = serde_json::from_value(full.clone()).unwrap();
    assert_eq!(loaded, queue);

    let mut overfull = full;
    let extra = serde_json::to_value(tickets.get(0).unwrap()).unwrap();
    overfull["entries"].as_array_mut().unwrap().push(extra);
    let err = serde_json::from_value::<BoundedQueue<Ticket>>(overfull).unwrap_err();
    assert!(err.to_string().contains("queue is full"), "{err}");
}

#[test]
fn loading_a_queue_rechecks_entries() {
    let raw = serde_json::json!({
        "entries": [
            { "id": "T900", "title": "", "type": "technical", "priority": 9, "status": "new" }
        ]
    });
    assert!(serde_json::from_value::<BoundedQueue<Ticket>>(raw).is_err());
}
