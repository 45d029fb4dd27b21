//! In-memory record management: validated record stores and a bounded queue.
//!
//! Two record kinds ship with the crate: support [`ticket::Ticket`]s and RPG
//! inventory [`item::Item`]s. Both go through the same field validator tables,
//! so every store and queue operation behaves identically for either kind.
//!
//! # Examples
//!
//! Store and queue usage with tickets:
//! ```
//! use recordbook::{
//!     core::queue::BoundedQueue,
//!     ticket::{self, Ticket},
//! };
//!
//! let (mut tickets, _escalated) = ticket::initialize();
//! let draft = serde_json::json!({
//!     "id": "T100",
//!     "title": "Test",
//!     "type": "technical",
//!     "priority": 2,
//!     "status": "new",
//! });
//! tickets.add(draft.as_object().expect("object")).expect("add");
//! assert_eq!(tickets.len(), 6);
//!
//! let mut queue = BoundedQueue::<Ticket>::new();
//! queue.add(&tickets, 5).expect("queue");
//! assert_eq!(queue.entries()[0].id, "T100");
//! ```
//!
//! Session usage with inventory items:
//! ```
//! use recordbook::{
//!     item::Item,
//!     op::{Command, QueueOp},
//!     session::handle::{Outcome, Session, SessionConfig},
//! };
//!
//! let mut session = Session::<Item>::new(SessionConfig::default());
//! session.execute(Command::Sort { key: "value".into() }).expect("sort");
//! let out = session.execute(Command::Queue(QueueOp::Add(0))).expect("equip");
//! assert!(matches!(out, Outcome::Queue(_)));
//! assert_eq!(session.queue().entries()[0].name, "Health Potion");
//! ```
#![deny(missing_docs)]

/// Record store and bounded queue.
pub mod core;
/// Record summaries and collection totals.
pub mod display;
/// Error taxonomy.
pub mod error;
/// Inventory item records.
pub mod item;
/// Queue operations and session commands.
pub mod op;
/// Record trait and validator tables.
pub mod record;
/// Single-owner session dispatcher and events.
pub mod session;
/// Support ticket records.
pub mod ticket;
/// Shared field values and categorical domains.
pub mod types;
