//! Support ticket records and their seed data.

use serde::{Deserialize, Serialize};

use crate::{
    core::store::RecordStore,
    error::{StoreResult, ValidationError},
    record::{self, FieldRule, FilterMode, FilterRule, Record, Schema},
    types::{FieldKind, FieldValue, TicketStatus, TicketType},
};

/// Highest-urgency priority level.
pub const PRIORITY_CRITICAL: u8 = 1;
/// Lowest-urgency priority level.
pub const PRIORITY_LOW: u8 = 4;

/// A support ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket identifier, e.g. `T001`.
    pub id: String,
    /// Short description.
    pub title: String,
    /// Ticket category.
    #[serde(rename = "type")]
    pub kind: TicketType,
    /// 1 (critical) through 4 (low).
    pub priority: u8,
    /// Workflow status.
    pub status: TicketStatus,
}

impl Ticket {
    /// Builds a ticket from already-valid parts.
    pub fn new(id: &str, title: &str, kind: TicketType, priority: u8, status: TicketStatus) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            priority,
            status,
        }
    }
}

fn is_ticket_type(value: &FieldValue) -> bool {
    value.as_text().and_then(TicketType::parse).is_some()
}

fn is_ticket_status(value: &FieldValue) -> bool {
    value.as_text().and_then(TicketStatus::parse).is_some()
}

fn is_priority(value: &FieldValue) -> bool {
    record::integer_in(value, i64::from(PRIORITY_CRITICAL), i64::from(PRIORITY_LOW))
}

static SCHEMA: Schema = Schema {
    fields: &[
        FieldRule {
            name: "id",
            kind: FieldKind::Text,
            check: record::non_empty_text,
            message: "id must not be empty",
            updatable: false,
        },
        FieldRule {
            name: "title",
            kind: FieldKind::Text,
            check: record::non_empty_text,
            message: "title must not be empty",
            updatable: true,
        },
        FieldRule {
            name: "type",
            kind: FieldKind::Text,
            check: is_ticket_type,
            message: "type must be one of technical, billing, account, feature",
            updatable: true,
        },
        FieldRule {
            name: "priority",
            kind: FieldKind::Integer,
            check: is_priority,
            message: "priority must be a whole number from 1 to 4",
            updatable: true,
        },
        FieldRule {
            name: "status",
            kind: FieldKind::Text,
            check: is_ticket_status,
            message: "status must be one of new, open, resolved, closed",
            updatable: true,
        },
    ],
    sort_keys: &["id", "title", "priority"],
    filters: &[
        FilterRule {
            kind: "type",
            field: "type",
            mode: FilterMode::Exact,
        },
        FilterRule {
            kind: "status",
            field: "status",
            mode: FilterMode::Exact,
        },
        FilterRule {
            kind: "priority",
            field: "priority",
            mode: FilterMode::Exact,
        },
        FilterRule {
            kind: "keyword",
            field: "title",
            mode: FilterMode::Contains,
        },
    ],
};

impl Record for Ticket {
    const KIND: &'static str = "ticket";

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::Text(self.id.clone()),
            "title" => FieldValue::Text(self.title.clone()),
            "type" => FieldValue::Text(self.kind.as_str().to_string()),
            "priority" => FieldValue::Integer(i64::from(self.priority)),
            "status" => FieldValue::Text(self.status.as_str().to_string()),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError> {
        let rule = SCHEMA.updatable_rule(name)?;
        match rule.name {
            "title" => self.title = record::text_of(rule.name, value)?,
            "type" => {
                let text = record::text_of(rule.name, value)?;
                self.kind = TicketType::parse(&text).ok_or_else(|| rule.reject(text))?;
            }
            "priority" => self.priority = record::integer_of(rule.name, value)?,
            "status" => {
                let text = record::text_of(rule.name, value)?;
                self.status = TicketStatus::parse(&text).ok_or_else(|| rule.reject(text))?;
            }
            other => return Err(ValidationError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    fn category(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// Seed tickets and escalated tickets for a fresh session.
pub fn initialize() -> (RecordStore<Ticket>, RecordStore<Ticket>) {
    use TicketStatus::*;
    use TicketType::*;

    let tickets = vec![
        Ticket::new("T001", "Login page returns 500 error", Technical, 1, Open),
        Ticket::new("T002", "Duplicate payment charged", Billing, 2, New),
        Ticket::new("T003", "Cannot reset account password", Account, 2, Open),
        Ticket::new("T004", "Add dark mode to dashboard", Feature, 4, New),
        Ticket::new("T005", "Payment receipt email missing", Billing, 3, Resolved),
    ];
    let escalated = vec![
        Ticket::new("E001", "Data sync failing for enterprise tenant", Technical, 1, Open),
        Ticket::new("E002", "Refund not processed after 30 days", Billing, 1, New),
    ];

    (RecordStore::from_records(tickets), RecordStore::from_records(escalated))
}

/// Tickets at exactly `level`, which must be 1 through 4.
pub fn by_priority(tickets: &RecordStore<Ticket>, level: u8) -> StoreResult<Vec<Ticket>> {
    tickets.filter("priority", &level.to_string())
}
