//! Single-line record summaries and collection totals for front ends.

use std::fmt;

use hashbrown::HashMap;

use crate::{
    core::store::RecordStore,
    error::ValidationError,
    item::{Item, MAX_RARITY},
    record::Record,
    ticket::Ticket,
    types::TicketStatus,
};

const STAR: char = '★';

/// One star per rarity tier.
pub fn rarity_stars(rarity: u8) -> Result<String, ValidationError> {
    if (1..=MAX_RARITY).contains(&rarity) {
        Ok(std::iter::repeat_n(STAR, usize::from(rarity)).collect())
    } else {
        Err(ValidationError::InvalidValue {
            field: "rarity",
            value: rarity.to_string(),
            message: "rarity must be a whole number from 1 to 5",
        })
    }
}

/// Upper-case label for a ticket priority.
pub fn priority_label(priority: u8) -> Result<&'static str, ValidationError> {
    match priority {
        1 => Ok("CRITICAL"),
        2 => Ok("HIGH"),
        3 => Ok("MEDIUM"),
        4 => Ok("LOW"),
        other => Err(ValidationError::InvalidValue {
            field: "priority",
            value: other.to_string(),
            message: "priority must be a whole number from 1 to 4",
        }),
    }
}

/// Upper-case label for a ticket status.
pub fn status_label(status: TicketStatus) -> String {
    status.as_str().to_ascii_uppercase()
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stars = rarity_stars(self.rarity).unwrap_or_else(|_| "?".to_string());
        write!(
            f,
            "{} | {} | {}g | {}kg | {}",
            self.name,
            self.kind.as_str(),
            self.value,
            kilograms(self.weight),
            stars
        )
    }
}

/// Weight with at least one decimal place (`8.0`, `3.5`, `0.25`).
fn kilograms(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{weight:.1}")
    } else {
        weight.to_string()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let priority = priority_label(self.priority).unwrap_or("UNKNOWN");
        write!(
            f,
            "{} | {} | {} | Priority: {} | {}",
            self.id,
            self.title,
            self.kind.as_str(),
            priority,
            status_label(self.status)
        )
    }
}

/// Count, total worth and per-category tally of a store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    /// Number of records.
    pub count: usize,
    /// Sum of [`Record::worth`].
    pub total_value: u64,
    /// Records per category.
    pub by_category: HashMap<&'static str, usize>,
}

impl Summary {
    /// Summarizes `store`.
    pub fn of<R: Record>(store: &RecordStore<R>) -> Self {
        let mut summary = Self::default();
        for rec in store {
            summary.count += 1;
            summary.total_value += rec.worth();
            *summary.by_category.entry(rec.category()).or_default() += 1;
        }
        summary
    }
}

/// Numbered listing, one record per line, or a placeholder when empty.
pub fn listing<R: Record>(records: &[R], empty: &str) -> String {
    if records.is_empty() {
        return empty.to_string();
    }
    records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{i}. {r}"))
        .collect::<Vec<_>>()
        .join("\n")
}
