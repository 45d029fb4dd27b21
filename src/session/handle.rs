use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    core::{
        queue::{BoundedQueue, QueueOutcome},
        store::RecordStore,
    },
    error::StoreResult,
    op::Command,
    record::Record,
};

use super::events::SessionEvent;

/// Session construction options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Start from the seed collections instead of empty stores.
    pub seeded: bool,
    /// Maximum retained events; the oldest are dropped first. Zero disables the log.
    pub event_log_bound: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seeded: true,
            event_log_bound: 256,
        }
    }
}

/// Supplies the seed collections a seeded session starts from.
pub trait Seed: Record {
    /// Primary and secondary seed stores.
    fn initialize() -> (RecordStore<Self>, RecordStore<Self>);
}

impl Seed for crate::ticket::Ticket {
    fn initialize() -> (RecordStore<Self>, RecordStore<Self>) {
        crate::ticket::initialize()
    }
}

impl Seed for crate::item::Item {
    fn initialize() -> (RecordStore<Self>, RecordStore<Self>) {
        crate::item::initialize()
    }
}

/// Successful result of [`Session::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R> {
    /// Primary store length after an add.
    Added(usize),
    /// Record taken out of the primary store.
    Removed(R),
    /// Primary store length after a sort.
    Sorted(usize),
    /// Filter, combine or duplicate results.
    Records(Vec<R>),
    /// Record after a field update.
    Updated(R),
    /// Queue operation result.
    Queue(QueueOutcome<R>),
}

/// Owner of one primary store, one secondary store and one bounded queue.
pub struct Session<R: Record> {
    primary: RecordStore<R>,
    secondary: RecordStore<R>,
    queue: BoundedQueue<R>,
    events: VecDeque<SessionEvent>,
    config: SessionConfig,
}

impl<R: Seed> Session<R> {
    /// Session built from `config`.
    pub fn new(config: SessionConfig) -> Self {
        let (primary, secondary) = if config.seeded {
            R::initialize()
        } else {
            (RecordStore::new(), RecordStore::new())
        };
        Self::with_stores(primary, secondary, config)
    }
}

impl<R: Record> Session<R> {
    /// Session over caller-supplied stores and an empty queue.
    pub fn with_stores(primary: RecordStore<R>, secondary: RecordStore<R>, config: SessionConfig) -> Self {
        Self {
            primary,
            secondary,
            queue: BoundedQueue::new(),
            events: VecDeque::new(),
            config,
        }
    }

    /// Primary store (tickets, inventory).
    pub fn primary(&self) -> &RecordStore<R> {
        &self.primary
    }

    /// Secondary store (escalated tickets, loot).
    pub fn secondary(&self) -> &RecordStore<R> {
        &self.secondary
    }

    /// Active queue / loadout.
    pub fn queue(&self) -> &BoundedQueue<R> {
        &self.queue
    }

    /// Retained events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &SessionEvent> {
        self.events.iter()
    }

    /// Takes every retained event.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    /// Runs one command; on error every structure is left as it was.
    pub fn execute(&mut self, cmd: Command) -> StoreResult<Outcome<R>> {
        let label = command_label(&cmd);
        let res = self.dispatch(cmd);
        if let Err(err) = &res {
            warn!(kind = R::KIND, command = label, error = %err, "command rejected");
        }
        res
    }

    fn dispatch(&mut self, cmd: Command) -> StoreResult<Outcome<R>> {
        match cmd {
            Command::Add { draft } => {
                let len = self.primary.add(&draft)?.len();
                let id = self.primary.records()[len - 1].id().to_string();
                self.record(SessionEvent::Added { id });
                Ok(Outcome::Added(len))
            }
            Command::Remove { index } => {
                let rec = self.primary.remove(index)?;
                self.record(SessionEvent::Removed {
                    id: rec.id().to_string(),
                });
                Ok(Outcome::Removed(rec))
            }
            Command::Sort { key } => {
                let len = self.primary.sort(&key)?.len();
                let key = R::schema().sort_key(&key).unwrap_or("?");
                self.record(SessionEvent::Sorted { key });
                Ok(Outcome::Sorted(len))
            }
            Command::Filter { kind, value } => self.primary.filter(&kind, &value).map(Outcome::Records),
            Command::CombineSecondary => Ok(Outcome::Records(
                self.primary.combine(&self.secondary).into_records(),
            )),
            Command::Duplicate { index, count } => self.primary.duplicate(index, count).map(Outcome::Records),
            Command::Update { index, field, value } => {
                let rec = self.primary.update_field(index, &field, &value)?.clone();
                let field = R::schema().rule(&field).map_or("?", |r| r.name);
                self.record(SessionEvent::Updated {
                    id: rec.id().to_string(),
                    field,
                });
                Ok(Outcome::Updated(rec))
            }
            Command::Queue(op) => {
                let outcome = self.queue.manage(&self.primary, op)?;
                let event = match &outcome {
                    QueueOutcome::Added(len) => SessionEvent::Queued { len: *len },
                    QueueOutcome::Removed(rec) => SessionEvent::Dequeued {
                        id: rec.id().to_string(),
                    },
                    QueueOutcome::Cleared => SessionEvent::QueueCleared,
                };
                self.record(event);
                Ok(Outcome::Queue(outcome))
            }
        }
    }

    fn record(&mut self, event: SessionEvent) {
        if self.config.event_log_bound == 0 {
            return;
        }
        while self.events.len() >= self.config.event_log_bound {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

fn command_label(cmd: &Command) -> &'static str {
    match cmd {
        Command::Add { .. } => "add",
        Command::Remove { .. } => "remove",
        Command::Sort { .. } => "sort",
        Command::Filter { .. } => "filter",
        Command::CombineSecondary => "combine",
        Command::Duplicate { .. } => "duplicate",
        Command::Update { .. } => "update",
        Command::Queue(_) => "queue",
    }
}
