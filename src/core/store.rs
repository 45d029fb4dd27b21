use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{StoreError, StoreResult, ValidationError},
    record::{self, FilterMode, Record, RecordDraft},
    types::FieldValue,
};

/// Ordered, owned sequence of validated records.
///
/// Deserializing re-checks every record, so a snapshot cannot smuggle in
/// values the schema rejects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "R: Record", try_from = "StoreSnapshot<R>")]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

#[derive(Deserialize)]
#[serde(bound = "R: Record")]
struct StoreSnapshot<R: Record> {
    records: Vec<R>,
}

impl<R: Record> TryFrom<StoreSnapshot<R>> for RecordStore<R> {
    type Error = ValidationError;

    fn try_from(snapshot: StoreSnapshot<R>) -> Result<Self, Self::Error> {
        for rec in &snapshot.records {
            record::check_record(rec)?;
        }
        Ok(Self {
            records: snapshot.records,
        })
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<R: Record> RecordStore<R> {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records that are already known to satisfy the schema.
    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    /// Owned copy of the record at `index`.
    pub fn get_cloned(&self, index: usize) -> StoreResult<R> {
        StoreError::check_index(index, self.len())?;
        Ok(self.records[index].clone())
    }

    /// First record whose identifier equals `id`, with its index.
    pub fn find_by_id(&self, id: &str) -> Option<(usize, &R)> {
        self.records.iter().enumerate().find(|(_, r)| r.id() == id)
    }

    /// Records in store order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Iterates records in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Consumes the store, returning its records.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    /// Validates `draft` against the schema and appends it.
    pub fn add(&mut self, draft: &RecordDraft) -> StoreResult<&mut Self> {
        let rec = record::validate_draft::<R>(draft)?;
        self.push(rec);
        Ok(self)
    }

    /// Appends an already-typed record, re-checking every field rule.
    pub fn add_record(&mut self, rec: R) -> StoreResult<&mut Self> {
        record::check_record(&rec)?;
        self.push(rec);
        Ok(self)
    }

    /// Removes and returns the record at `index`.
    pub fn remove(&mut self, index: usize) -> StoreResult<R> {
        StoreError::check_index(index, self.len())?;
        let rec = self.records.remove(index);
        debug!(kind = R::KIND, index, len = self.len(), id = rec.id(), "record removed");
        Ok(rec)
    }

    /// Stable ascending sort by a supported key.
    pub fn sort(&mut self, key: &str) -> StoreResult<&mut Self> {
        let key = R::schema()
            .sort_key(key)
            .ok_or_else(|| ValidationError::UnknownSortKey(key.to_string()))?;
        self.records.sort_by(|a, b| compare_field(a, b, key));
        debug!(kind = R::KIND, key, "records sorted");
        Ok(self)
    }

    /// Records matching the filter `kind` with `value`, in store order.
    ///
    /// Exact-match values must pass the field's own rule; minimum values must
    /// parse as the field's kind (an integer field rejects `"10.5"`).
    pub fn filter(&self, kind: &str, value: &str) -> StoreResult<Vec<R>> {
        let schema = R::schema();
        let rule = schema
            .filter(kind)
            .ok_or_else(|| ValidationError::UnknownFilter(kind.to_string()))?;

        let matches: Vec<R> = match rule.mode {
            FilterMode::Exact => {
                let field = schema
                    .rule(rule.field)
                    .ok_or_else(|| ValidationError::UnknownField(rule.field.to_string()))?;
                let wanted = field.parse(value)?;
                self.collect_where(|r| r.field(rule.field).is_some_and(|v| v == wanted))
            }
            FilterMode::AtLeast => {
                let field = schema
                    .rule(rule.field)
                    .ok_or_else(|| ValidationError::UnknownField(rule.field.to_string()))?;
                let floor = field
                    .kind
                    .parse(value)
                    .and_then(|v| v.as_number())
                    .ok_or_else(|| ValidationError::InvalidValue {
                        field: rule.field,
                        value: value.to_string(),
                        message: "minimum must be the same kind of number as the field",
                    })?;
                self.collect_where(|r| {
                    r.field(rule.field)
                        .and_then(|v| v.as_number())
                        .is_some_and(|v| v >= floor)
                })
            }
            FilterMode::Contains => {
                let needle = value.to_lowercase();
                self.collect_where(|r| {
                    r.field(rule.field)
                        .as_ref()
                        .and_then(FieldValue::as_text)
                        .is_some_and(|text| text.to_lowercase().contains(&needle))
                })
            }
        };
        Ok(matches)
    }

    /// All of `self` followed by all of `other`; neither input changes.
    pub fn combine(&self, other: &Self) -> Self {
        let mut records = Vec::with_capacity(self.len() + other.len());
        records.extend(self.records.iter().cloned());
        records.extend(other.records.iter().cloned());
        Self { records }
    }

    /// `count` independent copies of the record at `index`.
    pub fn duplicate(&self, index: usize, count: usize) -> StoreResult<Vec<R>> {
        StoreError::check_index(index, self.len())?;
        if count < 1 {
            return Err(ValidationError::InvalidCount(count).into());
        }
        let source = &self.records[index];
        Ok((0..count).map(|_| source.clone()).collect())
    }

    /// Parses, validates and writes one updatable field in place.
    ///
    /// The record is left untouched when any step fails.
    pub fn update_field(&mut self, index: usize, field: &str, value: &str) -> StoreResult<&R> {
        StoreError::check_index(index, self.len())?;
        let rule = R::schema().updatable_rule(field)?;
        let parsed = rule.parse(value)?;

        let mut updated = self.records[index].clone();
        updated.set_field(rule.name, parsed)?;
        self.records[index] = updated;

        debug!(kind = R::KIND, index, field = rule.name, value, "record updated");
        Ok(&self.records[index])
    }

    fn push(&mut self, rec: R) {
        debug!(kind = R::KIND, id = rec.id(), len = self.len() + 1, "record added");
        self.records.push(rec);
    }

    fn collect_where(&self, pred: impl Fn(&R) -> bool) -> Vec<R> {
        self.records.iter().filter(|r| pred(r)).cloned().collect()
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn compare_field<R: Record>(a: &R, b: &R, key: &str) -> Ordering {
    match (a.field(key), b.field(key)) {
        (Some(x), Some(y)) => x.natural_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
