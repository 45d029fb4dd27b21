//! Record trait, per-field validator tables and draft validation.
//!
//! Each record kind publishes a static [`Schema`]: the field table consulted by
//! inserts, field updates and exact-match filters, plus the supported sort keys
//! and filter kinds. Operations never special-case a record kind; they look the
//! rule up by name and apply it.

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    error::ValidationError,
    types::{FieldKind, FieldValue},
};

/// Operator-supplied record mapping handed to `add`.
pub type RecordDraft = serde_json::Map<String, serde_json::Value>;

/// Validation rule for one schema field.
#[derive(Debug)]
pub struct FieldRule {
    /// Field name as it appears in drafts and updates.
    pub name: &'static str,
    /// Storage kind used to parse incoming values.
    pub kind: FieldKind,
    /// Domain predicate applied after parsing.
    pub check: fn(&FieldValue) -> bool,
    /// Message attached to rejected values.
    pub message: &'static str,
    /// Whether `update_field` may change this field.
    pub updatable: bool,
}

impl FieldRule {
    /// Runs the domain predicate on an already-typed value.
    pub fn validate(&self, value: FieldValue) -> Result<FieldValue, ValidationError> {
        if (self.check)(&value) {
            Ok(value)
        } else {
            Err(self.reject(value.to_string()))
        }
    }

    /// Parses operator text and validates it.
    pub fn parse(&self, raw: &str) -> Result<FieldValue, ValidationError> {
        let value = self.kind.parse(raw).ok_or_else(|| self.reject(raw.to_string()))?;
        self.validate(value)
    }

    /// Converts a draft value and validates it.
    pub fn from_json(&self, raw: &serde_json::Value) -> Result<FieldValue, ValidationError> {
        let value = self
            .kind
            .from_json(raw)
            .ok_or_else(|| self.reject(raw.to_string()))?;
        self.validate(value)
    }

    pub(crate) fn reject(&self, value: String) -> ValidationError {
        ValidationError::InvalidValue {
            field: self.name,
            value,
            message: self.message,
        }
    }
}

/// How a filter kind compares records against the supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Field equals the value; the value must pass the field rule.
    Exact,
    /// Numeric field is greater than or equal to the value.
    AtLeast,
    /// Text field contains the value, ignoring case.
    Contains,
}

/// A named filter kind bound to one field.
#[derive(Debug)]
pub struct FilterRule {
    /// Filter kind as supplied by the caller.
    pub kind: &'static str,
    /// Field the filter reads.
    pub field: &'static str,
    /// Comparison applied.
    pub mode: FilterMode,
}

/// Static description of a record kind.
#[derive(Debug)]
pub struct Schema {
    /// Required fields, in display order.
    pub fields: &'static [FieldRule],
    /// Fields usable as sort keys.
    pub sort_keys: &'static [&'static str],
    /// Supported filter kinds.
    pub filters: &'static [FilterRule],
}

impl Schema {
    /// Rule for `name`, if it is a schema field.
    pub fn rule(&'static self, name: &str) -> Option<&'static FieldRule> {
        self.fields.iter().find(|r| r.name == name)
    }

    /// Filter rule for `kind`, if supported.
    pub fn filter(&'static self, kind: &str) -> Option<&'static FilterRule> {
        self.filters.iter().find(|f| f.kind == kind)
    }

    /// Canonical sort key matching `key`, if supported.
    pub fn sort_key(&'static self, key: &str) -> Option<&'static str> {
        self.sort_keys.iter().copied().find(|k| *k == key)
    }

    /// Rule for an updatable field.
    pub fn updatable_rule(&'static self, name: &str) -> Result<&'static FieldRule, ValidationError> {
        let rule = self
            .rule(name)
            .ok_or_else(|| ValidationError::UnknownField(name.to_string()))?;
        if rule.updatable {
            Ok(rule)
        } else {
            Err(ValidationError::NotUpdatable(rule.name))
        }
    }
}

/// A fixed-schema record held by a [`crate::core::store::RecordStore`].
pub trait Record: Clone + PartialEq + fmt::Debug + fmt::Display + Serialize + DeserializeOwned {
    /// Short kind name used in log events.
    const KIND: &'static str;

    /// Validator table and query surface for this kind.
    fn schema() -> &'static Schema;

    /// Identifying text (ticket id, item name).
    fn id(&self) -> &str;

    /// Reads a schema field.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Writes a schema field. Callers validate `value` first.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError>;

    /// Category used for per-type tallies.
    fn category(&self) -> &'static str;

    /// Monetary worth counted in summaries.
    fn worth(&self) -> u64 {
        0
    }
}

/// Validates every required field of `draft` and builds the record.
///
/// Extra keys are ignored.
pub fn validate_draft<R: Record>(draft: &RecordDraft) -> Result<R, ValidationError> {
    let mut clean = RecordDraft::new();
    for rule in R::schema().fields {
        let raw = draft
            .get(rule.name)
            .ok_or(ValidationError::MissingField { field: rule.name })?;
        rule.from_json(raw)?;
        clean.insert(rule.name.to_string(), raw.clone());
    }

    serde_json::from_value(serde_json::Value::Object(clean)).map_err(|err| ValidationError::InvalidValue {
        field: R::KIND,
        value: err.to_string(),
        message: "draft does not match the record layout",
    })
}

/// Re-checks every field rule against an already-typed record.
pub fn check_record<R: Record>(rec: &R) -> Result<(), ValidationError> {
    for rule in R::schema().fields {
        let value = rec
            .field(rule.name)
            .ok_or(ValidationError::MissingField { field: rule.name })?;
        rule.validate(value)?;
    }
    Ok(())
}

pub(crate) fn non_empty_text(value: &FieldValue) -> bool {
    value.as_text().is_some_and(|s| !s.trim().is_empty())
}

pub(crate) fn integer_in(value: &FieldValue, lo: i64, hi: i64) -> bool {
    matches!(value, FieldValue::Integer(v) if (lo..=hi).contains(v))
}

pub(crate) fn text_of(name: &'static str, value: FieldValue) -> Result<String, ValidationError> {
    match value {
        FieldValue::Text(s) => Ok(s),
        other => Err(ValidationError::InvalidValue {
            field: name,
            value: other.to_string(),
            message: "expected text",
        }),
    }
}

pub(crate) fn integer_of<T: TryFrom<i64>>(name: &'static str, value: FieldValue) -> Result<T, ValidationError> {
    match value {
        FieldValue::Integer(v) => T::try_from(v).map_err(|_| ValidationError::InvalidValue {
            field: name,
            value: v.to_string(),
            message: "integer out of range",
        }),
        other => Err(ValidationError::InvalidValue {
            field: name,
            value: other.to_string(),
            message: "expected a whole number",
        }),
    }
}
