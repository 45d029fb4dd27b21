//! Shared field values and the closed categorical domains.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Storage kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free or enumerated text.
    Text,
    /// Whole number.
    Integer,
    /// Floating point number.
    Real,
}

impl FieldKind {
    /// Parses operator-entered text into a value of this kind.
    pub fn parse(self, raw: &str) -> Option<FieldValue> {
        let raw = raw.trim();
        match self {
            Self::Text => Some(FieldValue::Text(raw.to_string())),
            Self::Integer => raw.parse().ok().map(FieldValue::Integer),
            Self::Real => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(FieldValue::Real),
        }
    }

    /// Converts a JSON draft value into a value of this kind.
    ///
    /// Integers are accepted for real fields; nothing else is coerced.
    pub fn from_json(self, value: &serde_json::Value) -> Option<FieldValue> {
        match self {
            Self::Text => value.as_str().map(|s| FieldValue::Text(s.to_string())),
            Self::Integer => value.as_i64().map(FieldValue::Integer),
            Self::Real => value.as_f64().map(FieldValue::Real),
        }
    }
}

/// A single field value read from or written to a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text value.
    Text(String),
    /// Whole number value.
    Integer(i64),
    /// Floating point value.
    Real(f64),
}

impl FieldValue {
    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a float when numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Real(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Natural ordering: numbers ascending, text lexicographic.
    ///
    /// Numbers sort before text when kinds are mixed.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Text(_), _) => Ordering::Greater,
            (_, Self::Text(_)) => Ordering::Less,
            (a, b) => {
                let (a, b) = (a.as_number().unwrap_or_default(), b.as_number().unwrap_or_default());
                a.total_cmp(&b)
            }
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every member of the set, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire/display text of this member.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Looks up a member by its exact text.
            pub fn parse(text: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.as_str() == text)
            }
        }
    };
}

closed_set! {
    /// Support ticket category.
    TicketType {
        /// Technical fault.
        Technical => "technical",
        /// Billing or payment issue.
        Billing => "billing",
        /// Account access or settings.
        Account => "account",
        /// Feature request.
        Feature => "feature",
    }
}

closed_set! {
    /// Ticket workflow status.
    TicketStatus {
        /// Not yet triaged.
        New => "new",
        /// Being worked.
        Open => "open",
        /// Fix delivered.
        Resolved => "resolved",
        /// Done.
        Closed => "closed",
    }
}

closed_set! {
    /// Inventory item category.
    ItemType {
        /// Melee or ranged weapon.
        Weapon => "weapon",
        /// Wearable protection.
        Armor => "armor",
        /// Consumable potion.
        Potion => "potion",
        /// Single-use scroll.
        Scroll => "scroll",
        /// Ring, amulet and the like.
        Accessory => "accessory",
        /// Crafting material.
        Material => "material",
    }
}
