//! Inventory item records and their seed data.

use serde::{Deserialize, Serialize};

use crate::{
    core::store::RecordStore,
    error::ValidationError,
    record::{self, FieldRule, FilterMode, FilterRule, Record, Schema},
    types::{FieldKind, FieldValue, ItemType},
};

/// Highest rarity tier.
pub const MAX_RARITY: u8 = 5;

/// An inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name; also the identifier.
    pub name: String,
    /// Item category.
    #[serde(rename = "type")]
    pub kind: ItemType,
    /// Worth in gold.
    pub value: u32,
    /// Weight in kilograms.
    pub weight: f64,
    /// Rarity tier, 1 through 5.
    pub rarity: u8,
}

impl Item {
    /// Builds an item from already-valid parts.
    pub fn new(name: &str, kind: ItemType, value: u32, weight: f64, rarity: u8) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value,
            weight,
            rarity,
        }
    }
}

fn is_item_type(value: &FieldValue) -> bool {
    value.as_text().and_then(ItemType::parse).is_some()
}

fn is_gold(value: &FieldValue) -> bool {
    record::integer_in(value, 0, i64::from(u32::MAX))
}

fn is_weight(value: &FieldValue) -> bool {
    value.as_number().is_some_and(|w| w.is_finite() && w >= 0.0)
}

fn is_rarity(value: &FieldValue) -> bool {
    record::integer_in(value, 1, i64::from(MAX_RARITY))
}

static SCHEMA: Schema = Schema {
    fields: &[
        FieldRule {
            name: "name",
            kind: FieldKind::Text,
            check: record::non_empty_text,
            message: "name must not be empty",
            updatable: false,
        },
        FieldRule {
            name: "type",
            kind: FieldKind::Text,
            check: is_item_type,
            message: "type must be one of weapon, armor, potion, scroll, accessory, material",
            updatable: true,
        },
        FieldRule {
            name: "value",
            kind: FieldKind::Integer,
            check: is_gold,
            message: "value must be a non-negative whole number of gold",
            updatable: true,
        },
        FieldRule {
            name: "weight",
            kind: FieldKind::Real,
            check: is_weight,
            message: "weight must be a non-negative number of kilograms",
            updatable: true,
        },
        FieldRule {
            name: "rarity",
            kind: FieldKind::Integer,
            check: is_rarity,
            message: "rarity must be a whole number from 1 to 5",
            updatable: true,
        },
    ],
    sort_keys: &["name", "value", "weight", "rarity"],
    filters: &[
        FilterRule {
            kind: "type",
            field: "type",
            mode: FilterMode::Exact,
        },
        FilterRule {
            kind: "min_value",
            field: "value",
            mode: FilterMode::AtLeast,
        },
        FilterRule {
            kind: "keyword",
            field: "name",
            mode: FilterMode::Contains,
        },
    ],
};

impl Record for Item {
    const KIND: &'static str = "item";

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn id(&self) -> &str {
        &self.name
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "name" => FieldValue::Text(self.name.clone()),
            "type" => FieldValue::Text(self.kind.as_str().to_string()),
            "value" => FieldValue::Integer(i64::from(self.value)),
            "weight" => FieldValue::Real(self.weight),
            "rarity" => FieldValue::Integer(i64::from(self.rarity)),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError> {
        let rule = SCHEMA.updatable_rule(name)?;
        match rule.name {
            "type" => {
                let text = record::text_of(rule.name, value)?;
                self.kind = ItemType::parse(&text).ok_or_else(|| rule.reject(text))?;
            }
            "value" => self.value = record::integer_of(rule.name, value)?,
            "weight" => {
                self.weight = value
                    .as_number()
                    .ok_or_else(|| rule.reject(value.to_string()))?;
            }
            "rarity" => self.rarity = record::integer_of(rule.name, value)?,
            other => return Err(ValidationError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    fn category(&self) -> &'static str {
        self.kind.as_str()
    }

    fn worth(&self) -> u64 {
        u64::from(self.value)
    }
}

/// Starting inventory and the loot pile for a fresh session.
pub fn initialize() -> (RecordStore<Item>, RecordStore<Item>) {
    use ItemType::*;

    let inventory = vec![
        Item::new("Iron Sword", Weapon, 50, 3.5, 2),
        Item::new("Leather Armor", Armor, 40, 8.0, 1),
        Item::new("Health Potion", Potion, 25, 0.5, 1),
        Item::new("Scroll of Fireball", Scroll, 120, 0.2, 3),
        Item::new("Amulet of Warding", Accessory, 300, 0.3, 4),
    ];
    let loot = vec![
        Item::new("Dragon Scale", Material, 500, 2.0, 5),
        Item::new("Elven Bow", Weapon, 220, 1.8, 3),
        Item::new("Mana Potion", Potion, 30, 0.5, 2),
    ];

    (RecordStore::from_records(inventory), RecordStore::from_records(loot))
}
