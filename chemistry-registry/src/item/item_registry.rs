use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use serde::Deserialize;

use crate::{normalize_identifier, UnknownIdentifier};

const ITEMS_JSON: &str = include_str!("../../../assets/items.json");

pub static ITEMS: LazyLock<ItemRegistry> = LazyLock::new(|| {
    let items: Vec<Item> =
        serde_json::from_str(ITEMS_JSON).expect("Could not parse items.json registry.");
    ItemRegistry::new(items)
});

#[derive(Deserialize, Clone, Debug)]
pub struct Item {
    pub name: String,
    pub max_stack: u8,
}

/// Every item type the plugin knows about. The protocol id of an item is its
/// index in `items.json`, `air` is always id 0.
pub struct ItemRegistry {
    items: Vec<Item>,
    by_name: HashMap<String, u16>,
}

impl ItemRegistry {
    fn new(items: Vec<Item>) -> Self {
        let by_name = items
            .iter()
            .enumerate()
            .map(|(id, item)| (item.name.clone(), id as u16))
            .collect();
        Self { items, by_name }
    }

    pub fn get(&self, identifier: &str) -> Option<ItemType> {
        self.by_name
            .get(&normalize_identifier(identifier))
            .copied()
            .map(ItemType)
    }

    fn item(&self, item_type: ItemType) -> &Item {
        &self.items[item_type.0 as usize]
    }
}

/// A resolved item type. Can only be obtained through the registry, so it always
/// names a known item.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemType(u16);

impl ItemType {
    pub const AIR: Self = Self(0);

    pub fn from_name(identifier: &str) -> Option<Self> {
        ITEMS.get(identifier)
    }

    pub fn name(self) -> &'static str {
        &ITEMS.item(self).name
    }

    pub fn max_stack(self) -> u8 {
        ITEMS.item(self).max_stack
    }

    pub const fn is_air(self) -> bool {
        self.0 == Self::AIR.0
    }
}

impl FromStr for ItemType {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownIdentifier {
            kind: "item",
            identifier: s.to_string(),
        })
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minecraft:{}", self.name())
    }
}

impl fmt::Debug for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemType({})", self.name())
    }
}
