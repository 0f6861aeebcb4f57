use chemistry_core::text::color::RGBColor;

use super::ItemType;
use crate::{Enchantment, PotionEffect};

#[derive(Clone, Debug, PartialEq)]
pub struct ItemStack {
    pub item: ItemType,
    pub count: u8,
    pub meta: ItemMeta,
}

/// Everything about a stack besides its type and size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemMeta {
    pub display_name: Option<String>,
    pub lore: Vec<String>,
    pub effects: Vec<PotionEffect>,
    /// Explicit potion tint, overrides the colors of the effects
    pub color: Option<RGBColor>,
    pub enchantments: Vec<(Enchantment, u8)>,
}

impl ItemMeta {
    /// Adds an enchantment, replacing the level if it is already present.
    pub fn add_enchantment(&mut self, enchantment: Enchantment, level: u8) {
        match self
            .enchantments
            .iter_mut()
            .find(|(existing, _)| *existing == enchantment)
        {
            Some((_, existing_level)) => *existing_level = level,
            None => self.enchantments.push((enchantment, level)),
        }
    }
}

impl ItemStack {
    pub fn new(item: ItemType, count: u8) -> Self {
        Self {
            item,
            count,
            meta: ItemMeta::default(),
        }
    }

    /// Air and zero sized stacks behave like an empty slot.
    pub fn is_empty(&self) -> bool {
        self.item.is_air() || self.count == 0
    }

    /// Removes a single item from the stack and returns whether anything is left.
    pub fn decrement(&mut self) -> bool {
        self.count = self.count.saturating_sub(1);
        self.count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_empties_the_stack() {
        let tnt = ItemType::from_name("tnt").unwrap();
        let mut stack = ItemStack::new(tnt, 2);
        assert!(stack.decrement());
        assert!(!stack.decrement());
        assert!(stack.is_empty());
    }

    #[test]
    fn air_is_empty() {
        assert!(ItemStack::new(ItemType::AIR, 64).is_empty());
    }
}
