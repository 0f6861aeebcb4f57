use std::ops::Range;

use chemistry_registry::{ItemStack, ItemType, RecipeOutput};

use crate::{Container, InventoryError, WindowType};

pub const OUTPUT_SLOTS: Range<usize> = 0..3;
pub const INGREDIENT_SLOT: usize = 3;
pub const FUEL_SLOT: usize = 4;

/// The five slots of a brewing stand: three bottle slots, the ingredient on top
/// and the fuel on the side. Recipes are keyed by the ingredient and fuel items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrewingStand {
    slots: [Option<ItemStack>; 5],
}

impl BrewingStand {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stand whose bottle slots are filled with `stacks`, in order. Stacks beyond
    /// the bottle slots are ignored.
    pub fn with_outputs(stacks: &[ItemStack]) -> Self {
        let mut stand = Self::new();
        for (slot, stack) in stand.slots[OUTPUT_SLOTS].iter_mut().zip(stacks) {
            *slot = Some(stack.clone());
        }
        stand
    }

    pub fn ingredient(&self) -> Option<&ItemStack> {
        self.occupied(INGREDIENT_SLOT)
    }

    pub fn fuel(&self) -> Option<&ItemStack> {
        self.occupied(FUEL_SLOT)
    }

    /// The ingredient and fuel item types, if both slots hold something.
    pub fn inputs(&self) -> Option<(ItemType, ItemType)> {
        Some((self.ingredient()?.item, self.fuel()?.item))
    }

    pub fn slot(&self, slot: usize) -> Option<&ItemStack> {
        self.get_slot(slot).ok().flatten()
    }

    pub fn set_slot(&mut self, slot: usize, item: Option<ItemStack>) -> Result<(), InventoryError> {
        *self.get_slot_mut(slot)? = item;
        Ok(())
    }

    /// Writes the recipe outputs into the first bottle slots and uses up one
    /// ingredient and one fuel item. Bottle slots the recipe does not fill keep
    /// their contents. Nothing is changed unless both inputs are present.
    pub fn apply_brew(&mut self, output: &RecipeOutput) -> Result<(), InventoryError> {
        if self.inputs().is_none() {
            return Err(InventoryError::MissingInputs);
        }

        for (slot, stack) in self.slots[OUTPUT_SLOTS].iter_mut().zip(output.stacks()) {
            *slot = Some(stack.clone());
        }
        for slot in [INGREDIENT_SLOT, FUEL_SLOT] {
            let slot = &mut self.slots[slot];
            if !slot.as_mut().is_some_and(ItemStack::decrement) {
                *slot = None;
            }
        }
        Ok(())
    }

    fn occupied(&self, slot: usize) -> Option<&ItemStack> {
        self.slots[slot].as_ref().filter(|stack| !stack.is_empty())
    }
}

impl Container for BrewingStand {
    fn window_type(&self) -> WindowType {
        WindowType::BrewingStand
    }

    fn all_slots(&mut self) -> Vec<&mut Option<ItemStack>> {
        self.slots.iter_mut().collect()
    }

    fn all_slots_ref(&self) -> Vec<Option<&ItemStack>> {
        self.slots.iter().map(Option::as_ref).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(name: &str, count: u8) -> ItemStack {
        ItemStack::new(ItemType::from_name(name).unwrap(), count)
    }

    fn stand_with_inputs(ingredient: u8, fuel: u8) -> BrewingStand {
        let mut stand = BrewingStand::new();
        stand
            .set_slot(INGREDIENT_SLOT, Some(stack("gunpowder", ingredient)))
            .unwrap();
        stand.set_slot(FUEL_SLOT, Some(stack("water_bucket", fuel))).unwrap();
        stand
    }

    fn output(stacks: &[ItemStack]) -> RecipeOutput {
        RecipeOutput::new(stacks.to_vec()).unwrap()
    }

    #[test]
    fn one_output_writes_only_the_first_slot() {
        let mut stand = stand_with_inputs(5, 1);
        let old_bottle = stack("potion", 1);
        stand.set_slot(1, Some(old_bottle.clone())).unwrap();

        stand.apply_brew(&output(&[stack("tnt", 1)])).unwrap();

        assert_eq!(stand.slot(0), Some(&stack("tnt", 1)));
        assert_eq!(stand.slot(1), Some(&old_bottle));
        assert_eq!(stand.slot(2), None);
    }

    #[test]
    fn two_outputs_leave_the_third_slot_alone() {
        let mut stand = stand_with_inputs(5, 5);
        let old_bottle = stack("potion", 1);
        stand.set_slot(2, Some(old_bottle.clone())).unwrap();

        stand
            .apply_brew(&output(&[stack("tnt", 1), stack("apple", 2)]))
            .unwrap();

        assert_eq!(stand.slot(0), Some(&stack("tnt", 1)));
        assert_eq!(stand.slot(1), Some(&stack("apple", 2)));
        assert_eq!(stand.slot(2), Some(&old_bottle));
    }

    #[test]
    fn inputs_lose_exactly_one() {
        let mut stand = stand_with_inputs(5, 2);
        stand
            .apply_brew(&output(&[stack("tnt", 1), stack("apple", 1), stack("bread", 1)]))
            .unwrap();

        assert_eq!(stand.ingredient().unwrap().count, 4);
        assert_eq!(stand.fuel().unwrap().count, 1);
    }

    #[test]
    fn last_item_empties_the_slot() {
        let mut stand = stand_with_inputs(1, 1);
        stand.apply_brew(&output(&[stack("tnt", 1)])).unwrap();

        assert_eq!(stand.slot(INGREDIENT_SLOT), None);
        assert_eq!(stand.slot(FUEL_SLOT), None);
        assert_eq!(stand.inputs(), None);
    }

    #[test]
    fn missing_input_changes_nothing() {
        let mut stand = BrewingStand::new();
        stand
            .set_slot(INGREDIENT_SLOT, Some(stack("gunpowder", 3)))
            .unwrap();
        let before = stand.clone();

        assert_eq!(
            stand.apply_brew(&output(&[stack("tnt", 1)])),
            Err(InventoryError::MissingInputs)
        );
        assert_eq!(stand, before);
    }

    #[test]
    fn air_does_not_count_as_an_input() {
        let mut stand = stand_with_inputs(1, 1);
        stand
            .set_slot(FUEL_SLOT, Some(ItemStack::new(ItemType::AIR, 1)))
            .unwrap();
        assert_eq!(stand.inputs(), None);
    }

    #[test]
    fn swap_with_cursor() {
        let mut stand = stand_with_inputs(2, 1);
        let mut cursor = Some(stack("sugar", 3));

        stand.swap_with_cursor(&mut cursor, INGREDIENT_SLOT).unwrap();

        assert_eq!(cursor, Some(stack("gunpowder", 2)));
        assert_eq!(stand.ingredient(), Some(&stack("sugar", 3)));
        assert_eq!(
            stand.swap_with_cursor(&mut cursor, 5),
            Err(InventoryError::InvalidSlot(5))
        );
    }

    #[test]
    fn outputs_prefill() {
        let stand = BrewingStand::with_outputs(&[stack("potion", 1), stack("splash_potion", 1)]);
        assert_eq!(stand.slot(0), Some(&stack("potion", 1)));
        assert_eq!(stand.slot(1), Some(&stack("splash_potion", 1)));
        assert_eq!(stand.slot(2), None);
        assert_eq!(stand.window_type(), WindowType::BrewingStand);
        assert_eq!(stand.all_slots_ref().len(), 5);
    }
}
