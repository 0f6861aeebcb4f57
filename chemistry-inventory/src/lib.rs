use chemistry_registry::ItemStack;

pub mod brewing;
pub mod container_click;
mod error;

pub use brewing::BrewingStand;
pub use error::InventoryError;

/// https://wiki.vg/Inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    BrewingStand,
    /// Any other window, the station leaves it to the host
    Other,
}

pub trait Container {
    fn window_type(&self) -> WindowType;

    fn all_slots(&mut self) -> Vec<&mut Option<ItemStack>>;

    fn all_slots_ref(&self) -> Vec<Option<&ItemStack>>;

    fn get_slot_mut(&mut self, slot: usize) -> Result<&mut Option<ItemStack>, InventoryError> {
        self.all_slots()
            .into_iter()
            .nth(slot)
            .ok_or(InventoryError::InvalidSlot(slot))
    }

    fn get_slot(&self, slot: usize) -> Result<Option<&ItemStack>, InventoryError> {
        self.all_slots_ref()
            .into_iter()
            .nth(slot)
            .ok_or(InventoryError::InvalidSlot(slot))
    }

    /// Exchanges the stack held on the cursor with the contents of `slot`.
    fn swap_with_cursor(
        &mut self,
        carried_slot: &mut Option<ItemStack>,
        slot: usize,
    ) -> Result<(), InventoryError> {
        let item_slot = self.get_slot_mut(slot)?;
        std::mem::swap(carried_slot, item_slot);
        Ok(())
    }
}
