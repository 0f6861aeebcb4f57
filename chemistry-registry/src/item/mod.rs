mod item_registry;
mod stack;

pub use item_registry::{ItemType, ITEMS};
pub use stack::{ItemMeta, ItemStack};
