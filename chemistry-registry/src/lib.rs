pub mod effect;
pub mod enchantment;
pub mod item;
pub mod recipe;

pub use effect::{PotionEffect, StatusEffectType};
pub use enchantment::Enchantment;
pub use item::{ItemMeta, ItemStack, ItemType, ITEMS};
pub use recipe::{RecipeKey, RecipeLoadError, RecipeOutput, RecipeTable};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} \"{identifier}\"")]
pub struct UnknownIdentifier {
    pub kind: &'static str,
    pub identifier: String,
}

/// Brings a configuration identifier into registry form: trimmed, lower case and
/// without the `minecraft:` namespace, so `GUNPOWDER` and `minecraft:gunpowder`
/// name the same thing.
pub(crate) fn normalize_identifier(identifier: &str) -> String {
    let identifier = identifier.trim().to_ascii_lowercase();
    match identifier.strip_prefix("minecraft:") {
        Some(stripped) => stripped.to_string(),
        None => identifier,
    }
}
