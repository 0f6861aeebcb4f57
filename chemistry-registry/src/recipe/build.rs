//! Resolves raw records into a [`RecipeTable`]. Anything that does not resolve is
//! logged and skipped; building itself never fails.

use chemistry_core::text::color::RGBColor;
use log::{info, warn};

use super::{
    read::{RawEffect, RawOutput, RawRecipe, RecipeDocument},
    LoadReport, Recipe, RecipeKey, RecipeOutput, RecipeTable, MAX_OUTPUTS,
};
use crate::{
    effect::DEFAULT_DURATION, Enchantment, ItemStack, ItemType, PotionEffect, StatusEffectType,
};

pub(super) fn build_table(document: RecipeDocument) -> RecipeTable {
    let mut table = RecipeTable::default();
    table.report.schema = document.schema;

    for raw in &document.recipes {
        match resolve_recipe(raw) {
            Some(recipe) => {
                table.insert(recipe);
                table.report.accepted += 1;
            }
            None => table.report.rejected += 1,
        }
    }

    table.starter = resolve_outputs("starter", &document.starter);

    info!(
        "Loaded {} recipes ({} rejected)",
        table.report.accepted, table.report.rejected
    );
    table
}

fn resolve_recipe(raw: &RawRecipe) -> Option<Recipe> {
    let name = raw.name.as_str();
    let inputs: Vec<ItemType> = raw
        .inputs
        .iter()
        .filter_map(|input| resolve_item(name, input))
        .collect();
    let outputs = resolve_outputs(name, &raw.outputs);

    if inputs.is_empty() || outputs.is_empty() {
        warn!("Invalid recipe: {name} does not have any valid inputs or outputs.");
        return None;
    }
    let [ingredient, catalyst] = inputs[..] else {
        warn!(
            "Invalid recipe: {name} needs exactly 2 inputs, found {}.",
            inputs.len()
        );
        return None;
    };

    Some(Recipe {
        name: raw.name.clone(),
        key: RecipeKey::new(ingredient, catalyst),
        output: RecipeOutput::new(outputs)?,
        ordered: raw.ordered,
    })
}

fn resolve_outputs(recipe: &str, raw: &[RawOutput]) -> Vec<ItemStack> {
    let mut outputs: Vec<ItemStack> = raw
        .iter()
        .filter_map(|output| resolve_output(recipe, output))
        .collect();
    if outputs.len() > MAX_OUTPUTS {
        warn!(
            "Recipe {recipe} has {} outputs, only the first {MAX_OUTPUTS} are used",
            outputs.len()
        );
        outputs.truncate(MAX_OUTPUTS);
    }
    outputs
}

fn resolve_item(recipe: &str, identifier: &str) -> Option<ItemType> {
    match identifier.parse::<ItemType>() {
        Ok(item) if item.is_air() => {
            warn!("Invalid material: air can't be used in recipe {recipe}");
            None
        }
        Ok(item) => Some(item),
        Err(err) => {
            warn!("Invalid material in recipe {recipe}: {err}");
            None
        }
    }
}

fn resolve_output(recipe: &str, raw: &RawOutput) -> Option<ItemStack> {
    let key = raw.key.trim();
    let key = match key.get(..10) {
        Some(namespace) if namespace.eq_ignore_ascii_case("minecraft:") => &key[10..],
        _ => key,
    };

    let mut segments = key.split(':');
    let (Some(material), Some(amount)) = (segments.next(), segments.next()) else {
        warn!("Invalid output {} in recipe {recipe}", raw.key);
        return None;
    };

    let item = resolve_item(recipe, material)?;
    let count = match amount.trim().parse::<u32>() {
        Ok(count) if count > 0 => count,
        _ => {
            warn!("Invalid amount {amount} for output {} in recipe {recipe}", raw.key);
            return None;
        }
    };
    let max_stack = item.max_stack();
    let count = match u8::try_from(count) {
        Ok(count) if count <= max_stack => count,
        _ => {
            warn!("Amount {count} of {item} in recipe {recipe} exceeds its stack size, using {max_stack}");
            max_stack
        }
    };

    let mut stack = ItemStack::new(item, count);
    stack.meta.display_name = raw.display_name.clone();
    stack.meta.lore = raw.lore.clone();
    stack.meta.color = raw
        .color
        .as_deref()
        .and_then(|color| resolve_color(recipe, color));
    stack.meta.effects = raw
        .effects
        .iter()
        .filter_map(|effect| resolve_effect(recipe, effect))
        .collect();
    for (name, level) in &raw.enchantments {
        let enchantment = match name.parse::<Enchantment>() {
            Ok(enchantment) => enchantment,
            Err(err) => {
                warn!("Invalid enchantment in recipe {recipe}: {err}");
                continue;
            }
        };
        match u8::try_from(*level) {
            Ok(level) if level > 0 => stack.meta.add_enchantment(enchantment, level),
            _ => warn!("Invalid level {level} for enchantment {name} in recipe {recipe}"),
        }
    }

    Some(stack)
}

fn resolve_effect(recipe: &str, raw: &RawEffect) -> Option<PotionEffect> {
    let effect_type = match raw.name.parse::<StatusEffectType>() {
        Ok(effect_type) => effect_type,
        Err(err) => {
            warn!("Invalid effect in recipe {recipe}: {err}");
            return None;
        }
    };

    let duration = match raw.duration.map(u32::try_from) {
        None => DEFAULT_DURATION,
        Some(Ok(duration)) => duration,
        Some(Err(_)) => {
            warn!(
                "Invalid duration for effect {} in recipe {recipe}, using {DEFAULT_DURATION}",
                raw.name
            );
            DEFAULT_DURATION
        }
    };
    let amplifier = match raw.amplifier.map(u8::try_from) {
        None => 0,
        Some(Ok(amplifier)) => amplifier,
        Some(Err(_)) => {
            warn!(
                "Invalid amplifier for effect {} in recipe {recipe}, using 0",
                raw.name
            );
            0
        }
    };

    let mut effect = PotionEffect::new(effect_type, duration, amplifier);
    effect.color = raw
        .color
        .as_deref()
        .and_then(|color| resolve_color(recipe, color));
    Some(effect)
}

fn resolve_color(recipe: &str, color: &str) -> Option<RGBColor> {
    match color.parse() {
        Ok(color) => Some(color),
        Err(err) => {
            warn!("Invalid color {color} in recipe {recipe}: {err}");
            None
        }
    }
}
