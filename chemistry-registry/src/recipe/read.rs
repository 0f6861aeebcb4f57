//! Reads recipe documents into raw, unresolved records.
//!
//! The document is walked by hand instead of being deserialized into structs so
//! that one broken entry only drops that entry, never the whole file. Two shapes
//! are understood and normalized into the same [`RawRecipe`]:
//!
//! * the canonical shape, a `recipes` table keyed by recipe name where each recipe
//!   has `inputs`, an optional `ordered` flag and an `output` table whose entries
//!   may carry `display-name`, `lore`, `color`, `effects` and `enchantments`;
//! * the legacy flat shape, where every top-level table with an `input` list is a
//!   recipe and the optional third segment of an output key is a lore line.

use log::warn;
use toml::{Table, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Canonical,
    Legacy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDocument {
    pub schema: Schema,
    pub recipes: Vec<RawRecipe>,
    /// Stacks placed into every freshly opened station
    pub starter: Vec<RawOutput>,
}

/// A recipe as written in the file, before any identifier is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecipe {
    pub name: String,
    pub inputs: Vec<String>,
    pub ordered: bool,
    pub outputs: Vec<RawOutput>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawOutput {
    /// `<item-type>:<amount>[:<tag>]`
    pub key: String,
    pub display_name: Option<String>,
    pub lore: Vec<String>,
    pub color: Option<String>,
    pub effects: Vec<RawEffect>,
    pub enchantments: Vec<(String, i64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawEffect {
    pub name: String,
    pub duration: Option<i64>,
    pub amplifier: Option<i64>,
    pub color: Option<String>,
}

pub fn parse_document(source: &str) -> Result<RecipeDocument, toml::de::Error> {
    let document: Table = source.parse()?;

    if let Some(recipes) = document.get("recipes") {
        let recipes = match recipes.as_table() {
            Some(recipes) => read_canonical_recipes(recipes),
            None => {
                warn!("Invalid recipe file: \"recipes\" is not a section.");
                Vec::new()
            }
        };
        let starter = match document.get("starter") {
            Some(Value::Table(starter)) => read_output_section("starter", starter),
            Some(_) => {
                warn!("Invalid recipe file: \"starter\" is not a section.");
                Vec::new()
            }
            None => Vec::new(),
        };
        return Ok(RecipeDocument {
            schema: Schema::Canonical,
            recipes,
            starter,
        });
    }

    let recipes: Vec<_> = document
        .iter()
        .filter_map(|(name, section)| {
            let section = section.as_table()?;
            if !section.contains_key("input") && !section.contains_key("output") {
                return None;
            }
            Some(read_legacy_recipe(name, section))
        })
        .collect();

    if recipes.is_empty() {
        warn!("Invalid recipe file: no recipes found.");
    }

    Ok(RecipeDocument {
        schema: Schema::Legacy,
        recipes,
        starter: Vec::new(),
    })
}

fn read_canonical_recipes(recipes: &Table) -> Vec<RawRecipe> {
    recipes
        .iter()
        .filter_map(|(name, section)| {
            let Some(section) = section.as_table() else {
                warn!("Invalid recipe: section {name} not found.");
                return None;
            };

            let outputs = match section.get("output") {
                Some(Value::Table(output)) => read_output_section(name, output),
                Some(_) => {
                    warn!("Invalid output section in recipe {name}");
                    Vec::new()
                }
                None => Vec::new(),
            };

            let ordered = match section.get("ordered") {
                Some(Value::Boolean(ordered)) => *ordered,
                Some(other) => {
                    warn!("Invalid ordered flag {other} in recipe {name}, treating it as unordered");
                    false
                }
                None => false,
            };

            Some(RawRecipe {
                name: name.clone(),
                inputs: string_list(section.get("inputs"), name, "inputs"),
                ordered,
                outputs,
            })
        })
        .collect()
}

fn read_legacy_recipe(name: &str, section: &Table) -> RawRecipe {
    let outputs = match section.get("output") {
        Some(Value::Table(output)) => output
            .keys()
            .map(|key| {
                let mut output = RawOutput {
                    key: key.clone(),
                    ..RawOutput::default()
                };
                if let Some(lore) = key.split(':').nth(2).filter(|lore| !lore.is_empty()) {
                    output.lore.push(lore.to_string());
                }
                output
            })
            .collect(),
        _ => Vec::new(),
    };

    RawRecipe {
        name: name.to_string(),
        inputs: string_list(section.get("input"), name, "input"),
        ordered: false,
        outputs,
    }
}

fn read_output_section(recipe: &str, section: &Table) -> Vec<RawOutput> {
    section
        .iter()
        .map(|(key, value)| {
            let mut output = RawOutput {
                key: key.clone(),
                ..RawOutput::default()
            };
            if let Value::Table(meta) = value {
                read_output_meta(recipe, meta, &mut output);
            }
            output
        })
        .collect()
}

fn read_output_meta(recipe: &str, meta: &Table, output: &mut RawOutput) {
    match meta.get("display-name") {
        Some(Value::String(name)) => output.display_name = Some(name.clone()),
        Some(other) => warn!("Invalid display-name {other} in recipe {recipe}"),
        None => {}
    }

    output.lore = string_list(meta.get("lore"), recipe, "lore");

    match meta.get("color") {
        Some(Value::String(color)) => output.color = Some(color.clone()),
        Some(other) => warn!("Invalid color {other} in recipe {recipe}"),
        None => {}
    }

    match meta.get("effects") {
        Some(Value::Table(effects)) => {
            output.effects = effects
                .iter()
                .map(|(name, settings)| read_effect(recipe, name, settings))
                .collect();
        }
        Some(other) => warn!("Invalid effects {other} in recipe {recipe}"),
        None => {}
    }

    match meta.get("enchantments") {
        Some(Value::Table(enchantments)) => {
            output.enchantments = enchantments
                .iter()
                .filter_map(|(name, level)| match level.as_integer() {
                    Some(level) => Some((name.clone(), level)),
                    None => {
                        warn!("Invalid level {level} for enchantment {name} in recipe {recipe}");
                        None
                    }
                })
                .collect();
        }
        Some(Value::Array(names)) => {
            output.enchantments = names
                .iter()
                .filter_map(Value::as_str)
                .map(|name| (name.to_string(), 1))
                .collect();
        }
        Some(other) => warn!("Invalid enchantments {other} in recipe {recipe}"),
        None => {}
    }
}

fn read_effect(recipe: &str, name: &str, settings: &Value) -> RawEffect {
    let mut effect = RawEffect {
        name: name.to_string(),
        duration: None,
        amplifier: None,
        color: None,
    };
    let Some(settings) = settings.as_table() else {
        return effect;
    };

    let integer = |field: &str| match settings.get(field) {
        Some(value) => {
            let integer = value.as_integer();
            if integer.is_none() {
                warn!("Invalid {field} {value} for effect {name} in recipe {recipe}");
            }
            integer
        }
        None => None,
    };
    effect.duration = integer("duration");
    effect.amplifier = integer("amplifier");

    match settings.get("color") {
        Some(Value::String(color)) => effect.color = Some(color.clone()),
        Some(other) => warn!("Invalid color {other} for effect {name} in recipe {recipe}"),
        None => {}
    }
    effect
}

/// A list of strings, where a single string counts as a list of one.
fn string_list(value: Option<&Value>, recipe: &str, field: &str) -> Vec<String> {
    match value {
        Some(Value::String(single)) => vec![single.clone()],
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|value| match value {
                Value::String(value) => Some(value.clone()),
                other => {
                    warn!("Invalid {field} entry {other} in recipe {recipe}");
                    None
                }
            })
            .collect(),
        Some(other) => {
            warn!("Invalid {field} {other} in recipe {recipe}");
            Vec::new()
        }
        None => Vec::new(),
    }
}
