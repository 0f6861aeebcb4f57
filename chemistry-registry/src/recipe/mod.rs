use std::{
    collections::HashMap,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use log::warn;
use thiserror::Error;

use crate::{ItemStack, ItemType};

mod build;
pub mod read;

pub use read::Schema;

/// Brewing stands only have three output slots.
pub const MAX_OUTPUTS: usize = 3;

#[derive(Error, Debug)]
pub enum RecipeLoadError {
    #[error("Couldn't read recipe file at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Couldn't parse recipe file at {path:?}. Reason: {message}")]
    Parse { path: PathBuf, message: String },
}

/// The two stacks a recipe is brewed from: the ingredient slot comes first, the
/// catalyst slot second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecipeKey {
    pub ingredient: ItemType,
    pub catalyst: ItemType,
}

impl RecipeKey {
    pub const fn new(ingredient: ItemType, catalyst: ItemType) -> Self {
        Self {
            ingredient,
            catalyst,
        }
    }

    pub const fn reversed(self) -> Self {
        Self::new(self.catalyst, self.ingredient)
    }
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.ingredient, self.catalyst)
    }
}

/// Between one and [`MAX_OUTPUTS`] stacks, written into the output slots in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeOutput(Vec<ItemStack>);

impl RecipeOutput {
    pub fn new(stacks: Vec<ItemStack>) -> Option<Self> {
        (1..=MAX_OUTPUTS)
            .contains(&stacks.len())
            .then_some(Self(stacks))
    }

    pub fn stacks(&self) -> &[ItemStack] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub key: RecipeKey,
    pub output: RecipeOutput,
    /// Ordered recipes only match with the inputs in the configured slots.
    pub ordered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub schema: Schema,
    pub accepted: usize,
    pub rejected: usize,
}

/// Every recipe of one recipe file together with the starter contents of the
/// station. Never changed once built; a reload builds a new table.
#[derive(Debug, Clone)]
pub struct RecipeTable {
    recipes: HashMap<RecipeKey, Recipe>,
    starter: Vec<ItemStack>,
    report: LoadReport,
}

impl Default for RecipeTable {
    fn default() -> Self {
        Self {
            recipes: HashMap::new(),
            starter: Vec::new(),
            report: LoadReport {
                schema: Schema::Canonical,
                accepted: 0,
                rejected: 0,
            },
        }
    }
}

impl RecipeTable {
    pub fn load(path: &Path) -> Result<Self, RecipeLoadError> {
        let source = fs::read_to_string(path).map_err(|source| RecipeLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source).map_err(|err| RecipeLoadError::Parse {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        })
    }

    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        read::parse_document(source).map(build::build_table)
    }

    /// Finds the recipe brewed from the given slots. The exact pair wins; the
    /// reversed pair is only tried for recipes which are not ordered.
    pub fn lookup(&self, ingredient: ItemType, catalyst: ItemType) -> Option<&Recipe> {
        let key = RecipeKey::new(ingredient, catalyst);
        self.recipes.get(&key).or_else(|| {
            self.recipes
                .get(&key.reversed())
                .filter(|recipe| !recipe.ordered)
        })
    }

    pub fn starter(&self) -> &[ItemStack] {
        &self.starter
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    fn insert(&mut self, recipe: Recipe) {
        let key = recipe.key;
        if let Some(previous) = self.recipes.get(&key) {
            warn!(
                "Recipe {} overrides recipe {} for {}",
                recipe.name, previous.name, key
            );
        }

        let reversed = key.reversed();
        if reversed != key {
            match self.recipes.get(&reversed) {
                Some(previous) if !recipe.ordered && !previous.ordered => {
                    warn!(
                        "Recipe {} overrides recipe {} for {}",
                        recipe.name, previous.name, reversed
                    );
                    self.recipes.remove(&reversed);
                }
                Some(previous) if previous.ordered && !recipe.ordered => {
                    warn!(
                        "Recipe {} only matches as {} because the ordered recipe {} claims {}",
                        recipe.name, key, previous.name, reversed
                    );
                }
                _ => {}
            }
        }

        self.recipes.insert(key, recipe);
    }
}
