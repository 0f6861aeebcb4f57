use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use chemistry_registry::{RecipeLoadError, RecipeTable};
use parking_lot::RwLock;

use crate::error::ChemistryError;

pub const RECIPE_FILE: &str = "recipes.toml";

/// Written to the data folder when no recipe file exists yet.
pub const DEFAULT_RECIPES: &str = include_str!("../../assets/default_recipes.toml");

/// Owns the active [`RecipeTable`]. Readers take a snapshot and keep using it for
/// as long as they like; a reload builds a complete new table and only then
/// replaces the pointer.
pub struct RecipeStore {
    path: PathBuf,
    current: RwLock<Arc<RecipeTable>>,
}

impl RecipeStore {
    /// Loads the recipe file of `data_folder`, writing the default file first if
    /// there is none. A file that can't be loaded leaves the store empty.
    pub fn open(data_folder: &Path) -> Self {
        let path = data_folder.join(RECIPE_FILE);
        let table = Self::read(&path).unwrap_or_else(|err| {
            err.log();
            log::warn!("Starting without any recipes, fix {path:?} and reload");
            RecipeTable::default()
        });

        Self {
            path,
            current: RwLock::new(Arc::new(table)),
        }
    }

    pub fn snapshot(&self) -> Arc<RecipeTable> {
        self.current.read().clone()
    }

    /// Rereads the recipe file. On failure the previous table stays active.
    pub fn reload(&self) -> Result<Arc<RecipeTable>, RecipeLoadError> {
        let table = Arc::new(Self::read(&self.path)?);
        *self.current.write() = table.clone();
        log::info!("Reloaded {} recipes from {:?}", table.len(), self.path);
        Ok(table)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> Result<RecipeTable, RecipeLoadError> {
        if !path.exists() {
            log::info!("No recipe file found, writing the default one to {path:?}");
            if let Err(err) = fs::write(path, DEFAULT_RECIPES) {
                log::warn!("Couldn't write default recipes to {path:?}. Reason: {err}");
                return RecipeTable::parse(DEFAULT_RECIPES).map_err(|err| RecipeLoadError::Parse {
                    path: path.to_path_buf(),
                    message: err.message().to_string(),
                });
            }
        }
        RecipeTable::load(path)
    }
}
