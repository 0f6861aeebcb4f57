//! Custom brewing stations for a game server. A sneaking right click on a brewing
//! stand opens a station pre-filled with starter potions; placing two known items
//! in the ingredient and fuel slots brews the configured outputs.
//!
//! The host server creates one [`ChemistryPlugin`] and forwards block clicks,
//! container clicks and commands to it.

use std::{fs, path::Path, sync::Arc};

use chemistry_config::{ChemistryConfig, LoadTomlConfiguration};
use command::{default_dispatcher, dispatcher::CommandDispatcher, CommandSender};
use cooldown::CooldownLedger;
use error::ChemistryError;
use host::{Clock, ContainerClickEvent, StationUseEvent, SystemClock, Viewer};
use recipes::RecipeStore;
use station::{Interaction, StationController};

pub mod command;
pub mod cooldown;
pub mod error;
pub mod host;
pub mod recipes;
pub mod station;

pub struct ChemistryPlugin {
    config: ChemistryConfig,
    recipes: Arc<RecipeStore>,
    controller: StationController,
    dispatcher: CommandDispatcher,
}

impl ChemistryPlugin {
    /// Loads `config.toml` and `recipes.toml` from the data folder, creating both
    /// with their defaults when they are missing.
    pub fn enable(data_folder: &Path) -> Self {
        if let Err(err) = fs::create_dir_all(data_folder) {
            log::warn!("Couldn't create data folder {data_folder:?}. Reason: {err}");
        }
        let config = ChemistryConfig::load(data_folder).unwrap_or_else(|err| {
            err.log();
            log::warn!("Falling back to the default configuration");
            ChemistryConfig::default()
        });
        Self::with_config(config, data_folder, Arc::new(SystemClock))
    }

    pub fn with_config(config: ChemistryConfig, data_folder: &Path, clock: Arc<dyn Clock>) -> Self {
        let recipes = Arc::new(RecipeStore::open(data_folder));
        let controller = StationController::new(&config, recipes.clone(), clock);
        let plugin = Self {
            config,
            recipes,
            controller,
            dispatcher: default_dispatcher(),
        };
        log::info!(
            "Chemistry enabled with {} recipes",
            plugin.recipes.snapshot().len()
        );
        plugin
    }

    pub fn on_station_use(&self, viewer: &dyn Viewer, event: &mut StationUseEvent) -> Interaction {
        self.controller.on_station_use(viewer, event)
    }

    pub fn on_container_click(
        &self,
        viewer: &dyn Viewer,
        event: &mut ContainerClickEvent<'_>,
    ) -> Interaction {
        self.controller.on_container_click(viewer, event)
    }

    /// Runs a command line such as `reload-recipes`. Returns whether it succeeded.
    pub fn handle_command(&self, sender: &CommandSender<'_>, cmd: &str) -> bool {
        self.dispatcher.handle_command(sender, self, cmd)
    }

    pub fn config(&self) -> &ChemistryConfig {
        &self.config
    }

    pub fn recipes(&self) -> &RecipeStore {
        &self.recipes
    }

    pub fn cooldowns(&self) -> &CooldownLedger {
        self.controller.cooldowns()
    }

    pub(crate) fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }
}
