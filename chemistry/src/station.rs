use std::sync::Arc;

use chemistry_config::{ChemistryConfig, MessagesConfig};
use chemistry_core::{
    text::{color::NamedColor, TextComponent},
    Sound,
};
use chemistry_inventory::{container_click::Slot, BrewingStand, Container, WindowType};

use crate::{
    cooldown::CooldownLedger,
    error::ChemistryError,
    host::{BlockAction, Clock, ContainerClickEvent, StationUseEvent, Viewer},
    recipes::RecipeStore,
};

const STATION_BLOCK: &str = "brewing_stand";

/// What became of a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Not a station interaction, the host handles it as usual
    Ignored,
    PermissionDenied,
    CooldownBlocked { remaining_secs: u64 },
    Opened,
    /// A slot was edited but the station does not hold two inputs
    Edited,
    /// Both inputs are present but no recipe uses them
    Unmatched,
    Brewed { recipe: String },
}

/// Turns host events into station behaviour: opening custom stations and brewing
/// whenever a click leaves a known pair in the ingredient and fuel slots.
pub struct StationController {
    recipes: Arc<RecipeStore>,
    cooldowns: CooldownLedger,
    clock: Arc<dyn Clock>,
    permission: String,
    messages: MessagesConfig,
    sound: Option<Sound>,
}

impl StationController {
    pub fn new(config: &ChemistryConfig, recipes: Arc<RecipeStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            recipes,
            cooldowns: CooldownLedger::new(&config.cooldown),
            clock,
            permission: config.permissions.use_station.clone(),
            messages: config.messages.clone(),
            sound: config.sound.sound(),
        }
    }

    /// Sneaking right clicks on a brewing stand open a custom station, filled with
    /// the starter contents of the current recipe file.
    pub fn on_station_use(&self, viewer: &dyn Viewer, event: &mut StationUseEvent) -> Interaction {
        if event.action != BlockAction::RightClick
            || event.block.name() != STATION_BLOCK
            || !viewer.is_sneaking()
        {
            return Interaction::Ignored;
        }
        if !viewer.has_permission(&self.permission) {
            return Interaction::PermissionDenied;
        }

        if let Err(remaining_secs) = self
            .cooldowns
            .try_activate(viewer.uuid(), self.clock.now_secs())
        {
            viewer.send_message(self.prefixed(&self.messages.cooldown));
            return Interaction::CooldownBlocked { remaining_secs };
        }

        event.cancel();
        let recipes = self.recipes.snapshot();
        viewer.open_station(BrewingStand::with_outputs(recipes.starter()));
        log::debug!("{} opened a brewing station", viewer.name());
        Interaction::Opened
    }

    /// Left clicks on a station slot swap the clicked slot with the cursor and
    /// then brew if the ingredient and fuel slots hold a known pair.
    pub fn on_container_click(
        &self,
        viewer: &dyn Viewer,
        event: &mut ContainerClickEvent<'_>,
    ) -> Interaction {
        if event.window_type != WindowType::BrewingStand || !event.click.is_left_click() {
            return Interaction::Ignored;
        }
        let Slot::Normal(slot) = event.click.slot else {
            return Interaction::Ignored;
        };
        if !viewer.has_permission(&self.permission) {
            return Interaction::PermissionDenied;
        }

        if let Err(err) = event.station.swap_with_cursor(&mut *event.cursor, slot) {
            err.log();
            return Interaction::Ignored;
        }
        event.set_handled();
        viewer.update_inventory();

        let Some((ingredient, fuel)) = event.station.inputs() else {
            return Interaction::Edited;
        };
        let recipes = self.recipes.snapshot();
        let Some(recipe) = recipes.lookup(ingredient, fuel) else {
            log::debug!("No recipe found for ingredients: {ingredient}, {fuel}");
            return Interaction::Unmatched;
        };

        if let Err(err) = event.station.apply_brew(&recipe.output) {
            err.log();
            return Interaction::Unmatched;
        }
        if let Some(sound) = &self.sound {
            viewer.play_sound(sound);
        }
        viewer.update_inventory();
        log::debug!(
            "{} brewed {} from {ingredient} and {fuel}",
            viewer.name(),
            recipe.name
        );
        Interaction::Brewed {
            recipe: recipe.name.clone(),
        }
    }

    pub fn cooldowns(&self) -> &CooldownLedger {
        &self.cooldowns
    }

    fn prefixed<'a>(&self, message: &'a str) -> TextComponent<'a> {
        TextComponent::text("[")
            .color_named(NamedColor::DarkGray)
            .add_child(
                TextComponent::text_string(self.messages.prefix.clone())
                    .color_named(NamedColor::DarkPurple),
            )
            .add_child(TextComponent::text("] ").color_named(NamedColor::DarkGray))
            .add_child(TextComponent::text(message).color_named(NamedColor::White))
    }
}
