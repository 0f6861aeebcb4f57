//! The parts of the game server the plugin talks to. A host implements
//! [`Viewer`] for its players and forwards block and inventory events as
//! [`StationUseEvent`] and [`ContainerClickEvent`].

use std::time::{SystemTime, UNIX_EPOCH};

use chemistry_core::{text::TextComponent, Sound};
use chemistry_inventory::{container_click::Click, BrewingStand, WindowType};
use chemistry_registry::{ItemStack, ItemType};
use uuid::Uuid;

/// A player who triggers station interactions.
pub trait Viewer: Send + Sync {
    fn uuid(&self) -> Uuid;

    fn name(&self) -> &str;

    fn has_permission(&self, node: &str) -> bool;

    fn is_sneaking(&self) -> bool;

    fn send_message(&self, message: TextComponent<'_>);

    fn play_sound(&self, sound: &Sound);

    /// Shows the player a new brewing stand window with the given contents.
    fn open_station(&self, station: BrewingStand);

    /// Resends the player's open window after its contents changed.
    fn update_inventory(&self);
}

/// Wall clock in whole seconds, swappable in tests.
pub trait Clock: Send + Sync {
    fn now_secs(&self) -> u64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAction {
    LeftClick,
    RightClick,
}

/// A player clicked a block.
#[derive(Debug, Clone)]
pub struct StationUseEvent {
    pub action: BlockAction,
    pub block: ItemType,
    cancelled: bool,
}

impl StationUseEvent {
    pub fn new(action: BlockAction, block: ItemType) -> Self {
        Self {
            action,
            block,
            cancelled: false,
        }
    }

    /// Stops the host from running its own handling, i.e. opening the block's
    /// regular window.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// A player clicked a slot of an open container window.
pub struct ContainerClickEvent<'a> {
    pub window_type: WindowType,
    pub click: Click,
    /// The stack the player is carrying on the cursor
    pub cursor: &'a mut Option<ItemStack>,
    pub station: &'a mut BrewingStand,
    handled: bool,
}

impl<'a> ContainerClickEvent<'a> {
    pub fn new(
        window_type: WindowType,
        click: Click,
        cursor: &'a mut Option<ItemStack>,
        station: &'a mut BrewingStand,
    ) -> Self {
        Self {
            window_type,
            click,
            cursor,
            station,
            handled: false,
        }
    }

    /// Marks the click as fully processed; the host must not apply it again.
    pub fn set_handled(&mut self) {
        self.handled = true;
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }
}
