use std::{
    fs,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use chemistry::{
    command::CommandSender,
    host::{BlockAction, Clock, ContainerClickEvent, StationUseEvent, Viewer},
    recipes::RECIPE_FILE,
    station::Interaction,
    ChemistryPlugin,
};
use chemistry_config::ChemistryConfig;
use chemistry_core::{text::TextComponent, Sound};
use chemistry_inventory::{
    brewing::{FUEL_SLOT, INGREDIENT_SLOT},
    container_click::Click,
    BrewingStand, WindowType,
};
use chemistry_registry::{ItemStack, ItemType};
use parking_lot::Mutex;
use tempfile::TempDir;
use uuid::Uuid;

struct ManualClock(AtomicU64);

impl ManualClock {
    fn set(&self, secs: u64) {
        self.0.store(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

struct Player {
    uuid: Uuid,
    permissions: Vec<&'static str>,
    messages: Mutex<Vec<String>>,
    sounds: Mutex<Vec<Sound>>,
    opened: Mutex<Vec<BrewingStand>>,
}

impl Player {
    fn new(permissions: &[&'static str]) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            permissions: permissions.to_vec(),
            messages: Mutex::new(Vec::new()),
            sounds: Mutex::new(Vec::new()),
            opened: Mutex::new(Vec::new()),
        }
    }
}

impl Viewer for Player {
    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn name(&self) -> &str {
        "Steve"
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.iter().any(|permission| *permission == node)
    }

    fn is_sneaking(&self) -> bool {
        true
    }

    fn send_message(&self, message: TextComponent<'_>) {
        self.messages.lock().push(message.to_plain());
    }

    fn play_sound(&self, sound: &Sound) {
        self.sounds.lock().push(sound.clone());
    }

    fn open_station(&self, station: BrewingStand) {
        self.opened.lock().push(station);
    }

    fn update_inventory(&self) {}
}

fn item(name: &str) -> ItemType {
    ItemType::from_name(name).unwrap()
}

fn plugin(start: u64) -> (TempDir, Arc<ManualClock>, ChemistryPlugin) {
    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(ManualClock(AtomicU64::new(start)));
    let plugin = ChemistryPlugin::with_config(ChemistryConfig::default(), dir.path(), clock.clone());
    (dir, clock, plugin)
}

fn use_station(plugin: &ChemistryPlugin, player: &Player) -> Interaction {
    let mut event = StationUseEvent::new(BlockAction::RightClick, item("brewing_stand"));
    plugin.on_station_use(player, &mut event)
}

#[test]
fn gunpowder_and_water_brew_tnt() {
    let (_dir, _clock, plugin) = plugin(1_000);
    let player = Player::new(&["pbrew.potions"]);

    assert_eq!(use_station(&plugin, &player), Interaction::Opened);
    let mut station = player.opened.lock().pop().unwrap();
    station
        .set_slot(FUEL_SLOT, Some(ItemStack::new(item("water_bucket"), 1)))
        .unwrap();

    let mut cursor = Some(ItemStack::new(item("gunpowder"), 1));
    let mut event = ContainerClickEvent::new(
        WindowType::BrewingStand,
        Click::left(INGREDIENT_SLOT),
        &mut cursor,
        &mut station,
    );
    let interaction = plugin.on_container_click(&player, &mut event);

    assert_eq!(
        interaction,
        Interaction::Brewed {
            recipe: "boom".to_string()
        }
    );
    assert!(event.is_handled());
    let tnt = station.slot(0).unwrap();
    assert_eq!(tnt.item, item("tnt"));
    assert_eq!(tnt.count, 1);
    assert_eq!(tnt.meta.display_name.as_deref(), Some("Boom"));
    assert!(station.slot(INGREDIENT_SLOT).is_none());
    assert!(station.slot(FUEL_SLOT).is_none());
    assert_eq!(player.sounds.lock().len(), 1);
}

#[test]
fn unknown_pair_only_edits_the_station() {
    let (_dir, _clock, plugin) = plugin(1_000);
    let player = Player::new(&["pbrew.potions"]);
    let mut station = BrewingStand::new();
    station
        .set_slot(FUEL_SLOT, Some(ItemStack::new(item("bread"), 3)))
        .unwrap();

    let mut cursor = Some(ItemStack::new(item("apple"), 2));
    let mut event = ContainerClickEvent::new(
        WindowType::BrewingStand,
        Click::left(INGREDIENT_SLOT),
        &mut cursor,
        &mut station,
    );
    assert_eq!(
        plugin.on_container_click(&player, &mut event),
        Interaction::Unmatched
    );
    assert!(event.is_handled());
    assert_eq!(cursor, None);
    assert_eq!(
        station.slot(INGREDIENT_SLOT),
        Some(&ItemStack::new(item("apple"), 2))
    );
    assert_eq!(station.slot(FUEL_SLOT), Some(&ItemStack::new(item("bread"), 3)));
    for slot in 0..3 {
        assert!(station.slot(slot).is_none());
    }
    assert!(player.sounds.lock().is_empty());
}

#[test]
fn cooldown_expires_with_the_clock() {
    let (_dir, clock, plugin) = plugin(1_000);
    let player = Player::new(&["pbrew.potions"]);

    assert_eq!(use_station(&plugin, &player), Interaction::Opened);

    clock.set(1_030);
    assert_eq!(
        use_station(&plugin, &player),
        Interaction::CooldownBlocked { remaining_secs: 30 }
    );
    assert_eq!(
        *player.messages.lock(),
        ["[Chemistry] You are currently on cooldown!"]
    );

    clock.set(1_060);
    assert_eq!(use_station(&plugin, &player), Interaction::Opened);
    assert_eq!(player.opened.lock().len(), 2);
}

#[test]
fn cooldowns_are_per_player() {
    let (_dir, _clock, plugin) = plugin(1_000);
    let first = Player::new(&["pbrew.potions"]);
    let second = Player::new(&["pbrew.potions"]);

    assert_eq!(use_station(&plugin, &first), Interaction::Opened);
    assert_eq!(use_station(&plugin, &second), Interaction::Opened);
    assert_eq!(plugin.cooldowns().len(), 2);
}

#[test]
fn reload_needs_permission() {
    let (dir, _clock, plugin) = plugin(1_000);
    fs::write(
        dir.path().join(RECIPE_FILE),
        "[recipes.sweet]\ninputs = [\"SUGAR\", \"REDSTONE\"]\noutput = { \"GLOWSTONE_DUST:2\" = {} }\n",
    )
    .unwrap();

    let player = Player::new(&["pbrew.potions"]);
    assert!(!plugin.handle_command(&CommandSender::Player(&player), "reload-recipes"));
    assert_eq!(
        *player.messages.lock(),
        ["You do not have permission to use this command."]
    );
    assert!(plugin
        .recipes()
        .snapshot()
        .lookup(item("sugar"), item("redstone"))
        .is_none());

    let admin = Player::new(&["pbrew.reload"]);
    assert!(plugin.handle_command(&CommandSender::Player(&admin), "/pbreload"));
    assert_eq!(*admin.messages.lock(), ["Config file reloaded."]);
    assert!(plugin
        .recipes()
        .snapshot()
        .lookup(item("redstone"), item("sugar"))
        .is_some());
}

#[test]
fn console_reload_failure_keeps_recipes() {
    let (dir, _clock, plugin) = plugin(1_000);
    fs::write(dir.path().join(RECIPE_FILE), "[recipes.broken\n").unwrap();

    assert!(!plugin.handle_command(&CommandSender::Console, "reload-recipes"));
    assert!(plugin
        .recipes()
        .snapshot()
        .lookup(item("gunpowder"), item("water_bucket"))
        .is_some());
}

#[test]
fn unknown_commands_and_extra_arguments_fail() {
    let (_dir, _clock, plugin) = plugin(1_000);
    let admin = Player::new(&["pbrew.reload"]);

    assert!(!plugin.handle_command(&CommandSender::Player(&admin), "brew"));
    assert!(!plugin.handle_command(&CommandSender::Player(&admin), "reload-recipes now"));
    assert_eq!(
        *admin.messages.lock(),
        [
            "Command not found",
            "Invalid Syntax. Usage: /reload-recipes"
        ]
    );
}

#[test]
fn help_lists_every_command() {
    let (_dir, _clock, plugin) = plugin(1_000);
    let player = Player::new(&[]);

    assert!(plugin.handle_command(&CommandSender::Player(&player), "help"));
    let messages = player.messages.lock();
    assert!(messages[0].contains("/help, /?"));
    assert!(messages[0].contains("/reload-recipes, /pbreload"));
}

#[test]
fn enable_writes_both_default_files() {
    let dir = tempfile::tempdir().unwrap();
    let plugin = ChemistryPlugin::enable(dir.path());

    assert!(dir.path().join("config.toml").exists());
    assert!(dir.path().join(RECIPE_FILE).exists());
    assert_eq!(plugin.config().cooldown.seconds, 60);
    assert_eq!(plugin.recipes().snapshot().starter().len(), 3);
}
