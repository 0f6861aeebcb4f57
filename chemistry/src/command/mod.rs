use std::fmt;

use chemistry_core::text::TextComponent;
use commands::{cmd_help, cmd_reload};
use dispatcher::{CommandDispatcher, CommandError};

use crate::{host::Viewer, ChemistryPlugin};

mod commands;
pub mod dispatcher;
pub mod tree;

pub enum CommandSender<'a> {
    Console,
    Player(&'a dyn Viewer),
}

impl fmt::Display for CommandSender<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CommandSender::Console => "Server",
                CommandSender::Player(p) => p.name(),
            }
        )
    }
}

impl CommandSender<'_> {
    pub fn send_message(&self, text: TextComponent<'_>) {
        match self {
            CommandSender::Console => log::info!("{}", text.to_pretty_console()),
            CommandSender::Player(p) => p.send_message(text),
        }
    }

    /// The console may run every command.
    #[must_use]
    pub fn has_permission(&self, node: &str) -> bool {
        match self {
            CommandSender::Console => true,
            CommandSender::Player(p) => p.has_permission(node),
        }
    }
}

#[must_use]
pub fn default_dispatcher() -> CommandDispatcher {
    let mut dispatcher = CommandDispatcher::default();

    dispatcher.register(cmd_reload::init_command_tree());
    dispatcher.register(cmd_help::init_command_tree());

    dispatcher
}

pub trait CommandExecutor: Sync {
    fn execute(
        &self,
        sender: &CommandSender<'_>,
        plugin: &ChemistryPlugin,
    ) -> Result<(), CommandError>;
}
