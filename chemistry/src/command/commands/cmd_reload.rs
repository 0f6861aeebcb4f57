use chemistry_core::text::color::NamedColor;
use chemistry_core::text::TextComponent;

use crate::command::dispatcher::CommandError;
use crate::command::tree::CommandTree;
use crate::command::{CommandExecutor, CommandSender};
use crate::ChemistryPlugin;

const NAMES: [&str; 2] = ["reload-recipes", "pbreload"];

const DESCRIPTION: &str = "Reload the brewing recipes from disk.";

struct ReloadExecutor;

impl CommandExecutor for ReloadExecutor {
    fn execute(
        &self,
        sender: &CommandSender<'_>,
        plugin: &ChemistryPlugin,
    ) -> Result<(), CommandError> {
        let messages = &plugin.config().messages;
        match plugin.recipes().reload() {
            Ok(table) => {
                log::info!("{sender} reloaded the recipes, {} are active", table.len());
                sender.send_message(TextComponent::text(&messages.reloaded));
                Ok(())
            }
            Err(err) => {
                sender.send_message(
                    TextComponent::text(&messages.reload_failed).color_named(NamedColor::Red),
                );
                Err(CommandError::OtherChemistry(err.into()))
            }
        }
    }
}

pub fn init_command_tree() -> CommandTree {
    CommandTree::new(NAMES, DESCRIPTION)
        .require(|sender, plugin| sender.has_permission(&plugin.config().permissions.reload))
        .execute(&ReloadExecutor)
}
