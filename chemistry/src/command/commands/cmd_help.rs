use chemistry_core::text::color::NamedColor;
use chemistry_core::text::TextComponent;
use itertools::Itertools;

use crate::command::dispatcher::CommandError;
use crate::command::tree::CommandTree;
use crate::command::{CommandExecutor, CommandSender};
use crate::ChemistryPlugin;

const NAMES: [&str; 2] = ["help", "?"];

const DESCRIPTION: &str = "Print a help message.";

struct CommandHelpExecutor;

impl CommandExecutor for CommandHelpExecutor {
    fn execute(
        &self,
        sender: &CommandSender<'_>,
        plugin: &ChemistryPlugin,
    ) -> Result<(), CommandError> {
        let mut message = TextComponent::text("Commands:").color_named(NamedColor::Yellow);

        for tree in plugin
            .dispatcher()
            .trees()
            .sorted_by_key(|tree| tree.names[0])
        {
            message = message
                .add_child(
                    TextComponent::text_string(format!("\n/{}", tree.names.iter().join(", /")))
                        .color_named(NamedColor::Gold),
                )
                .add_child(
                    TextComponent::text_string(format!(" - {}", tree.description))
                        .color_named(NamedColor::White),
                );
        }

        sender.send_message(message);
        Ok(())
    }
}

pub fn init_command_tree() -> CommandTree {
    CommandTree::new(NAMES, DESCRIPTION).execute(&CommandHelpExecutor)
}
