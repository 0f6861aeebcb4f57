use std::collections::HashMap;

use chemistry_core::text::{color::NamedColor, TextComponent};

use crate::command::dispatcher::CommandError::{
    GeneralCommandIssue, OtherChemistry, PermissionDenied,
};
use crate::command::tree::{Command, CommandTree};
use crate::command::CommandSender;
use crate::error::ChemistryError;
use crate::ChemistryPlugin;

#[derive(Debug)]
pub enum CommandError {
    /// Shown to the sender as is.
    GeneralCommandIssue(String),

    /// The sender does not meet the command's requirement.
    PermissionDenied,

    /// Logged on the server. The executor has already told the sender what went wrong.
    OtherChemistry(Box<dyn ChemistryError>),
}

/// Stores registered [`CommandTree`]s and dispatches commands to them.
#[derive(Default)]
pub struct CommandDispatcher {
    pub(crate) commands: HashMap<&'static str, Command>,
}

impl CommandDispatcher {
    /// Runs `cmd` and reports failures to the sender. Returns whether the command
    /// succeeded.
    pub fn handle_command(
        &self,
        sender: &CommandSender<'_>,
        plugin: &ChemistryPlugin,
        cmd: &str,
    ) -> bool {
        let Err(err) = self.dispatch(sender, plugin, cmd) else {
            return true;
        };
        match err {
            GeneralCommandIssue(issue) => {
                sender.send_message(TextComponent::text_string(issue).color_named(NamedColor::Red));
            }
            PermissionDenied => {
                log::debug!("{sender} tried to run \"{cmd}\" without permission");
                sender.send_message(
                    TextComponent::text(&plugin.config().messages.no_permission)
                        .color_named(NamedColor::Red),
                );
            }
            OtherChemistry(err) => err.log(),
        }
        false
    }

    /// Execute a command using its corresponding [`CommandTree`].
    pub(crate) fn dispatch(
        &self,
        sender: &CommandSender<'_>,
        plugin: &ChemistryPlugin,
        cmd: &str,
    ) -> Result<(), CommandError> {
        let mut parts = cmd.split_whitespace();
        let key = parts
            .next()
            .ok_or(GeneralCommandIssue("Empty Command".to_string()))?;
        let tree = self.get_tree(key.trim_start_matches('/'))?;

        if let Some(requirement) = tree.requirement {
            if !requirement(sender, plugin) {
                return Err(PermissionDenied);
            }
        }
        if parts.next().is_some() {
            return Err(GeneralCommandIssue(format!(
                "Invalid Syntax. Usage: {tree}"
            )));
        }

        let Some(executor) = tree.executor else {
            log::error!("Command \"{tree}\" has nothing to execute");
            return Err(GeneralCommandIssue(
                "Internal Error (See logs for details)".into(),
            ));
        };
        executor.execute(sender, plugin)
    }

    pub(crate) fn get_tree(&self, key: &str) -> Result<&CommandTree, CommandError> {
        let key = key.to_ascii_lowercase();
        let command = self
            .commands
            .get(key.as_str())
            .ok_or(GeneralCommandIssue("Command not found".to_string()))?;

        match command {
            Command::Tree(tree) => Ok(tree),
            Command::Alias(target) => {
                let Some(Command::Tree(tree)) = self.commands.get(target) else {
                    log::error!("Error while parsing command alias \"{key}\": pointing to \"{target}\" which is not a valid tree");
                    return Err(GeneralCommandIssue(
                        "Internal Error (See logs for details)".into(),
                    ));
                };
                Ok(tree)
            }
        }
    }

    /// Every registered command, without aliases.
    pub(crate) fn trees(&self) -> impl Iterator<Item = &CommandTree> {
        self.commands.values().filter_map(|command| match command {
            Command::Tree(tree) => Some(tree),
            Command::Alias(_) => None,
        })
    }

    /// Register a command with the dispatcher.
    pub(crate) fn register(&mut self, tree: CommandTree) {
        let primary_name = tree.names[0];

        for &name in &tree.names[1..] {
            self.commands.insert(name, Command::Alias(primary_name));
        }

        self.commands.insert(primary_name, Command::Tree(tree));
    }
}
