use std::fmt;

use super::{CommandExecutor, CommandSender};
use crate::ChemistryPlugin;

/// Checked before a command runs; a sender failing it is told they lack the
/// permission.
pub type Requirement = fn(&CommandSender<'_>, &ChemistryPlugin) -> bool;

pub enum Command {
    Tree(CommandTree),
    Alias(&'static str),
}

pub struct CommandTree {
    pub(crate) names: Vec<&'static str>,
    pub(crate) description: &'static str,
    pub(crate) requirement: Option<Requirement>,
    pub(crate) executor: Option<&'static dyn CommandExecutor>,
}

impl CommandTree {
    /// provide at least one name
    #[must_use]
    pub fn new<const NAME_COUNT: usize>(
        names: [&'static str; NAME_COUNT],
        description: &'static str,
    ) -> Self {
        assert!(NAME_COUNT > 0);

        Self {
            names: names.to_vec(),
            description,
            requirement: None,
            executor: None,
        }
    }

    #[must_use]
    pub fn require(mut self, requirement: Requirement) -> Self {
        self.requirement = Some(requirement);
        self
    }

    /// Runs when the command is sent without any arguments.
    #[must_use]
    pub fn execute(mut self, executor: &'static dyn CommandExecutor) -> Self {
        self.executor = Some(executor);
        self
    }
}

impl fmt::Display for CommandTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.names[0])
    }
}
