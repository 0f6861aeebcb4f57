use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default, rename_all = "kebab-case")]
pub struct MessagesConfig {
    /// Shown in brackets in front of every player facing message
    pub prefix: String,
    pub cooldown: String,
    pub no_permission: String,
    pub reloaded: String,
    pub reload_failed: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            prefix: "Chemistry".to_string(),
            cooldown: "You are currently on cooldown!".to_string(),
            no_permission: "You do not have permission to use this command.".to_string(),
            reloaded: "Config file reloaded.".to_string(),
            reload_failed: "Could not reload the recipes, see the server log.".to_string(),
        }
    }
}
