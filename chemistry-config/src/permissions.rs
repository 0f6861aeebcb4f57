use serde::{Deserialize, Serialize};

/// Permission nodes checked against the host's permission system.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct PermissionsConfig {
    /// Required to open and brew in a custom station
    #[serde(rename = "use")]
    pub use_station: String,
    /// Required to run the recipe reload command
    pub reload: String,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            use_station: "pbrew.potions".to_string(),
            reload: "pbrew.reload".to_string(),
        }
    }
}
