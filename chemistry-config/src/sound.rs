use chemistry_core::{Sound, SoundCategory};
use serde::{Deserialize, Serialize};

/// The acknowledgment played to a player after a successful brew.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
    pub name: String,
    pub category: SoundCategory,
    pub volume: f32,
    pub pitch: f32,
}

impl SoundConfig {
    pub fn sound(&self) -> Option<Sound> {
        self.enabled.then(|| Sound {
            name: self.name.clone(),
            category: self.category,
            volume: self.volume,
            pitch: self.pitch,
        })
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            name: "entity.player.burp".to_string(),
            category: SoundCategory::Players,
            volume: 1.0,
            pitch: 1.0,
        }
    }
}
