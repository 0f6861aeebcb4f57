use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

#[serde_inline_default]
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct CooldownConfig {
    /// Seconds a player has to wait between opening two brewing stations
    #[serde_inline_default(60)]
    pub seconds: u64,
    /// How many cooldown windows a finished entry is kept before it may be evicted
    #[serde_inline_default(4)]
    pub retention_windows: u64,
    /// Eviction only runs once the ledger holds more entries than this
    #[serde_inline_default(1024)]
    pub sweep_threshold: usize,
}

impl CooldownConfig {
    /// Age in seconds after which a ledger entry is eligible for eviction.
    pub fn retention_secs(&self) -> u64 {
        self.seconds.saturating_mul(self.retention_windows.max(1))
    }
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            seconds: 60,
            retention_windows: 4,
            sweep_threshold: 1024,
        }
    }
}
