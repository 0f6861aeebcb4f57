use std::collections::HashMap;

use chemistry_config::CooldownConfig;
use parking_lot::Mutex;
use uuid::Uuid;

/// Remembers when each player last opened a station.
///
/// The ledger is swept lazily: once it holds more than `sweep_threshold`
/// entries, the next activation drops every entry older than the retention
/// horizon. The horizon is never shorter than the cooldown itself, so a sweep
/// cannot end anyone's cooldown early.
pub struct CooldownLedger {
    entries: Mutex<HashMap<Uuid, u64>>,
    seconds: u64,
    retention_secs: u64,
    sweep_threshold: usize,
}

impl CooldownLedger {
    pub fn new(config: &CooldownConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            seconds: config.seconds,
            retention_secs: config.retention_secs().max(config.seconds),
            sweep_threshold: config.sweep_threshold,
        }
    }

    /// Records an activation at `now` unless the actor is still cooling down, in
    /// which case the remaining seconds are returned and nothing is recorded.
    pub fn try_activate(&self, actor: Uuid, now: u64) -> Result<(), u64> {
        let mut entries = self.entries.lock();
        if let Some(remaining) = Self::remaining_at(&entries, actor, now, self.seconds) {
            return Err(remaining);
        }

        entries.insert(actor, now);
        if entries.len() > self.sweep_threshold {
            let before = entries.len();
            entries.retain(|_, last| now.saturating_sub(*last) < self.retention_secs);
            log::debug!("Evicted {} cooldown entries", before - entries.len());
        }
        Ok(())
    }

    /// Seconds until the actor may activate again, if they are cooling down.
    pub fn remaining(&self, actor: Uuid, now: u64) -> Option<u64> {
        Self::remaining_at(&self.entries.lock(), actor, now, self.seconds)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    fn remaining_at(entries: &HashMap<Uuid, u64>, actor: Uuid, now: u64, seconds: u64) -> Option<u64> {
        let ready_at = entries.get(&actor)?.saturating_add(seconds);
        (ready_at > now).then(|| ready_at - now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(seconds: u64, retention_windows: u64, sweep_threshold: usize) -> CooldownLedger {
        CooldownLedger::new(&CooldownConfig {
            seconds,
            retention_windows,
            sweep_threshold,
        })
    }

    #[test]
    fn second_activation_inside_window_is_denied() {
        let ledger = ledger(60, 4, 1024);
        let player = Uuid::new_v4();

        assert_eq!(ledger.try_activate(player, 1_000), Ok(()));
        assert_eq!(ledger.try_activate(player, 1_010), Err(50));
        assert_eq!(ledger.remaining(player, 1_059), Some(1));
        assert_eq!(ledger.try_activate(player, 1_060), Ok(()));
    }

    #[test]
    fn denial_does_not_refresh_the_timestamp() {
        let ledger = ledger(60, 4, 1024);
        let player = Uuid::new_v4();

        ledger.try_activate(player, 0).unwrap();
        assert!(ledger.try_activate(player, 59).is_err());
        assert_eq!(ledger.try_activate(player, 60), Ok(()));
        assert_eq!(ledger.remaining(player, 60), Some(60));
    }

    #[test]
    fn players_cool_down_independently() {
        let ledger = ledger(60, 4, 1024);
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        ledger.try_activate(alice, 0).unwrap();
        assert_eq!(ledger.try_activate(bob, 1), Ok(()));
        assert_eq!(ledger.remaining(bob, 2), Some(59));
    }

    #[test]
    fn sweep_drops_only_expired_entries() {
        let ledger = ledger(10, 2, 3);
        let old: Vec<_> = (0..2).map(|_| Uuid::new_v4()).collect();
        for player in &old {
            ledger.try_activate(*player, 0).unwrap();
        }
        let cooling = Uuid::new_v4();
        ledger.try_activate(cooling, 18).unwrap();
        assert_eq!(ledger.len(), 3);

        ledger.try_activate(Uuid::new_v4(), 25).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.remaining(old[0], 25), None);
        assert_eq!(ledger.try_activate(cooling, 26), Err(2));
    }

    #[test]
    fn sweep_never_shortens_a_cooldown() {
        let ledger = ledger(100, 0, 0);
        let player = Uuid::new_v4();

        ledger.try_activate(player, 0).unwrap();
        ledger.try_activate(Uuid::new_v4(), 99).unwrap();
        assert_eq!(ledger.remaining(player, 99), Some(1));
    }

    #[test]
    fn ledger_stays_bounded() {
        let ledger = ledger(1, 1, 16);
        for now in 0..1_000 {
            ledger.try_activate(Uuid::new_v4(), now).unwrap();
        }
        assert!(ledger.len() <= 17);
        assert!(!ledger.is_empty());
    }
}
