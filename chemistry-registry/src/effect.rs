//! Status effects that can be attached to brewed potions.

use std::{fmt, str::FromStr};

use chemistry_core::text::color::RGBColor;

use crate::{normalize_identifier, UnknownIdentifier};

/// Duration in ticks used when a recipe does not configure one.
pub const DEFAULT_DURATION: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEffectType {
    Speed,
    Slowness,
    Haste,
    MiningFatigue,
    Strength,
    InstantHealth,
    InstantDamage,
    JumpBoost,
    Nausea,
    Regeneration,
    Resistance,
    FireResistance,
    WaterBreathing,
    Invisibility,
    Blindness,
    NightVision,
    Hunger,
    Weakness,
    Poison,
    Wither,
    HealthBoost,
    Absorption,
    Saturation,
    Glowing,
    Levitation,
    Luck,
    Unluck,
    SlowFalling,
    ConduitPower,
    DolphinsGrace,
    BadOmen,
    HeroOfTheVillage,
    Darkness,
}

const EFFECT_NAMES: [(StatusEffectType, &str); 33] = [
    (StatusEffectType::Speed, "speed"),
    (StatusEffectType::Slowness, "slowness"),
    (StatusEffectType::Haste, "haste"),
    (StatusEffectType::MiningFatigue, "mining_fatigue"),
    (StatusEffectType::Strength, "strength"),
    (StatusEffectType::InstantHealth, "instant_health"),
    (StatusEffectType::InstantDamage, "instant_damage"),
    (StatusEffectType::JumpBoost, "jump_boost"),
    (StatusEffectType::Nausea, "nausea"),
    (StatusEffectType::Regeneration, "regeneration"),
    (StatusEffectType::Resistance, "resistance"),
    (StatusEffectType::FireResistance, "fire_resistance"),
    (StatusEffectType::WaterBreathing, "water_breathing"),
    (StatusEffectType::Invisibility, "invisibility"),
    (StatusEffectType::Blindness, "blindness"),
    (StatusEffectType::NightVision, "night_vision"),
    (StatusEffectType::Hunger, "hunger"),
    (StatusEffectType::Weakness, "weakness"),
    (StatusEffectType::Poison, "poison"),
    (StatusEffectType::Wither, "wither"),
    (StatusEffectType::HealthBoost, "health_boost"),
    (StatusEffectType::Absorption, "absorption"),
    (StatusEffectType::Saturation, "saturation"),
    (StatusEffectType::Glowing, "glowing"),
    (StatusEffectType::Levitation, "levitation"),
    (StatusEffectType::Luck, "luck"),
    (StatusEffectType::Unluck, "unluck"),
    (StatusEffectType::SlowFalling, "slow_falling"),
    (StatusEffectType::ConduitPower, "conduit_power"),
    (StatusEffectType::DolphinsGrace, "dolphins_grace"),
    (StatusEffectType::BadOmen, "bad_omen"),
    (StatusEffectType::HeroOfTheVillage, "hero_of_the_village"),
    (StatusEffectType::Darkness, "darkness"),
];

// Older server APIs exposed these effects under different names and existing
// recipe files still use them.
const LEGACY_NAMES: [(&str, StatusEffectType); 10] = [
    ("slow", StatusEffectType::Slowness),
    ("fast_digging", StatusEffectType::Haste),
    ("slow_digging", StatusEffectType::MiningFatigue),
    ("increase_damage", StatusEffectType::Strength),
    ("heal", StatusEffectType::InstantHealth),
    ("harm", StatusEffectType::InstantDamage),
    ("jump", StatusEffectType::JumpBoost),
    ("confusion", StatusEffectType::Nausea),
    ("damage_resistance", StatusEffectType::Resistance),
    ("bad_luck", StatusEffectType::Unluck),
];

impl StatusEffectType {
    pub fn name(self) -> &'static str {
        EFFECT_NAMES
            .iter()
            .find(|(effect, _)| *effect == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }
}

impl FromStr for StatusEffectType {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_identifier(s);
        EFFECT_NAMES
            .iter()
            .find(|(_, effect_name)| *effect_name == name)
            .map(|(effect, _)| *effect)
            .or_else(|| {
                LEGACY_NAMES
                    .iter()
                    .find(|(legacy, _)| *legacy == name)
                    .map(|(_, effect)| *effect)
            })
            .ok_or_else(|| UnknownIdentifier {
                kind: "effect",
                identifier: s.to_string(),
            })
    }
}

impl fmt::Display for StatusEffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minecraft:{}", self.name())
    }
}

/// A custom effect carried by a potion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotionEffect {
    pub effect_type: StatusEffectType,
    /// Duration in game ticks (20 ticks = 1 second).
    pub duration: u32,
    /// The amplifier (level - 1). 0 = Level I, 1 = Level II, etc.
    pub amplifier: u8,
    /// Tint the potion takes on because of this effect.
    pub color: Option<RGBColor>,
}

impl PotionEffect {
    pub const fn new(effect_type: StatusEffectType, duration: u32, amplifier: u8) -> Self {
        Self {
            effect_type,
            duration,
            amplifier,
            color: None,
        }
    }
}
