use std::{fmt, str::FromStr};

use crate::{normalize_identifier, UnknownIdentifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enchantment {
    AquaAffinity,
    BaneOfArthropods,
    BindingCurse,
    BlastProtection,
    Channeling,
    DepthStrider,
    Efficiency,
    FeatherFalling,
    FireAspect,
    FireProtection,
    Flame,
    Fortune,
    FrostWalker,
    Impaling,
    Infinity,
    Knockback,
    Looting,
    Loyalty,
    LuckOfTheSea,
    Lure,
    Mending,
    Multishot,
    Piercing,
    Power,
    ProjectileProtection,
    Protection,
    Punch,
    QuickCharge,
    Respiration,
    Riptide,
    Sharpness,
    SilkTouch,
    Smite,
    SoulSpeed,
    SweepingEdge,
    SwiftSneak,
    Thorns,
    Unbreaking,
    VanishingCurse,
}

const ENCHANTMENT_NAMES: [(Enchantment, &str); 39] = [
    (Enchantment::AquaAffinity, "aqua_affinity"),
    (Enchantment::BaneOfArthropods, "bane_of_arthropods"),
    (Enchantment::BindingCurse, "binding_curse"),
    (Enchantment::BlastProtection, "blast_protection"),
    (Enchantment::Channeling, "channeling"),
    (Enchantment::DepthStrider, "depth_strider"),
    (Enchantment::Efficiency, "efficiency"),
    (Enchantment::FeatherFalling, "feather_falling"),
    (Enchantment::FireAspect, "fire_aspect"),
    (Enchantment::FireProtection, "fire_protection"),
    (Enchantment::Flame, "flame"),
    (Enchantment::Fortune, "fortune"),
    (Enchantment::FrostWalker, "frost_walker"),
    (Enchantment::Impaling, "impaling"),
    (Enchantment::Infinity, "infinity"),
    (Enchantment::Knockback, "knockback"),
    (Enchantment::Looting, "looting"),
    (Enchantment::Loyalty, "loyalty"),
    (Enchantment::LuckOfTheSea, "luck_of_the_sea"),
    (Enchantment::Lure, "lure"),
    (Enchantment::Mending, "mending"),
    (Enchantment::Multishot, "multishot"),
    (Enchantment::Piercing, "piercing"),
    (Enchantment::Power, "power"),
    (Enchantment::ProjectileProtection, "projectile_protection"),
    (Enchantment::Protection, "protection"),
    (Enchantment::Punch, "punch"),
    (Enchantment::QuickCharge, "quick_charge"),
    (Enchantment::Respiration, "respiration"),
    (Enchantment::Riptide, "riptide"),
    (Enchantment::Sharpness, "sharpness"),
    (Enchantment::SilkTouch, "silk_touch"),
    (Enchantment::Smite, "smite"),
    (Enchantment::SoulSpeed, "soul_speed"),
    (Enchantment::SweepingEdge, "sweeping_edge"),
    (Enchantment::SwiftSneak, "swift_sneak"),
    (Enchantment::Thorns, "thorns"),
    (Enchantment::Unbreaking, "unbreaking"),
    (Enchantment::VanishingCurse, "vanishing_curse"),
];

impl Enchantment {
    pub fn name(self) -> &'static str {
        ENCHANTMENT_NAMES
            .iter()
            .find(|(enchantment, _)| *enchantment == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }
}

impl FromStr for Enchantment {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_identifier(s);
        ENCHANTMENT_NAMES
            .iter()
            .find(|(_, enchantment_name)| *enchantment_name == name)
            .map(|(enchantment, _)| *enchantment)
            .ok_or_else(|| UnknownIdentifier {
                kind: "enchantment",
                identifier: s.to_string(),
            })
    }
}

impl fmt::Display for Enchantment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minecraft:{}", self.name())
    }
}
