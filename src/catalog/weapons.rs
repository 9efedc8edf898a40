//! Weapon vocabulary
//!
//! The planner supports a fixed roster of weapons. The upstream ability
//! data tags records with its own vocabulary ("Heal", "Rifle", "Axe"...),
//! which maps onto the roster here.

use serde::{Deserialize, Serialize};

/// A supported weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weapon {
    Flail,
    Greatsword,
    Sword,
    Rapier,
    FireStaff,
    LifeStaff,
    Bow,
    WarHammer,
    Musket,
    Hatchet,
    Blunderbuss,
    GreatAxe,
    IceGauntlet,
    VoidGauntlet,
    Spear,
}

impl Weapon {
    /// All weapons in menu order
    pub const ALL: [Weapon; 15] = [
        Weapon::Flail,
        Weapon::Greatsword,
        Weapon::Sword,
        Weapon::Rapier,
        Weapon::FireStaff,
        Weapon::LifeStaff,
        Weapon::Bow,
        Weapon::WarHammer,
        Weapon::Musket,
        Weapon::Hatchet,
        Weapon::Blunderbuss,
        Weapon::GreatAxe,
        Weapon::IceGauntlet,
        Weapon::VoidGauntlet,
        Weapon::Spear,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Weapon::Flail => "Flail",
            Weapon::Greatsword => "Greatsword",
            Weapon::Sword => "Sword",
            Weapon::Rapier => "Rapier",
            Weapon::FireStaff => "Fire Staff",
            Weapon::LifeStaff => "Life Staff",
            Weapon::Bow => "Bow",
            Weapon::WarHammer => "War Hammer",
            Weapon::Musket => "Musket",
            Weapon::Hatchet => "Hatchet",
            Weapon::Blunderbuss => "Blunderbuss",
            Weapon::GreatAxe => "Great Axe",
            Weapon::IceGauntlet => "Ice Gauntlet",
            Weapon::VoidGauntlet => "Void Gauntlet",
            Weapon::Spear => "Spear",
        }
    }

    /// Tag used by the upstream ability data for this weapon
    pub fn api_tag(&self) -> &'static str {
        match self {
            Weapon::Flail => "Flail",
            Weapon::Greatsword => "Greatsword",
            Weapon::Sword => "Sword",
            Weapon::Rapier => "Rapier",
            Weapon::FireStaff => "Fire",
            Weapon::LifeStaff => "Heal",
            Weapon::Bow => "Bow",
            Weapon::WarHammer => "Warhammer",
            Weapon::Musket => "Rifle",
            Weapon::Hatchet => "Axe",
            Weapon::Blunderbuss => "Blunderbuss",
            Weapon::GreatAxe => "GreatAxe",
            Weapon::IceGauntlet => "Ice",
            Weapon::VoidGauntlet => "VoidGauntlet",
            Weapon::Spear => "Spear",
        }
    }

    /// Resolve an upstream weapon tag, if it names a supported weapon
    pub fn from_api_tag(tag: &str) -> Option<Weapon> {
        Weapon::ALL.iter().copied().find(|w| w.api_tag() == tag)
    }

    /// Display names of the weapon's two mastery trees
    pub fn tree_names(&self) -> [&'static str; 2] {
        match self {
            Weapon::Flail => ["CLERIC", "BASTION"],
            Weapon::Greatsword => ["ONSLAUGHT", "DEFIANCE"],
            Weapon::Sword => ["SWORDMASTER", "DEFENDER"],
            Weapon::Rapier => ["BLOOD", "GRACE"],
            Weapon::FireStaff => ["FIRE MAGE", "PYROMANCER"],
            Weapon::LifeStaff => ["HEALING", "PROTECTOR"],
            Weapon::Bow => ["SKIRMISHER", "HUNTER"],
            Weapon::WarHammer => ["JUGGERNAUT", "CROWD CRUSHER"],
            Weapon::Musket => ["SHARPSHOOTER", "TRAPPER"],
            Weapon::Hatchet => ["BERSERKER", "THROWING"],
            Weapon::Blunderbuss => ["CONTAINMENT", "CHAOS"],
            Weapon::GreatAxe => ["REAPER", "MAULER"],
            Weapon::IceGauntlet => ["ICE TEMPEST", "BUILDER"],
            Weapon::VoidGauntlet => ["ANNIHILATION", "DECAY"],
            Weapon::Spear => ["ZONER", "IMPALER"],
        }
    }
}
