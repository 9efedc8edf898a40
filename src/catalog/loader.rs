//! Catalog loading
//!
//! Loads the ability payload from an external JSON file, with fallback to a
//! built-in sample dataset so the planner works out of the box.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::layout::Catalog;
use super::raw::{AbilityPayload, RawAbility};

/// Default location of the ability payload
pub const CATALOG_PATH: &str = "assets/data/skills.json";

/// Errors raised while loading the ability payload
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load and normalize a catalog from a `{ "data": [...] }` payload file
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    let payload: AbilityPayload = serde_json::from_str(&content)?;
    log::info!("loaded {} raw abilities from {:?}", payload.data.len(), path);
    Ok(Catalog::from_records(&payload.data))
}

/// Load the catalog from the default path, or fall back to built-in data
pub fn load_or_default() -> Catalog {
    let path = Path::new(CATALOG_PATH);
    if path.exists() {
        match load_catalog(path) {
            Ok(catalog) => return catalog,
            Err(e) => {
                log::warn!("failed to load {:?}: {}. Using built-in data.", path, e)
            }
        }
    }
    Catalog::from_records(&builtin_records())
}

/// Built-in sample dataset: the Bow and its two trees
///
/// Enough content to exercise every planner rule without the external
/// payload: defaults, prerequisites, a row gap, and both ultimates.
pub fn builtin_records() -> Vec<RawAbility> {
    fn ability(
        id: &str,
        name: &str,
        description: &str,
        tree: u32,
        row: u32,
        column: u32,
        cooldown: f32,
        icon: &str,
    ) -> RawAbility {
        RawAbility {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            previous_ability_id: None,
            category: 0,
            weapon: "Bow".to_string(),
            tree,
            row,
            column,
            ultimate: false,
            slottable: true,
            cooldown,
            icon: Some(format!("icons/abilities/{icon}.png")),
            unlock_default: false,
        }
    }

    fn passive(
        id: &str,
        name: &str,
        description: &str,
        tree: u32,
        row: u32,
        column: u32,
        icon: &str,
    ) -> RawAbility {
        RawAbility {
            category: 2,
            slottable: false,
            ..ability(id, name, description, tree, row, column, 0.0, icon)
        }
    }

    vec![
        // Tree 0 - Skirmisher
        RawAbility {
            unlock_default: true,
            ..passive(
                "passive_bow_skirmish_instinct",
                "Skirmisher's Instinct",
                "Gain ${5.0}% haste while your bow is drawn.",
                0,
                0,
                0,
                "bowPassive2",
            )
        },
        ability(
            "ability_bow_poisonshot",
            "Poison Shot",
            "Shoot an arrow that deals ${50.0}% weapon damage and leaves a 3m poison cloud for 6.0s.",
            0,
            0,
            1,
            20.0,
            "bowAbility5",
        ),
        ability(
            "ability_bow_evadeshot",
            "Evade Shot",
            "Leap back 5m and shoot an arrow dealing ${90.0}% weapon damage.",
            0,
            0,
            2,
            15.0,
            "bowAbility2",
        ),
        ability(
            "ability_bow_rainofarrows",
            "Rain of Arrows",
            "Shoot a barrage covering a 4m radius that deals ${150.0}% weapon damage.",
            0,
            1,
            0,
            20.0,
            "bowAbility6",
        ),
        RawAbility {
            previous_ability_id: Some("ability_bow_poisonshot".to_string()),
            ..passive(
                "upgrade_bow_poisonshot_lingering",
                "Lingering Toxin",
                "Poison Shot's cloud lasts 2.0s longer.",
                0,
                1,
                1,
                "bowPassive6",
            )
        },
        passive(
            "passive_bow_skirmish_hastewhenfoesnear",
            "Catch Me If You Can",
            "If surrounded by 3 or more foes within 3m, gain ${20.0}% haste.",
            0,
            1,
            2,
            "bowPassive1",
        ),
        passive(
            "passive_bow_skirmish_cdrvslow",
            "Closing In",
            "Hitting a foe below ${50.0}% health reduces bow cooldowns by 5%.",
            0,
            2,
            1,
            "bowPassive3",
        ),
        RawAbility {
            ultimate: true,
            ..passive(
                "ultimate_bow_skirmish",
                "Evasive Tactics",
                "Gain Empower and deal ${15.0}% more damage for 5.0s after dodging.",
                0,
                0,
                1,
                "bowPassive5",
            )
        },
        // Tree 1 - Hunter
        RawAbility {
            unlock_default: true,
            ..passive(
                "passive_bow_hunter_basics",
                "Hunter's Eye",
                "Aiming down sights steadies your shot.",
                1,
                0,
                0,
                "bowPassive7",
            )
        },
        ability(
            "ability_bow_rapidshot",
            "Rapid Shot",
            "Shoot 3 consecutive arrows: ${100.0}%, ${100.0}%, then ${125.0}% weapon damage.",
            1,
            0,
            1,
            14.0,
            "bowAbility1",
        ),
        ability(
            "ability_bow_penetratingshot",
            "Penetrating Shot",
            "Shoot an arrow dealing ${150.0}% weapon damage that passes through targets.",
            1,
            0,
            2,
            18.0,
            "bowAbility3",
        ),
        ability(
            "ability_bow_splintershot",
            "Explosive Arrow",
            "Fire an arrow that explodes for ${135.0}% damage in a 2.5m radius.",
            1,
            1,
            0,
            22.0,
            "bow_ability_explosion",
        ),
        RawAbility {
            previous_ability_id: Some("ability_bow_penetratingshot".to_string()),
            ..passive(
                "passive_bow_hunter_dmgvsdist",
                "Long Range",
                "Deal ${10.0}% more base damage to foes at least 10m away.",
                1,
                1,
                1,
                "bowPassive4",
            )
        },
        passive(
            "passive_bow_hunter_crit",
            "Bullseye",
            "Increases critical chance of bow shots by ${10.0}%.",
            1,
            1,
            2,
            "bowPassive18",
        ),
        // Row numbering gap: nothing sits in row 2 of the Hunter tree
        passive(
            "passive_bow_hunter_finisher",
            "Finishing Shot",
            "Headshots against foes below ${30.0}% health deal 20% more damage.",
            1,
            3,
            1,
            "bowPassive12",
        ),
        RawAbility {
            ultimate: true,
            ..passive(
                "ultimate_bow_hunter",
                "Concussion",
                "When you land a headshot, deal ${20.0}% more damage.",
                1,
                0,
                1,
                "bowPassive19",
            )
        },
    ]
}
