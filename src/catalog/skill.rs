//! Normalized skill representation.

use serde::{Deserialize, Serialize};

use super::weapons::Weapon;

/// Where a skill sits inside its tree
///
/// Regular skills occupy a (row, column) cell; the ultimate occupies the
/// capstone slot below the rows and only carries a column hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    Row { row: u32, column: u32 },
    Ultimate { column: u32 },
}

/// A normalized skill
///
/// Produced once by the catalog and immutable afterwards. `description` has
/// its placeholders resolved; `icon_key` and `anim_key` are flattened asset
/// lookup keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub weapon: Weapon,
    /// Which of the weapon's two trees this skill belongs to (0 or 1)
    pub tree: usize,
    pub placement: Placement,
    pub category: u32,
    /// Whether the skill occupies an action slot (presentation only)
    pub slottable: bool,
    /// Skill that must be selected before this one
    pub prerequisite: Option<String>,
    /// Always active, cannot be toggled, free of point cost
    pub unlock_default: bool,
    /// Cooldown in seconds; zero for passives
    pub cooldown: f32,
    pub description: String,
    pub icon_key: Option<String>,
    pub anim_key: String,
}

impl Skill {
    pub fn is_ultimate(&self) -> bool {
        matches!(self.placement, Placement::Ultimate { .. })
    }

    /// Row index, or `None` for the ultimate
    pub fn row(&self) -> Option<u32> {
        match self.placement {
            Placement::Row { row, .. } => Some(row),
            Placement::Ultimate { .. } => None,
        }
    }

    pub fn column(&self) -> u32 {
        match self.placement {
            Placement::Row { column, .. } | Placement::Ultimate { column } => column,
        }
    }
}
