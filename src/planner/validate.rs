//! Selection validation
//!
//! The pure predicate behind every toggle: can this skill be selected (or
//! kept) given the current selection and the weapon's tree layout. Total
//! over all inputs; never panics, never allocates.

use std::collections::HashSet;

use crate::catalog::{Placement, Skill, WeaponMeta};

/// Maximum number of non-default skills selectable per weapon
pub const POINT_BUDGET: usize = 19;

/// Non-default selections required before a tree's ultimate unlocks
pub const ULTIMATE_MIN_SPEND: usize = 10;

/// Count of selected ids that map to non-default skills
pub fn spent_points(selected: &HashSet<String>, meta: &WeaponMeta) -> usize {
    selected
        .iter()
        .filter(|id| meta.get(id).is_some_and(|s| !s.unlock_default))
        .count()
}

/// Whether a row holds at least one selected-or-default skill
fn row_has_active(
    meta: &WeaponMeta,
    tree: usize,
    row: u32,
    selected: &HashSet<String>,
) -> bool {
    meta.tree(tree).row(row).iter().any(|&i| {
        let skill = meta.skill_at(i);
        skill.unlock_default || selected.contains(&skill.id)
    })
}

/// Whether `skill` may be selected under the current selection
///
/// Already-selected skills always pass; to re-validate an existing
/// selection, call this with the skill removed from `selected` first.
pub fn can_select(skill: &Skill, selected: &HashSet<String>, meta: &WeaponMeta) -> bool {
    if skill.unlock_default {
        return true;
    }
    if selected.contains(&skill.id) {
        return true;
    }
    if spent_points(selected, meta) >= POINT_BUDGET {
        return false;
    }
    // A prerequisite pointing at nothing in the catalog can never be in the
    // selected set, so the gate simply stays closed.
    if let Some(prereq) = skill.prerequisite.as_deref() {
        if !selected.contains(prereq) {
            return false;
        }
    }

    let layout = meta.tree(skill.tree);
    match skill.placement {
        Placement::Row { row, .. } => match layout.previous_row(row) {
            Some(prev) => row_has_active(meta, skill.tree, prev, selected),
            None => true,
        },
        Placement::Ultimate { .. } => {
            layout
                .row_order()
                .all(|row| row_has_active(meta, skill.tree, row, selected))
                && spent_points(selected, meta) >= ULTIMATE_MIN_SPEND
        }
    }
}
