//! Selection state
//!
//! Per-weapon sets of selected skill ids. Only toggle and reset mutate the
//! sets; rendering code reads state through the derived tri-state and the
//! point counters.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::catalog::{Catalog, Skill, Weapon, WeaponMeta, TREE_COUNT};

use super::enforce::enforce;
use super::validate::{can_select, spent_points};

static EMPTY: LazyLock<HashSet<String>> = LazyLock::new(HashSet::new);

/// Derived display state of a single skill node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Cannot be selected right now
    Locked,
    /// May be selected
    Selectable,
    /// Part of the current selection (or a default)
    Selected,
}

/// All per-weapon selections
#[derive(Debug, Clone, Default)]
pub struct PlannerState {
    selections: HashMap<Weapon, HashSet<String>>,
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected ids for a weapon
    pub fn selected(&self, weapon: Weapon) -> &HashSet<String> {
        self.selections.get(&weapon).unwrap_or(&EMPTY)
    }

    /// Toggle a skill on or off
    ///
    /// Defaults never toggle. Adding consults the validator (budget
    /// included); removing runs enforcement so dependents cascade out.
    /// Returns whether the selection changed.
    pub fn toggle(&mut self, weapon: Weapon, skill_id: &str, catalog: &Catalog) -> bool {
        let Some(meta) = catalog.weapon(weapon) else {
            return false;
        };
        let Some(skill) = meta.get(skill_id) else {
            return false;
        };
        if skill.unlock_default {
            return false;
        }

        let current = self.selections.entry(weapon).or_default();
        if current.contains(skill_id) {
            current.remove(skill_id);
            let before = current.len();
            *current = enforce(current, meta);
            if current.len() < before {
                log::debug!(
                    "removing {} cascaded {} further removals",
                    skill_id,
                    before - current.len()
                );
            }
            true
        } else if can_select(skill, current, meta) {
            current.insert(skill_id.to_string());
            true
        } else {
            false
        }
    }

    /// Clear a weapon back to its default skills
    pub fn reset(&mut self, weapon: Weapon, catalog: &Catalog) {
        let Some(meta) = catalog.weapon(weapon) else {
            return;
        };
        let defaults: HashSet<String> = meta
            .skills()
            .iter()
            .filter(|s| s.unlock_default)
            .map(|s| s.id.clone())
            .collect();
        self.selections.insert(weapon, defaults);
    }

    /// Derived tri-state for one skill
    pub fn node_state(&self, skill: &Skill, meta: &WeaponMeta) -> NodeState {
        let selected = self.selected(meta.weapon());
        if skill.unlock_default || selected.contains(&skill.id) {
            NodeState::Selected
        } else if can_select(skill, selected, meta) {
            NodeState::Selectable
        } else {
            NodeState::Locked
        }
    }

    /// Total non-default points spent on a weapon
    pub fn spent_points(&self, weapon: Weapon, meta: &WeaponMeta) -> usize {
        spent_points(self.selected(weapon), meta)
    }

    /// Non-default points spent per tree
    pub fn tree_points(&self, weapon: Weapon, meta: &WeaponMeta) -> [usize; TREE_COUNT] {
        let mut counts = [0usize; TREE_COUNT];
        for id in self.selected(weapon) {
            if let Some(skill) = meta.get(id) {
                if !skill.unlock_default {
                    counts[skill.tree] += 1;
                }
            }
        }
        counts
    }
}
