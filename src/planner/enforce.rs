//! Selection enforcement
//!
//! Restores the selection invariants after a removal: any selection the
//! validator no longer approves is dropped, and the pass repeats until a
//! full sweep removes nothing. Each pass only shrinks the set (bounded
//! below by the default skills), so the loop always terminates.

use std::collections::HashSet;

use crate::catalog::WeaponMeta;

use super::validate::can_select;

/// Remove every selection that is no longer valid, cascading to a fixed
/// point. Default skills are seeded into the result and never removed.
pub fn enforce(selected: &HashSet<String>, meta: &WeaponMeta) -> HashSet<String> {
    // Ids with no catalog record cannot be validated or counted; drop them.
    let mut result: HashSet<String> = selected
        .iter()
        .filter(|id| meta.get(id).is_some())
        .cloned()
        .collect();

    for skill in meta.skills() {
        if skill.unlock_default {
            result.insert(skill.id.clone());
        }
    }

    loop {
        let mut changed = false;
        let snapshot: Vec<String> = result.iter().cloned().collect();
        for id in snapshot {
            let Some(skill) = meta.get(&id) else { continue };
            if skill.unlock_default {
                continue;
            }
            // Validate against the set without the skill itself, so a row
            // or ultimate gate cannot be held open by the very selection
            // under test.
            result.remove(&id);
            if can_select(skill, &result, meta) {
                result.insert(id);
            } else {
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    if result.len() < selected.len() {
        log::debug!(
            "enforce dropped {} invalid selections for {}",
            selected.len() - result.len(),
            meta.weapon().label()
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::fixtures::{ids, sword_catalog};
    use crate::planner::validate::spent_points;
    use crate::catalog::Weapon;

    #[test]
    fn test_defaults_seeded() {
        let catalog = sword_catalog();
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        let result = enforce(&HashSet::new(), meta);
        assert_eq!(result, ids(&["d0"]));
    }

    #[test]
    fn test_valid_selection_untouched() {
        let catalog = sword_catalog();
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        let selected = ids(&["d0", "a1", "b1", "b2"]);
        assert_eq!(enforce(&selected, meta), selected);
    }

    #[test]
    fn test_prerequisite_cascade() {
        let catalog = sword_catalog();
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        // b1 requires a1, which is gone
        let selected = ids(&["b1", "b2"]);
        assert_eq!(enforce(&selected, meta), ids(&["d0", "b2"]));
    }

    #[test]
    fn test_row_gate_cascade_chain() {
        let catalog = sword_catalog();
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        // Tree 1 has no default: removing e1 starves f1's row gate
        let selected = ids(&["f1"]);
        assert_eq!(enforce(&selected, meta), ids(&["d0"]));
    }

    #[test]
    fn test_ultimate_dropped_without_min_spend() {
        let catalog = sword_catalog();
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        let selected = ids(&["a1", "b2", "c1", "u1"]);
        let result = enforce(&selected, meta);
        assert!(!result.contains("u1"));
        assert!(result.contains("c1"));
    }

    #[test]
    fn test_ultimate_kept_when_earned() {
        let catalog = sword_catalog();
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        let mut selected = ids(&[
            "a1", "a2", "a3", "b1", "b2", "b3", "b4", "c1", "c2", "c3",
        ]);
        selected.insert("u1".to_string());
        let result = enforce(&selected, meta);
        assert!(result.contains("u1"));
        assert_eq!(spent_points(&result, meta), 11);
    }

    #[test]
    fn test_ultimate_does_not_hold_itself_up() {
        let catalog = sword_catalog();
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        // Exactly 10 points including the ultimate: without itself the
        // spend is 9, so the ultimate must fall
        let selected = ids(&[
            "a1", "a2", "a3", "b1", "b2", "b3", "b4", "c1", "c2", "u1",
        ]);
        let result = enforce(&selected, meta);
        assert!(!result.contains("u1"));
    }

    #[test]
    fn test_unknown_ids_dropped() {
        let catalog = sword_catalog();
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        let selected = ids(&["a1", "ghost_skill"]);
        assert_eq!(enforce(&selected, meta), ids(&["d0", "a1"]));
    }

    #[test]
    fn test_idempotent() {
        let catalog = sword_catalog();
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        for selected in [
            HashSet::new(),
            ids(&["b1", "c1", "f1"]),
            ids(&["a1", "b1", "b2", "c1", "u1", "ghost"]),
        ] {
            let once = enforce(&selected, meta);
            let twice = enforce(&once, meta);
            assert_eq!(once, twice);
        }
    }
}
