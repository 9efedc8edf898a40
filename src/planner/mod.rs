//! Skill-build planning
//!
//! The selection side of the planner: the validation predicate, the
//! cascading enforcement pass, per-weapon selection state, and the session
//! object the UI drives.

pub mod validate;
pub mod enforce;
pub mod state;
pub mod session;

pub use validate::{can_select, spent_points, POINT_BUDGET, ULTIMATE_MIN_SPEND};
pub use enforce::enforce;
pub use state::{NodeState, PlannerState};
pub use session::Planner;

/// Shared fixture catalogs for the planner tests
///
/// The Sword fixture covers every rule: a default in tree 0 row 0, a
/// prerequisite chain, a dangling prerequisite, a row-number gap (rows 0,
/// 1, 3), a second tree without defaults, and an ultimate per tree.
#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::HashSet;

    use crate::catalog::{Catalog, RawAbility};

    pub fn ids(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn record(id: &str, weapon: &str, tree: u32, row: u32, column: u32) -> RawAbility {
        RawAbility {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            previous_ability_id: None,
            category: 0,
            weapon: weapon.to_string(),
            tree,
            row,
            column,
            ultimate: false,
            slottable: false,
            cooldown: 0.0,
            icon: None,
            unlock_default: false,
        }
    }

    pub fn sword_catalog() -> Catalog {
        let records = vec![
            // Tree 0, row 0: one default plus three regular skills
            RawAbility {
                unlock_default: true,
                ..record("d0", "Sword", 0, 0, 0)
            },
            record("a1", "Sword", 0, 0, 1),
            record("a2", "Sword", 0, 0, 2),
            record("a3", "Sword", 0, 0, 3),
            // Tree 0, row 1: b1 requires a1, b5 requires a missing skill
            RawAbility {
                previous_ability_id: Some("a1".to_string()),
                ..record("b1", "Sword", 0, 1, 0)
            },
            record("b2", "Sword", 0, 1, 1),
            record("b3", "Sword", 0, 1, 2),
            record("b4", "Sword", 0, 1, 3),
            RawAbility {
                previous_ability_id: Some("missing".to_string()),
                ..record("b5", "Sword", 0, 1, 4)
            },
            // Tree 0, row 3: row 2 is intentionally absent
            record("c1", "Sword", 0, 3, 0),
            record("c2", "Sword", 0, 3, 1),
            record("c3", "Sword", 0, 3, 2),
            // Tree 0 capstone
            RawAbility {
                ultimate: true,
                ..record("u1", "Sword", 0, 0, 2)
            },
            // Tree 1: no defaults
            record("e1", "Sword", 1, 0, 0),
            record("e2", "Sword", 1, 0, 1),
            record("f1", "Sword", 1, 1, 0),
            RawAbility {
                ultimate: true,
                ..record("u2", "Sword", 1, 0, 1)
            },
        ];
        Catalog::from_records(&records)
    }

    /// Twenty-five gate-free skills in one row, for budget tests
    pub fn wide_catalog() -> Catalog {
        let records: Vec<RawAbility> = (0..25)
            .map(|i| record(&format!("w{i}"), "Rapier", 0, 0, i))
            .collect();
        Catalog::from_records(&records)
    }
}
