//! Planner session
//!
//! Owns the loaded catalog, the per-weapon selection state, and the active
//! weapon. The UI drives everything through this object; it never touches
//! the selection sets directly.

use crate::catalog::{Catalog, Weapon, WeaponMeta, TREE_COUNT};

use super::state::PlannerState;

/// One planning session over a loaded catalog
pub struct Planner {
    catalog: Catalog,
    state: PlannerState,
    active_weapon: Weapon,
}

impl Planner {
    /// Create a session; the active weapon starts at the first weapon
    /// present in the catalog (menu order).
    pub fn new(catalog: Catalog) -> Self {
        let active_weapon = catalog.weapons().next().unwrap_or(Weapon::ALL[0]);
        Self {
            catalog,
            state: PlannerState::new(),
            active_weapon,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn active_weapon(&self) -> Weapon {
        self.active_weapon
    }

    /// Metadata for the active weapon, if the catalog has it
    pub fn active_meta(&self) -> Option<&WeaponMeta> {
        self.catalog.weapon(self.active_weapon)
    }

    /// Switch to the next catalog weapon in menu order, wrapping around
    pub fn next_weapon(&mut self) {
        self.cycle_weapon(1);
    }

    /// Switch to the previous catalog weapon in menu order, wrapping around
    pub fn prev_weapon(&mut self) {
        self.cycle_weapon(-1);
    }

    fn cycle_weapon(&mut self, step: isize) {
        let weapons: Vec<Weapon> = self.catalog.weapons().collect();
        if weapons.is_empty() {
            return;
        }
        let current = weapons
            .iter()
            .position(|&w| w == self.active_weapon)
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(weapons.len() as isize);
        self.active_weapon = weapons[next as usize];
    }

    /// Toggle a skill on the active weapon
    pub fn toggle(&mut self, skill_id: &str) -> bool {
        self.state.toggle(self.active_weapon, skill_id, &self.catalog)
    }

    /// Reset the active weapon to its defaults
    pub fn reset(&mut self) {
        self.state.reset(self.active_weapon, &self.catalog);
    }

    /// Points spent on the active weapon
    pub fn spent_points(&self) -> usize {
        self.active_meta()
            .map(|meta| self.state.spent_points(self.active_weapon, meta))
            .unwrap_or(0)
    }

    /// Points spent per tree of the active weapon
    pub fn tree_points(&self) -> [usize; TREE_COUNT] {
        self.active_meta()
            .map(|meta| self.state.tree_points(self.active_weapon, meta))
            .unwrap_or([0; TREE_COUNT])
    }
}
