//! Tree layout construction
//!
//! Groups a weapon's skills into its two trees. Within a tree, regular
//! skills are bucketed by row and ordered by column; ultimates sit in a
//! separate capstone list. Row numbering may have gaps: "the previous row"
//! always means the nearest lower row that actually holds skills.

use std::collections::{BTreeMap, HashMap};

use super::normalize::normalize_record;
use super::raw::RawAbility;
use super::skill::Skill;
use super::weapons::Weapon;

/// Number of trees per weapon
pub const TREE_COUNT: usize = 2;

/// One tree of a weapon, holding indices into [`WeaponMeta::skills`]
#[derive(Debug, Clone, Default)]
pub struct TreeLayout {
    /// Row index → skills in that row, ordered by column. The sorted keys
    /// are the row order.
    rows: BTreeMap<u32, Vec<usize>>,
    /// Capstone skills, ordered by column
    ultimates: Vec<usize>,
    /// Highest column in use, ultimates included (grid sizing hint)
    max_column: u32,
}

impl TreeLayout {
    /// Ascending row indices that contain at least one skill
    pub fn row_order(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.keys().copied()
    }

    /// Skills in a row (empty for rows that hold none)
    pub fn row(&self, row: u32) -> &[usize] {
        self.rows.get(&row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nearest lower row that contains skills, if any
    pub fn previous_row(&self, row: u32) -> Option<u32> {
        self.rows.range(..row).next_back().map(|(&r, _)| r)
    }

    pub fn ultimates(&self) -> &[usize] {
        &self.ultimates
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn max_column(&self) -> u32 {
        self.max_column
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.ultimates.is_empty()
    }
}

/// Everything the planner knows about one weapon
///
/// Built once when the catalog loads and immutable afterwards.
#[derive(Debug, Clone)]
pub struct WeaponMeta {
    weapon: Weapon,
    skills: Vec<Skill>,
    by_id: HashMap<String, usize>,
    trees: [TreeLayout; TREE_COUNT],
}

impl WeaponMeta {
    fn new(weapon: Weapon) -> Self {
        Self {
            weapon,
            skills: Vec::new(),
            by_id: HashMap::new(),
            trees: Default::default(),
        }
    }

    fn push(&mut self, skill: Skill) {
        let index = self.skills.len();
        let layout = &mut self.trees[skill.tree];
        layout.max_column = layout.max_column.max(skill.column());
        match skill.row() {
            Some(row) => layout.rows.entry(row).or_default().push(index),
            None => layout.ultimates.push(index),
        }
        self.by_id.insert(skill.id.clone(), index);
        self.skills.push(skill);
    }

    /// Order every row and the capstone list by column
    fn sort_columns(&mut self) {
        let skills = &self.skills;
        for layout in &mut self.trees {
            for indices in layout.rows.values_mut() {
                indices.sort_by_key(|&i| skills[i].column());
            }
            layout.ultimates.sort_by_key(|&i| skills[i].column());
        }
    }

    pub fn weapon(&self) -> Weapon {
        self.weapon
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn get(&self, id: &str) -> Option<&Skill> {
        self.by_id.get(id).map(|&i| &self.skills[i])
    }

    pub fn skill_at(&self, index: usize) -> &Skill {
        &self.skills[index]
    }

    pub fn tree(&self, tree: usize) -> &TreeLayout {
        &self.trees[tree]
    }

    /// Skills of one tree in presentation order: rows top to bottom, each
    /// left to right, then the capstone list.
    pub fn tree_skills(&self, tree: usize) -> Vec<&Skill> {
        let layout = self.tree(tree);
        layout
            .row_order()
            .flat_map(|row| layout.row(row))
            .chain(layout.ultimates())
            .map(|&i| &self.skills[i])
            .collect()
    }

    /// Prerequisite edges (parent, child) within one tree
    ///
    /// Edges whose parent is missing from the catalog or lives in the other
    /// tree are skipped.
    pub fn dependency_edges(&self, tree: usize) -> Vec<(&Skill, &Skill)> {
        self.skills
            .iter()
            .filter(|skill| skill.tree == tree)
            .filter_map(|child| {
                let parent = child.prerequisite.as_deref().and_then(|id| self.get(id))?;
                (parent.tree == tree).then_some((parent, child))
            })
            .collect()
    }

    /// Skills that list the given skill as their prerequisite
    pub fn dependents(&self, id: &str) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|skill| skill.prerequisite.as_deref() == Some(id))
            .collect()
    }
}

/// The full normalized catalog, one [`WeaponMeta`] per supported weapon
/// present in the data.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    weapons: HashMap<Weapon, WeaponMeta>,
}

impl Catalog {
    /// Normalize raw records and build per-weapon metadata
    ///
    /// Records that fail to normalize are dropped; the upstream catalog
    /// routinely carries entries the planner does not cover.
    pub fn from_records(records: &[RawAbility]) -> Catalog {
        let mut weapons: HashMap<Weapon, WeaponMeta> = HashMap::new();
        let mut dropped = 0usize;

        for raw in records {
            match normalize_record(raw) {
                Some(skill) => weapons
                    .entry(skill.weapon)
                    .or_insert_with(|| WeaponMeta::new(skill.weapon))
                    .push(skill),
                None => {
                    log::debug!(
                        "skipping ability {} (weapon tag {:?}, tree {})",
                        raw.id,
                        raw.weapon,
                        raw.tree
                    );
                    dropped += 1;
                }
            }
        }

        for meta in weapons.values_mut() {
            meta.sort_columns();
        }

        log::info!(
            "catalog built: {} weapons, {} abilities ({} records skipped)",
            weapons.len(),
            weapons.values().map(|m| m.skills.len()).sum::<usize>(),
            dropped
        );

        Catalog { weapons }
    }

    pub fn weapon(&self, weapon: Weapon) -> Option<&WeaponMeta> {
        self.weapons.get(&weapon)
    }

    /// Weapons present in the catalog, in menu order
    pub fn weapons(&self) -> impl Iterator<Item = Weapon> + '_ {
        Weapon::ALL
            .iter()
            .copied()
            .filter(|w| self.weapons.contains_key(w))
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, tree: u32, row: u32, column: u32) -> RawAbility {
        RawAbility {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            previous_ability_id: None,
            category: 0,
            weapon: "Sword".to_string(),
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

    fn ultimate(id: &str, tree: u32, column: u32) -> RawAbility {
        RawAbility {
            ultimate: true,
            ..record(id, tree, 0, column)
        }
    }

    #[test]
    fn test_rows_grouped_and_sorted() {
        let catalog = Catalog::from_records(&[
            record("b", 0, 1, 2),
            record("a", 0, 1, 0),
            record("c", 0, 0, 1),
        ]);
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        let layout = meta.tree(0);

        assert_eq!(layout.row_order().collect::<Vec<_>>(), vec![0, 1]);
        let row1: Vec<&str> = layout
            .row(1)
            .iter()
            .map(|&i| meta.skill_at(i).id.as_str())
            .collect();
        assert_eq!(row1, vec!["a", "b"]);
    }

    #[test]
    fn test_row_gaps_skipped() {
        let catalog = Catalog::from_records(&[
            record("low", 0, 0, 0),
            record("high", 0, 3, 0),
        ]);
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        let layout = meta.tree(0);

        assert_eq!(layout.row_order().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(layout.previous_row(3), Some(0));
        assert_eq!(layout.previous_row(0), None);
        assert!(layout.row(2).is_empty());
    }

    #[test]
    fn test_ultimates_separate_and_sorted() {
        let catalog = Catalog::from_records(&[
            ultimate("u2", 0, 3),
            ultimate("u1", 0, 1),
            record("a", 0, 0, 0),
        ]);
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        let layout = meta.tree(0);

        assert_eq!(layout.row_count(), 1);
        let ults: Vec<&str> = layout
            .ultimates()
            .iter()
            .map(|&i| meta.skill_at(i).id.as_str())
            .collect();
        assert_eq!(ults, vec!["u1", "u2"]);
        // Ultimates count toward the grid width
        assert_eq!(layout.max_column(), 3);
    }

    #[test]
    fn test_trees_partitioned() {
        let catalog = Catalog::from_records(&[
            record("left", 0, 0, 0),
            record("right", 1, 0, 0),
        ]);
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        assert_eq!(meta.tree(0).row(0).len(), 1);
        assert_eq!(meta.tree(1).row(0).len(), 1);
        assert_eq!(meta.get("right").unwrap().tree, 1);
    }

    #[test]
    fn test_unmapped_records_dropped() {
        let mut other = record("other", 0, 0, 0);
        other.weapon = "Greatstaff".to_string();
        let catalog = Catalog::from_records(&[record("a", 0, 0, 0), other]);
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        assert_eq!(meta.skills().len(), 1);
        assert!(meta.get("other").is_none());
    }

    #[test]
    fn test_dependency_edges() {
        let mut child = record("child", 0, 1, 0);
        child.previous_ability_id = Some("parent".to_string());
        let mut stray = record("stray", 1, 0, 0);
        stray.previous_ability_id = Some("parent".to_string());
        let mut dangling = record("dangling", 0, 1, 1);
        dangling.previous_ability_id = Some("missing".to_string());

        let catalog =
            Catalog::from_records(&[record("parent", 0, 0, 0), child, stray, dangling]);
        let meta = catalog.weapon(Weapon::Sword).unwrap();

        let edges: Vec<(&str, &str)> = meta
            .dependency_edges(0)
            .iter()
            .map(|(p, c)| (p.id.as_str(), c.id.as_str()))
            .collect();
        // Cross-tree and dangling parents are skipped
        assert_eq!(edges, vec![("parent", "child")]);

        let dependents: Vec<&str> = meta
            .dependents("parent")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(dependents, vec!["child", "stray"]);
    }

    #[test]
    fn test_tree_skills_order() {
        let catalog = Catalog::from_records(&[
            ultimate("u", 0, 0),
            record("b", 0, 2, 0),
            record("a2", 0, 0, 1),
            record("a1", 0, 0, 0),
        ]);
        let meta = catalog.weapon(Weapon::Sword).unwrap();
        let order: Vec<&str> = meta.tree_skills(0).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["a1", "a2", "b", "u"]);
    }

    #[test]
    fn test_weapons_in_menu_order() {
        let mut bow = record("bow_a", 0, 0, 0);
        bow.weapon = "Bow".to_string();
        let catalog = Catalog::from_records(&[record("sword_a", 0, 0, 0), bow]);
        let weapons: Vec<Weapon> = catalog.weapons().collect();
        assert_eq!(weapons, vec![Weapon::Sword, Weapon::Bow]);
    }
}
