//! Ability catalog
//!
//! Everything on the data side of the planner: raw upstream records, the
//! weapon vocabulary, normalization into uniform skills, and the per-weapon
//! tree layouts the selection rules run against.

pub mod raw;
pub mod weapons;
pub mod skill;
pub mod normalize;
pub mod layout;
pub mod loader;

pub use raw::{AbilityPayload, RawAbility};
pub use weapons::Weapon;
pub use skill::{Placement, Skill};
pub use layout::{Catalog, TreeLayout, WeaponMeta, TREE_COUNT};
pub use loader::{load_catalog, load_or_default, CatalogError};
