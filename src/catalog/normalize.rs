//! Skill normalization
//!
//! Converts raw upstream records into [`Skill`]s: resolves description
//! templates, maps weapon tags, and derives asset lookup keys. Records for
//! unsupported weapons are dropped, not reported; the upstream catalog
//! carries content this planner does not cover.

use std::sync::LazyLock;

use regex::Regex;

use super::raw::RawAbility;
use super::skill::{Placement, Skill};
use super::weapons::Weapon;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

static PADDED_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.0+(\d*)").unwrap());

static ICON_EXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(png|jpg|jpeg)$").unwrap());

static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Resolve `${...}` placeholders and trim decorative zero-padding
/// ("6.0s" reads as "6s", "20.000" as "20").
pub fn sanitize_description(value: &str) -> String {
    let resolved = PLACEHOLDER.replace_all(value, "$1");
    PADDED_DECIMAL
        .replace_all(&resolved, |caps: &regex::Captures| {
            let whole = &caps[1];
            let decimals = &caps[2];
            let fractional: f64 = format!("0.{decimals}").parse().unwrap_or(0.0);
            if decimals.is_empty() || fractional < 1e-4 {
                return whole.to_string();
            }
            // Real fractional tail after the padding: keep one decimal.
            match caps[0].parse::<f64>() {
                Ok(number) => {
                    let rounded = format!("{number:.1}");
                    rounded.strip_suffix(".0").unwrap_or(&rounded).to_string()
                }
                Err(_) => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Flatten a name into an asset lookup key: strip URL escapes, whitespace
/// and parentheses, fold dash runs into underscores, lowercase.
fn flatten_key(value: &str) -> String {
    let cleaned = value.replace("%20", "");
    let cleaned: String = cleaned
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .collect();
    DASH_RUN.replace_all(&cleaned, "_").to_lowercase()
}

/// Derive an icon lookup key from an icon path (or any identifier)
///
/// Drops the query string, takes the basename, strips the image extension,
/// then flattens. Returns `None` when nothing usable remains.
pub fn icon_key(value: &str) -> Option<String> {
    let without_query = value.split('?').next().unwrap_or(value);
    let base = without_query.rsplit('/').next()?;
    let base = ICON_EXT.replace(base, "");
    if base.is_empty() {
        return None;
    }
    let key = flatten_key(&base);
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Derive the animation lookup key for a skill id
pub fn anim_key(id: &str) -> String {
    flatten_key(id)
}

/// Normalize one raw record
///
/// Returns `None` for records this planner does not cover: unmapped weapon
/// tags and tree indices outside the weapon's two trees.
pub fn normalize_record(raw: &RawAbility) -> Option<Skill> {
    let weapon = Weapon::from_api_tag(&raw.weapon)?;
    if raw.tree > 1 {
        return None;
    }

    let placement = if raw.ultimate {
        Placement::Ultimate { column: raw.column }
    } else {
        Placement::Row {
            row: raw.row,
            column: raw.column,
        }
    };

    let icon_key = raw
        .icon
        .as_deref()
        .and_then(icon_key)
        .or_else(|| icon_key(&raw.id));

    Some(Skill {
        id: raw.id.clone(),
        name: raw.name.clone(),
        weapon,
        tree: raw.tree as usize,
        placement,
        category: raw.category,
        slottable: raw.slottable,
        prerequisite: raw.previous_ability_id.clone(),
        unlock_default: raw.unlock_default,
        cooldown: raw.cooldown,
        description: sanitize_description(&raw.description),
        icon_key,
        anim_key: anim_key(&raw.id),
    })
}
