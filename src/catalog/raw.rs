//! Raw ability records as delivered by the upstream data source.

use serde::{Deserialize, Serialize};

/// The ability payload wrapper: `{ "data": [ ... ] }`
#[derive(Debug, Clone, Deserialize)]
pub struct AbilityPayload {
    pub data: Vec<RawAbility>,
}

/// One raw ability record, before normalization
///
/// Field names follow the upstream vocabulary. `weapon` is an upstream tag
/// that may or may not map to a supported weapon; `description` is a
/// template with embedded `${...}` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAbility {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub previous_ability_id: Option<String>,
    pub category: u32,
    pub weapon: String,
    pub tree: u32,
    pub row: u32,
    pub column: u32,
    pub ultimate: bool,
    pub slottable: bool,
    #[serde(default)]
    pub cooldown: f32,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub unlock_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        let json = r#"{
            "data": [{
                "id": "ability_bow_poisonshot",
                "name": "Poison Shot",
                "description": "Deals ${50.0}% weapon damage.",
                "previousAbilityId": null,
                "category": 0,
                "weapon": "Bow",
                "tree": 0,
                "row": 0,
                "column": 1,
                "ultimate": false,
                "slottable": true,
                "cooldown": 20,
                "icon": "icons/abilities/bowAbility5.png",
                "unlockDefault": false
            }]
        }"#;

        let payload: AbilityPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.data.len(), 1);
        let raw = &payload.data[0];
        assert_eq!(raw.id, "ability_bow_poisonshot");
        assert_eq!(raw.previous_ability_id, None);
        assert!(raw.slottable);
        assert!(!raw.unlock_default);
    }

    #[test]
    fn test_optional_fields_default() {
        // Records without icon, cooldown, prerequisite or the default flag
        // still parse.
        let json = r#"{
            "id": "passive_bow_hunter_crit",
            "name": "Bullseye",
            "description": "Increases critical chance by 10%.",
            "category": 2,
            "weapon": "Bow",
            "tree": 1,
            "row": 1,
            "column": 2,
            "ultimate": false,
            "slottable": false
        }"#;

        let raw: RawAbility = serde_json::from_str(json).unwrap();
        assert_eq!(raw.icon, None);
        assert_eq!(raw.cooldown, 0.0);
        assert!(!raw.unlock_default);
    }
}
