use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{ImageDto, LevelTipDto, SpellRange, SpellVarsDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummonerSpellListDto {
    pub data: HashMap<String, SummonerSpellDto>,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}

/// Summoner spell. Without `spellData` only `id`, `key`, `name`, `description`
/// and `summonerLevel` are sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummonerSpellDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown_burn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_burn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_type: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<Vec<Option<Vec<f64>>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_burn: Option<Vec<Option<String>>>,
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDto>,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leveltip: Option<LevelTipDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxrank: Option<i32>,
    /// Game modes the spell is available in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modes: Option<Vec<String>>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SpellRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_burn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_tooltip: Option<String>,
    pub summoner_level: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<Vec<SpellVarsDto>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_spell_list_is_sparse() {
        let raw = json!({
            "data": {
                "SummonerFlash": {
                    "description": "Teleports your champion a short distance toward your cursor's location.",
                    "id": 4,
                    "key": "SummonerFlash",
                    "name": "Flash",
                    "summonerLevel": 8
                }
            },
            "type": "summoner",
            "version": "6.5.1"
        });

        let list: SummonerSpellListDto = serde_json::from_value(raw.clone()).unwrap();
        let flash = &list.data["SummonerFlash"];
        assert_eq!(flash.id, 4);
        assert!(flash.range.is_none());
        assert_eq!(serde_json::to_value(&list).unwrap(), raw);
    }

    #[test]
    fn self_range_round_trips() {
        let raw = json!({
            "description": "Restores health.",
            "id": 7,
            "key": "SummonerHeal",
            "name": "Heal",
            "range": "self",
            "rangeBurn": "self",
            "summonerLevel": 1
        });

        let heal: SummonerSpellDto = serde_json::from_value(raw.clone()).unwrap();
        assert!(heal.range.as_ref().unwrap().is_self());
        assert_eq!(serde_json::to_value(&heal).unwrap(), raw);
    }
}
