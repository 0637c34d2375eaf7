use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{ImageDto, LevelTipDto, SpellRange, SpellVarsDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionListDto {
    /// Keyed by champion key, or by id with `dataById`.
    pub data: HashMap<String, ChampionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Id to key, or key to id with `dataById`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<HashMap<String, String>>,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}

/// Static champion record. Only `id`, `key`, `name` and `title` come without a
/// `champData` flag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allytips: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blurb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemytips: Option<Vec<String>>,
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<InfoDto>,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lore: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive: Option<PassiveDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<Vec<RecommendedDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skins: Option<Vec<SkinDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spells: Option<Vec<ChampionSpellDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionSpellDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altimages: Option<Vec<ImageDto>>,
    pub cooldown: Vec<f64>,
    pub cooldown_burn: String,
    pub cost: Vec<i32>,
    pub cost_burn: String,
    pub cost_type: String,
    pub description: String,
    /// One array per effect index. Unused indexes, index 0 included, are `null`.
    pub effect: Vec<Option<Vec<f64>>>,
    pub effect_burn: Vec<Option<String>>,
    pub image: ImageDto,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leveltip: Option<LevelTipDto>,
    pub maxrank: i32,
    pub name: String,
    pub range: SpellRange,
    pub range_burn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    pub sanitized_description: String,
    pub sanitized_tooltip: String,
    pub tooltip: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vars: Vec<SpellVarsDto>,
}

impl ChampionSpellDto {
    /// Values of effect `index` (`e1` is index 1), if the spell uses it.
    pub fn effect_values(&self, index: usize) -> Option<&[f64]> {
        self.effect.get(index)?.as_deref()
    }
}

/// Ratings shown in the client, from 0 to 10.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    pub attack: i32,
    pub defense: i32,
    pub difficulty: i32,
    pub magic: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PassiveDto {
    pub description: String,
    pub image: ImageDto,
    pub name: String,
    pub sanitized_description: String,
}

/// Recommended item set of a champion for a map and mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedDto {
    pub blocks: Vec<BlockDto>,
    pub champion: String,
    pub map: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<bool>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockDto {
    pub items: Vec<BlockItemDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rec_math: Option<bool>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockItemDto {
    pub count: i32,
    pub id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkinDto {
    pub id: i32,
    pub name: String,
    pub num: i32,
}

/// Base stats and per-level growth.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub armor: f64,
    pub armorperlevel: f64,
    pub attackdamage: f64,
    pub attackdamageperlevel: f64,
    pub attackrange: f64,
    pub attackspeedoffset: f64,
    pub attackspeedperlevel: f64,
    pub crit: f64,
    pub critperlevel: f64,
    pub hp: f64,
    pub hpperlevel: f64,
    pub hpregen: f64,
    pub hpregenperlevel: f64,
    pub movespeed: f64,
    pub mp: f64,
    pub mpperlevel: f64,
    pub mpregen: f64,
    pub mpregenperlevel: f64,
    pub spellblock: f64,
    pub spellblockperlevel: f64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_champion_has_no_heavy_fields() {
        let raw = json!({"id": 266, "key": "Aatrox", "name": "Aatrox", "title": "the Darkin Blade"});
        let champion: ChampionDto = serde_json::from_value(raw.clone()).unwrap();
        assert!(champion.spells.is_none());
        assert!(champion.stats.is_none());
        assert_eq!(serde_json::to_value(&champion).unwrap(), raw);
    }

    #[test]
    fn spell_effect_keeps_null_slots() {
        let raw = json!({
            "cooldown": [16.0, 15.0, 14.0, 13.0, 12.0],
            "cooldownBurn": "16/15/14/13/12",
            "cost": [0, 0, 0, 0, 0],
            "costBurn": "0",
            "costType": "NoCost",
            "description": "Aatrox takes flight and slams down at a targeted location.",
            "effect": [null, [10.0, 15.0, 20.0, 25.0, 30.0], null, [0.6]],
            "effectBurn": [null, "10/15/20/25/30", null, "0.6"],
            "image": {"full": "AatroxQ.png", "group": "spell", "h": 48, "sprite": "spell0.png", "w": 48, "x": 384, "y": 48},
            "key": "AatroxQ",
            "leveltip": {"effect": ["{{ e1 }} -> {{ e1NL }}"], "label": ["Damage"]},
            "maxrank": 5,
            "name": "Dark Flight",
            "range": [650, 650, 650, 650, 650],
            "rangeBurn": "650",
            "resource": "No Cost",
            "sanitizedDescription": "Aatrox takes flight.",
            "sanitizedTooltip": "Aatrox takes flight.",
            "tooltip": "Aatrox takes flight.",
            "vars": [{"coeff": [0.6], "key": "a1", "link": "bonusattackdamage"}]
        });

        let spell: ChampionSpellDto = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(spell.effect.len(), 4);
        assert_eq!(spell.effect_values(0), None);
        assert_eq!(spell.effect_values(1).unwrap()[4], 30.0);
        assert_eq!(spell.effect_values(3), Some(&[0.6][..]));
        assert_eq!(spell.effect_values(9), None);
        assert_eq!(spell.range, SpellRange::Ranks(vec![650; 5]));
        assert_eq!(serde_json::to_value(&spell).unwrap(), raw);
    }
}
