use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ImageDto;

/// CDN layout and per-resource data dragon versions of a region.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RealmDto {
    /// Base CDN URL.
    pub cdn: String,
    /// Version of the stylesheet.
    pub css: String,
    /// Latest data dragon version.
    pub dd: String,
    /// Default language.
    pub l: String,
    /// Legacy script mode for IE6 and older.
    pub lg: String,
    /// Latest version of each data type, e.g. `champion`.
    pub n: HashMap<String, String>,
    pub profileiconmax: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    /// Realm version.
    pub v: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStringsDto {
    pub data: HashMap<String, String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MapDataDto {
    /// Keyed by map id.
    pub data: HashMap<String, MapDetailsDto>,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MapDetailsDto {
    pub image: ImageDto,
    pub map_id: i64,
    pub map_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unpurchasable_item_list: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn realm_round_trips() {
        let raw = json!({
            "cdn": "http://ddragon.leagueoflegends.com/cdn",
            "css": "0.151.2",
            "dd": "6.5.1",
            "l": "en_GB",
            "lg": "0.151.2",
            "n": {"champion": "6.5.1", "item": "6.5.1"},
            "profileiconmax": 28,
            "v": "6.5.1"
        });

        let realm: RealmDto = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(realm.n["champion"], "6.5.1");
        assert_eq!(realm.store, None);
        assert_eq!(serde_json::to_value(&realm).unwrap(), raw);
    }

    #[test]
    fn language_strings_round_trip() {
        let raw = json!({
            "data": {"Armor": "Armor", "mobile_news": "News"},
            "type": "language",
            "version": "6.5.1"
        });

        let strings: LanguageStringsDto = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(strings.kind, "language");
        assert_eq!(strings.data["mobile_news"], "News");
        assert_eq!(serde_json::to_value(&strings).unwrap(), raw);
    }

    #[test]
    fn maps_keep_missing_item_lists_absent() {
        let image = json!({"full": "map11.png", "group": "map", "h": 48, "sprite": "map0.png", "w": 48, "x": 0, "y": 0});
        let raw = json!({
            "data": {
                "10": {
                    "image": image,
                    "mapId": 10,
                    "mapName": "The Twisted Treeline",
                    "unpurchasableItemList": [3200, 3211]
                },
                "11": {
                    "image": image,
                    "mapId": 11,
                    "mapName": "Summoner's Rift"
                }
            },
            "type": "map",
            "version": "6.5.1"
        });

        let maps: MapDataDto = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(maps.data["10"].unpurchasable_item_list, vec![3200, 3211]);
        assert!(maps.data["11"].unpurchasable_item_list.is_empty());

        let back = serde_json::to_value(&maps).unwrap();
        assert!(back["data"]["11"].get("unpurchasableItemList").is_none());
        assert_eq!(back, raw);
    }
}
