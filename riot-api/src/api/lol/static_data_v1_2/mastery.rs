use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ImageDto;
use crate::types::legal::MasteryTreeType;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MasteryListDto {
    pub data: HashMap<String, MasteryDto>,
    /// Layout of the three trees, with `masteryListData=tree`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<MasteryTreeDto>,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MasteryDto {
    /// One line per rank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mastery_tree: Option<MasteryTreeType>,
    pub name: String,
    /// Id of the required mastery, `"0"` when none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prereq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_description: Option<Vec<String>>,
}

/// The three mastery trees, keyed `Cunning`, `Ferocity` and `Resolve`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MasteryTreeDto {
    pub cunning: Vec<MasteryTreeListDto>,
    pub ferocity: Vec<MasteryTreeListDto>,
    pub resolve: Vec<MasteryTreeListDto>,
}

/// One row of a tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MasteryTreeListDto {
    /// Empty cells are `null`.
    pub mastery_tree_items: Vec<Option<MasteryTreeItemDto>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MasteryTreeItemDto {
    pub mastery_id: i32,
    pub prereq: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn tree_rows_keep_empty_cells() {
        let raw = json!({
            "Cunning": [{"masteryTreeItems": [{"masteryId": 6311, "prereq": "0"}, null, {"masteryId": 6312, "prereq": "0"}]}],
            "Ferocity": [],
            "Resolve": [{"masteryTreeItems": [null]}]
        });

        let tree: MasteryTreeDto = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(tree.cunning[0].mastery_tree_items.len(), 3);
        assert!(tree.cunning[0].mastery_tree_items[1].is_none());
        assert_eq!(serde_json::to_value(&tree).unwrap(), raw);
    }

    #[test]
    fn mastery_tree_type_is_legal_value() {
        let raw = json!({
            "id": 6111,
            "masteryTree": "Ferocity",
            "name": "Fury",
            "ranks": 5
        });

        let mastery: MasteryDto = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(mastery.mastery_tree, Some(MasteryTreeType::Ferocity));
        assert_eq!(serde_json::to_value(&mastery).unwrap(), raw);
    }
}
