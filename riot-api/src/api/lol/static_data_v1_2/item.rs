use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ImageDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemListDto {
    /// Defaults every item inherits, with `itemListData=all`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicDataDto>,
    pub data: HashMap<String, ItemDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<Vec<ItemTreeDto>>,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuneListDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicDataDto>,
    pub data: HashMap<String, RuneDto>,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}

/// Shape shared by items and runes. Without a data flag only `id`, `name` and
/// `description` are sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BasicDataDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colloq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consume_on_full: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ids of the components, as strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<GoldDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_from_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_store: Option<bool>,
    /// Ids of the items this one builds into, as strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub into: Option<Vec<String>>,
    /// Map id to availability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps: Option<HashMap<String, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plaintext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_champion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rune: Option<MetaDataDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_recipe: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<BasicDataStatsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// An item: the basic data shape.
pub type ItemDto = BasicDataDto;

/// A rune: the basic data shape, `rune` set.
pub type RuneDto = BasicDataDto;

/// Stat modifiers granted by an item or rune.
///
/// Keys are PascalCase, with an `r` prefix on rune-only modifiers. Only non-zero
/// modifiers are sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct BasicDataStatsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_armor_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_attack_speed_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_block_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_crit_chance_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_crit_damage_mod: Option<f64>,
    #[serde(rename = "FlatEXPBonus", skip_serializing_if = "Option::is_none")]
    pub flat_exp_bonus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_energy_pool_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_energy_regen_mod: Option<f64>,
    #[serde(rename = "FlatHPPoolMod", skip_serializing_if = "Option::is_none")]
    pub flat_hp_pool_mod: Option<f64>,
    #[serde(rename = "FlatHPRegenMod", skip_serializing_if = "Option::is_none")]
    pub flat_hp_regen_mod: Option<f64>,
    #[serde(rename = "FlatMPPoolMod", skip_serializing_if = "Option::is_none")]
    pub flat_mp_pool_mod: Option<f64>,
    #[serde(rename = "FlatMPRegenMod", skip_serializing_if = "Option::is_none")]
    pub flat_mp_regen_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_magic_damage_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_movement_speed_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_physical_damage_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_spell_block_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_armor_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_attack_speed_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_block_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_crit_chance_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_crit_damage_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_dodge_mod: Option<f64>,
    #[serde(rename = "PercentEXPBonus", skip_serializing_if = "Option::is_none")]
    pub percent_exp_bonus: Option<f64>,
    #[serde(rename = "PercentHPPoolMod", skip_serializing_if = "Option::is_none")]
    pub percent_hp_pool_mod: Option<f64>,
    #[serde(rename = "PercentHPRegenMod", skip_serializing_if = "Option::is_none")]
    pub percent_hp_regen_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_life_steal_mod: Option<f64>,
    #[serde(rename = "PercentMPPoolMod", skip_serializing_if = "Option::is_none")]
    pub percent_mp_pool_mod: Option<f64>,
    #[serde(rename = "PercentMPRegenMod", skip_serializing_if = "Option::is_none")]
    pub percent_mp_regen_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_magic_damage_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_movement_speed_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_physical_damage_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_spell_block_mod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_spell_vamp_mod: Option<f64>,
    #[serde(rename = "rFlatArmorModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_armor_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatArmorPenetrationMod", skip_serializing_if = "Option::is_none")]
    pub r_flat_armor_penetration_mod: Option<f64>,
    #[serde(
        rename = "rFlatArmorPenetrationModPerLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub r_flat_armor_penetration_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatCritChanceModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_crit_chance_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatCritDamageModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_crit_damage_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatDodgeMod", skip_serializing_if = "Option::is_none")]
    pub r_flat_dodge_mod: Option<f64>,
    #[serde(rename = "rFlatDodgeModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_dodge_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatEnergyModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_energy_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatEnergyRegenModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_energy_regen_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatGoldPer10Mod", skip_serializing_if = "Option::is_none")]
    pub r_flat_gold_per10_mod: Option<f64>,
    #[serde(rename = "rFlatHPModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_hp_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatHPRegenModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_hp_regen_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatMPModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_mp_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatMPRegenModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_mp_regen_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatMagicDamageModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_magic_damage_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatMagicPenetrationMod", skip_serializing_if = "Option::is_none")]
    pub r_flat_magic_penetration_mod: Option<f64>,
    #[serde(
        rename = "rFlatMagicPenetrationModPerLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub r_flat_magic_penetration_mod_per_level: Option<f64>,
    #[serde(
        rename = "rFlatMovementSpeedModPerLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub r_flat_movement_speed_mod_per_level: Option<f64>,
    #[serde(
        rename = "rFlatPhysicalDamageModPerLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub r_flat_physical_damage_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatSpellBlockModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_spell_block_mod_per_level: Option<f64>,
    #[serde(rename = "rFlatTimeDeadMod", skip_serializing_if = "Option::is_none")]
    pub r_flat_time_dead_mod: Option<f64>,
    #[serde(rename = "rFlatTimeDeadModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_flat_time_dead_mod_per_level: Option<f64>,
    #[serde(rename = "rPercentArmorPenetrationMod", skip_serializing_if = "Option::is_none")]
    pub r_percent_armor_penetration_mod: Option<f64>,
    #[serde(
        rename = "rPercentArmorPenetrationModPerLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub r_percent_armor_penetration_mod_per_level: Option<f64>,
    #[serde(
        rename = "rPercentAttackSpeedModPerLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub r_percent_attack_speed_mod_per_level: Option<f64>,
    #[serde(rename = "rPercentCooldownMod", skip_serializing_if = "Option::is_none")]
    pub r_percent_cooldown_mod: Option<f64>,
    #[serde(rename = "rPercentCooldownModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_percent_cooldown_mod_per_level: Option<f64>,
    #[serde(rename = "rPercentMagicPenetrationMod", skip_serializing_if = "Option::is_none")]
    pub r_percent_magic_penetration_mod: Option<f64>,
    #[serde(
        rename = "rPercentMagicPenetrationModPerLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub r_percent_magic_penetration_mod_per_level: Option<f64>,
    #[serde(
        rename = "rPercentMovementSpeedModPerLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub r_percent_movement_speed_mod_per_level: Option<f64>,
    #[serde(rename = "rPercentTimeDeadMod", skip_serializing_if = "Option::is_none")]
    pub r_percent_time_dead_mod: Option<f64>,
    #[serde(rename = "rPercentTimeDeadModPerLevel", skip_serializing_if = "Option::is_none")]
    pub r_percent_time_dead_mod_per_level: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoldDto {
    pub base: i32,
    pub purchasable: bool,
    pub sell: i32,
    pub total: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupDto {
    #[serde(rename = "MaxGroupOwnable")]
    pub max_group_ownable: String,
    pub key: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemTreeDto {
    pub header: String,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetaDataDto {
    pub is_rune: bool,
    pub tier: String,
    #[serde(rename = "type")]
    pub kind: String,
}
