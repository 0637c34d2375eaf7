use std::fmt;
use std::str::FromStr;

use crate::errors::SchemaError;

/// Regional shard of the API, used in host names and `/api/lol/{region}/` paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Br,
    Eune,
    Euw,
    Jp,
    Kr,
    Lan,
    Las,
    Na,
    Oce,
    Pbe,
    Ru,
    Tr,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Self::Br,
        Self::Eune,
        Self::Euw,
        Self::Jp,
        Self::Kr,
        Self::Lan,
        Self::Las,
        Self::Na,
        Self::Oce,
        Self::Pbe,
        Self::Ru,
        Self::Tr,
    ];

    /// Lower-case form found in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Br => "br",
            Self::Eune => "eune",
            Self::Euw => "euw",
            Self::Jp => "jp",
            Self::Kr => "kr",
            Self::Lan => "lan",
            Self::Las => "las",
            Self::Na => "na",
            Self::Oce => "oce",
            Self::Pbe => "pbe",
            Self::Ru => "ru",
            Self::Tr => "tr",
        }
    }

    /// Platform hosting this region's games.
    pub fn to_platform(self) -> Platform {
        match self {
            Self::Br => Platform::BR1,
            Self::Eune => Platform::EUN1,
            Self::Euw => Platform::EUW1,
            Self::Jp => Platform::JP1,
            Self::Kr => Platform::KR,
            Self::Lan => Platform::LA1,
            Self::Las => Platform::LA2,
            Self::Na => Platform::NA1,
            Self::Oce => Platform::OC1,
            Self::Pbe => Platform::PBE1,
            Self::Ru => Platform::RU,
            Self::Tr => Platform::TR1,
        }
    }
}

impl FromStr for Region {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "br" => Ok(Self::Br),
            "eune" => Ok(Self::Eune),
            "euw" => Ok(Self::Euw),
            "jp" => Ok(Self::Jp),
            "kr" => Ok(Self::Kr),
            "lan" => Ok(Self::Lan),
            "las" => Ok(Self::Las),
            "na" => Ok(Self::Na),
            "oce" => Ok(Self::Oce),
            "pbe" => Ok(Self::Pbe),
            "ru" => Ok(Self::Ru),
            "tr" => Ok(Self::Tr),
            _ => Err(SchemaError::InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Platform ID, the shard identifier used by observer-mode and champion mastery routes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    BR1,
    EUN1,
    EUW1,
    JP1,
    KR,
    LA1,
    LA2,
    NA1,
    OC1,
    PBE1,
    RU,
    TR1,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BR1 => "BR1",
            Self::EUN1 => "EUN1",
            Self::EUW1 => "EUW1",
            Self::JP1 => "JP1",
            Self::KR => "KR",
            Self::LA1 => "LA1",
            Self::LA2 => "LA2",
            Self::NA1 => "NA1",
            Self::OC1 => "OC1",
            Self::PBE1 => "PBE1",
            Self::RU => "RU",
            Self::TR1 => "TR1",
        }
    }

    /// Region whose host serves this platform.
    pub fn to_region(self) -> Region {
        match self {
            Self::BR1 => Region::Br,
            Self::EUN1 => Region::Eune,
            Self::EUW1 => Region::Euw,
            Self::JP1 => Region::Jp,
            Self::KR => Region::Kr,
            Self::LA1 => Region::Lan,
            Self::LA2 => Region::Las,
            Self::NA1 => Region::Na,
            Self::OC1 => Region::Oce,
            Self::PBE1 => Region::Pbe,
            Self::RU => Region::Ru,
            Self::TR1 => Region::Tr,
        }
    }
}

impl FromStr for Platform {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BR1" => Ok(Self::BR1),
            "EUN1" => Ok(Self::EUN1),
            "EUW1" => Ok(Self::EUW1),
            "JP1" => Ok(Self::JP1),
            "KR" => Ok(Self::KR),
            "LA1" => Ok(Self::LA1),
            "LA2" => Ok(Self::LA2),
            "NA1" => Ok(Self::NA1),
            "OC1" => Ok(Self::OC1),
            "PBE1" => Ok(Self::PBE1),
            "RU" => Ok(Self::RU),
            "TR1" => Ok(Self::TR1),
            _ => Err(SchemaError::InvalidPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_and_platform_conversions() {
        assert_eq!(Region::Euw.as_str(), "euw");
        assert_eq!(Region::Euw.to_platform(), Platform::EUW1);
        assert_eq!(Platform::LA2.to_region(), Region::Las);
        assert_eq!(Region::from_str("EUNE").unwrap(), Region::Eune);
        assert_eq!(Platform::from_str("na1").unwrap(), Platform::NA1);
        assert_eq!(Platform::OC1.to_string(), "OC1");
    }

    #[test]
    fn every_region_maps_back_through_its_platform() {
        for region in Region::ALL {
            assert_eq!(region.to_platform().to_region(), region);
        }
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(matches!(
            Region::from_str("mars"),
            Err(SchemaError::InvalidRegion(_))
        ));
        assert!(matches!(
            Platform::from_str("EUW"),
            Err(SchemaError::InvalidPlatform(_))
        ));
    }
}
