//! Closed enumerations of everything a buyer can pick.
//!
//! Wire codes match the codes the simulation form has always used, so a
//! persisted selection deserializes unchanged.

pub mod region;
pub mod vehicle;

pub use region::Region;
pub use vehicle::{VehicleClass, VehicleType};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rate-schedule bucket selecting which price column applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionCategory {
    /// 統一地方選挙
    Unity,
    /// 一般地方選挙
    General,
    /// 衆・参議院選挙
    National,
    /// 広告宣伝車
    Ad,
}

impl ElectionCategory {
    pub const ALL: [ElectionCategory; 4] = [
        ElectionCategory::Unity,
        ElectionCategory::General,
        ElectionCategory::National,
        ElectionCategory::Ad,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ElectionCategory::Unity => "unity",
            ElectionCategory::General => "general",
            ElectionCategory::National => "national",
            ElectionCategory::Ad => "ad",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            ElectionCategory::Unity => "統一地方選挙",
            ElectionCategory::General => "一般地方選挙",
            ElectionCategory::National => "衆・参議院選挙",
            ElectionCategory::Ad => "広告宣伝車",
        }
    }
}

impl fmt::Display for ElectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Amplifier output tier in watts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AmpTier {
    #[serde(rename = "60")]
    W60,
    #[serde(rename = "150")]
    W150,
    #[serde(rename = "300")]
    W300,
    #[serde(rename = "600")]
    W600,
}

impl AmpTier {
    pub const ALL: [AmpTier; 4] = [AmpTier::W60, AmpTier::W150, AmpTier::W300, AmpTier::W600];

    pub fn watts(self) -> u32 {
        match self {
            AmpTier::W60 => 60,
            AmpTier::W150 => 150,
            AmpTier::W300 => 300,
            AmpTier::W600 => 600,
        }
    }

    pub fn label(self) -> String {
        format!("{}W", self.watts())
    }
}

/// Signboard lighting variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignalLight {
    OutLight,
    InLight,
}

impl SignalLight {
    pub const ALL: [SignalLight; 2] = [SignalLight::OutLight, SignalLight::InLight];

    pub fn code(self) -> &'static str {
        match self {
            SignalLight::OutLight => "outLight",
            SignalLight::InLight => "inLight",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SignalLight::OutLight => "外照明",
            SignalLight::InLight => "内照明",
        }
    }
}

/// Number of roof speakers. Both layouts are included in the car price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerCount {
    #[default]
    #[serde(alias = "twe")]
    Two,
    Four,
}

impl SpeakerCount {
    pub fn label(self) -> &'static str {
        match self {
            SpeakerCount::Two => "2個",
            SpeakerCount::Four => "4個",
        }
    }
}
