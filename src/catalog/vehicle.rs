//! Vehicle classes and the models filed under each of them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size tier grouping vehicle types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    S,
    M,
    L,
    Ll,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 4] = [
        VehicleClass::S,
        VehicleClass::M,
        VehicleClass::L,
        VehicleClass::Ll,
    ];

    pub fn code(self) -> &'static str {
        match self {
            VehicleClass::S => "s",
            VehicleClass::M => "m",
            VehicleClass::L => "l",
            VehicleClass::Ll => "ll",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleClass::S => "Sクラス",
            VehicleClass::M => "Mクラス",
            VehicleClass::L => "Lクラス",
            VehicleClass::Ll => "LLクラス",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            VehicleClass::S => "軽自動車",
            VehicleClass::M => "普通車",
            VehicleClass::L => "ミニバン",
            VehicleClass::Ll => "大型バン",
        }
    }

    pub fn target(self) -> &'static str {
        match self {
            VehicleClass::S => "町村議会向け",
            VehicleClass::M => "市議会向け",
            VehicleClass::L => "政令市向け",
            VehicleClass::Ll => "国政向け",
        }
    }

    /// Representative model shown when the class is first picked.
    pub fn default_type(self) -> VehicleType {
        match self {
            VehicleClass::S => VehicleType::HeightWagon,
            VehicleClass::M => VehicleType::CorollaFielder,
            VehicleClass::L => VehicleType::Noah,
            VehicleClass::Ll => VehicleType::RegiusAceBasic,
        }
    }

    pub fn types(self) -> &'static [VehicleType] {
        match self {
            VehicleClass::S => &[
                VehicleType::HeightWagon,
                VehicleType::BoxVan,
                VehicleType::Compact,
            ],
            VehicleClass::M => &[
                VehicleType::CorollaFielder,
                VehicleType::Shienta,
                VehicleType::ProBox,
            ],
            VehicleClass::L => &[
                VehicleType::Noah,
                VehicleType::Noah80,
                VehicleType::Noah90,
                VehicleType::TownAce,
            ],
            VehicleClass::Ll => &[VehicleType::RegiusAceBasic, VehicleType::RegiusAceWide],
        }
    }
}

/// A specific rentable model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "heightWagon")]
    HeightWagon,
    #[serde(rename = "boxVan")]
    BoxVan,
    #[serde(rename = "compact")]
    Compact,
    #[serde(rename = "corollaFielder")]
    CorollaFielder,
    #[serde(rename = "shienta")]
    Shienta,
    #[serde(rename = "proBox")]
    ProBox,
    #[serde(rename = "noah")]
    Noah,
    #[serde(rename = "noah_80")]
    Noah80,
    #[serde(rename = "noah_90")]
    Noah90,
    #[serde(rename = "townAce")]
    TownAce,
    #[serde(rename = "regiusaceAceBasic")]
    RegiusAceBasic,
    #[serde(rename = "regiusaceAceWide")]
    RegiusAceWide,
}

impl VehicleType {
    pub const ALL: [VehicleType; 12] = [
        VehicleType::HeightWagon,
        VehicleType::BoxVan,
        VehicleType::Compact,
        VehicleType::CorollaFielder,
        VehicleType::Shienta,
        VehicleType::ProBox,
        VehicleType::Noah,
        VehicleType::Noah80,
        VehicleType::Noah90,
        VehicleType::TownAce,
        VehicleType::RegiusAceBasic,
        VehicleType::RegiusAceWide,
    ];

    pub fn code(self) -> &'static str {
        match self {
            VehicleType::HeightWagon => "heightWagon",
            VehicleType::BoxVan => "boxVan",
            VehicleType::Compact => "compact",
            VehicleType::CorollaFielder => "corollaFielder",
            VehicleType::Shienta => "shienta",
            VehicleType::ProBox => "proBox",
            VehicleType::Noah => "noah",
            VehicleType::Noah80 => "noah_80",
            VehicleType::Noah90 => "noah_90",
            VehicleType::TownAce => "townAce",
            VehicleType::RegiusAceBasic => "regiusaceAceBasic",
            VehicleType::RegiusAceWide => "regiusaceAceWide",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// The class this model is catalogued under.
    pub fn class(self) -> VehicleClass {
        match self {
            VehicleType::HeightWagon | VehicleType::BoxVan | VehicleType::Compact => {
                VehicleClass::S
            }
            VehicleType::CorollaFielder | VehicleType::Shienta | VehicleType::ProBox => {
                VehicleClass::M
            }
            VehicleType::Noah | VehicleType::Noah80 | VehicleType::Noah90 | VehicleType::TownAce => {
                VehicleClass::L
            }
            VehicleType::RegiusAceBasic | VehicleType::RegiusAceWide => VehicleClass::Ll,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VehicleType::HeightWagon => "軽ハイトワゴン",
            VehicleType::BoxVan => "軽ハコバン",
            VehicleType::Compact => "コンパクトカー",
            VehicleType::CorollaFielder => "カローラ フィールダー",
            VehicleType::Shienta => "トヨタ シエンタ",
            VehicleType::ProBox => "プロボックス",
            VehicleType::Noah => "NOAH",
            VehicleType::Noah80 => "NOAH・VOXY：80型",
            VehicleType::Noah90 => "NOAH・VOXY：90型",
            VehicleType::TownAce => "タウンエース",
            VehicleType::RegiusAceBasic => "レジアスエース（標準ボディ）",
            VehicleType::RegiusAceWide => "レジアスエース（ワイドボディ）",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
