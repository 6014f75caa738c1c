//! Price rule table models.
//!
//! These mirror the layout of `data/price_tables.json` and deserialize
//! straight from it. An `Option<Yen>` of `None` means "not offered", which is
//! never the same thing as `Some(0)` ("offered, free").

use serde::{Deserialize, Serialize};

use crate::catalog::{AmpTier, ElectionCategory, SignalLight};

/// Whole yen, tax included.
pub type Yen = u64;

/// One value per amplifier tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AmpTiers<T> {
    #[serde(rename = "60")]
    pub w60: T,
    #[serde(rename = "150")]
    pub w150: T,
    #[serde(rename = "300")]
    pub w300: T,
    #[serde(rename = "600")]
    pub w600: T,
}

impl<T: Copy> AmpTiers<T> {
    pub fn get(&self, tier: AmpTier) -> T {
        match tier {
            AmpTier::W60 => self.w60,
            AmpTier::W150 => self.w150,
            AmpTier::W300 => self.w300,
            AmpTier::W600 => self.w600,
        }
    }
}

/// One value per signboard lighting variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalLights<T> {
    pub out_light: T,
    pub in_light: T,
}

impl<T: Copy> SignalLights<T> {
    pub fn get(&self, light: SignalLight) -> T {
        match light {
            SignalLight::OutLight => self.out_light,
            SignalLight::InLight => self.in_light,
        }
    }
}

/// One value per election category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByCategory<T> {
    pub unity: T,
    pub general: T,
    pub national: T,
    pub ad: T,
}

impl<T> ByCategory<T> {
    pub fn get(&self, category: ElectionCategory) -> &T {
        match category {
            ElectionCategory::Unity => &self.unity,
            ElectionCategory::General => &self.general,
            ElectionCategory::National => &self.national,
            ElectionCategory::Ad => &self.ad,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElectionCategory, &T)> {
        ElectionCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Which amp/signal-light prices come from the platform-active table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDisplay {
    #[serde(default)]
    pub amp_size: AmpTiers<bool>,
    #[serde(default)]
    pub signal_light: SignalLights<bool>,
}

impl ChangeDisplay {
    pub fn any(&self) -> bool {
        AmpTier::ALL.iter().any(|t| self.amp_size.get(*t))
            || SignalLight::ALL.iter().any(|l| self.signal_light.get(*l))
    }
}

/// Amp and signal-light prices that apply while the platform is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUnitPrice {
    pub amp_size: AmpTiers<Option<Yen>>,
    pub signal_light: SignalLights<Option<Yen>>,
}

/// Unit prices for one (vehicle type, election category) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPriceEntry {
    pub car: Yen,
    pub amp_size: AmpTiers<Option<Yen>>,
    pub signal_light: SignalLights<Option<Yen>>,
    /// `None` when this vehicle cannot carry a stage platform at all.
    #[serde(default)]
    pub taking_platform: Option<Yen>,
    /// Platform state is not user-togglable.
    #[serde(default)]
    pub taking_platform_fix: bool,
    /// Mounting the platform swaps the fields flagged in `change_display`.
    #[serde(default)]
    pub taking_platform_change_display: bool,
    #[serde(default)]
    pub change_display: ChangeDisplay,
    #[serde(default)]
    pub platform_unit_price: Option<PlatformUnitPrice>,
}

impl UnitPriceEntry {
    pub fn offers_platform(&self) -> bool {
        self.taking_platform.is_some()
    }
}

/// Flat option prices and insurance day rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionPriceTable {
    pub wireless_mike: ByCategory<Yen>,
    pub sd_card: ByCategory<Yen>,
    pub wireless_intercom: ByCategory<Yen>,
    pub hand_speaker: ByCategory<Yen>,
    pub bluetooth_unit: ByCategory<Yen>,
    pub insurance: InsuranceRates,
}

/// Daily insurance rates, split on whether a platform is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRates {
    pub basic: ByCategory<Yen>,
    pub taking_platform: ByCategory<Yen>,
}

/// One-way delivery fee for a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDeliveryFee", into = "RawDeliveryFee")]
pub enum DeliveryFee {
    Fee(Yen),
    /// Not tabulated; requires manual negotiation. Distinct from a zero fee.
    Consultation,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDeliveryFee {
    Fee(Yen),
    Sentinel(ConsultationTag),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ConsultationTag {
    Consultation,
}

impl From<RawDeliveryFee> for DeliveryFee {
    fn from(raw: RawDeliveryFee) -> Self {
        match raw {
            RawDeliveryFee::Fee(fee) => DeliveryFee::Fee(fee),
            RawDeliveryFee::Sentinel(ConsultationTag::Consultation) => DeliveryFee::Consultation,
        }
    }
}

impl From<DeliveryFee> for RawDeliveryFee {
    fn from(fee: DeliveryFee) -> Self {
        match fee {
            DeliveryFee::Fee(fee) => RawDeliveryFee::Fee(fee),
            DeliveryFee::Consultation => RawDeliveryFee::Sentinel(ConsultationTag::Consultation),
        }
    }
}
