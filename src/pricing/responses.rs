//! Response DTOs for the quote engine and its HTTP endpoints.

use serde::Serialize;

use crate::catalog::{AmpTier, ElectionCategory, Region, SignalLight, VehicleClass, VehicleType};

use super::models::Yen;
use super::resolver::{PlatformControl, PriceSource};

/// Resolved equipment charges. Each is 0 when absent or not selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPrices {
    pub car_price: Yen,
    pub amp_size: Yen,
    pub signal_light: Yen,
    pub taking_platform: Yen,
}

/// Option charges. Unit prices are 0 for options that are not selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionPrices {
    pub mike_price: Yen,
    pub mike_count: u32,
    pub total_mike_price: Yen,
    pub sd_price: Yen,
    pub intercom_price: Yen,
    pub hand_speaker_price: Yen,
    pub bluetooth_unit_price: Yen,
    /// Daily rate.
    pub insurance_price: Yen,
    pub insurance_days: u32,
    pub total_insurance_price: Yen,
    /// Body wrapping is quoted by hand; it never adds a charge.
    pub body_wrapping_consultation: bool,
}

/// One-way delivery terms for the selected region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPrice {
    pub region: Option<Region>,
    /// 0 when free or consultation.
    pub fee: Yen,
    pub is_consultation: bool,
}

/// How the equipment prices were resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentState {
    pub platform_control: PlatformControl,
    pub platform_active: bool,
    pub amp_offered: bool,
    pub amp_source: PriceSource,
    pub signal_light_offered: bool,
    pub signal_light_source: PriceSource,
}

/// The itemized quote for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub subs: SubPrices,
    pub options: OptionPrices,
    pub delivery: DeliveryPrice,
    pub equipment: EquipmentState,
    pub sub_total_price: Yen,
    pub option_total_price: Yen,
    /// Round trip; 0 for consultation areas.
    pub delivery_price: Yen,
    pub total_price: Yen,
}

/// Response for `GET /api/pricing/delivery/:region`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryQuote {
    pub region: Option<Region>,
    pub region_name: Option<&'static str>,
    pub one_way_fee: Yen,
    pub round_trip_fee: Yen,
    pub is_consultation: bool,
    pub label: String,
    pub round_trip_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmpOffering {
    pub tier: AmpTier,
    pub label: String,
    pub price: Yen,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalLightOffering {
    pub light: SignalLight,
    pub label: &'static str,
    pub price: Yen,
}

/// Selectable amp tiers and signal lights for one platform state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentMenu {
    pub amp_sizes: Vec<AmpOffering>,
    pub signal_lights: Vec<SignalLightOffering>,
}

/// Response for the offerings query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offerings {
    pub vehicle_class: VehicleClass,
    pub vehicle_type: VehicleType,
    pub category: ElectionCategory,
    pub car_price: Yen,
    pub platform: PlatformControl,
    /// Menu with the platform off. Unreachable when the platform is fixed.
    pub primary: EquipmentMenu,
    /// Menu with the platform mounted; `None` when no platform can be mounted.
    pub with_platform: Option<EquipmentMenu>,
}

/// One row of the class comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassComparison {
    pub vehicle_class: VehicleClass,
    pub label: &'static str,
    pub description: &'static str,
    pub target: &'static str,
    pub representative: VehicleType,
    pub base_price: Yen,
    /// Signed difference against the currently selected class.
    pub price_difference: i64,
    pub is_current: bool,
    pub is_recommended: bool,
}

/// A suggested vehicle for an election category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub vehicle_class: VehicleClass,
    pub vehicle_type: VehicleType,
    pub name: &'static str,
    pub reason: &'static str,
    pub tags: &'static [&'static str],
}

/// Generic error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}
