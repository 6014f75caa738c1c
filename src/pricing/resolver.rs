//! Rule resolution: selection → unit-price entry → effective equipment prices.
//!
//! Amp and signal-light prices can come from two tables. While a platform is
//! mounted on an entry with `takingPlatformChangeDisplay`, every field flagged
//! in `changeDisplay` is read from the platform-active table instead of the
//! primary one. Unflagged fields keep their primary price.

use serde::Serialize;

use crate::catalog::{AmpTier, ElectionCategory, SignalLight, VehicleClass, VehicleType};

use super::models::{UnitPriceEntry, Yen};
use super::services::PricingError;
use super::tables::PriceTables;

/// Fetch the unit-price entry for a catalog combination.
///
/// A type that does not belong to `class`, or a type with no rates, is a
/// catalog mismatch. Lookups never fall back to a neighbouring entry.
pub fn resolve_unit_price(
    tables: &PriceTables,
    class: VehicleClass,
    vehicle: VehicleType,
    category: ElectionCategory,
) -> Result<&UnitPriceEntry, PricingError> {
    let mismatch = || PricingError::CatalogMismatch {
        class,
        vehicle_type: vehicle,
        category,
    };

    if vehicle.class() != class {
        return Err(mismatch());
    }

    tables
        .vehicle_rates(vehicle)
        .map(|rates| rates.get(category))
        .ok_or_else(mismatch)
}

/// How the platform checkbox behaves for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PlatformControl {
    /// The vehicle cannot carry a platform; the control is hidden.
    Unavailable,
    /// The buyer decides.
    Optional { price: Yen },
    /// Always mounted; the control is shown checked and disabled.
    Fixed { price: Yen },
}

impl PlatformControl {
    pub fn for_entry(entry: &UnitPriceEntry) -> Self {
        match entry.taking_platform {
            // A fixed flag without a platform price pins the platform off.
            None => PlatformControl::Unavailable,
            Some(price) if entry.taking_platform_fix => PlatformControl::Fixed { price },
            Some(price) => PlatformControl::Optional { price },
        }
    }

    /// The platform state actually used for pricing.
    pub fn effective(self, requested: bool) -> bool {
        match self {
            PlatformControl::Unavailable => false,
            PlatformControl::Optional { .. } => requested,
            PlatformControl::Fixed { .. } => true,
        }
    }

    pub fn is_user_togglable(self) -> bool {
        matches!(self, PlatformControl::Optional { .. })
    }
}

/// Which table a switchable price was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceSource {
    Primary,
    PlatformActive,
}

/// A resolved amp or signal-light price. `price: None` means not offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPrice {
    pub price: Option<Yen>,
    pub source: PriceSource,
}

impl ResolvedPrice {
    pub fn charge(&self) -> Yen {
        self.price.unwrap_or(0)
    }

    pub fn is_offered(&self) -> bool {
        self.price.is_some()
    }
}

fn switches(entry: &UnitPriceEntry, platform_active: bool, flagged: bool) -> bool {
    platform_active && entry.taking_platform_change_display && flagged
}

/// Price of an amp tier under the given platform state.
pub fn amp_price(entry: &UnitPriceEntry, tier: AmpTier, platform_active: bool) -> ResolvedPrice {
    let flagged = entry.change_display.amp_size.get(tier);
    match entry.platform_unit_price {
        Some(ref platform) if switches(entry, platform_active, flagged) => ResolvedPrice {
            price: platform.amp_size.get(tier),
            source: PriceSource::PlatformActive,
        },
        _ => ResolvedPrice {
            price: entry.amp_size.get(tier),
            source: PriceSource::Primary,
        },
    }
}

/// Price of a signal-light variant under the given platform state.
pub fn signal_light_price(
    entry: &UnitPriceEntry,
    light: SignalLight,
    platform_active: bool,
) -> ResolvedPrice {
    let flagged = entry.change_display.signal_light.get(light);
    match entry.platform_unit_price {
        Some(ref platform) if switches(entry, platform_active, flagged) => ResolvedPrice {
            price: platform.signal_light.get(light),
            source: PriceSource::PlatformActive,
        },
        _ => ResolvedPrice {
            price: entry.signal_light.get(light),
            source: PriceSource::Primary,
        },
    }
}

/// The equipment half of a quote, fully resolved against one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedEquipment {
    pub platform_control: PlatformControl,
    pub platform_active: bool,
    pub platform_charge: Yen,
    pub amp: ResolvedPrice,
    pub signal_light: ResolvedPrice,
}

pub fn resolve_equipment(
    entry: &UnitPriceEntry,
    requested_platform: bool,
    tier: AmpTier,
    light: SignalLight,
) -> ResolvedEquipment {
    let platform_control = PlatformControl::for_entry(entry);
    let platform_active = platform_control.effective(requested_platform);
    let platform_charge = if platform_active {
        entry.taking_platform.unwrap_or(0)
    } else {
        0
    };

    ResolvedEquipment {
        platform_control,
        platform_active,
        platform_charge,
        amp: amp_price(entry, tier, platform_active),
        signal_light: signal_light_price(entry, light, platform_active),
    }
}

/// Option unit prices for one election category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionUnitPrices {
    pub wireless_mike: Yen,
    pub sd_card: Yen,
    pub wireless_intercom: Yen,
    pub hand_speaker: Yen,
    pub bluetooth_unit: Yen,
    pub insurance_basic: Yen,
    pub insurance_taking_platform: Yen,
}

impl OptionUnitPrices {
    /// Daily insurance rate for the resolved platform state.
    pub fn insurance_rate(&self, platform_active: bool) -> Yen {
        if platform_active {
            self.insurance_taking_platform
        } else {
            self.insurance_basic
        }
    }
}

pub fn option_unit_prices(tables: &PriceTables, category: ElectionCategory) -> OptionUnitPrices {
    let options = tables.options();
    OptionUnitPrices {
        wireless_mike: *options.wireless_mike.get(category),
        sd_card: *options.sd_card.get(category),
        wireless_intercom: *options.wireless_intercom.get(category),
        hand_speaker: *options.hand_speaker.get(category),
        bluetooth_unit: *options.bluetooth_unit.get(category),
        insurance_basic: *options.insurance.basic.get(category),
        insurance_taking_platform: *options.insurance.taking_platform.get(category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> &'static PriceTables {
        PriceTables::embedded().unwrap()
    }

    fn entry(vehicle: VehicleType, category: ElectionCategory) -> &'static UnitPriceEntry {
        resolve_unit_price(tables(), vehicle.class(), vehicle, category).unwrap()
    }

    // ==================== resolve_unit_price tests ====================

    #[test]
    fn test_every_catalog_combination_resolves() {
        for vehicle in VehicleType::ALL {
            for category in ElectionCategory::ALL {
                assert!(
                    resolve_unit_price(tables(), vehicle.class(), vehicle, category).is_ok(),
                    "{:?}/{:?}",
                    vehicle,
                    category
                );
            }
        }
    }

    #[test]
    fn test_resolves_known_prices() {
        assert_eq!(entry(VehicleType::Compact, ElectionCategory::Unity).car, 495000);
        assert_eq!(entry(VehicleType::Compact, ElectionCategory::General).car, 165000);
        assert_eq!(entry(VehicleType::CorollaFielder, ElectionCategory::National).car, 440000);
        assert_eq!(entry(VehicleType::Noah90, ElectionCategory::National).car, 550000);
    }

    #[test]
    fn test_type_outside_class_is_mismatch() {
        let err = resolve_unit_price(
            tables(),
            VehicleClass::S,
            VehicleType::Noah,
            ElectionCategory::General,
        )
        .unwrap_err();

        assert_eq!(
            err,
            PricingError::CatalogMismatch {
                class: VehicleClass::S,
                vehicle_type: VehicleType::Noah,
                category: ElectionCategory::General,
            }
        );
    }

    // ==================== platform control tests ====================

    #[test]
    fn test_platform_unavailable_without_price() {
        let control = PlatformControl::for_entry(entry(VehicleType::CorollaFielder, ElectionCategory::Unity));
        assert_eq!(control, PlatformControl::Unavailable);
        assert!(!control.effective(true));
        assert!(!control.is_user_togglable());
    }

    #[test]
    fn test_platform_optional_follows_request() {
        let control = PlatformControl::for_entry(entry(VehicleType::Noah, ElectionCategory::General));
        assert_eq!(control, PlatformControl::Optional { price: 55000 });
        assert!(control.effective(true));
        assert!(!control.effective(false));
    }

    #[test]
    fn test_platform_fixed_ignores_request() {
        let control = PlatformControl::for_entry(entry(VehicleType::Compact, ElectionCategory::National));
        assert_eq!(control, PlatformControl::Fixed { price: 55000 });
        assert!(control.effective(false));
        assert!(control.effective(true));
    }

    #[test]
    fn test_fixed_flag_without_price_pins_platform_off() {
        let townace = entry(VehicleType::TownAce, ElectionCategory::National);
        assert!(townace.taking_platform_fix);
        assert_eq!(townace.taking_platform, None);

        let control = PlatformControl::for_entry(townace);
        assert_eq!(control, PlatformControl::Unavailable);
        assert!(!control.effective(true));
    }

    // ==================== switch pricing tests ====================

    #[test]
    fn test_flagged_fields_switch_when_platform_active() {
        let compact = entry(VehicleType::Compact, ElectionCategory::Unity);

        let off = amp_price(compact, AmpTier::W300, false);
        assert_eq!(off, ResolvedPrice { price: Some(55000), source: PriceSource::Primary });

        let on = amp_price(compact, AmpTier::W300, true);
        assert_eq!(on, ResolvedPrice { price: Some(77000), source: PriceSource::PlatformActive });

        let light = signal_light_price(compact, SignalLight::InLight, true);
        assert_eq!(light.source, PriceSource::PlatformActive);
        assert_eq!(light.charge(), 77000);
    }

    #[test]
    fn test_unflagged_fields_keep_primary_price() {
        let compact = entry(VehicleType::Compact, ElectionCategory::General);

        let amp = amp_price(compact, AmpTier::W60, true);
        assert_eq!(amp, ResolvedPrice { price: Some(0), source: PriceSource::Primary });

        let light = signal_light_price(compact, SignalLight::OutLight, true);
        assert_eq!(light.source, PriceSource::Primary);
    }

    #[test]
    fn test_no_switch_without_change_display_master_flag() {
        let noah90 = entry(VehicleType::Noah90, ElectionCategory::National);
        assert!(!noah90.taking_platform_change_display);

        let amp = amp_price(noah90, AmpTier::W300, true);
        assert_eq!(amp, ResolvedPrice { price: Some(33000), source: PriceSource::Primary });
    }

    #[test]
    fn test_absent_price_charges_zero_and_is_not_offered() {
        let corolla = entry(VehicleType::CorollaFielder, ElectionCategory::Unity);
        let amp = amp_price(corolla, AmpTier::W600, false);
        assert!(!amp.is_offered());
        assert_eq!(amp.charge(), 0);

        let free = amp_price(corolla, AmpTier::W300, false);
        assert!(free.is_offered());
        assert_eq!(free.charge(), 0);
    }

    #[test]
    fn test_resolve_equipment_charges_platform_only_when_active() {
        let noah = entry(VehicleType::Noah, ElectionCategory::Unity);

        let without = resolve_equipment(noah, false, AmpTier::W600, SignalLight::InLight);
        assert!(!without.platform_active);
        assert_eq!(without.platform_charge, 0);
        assert_eq!(without.amp.charge(), 55000);
        assert_eq!(without.signal_light.charge(), 33000);

        let with = resolve_equipment(noah, true, AmpTier::W600, SignalLight::InLight);
        assert!(with.platform_active);
        assert_eq!(with.platform_charge, 55000);
        assert_eq!(with.amp.charge(), 44000);
        assert_eq!(with.signal_light.charge(), 22000);
    }

    // ==================== option price tests ====================

    #[test]
    fn test_option_unit_prices_by_category() {
        let unity = option_unit_prices(tables(), ElectionCategory::Unity);
        assert_eq!(unity.wireless_mike, 22000);
        assert_eq!(unity.sd_card, 27500);
        assert_eq!(unity.hand_speaker, 55000);

        let general = option_unit_prices(tables(), ElectionCategory::General);
        assert_eq!(general.wireless_mike, 16500);
        assert_eq!(general.insurance_rate(false), 3300);
        assert_eq!(general.insurance_rate(true), 4400);
    }
}
