//! Quote engine services over a loaded set of price tables.
//!
//! Everything here is a pure function of the tables and its arguments. The
//! HTTP layer and the CLI build a [`QuoteEngine`] per call; it is a borrowed
//! view and costs nothing to construct.

use crate::catalog::{AmpTier, ElectionCategory, Region, SignalLight, VehicleClass, VehicleType};

use super::calculators::{calculate_totals, insurance_charge, mike_quantity, option_charge};
use super::delivery::{self, one_way_charge, round_trip};
use super::models::{DeliveryFee, UnitPriceEntry, Yen};
use super::requests::Selection;
use super::resolver::{
    amp_price, option_unit_prices, resolve_equipment, resolve_unit_price, signal_light_price,
    PlatformControl,
};
use super::responses::{
    AmpOffering, ClassComparison, DeliveryPrice, DeliveryQuote, EquipmentMenu, EquipmentState,
    OptionPrices, Offerings, QuoteResult, Recommendation, SignalLightOffering, SubPrices,
};
use super::tables::{PriceTables, TableError};

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    /// The selection names a combination outside the catalog.
    #[error("no price entry for vehicle type {vehicle_type} in class {class} for {category} elections")]
    CatalogMismatch {
        class: VehicleClass,
        vehicle_type: VehicleType,
        category: ElectionCategory,
    },

    #[error(transparent)]
    InvalidTables(#[from] TableError),
}

/// The quote engine, bound to one immutable set of price tables.
#[derive(Debug, Clone, Copy)]
pub struct QuoteEngine<'a> {
    tables: &'a PriceTables,
}

impl<'a> QuoteEngine<'a> {
    pub fn new(tables: &'a PriceTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a PriceTables {
        self.tables
    }

    /// Compute the itemized quote for a selection.
    ///
    /// Either returns a fully populated result or fails for the whole call.
    pub fn compute_quote(&self, selection: &Selection) -> Result<QuoteResult, PricingError> {
        let category = selection.election_category;
        let entry = self.resolve_unit_price(
            selection.vehicle_class,
            selection.vehicle_type(),
            category,
        )?;

        let equipment = resolve_equipment(
            entry,
            selection.taking_platform,
            selection.amp_size,
            selection.signal_light,
        );

        let subs = SubPrices {
            car_price: entry.car,
            amp_size: equipment.amp.charge(),
            signal_light: equipment.signal_light.charge(),
            taking_platform: equipment.platform_charge,
        };

        let unit = option_unit_prices(self.tables, category);
        let mike_count = mike_quantity(selection.wireless_mike, selection.wireless_mike_count);
        let (insurance_price, total_insurance_price) = insurance_charge(
            selection.insurance,
            unit.insurance_rate(equipment.platform_active),
            selection.insurance_days,
        );

        let options = OptionPrices {
            mike_price: option_charge(selection.wireless_mike, unit.wireless_mike, 1),
            mike_count,
            total_mike_price: option_charge(selection.wireless_mike, unit.wireless_mike, mike_count),
            sd_price: option_charge(selection.sd_card, unit.sd_card, 1),
            intercom_price: option_charge(selection.wireless_intercom, unit.wireless_intercom, 1),
            hand_speaker_price: option_charge(selection.hand_speaker, unit.hand_speaker, 1),
            bluetooth_unit_price: option_charge(selection.bluetooth_unit, unit.bluetooth_unit, 1),
            insurance_price,
            insurance_days: if selection.insurance { selection.insurance_days } else { 0 },
            total_insurance_price,
            body_wrapping_consultation: selection.body_wrapping,
        };

        let region_code = selection.delivery_region.as_deref();
        let fee = self.resolve_delivery_fee(region_code);
        let delivery = DeliveryPrice {
            region: region_code.and_then(Region::from_code),
            fee: one_way_charge(fee),
            is_consultation: fee == DeliveryFee::Consultation,
        };

        let totals = calculate_totals(&subs, &options, round_trip(fee));

        Ok(QuoteResult {
            subs,
            options,
            delivery,
            equipment: EquipmentState {
                platform_control: equipment.platform_control,
                platform_active: equipment.platform_active,
                amp_offered: equipment.amp.is_offered(),
                amp_source: equipment.amp.source,
                signal_light_offered: equipment.signal_light.is_offered(),
                signal_light_source: equipment.signal_light.source,
            },
            sub_total_price: totals.sub_total_price,
            option_total_price: totals.option_total_price,
            delivery_price: totals.delivery_price,
            total_price: totals.total_price,
        })
    }

    pub fn resolve_unit_price(
        &self,
        class: VehicleClass,
        vehicle_type: VehicleType,
        category: ElectionCategory,
    ) -> Result<&'a UnitPriceEntry, PricingError> {
        resolve_unit_price(self.tables, class, vehicle_type, category)
    }

    pub fn resolve_delivery_fee(&self, region_code: Option<&str>) -> DeliveryFee {
        delivery::resolve_delivery_fee(self.tables, region_code)
    }

    pub fn round_trip_fee(&self, region_code: Option<&str>) -> Yen {
        delivery::round_trip_fee(self.tables, region_code)
    }

    pub fn is_consultation_area(&self, region_code: Option<&str>) -> bool {
        delivery::is_consultation_area(self.tables, region_code)
    }

    pub fn delivery_quote(&self, region_code: Option<&str>) -> DeliveryQuote {
        delivery::delivery_quote(self.tables, region_code)
    }

    /// Selectable equipment for one vehicle, with and without a platform.
    pub fn offerings(
        &self,
        class: VehicleClass,
        vehicle_type: VehicleType,
        category: ElectionCategory,
    ) -> Result<Offerings, PricingError> {
        let entry = self.resolve_unit_price(class, vehicle_type, category)?;
        let platform = PlatformControl::for_entry(entry);

        Ok(Offerings {
            vehicle_class: class,
            vehicle_type,
            category,
            car_price: entry.car,
            platform,
            primary: equipment_menu(entry, false),
            with_platform: match platform {
                PlatformControl::Unavailable => None,
                _ => Some(equipment_menu(entry, true)),
            },
        })
    }

    /// Base car price of each class's representative model, against the current class.
    pub fn compare_classes(
        &self,
        category: ElectionCategory,
        current: VehicleClass,
    ) -> Result<Vec<ClassComparison>, PricingError> {
        let base_price = |class: VehicleClass| -> Result<Yen, PricingError> {
            Ok(self.resolve_unit_price(class, class.default_type(), category)?.car)
        };

        let current_price = base_price(current)?;
        let recommended = recommended_class(category);

        VehicleClass::ALL
            .into_iter()
            .map(|class| {
                let price = base_price(class)?;
                Ok(ClassComparison {
                    vehicle_class: class,
                    label: class.label(),
                    description: class.description(),
                    target: class.target(),
                    representative: class.default_type(),
                    base_price: price,
                    price_difference: price as i64 - current_price as i64,
                    is_current: class == current,
                    is_recommended: class == recommended,
                })
            })
            .collect()
    }

    pub fn recommendations(&self, category: ElectionCategory) -> Vec<Recommendation> {
        recommendations(category)
    }
}

impl QuoteEngine<'static> {
    /// Engine over the tables compiled into the binary.
    pub fn embedded() -> Result<Self, PricingError> {
        Ok(Self::new(PriceTables::embedded()?))
    }
}

/// Compute a quote against the embedded price tables.
pub fn compute_quote(selection: &Selection) -> Result<QuoteResult, PricingError> {
    QuoteEngine::embedded()?.compute_quote(selection)
}

fn equipment_menu(entry: &UnitPriceEntry, platform_active: bool) -> EquipmentMenu {
    let amp_sizes = AmpTier::ALL
        .into_iter()
        .filter_map(|tier| {
            amp_price(entry, tier, platform_active)
                .price
                .map(|price| AmpOffering {
                    tier,
                    label: tier.label(),
                    price,
                })
        })
        .collect();

    let signal_lights = SignalLight::ALL
        .into_iter()
        .filter_map(|light| {
            signal_light_price(entry, light, platform_active)
                .price
                .map(|price| SignalLightOffering {
                    light,
                    label: light.label(),
                    price,
                })
        })
        .collect();

    EquipmentMenu {
        amp_sizes,
        signal_lights,
    }
}

/// The class suggested for each election category.
pub fn recommended_class(category: ElectionCategory) -> VehicleClass {
    match category {
        ElectionCategory::General => VehicleClass::S,
        ElectionCategory::Unity => VehicleClass::M,
        ElectionCategory::National | ElectionCategory::Ad => VehicleClass::Ll,
    }
}

fn recommendation(
    vehicle_type: VehicleType,
    reason: &'static str,
    tags: &'static [&'static str],
) -> Recommendation {
    Recommendation {
        vehicle_class: vehicle_type.class(),
        vehicle_type,
        name: vehicle_type.name(),
        reason,
        tags,
    }
}

/// Two suggested vehicles per election category.
pub fn recommendations(category: ElectionCategory) -> Vec<Recommendation> {
    match category {
        ElectionCategory::Unity => vec![
            recommendation(
                VehicleType::CorollaFielder,
                "統一地方選挙で最も人気。バランスの取れた視認性と走行性能",
                &["人気No.1", "コスパ◎"],
            ),
            recommendation(
                VehicleType::Noah,
                "存在感を出したい場合に。登壇台も設置可能",
                &["登壇可能", "存在感"],
            ),
        ],
        ElectionCategory::General => vec![
            recommendation(
                VehicleType::HeightWagon,
                "住宅街での取り回しが良く、コストを抑えたい場合に最適",
                &["低コスト", "小回り◎"],
            ),
            recommendation(
                VehicleType::Shienta,
                "広い荷室と良好な視認性。一般地方選挙の定番",
                &["定番", "荷室広い"],
            ),
        ],
        ElectionCategory::National => vec![
            recommendation(
                VehicleType::RegiusAceWide,
                "国政選挙向け。最大のアピール力と大型音響設備に対応",
                &["国政向け", "最大級"],
            ),
            recommendation(
                VehicleType::Noah90,
                "最新モデルで視認性抜群。都市部での活動に最適",
                &["最新型", "都市向け"],
            ),
        ],
        ElectionCategory::Ad => vec![
            recommendation(
                VehicleType::RegiusAceBasic,
                "広告宣伝車として十分なサイズ。ラッピングも映える",
                &["ラッピング◎", "広告向け"],
            ),
            recommendation(
                VehicleType::TownAce,
                "コンパクトながら十分な存在感。街中での広告に最適",
                &["街宣向け", "コンパクト"],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::requests::VehicleTypeChoice;
    use crate::pricing::resolver::PriceSource;

    fn engine() -> QuoteEngine<'static> {
        QuoteEngine::embedded().unwrap()
    }

    fn selection(category: ElectionCategory, vehicle: VehicleType) -> Selection {
        let mut vehicle_types = VehicleTypeChoice::default();
        vehicle_types.set(vehicle);
        Selection {
            election_category: category,
            vehicle_class: vehicle.class(),
            vehicle_types,
            ..Selection::default()
        }
    }

    // ==================== compute_quote tests ====================

    #[test]
    fn test_default_selection_quote() {
        let quote = engine().compute_quote(&Selection::default()).unwrap();

        assert_eq!(quote.subs.car_price, 132000);
        assert_eq!(quote.subs.amp_size, 22000);
        assert_eq!(quote.subs.signal_light, 0);
        assert_eq!(quote.subs.taking_platform, 0);
        assert_eq!(quote.sub_total_price, 154000);
        assert_eq!(quote.option_total_price, 0);
        assert!(quote.delivery.is_consultation);
        assert_eq!(quote.delivery_price, 0);
        assert_eq!(quote.total_price, 154000);
    }

    #[test]
    fn test_unselected_options_are_zero_despite_quantities() {
        let mut s = Selection::default();
        s.wireless_mike_count = 5;
        s.insurance_days = 10;

        let quote = engine().compute_quote(&s).unwrap();

        assert_eq!(quote.options.mike_price, 0);
        assert_eq!(quote.options.total_mike_price, 0);
        assert_eq!(quote.options.insurance_price, 0);
        assert_eq!(quote.options.total_insurance_price, 0);
        assert_eq!(quote.option_total_price, 0);
    }

    #[test]
    fn test_all_options_selected() {
        let mut s = selection(ElectionCategory::Unity, VehicleType::Compact);
        s.wireless_mike = true;
        s.wireless_mike_count = 2;
        s.sd_card = true;
        s.wireless_intercom = true;
        s.hand_speaker = true;
        s.bluetooth_unit = true;
        s.insurance = true;
        s.insurance_days = 3;

        let quote = engine().compute_quote(&s).unwrap();
        let o = quote.options;

        assert_eq!(o.mike_price, 22000);
        assert_eq!(o.total_mike_price, 44000);
        assert_eq!(o.sd_price, 27500);
        assert_eq!(o.intercom_price, 22000);
        assert_eq!(o.hand_speaker_price, 55000);
        assert_eq!(o.bluetooth_unit_price, 22000);
        assert_eq!(o.insurance_price, 3300);
        assert_eq!(o.total_insurance_price, 9900);
        assert_eq!(quote.option_total_price, 44000 + 27500 + 22000 + 55000 + 22000 + 9900);
    }

    #[test]
    fn test_mike_count_zero_bills_one() {
        let mut s = Selection::default();
        s.wireless_mike = true;
        s.wireless_mike_count = 0;

        let quote = engine().compute_quote(&s).unwrap();
        assert_eq!(quote.options.mike_count, 1);
        assert_eq!(quote.options.total_mike_price, 16500);
    }

    #[test]
    fn test_platform_switches_equipment_prices() {
        let mut s = selection(ElectionCategory::General, VehicleType::Compact);
        s.amp_size = AmpTier::W300;
        s.signal_light = SignalLight::InLight;

        let without = engine().compute_quote(&s).unwrap();
        assert_eq!(without.subs.amp_size, 44000);
        assert_eq!(without.subs.signal_light, 55000);
        assert_eq!(without.equipment.amp_source, PriceSource::Primary);

        s.taking_platform = true;
        let with = engine().compute_quote(&s).unwrap();
        assert_eq!(with.subs.taking_platform, 55000);
        assert_eq!(with.subs.amp_size, 66000);
        assert_eq!(with.subs.signal_light, 66000);
        assert_eq!(with.equipment.amp_source, PriceSource::PlatformActive);
    }

    #[test]
    fn test_fixed_platform_ignores_selection_flag() {
        let mut s = selection(ElectionCategory::National, VehicleType::Compact);
        s.taking_platform = false;

        let quote = engine().compute_quote(&s).unwrap();

        assert_eq!(quote.equipment.platform_control, PlatformControl::Fixed { price: 55000 });
        assert!(quote.equipment.platform_active);
        assert_eq!(quote.subs.taking_platform, 55000);
    }

    #[test]
    fn test_insurance_rate_follows_resolved_platform_state() {
        let mut s = selection(ElectionCategory::National, VehicleType::Compact);
        s.taking_platform = false;
        s.insurance = true;
        s.insurance_days = 2;

        let quote = engine().compute_quote(&s).unwrap();
        assert_eq!(quote.options.insurance_price, 4400);
        assert_eq!(quote.options.total_insurance_price, 8800);

        let mut s = selection(ElectionCategory::General, VehicleType::CorollaFielder);
        s.taking_platform = true;
        s.insurance = true;
        let quote = engine().compute_quote(&s).unwrap();
        assert!(!quote.equipment.platform_active);
        assert_eq!(quote.options.insurance_price, 3300);
    }

    #[test]
    fn test_not_offered_amp_charges_zero_and_is_flagged() {
        let mut s = selection(ElectionCategory::Unity, VehicleType::CorollaFielder);
        s.amp_size = AmpTier::W600;

        let quote = engine().compute_quote(&s).unwrap();
        assert_eq!(quote.subs.amp_size, 0);
        assert!(!quote.equipment.amp_offered);
    }

    #[test]
    fn test_body_wrapping_is_consultation_only() {
        let mut s = Selection::default();
        let plain = engine().compute_quote(&s).unwrap();
        s.body_wrapping = true;
        let wrapped = engine().compute_quote(&s).unwrap();

        assert!(wrapped.options.body_wrapping_consultation);
        assert_eq!(wrapped.total_price, plain.total_price);
    }

    #[test]
    fn test_speaker_count_carries_no_charge() {
        let mut s = Selection::default();
        let two = engine().compute_quote(&s).unwrap();
        s.speaker = crate::catalog::SpeakerCount::Four;
        let four = engine().compute_quote(&s).unwrap();
        assert_eq!(two, four);
    }

    #[test]
    fn test_catalog_mismatch_fails_whole_call() {
        let mut s = Selection::default();
        s.vehicle_types.s = VehicleType::Noah;

        let err = engine().compute_quote(&s).unwrap_err();
        assert_eq!(
            err,
            PricingError::CatalogMismatch {
                class: VehicleClass::S,
                vehicle_type: VehicleType::Noah,
                category: ElectionCategory::General,
            }
        );
        assert_eq!(
            err.to_string(),
            "no price entry for vehicle type noah in class s for general elections"
        );
    }

    #[test]
    fn test_delivery_in_quote() {
        let mut s = Selection::default();
        s.delivery_region = Some("nigata".to_string());

        let quote = engine().compute_quote(&s).unwrap();
        assert_eq!(quote.delivery.region, Some(Region::Niigata));
        assert_eq!(quote.delivery.fee, 27500);
        assert!(!quote.delivery.is_consultation);
        assert_eq!(quote.delivery_price, 55000);
    }

    // ==================== offerings tests ====================

    #[test]
    fn test_offerings_exclude_absent_prices() {
        let offerings = engine()
            .offerings(VehicleClass::M, VehicleType::CorollaFielder, ElectionCategory::Unity)
            .unwrap();

        assert_eq!(offerings.car_price, 550000);
        assert_eq!(offerings.platform, PlatformControl::Unavailable);
        assert!(offerings.with_platform.is_none());

        let tiers: Vec<AmpTier> = offerings.primary.amp_sizes.iter().map(|o| o.tier).collect();
        assert_eq!(tiers, vec![AmpTier::W300]);
        assert_eq!(offerings.primary.signal_lights.len(), 2);
    }

    #[test]
    fn test_offerings_with_platform_menu() {
        let offerings = engine()
            .offerings(VehicleClass::S, VehicleType::Compact, ElectionCategory::Unity)
            .unwrap();

        assert_eq!(offerings.platform, PlatformControl::Optional { price: 55000 });

        let primary: Vec<(AmpTier, Yen)> = offerings
            .primary
            .amp_sizes
            .iter()
            .map(|o| (o.tier, o.price))
            .collect();
        assert_eq!(primary, vec![(AmpTier::W150, 0), (AmpTier::W300, 55000)]);

        let with_platform = offerings.with_platform.unwrap();
        let switched: Vec<(AmpTier, Yen)> = with_platform
            .amp_sizes
            .iter()
            .map(|o| (o.tier, o.price))
            .collect();
        assert_eq!(switched, vec![(AmpTier::W150, 22000), (AmpTier::W300, 77000)]);
        assert_eq!(with_platform.signal_lights[0].label, "外照明");
    }

    #[test]
    fn test_offerings_reject_mismatch() {
        let err = engine()
            .offerings(VehicleClass::Ll, VehicleType::Compact, ElectionCategory::Ad)
            .unwrap_err();
        assert!(matches!(err, PricingError::CatalogMismatch { .. }));
    }

    // ==================== compare_classes tests ====================

    #[test]
    fn test_compare_classes_general() {
        let rows = engine()
            .compare_classes(ElectionCategory::General, VehicleClass::M)
            .unwrap();

        assert_eq!(rows.len(), 4);
        let s = &rows[0];
        assert_eq!(s.vehicle_class, VehicleClass::S);
        assert_eq!(s.representative, VehicleType::HeightWagon);
        assert_eq!(s.base_price, 132000);
        assert_eq!(s.price_difference, 132000 - 242000);
        assert!(s.is_recommended);

        let m = &rows[1];
        assert!(m.is_current);
        assert_eq!(m.price_difference, 0);
        assert!(!m.is_recommended);
    }

    #[test]
    fn test_recommended_class_per_category() {
        assert_eq!(recommended_class(ElectionCategory::General), VehicleClass::S);
        assert_eq!(recommended_class(ElectionCategory::Unity), VehicleClass::M);
        assert_eq!(recommended_class(ElectionCategory::National), VehicleClass::Ll);
        assert_eq!(recommended_class(ElectionCategory::Ad), VehicleClass::Ll);
    }

    // ==================== recommendations tests ====================

    #[test]
    fn test_recommendations_two_per_category() {
        for category in ElectionCategory::ALL {
            let recs = recommendations(category);
            assert_eq!(recs.len(), 2);
            for rec in &recs {
                assert_eq!(rec.vehicle_type.class(), rec.vehicle_class);
                assert!(engine()
                    .resolve_unit_price(rec.vehicle_class, rec.vehicle_type, category)
                    .is_ok());
            }
        }

        let national = recommendations(ElectionCategory::National);
        assert_eq!(national[0].vehicle_type, VehicleType::RegiusAceWide);
        assert_eq!(national[1].vehicle_type, VehicleType::Noah90);
        assert_eq!(national[1].tags, &["最新型", "都市向け"]);
    }
}
