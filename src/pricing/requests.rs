//! Request DTOs for the quote engine and its HTTP endpoints.
//!
//! Field names on the wire are the simulation form's names, so a selection
//! persisted by the form can be posted back unchanged.

use serde::{Deserialize, Serialize};

use crate::catalog::{AmpTier, ElectionCategory, SignalLight, SpeakerCount, VehicleClass, VehicleType};

/// Everything the buyer picked. The engine's only input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(rename = "electoralClass")]
    pub election_category: ElectionCategory,
    #[serde(rename = "carClass")]
    pub vehicle_class: VehicleClass,
    /// The model chosen within each class; only the one for `vehicle_class` is priced.
    #[serde(rename = "carType")]
    pub vehicle_types: VehicleTypeChoice,
    /// Prefecture code. `None` (or an unknown code) quotes delivery as consultation.
    #[serde(rename = "deliveryPrefecture", default)]
    pub delivery_region: Option<String>,

    pub taking_platform: bool,
    pub signal_light: SignalLight,
    pub amp_size: AmpTier,
    pub speaker: SpeakerCount,

    pub wireless_mike: bool,
    #[serde(rename = "wirelessMikeNumber")]
    pub wireless_mike_count: u32,
    #[serde(rename = "sd")]
    pub sd_card: bool,
    #[serde(rename = "wirelessIncome")]
    pub wireless_intercom: bool,
    pub hand_speaker: bool,
    pub bluetooth_unit: bool,
    pub insurance: bool,
    pub insurance_days: u32,
    #[serde(rename = "bodyRapping", default)]
    pub body_wrapping: bool,
}

impl Selection {
    /// The vehicle type chosen for the selected class.
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_types.for_class(self.vehicle_class)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            election_category: ElectionCategory::General,
            vehicle_class: VehicleClass::S,
            vehicle_types: VehicleTypeChoice::default(),
            delivery_region: None,
            taking_platform: false,
            signal_light: SignalLight::OutLight,
            amp_size: AmpTier::W150,
            speaker: SpeakerCount::Two,
            wireless_mike: false,
            wireless_mike_count: 1,
            sd_card: false,
            wireless_intercom: false,
            hand_speaker: false,
            bluetooth_unit: false,
            insurance: false,
            insurance_days: 1,
            body_wrapping: false,
        }
    }
}

/// One remembered model per class, so switching classes back and forth keeps the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleTypeChoice {
    pub s: VehicleType,
    pub m: VehicleType,
    pub l: VehicleType,
    pub ll: VehicleType,
}

impl VehicleTypeChoice {
    pub fn for_class(&self, class: VehicleClass) -> VehicleType {
        match class {
            VehicleClass::S => self.s,
            VehicleClass::M => self.m,
            VehicleClass::L => self.l,
            VehicleClass::Ll => self.ll,
        }
    }

    pub fn set(&mut self, vehicle: VehicleType) {
        match vehicle.class() {
            VehicleClass::S => self.s = vehicle,
            VehicleClass::M => self.m = vehicle,
            VehicleClass::L => self.l = vehicle,
            VehicleClass::Ll => self.ll = vehicle,
        }
    }
}

impl Default for VehicleTypeChoice {
    fn default() -> Self {
        Self {
            s: VehicleClass::S.default_type(),
            m: VehicleClass::M.default_type(),
            l: VehicleClass::L.default_type(),
            ll: VehicleClass::Ll.default_type(),
        }
    }
}

/// Query for the equipment offerings of one vehicle.
#[derive(Debug, Deserialize)]
pub struct OfferingsQuery {
    pub category: ElectionCategory,
    pub class: VehicleClass,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
}

/// Query for the class comparison table.
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub category: ElectionCategory,
    pub class: VehicleClass,
}

/// Query for recommended vehicles.
#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub category: ElectionCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM_PAYLOAD: &str = r#"{
        "electoralClass": "national",
        "carClass": "l",
        "carType": {"s": "compact", "m": "shienta", "l": "noah_90", "ll": "regiusaceAceWide"},
        "deliveryPrefecture": "tokyo",
        "takingPlatform": true,
        "signalLight": "inLight",
        "ampSize": "300",
        "speaker": "twe",
        "wirelessMike": true,
        "wirelessMikeNumber": 2,
        "sd": false,
        "wirelessIncome": true,
        "handSpeaker": false,
        "bluetoothUnit": false,
        "insurance": true,
        "insuranceDays": 5,
        "bodyRapping": false
    }"#;

    #[test]
    fn test_selection_parses_form_payload() {
        let selection: Selection = serde_json::from_str(FORM_PAYLOAD).unwrap();

        assert_eq!(selection.election_category, ElectionCategory::National);
        assert_eq!(selection.vehicle_type(), VehicleType::Noah90);
        assert_eq!(selection.delivery_region.as_deref(), Some("tokyo"));
        assert_eq!(selection.amp_size, AmpTier::W300);
        assert_eq!(selection.speaker, SpeakerCount::Two);
        assert_eq!(selection.wireless_mike_count, 2);
        assert!(selection.wireless_intercom);
        assert_eq!(selection.insurance_days, 5);
    }

    #[test]
    fn test_selection_region_is_optional() {
        let mut value: serde_json::Value = serde_json::from_str(FORM_PAYLOAD).unwrap();
        value.as_object_mut().unwrap().remove("deliveryPrefecture");

        let selection: Selection = serde_json::from_value(value).unwrap();
        assert_eq!(selection.delivery_region, None);
    }

    #[test]
    fn test_selection_other_fields_are_required() {
        let mut value: serde_json::Value = serde_json::from_str(FORM_PAYLOAD).unwrap();
        value.as_object_mut().unwrap().remove("insuranceDays");

        assert!(serde_json::from_value::<Selection>(value).is_err());
    }

    #[test]
    fn test_selection_rejects_unknown_codes() {
        let payload = FORM_PAYLOAD.replace("\"national\"", "\"mayoral\"");
        assert!(serde_json::from_str::<Selection>(&payload).is_err());
    }

    #[test]
    fn test_default_selection_uses_class_defaults() {
        let selection = Selection::default();
        assert_eq!(selection.vehicle_type(), VehicleType::HeightWagon);
        assert_eq!(selection.vehicle_types.for_class(VehicleClass::Ll), VehicleType::RegiusAceBasic);
    }

    #[test]
    fn test_vehicle_type_choice_set_targets_owning_class() {
        let mut choice = VehicleTypeChoice::default();
        choice.set(VehicleType::TownAce);
        assert_eq!(choice.l, VehicleType::TownAce);
        assert_eq!(choice.s, VehicleType::HeightWagon);
    }

    #[test]
    fn test_selection_round_trips_through_json() {
        let selection: Selection = serde_json::from_str(FORM_PAYLOAD).unwrap();
        let json = serde_json::to_string(&selection).unwrap();
        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selection);
    }
}
