//! Delivery fee lookup by region code.
//!
//! Region codes arrive as raw strings from the form. Anything that is not a
//! known prefecture code, including no selection at all, resolves to
//! [`DeliveryFee::Consultation`] and never to a numeric fee.

use crate::catalog::Region;

use super::labels::{delivery_fee_label, delivery_round_trip_label};
use super::models::{DeliveryFee, Yen};
use super::responses::DeliveryQuote;
use super::tables::PriceTables;

/// One-way fee for a region code, or the consultation sentinel.
pub fn resolve_delivery_fee(tables: &PriceTables, region_code: Option<&str>) -> DeliveryFee {
    region_code
        .and_then(Region::from_code)
        .and_then(|region| tables.delivery_fee(region))
        .unwrap_or(DeliveryFee::Consultation)
}

/// Round-trip charge: zero for free and consultation areas, otherwise twice the one-way fee.
pub fn round_trip_fee(tables: &PriceTables, region_code: Option<&str>) -> Yen {
    round_trip(resolve_delivery_fee(tables, region_code))
}

pub fn is_consultation_area(tables: &PriceTables, region_code: Option<&str>) -> bool {
    resolve_delivery_fee(tables, region_code) == DeliveryFee::Consultation
}

pub(crate) fn round_trip(fee: DeliveryFee) -> Yen {
    match fee {
        DeliveryFee::Fee(one_way) => one_way * 2,
        DeliveryFee::Consultation => 0,
    }
}

pub(crate) fn one_way_charge(fee: DeliveryFee) -> Yen {
    match fee {
        DeliveryFee::Fee(one_way) => one_way,
        DeliveryFee::Consultation => 0,
    }
}

/// Everything a collaborator needs to render one region's delivery terms.
pub fn delivery_quote(tables: &PriceTables, region_code: Option<&str>) -> DeliveryQuote {
    let region = region_code.and_then(Region::from_code);
    let fee = resolve_delivery_fee(tables, region_code);

    DeliveryQuote {
        region,
        region_name: region.map(Region::name),
        one_way_fee: one_way_charge(fee),
        round_trip_fee: round_trip(fee),
        is_consultation: fee == DeliveryFee::Consultation,
        label: delivery_fee_label(fee),
        round_trip_label: delivery_round_trip_label(fee),
    }
}
