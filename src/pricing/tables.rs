//! Loading and validating the price rule tables.
//!
//! Tables are parsed once, checked for completeness, and then only ever read.
//! The embedded snapshot lives in a process-wide `OnceLock`; a replacement file
//! named by `PRICE_TABLE_PATH` is loaded at startup and shared behind an `Arc`.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::OnceLock;

use crate::catalog::{AmpTier, ElectionCategory, Region, SignalLight, VehicleClass, VehicleType};

use super::models::{ByCategory, DeliveryFee, OptionPriceTable, UnitPriceEntry, Yen};

const EMBEDDED_TABLES: &str = include_str!("../../data/price_tables.json");

/// Largest price any table cell may hold (¥100,000,000).
///
/// Mike counts and insurance days are `u32`, so with every cell at or below
/// this bound a quote total stays far inside `u64`.
pub const MAX_TABLE_PRICE: Yen = 100_000_000;

/// Errors raised while building [`PriceTables`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("failed to read price tables from {path}: {message}")]
    Read { path: String, message: String },

    #[error("malformed price tables: {0}")]
    Parse(String),

    #[error("vehicle {vehicle} is filed under class {filed} but belongs to class {expected}")]
    WrongClass {
        vehicle: &'static str,
        filed: &'static str,
        expected: &'static str,
    },

    #[error("vehicle {0} is listed more than once")]
    DuplicateVehicle(&'static str),

    #[error("vehicle {0} has no price entry")]
    MissingVehicle(&'static str),

    #[error("unknown region code '{0}' in delivery table")]
    UnknownRegion(String),

    #[error("region {0} has no delivery fee")]
    MissingRegion(&'static str),

    #[error("{vehicle}/{category}: platform switch is flagged but no platform unit price is defined")]
    MissingPlatformTable {
        vehicle: &'static str,
        category: &'static str,
    },

    #[error("{field}: price {price} exceeds the {max} yen limit", max = MAX_TABLE_PRICE)]
    PriceOutOfRange { field: String, price: Yen },
}

#[derive(Debug, Deserialize)]
struct PriceTableFile {
    vehicles: Vec<VehicleRow>,
    options: OptionPriceTable,
    delivery: BTreeMap<String, DeliveryFee>,
}

#[derive(Debug, Deserialize)]
struct VehicleRow {
    class: VehicleClass,
    #[serde(rename = "type")]
    vehicle_type: VehicleType,
    rates: ByCategory<UnitPriceEntry>,
}

/// Immutable snapshot of every price the engine can charge.
#[derive(Debug, Clone)]
pub struct PriceTables {
    vehicles: HashMap<VehicleType, ByCategory<UnitPriceEntry>>,
    options: OptionPriceTable,
    delivery: HashMap<Region, DeliveryFee>,
}

impl PriceTables {
    /// Parse and validate tables from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let file: PriceTableFile =
            serde_json::from_str(json).map_err(|e| TableError::Parse(e.to_string()))?;
        Self::from_file(file)
    }

    /// Read, parse and validate tables from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TableError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// The tables compiled into the binary, parsed on first use.
    pub fn embedded() -> Result<&'static PriceTables, TableError> {
        static EMBEDDED: OnceLock<Result<PriceTables, TableError>> = OnceLock::new();
        EMBEDDED
            .get_or_init(|| PriceTables::from_json(EMBEDDED_TABLES))
            .as_ref()
            .map_err(Clone::clone)
    }

    fn from_file(file: PriceTableFile) -> Result<Self, TableError> {
        let mut vehicles = HashMap::with_capacity(file.vehicles.len());

        for row in file.vehicles {
            let expected = row.vehicle_type.class();
            if row.class != expected {
                return Err(TableError::WrongClass {
                    vehicle: row.vehicle_type.code(),
                    filed: row.class.code(),
                    expected: expected.code(),
                });
            }

            for (category, entry) in row.rates.iter() {
                check_switch_table(row.vehicle_type, category, entry)?;
                check_entry_prices(row.vehicle_type, category, entry)?;
            }

            if vehicles.insert(row.vehicle_type, row.rates).is_some() {
                return Err(TableError::DuplicateVehicle(row.vehicle_type.code()));
            }
        }

        if let Some(missing) = VehicleType::ALL
            .iter()
            .find(|vehicle| !vehicles.contains_key(vehicle))
        {
            return Err(TableError::MissingVehicle(missing.code()));
        }

        check_option_prices(&file.options)?;

        let mut delivery = HashMap::with_capacity(file.delivery.len());
        for (code, fee) in file.delivery {
            if let DeliveryFee::Fee(price) = fee {
                check_price(price, || format!("delivery.{code}"))?;
            }
            let region = Region::from_code(&code).ok_or(TableError::UnknownRegion(code))?;
            delivery.insert(region, fee);
        }

        if let Some(missing) = Region::ALL
            .iter()
            .find(|region| !delivery.contains_key(region))
        {
            return Err(TableError::MissingRegion(missing.code()));
        }

        Ok(Self {
            vehicles,
            options: file.options,
            delivery,
        })
    }

    pub(crate) fn vehicle_rates(&self, vehicle: VehicleType) -> Option<&ByCategory<UnitPriceEntry>> {
        self.vehicles.get(&vehicle)
    }

    pub(crate) fn options(&self) -> &OptionPriceTable {
        &self.options
    }

    pub(crate) fn delivery_fee(&self, region: Region) -> Option<DeliveryFee> {
        self.delivery.get(&region).copied()
    }
}

fn check_switch_table(
    vehicle: VehicleType,
    category: ElectionCategory,
    entry: &UnitPriceEntry,
) -> Result<(), TableError> {
    let switches = entry.taking_platform_change_display && entry.change_display.any();
    if switches && entry.platform_unit_price.is_none() {
        return Err(TableError::MissingPlatformTable {
            vehicle: vehicle.code(),
            category: category.code(),
        });
    }
    Ok(())
}

fn check_price(price: Yen, field: impl FnOnce() -> String) -> Result<(), TableError> {
    if price > MAX_TABLE_PRICE {
        return Err(TableError::PriceOutOfRange {
            field: field(),
            price,
        });
    }
    Ok(())
}

fn check_entry_prices(
    vehicle: VehicleType,
    category: ElectionCategory,
    entry: &UnitPriceEntry,
) -> Result<(), TableError> {
    let at = |field: String| format!("{}/{}/{}", vehicle.code(), category.code(), field);

    check_price(entry.car, || at("car".to_string()))?;
    if let Some(price) = entry.taking_platform {
        check_price(price, || at("takingPlatform".to_string()))?;
    }

    let mut sheets = vec![("", entry.amp_size, entry.signal_light)];
    if let Some(platform) = &entry.platform_unit_price {
        sheets.push(("platformUnitPrice.", platform.amp_size, platform.signal_light));
    }
    for (prefix, amps, lights) in sheets {
        for tier in AmpTier::ALL {
            if let Some(price) = amps.get(tier) {
                check_price(price, || at(format!("{prefix}ampSize.{}", tier.watts())))?;
            }
        }
        for light in SignalLight::ALL {
            if let Some(price) = lights.get(light) {
                check_price(price, || at(format!("{prefix}signalLight.{}", light.code())))?;
            }
        }
    }
    Ok(())
}

fn check_option_prices(options: &OptionPriceTable) -> Result<(), TableError> {
    let rows = [
        ("wirelessMike", &options.wireless_mike),
        ("sdCard", &options.sd_card),
        ("wirelessIntercom", &options.wireless_intercom),
        ("handSpeaker", &options.hand_speaker),
        ("bluetoothUnit", &options.bluetooth_unit),
        ("insurance.basic", &options.insurance.basic),
        ("insurance.takingPlatform", &options.insurance.taking_platform),
    ];
    for (name, row) in rows {
        for (category, price) in row.iter() {
            check_price(*price, || format!("options.{name}.{}", category.code()))?;
        }
    }
    Ok(())
}
