//! Quote calculation engine for campaign vehicle rentals.
//!
//! Turns a buyer's [`Selection`] into an itemized [`QuoteResult`]. The engine
//! is pure: the price tables are loaded once and only read, so any number of
//! callers may quote concurrently without coordination.

pub mod calculators;
pub mod delivery;
pub mod labels;
pub mod models;
pub mod requests;
pub mod resolver;
pub mod responses;
pub mod routes;
pub mod services;
pub mod tables;

// Re-export commonly used items
pub use calculators::{calculate_totals, option_charge};
pub use models::{DeliveryFee, Yen};
pub use requests::Selection;
pub use resolver::{PlatformControl, PriceSource};
pub use responses::QuoteResult;
pub use routes::router;
pub use services::{compute_quote, PricingError, QuoteEngine};
pub use tables::{PriceTables, TableError, MAX_TABLE_PRICE};
