//! Inventory domain records.
//!
//! Products, storage locations and stock movements as served by the inventory
//! API, with the record-level rules the aggregator and filters rely on
//! (no IO, no HTTP, no storage).

pub mod location;
pub mod product;
pub mod transaction;

pub use location::{Location, LocationType};
pub use product::{CRITICAL_QUANTITY, DEFAULT_THRESHOLD, Product, StockUrgency};
pub use transaction::{Actor, Transaction, TransactionType};
