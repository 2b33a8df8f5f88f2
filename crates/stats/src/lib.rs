//! `invtrack-stats` — derived statistics over inventory snapshots.
//!
//! The API layer fetches products, locations, transactions and users; this
//! crate turns one immutable [`Snapshot`] of them into a dashboard
//! [`Summary`] and provides the filters and counters of the list screens.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filters;
pub mod integrity;
pub mod snapshot;
pub mod summary;

pub use aggregate::{
    StatsAggregator, category_breakdown, compute_stats, distinct_categories, location_counts,
    low_stock, movement_counts, movements_on_day, products_below, recent_transactions,
    total_value, user_counts,
};
pub use config::StatsConfig;
pub use error::StatsError;
pub use filters::{LocationFilter, ProductFilter, TransactionFilter, UserFilter};
pub use integrity::IntegrityIssue;
pub use snapshot::Snapshot;
pub use summary::{CategoryStat, LocationCounts, MovementCounts, Summary, UserCounts};
