use serde::{Deserialize, Serialize};

use invtrack_core::Money;
use invtrack_inventory::{Product, Transaction};

/// Per-category product count and stock value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub name: String,
    pub count: usize,
    pub value: Money,
}

/// Stock movement counters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementCounts {
    pub total: usize,
    pub stock_in: usize,
    pub stock_out: usize,
}

/// User account counters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCounts {
    pub total: usize,
    pub admins: usize,
    pub active: usize,
}

/// Location counters, one field per location type.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCounts {
    pub total: usize,
    pub warehouses: usize,
    pub stores: usize,
    pub distribution_centers: usize,
    pub offices: usize,
}

/// Derived dashboard statistics for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_products: usize,
    /// Number of products at or below their reorder threshold.
    pub low_stock_items: usize,
    /// Leading low-stock products in input order, capped by the configured limit.
    pub low_stock_products: Vec<Product>,
    pub total_value: Money,
    /// Distinct non-empty categories.
    pub categories: usize,
    pub top_categories: Vec<CategoryStat>,
    pub total_locations: usize,
    pub total_transactions: usize,
    pub stock_in_today: usize,
    pub stock_out_today: usize,
    /// Newest first.
    pub recent_transactions: Vec<Transaction>,
    pub total_users: usize,
    pub active_users: usize,
}
