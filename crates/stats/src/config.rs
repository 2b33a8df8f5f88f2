//! Aggregation settings.

use serde::Deserialize;
use tracing::warn;

use invtrack_inventory::DEFAULT_THRESHOLD;

pub const DEFAULT_THRESHOLD_ENV: &str = "INVTRACK_DEFAULT_THRESHOLD";
pub const LOW_STOCK_LIMIT_ENV: &str = "INVTRACK_LOW_STOCK_LIMIT";
pub const TOP_CATEGORIES_LIMIT_ENV: &str = "INVTRACK_TOP_CATEGORIES_LIMIT";
pub const RECENT_LIMIT_ENV: &str = "INVTRACK_RECENT_LIMIT";

/// Aggregator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Reorder threshold for products without one.
    pub default_threshold: u32,
    /// Maximum number of low-stock products listed in a summary.
    pub low_stock_limit: usize,
    /// Maximum number of categories listed in a summary.
    pub top_categories_limit: usize,
    /// Maximum number of transactions listed in a summary.
    pub recent_transactions_limit: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            default_threshold: DEFAULT_THRESHOLD,
            low_stock_limit: 5,
            top_categories_limit: 5,
            recent_transactions_limit: 5,
        }
    }
}

impl StatsConfig {
    pub fn with_default_threshold(mut self, threshold: u32) -> Self {
        self.default_threshold = threshold;
        self
    }

    pub fn with_low_stock_limit(mut self, limit: usize) -> Self {
        self.low_stock_limit = limit;
        self
    }

    pub fn with_top_categories_limit(mut self, limit: usize) -> Self {
        self.top_categories_limit = limit;
        self
    }

    pub fn with_recent_transactions_limit(mut self, limit: usize) -> Self {
        self.recent_transactions_limit = limit;
        self
    }

    /// Defaults overridden by `INVTRACK_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, DEFAULT_THRESHOLD_ENV) {
            config.default_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, LOW_STOCK_LIMIT_ENV) {
            config.low_stock_limit = v;
        }
        if let Some(v) = parse_var(&lookup, TOP_CATEGORIES_LIMIT_ENV) {
            config.top_categories_limit = v;
        }
        if let Some(v) = parse_var(&lookup, RECENT_LIMIT_ENV) {
            config.recent_transactions_limit = v;
        }
        config
    }
}

fn parse_var<T: core::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(var = key, value = %raw, "ignoring unparseable config value");
            None
        }
    }
}
