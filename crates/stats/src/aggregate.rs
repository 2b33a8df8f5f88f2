//! Dashboard statistics aggregation.
//!
//! Everything here is a pure function of borrowed collections: no IO, no
//! interior state, no mutation of inputs. `StatsAggregator` composes the
//! individual functions into a `Summary`; the page counters in
//! [`crate::filters`] reuse the same functions over filtered subsets.

use std::collections::HashMap;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use tracing::debug;

use invtrack_auth::User;
use invtrack_core::Money;
use invtrack_inventory::{Location, LocationType, Product, Transaction, TransactionType};

use crate::config::StatsConfig;
use crate::snapshot::Snapshot;
use crate::summary::{CategoryStat, LocationCounts, MovementCounts, Summary, UserCounts};

/// Products at or below their effective reorder threshold, in input order.
pub fn low_stock(
    products: &[Product],
    default_threshold: u32,
) -> impl Iterator<Item = &Product> {
    products
        .iter()
        .filter(move |p| p.is_low_stock(default_threshold))
}

/// Products with `quantity < threshold` for a fixed threshold.
///
/// This is the backend's low-stock query, which ignores per-product thresholds.
pub fn products_below(products: &[Product], threshold: u32) -> Vec<&Product> {
    products.iter().filter(|p| p.quantity < threshold).collect()
}

/// Σ `price * quantity`, exact.
pub fn total_value<'a>(products: impl IntoIterator<Item = &'a Product>) -> Money {
    products.into_iter().map(Product::stock_value).sum()
}

/// Distinct non-empty categories in first-seen order.
pub fn distinct_categories(products: &[Product]) -> Vec<&str> {
    let mut seen = Vec::new();
    for category in products.iter().filter_map(Product::category) {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// Count and stock value per category, largest count first.
///
/// Ties keep first-seen order. Products without a category are skipped.
pub fn category_breakdown(products: &[Product]) -> Vec<CategoryStat> {
    let mut stats: Vec<CategoryStat> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for product in products {
        let Some(category) = product.category() else {
            continue;
        };
        let slot = *index.entry(category).or_insert_with(|| {
            stats.push(CategoryStat {
                name: category.to_string(),
                count: 0,
                value: Money::ZERO,
            });
            stats.len() - 1
        });
        let stat = &mut stats[slot];
        stat.count += 1;
        stat.value = stat.value + product.stock_value();
    }

    // `sort_by` is stable.
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

pub fn movement_counts<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> MovementCounts {
    transactions
        .into_iter()
        .fold(MovementCounts::default(), |mut acc, tx| {
            acc.total += 1;
            match tx.kind {
                TransactionType::In => acc.stock_in += 1,
                TransactionType::Out => acc.stock_out += 1,
            }
            acc
        })
}

/// Transactions whose timestamp falls on `day` as seen from time zone `tz`.
pub fn movements_on_day<'a, Tz: TimeZone>(
    transactions: &'a [Transaction],
    day: NaiveDate,
    tz: &'a Tz,
) -> impl Iterator<Item = &'a Transaction> {
    transactions
        .iter()
        .filter(move |tx| tx.timestamp.with_timezone(tz).date_naive() == day)
}

/// Newest `limit` transactions, newest first; equal timestamps keep input order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.into_iter().take(limit).cloned().collect()
}

pub fn user_counts<'a>(users: impl IntoIterator<Item = &'a User>) -> UserCounts {
    users.into_iter().fold(UserCounts::default(), |mut acc, user| {
        acc.total += 1;
        if user.is_admin() {
            acc.admins += 1;
        }
        if user.is_active() {
            acc.active += 1;
        }
        acc
    })
}

pub fn location_counts<'a>(
    locations: impl IntoIterator<Item = &'a Location>,
) -> LocationCounts {
    locations
        .into_iter()
        .fold(LocationCounts::default(), |mut acc, location| {
            acc.total += 1;
            match location.location_type {
                LocationType::Warehouse => acc.warehouses += 1,
                LocationType::Store => acc.stores += 1,
                LocationType::DistributionCenter => acc.distribution_centers += 1,
                LocationType::Office => acc.offices += 1,
            }
            acc
        })
}

/// Computes dashboard summaries with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    config: StatsConfig,
}

impl StatsAggregator {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Summary with "today" taken from the local clock and time zone.
    pub fn compute(&self, snapshot: &Snapshot) -> Summary {
        self.compute_at(snapshot, &Local::now())
    }

    /// Summary with an explicit "now".
    ///
    /// The calendar day is evaluated in `now`'s time zone.
    pub fn compute_at<Tz: TimeZone>(
        &self,
        snapshot: &Snapshot,
        now: &DateTime<Tz>,
    ) -> Summary {
        self.summarize_at(
            &snapshot.products,
            &snapshot.locations,
            &snapshot.transactions,
            &snapshot.users,
            now,
        )
    }

    pub fn summarize_at<Tz: TimeZone>(
        &self,
        products: &[Product],
        locations: &[Location],
        transactions: &[Transaction],
        users: &[User],
        now: &DateTime<Tz>,
    ) -> Summary {
        let today = now.date_naive();
        let _span = tracing::debug_span!(
            "compute_stats",
            products = products.len(),
            locations = locations.len(),
            transactions = transactions.len(),
            users = users.len(),
            %today
        )
        .entered();

        let cfg = &self.config;

        let low: Vec<&Product> = low_stock(products, cfg.default_threshold).collect();
        let mut top_categories = category_breakdown(products);
        let categories = top_categories.len();
        top_categories.truncate(cfg.top_categories_limit);

        let tz = now.timezone();
        let today_moves = movement_counts(movements_on_day(transactions, today, &tz));
        let user_totals = user_counts(users);

        let summary = Summary {
            total_products: products.len(),
            low_stock_items: low.len(),
            low_stock_products: low
                .into_iter()
                .take(cfg.low_stock_limit)
                .cloned()
                .collect(),
            total_value: total_value(products),
            categories,
            top_categories,
            total_locations: locations.len(),
            total_transactions: transactions.len(),
            stock_in_today: today_moves.stock_in,
            stock_out_today: today_moves.stock_out,
            recent_transactions: recent_transactions(
                transactions,
                cfg.recent_transactions_limit,
            ),
            total_users: user_totals.total,
            active_users: user_totals.active,
        };

        debug!(
            low_stock = summary.low_stock_items,
            total_value = %summary.total_value,
            stock_in_today = summary.stock_in_today,
            stock_out_today = summary.stock_out_today,
            active_users = summary.active_users,
            "computed dashboard stats"
        );

        summary
    }
}

/// Dashboard summary with default settings and the local clock.
///
/// Absent collections are passed as empty slices.
pub fn compute_stats(
    products: &[Product],
    locations: &[Location],
    transactions: &[Transaction],
    users: &[User],
) -> Summary {
    StatsAggregator::default().summarize_at(
        products,
        locations,
        transactions,
        users,
        &Local::now(),
    )
}
