use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use chrono::{Duration, TimeZone, Utc};
use invtrack_auth::{Role, User, UserStatus};
use invtrack_core::Money;
use invtrack_inventory::{Actor, Location, LocationType, Product, Transaction, TransactionType};
use invtrack_stats::{Snapshot, StatsAggregator, TransactionFilter};

const CATEGORIES: [&str; 6] = [
    "Tools",
    "Fasteners",
    "Paint",
    "Electrical",
    "Plumbing",
    "Garden",
];

fn synthetic_snapshot(size: usize) -> Snapshot {
    let base = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();

    let products = (0..size)
        .map(|i| {
            Product::new(
                format!("p-{i}").parse().unwrap(),
                format!("Product {i}"),
                format!("SKU-{i:05}"),
                Money::from_minor((i as i64 % 5_000) + 99),
                (i % 40) as u32,
            )
            .with_category(CATEGORIES[i % CATEGORIES.len()])
        })
        .collect();

    let locations = (0..size / 100 + 1)
        .map(|i| {
            Location::new(
                format!("l-{i}").parse().unwrap(),
                format!("Site {i}"),
                LocationType::Warehouse,
                "1 Road",
            )
        })
        .collect();

    let transactions = (0..size * 4)
        .map(|i| {
            let kind = if i % 3 == 0 { TransactionType::Out } else { TransactionType::In };
            Transaction::new(
                format!("t-{i}").parse().unwrap(),
                format!("p-{}", i % size.max(1)).parse().unwrap(),
                kind,
                (i % 9 + 1) as u32,
                Actor::System,
                base - Duration::minutes(i as i64 * 7),
            )
        })
        .collect();

    let users = (0..size / 10 + 1)
        .map(|i| {
            let status = if i % 4 == 0 { UserStatus::Inactive } else { UserStatus::Active };
            User::new(
                format!("u-{i}").parse().unwrap(),
                format!("user{i}"),
                format!("user{i}@example.com"),
                Role::Staff,
                base,
            )
            .with_status(status)
        })
        .collect();

    Snapshot::new(products, locations, transactions, users)
}

fn bench_compute_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_at");
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let aggregator = StatsAggregator::default();

    for size in [100usize, 1_000, 10_000] {
        let snapshot = synthetic_snapshot(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &snapshot, |b, snapshot| {
            b.iter(|| aggregator.compute_at(black_box(snapshot), &now));
        });
    }

    group.finish();
}

fn bench_transaction_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("transaction_filter");
    let snapshot = synthetic_snapshot(1_000);
    let filter = TransactionFilter {
        search: Some("product 42".to_string()),
        kind: Some(TransactionType::In),
    };

    group.bench_function("search_and_count", |b| {
        b.iter(|| filter.counts(black_box(&snapshot.transactions), &snapshot.products));
    });

    group.finish();
}

criterion_group!(benches, bench_compute_at, bench_transaction_filter);
criterion_main!(benches);
