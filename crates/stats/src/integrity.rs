//! Cross-record consistency checks.
//!
//! The API does not enforce referential integrity between collections, so a
//! snapshot may contain transactions for deleted products and the like. These
//! checks report such records without rejecting the snapshot.

use std::collections::HashSet;

use serde::Serialize;

use invtrack_core::{Entity, LocationId, ProductId, TransactionId, UserId, id_set};

use crate::Snapshot;

/// One problem found in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// Transaction references a product that is not in the snapshot.
    UnknownProduct {
        transaction_id: TransactionId,
        product_id: ProductId,
    },
    /// Transaction was recorded by a user that is not in the snapshot.
    UnknownUser {
        transaction_id: TransactionId,
        user_id: UserId,
    },
    /// Product is stored at a location that is not in the snapshot.
    UnknownLocation {
        product_id: ProductId,
        location_id: LocationId,
    },
    /// Record fails its own validation rules.
    InvalidRecord { record: String, reason: String },
}

impl core::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IntegrityIssue::UnknownProduct {
                transaction_id,
                product_id,
            } => write!(f, "transaction {transaction_id} references unknown product {product_id}"),
            IntegrityIssue::UnknownUser {
                transaction_id,
                user_id,
            } => write!(f, "transaction {transaction_id} recorded by unknown user {user_id}"),
            IntegrityIssue::UnknownLocation {
                product_id,
                location_id,
            } => write!(f, "product {product_id} stored at unknown location {location_id}"),
            IntegrityIssue::InvalidRecord { record, reason } => write!(f, "{record}: {reason}"),
        }
    }
}

pub fn integrity_report(snapshot: &Snapshot) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    collect_invalid(&mut issues, "product", &snapshot.products, |p| p.validate());
    collect_invalid(&mut issues, "location", &snapshot.locations, |l| l.validate());
    collect_invalid(&mut issues, "transaction", &snapshot.transactions, |t| t.validate());
    collect_invalid(&mut issues, "user", &snapshot.users, |u| u.validate());

    let location_ids = id_set(&snapshot.locations);
    for product in &snapshot.products {
        if let Some(location_id) = &product.location_id {
            if !location_ids.contains(location_id) {
                issues.push(IntegrityIssue::UnknownLocation {
                    product_id: product.id.clone(),
                    location_id: location_id.clone(),
                });
            }
        }
    }

    let product_ids = id_set(&snapshot.products);
    let user_ids: HashSet<&UserId> = id_set(&snapshot.users);
    for tx in &snapshot.transactions {
        if !product_ids.contains(&tx.product_id) {
            issues.push(IntegrityIssue::UnknownProduct {
                transaction_id: tx.id.clone(),
                product_id: tx.product_id.clone(),
            });
        }
        if let Some(user_id) = tx.user_id.user_id() {
            if !user_ids.contains(user_id) {
                issues.push(IntegrityIssue::UnknownUser {
                    transaction_id: tx.id.clone(),
                    user_id: user_id.clone(),
                });
            }
        }
    }

    issues
}

fn collect_invalid<E, F>(issues: &mut Vec<IntegrityIssue>, kind: &str, records: &[E], validate: F)
where
    E: Entity,
    E::Id: core::fmt::Display,
    F: Fn(&E) -> invtrack_core::DomainResult<()>,
{
    for record in records {
        if let Err(e) = validate(record) {
            issues.push(IntegrityIssue::InvalidRecord {
                record: format!("{kind} {}", record.id()),
                reason: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use invtrack_auth::{Role, User};
    use invtrack_core::Money;
    use invtrack_inventory::{Actor, Location, LocationType, Product, Transaction, TransactionType};

    fn snapshot() -> Snapshot {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Snapshot::new(
            vec![
                Product::new("p-1".parse().unwrap(), "Bolt", "B-1", Money::from_major(1), 50)
                    .with_location("wh-1".parse().unwrap()),
                Product::new("p-2".parse().unwrap(), "Nut", "N-1", Money::from_major(1), 50)
                    .with_location("gone".parse().unwrap()),
            ],
            vec![Location::new("wh-1".parse().unwrap(), "Main", LocationType::Warehouse, "1 Road")],
            vec![
                Transaction::new(
                    "t-1".parse().unwrap(),
                    "p-1".parse().unwrap(),
                    TransactionType::In,
                    5,
                    Actor::System,
                    at,
                ),
                Transaction::new(
                    "t-2".parse().unwrap(),
                    "p-9".parse().unwrap(),
                    TransactionType::Out,
                    0,
                    Actor::User("u-9".parse().unwrap()),
                    at,
                ),
            ],
            vec![User::new("u-1".parse().unwrap(), "ann", "ann@example.com", Role::Admin, at)],
        )
    }

    #[test]
    fn reports_dangling_references_and_invalid_records() {
        let issues = snapshot().integrity_report();

        assert_eq!(issues.len(), 4);
        assert!(issues.contains(&IntegrityIssue::UnknownLocation {
            product_id: "p-2".parse().unwrap(),
            location_id: "gone".parse().unwrap(),
        }));
        assert!(issues.contains(&IntegrityIssue::UnknownProduct {
            transaction_id: "t-2".parse().unwrap(),
            product_id: "p-9".parse().unwrap(),
        }));
        assert!(issues.contains(&IntegrityIssue::UnknownUser {
            transaction_id: "t-2".parse().unwrap(),
            user_id: "u-9".parse().unwrap(),
        }));
        assert!(issues.iter().any(|i| matches!(
            i,
            IntegrityIssue::InvalidRecord { record, .. } if record == "transaction t-2"
        )));
    }

    #[test]
    fn system_actor_is_never_unknown() {
        let issues = snapshot().integrity_report();
        assert!(!issues.iter().any(|i| matches!(
            i,
            IntegrityIssue::UnknownUser { transaction_id, .. } if transaction_id.as_str() == "t-1"
        )));
    }

    #[test]
    fn ensure_consistent_reports_count() {
        match snapshot().ensure_consistent() {
            Err(crate::StatsError::Inconsistent { count, .. }) => assert_eq!(count, 4),
            other => panic!("expected Inconsistent, got {other:?}"),
        }
    }
}
