//! Immutable point-in-time copy of the four collections.

use serde::{Deserialize, Deserializer, Serialize};

use invtrack_auth::User;
use invtrack_inventory::{Location, Product, Transaction};

use crate::StatsError;
use crate::integrity::{IntegrityIssue, integrity_report};

/// The collections fetched from the inventory API for one computation.
///
/// Missing or `null` collections decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "vec_or_null")]
    pub products: Vec<Product>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub locations: Vec<Location>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub transactions: Vec<Transaction>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub users: Vec<User>,
}

fn vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Snapshot {
    pub fn new(
        products: Vec<Product>,
        locations: Vec<Location>,
        transactions: Vec<Transaction>,
        users: Vec<User>,
    ) -> Self {
        Self {
            products,
            locations,
            transactions,
            users,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, StatsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Cross-record problems (dangling references, invalid records).
    ///
    /// Purely informational; aggregation never depends on it.
    pub fn integrity_report(&self) -> Vec<IntegrityIssue> {
        integrity_report(self)
    }

    /// Fail on the first integrity issue, if any.
    pub fn ensure_consistent(&self) -> Result<(), StatsError> {
        let mut issues = self.integrity_report();
        if issues.is_empty() {
            return Ok(());
        }
        let count = issues.len();
        Err(StatsError::Inconsistent {
            count,
            first: issues.swap_remove(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_collections_are_empty() {
        let snapshot = Snapshot::from_json(r#"{"products": null, "users": []}"#).unwrap();
        assert_eq!(snapshot, Snapshot::default());

        let snapshot = Snapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn blank_and_null_optional_fields_decode() {
        let raw = r#"{"products": [{
            "id": "p-1",
            "name": "Tape",
            "sku": "TP-1",
            "price": 2,
            "quantity": 3,
            "category": null,
            "threshold": null,
            "locationId": ""
        }]}"#;
        let snapshot = Snapshot::from_json(raw).unwrap();
        let product = &snapshot.products[0];
        assert_eq!(product.location_id, None);
        assert_eq!(product.category(), None);
        assert_eq!(product.threshold, None);
        assert!(snapshot.integrity_report().is_empty());
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = Snapshot::from_json(r#"{"products": [{"id": ""}]}"#).unwrap_err();
        assert!(matches!(err, StatsError::Decode(_)));
    }

    #[test]
    fn empty_snapshot_is_consistent() {
        assert!(Snapshot::default().ensure_consistent().is_ok());
    }
}
