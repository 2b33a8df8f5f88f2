//! List-screen filters.
//!
//! Search terms match case-insensitively as substrings; an unset or empty
//! criterion matches everything. Only the product name search is trimmed.
//! Counters for a filtered list come from the aggregation functions in
//! [`crate::aggregate`].

use std::collections::HashMap;

use serde::Deserialize;

use invtrack_auth::{Role, User, UserStatus};
use invtrack_core::ProductId;
use invtrack_inventory::{Location, LocationType, Product, Transaction, TransactionType};

use crate::aggregate::{location_counts, movement_counts, user_counts};
use crate::summary::{LocationCounts, MovementCounts, UserCounts};

/// Case-insensitive substring match; `None` or empty needle matches.
fn matches_search(needle: Option<&str>, haystacks: &[&str]) -> bool {
    let Some(needle) = needle.filter(|n| !n.is_empty()) else {
        return true;
    };
    let needle = needle.to_lowercase();
    haystacks.iter().any(|h| h.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match self.category.as_deref().filter(|c| !c.is_empty()) {
            Some(wanted) => product.category() == Some(wanted),
            None => true,
        };
        let name = self.name.as_deref().map(str::trim);
        category_ok && matches_search(name, &[product.name.as_str()])
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationFilter {
    pub search: Option<String>,
    pub location_type: Option<LocationType>,
}

impl LocationFilter {
    pub fn matches(&self, location: &Location) -> bool {
        self.location_type.is_none_or(|t| t == location.location_type)
            && matches_search(
                self.search.as_deref(),
                &[location.name.as_str(), location.address.as_str()],
            )
    }

    pub fn apply<'a>(&self, locations: &'a [Location]) -> Vec<&'a Location> {
        locations.iter().filter(|l| self.matches(l)).collect()
    }

    pub fn counts(&self, locations: &[Location]) -> LocationCounts {
        location_counts(self.apply(locations))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransactionFilter {
    /// Matched against the product's name, the notes and the actor id.
    pub search: Option<String>,
    pub kind: Option<TransactionType>,
}

impl TransactionFilter {
    /// `product_name` is the name of the referenced product, when known.
    pub fn matches(&self, tx: &Transaction, product_name: Option<&str>) -> bool {
        self.kind.is_none_or(|k| k == tx.kind)
            && matches_search(
                self.search.as_deref(),
                &[
                    product_name.unwrap_or_default(),
                    tx.notes.as_deref().unwrap_or_default(),
                    tx.user_id.as_str(),
                ],
            )
    }

    pub fn apply<'a>(
        &self,
        transactions: &'a [Transaction],
        products: &[Product],
    ) -> Vec<&'a Transaction> {
        let names: HashMap<&ProductId, &str> =
            products.iter().map(|p| (&p.id, p.name.as_str())).collect();
        transactions
            .iter()
            .filter(|tx| self.matches(tx, names.get(&tx.product_id).copied()))
            .collect()
    }

    pub fn counts(&self, transactions: &[Transaction], products: &[Product]) -> MovementCounts {
        movement_counts(self.apply(transactions, products))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserFilter {
    pub search: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        self.role.is_none_or(|r| r == user.role)
            && self.status.is_none_or(|s| s == user.status)
            && matches_search(
                self.search.as_deref(),
                &[user.username.as_str(), user.email.as_str()],
            )
    }

    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|u| self.matches(u)).collect()
    }

    pub fn counts(&self, users: &[User]) -> UserCounts {
        user_counts(self.apply(users))
    }
}
