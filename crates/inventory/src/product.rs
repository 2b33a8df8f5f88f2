use serde::{Deserialize, Serialize};

use invtrack_core::{
    DomainError, DomainResult, Entity, LocationId, Money, ProductId, ensure_not_blank,
};

/// Reorder threshold used when a product has none configured.
pub const DEFAULT_THRESHOLD: u32 = 10;

/// Quantity at or below which a low-stock product is treated as critical.
pub const CRITICAL_QUANTITY: u32 = 5;

/// How urgently a low-stock product needs restocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockUrgency {
    OutOfStock,
    Critical,
    Low,
}

/// Product record as served by the inventory API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Money,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Reorder threshold. `None` and `Some(0)` both mean "not configured".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    #[serde(
        default,
        deserialize_with = "invtrack_core::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub location_id: Option<LocationId>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        sku: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sku: sku.into(),
            description: None,
            price,
            quantity,
            category: None,
            threshold: None,
            location_id: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_location(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
        self
    }

    /// Category name, if set and non-empty.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Threshold in effect: the configured one, or `default` when unset or zero.
    ///
    /// The backend stores an unset threshold as `0`, so zero falls back too.
    pub fn effective_threshold(&self, default: u32) -> u32 {
        match self.threshold {
            Some(t) if t > 0 => t,
            _ => default,
        }
    }

    pub fn is_low_stock(&self, default_threshold: u32) -> bool {
        self.quantity <= self.effective_threshold(default_threshold)
    }

    /// `price * quantity`.
    pub fn stock_value(&self) -> Money {
        self.price.times(self.quantity)
    }

    pub fn urgency(&self) -> StockUrgency {
        match self.quantity {
            0 => StockUrgency::OutOfStock,
            q if q <= CRITICAL_QUANTITY => StockUrgency::Critical,
            _ => StockUrgency::Low,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_not_blank("product name", &self.name)?;
        ensure_not_blank("product sku", &self.sku)?;
        if self.price.is_negative() {
            return Err(DomainError::invariant("product price cannot be negative"));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
