use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use invtrack_core::{DomainError, DomainResult, Entity, ProductId, TransactionId, UserId};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    In,
    Out,
}

impl TransactionType {
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::In => "Stock In",
            TransactionType::Out => "Stock Out",
        }
    }
}

/// Who recorded a transaction.
///
/// The API uses the literal user id `"system"` for automated movements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Actor {
    System,
    User(UserId),
}

impl Actor {
    pub const SYSTEM: &'static str = "system";

    pub fn as_str(&self) -> &str {
        match self {
            Actor::System => Self::SYSTEM,
            Actor::User(id) => id.as_str(),
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Actor::System => None,
            Actor::User(id) => Some(id),
        }
    }
}

impl TryFrom<String> for Actor {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == Self::SYSTEM {
            return Ok(Actor::System);
        }
        UserId::try_from(value).map(Actor::User)
    }
}

impl From<Actor> for String {
    fn from(value: Actor) -> Self {
        match value {
            Actor::System => Actor::SYSTEM.to_string(),
            Actor::User(id) => id.into(),
        }
    }
}

impl core::fmt::Display for Actor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock movement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub product_id: ProductId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub quantity: u32,
    pub user_id: Actor,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        product_id: ProductId,
        kind: TransactionType,
        quantity: u32,
        user_id: Actor,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            kind,
            quantity,
            user_id,
            timestamp,
            notes: None,
            reason: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity == 0 {
            return Err(DomainError::invariant("transaction quantity must be positive"));
        }
        Ok(())
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
