//! `invtrack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no transport).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::{Entity, id_set};
pub use error::{DomainError, DomainResult, ensure_not_blank};
pub use id::{LocationId, ProductId, TransactionId, UserId, optional_id};
pub use money::Money;
pub use value_object::ValueObject;
