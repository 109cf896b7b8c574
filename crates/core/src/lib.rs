//! `boxoffice-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{PurchaseError, PurchaseResult};
pub use id::AccountId;
pub use value_object::ValueObject;
