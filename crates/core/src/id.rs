//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PurchaseError, PurchaseResult};

/// Identifier of a purchasing account.
///
/// All accounts with an id greater than zero are valid; there is no account
/// lookup in this system. An `AccountId` that exists is always in range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Create an identifier from an already-typed integer.
    ///
    /// Fails when the id is zero or negative.
    pub fn new(id: i64) -> PurchaseResult<Self> {
        if id <= 0 {
            return Err(PurchaseError::NonPositiveAccountId);
        }
        Ok(Self(id))
    }

    /// Create an identifier from an untyped boundary value.
    ///
    /// The integer check is strict: only a native JSON integer passes.
    /// Booleans, strings, floats (fractional or not), arrays, objects, and
    /// null are rejected without any numeric coercion being invoked. Values
    /// above `i64::MAX` are not representable as a native signed integer and
    /// are likewise rejected. The range check runs only after the type check,
    /// so `-0` (an integer) is rejected as non-positive while `-0.0` (a
    /// float) is rejected as a non-integer.
    pub fn from_value(value: &Value) -> PurchaseResult<Self> {
        let id = value.as_i64().ok_or(PurchaseError::NonIntegerAccountId)?;
        Self::new(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn positive_ids_are_accepted() {
        for id in [1i64, 2, 3, 1 << 32, (1 << 53) - 1, i64::MAX] {
            let account = AccountId::new(id).unwrap();
            assert_eq!(account.get(), id);
        }
    }

    #[test]
    fn zero_and_negative_ids_are_rejected() {
        for id in [0i64, -1, i64::MIN] {
            let err = AccountId::new(id).unwrap_err();
            assert_eq!(err, PurchaseError::NonPositiveAccountId);
        }
    }

    #[test]
    fn non_integer_boundary_values_are_rejected_without_coercion() {
        let values = [
            Value::Null,
            json!(false),
            json!(true),
            json!(1.1),
            json!(1.0),
            json!(-0.0),
            json!("test"),
            json!("1"),
            json!([]),
            json!([1]),
            json!({}),
            json!({ "valueOf": 1 }),
            json!(u64::MAX),
        ];

        for value in values {
            let err = AccountId::from_value(&value).unwrap_err();
            assert_eq!(err, PurchaseError::NonIntegerAccountId, "value: {value}");
            assert_eq!(err.to_string(), "Account ID is not an integer");
        }
    }

    #[test]
    fn integer_boundary_values_pass_the_type_check() {
        assert_eq!(AccountId::from_value(&json!(1)).unwrap().get(), 1);
        assert_eq!(
            AccountId::from_value(&json!(4294967296i64)).unwrap().get(),
            1 << 32
        );

        // Negative zero parses as the integer 0 and falls to the range check.
        let err = AccountId::from_value(&json!(-0)).unwrap_err();
        assert_eq!(err, PurchaseError::NonPositiveAccountId);
        let err = AccountId::from_value(&json!(-1)).unwrap_err();
        assert_eq!(err.to_string(), "Account ID must be greater than zero");
    }
}
