//! Purchase error model.

use thiserror::Error;

/// Result type used across the purchase domain.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// A rejected purchase (or a rejected ticket request construction).
///
/// Every variant is fatal to the current call: the pipeline aborts before any
/// side effect, and no retry is meaningful since these are input-validation
/// failures, not transient faults. Callers match on the variant or on the
/// message text; the message strings are part of the contract and must not be
/// reworded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    /// The account id is not a native integer value (booleans, strings,
    /// floats, and coercible objects are all rejected without coercion).
    #[error("Account ID is not an integer")]
    NonIntegerAccountId,

    /// The account id is zero or negative.
    #[error("Account ID must be greater than zero")]
    NonPositiveAccountId,

    /// The purchase contained no ticket type requests at all.
    #[error("Must make at least one ticket type request")]
    EmptyPurchase,

    /// More than 20 tickets requested, either as request objects or as the
    /// summed quantity across all types.
    #[error("Only a maximum of 20 tickets can be purchased at a time")]
    TooManyTickets,

    /// An element of the request list is not a ticket type request.
    #[error("The ticket requests contain a non-request value")]
    NotATicketRequest,

    /// A request carries a zero or negative ticket count.
    #[error("A ticket request is requesting zero or less tickets")]
    NonPositiveTicketCount,

    /// Child or infant tickets requested without any adult ticket.
    #[error("Child and Infant tickets cannot be purchased without purchasing an Adult ticket")]
    UnaccompaniedMinors,

    /// A ticket type request was constructed with an unknown type literal.
    #[error("ticket type must be one of INFANT, CHILD or ADULT")]
    InvalidTicketType,

    /// A ticket type request was constructed with a non-integer count.
    #[error("number of tickets must be an integer")]
    NonIntegerTicketQuantity,
}
