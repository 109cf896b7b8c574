//! Ticket purchasing domain module.
//!
//! This crate contains the business rules for venue ticket purchases,
//! implemented as deterministic domain logic (no IO, no HTTP, no storage).
//! The only side effects are the two injected collaborator calls made after
//! every validation rule has passed.

pub mod request;
pub mod service;

pub use request::{TicketType, TicketTypeRequest};
pub use service::{
    MAX_TICKETS_PER_PURCHASE, PurchaseReceipt, SeatReservationService, TicketPaymentService,
    TicketService, TicketTotals,
};
