//! Third-party collaborator adapters (payment capture, seat reservation).
//!
//! Both providers are external black boxes that are assumed to always succeed
//! once invoked; the adapters expose no failure path and consume no return
//! value. Their only locally observable effect is a structured log event.

pub mod payment;
pub mod seating;

pub use payment::ExternalTicketPaymentService;
pub use seating::ExternalSeatReservationService;
