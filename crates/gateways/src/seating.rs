//! Seat reservation provider adapter.

use boxoffice_core::AccountId;
use boxoffice_tickets::SeatReservationService;

/// The external seat reservation provider.
///
/// Allocates the requested number of seats unconditionally. Always invoked
/// after payment has been captured, never before.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternalSeatReservationService;

impl ExternalSeatReservationService {
    pub fn new() -> Self {
        Self
    }
}

impl SeatReservationService for ExternalSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) {
        tracing::info!(
            account_id = %account_id,
            total_seats_to_allocate,
            "seats reserved"
        );
    }
}
