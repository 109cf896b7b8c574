use serde::Serialize;
use serde_json::Value;

use boxoffice_core::{AccountId, PurchaseError, PurchaseResult};

use crate::request::{TicketType, TicketTypeRequest};

/// Upper bound on tickets per purchase, counted across all types.
pub const MAX_TICKETS_PER_PURCHASE: u64 = 20;

/// Outbound payment capability.
///
/// Single narrow method; the provider is infallible by contract, so no return
/// value is consumed and no rollback path exists.
pub trait TicketPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64);
}

/// Outbound seat reservation capability.
///
/// Invoked once per successful purchase, strictly after payment.
pub trait SeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64);
}

/// Per-type ticket counts accumulated over one purchase call.
///
/// Lives only for the duration of a single `purchase_tickets` invocation;
/// never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketTotals {
    infant: u64,
    child: u64,
    adult: u64,
}

impl TicketTotals {
    // Saturating: absurdly large counts must trip the ceiling check, not wrap.
    fn add(&mut self, ticket_type: TicketType, no_of_tickets: u64) {
        let slot = match ticket_type {
            TicketType::Infant => &mut self.infant,
            TicketType::Child => &mut self.child,
            TicketType::Adult => &mut self.adult,
        };
        *slot = slot.saturating_add(no_of_tickets);
    }

    pub fn of(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Infant => self.infant,
            TicketType::Child => self.child,
            TicketType::Adult => self.adult,
        }
    }

    pub fn total_tickets(&self) -> u64 {
        self.infant
            .saturating_add(self.child)
            .saturating_add(self.adult)
    }

    /// Total price in whole pounds.
    pub fn total_price(&self) -> u64 {
        TicketType::ALL
            .iter()
            .map(|ticket_type| ticket_type.price() * self.of(*ticket_type))
            .sum()
    }

    /// Total seats to allocate. Infants never occupy a seat.
    pub fn total_seats(&self) -> u64 {
        TicketType::ALL
            .iter()
            .map(|ticket_type| ticket_type.seats_per_ticket() * self.of(*ticket_type))
            .sum()
    }
}

/// Outcome of a successful purchase.
///
/// Success is equally observable as the absence of an error; callers that only
/// care about acceptance may discard this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    pub account_id: AccountId,
    pub totals: TicketTotals,
    /// Amount handed to the payment provider, in whole pounds.
    pub total_price: u64,
    /// Seat count handed to the reservation provider.
    pub total_seats: u64,
}

/// The purchase processor: validates a purchase against every business rule,
/// derives price and seat totals, and forwards them to the two collaborators.
///
/// Validation is pure; neither collaborator is invoked until every rule has
/// passed, so a rejected call has no partial effects and rejecting the same
/// input twice yields the same error twice.
#[derive(Debug)]
pub struct TicketService<P, S> {
    payments: P,
    seating: S,
}

impl<P, S> TicketService<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    pub fn new(payments: P, seating: S) -> Self {
        Self { payments, seating }
    }

    /// Process a purchase of already-typed ticket requests.
    ///
    /// The account id checks of the full pipeline live in [`AccountId`]
    /// construction; everything from the non-empty check onward runs here, in
    /// order, first failure wins:
    ///
    /// 1. at least one request;
    /// 2. no more than 20 request objects (length pre-check; a valid list
    ///    never needs more, since each request carries at least one ticket);
    /// 3. per request, in list order: a positive ticket count, then
    ///    accumulation into per-type totals;
    /// 4. no more than 20 tickets summed across all types;
    /// 5. child and infant tickets only alongside at least one adult ticket.
    pub fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseReceipt> {
        if requests.is_empty() {
            return Err(PurchaseError::EmptyPurchase);
        }

        if requests.len() as u64 > MAX_TICKETS_PER_PURCHASE {
            return Err(PurchaseError::TooManyTickets);
        }

        let mut totals = TicketTotals::default();
        for request in requests {
            let no_of_tickets = request.no_of_tickets();
            // Positivity is deferred from request construction to this point.
            if no_of_tickets <= 0 {
                return Err(PurchaseError::NonPositiveTicketCount);
            }
            totals.add(request.ticket_type(), no_of_tickets as u64);
        }

        if totals.total_tickets() > MAX_TICKETS_PER_PURCHASE {
            return Err(PurchaseError::TooManyTickets);
        }

        if totals.of(TicketType::Adult) == 0
            && (totals.of(TicketType::Infant) > 0 || totals.of(TicketType::Child) > 0)
        {
            return Err(PurchaseError::UnaccompaniedMinors);
        }

        let total_price = totals.total_price();
        let total_seats = totals.total_seats();

        // Payment must be captured before any seat is reserved; these two
        // calls must never be reordered.
        self.payments.make_payment(account_id, total_price);
        self.seating.reserve_seat(account_id, total_seats);

        Ok(PurchaseReceipt {
            account_id,
            totals,
            total_price,
            total_seats,
        })
    }

    /// Process a purchase arriving as untyped boundary values.
    ///
    /// Runs the full pipeline in its observable order: strict account id type
    /// check, account id range check, non-empty check, length pre-check, then
    /// per element (in list order) the non-request check followed by the
    /// positive-count check, before delegating to [`Self::purchase_tickets`]
    /// for the aggregate rules, the computation, and the collaborator calls.
    pub fn purchase_tickets_raw(
        &self,
        account_id: &Value,
        requests: &[Value],
    ) -> PurchaseResult<PurchaseReceipt> {
        let account_id = AccountId::from_value(account_id)?;

        if requests.is_empty() {
            return Err(PurchaseError::EmptyPurchase);
        }

        if requests.len() as u64 > MAX_TICKETS_PER_PURCHASE {
            return Err(PurchaseError::TooManyTickets);
        }

        let mut typed = Vec::with_capacity(requests.len());
        for value in requests {
            let request = TicketTypeRequest::from_value(value)?;
            if request.no_of_tickets() <= 0 {
                return Err(PurchaseError::NonPositiveTicketCount);
            }
            typed.push(request);
        }

        self.purchase_tickets(account_id, &typed)
    }
}
