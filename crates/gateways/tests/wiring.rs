//! Production wiring smoke test: the real adapters behind the processor.
//!
//! The external providers have no locally observable state, so this only
//! asserts that a fully wired purchase is accepted and that the computed
//! totals are what the providers were handed (per the receipt).

use serde_json::json;

use boxoffice_gateways::{ExternalSeatReservationService, ExternalTicketPaymentService};
use boxoffice_tickets::TicketService;

#[test]
fn a_purchase_flows_through_the_real_adapters() {
    boxoffice_observability::init();

    let service = TicketService::new(
        ExternalTicketPaymentService::new(),
        ExternalSeatReservationService::new(),
    );

    let requests = [
        json!({ "ticket_type": "ADULT", "no_of_tickets": 1 }),
        json!({ "ticket_type": "INFANT", "no_of_tickets": 1 }),
    ];

    let receipt = service.purchase_tickets_raw(&json!(1), &requests).unwrap();
    assert_eq!(receipt.total_price, 20);
    assert_eq!(receipt.total_seats, 1);
}
