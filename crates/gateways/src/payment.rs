//! Payment provider adapter.

use boxoffice_core::AccountId;
use boxoffice_tickets::TicketPaymentService;

/// The external payment provider.
///
/// Captures the full amount unconditionally; there is no rollback, retry, or
/// partial-failure handling anywhere in this flow.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternalTicketPaymentService;

impl ExternalTicketPaymentService {
    pub fn new() -> Self {
        Self
    }
}

impl TicketPaymentService for ExternalTicketPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) {
        tracing::info!(
            account_id = %account_id,
            total_amount_to_pay,
            "payment captured"
        );
    }
}
