//! Service layer API for ticket purchases
use super::config::PurchaseRules;
use super::error::InvalidPurchase;
use super::purchase::PurchaseSummary;
use super::thirdparty::{SeatReservationService, TicketPaymentService};
use super::ticket::{AccountId, TicketTypeRequest};
use std::sync::Arc;
use uuid7::uuid7;

pub struct TicketService {
    payment_service: Arc<dyn TicketPaymentService>,
    reservation_service: Arc<dyn SeatReservationService>,
    rules: PurchaseRules,
}

impl TicketService {
    /// Service with the standard rules: 20 tickets per purchase, adult 20, child 10, infant free.
    pub fn new(
        payment_service: Arc<dyn TicketPaymentService>,
        reservation_service: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self::with_rules(payment_service, reservation_service, PurchaseRules::default())
    }

    pub fn with_rules(
        payment_service: Arc<dyn TicketPaymentService>,
        reservation_service: Arc<dyn SeatReservationService>,
        rules: PurchaseRules,
    ) -> Self {
        Self {
            payment_service,
            reservation_service,
            rules,
        }
    }

    pub fn rules(&self) -> &PurchaseRules {
        &self.rules
    }

    /// Validate a purchase and work out what it would cost, without paying or reserving.
    pub fn quote(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, InvalidPurchase> {
        self.validate(account_id, requests)
            .map(|(_, summary)| summary)
    }

    /// Validate a purchase, then take payment and reserve seats.
    ///
    /// Nothing is sent to either collaborator unless every rule passes. Errors
    /// from the payment gateway or seat booking are returned as they are; if
    /// payment fails no seats are reserved.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> anyhow::Result<()> {
        let span = tracing::info_span!("purchase", purchase_id = %uuid7(), account_id);
        let _entered = span.enter();

        let (account, summary) = match self.validate(account_id, requests) {
            Ok(valid) => valid,
            Err(reason) => {
                tracing::warn!(%reason, "purchase rejected");
                return Err(reason.into());
            }
        };

        self.payment_service
            .make_payment(account, summary.total_price)?;
        self.reservation_service
            .reserve_seat(account, summary.total_seats)?;

        tracing::info!(
            total_price = summary.total_price,
            total_seats = summary.total_seats,
            total_tickets = summary.total_tickets,
            "purchase completed"
        );

        Ok(())
    }

    fn validate(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<(AccountId, PurchaseSummary), InvalidPurchase> {
        let account = AccountId::try_from(account_id)?;
        let summary = PurchaseSummary::tally(requests, &self.rules)?;
        Ok((account, summary))
    }
}
