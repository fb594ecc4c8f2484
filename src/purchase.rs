//! Single-pass tally of a purchase: totals, seat count and the rule checks.
use super::config::PurchaseRules;
use super::error::InvalidPurchase;
use super::ticket::{TicketType, TicketTypeRequest};

/// Outcome of validating a purchase. Derived per call, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurchaseSummary {
    pub total_price: u64,
    pub total_seats: u32,
    pub total_tickets: u32, // includes infants, used for the cap
    pub has_adult: bool,
    pub has_child_or_infant: bool,
}

impl PurchaseSummary {
    /// Walks the requests in order, rejecting as soon as a rule is broken.
    ///
    /// The cap is checked against the running raw ticket count before each
    /// line is priced, so a purchase is refused at the first line that pushes
    /// the total past `max_tickets_per_purchase`.
    pub fn tally(
        requests: &[TicketTypeRequest],
        rules: &PurchaseRules,
    ) -> Result<Self, InvalidPurchase> {
        if requests.is_empty() {
            return Err(InvalidPurchase::NoTicketRequests);
        }

        let mut summary = Self::default();
        for request in requests {
            summary.add(request, rules)?;
        }

        if summary.has_child_or_infant && !summary.has_adult {
            return Err(InvalidPurchase::NoAccompanyingAdult);
        }

        Ok(summary)
    }

    fn add(
        &mut self,
        request: &TicketTypeRequest,
        rules: &PurchaseRules,
    ) -> Result<(), InvalidPurchase> {
        let count = request.no_of_tickets();
        let ticket_type = request.ticket_type();
        let max = rules.max_tickets_per_purchase;

        let total_tickets = self
            .total_tickets
            .checked_add(count)
            .filter(|total| *total <= max)
            .ok_or(InvalidPurchase::TooManyTickets { max })?;

        self.total_price = rules
            .prices
            .unit_price(ticket_type)
            .checked_mul(u64::from(count))
            .and_then(|line| self.total_price.checked_add(line))
            .ok_or(InvalidPurchase::AmountOverflow(ticket_type))?;

        match ticket_type {
            TicketType::Adult => self.has_adult = true,
            TicketType::Child | TicketType::Infant => self.has_child_or_infant = true,
        }
        if ticket_type.occupies_seat() {
            self.total_seats += count;
        }
        self.total_tickets = total_tickets;

        tracing::debug!(
            ticket_type = %ticket_type,
            count,
            running_tickets = self.total_tickets,
            running_price = self.total_price,
            "ticket request tallied"
        );

        Ok(())
    }
}
