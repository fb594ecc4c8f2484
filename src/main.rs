//! `cinema-tickets <ACCOUNT_ID> <TYPE=COUNT>...`
//!
//! Runs one purchase against the logging payment gateway and seat booking.
use anyhow::Context;
use cinema_tickets::{
    TicketService, TicketTypeRequest,
    config::PurchaseRules,
    observability,
    thirdparty::{LoggingPaymentGateway, LoggingSeatBooking},
};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    observability::init();

    let mut args = std::env::args().skip(1);
    let account_id: i64 = args
        .next()
        .context("usage: cinema-tickets <ACCOUNT_ID> <TYPE=COUNT>...")?
        .parse()
        .context("account id must be an integer")?;

    let requests = args
        .map(|arg| arg.parse::<TicketTypeRequest>())
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read ticket requests")?;

    let service = TicketService::with_rules(
        Arc::new(LoggingPaymentGateway),
        Arc::new(LoggingSeatBooking),
        PurchaseRules::from_env(),
    );

    service
        .purchase_tickets(account_id, &requests)
        .context("Purchase failed")?;

    Ok(())
}
