//! Interfaces to the payment gateway and seat booking system.
//!
//! Both are owned by other teams. A call either succeeds or returns an error the
//! caller cannot recover from; nothing is returned on success.
use super::ticket::AccountId;

pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()>;
}

pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32)
    -> anyhow::Result<()>;
}

/// Accepts every payment and logs it. Used by the command line driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentGateway;

/// Accepts every reservation and logs it. Used by the command line driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatBooking;

impl TicketPaymentService for LoggingPaymentGateway {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()> {
        tracing::info!(%account_id, amount = total_amount_to_pay, "payment taken");
        Ok(())
    }
}

impl SeatReservationService for LoggingSeatBooking {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> anyhow::Result<()> {
        tracing::info!(%account_id, seats = total_seats_to_allocate, "seats reserved");
        Ok(())
    }
}
