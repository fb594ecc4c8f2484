//! Recording fakes for the payment gateway and seat booking.
#![allow(dead_code)]

use cinema_tickets::{
    TicketService,
    thirdparty::{SeatReservationService, TicketPaymentService},
    ticket::AccountId,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Payment(u64, u64),
    Reservation(u64, u32),
}

/// Both fakes write into one log so the call order can be checked.
#[derive(Default)]
pub struct Recorder {
    calls: Mutex<Vec<Call>>,
    fail_payment: bool,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
    pub fn failing_payment() -> Arc<Self> {
        Arc::new(Self {
            fail_payment: true,
            ..Self::default()
        })
    }
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl TicketPaymentService for Recorder {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()> {
        if self.fail_payment {
            anyhow::bail!("card declined");
        }
        self.calls
            .lock()
            .unwrap()
            .push(Call::Payment(account_id.get(), total_amount_to_pay));
        Ok(())
    }
}

impl SeatReservationService for Recorder {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> anyhow::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Reservation(account_id.get(), total_seats_to_allocate));
        Ok(())
    }
}

pub fn service_with(recorder: &Arc<Recorder>) -> TicketService {
    TicketService::new(recorder.clone(), recorder.clone())
}
