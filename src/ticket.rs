//! Core ticket and account types
use super::error::{InvalidPurchase, ParseTicketError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

// Validated purchasing account, always > 0
#[derive(Debug, Clone, Copy, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct AccountId(u64);

// One line item of a purchase. Immutable once built.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Infants sit on an adult's lap and take no seat.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }
    pub fn requires_adult(&self) -> bool {
        matches!(self, TicketType::Child | TicketType::Infant)
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = ParseTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTicketError::UnknownType(s.to_string()))
    }
}

impl AccountId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = InvalidPurchase;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw > 0 {
            Ok(AccountId(raw.unsigned_abs()))
        } else {
            Err(InvalidPurchase::InvalidAccountId(raw))
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, no_of_tickets: u32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }
    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }
    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

/// Parses the `TYPE=COUNT` form used on the command line, e.g. `ADULT=2`.
impl FromStr for TicketTypeRequest {
    type Err = ParseTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, count) = s
            .split_once('=')
            .ok_or_else(|| ParseTicketError::MissingCount(s.to_string()))?;

        let ticket_type = kind.parse()?;
        let no_of_tickets = count
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseTicketError::InvalidCount(count.to_string()))?;

        Ok(Self::new(ticket_type, no_of_tickets))
    }
}
