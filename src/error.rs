use crate::ticket::TicketType;

/// Reasons a purchase is refused before any payment or reservation is made.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPurchase {
    #[error("Invalid account id {0}. An account id must be greater than zero")]
    InvalidAccountId(i64),
    #[error("At least one ticket type request is required")]
    NoTicketRequests,
    #[error("Maximum {max} tickets can be purchased at a time")]
    TooManyTickets { max: u32 },
    #[error("Child or infant tickets cannot be purchased without an adult ticket")]
    NoAccompanyingAdult,
    #[error("Total price overflowed while pricing {0} tickets")]
    AmountOverflow(TicketType),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTicketError {
    #[error("Unknown ticket type '{0}'. Expected one of ADULT, CHILD, INFANT")]
    UnknownType(String),
    #[error("Ticket request '{0}' must look like TYPE=COUNT")]
    MissingCount(String),
    #[error("Ticket count '{0}' is not a non-negative integer")]
    InvalidCount(String),
}
