pub mod config;
pub mod error;
pub mod observability;
pub mod purchase;
pub mod service;
pub mod thirdparty;
pub mod ticket;

pub use error::InvalidPurchase;
pub use service::TicketService;
pub use ticket::{AccountId, TicketType, TicketTypeRequest};
