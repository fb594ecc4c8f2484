//! Purchase rules: the ticket cap and the unit price of each ticket type.
//!
//! Rules are built once when the service is created and never change per call.
use super::ticket::TicketType;
use std::collections::BTreeMap;
use std::env;

pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable(BTreeMap<TicketType, u64>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRules {
    pub max_tickets_per_purchase: u32,
    pub prices: PriceTable,
}

impl PriceTable {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }
    pub fn with_price(mut self, ticket_type: TicketType, unit_price: u64) -> Self {
        self.0.insert(ticket_type, unit_price);
        self
    }
    /// Types missing from the table are free.
    pub fn unit_price(&self, ticket_type: TicketType) -> u64 {
        self.0.get(&ticket_type).copied().unwrap_or(0)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::empty()
            .with_price(TicketType::Adult, 20)
            .with_price(TicketType::Child, 10)
            .with_price(TicketType::Infant, 0)
    }
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
            prices: PriceTable::default(),
        }
    }
}

impl PurchaseRules {
    /// Load rules from `TICKETS_*` environment variables, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let max_tickets_per_purchase = lookup("TICKETS_MAX_PER_PURCHASE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_tickets_per_purchase);

        let prices = TicketType::ALL
            .into_iter()
            .fold(PriceTable::empty(), |table, ticket_type| {
                let key = format!("TICKETS_PRICE_{}", ticket_type.as_str());
                let price = parse(&key).unwrap_or(defaults.prices.unit_price(ticket_type));
                table.with_price(ticket_type, price)
            });

        Self {
            max_tickets_per_purchase,
            prices,
        }
    }

    pub fn with_max_tickets(mut self, max: u32) -> Self {
        self.max_tickets_per_purchase = max;
        self
    }
    pub fn with_prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_prices() {
        let prices = PriceTable::default();
        assert_eq!(prices.unit_price(TicketType::Adult), 20);
        assert_eq!(prices.unit_price(TicketType::Child), 10);
        assert_eq!(prices.unit_price(TicketType::Infant), 0);
    }

    #[test]
    fn missing_price_is_zero() {
        let prices = PriceTable::empty().with_price(TicketType::Adult, 12);
        assert_eq!(prices.unit_price(TicketType::Child), 0);
    }

    #[test]
    fn lookup_overrides_and_falls_back() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("TICKETS_MAX_PER_PURCHASE", "8"),
            ("TICKETS_PRICE_CHILD", "7"),
            ("TICKETS_PRICE_ADULT", "not-a-number"),
        ]);
        let rules = PurchaseRules::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(rules.max_tickets_per_purchase, 8);
        assert_eq!(rules.prices.unit_price(TicketType::Child), 7);
        assert_eq!(rules.prices.unit_price(TicketType::Adult), 20);
        assert_eq!(rules.prices.unit_price(TicketType::Infant), 0);
    }

    #[test]
    fn empty_lookup_gives_defaults() {
        assert_eq!(PurchaseRules::from_lookup(|_| None), PurchaseRules::default());
    }
}
