//! The fixed set of supported currencies and conversion to the GBP
//! reference currency.

use std::fmt::Display;

/// A currency an expense can be denominated in.
///
/// The set is closed and the exchange rates are a fixed snapshot, the app
/// does not fetch live rates. Form input is parsed with [Currency::parse].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Sri Lankan rupee.
    Lkr,
    /// United States dollar.
    Usd,
    /// Pound sterling, the reference currency.
    Gbp,
}

impl Currency {
    /// Every supported currency, in the order shown in the add-expense form.
    pub const ALL: [Currency; 3] = [Currency::Lkr, Currency::Usd, Currency::Gbp];

    /// The ISO 4217 code, e.g. "LKR".
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Lkr => "LKR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }

    /// The display symbol prefixed to formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Lkr => "Rs ",
            Currency::Usd => "$",
            Currency::Gbp => "£",
        }
    }

    /// How many GBP one unit of this currency is worth.
    pub fn rate_to_gbp(&self) -> f64 {
        match self {
            Currency::Lkr => 0.0025,
            Currency::Usd => 0.76,
            Currency::Gbp => 1.0,
        }
    }

    /// Parse an ISO 4217 code, e.g. "USD".
    pub fn parse(code: &str) -> Option<Currency> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Convert `amount` in `currency` to its GBP equivalent.
pub fn convert_to_gbp(amount: f64, currency: Currency) -> f64 {
    amount * currency.rate_to_gbp()
}

/// Sum a collection of amounts by converting each to GBP first.
pub fn gbp_total(amounts: impl IntoIterator<Item = (f64, Currency)>) -> f64 {
    amounts
        .into_iter()
        .map(|(amount, currency)| convert_to_gbp(amount, currency))
        .sum()
}

/// Convert a GBP amount into `currency` by inverting the exchange rate.
pub fn from_gbp(gbp_amount: f64, currency: Currency) -> f64 {
    gbp_amount / currency.rate_to_gbp()
}
