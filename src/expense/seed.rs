//! The expense records pre-loaded at startup.

use time::macros::date;

use crate::{
    currency::Currency,
    expense::models::{Expense, ExpenseBuilder},
    receipt::Receipt,
};

/// The seed records shown before any expense has been added, with receipts
/// served from the assets directory.
pub fn seed_expenses() -> Vec<ExpenseBuilder> {
    vec![
        Expense::build(
            "Travel Insurance Fee (1 Year)",
            171.55,
            Currency::Usd,
            date!(2025 - 09 - 29),
        )
        .receipt(Some(Receipt::Path("assets/Travel_insurance.pdf".to_owned()))),
        Expense::build(
            "TB Test (Medical) Fee for UK Visa Application",
            18130.0,
            Currency::Lkr,
            date!(2025 - 10 - 15),
        )
        .receipt(Some(Receipt::Path("assets/TB_Test.pdf".to_owned()))),
        Expense::build(
            "Immigration Health Surcharge (IHS) Payment",
            1035.0,
            Currency::Gbp,
            date!(2025 - 10 - 17),
        )
        .receipt(Some(Receipt::Path("assets/IHS_Payment.pdf".to_owned()))),
        Expense::build("Visa Payment", 443.0, Currency::Usd, date!(2025 - 10 - 17))
            .receipt(Some(Receipt::Path("assets/Visa_Payment.pdf".to_owned()))),
        Expense::build(
            "Flight Ticket to UK",
            112814.0,
            Currency::Lkr,
            date!(2025 - 10 - 27),
        )
        .receipt(Some(Receipt::Path("assets/Flight_Ticket.pdf".to_owned()))),
    ]
}
