//! Defines the core data model for expenses.

use time::Date;

use crate::{currency::Currency, receipt::Receipt};

/// The integer ID assigned to an expense by the store.
pub type ExpenseId = i64;

/// A single expense record.
///
/// Records are created by the add-expense form (or the seed data at startup)
/// and are never mutated or deleted afterwards. `amount` is always
/// denominated in `currency`, conversion to GBP happens at render time only.
///
/// To create a new `Expense`, use [Expense::build].
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense, unique within the store.
    pub id: ExpenseId,
    /// A text description of what the expense was for.
    pub description: String,
    /// The non-negative amount of money spent, in units of `currency`.
    pub amount: f64,
    /// The currency the amount is denominated in.
    pub currency: Currency,
    /// When the expense was paid.
    pub date: Date,
    /// The attached receipt, if there is one.
    pub receipt: Option<Receipt>,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(description: &str, amount: f64, currency: Currency, date: Date) -> ExpenseBuilder {
        ExpenseBuilder {
            description: description.to_owned(),
            amount,
            currency,
            date,
            receipt: None,
        }
    }
}

/// A builder for creating [Expense] instances.
///
/// The store assigns the ID when the builder is inserted, see
/// [crate::expense::store::ExpenseStore::create].
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBuilder {
    /// A text description of what the expense was for.
    pub description: String,
    /// The non-negative amount of money spent.
    pub amount: f64,
    /// The currency the amount is denominated in.
    pub currency: Currency,
    /// When the expense was paid.
    pub date: Date,
    /// The attached receipt, if there is one.
    pub receipt: Option<Receipt>,
}

impl ExpenseBuilder {
    /// Attach a receipt to the expense.
    pub fn receipt(mut self, receipt: Option<Receipt>) -> Self {
        self.receipt = receipt;
        self
    }

    /// Assign `id` and produce the finished [Expense].
    pub(crate) fn finalize(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            description: self.description,
            amount: self.amount,
            currency: self.currency,
            date: self.date,
            receipt: self.receipt,
        }
    }
}
