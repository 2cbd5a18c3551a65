//! The in-memory, insertion-ordered expense store.

use crate::{
    Error,
    expense::models::{Expense, ExpenseBuilder, ExpenseId},
};

/// Owns every expense record for the lifetime of the process.
///
/// Records are kept in insertion order, which is what gives table rows their
/// stable 1-based numbering. IDs come from a counter owned by the store
/// rather than the current record count, so a future delete operation cannot
/// mint duplicate IDs.
#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-loaded with `builders`, in order.
    pub fn with_expenses(builders: Vec<ExpenseBuilder>) -> Self {
        let mut store = Self::new();

        for builder in builders {
            store.create(builder);
        }

        store
    }

    /// All expenses in insertion order.
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Look up an expense by its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no expense has `id`.
    pub fn get(&self, id: ExpenseId) -> Result<&Expense, Error> {
        self.expenses
            .iter()
            .find(|expense| expense.id == id)
            .ok_or(Error::NotFound)
    }

    /// Assign the next ID to `builder`, append the record and return it.
    pub fn create(&mut self, builder: ExpenseBuilder) -> &Expense {
        let expense = builder.finalize(self.next_id);
        self.next_id += 1;
        self.expenses.push(expense);

        self.expenses
            .last()
            .expect("store cannot be empty after a push")
    }
}
