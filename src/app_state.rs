//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::expense::{ExpenseBuilder, ExpenseId, ExpenseStore};

/// The state of the server.
///
/// The expense store and the receipt-preview state are owned here and shared
/// by reference with the route handlers, there are no module-level
/// singletons.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory store holding every expense record.
    pub expense_store: Arc<Mutex<ExpenseStore>>,

    /// The receipt currently open in the preview, if any.
    ///
    /// `None` means the preview is closed. The app is single-user, so one
    /// slot of session state is enough.
    pub viewing_receipt: Arc<Mutex<Option<ExpenseId>>>,

    /// The local timezone as a canonical timezone name, e.g. "Europe/London".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] pre-loaded with `expenses`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Europe/London". It controls the default date in the add-expense form.
    pub fn new(expenses: Vec<ExpenseBuilder>, local_timezone: &str) -> Self {
        Self {
            expense_store: Arc::new(Mutex::new(ExpenseStore::with_expenses(expenses))),
            viewing_receipt: Arc::new(Mutex::new(None)),
            local_timezone: local_timezone.to_owned(),
        }
    }
}
