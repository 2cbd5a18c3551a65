//! Expense management for the expense tracker.
//!
//! This module contains everything related to expense records:
//! - The `Expense` model and `ExpenseBuilder` for creating expenses
//! - The in-memory `ExpenseStore` and the seed data set
//! - View handlers for the expense table and the add-expense form

mod create_endpoint;
mod create_page;
mod expenses_page;
mod form;
mod models;
mod seed;
mod store;
mod view;

pub use create_endpoint::create_expense_endpoint;
pub use create_page::get_create_expense_page;
pub use expenses_page::get_expenses_page;
pub use models::{Expense, ExpenseBuilder, ExpenseId};
pub use seed::seed_expenses;
pub use store::ExpenseStore;
