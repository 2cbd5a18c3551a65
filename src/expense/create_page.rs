//! Defines the page with the add-expense form.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, endpoints,
    expense::form::{ExpenseFormDefaults, expense_form_fields},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, LINK_STYLE, base},
    timezone::today_local,
};

/// The state needed for the add-expense page.
#[derive(Debug, Clone)]
pub struct NewExpensePageState {
    /// The local timezone as a canonical timezone name, e.g. "Europe/London".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for displaying the add-expense form.
///
/// The date field defaults to today in the configured timezone.
pub async fn get_create_expense_page(State(state): State<NewExpensePageState>) -> Response {
    let today = today_local(&state.local_timezone);
    let fields = expense_form_fields(&ExpenseFormDefaults {
        date: today,
        max_date: today,
    });

    let content = html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            div class="w-full bg-white rounded-lg shadow dark:border md:mt-0 sm:max-w-md xl:p-0 dark:bg-gray-800 dark:border-gray-700"
            {
                div class="p-6 space-y-4 md:space-y-6 sm:p-8"
                {
                    h1 class="text-xl font-bold leading-tight tracking-tight text-gray-900 md:text-2xl dark:text-white"
                    {
                        "Add Expense"
                    }

                    form
                        action=(endpoints::EXPENSES_API)
                        method="post"
                        enctype="multipart/form-data"
                        class="space-y-4 md:space-y-6"
                    {
                        (fields)

                        button type="submit" class=(BUTTON_PRIMARY_STYLE)
                        {
                            "Add Expense"
                        }

                        p class="text-center"
                        {
                            a href=(endpoints::EXPENSES_VIEW) class=(LINK_STYLE) { "Cancel" }
                        }
                    }
                }
            }
        }
    };

    base("Add Expense", &content).into_response()
}
