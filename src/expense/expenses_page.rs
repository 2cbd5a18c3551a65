//! Defines the route handler for the expenses page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    expense::{
        store::ExpenseStore,
        view::{ExpenseTableRow, TotalsSummary, expenses_view},
    },
};

/// The state needed to display the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// The in-memory store holding every expense record.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// A route handler for displaying the expense table and the dual-currency
/// totals.
///
/// The whole page is produced from the current store state on every request,
/// so a reload always reflects the latest append.
pub async fn get_expenses_page(
    State(state): State<ExpensesPageState>,
) -> Result<Response, Error> {
    let store = state.expense_store.lock().map_err(|error| {
        tracing::error!("could not acquire expense store lock: {error}");
        Error::StoreLockError
    })?;

    let rows: Vec<_> = store
        .all()
        .iter()
        .enumerate()
        .map(|(index, expense)| ExpenseTableRow::new_from_expense(index + 1, expense))
        .collect();
    let totals = TotalsSummary::new_from_expenses(store.all());

    Ok(expenses_view(&rows, &totals).into_response())
}

#[cfg(test)]
mod expenses_page_tests {
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{AppState, build_router, endpoints, expense::seed::seed_expenses};

    fn get_test_server(state: AppState) -> TestServer {
        let app = build_router(state);

        TestServer::new(app)
    }

    #[tokio::test]
    async fn renders_one_row_per_expense_in_order() {
        let server = get_test_server(AppState::new(seed_expenses(), "Etc/UTC"));

        let response = server.get(endpoints::EXPENSES_VIEW).await;
        response.assert_status_ok();

        let document = Html::parse_document(&response.text());
        let row_selector = Selector::parse("tr[data-expense-row=true]").unwrap();
        let rows: Vec<_> = document.select(&row_selector).collect();

        assert_eq!(rows.len(), 5, "want one table row per seed expense");

        let first_row_text = rows[0].text().collect::<String>();
        assert!(
            first_row_text.contains("Travel Insurance Fee (1 Year)"),
            "first row should be the earliest inserted expense, got: {first_row_text}"
        );
    }

    #[tokio::test]
    async fn renders_converted_amounts() {
        let server = get_test_server(AppState::new(seed_expenses(), "Etc/UTC"));

        let response = server.get(endpoints::EXPENSES_VIEW).await;
        response.assert_status_ok();

        let document = Html::parse_document(&response.text());
        let converted_selector = Selector::parse("td[data-gbp-amount=true]").unwrap();
        let converted: Vec<String> = document
            .select(&converted_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect();

        assert_eq!(
            converted,
            vec!["£130.38", "£45.33", "£1,035.00", "£336.68", "£282.04"]
        );
    }

    #[tokio::test]
    async fn renders_dual_currency_totals() {
        let server = get_test_server(AppState::new(seed_expenses(), "Etc/UTC"));

        let response = server.get(endpoints::EXPENSES_VIEW).await;
        response.assert_status_ok();

        let document = Html::parse_document(&response.text());

        let gbp_selector = Selector::parse("#total-gbp").unwrap();
        let gbp_total = document
            .select(&gbp_selector)
            .next()
            .expect("page should have a GBP total slot")
            .text()
            .collect::<String>();
        assert_eq!(gbp_total.trim(), "£1,829.42");

        let lkr_selector = Selector::parse("#total-lkr").unwrap();
        let lkr_total = document
            .select(&lkr_selector)
            .next()
            .expect("page should have an LKR total slot")
            .text()
            .collect::<String>();
        assert_eq!(lkr_total.trim(), "Rs 731,767.20");
    }

    #[tokio::test]
    async fn empty_store_shows_empty_state() {
        let server = get_test_server(AppState::new(Vec::new(), "Etc/UTC"));

        let response = server.get(endpoints::EXPENSES_VIEW).await;
        response.assert_status_ok();

        let document = Html::parse_document(&response.text());
        let empty_selector = Selector::parse("td[data-empty-state=true]").unwrap();

        assert!(
            document.select(&empty_selector).next().is_some(),
            "want an empty state row when there are no expenses"
        );
    }

    #[tokio::test]
    async fn expense_without_receipt_shows_placeholder() {
        let state = AppState::new(Vec::new(), "Etc/UTC");
        {
            let mut store = state.expense_store.lock().unwrap();
            store.create(crate::expense::models::Expense::build(
                "Taxi",
                12.0,
                crate::currency::Currency::Gbp,
                time::macros::date!(2025 - 10 - 01),
            ));
        }
        let server = get_test_server(state);

        let response = server.get(endpoints::EXPENSES_VIEW).await;
        response.assert_status_ok();

        let text = response.text();
        assert!(
            text.contains("No receipt"),
            "want a placeholder for receipt-less expenses"
        );
    }
}
