//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{create_expense_endpoint, get_create_expense_page, get_expenses_page},
    not_found::get_404_not_found,
    receipt::{
        close_receipt_endpoint, download_current_receipt_endpoint, download_receipt_endpoint,
        get_receipt_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::NEW_EXPENSE_VIEW, get(get_create_expense_page))
        .route(endpoints::RECEIPT_VIEW, get(get_receipt_page))
        .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
        .route(endpoints::DOWNLOAD_RECEIPT, get(download_receipt_endpoint))
        .route(
            endpoints::DOWNLOAD_CURRENT_RECEIPT,
            get(download_current_receipt_endpoint),
        )
        .route(endpoints::CLOSE_RECEIPT, get(close_receipt_endpoint))
        .nest_service(endpoints::ASSETS, ServeDir::new("assets/"))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the expenses page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::EXPENSES_VIEW)
}
