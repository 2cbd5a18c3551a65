//! Defines the endpoint for closing the receipt preview.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::{Error, endpoints, receipt::view_endpoint::ReceiptState};

/// A route handler that closes the receipt preview and returns to the
/// expenses page.
///
/// Closing clears the viewing state, so a later download-current request is
/// a no-op until another receipt is opened.
pub async fn close_receipt_endpoint(State(state): State<ReceiptState>) -> Result<Response, Error> {
    state.set_viewing(None)?;

    Ok(Redirect::to(endpoints::EXPENSES_VIEW).into_response())
}
