//! Defines the endpoints for downloading receipts.
//!
//! There are two download routes with deliberately different save-as naming:
//! the per-row link keeps the receipt's real file extension, while the
//! preview's download button names the file after the preview mode.

use axum::{
    extract::{Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::{
    Error,
    expense::ExpenseId,
    receipt::{
        models::{Receipt, direct_download_filename, preview_download_filename},
        view_endpoint::ReceiptState,
    },
};

/// A route handler for the per-row download link.
///
/// The save-as filename is the underscored description plus the receipt's
/// real file extension.
pub async fn download_receipt_endpoint(
    State(state): State<ReceiptState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Response, Error> {
    let (receipt, filename) = {
        let store = state.expense_store.lock().map_err(|error| {
            tracing::error!("could not acquire expense store lock: {error}");
            Error::StoreLockError
        })?;

        let expense = store.get(expense_id)?;
        let receipt = expense.receipt.clone().ok_or(Error::NoReceipt)?;
        let filename = direct_download_filename(&expense.description, &receipt);

        (receipt, filename)
    };

    serve_attachment(receipt, &filename).await
}

/// A route handler for the preview's download button.
///
/// This only works while a receipt is open in the preview. The save-as
/// extension is fixed by the preview mode, and a blank description falls back
/// to a timestamped name.
pub async fn download_current_receipt_endpoint(
    State(state): State<ReceiptState>,
) -> Result<Response, Error> {
    let expense_id = state.currently_viewing()?.ok_or(Error::NotFound)?;

    let (receipt, filename) = {
        let store = state.expense_store.lock().map_err(|error| {
            tracing::error!("could not acquire expense store lock: {error}");
            Error::StoreLockError
        })?;

        let expense = store.get(expense_id)?;
        let receipt = expense.receipt.clone().ok_or(Error::NoReceipt)?;
        let filename = preview_download_filename(
            &expense.description,
            receipt.preview_mode(),
            OffsetDateTime::now_utc().unix_timestamp(),
        );

        (receipt, filename)
    };

    serve_attachment(receipt, &filename).await
}

/// Serve the receipt body with attachment headers so the browser saves it
/// under `filename` instead of navigating to it.
async fn serve_attachment(receipt: Receipt, filename: &str) -> Result<Response, Error> {
    let content_type = receipt.content_type();

    let body = match receipt {
        Receipt::Upload { bytes, .. } => bytes,
        Receipt::Path(path) => tokio::fs::read(&path).await.map_err(|error| {
            tracing::error!("could not read receipt file {path}: {error}");
            Error::ReceiptUnavailable(path)
        })?,
    };

    Ok((
        [
            (CONTENT_TYPE, content_type),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response())
}
