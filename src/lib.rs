//! Expenseur is a web app for tracking relocation expenses across multiple
//! currencies.
//!
//! This library provides a REST API that directly serves HTML pages: an
//! expense table with GBP-normalised totals, receipt preview and download,
//! and a form for adding new expenses with an uploaded receipt. The expense
//! list lives in memory for the lifetime of the process, there is no
//! database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod currency;
mod endpoints;
mod expense;
mod html;
mod not_found;
mod receipt;
mod routing;
mod timezone;

pub use app_state::AppState;
pub use expense::seed_expenses;
pub use routing::build_router;

use crate::html::error_view;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested expense could not be found.
    ///
    /// Receipt operations on a missing expense are silent no-ops for the
    /// client, so this redirects back to the expenses page.
    #[error("the requested expense could not be found")]
    NotFound,

    /// The expense exists but has no receipt attached.
    ///
    /// Treated the same as [Error::NotFound] by the client-facing routes.
    #[error("the expense has no receipt attached")]
    NoReceipt,

    /// The multipart form could not be parsed.
    #[error("could not parse multipart form: {0}")]
    MultipartError(String),

    /// A required add-expense form field was missing or empty.
    #[error("the form field \"{0}\" is missing or empty")]
    MissingField(&'static str),

    /// A form field value could not be parsed, e.g. a non-numeric amount.
    #[error("could not parse {1:?} as a value for \"{0}\"")]
    InvalidFieldValue(&'static str, String),

    /// A receipt asset file could not be read from disk.
    #[error("could not read receipt file \"{0}\"")]
    ReceiptUnavailable(String),

    /// Could not acquire the expense store lock.
    #[error("could not acquire the expense store lock")]
    StoreLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            // Missing records and missing receipts degrade to a no-op: the
            // client lands back on the expenses page with nothing shown.
            Error::NotFound | Error::NoReceipt => {
                Redirect::to(endpoints::EXPENSES_VIEW).into_response()
            }
            Error::MultipartError(_) | Error::MissingField(_) | Error::InvalidFieldValue(..) => {
                let details = self.to_string();

                (
                    StatusCode::BAD_REQUEST,
                    error_view(
                        "Invalid Expense",
                        "400",
                        "The expense could not be added.",
                        &details,
                    ),
                )
                    .into_response()
            }
            Error::ReceiptUnavailable(path) => (
                StatusCode::NOT_FOUND,
                error_view(
                    "Receipt Unavailable",
                    "404",
                    "Failed to load receipt",
                    &format!("The receipt file \"{path}\" could not be read."),
                ),
            )
                .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_view(
                        "Internal Server Error",
                        "500",
                        "Sorry, something went wrong.",
                        "Try again later or check the server logs",
                    ),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod error_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{Error, endpoints};

    #[test]
    fn missing_expense_redirects_to_expenses_view() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::EXPENSES_VIEW);
    }

    #[test]
    fn missing_receipt_redirects_to_expenses_view() {
        let response = Error::NoReceipt.into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[test]
    fn malformed_form_input_is_a_bad_request() {
        let response =
            Error::InvalidFieldValue("amount", "abc".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
