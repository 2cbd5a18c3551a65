//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/expenses/{expense_id}/receipt',
//! use [format_endpoint].

/// The root route which redirects to the expenses page.
pub const ROOT: &str = "/";
/// The page for displaying the expense table and the dual-currency totals.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The page for creating a new expense.
pub const NEW_EXPENSE_VIEW: &str = "/expenses/new";
/// The page for previewing an expense's receipt.
pub const RECEIPT_VIEW: &str = "/expenses/{expense_id}/receipt";
/// The route for static seed receipt files.
pub const ASSETS: &str = "/assets";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create an expense from the add-expense form.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to download the receipt of a specific expense.
pub const DOWNLOAD_RECEIPT: &str = "/api/expenses/{expense_id}/receipt";
/// The route to download the currently previewed receipt.
pub const DOWNLOAD_CURRENT_RECEIPT: &str = "/api/receipt/download";
/// The route to close the receipt preview.
pub const CLOSE_RECEIPT: &str = "/api/receipt/close";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/expenses/{expense_id}/receipt',
/// '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::EXPENSES_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_EXPENSE_VIEW);
        assert_endpoint_is_valid_uri(endpoints::RECEIPT_VIEW);
        assert_endpoint_is_valid_uri(endpoints::ASSETS);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::EXPENSES_API);
        assert_endpoint_is_valid_uri(endpoints::DOWNLOAD_RECEIPT);
        assert_endpoint_is_valid_uri(endpoints::DOWNLOAD_CURRENT_RECEIPT);
        assert_endpoint_is_valid_uri(endpoints::CLOSE_RECEIPT);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/expenses/{expense_id}/receipt", 1);

        assert_eq!(formatted_path, "/expenses/1/receipt");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/expenses", 1);

        assert_eq!(formatted_path, "/expenses");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
