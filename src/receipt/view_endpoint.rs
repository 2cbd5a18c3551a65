//! Defines the endpoint for previewing a receipt.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    expense::{ExpenseId, ExpenseStore},
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base, external_link},
    receipt::models::{PreviewMode, Receipt},
};

/// The state needed to preview, close or download the current receipt.
#[derive(Debug, Clone)]
pub struct ReceiptState {
    /// The in-memory store holding every expense record.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
    /// The receipt currently open in the preview, if any.
    pub viewing_receipt: Arc<Mutex<Option<ExpenseId>>>,
}

impl FromRef<AppState> for ReceiptState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
            viewing_receipt: state.viewing_receipt.clone(),
        }
    }
}

impl ReceiptState {
    pub(crate) fn set_viewing(&self, expense_id: Option<ExpenseId>) -> Result<(), Error> {
        let mut viewing = self.viewing_receipt.lock().map_err(|error| {
            tracing::error!("could not acquire receipt preview lock: {error}");
            Error::StoreLockError
        })?;
        *viewing = expense_id;

        Ok(())
    }

    pub(crate) fn currently_viewing(&self) -> Result<Option<ExpenseId>, Error> {
        self.viewing_receipt
            .lock()
            .map(|viewing| *viewing)
            .map_err(|error| {
                tracing::error!("could not acquire receipt preview lock: {error}");
                Error::StoreLockError
            })
    }
}

/// A route handler for previewing an expense's receipt.
///
/// Opening the preview moves the receipt controller into its viewing state,
/// which is what the download-current endpoint operates on. A missing
/// expense or a missing receipt silently lands back on the expenses page.
pub async fn get_receipt_page(
    State(state): State<ReceiptState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Response, Error> {
    let (description, receipt) = {
        let store = state.expense_store.lock().map_err(|error| {
            tracing::error!("could not acquire expense store lock: {error}");
            Error::StoreLockError
        })?;

        let expense = store.get(expense_id)?;
        let receipt = expense.receipt.clone().ok_or(Error::NoReceipt)?;

        (expense.description.clone(), receipt)
    };

    state.set_viewing(Some(expense_id))?;

    Ok(receipt_view(&description, &receipt).into_response())
}

fn receipt_view(description: &str, receipt: &Receipt) -> Markup {
    let href = receipt.href();

    let preview = match receipt.preview_mode() {
        PreviewMode::Document => document_preview(&href),
        PreviewMode::Image => image_preview(&href),
    };

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-3xl lg:mx-auto"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { (description) }

                    div class="flex gap-4"
                    {
                        a href=(endpoints::DOWNLOAD_CURRENT_RECEIPT) class=(LINK_STYLE)
                        {
                            "Download"
                        }

                        a href=(endpoints::CLOSE_RECEIPT) class=(LINK_STYLE)
                        {
                            "Close"
                        }
                    }
                }

                div
                    id="receipt-viewer"
                    class="rounded bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 overflow-hidden"
                {
                    (preview)
                }
            }
        }
    };

    base(description, &content)
}

fn document_preview(href: &str) -> Markup {
    html! {
        iframe
            src=(href)
            type="application/pdf"
            title="Receipt"
            class="w-full h-[36rem]"
            data-preview-mode="document"
        {}

        div class="pdf-fallback px-6 py-4 text-center text-sm text-gray-500 dark:text-gray-400"
        {
            p { "PDF Document" }
            p
            {
                "If the PDF doesn't display above, "
                (external_link(href, "click here to open in a new tab"))
            }
        }
    }
}

fn image_preview(href: &str) -> Markup {
    html! {
        img
            src=(href)
            alt="Receipt"
            class="w-full object-contain max-h-[36rem]"
            data-preview-mode="image"
            onerror="this.style.display='none'; document.getElementById('receipt-load-error').style.display='block';";

        div
            id="receipt-load-error"
            class="pdf-fallback px-6 py-4 text-center text-sm text-gray-500 dark:text-gray-400"
            style="display: none;"
        {
            p { "Failed to load receipt" }
            p
            {
                (external_link(href, "Click here to open in a new tab"))
            }
        }
    }
}

#[cfg(test)]
mod view_receipt_tests {
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        AppState, build_router,
        currency::Currency,
        endpoints,
        expense::{Expense, seed_expenses},
        receipt::Receipt,
    };

    fn get_test_server(state: &AppState) -> TestServer {
        let app = build_router(state.clone());

        TestServer::new(app)
    }

    fn preview_mode(document: &Html) -> Option<String> {
        let selector = Selector::parse("[data-preview-mode]").unwrap();

        document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr("data-preview-mode"))
            .map(str::to_owned)
    }

    #[tokio::test]
    async fn pdf_receipt_uses_document_preview() {
        let state = AppState::new(seed_expenses(), "Etc/UTC");
        let server = get_test_server(&state);

        let response = server
            .get(&endpoints::format_endpoint(endpoints::RECEIPT_VIEW, 3))
            .await;
        response.assert_status_ok();

        let document = Html::parse_document(&response.text());
        assert_eq!(preview_mode(&document).as_deref(), Some("document"));
    }

    #[tokio::test]
    async fn image_receipt_uses_image_preview() {
        let state = AppState::new(Vec::new(), "Etc/UTC");
        {
            let mut store = state.expense_store.lock().unwrap();
            store.create(
                Expense::build(
                    "Hotel bill",
                    50.0,
                    Currency::Gbp,
                    time::macros::date!(2025 - 11 - 01),
                )
                .receipt(Some(Receipt::Upload {
                    file_name: "bill.jpg".to_owned(),
                    content_type: "image/jpeg".to_owned(),
                    bytes: vec![0xff, 0xd8],
                })),
            );
        }
        let server = get_test_server(&state);

        let response = server
            .get(&endpoints::format_endpoint(endpoints::RECEIPT_VIEW, 1))
            .await;
        response.assert_status_ok();

        let document = Html::parse_document(&response.text());
        assert_eq!(preview_mode(&document).as_deref(), Some("image"));
    }

    #[tokio::test]
    async fn viewing_sets_the_controller_state() {
        let state = AppState::new(seed_expenses(), "Etc/UTC");
        let server = get_test_server(&state);

        server
            .get(&endpoints::format_endpoint(endpoints::RECEIPT_VIEW, 2))
            .await
            .assert_status_ok();

        assert_eq!(*state.viewing_receipt.lock().unwrap(), Some(2));
    }

    #[tokio::test]
    async fn missing_expense_is_a_silent_no_op() {
        let state = AppState::new(seed_expenses(), "Etc/UTC");
        let server = get_test_server(&state);

        let response = server
            .get(&endpoints::format_endpoint(endpoints::RECEIPT_VIEW, 999))
            .await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::EXPENSES_VIEW);
        assert_eq!(
            *state.viewing_receipt.lock().unwrap(),
            None,
            "the controller must stay closed"
        );
    }

    #[tokio::test]
    async fn expense_without_receipt_is_a_silent_no_op() {
        let state = AppState::new(Vec::new(), "Etc/UTC");
        {
            let mut store = state.expense_store.lock().unwrap();
            store.create(Expense::build(
                "Taxi",
                12.0,
                Currency::Gbp,
                time::macros::date!(2025 - 10 - 01),
            ));
        }
        let server = get_test_server(&state);

        let response = server
            .get(&endpoints::format_endpoint(endpoints::RECEIPT_VIEW, 1))
            .await;

        response.assert_status_see_other();
        assert_eq!(*state.viewing_receipt.lock().unwrap(), None);
    }
}
