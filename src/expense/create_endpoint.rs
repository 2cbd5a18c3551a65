//! Defines the endpoint for creating a new expense from the add-expense form.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Multipart, State, multipart::Field},
    response::{IntoResponse, Redirect, Response},
};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    AppState, Error,
    currency::Currency,
    endpoints,
    expense::{models::Expense, store::ExpenseStore},
    receipt::Receipt,
};

const DATE_INPUT_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]");

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct IntakeState {
    /// The in-memory store holding every expense record.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for IntakeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// A route handler for creating a new expense, redirects to the expenses view
/// on success.
///
/// The uploaded receipt, if any, is read to completion before the record is
/// appended, so a rendered row can never reference a half-read file.
pub async fn create_expense_endpoint(
    State(state): State<IntakeState>,
    mut multipart: Multipart,
) -> Result<Response, Error> {
    let mut description = None;
    let mut amount = None;
    let mut currency = None;
    let mut date = None;
    let mut receipt = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| Error::MultipartError(error.to_string()))?
    {
        match field.name() {
            Some("description") => description = Some(field_text(field).await?),
            Some("amount") => {
                let text = field_text(field).await?;
                let parsed = text
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidFieldValue("amount", text.clone()))?;
                amount = Some(parsed);
            }
            Some("currency") => {
                let text = field_text(field).await?;
                let parsed = Currency::parse(&text)
                    .ok_or_else(|| Error::InvalidFieldValue("currency", text.clone()))?;
                currency = Some(parsed);
            }
            Some("date") => {
                let text = field_text(field).await?;
                let parsed = Date::parse(&text, DATE_INPUT_FORMAT)
                    .map_err(|_| Error::InvalidFieldValue("date", text.clone()))?;
                date = Some(parsed);
            }
            Some("receipt") => receipt = parse_receipt_field(field).await?,
            _ => {}
        }
    }

    let description = description.ok_or(Error::MissingField("description"))?;
    let amount = amount.ok_or(Error::MissingField("amount"))?;
    let currency = currency.ok_or(Error::MissingField("currency"))?;
    let date = date.ok_or(Error::MissingField("date"))?;

    if description.trim().is_empty() {
        return Err(Error::MissingField("description"));
    }

    let builder = Expense::build(&description, amount, currency, date).receipt(receipt);

    {
        let mut store = state.expense_store.lock().map_err(|error| {
            tracing::error!("could not acquire expense store lock: {error}");
            Error::StoreLockError
        })?;

        let expense = store.create(builder);
        tracing::info!(
            "created expense {} \"{}\" ({} {})",
            expense.id,
            expense.description,
            expense.amount,
            expense.currency
        );
    }

    Ok(Redirect::to(endpoints::EXPENSES_VIEW).into_response())
}

async fn field_text(field: Field<'_>) -> Result<String, Error> {
    field
        .text()
        .await
        .map_err(|error| Error::MultipartError(error.to_string()))
}

/// Capture the uploaded file as an in-memory receipt.
///
/// Browsers submit an empty part when no file was chosen, which counts as
/// "no receipt".
async fn parse_receipt_field(field: Field<'_>) -> Result<Option<Receipt>, Error> {
    let file_name = field.file_name().map(str::to_owned);
    let content_type = field
        .content_type()
        .map(str::to_owned)
        .unwrap_or_else(|| "application/octet-stream".to_owned());

    let bytes = field
        .bytes()
        .await
        .map_err(|error| Error::MultipartError(error.to_string()))?;

    match file_name {
        Some(file_name) if !file_name.is_empty() && !bytes.is_empty() => {
            Ok(Some(Receipt::Upload {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            }))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod create_expense_tests {
    use axum_test::{
        TestServer,
        multipart::{MultipartForm, Part},
    };
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        AppState, build_router, currency::Currency, endpoints, receipt::Receipt,
    };

    fn get_test_server(state: &AppState) -> TestServer {
        let app = build_router(state.clone());

        TestServer::new(app)
    }

    fn expense_form() -> MultipartForm {
        MultipartForm::new()
            .add_text("description", "Hotel deposit")
            .add_text("amount", "120.5")
            .add_text("currency", "USD")
            .add_text("date", "2025-11-02")
    }

    #[tokio::test]
    async fn creates_expense_without_receipt() {
        let state = AppState::new(Vec::new(), "Etc/UTC");
        let server = get_test_server(&state);

        let response = server
            .post(endpoints::EXPENSES_API)
            .multipart(expense_form())
            .await;

        response.assert_status_see_other();
        assert_eq!(
            response.header("location"),
            endpoints::EXPENSES_VIEW,
            "want redirect to the expenses view"
        );

        let store = state.expense_store.lock().unwrap();
        let expense = store.get(1).expect("expense should have been created");
        assert_eq!(expense.description, "Hotel deposit");
        assert_eq!(expense.amount, 120.5);
        assert_eq!(expense.currency, Currency::Usd);
        assert_eq!(expense.date, date!(2025 - 11 - 02));
        assert_eq!(expense.receipt, None);
    }

    #[tokio::test]
    async fn creates_expense_with_uploaded_receipt() {
        let state = AppState::new(Vec::new(), "Etc/UTC");
        let server = get_test_server(&state);

        let form = expense_form().add_part(
            "receipt",
            Part::bytes(vec![0x89, 0x50, 0x4e, 0x47])
                .file_name("scan.png")
                .mime_type("image/png"),
        );

        let response = server.post(endpoints::EXPENSES_API).multipart(form).await;
        response.assert_status_see_other();

        let store = state.expense_store.lock().unwrap();
        let expense = store.get(1).unwrap();

        match &expense.receipt {
            Some(Receipt::Upload {
                file_name,
                content_type,
                bytes,
            }) => {
                assert_eq!(file_name, "scan.png");
                assert_eq!(content_type, "image/png");
                assert_eq!(bytes, &vec![0x89, 0x50, 0x4e, 0x47]);
            }
            other => panic!("want an uploaded receipt, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn created_expense_appears_in_the_rendered_table() {
        let state = AppState::new(Vec::new(), "Etc/UTC");
        let server = get_test_server(&state);

        server
            .post(endpoints::EXPENSES_API)
            .multipart(expense_form())
            .await
            .assert_status_see_other();

        let response = server.get(endpoints::EXPENSES_VIEW).await;
        response.assert_status_ok();

        let document = Html::parse_document(&response.text());
        let converted_selector = Selector::parse("td[data-gbp-amount=true]").unwrap();
        let converted = document
            .select(&converted_selector)
            .next()
            .expect("table should have the new row")
            .text()
            .collect::<String>();

        // 120.5 USD * 0.76 = 91.58 GBP
        assert_eq!(converted.trim(), "£91.58");
    }

    #[tokio::test]
    async fn malformed_amount_is_rejected() {
        let state = AppState::new(Vec::new(), "Etc/UTC");
        let server = get_test_server(&state);

        let form = MultipartForm::new()
            .add_text("description", "Hotel deposit")
            .add_text("amount", "not-a-number")
            .add_text("currency", "USD")
            .add_text("date", "2025-11-02");

        let response = server.post(endpoints::EXPENSES_API).multipart(form).await;
        response.assert_status_bad_request();

        let store = state.expense_store.lock().unwrap();
        assert!(store.all().is_empty(), "no expense should have been created");
    }

    #[tokio::test]
    async fn empty_file_part_counts_as_no_receipt() {
        let state = AppState::new(Vec::new(), "Etc/UTC");
        let server = get_test_server(&state);

        let form = expense_form().add_part(
            "receipt",
            Part::bytes(Vec::new()).file_name("").mime_type("application/octet-stream"),
        );

        let response = server.post(endpoints::EXPENSES_API).multipart(form).await;
        response.assert_status_see_other();

        let store = state.expense_store.lock().unwrap();
        assert_eq!(store.get(1).unwrap().receipt, None);
    }
}
