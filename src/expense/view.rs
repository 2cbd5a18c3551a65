//! HTML rendering for the expenses page.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    currency::{Currency, convert_to_gbp, from_gbp, gbp_total},
    endpoints,
    expense::models::Expense,
    html::{
        CURRENCY_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_date, format_money,
    },
};

/// The max number of graphemes to display in the expense table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 48;

/// Renders an expense as a table row.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct ExpenseTableRow {
    /// The 1-based position of the expense in the store.
    pub(crate) index: usize,
    /// A text description of what the expense was for.
    pub(crate) description: String,
    /// The amount in its original currency, formatted for display.
    pub(crate) amount_display: String,
    /// The currency the expense is denominated in, shown as a badge.
    pub(crate) currency: Currency,
    /// The GBP-converted amount, formatted for display.
    pub(crate) converted_display: String,
    /// The formatted date of the expense.
    pub(crate) date_display: String,
    /// The receipt action URLs, if the expense has a receipt.
    pub(crate) receipt_links: Option<ReceiptLinks>,
}

/// The paths for the view and download actions of a row's receipt.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct ReceiptLinks {
    pub(crate) view_url: String,
    pub(crate) download_url: String,
}

impl ExpenseTableRow {
    pub(crate) fn new_from_expense(index: usize, expense: &Expense) -> Self {
        let receipt_links = expense.receipt.as_ref().map(|_| ReceiptLinks {
            view_url: endpoints::format_endpoint(endpoints::RECEIPT_VIEW, expense.id),
            download_url: endpoints::format_endpoint(endpoints::DOWNLOAD_RECEIPT, expense.id),
        });

        Self {
            index,
            description: expense.description.clone(),
            amount_display: format_money(expense.amount, expense.currency),
            currency: expense.currency,
            converted_display: format_money(
                convert_to_gbp(expense.amount, expense.currency),
                Currency::Gbp,
            ),
            date_display: format_date(expense.date),
            receipt_links,
        }
    }
}

/// The formatted dual-currency totals shown above the table.
#[derive(Debug, PartialEq)]
pub(crate) struct TotalsSummary {
    pub(crate) gbp_display: String,
    pub(crate) lkr_display: String,
}

impl TotalsSummary {
    /// Compute both totals for `expenses`: the GBP reference total and its
    /// LKR equivalent by inverse conversion.
    pub(crate) fn new_from_expenses(expenses: &[Expense]) -> Self {
        let total = gbp_total(
            expenses
                .iter()
                .map(|expense| (expense.amount, expense.currency)),
        );

        Self {
            gbp_display: format_money(total, Currency::Gbp),
            lkr_display: format_money(from_gbp(total, Currency::Lkr), Currency::Lkr),
        }
    }
}

fn currency_badge_class(currency: Currency) -> &'static str {
    match currency {
        Currency::Lkr => "text-amber-800 bg-amber-100 dark:bg-amber-900 dark:text-amber-300",
        Currency::Usd => "text-green-800 bg-green-100 dark:bg-green-900 dark:text-green-300",
        Currency::Gbp => "text-blue-800 bg-blue-100 dark:bg-blue-900 dark:text-blue-300",
    }
}

pub(crate) fn expenses_view(rows: &[ExpenseTableRow], totals: &TotalsSummary) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl lg:mx-auto"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Expenses" }

                    a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE)
                    {
                        "Add Expense"
                    }
                }

                (totals_view(totals))

                section class="rounded bg-gray-50 dark:bg-gray-800 overflow-hidden"
                {
                    table class="w-full my-2 text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "#" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class="px-6 py-3 text-right" { "Amount" }
                                th scope="col" class="px-6 py-3 text-right" { "GBP Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Receipt" }
                            }
                        }

                        tbody
                        {
                            @for row in rows {
                                (expense_row_view(row))
                            }

                            @if rows.is_empty() {
                                tr
                                {
                                    td
                                        colspan="6"
                                        data-empty-state="true"
                                        class="px-6 py-4 text-center"
                                    {
                                        "No expenses recorded."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Expenses", &content)
}

fn totals_view(totals: &TotalsSummary) -> Markup {
    html! {
        section class="grid grid-cols-1 sm:grid-cols-2 gap-4"
        {
            div class="rounded border border-gray-200 bg-white px-4 py-3 shadow-sm dark:border-gray-700 dark:bg-gray-800"
            {
                p class="text-xs font-semibold uppercase text-gray-500 dark:text-gray-400"
                {
                    "Total (GBP)"
                }
                p id="total-gbp" class="text-lg font-bold tabular-nums"
                {
                    (totals.gbp_display)
                }
            }

            div class="rounded border border-gray-200 bg-white px-4 py-3 shadow-sm dark:border-gray-700 dark:bg-gray-800"
            {
                p class="text-xs font-semibold uppercase text-gray-500 dark:text-gray-400"
                {
                    "Total (LKR)"
                }
                p id="total-lkr" class="text-lg font-bold tabular-nums"
                {
                    (totals.lkr_display)
                }
            }
        }
    }
}

fn expense_row_view(row: &ExpenseTableRow) -> Markup {
    let (description, tooltip) = truncate_description(&row.description);

    html! {
        tr class=(TABLE_ROW_STYLE) data-expense-row="true"
        {
            td class=(TABLE_CELL_STYLE) { (row.index) }
            td class=(TABLE_CELL_STYLE) title=[tooltip]
            {
                strong { (description) }
            }
            td class="px-6 py-4 text-right whitespace-nowrap"
            {
                (row.amount_display)
                " "
                span class={ (CURRENCY_BADGE_STYLE) " " (currency_badge_class(row.currency)) }
                {
                    (row.currency.code())
                }
            }
            td class="px-6 py-4 text-right tabular-nums" data-gbp-amount="true"
            {
                (row.converted_display)
            }
            td class=(TABLE_CELL_STYLE)
            {
                (row.date_display)
            }
            td class=(TABLE_CELL_STYLE)
            {
                @if let Some(ref links) = row.receipt_links {
                    div class="flex gap-4"
                    {
                        a href=(links.view_url) class=(LINK_STYLE) { "View" }
                        a href=(links.download_url) class=(LINK_STYLE) { "Download" }
                    }
                } @else {
                    span class="text-gray-400 dark:text-gray-500" { "No receipt" }
                }
            }
        }
    }
}

fn truncate_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        let truncated = truncated + "...";
        (truncated, Some(description))
    }
}

#[cfg(test)]
mod view_model_tests {
    use time::macros::date;

    use crate::{currency::Currency, expense::models::Expense, receipt::Receipt};

    use super::{ExpenseTableRow, TotalsSummary, truncate_description};

    #[test]
    fn row_converts_and_formats_amounts() {
        let expense = Expense::build(
            "Travel Insurance Fee (1 Year)",
            171.55,
            Currency::Usd,
            date!(2025 - 09 - 29),
        )
        .receipt(Some(Receipt::Path("assets/Travel_insurance.pdf".to_owned())))
        .finalize(1);

        let row = ExpenseTableRow::new_from_expense(1, &expense);

        assert_eq!(row.amount_display, "$171.55");
        assert_eq!(row.converted_display, "£130.38");
        assert_eq!(row.date_display, "29 Sep 2025");

        let links = row.receipt_links.expect("row should have receipt links");
        assert_eq!(links.view_url, "/expenses/1/receipt");
        assert_eq!(links.download_url, "/api/expenses/1/receipt");
    }

    #[test]
    fn row_without_receipt_has_no_links() {
        let expense = Expense::build("Taxi", 12.0, Currency::Gbp, date!(2025 - 10 - 01))
            .finalize(7);

        let row = ExpenseTableRow::new_from_expense(3, &expense);

        assert!(row.receipt_links.is_none());
    }

    #[test]
    fn totals_cover_all_seed_records() {
        let expenses: Vec<_> = crate::expense::seed::seed_expenses()
            .into_iter()
            .enumerate()
            .map(|(i, builder)| builder.finalize(i as i64 + 1))
            .collect();

        let totals = TotalsSummary::new_from_expenses(&expenses);

        assert_eq!(totals.gbp_display, "£1,829.42");
        assert_eq!(totals.lkr_display, "Rs 731,767.20");
    }

    #[test]
    fn long_descriptions_are_truncated_with_tooltip() {
        let long = "a".repeat(60);

        let (shown, tooltip) = truncate_description(&long);

        assert!(shown.ends_with("..."));
        assert_eq!(tooltip, Some(long.as_str()));
    }
}
