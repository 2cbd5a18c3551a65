use maud::{Markup, html};
use time::Date;

use crate::{
    currency::Currency,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

pub struct ExpenseFormDefaults {
    pub date: Date,
    pub max_date: Date,
}

pub fn expense_form_fields(defaults: &ExpenseFormDefaults) -> Markup {
    html! {
        div
        {
            label
                for="description"
                class=(FORM_LABEL_STYLE)
            {
                "Description"
            }

            input
                name="description"
                id="description"
                type="text"
                placeholder="Description"
                required
                autofocus
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            input
                name="amount"
                id="amount"
                type="number"
                step="0.01"
                min="0"
                placeholder="0.00"
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="currency"
                class=(FORM_LABEL_STYLE)
            {
                "Currency"
            }

            select
                name="currency"
                id="currency"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for currency in Currency::ALL {
                    option value=(currency.code()) { (currency.code()) }
                }
            }
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                max=(defaults.max_date)
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="receipt"
                class=(FORM_LABEL_STYLE)
            {
                "Receipt (image or PDF, optional)"
            }

            input
                name="receipt"
                id="receipt"
                type="file"
                accept="image/*,.pdf"
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
