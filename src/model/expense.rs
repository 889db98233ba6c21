use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recorded spend.
///
/// `category` holds a category *name*. It is a soft reference: nothing checks that the category
/// exists, and deleting a category leaves the name in place.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Expense {
    id: String,
    amount: Amount,
    description: String,
    category: String,
    date: NaiveDate,
}

impl Expense {
    pub(crate) fn new(id: String, input: ExpenseInput, date: NaiveDate) -> Self {
        Self {
            id,
            amount: Amount::coerce(&input.amount),
            description: input.description,
            category: input.category,
            date,
        }
    }

    /// Replaces the editable fields. The id and date never change.
    pub(crate) fn apply(&mut self, input: ExpenseInput) {
        self.amount = Amount::coerce(&input.amount);
        self.description = input.description;
        self.category = input.category;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date the way a US locale writes it, e.g. `3/9/2024`.
    pub fn display_date(&self) -> String {
        self.date.format("%-m/%-d/%Y").to_string()
    }
}

/// The raw form fields for adding or editing an expense.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct ExpenseInput {
    pub amount: String,
    pub description: String,
    pub category: String,
    /// Only used when adding. Defaults to today.
    pub date: Option<NaiveDate>,
}

impl ExpenseInput {
    pub fn new(
        amount: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
            category: category.into(),
            date: None,
        }
    }

    pub fn dated(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Both amount and description must be present for an add or an edit to happen.
    pub fn is_complete(&self) -> bool {
        !self.amount.trim().is_empty() && !self.description.trim().is_empty()
    }
}
