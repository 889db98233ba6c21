//! Expense command handlers: the entry and list screen.

use crate::args::{AddExpenseArgs, ExpenseIdArgs, UpdateExpenseArgs};
use crate::commands::{plural, Out};
use crate::model::{Amount, AmountFormat, CategoryStyle, Expense, ExpenseInput};
use crate::{Ledger, Result};
use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// An expense as the list shows it: with its formatted fields and the style of its category.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseRow {
    #[serde(flatten)]
    pub expense: Expense,
    pub display_amount: String,
    pub display_date: String,
    pub style: CategoryStyle,
}

impl ExpenseRow {
    fn new(ledger: &Ledger, expense: &Expense, format: AmountFormat) -> Self {
        Self {
            expense: expense.clone(),
            display_amount: expense.amount().format(format),
            display_date: expense.display_date(),
            style: ledger.style_of(expense),
        }
    }
}

/// Every expense, newest first, with the running total.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseList {
    pub total: Amount,
    pub display_total: String,
    pub expenses: Vec<ExpenseRow>,
}

/// Adds an expense to the head of the list.
///
/// A blank amount or description is not an error: nothing is added and the returned `Out` has
/// no structure.
///
/// # Errors
///
/// - Returns an error if `date` is given but is not a `YYYY-MM-DD` date. The date is only checked
///   once the amount and description are present.
pub fn add_expense(
    ledger: &mut Ledger,
    args: AddExpenseArgs,
    format: AmountFormat,
) -> Result<Out<Expense>> {
    let category = args
        .category
        .unwrap_or_else(|| ledger.default_category());
    let mut input = ExpenseInput::new(args.amount, args.description, category);
    if !input.is_complete() {
        debug!("Not adding an expense without an amount or description");
        return Ok("No expense was added".into());
    }
    if let Some(date) = args.date {
        input = input.dated(parse_date(&date)?);
    }

    Ok(match ledger.add_expense(input) {
        Some(expense) => {
            let message = format!(
                "Added expense {}: {} for {}. Total: {}",
                expense.id(),
                expense.amount().format(format),
                expense.description(),
                ledger.total().format(format)
            );
            Out::new(message, expense)
        }
        None => "No expense was added".into(),
    })
}

/// Replaces the amount, description and category of an expense. The id and date are kept.
///
/// An unknown id or a blank amount or description changes nothing and returns an `Out` with no
/// structure.
pub fn update_expense(
    ledger: &mut Ledger,
    args: UpdateExpenseArgs,
    format: AmountFormat,
) -> Result<Out<Expense>> {
    let category = match args.category {
        Some(category) => category,
        None => match ledger.expense(&args.id) {
            Some(existing) => existing.category().to_string(),
            None => {
                debug!("No expense with id {}", args.id);
                return Ok("No expense was updated".into());
            }
        },
    };
    let input = ExpenseInput::new(args.amount, args.description, category);

    Ok(match ledger.update_expense(&args.id, input) {
        Some(expense) => {
            let message = format!(
                "Updated expense {}. Total: {}",
                expense.id(),
                ledger.total().format(format)
            );
            Out::new(message, expense)
        }
        None => "No expense was updated".into(),
    })
}

/// Deletes an expense. An unknown id changes nothing.
pub fn delete_expense(
    ledger: &mut Ledger,
    args: ExpenseIdArgs,
    format: AmountFormat,
) -> Result<Out<Expense>> {
    Ok(match ledger.delete_expense(&args.id) {
        Some(expense) => {
            let message = format!(
                "Deleted expense {}. Total: {}",
                expense.id(),
                ledger.total().format(format)
            );
            Out::new(message, expense)
        }
        None => format!("No expense with id {}", args.id).into(),
    })
}

/// Fetches one expense, e.g. to fill in an edit form.
///
/// # Errors
///
/// - Returns an error if there is no expense with the id.
pub fn get_expense(
    ledger: &Ledger,
    args: ExpenseIdArgs,
    format: AmountFormat,
) -> Result<Out<ExpenseRow>> {
    let expense = ledger
        .expense(&args.id)
        .ok_or_else(|| anyhow!("No expense with id {}", args.id))?;
    let row = ExpenseRow::new(ledger, expense, format);
    let message = format!(
        "{} on {}: {} ({})",
        expense.description(),
        row.display_date,
        row.display_amount,
        expense.category()
    );
    Ok(Out::new(message, row))
}

/// Lists every expense, newest first, with the running total.
pub fn list_expenses(ledger: &Ledger, format: AmountFormat) -> Result<Out<ExpenseList>> {
    let expenses: Vec<ExpenseRow> = ledger
        .expenses()
        .iter()
        .map(|e| ExpenseRow::new(ledger, e, format))
        .collect();
    let display_total = ledger.total().format(format);
    let count = expenses.len();
    let message = format!(
        "{count} expense{}. Total: {display_total}",
        plural(count, "", "s")
    );
    Ok(Out::new(
        message,
        ExpenseList {
            total: ledger.total(),
            display_total,
            expenses,
        },
    ))
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    date: NaiveDate,
    description: &'a str,
    category: &'a str,
    amount: Amount,
}

/// Writes the current expenses, newest first, as CSV text. Nothing is written to disk.
pub fn export_expenses(ledger: &Ledger) -> Result<Out<String>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for expense in ledger.expenses() {
        writer
            .serialize(ExportRow {
                id: expense.id(),
                date: expense.date(),
                description: expense.description(),
                category: expense.category(),
                amount: expense.amount(),
            })
            .context("Unable to write an expense as CSV")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Unable to finish the CSV output: {}", e.error()))?;
    let csv = String::from_utf8(bytes).context("The CSV output is not UTF-8")?;
    let count = ledger.expenses().len();
    Ok(Out::new(
        format!("Exported {count} expense{}", plural(count, "", "s")),
        csv,
    ))
}

fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::from_str(date.trim())
        .with_context(|| format!("'{date}' is not a date in the form YYYY-MM-DD"))
}
