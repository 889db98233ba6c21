//! Weekly and monthly sums of expense amounts, derived on demand from the full expense list.

use crate::model::{Amount, Expense};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::ops::Index;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How far back the weekly chart reaches.
const WEEK_DAYS: u64 = 7;

/// Labelled amount buckets for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals<const N: usize> {
    labels: &'static [&'static str; N],
    amounts: [Amount; N],
}

/// Indexed by weekday, 0 = Sunday.
pub type WeeklyTotals = Totals<7>;

/// Indexed by calendar month, 0 = January.
pub type MonthlyTotals = Totals<12>;

impl<const N: usize> Totals<N> {
    fn empty(labels: &'static [&'static str; N]) -> Self {
        Self {
            labels,
            amounts: [Amount::ZERO; N],
        }
    }

    pub fn amounts(&self) -> &[Amount; N] {
        &self.amounts
    }

    pub fn labels(&self) -> &[&'static str; N] {
        self.labels
    }

    /// The sum across every bucket, saturating rather than overflowing.
    pub fn total(&self) -> Amount {
        self.amounts.iter().sum()
    }

    /// `(label, amount)` pairs in bucket order.
    pub fn bars(&self) -> impl Iterator<Item = (&'static str, Amount)> + '_ {
        self.labels.iter().copied().zip(self.amounts.iter().copied())
    }
}

impl<const N: usize> Index<usize> for Totals<N> {
    type Output = Amount;

    fn index(&self, ix: usize) -> &Amount {
        &self.amounts[ix]
    }
}

#[derive(Serialize)]
struct Bar {
    label: &'static str,
    amount: Amount,
}

/// Serialized as a list of `{ "label": "Mon", "amount": "12.50" }`.
impl<const N: usize> Serialize for Totals<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.bars().map(|(label, amount)| Bar { label, amount }))
    }
}

/// Sums the expenses of the last seven days by weekday.
///
/// An expense counts when its date is on or after the date seven days before `now`, so an
/// expense exactly a week old is included. There is no upper bound.
pub fn weekly_totals(expenses: &[Expense], now: NaiveDateTime) -> WeeklyTotals {
    let cutoff = now
        .date()
        .checked_sub_days(Days::new(WEEK_DAYS))
        .unwrap_or(NaiveDate::MIN);
    let mut totals = Totals::empty(&WEEKDAY_LABELS);
    for expense in expenses.iter().filter(|e| e.date() >= cutoff) {
        let day = expense.date().weekday().num_days_from_sunday() as usize;
        totals.amounts[day] = totals.amounts[day].saturating_add(expense.amount());
    }
    totals
}

/// Sums every expense by calendar month. The year is ignored, so January 2023 and January 2024
/// land in the same bucket.
pub fn monthly_totals(expenses: &[Expense]) -> MonthlyTotals {
    let mut totals = Totals::empty(&MONTH_LABELS);
    for expense in expenses {
        let month = expense.date().month0() as usize;
        totals.amounts[month] = totals.amounts[month].saturating_add(expense.amount());
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExpenseInput;
    use crate::store::ExpenseStore;
    use crate::Clock;
    use chrono::Weekday;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        // a Wednesday
        date(2024, 3, 13).and_hms_opt(18, 45, 0).unwrap()
    }

    fn expenses(entries: &[(&str, NaiveDate)]) -> Vec<Expense> {
        let mut store = ExpenseStore::new(Clock::Fixed(now()));
        for (amount, date) in entries {
            store.add(ExpenseInput::new(*amount, "x", "Food").dated(*date));
        }
        store.list().to_vec()
    }

    fn ix(day: NaiveDate) -> usize {
        day.weekday().num_days_from_sunday() as usize
    }

    #[test]
    fn test_weekly_window() {
        let today = now().date();
        let three = today - Days::new(3);
        let six = today - Days::new(6);
        let eight = today - Days::new(8);
        let list = expenses(&[("10", today), ("20", three), ("30", six), ("40", eight)]);

        let weekly = weekly_totals(&list, now());
        assert_eq!(weekly.total().value(), Decimal::from(60));
        assert_eq!(weekly[ix(today)].value(), Decimal::from(10));
        assert_eq!(weekly[ix(three)].value(), Decimal::from(20));
        assert_eq!(weekly[ix(six)].value(), Decimal::from(30));
        assert_eq!(weekly[ix(eight)], Amount::ZERO);
        assert_eq!(today.weekday(), Weekday::Wed);
        assert_eq!(ix(today), 3);
    }

    #[test]
    fn test_weekly_includes_exactly_seven_days_old() {
        let week_ago = now().date() - Days::new(7);
        let list = expenses(&[("5", week_ago)]);
        let weekly = weekly_totals(&list, now());
        // same weekday as today
        assert_eq!(weekly[3].value(), Decimal::from(5));
    }

    #[test]
    fn test_weekly_merges_same_weekday() {
        let today = now().date();
        let week_ago = today - Days::new(7);
        let list = expenses(&[("1.25", today), ("2.75", week_ago)]);
        assert_eq!(weekly_totals(&list, now())[3].value(), Decimal::from(4));
    }

    #[test]
    fn test_weekly_counts_future_dates() {
        let friday = now().date() + Days::new(2);
        let list = expenses(&[("8", friday), ("1", now().date())]);
        let weekly = weekly_totals(&list, now());
        assert_eq!(ix(friday), 5);
        assert_eq!(weekly[5].value(), Decimal::from(8));
        assert_eq!(weekly.total().value(), Decimal::from(9));
    }

    #[test]
    fn test_sums_saturate() {
        let max = "79228162514264337593543950335";
        let today = now().date();
        let list = vec![
            Expense::new("1".into(), ExpenseInput::new(max, "a", "Food"), today),
            Expense::new("2".into(), ExpenseInput::new(max, "b", "Food"), today),
        ];
        assert_eq!(weekly_totals(&list, now())[3].value(), Decimal::MAX);
        assert_eq!(monthly_totals(&list).total().value(), Decimal::MAX);
    }

    #[test]
    fn test_monthly_merges_years() {
        let list = expenses(&[("5", date(2023, 1, 15)), ("7", date(2024, 1, 20))]);
        let monthly = monthly_totals(&list);
        assert_eq!(monthly[0].value(), Decimal::from(12));
        assert_eq!(monthly.total().value(), Decimal::from(12));
    }

    #[test]
    fn test_monthly_buckets() {
        let list = expenses(&[
            ("1", date(2024, 2, 1)),
            ("2", date(2024, 2, 29)),
            ("3", date(2020, 12, 31)),
        ]);
        let monthly = monthly_totals(&list);
        assert_eq!(monthly[1].value(), Decimal::from(3));
        assert_eq!(monthly[11].value(), Decimal::from(3));
        assert_eq!(monthly[0], Amount::ZERO);
    }

    #[test]
    fn test_empty() {
        assert_eq!(weekly_totals(&[], now()).total(), Amount::ZERO);
        assert_eq!(monthly_totals(&[]).total(), Amount::ZERO);
    }

    #[test]
    fn test_serialize_bars() {
        let list = expenses(&[("2.50", now().date())]);
        let json = serde_json::to_value(weekly_totals(&list, now())).unwrap();
        let bars = json.as_array().unwrap();
        assert_eq!(bars.len(), 7);
        assert_eq!(bars[0], serde_json::json!({"label": "Sun", "amount": "0"}));
        assert_eq!(bars[3], serde_json::json!({"label": "Wed", "amount": "2.50"}));
    }
}
