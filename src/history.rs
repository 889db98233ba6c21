use crate::aggregate::{monthly_totals, weekly_totals, MonthlyTotals, WeeklyTotals};
use crate::model::{Amount, Expense};
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

/// A read-only copy of the expenses taken when the history view is opened. Edits made to the
/// ledger afterwards are not reflected until a new snapshot is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    expenses: Vec<Expense>,
    now: NaiveDateTime,
}

impl History {
    pub fn snapshot(expenses: &[Expense], now: NaiveDateTime) -> Self {
        Self {
            expenses: expenses.to_vec(),
            now,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn weekly(&self) -> WeeklyTotals {
        weekly_totals(&self.expenses, self.now)
    }

    pub fn monthly(&self) -> MonthlyTotals {
        monthly_totals(&self.expenses)
    }

    /// "This week's total": everything in the weekly chart.
    pub fn week_total(&self) -> Amount {
        self.weekly().total()
    }

    /// "This month's total": the monthly bucket for the current month, across all years.
    pub fn month_total(&self) -> Amount {
        self.monthly()[self.now.month0() as usize]
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            week_total: self.week_total(),
            month_total: self.month_total(),
            weekly: self.weekly(),
            monthly: self.monthly(),
        }
    }
}

/// Everything the history screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    pub week_total: Amount,
    pub month_total: Amount,
    pub weekly: WeeklyTotals,
    pub monthly: MonthlyTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExpenseInput;
    use crate::store::ExpenseStore;
    use crate::Clock;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 13)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_month_total_merges_years() {
        let mut store = ExpenseStore::new(Clock::Fixed(now()));
        let last_march = NaiveDate::from_ymd_opt(2023, 3, 2).unwrap();
        let february = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        store.add(ExpenseInput::new("4", "a", "Food"));
        store.add(ExpenseInput::new("6", "b", "Food").dated(last_march));
        store.add(ExpenseInput::new("100", "c", "Food").dated(february));

        let history = History::snapshot(store.list(), now());
        assert_eq!(history.month_total().value(), Decimal::from(10));
        assert_eq!(history.week_total().value(), Decimal::from(4));
    }

    #[test]
    fn test_week_total_counts_future_dates() {
        let mut store = ExpenseStore::new(Clock::Fixed(now()));
        let friday = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        store.add(ExpenseInput::new("3", "a", "Food"));
        store.add(ExpenseInput::new("5", "b", "Food").dated(friday));

        let history = History::snapshot(store.list(), now());
        assert_eq!(history.weekly()[5].value(), Decimal::from(5));
        assert_eq!(history.week_total().value(), Decimal::from(8));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = ExpenseStore::new(Clock::Fixed(now()));
        let a = store.add(ExpenseInput::new("4", "a", "Food")).unwrap();
        let history = History::snapshot(store.list(), now());
        store.update(a.id(), ExpenseInput::new("40", "a", "Food"));
        store.add(ExpenseInput::new("1", "b", "Food"));
        assert_eq!(history.expenses().len(), 1);
        assert_eq!(history.week_total().value(), Decimal::from(4));
    }

    #[test]
    fn test_summary_json() {
        let mut store = ExpenseStore::new(Clock::Fixed(now()));
        store.add(ExpenseInput::new("4.00", "a", "Food"));
        let json = serde_json::to_value(History::snapshot(store.list(), now()).summary()).unwrap();
        assert_eq!(json["week_total"], "4.00");
        assert_eq!(json["month_total"], "4.00");
        assert_eq!(json["weekly"].as_array().unwrap().len(), 7);
        assert_eq!(json["monthly"][2]["label"], "Mar");
    }
}
