use crate::model::{Amount, Expense, ExpenseInput, IdGenerator};
use crate::Clock;
use tracing::{debug, trace, warn};

/// The ordered list of expenses, newest first, along with a running total.
///
/// The total is adjusted on every mutation rather than recomputed, and always equals the sum of
/// the amounts currently in the list.
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    total: Amount,
    ids: IdGenerator,
    clock: Clock,
}

impl ExpenseStore {
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            ..Default::default()
        }
    }

    /// Adds an expense at the head of the list. Returns `None`, changing nothing, when the amount
    /// or the description is blank or the total would no longer fit in a `Decimal`.
    pub fn add(&mut self, input: ExpenseInput) -> Option<Expense> {
        if !input.is_complete() {
            debug!("Ignoring an expense without an amount or description");
            return None;
        }
        let now = self.clock.now();
        let date = input.date.unwrap_or_else(|| now.date());
        let expense = Expense::new(self.ids.next(now), input, date);
        let Some(total) = self.total.checked_add(expense.amount()) else {
            warn!("Refusing to add {}, the total would overflow", expense.amount());
            return None;
        };
        self.total = total;
        trace!("Added expense {}, total is now {}", expense.id(), self.total);
        self.expenses.insert(0, expense.clone());
        Some(expense)
    }

    /// Replaces the amount, description and category of the expense with `id`. Returns `None`,
    /// changing nothing, when `id` is unknown, the amount or description is blank, or the total
    /// would overflow.
    pub fn update(&mut self, id: &str, input: ExpenseInput) -> Option<Expense> {
        if !input.is_complete() {
            debug!("Ignoring an edit of {id} without an amount or description");
            return None;
        }
        let Some(expense) = self.expenses.iter_mut().find(|e| e.id() == id) else {
            debug!("No expense with id {id} to update");
            return None;
        };
        let mut edited = expense.clone();
        edited.apply(input);
        let Some(total) = self
            .total
            .checked_sub(expense.amount())
            .and_then(|t| t.checked_add(edited.amount()))
        else {
            warn!("Refusing to update {id}, the total would overflow");
            return None;
        };
        *expense = edited;
        self.total = total;
        trace!("Updated expense {id}, total is now {}", self.total);
        Some(expense.clone())
    }

    /// Removes the expense with `id`, returning it. Unknown ids change nothing, and so does a
    /// removal that would overflow the total.
    pub fn delete(&mut self, id: &str) -> Option<Expense> {
        let Some(ix) = self.expenses.iter().position(|e| e.id() == id) else {
            debug!("No expense with id {id} to delete");
            return None;
        };
        let Some(total) = self.total.checked_sub(self.expenses[ix].amount()) else {
            warn!("Refusing to delete {id}, the total would overflow");
            return None;
        };
        let expense = self.expenses.remove(ix);
        self.total = total;
        trace!("Deleted expense {id}, total is now {}", self.total);
        Some(expense)
    }

    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id() == id)
    }

    /// Newest first.
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn store() -> ExpenseStore {
        ExpenseStore::new(Clock::Fixed(now()))
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_total_matches(store: &ExpenseStore) {
        let sum: Amount = store.list().iter().map(|e| e.amount()).sum();
        assert_eq!(store.total().value(), sum.value());
    }

    #[test]
    fn test_add_inserts_at_head() {
        let mut store = store();
        let first = store.add(ExpenseInput::new("1", "first", "Food")).unwrap();
        let second = store.add(ExpenseInput::new("2", "second", "Food")).unwrap();
        let ids: Vec<&str> = store.list().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![second.id(), first.id()]);
        assert_ne!(first.id(), second.id());
        assert_eq!(store.total().value(), dec("3"));
    }

    #[test]
    fn test_add_defaults_date_to_today() {
        let mut store = store();
        let expense = store.add(ExpenseInput::new("1", "x", "Food")).unwrap();
        assert_eq!(expense.date(), now().date());

        let past = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let expense = store
            .add(ExpenseInput::new("1", "x", "Food").dated(past))
            .unwrap();
        assert_eq!(expense.date(), past);
    }

    #[test]
    fn test_add_blank_fields_is_noop() {
        let mut store = store();
        store.add(ExpenseInput::new("3", "kept", "Food")).unwrap();
        assert!(store.add(ExpenseInput::new("", "x", "Food")).is_none());
        assert!(store.add(ExpenseInput::new("5", "", "Food")).is_none());
        assert!(store.add(ExpenseInput::new("5", "   ", "Food")).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.total().value(), dec("3"));
    }

    #[test]
    fn test_update_adjusts_total_by_difference() {
        let mut store = store();
        let a = store.add(ExpenseInput::new("10", "a", "Food")).unwrap();
        store.add(ExpenseInput::new("5", "b", "Food")).unwrap();
        let updated = store
            .update(a.id(), ExpenseInput::new("4.50", "a2", "Bills"))
            .unwrap();
        assert_eq!(updated.id(), a.id());
        assert_eq!(updated.date(), a.date());
        assert_eq!(updated.category(), "Bills");
        assert_eq!(store.total().value(), dec("9.50"));
        // order is not touched by an edit
        assert_eq!(store.list()[1].id(), a.id());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = store();
        store.add(ExpenseInput::new("10", "a", "Food")).unwrap();
        let before = store.list().to_vec();
        assert!(store
            .update("nope", ExpenseInput::new("1", "x", "Food"))
            .is_none());
        assert_eq!(store.list(), before.as_slice());
        assert_eq!(store.total().value(), dec("10"));
    }

    #[test]
    fn test_update_blank_fields_is_noop() {
        let mut store = store();
        let a = store.add(ExpenseInput::new("10", "a", "Food")).unwrap();
        assert!(store.update(a.id(), ExpenseInput::new("", "a", "Food")).is_none());
        assert_eq!(store.get(a.id()).unwrap(), &a);
        assert_eq!(store.total().value(), dec("10"));
    }

    #[test]
    fn test_delete() {
        let mut store = store();
        let a = store.add(ExpenseInput::new("10", "a", "Food")).unwrap();
        store.add(ExpenseInput::new("2", "b", "Food")).unwrap();
        assert!(store.delete("nope").is_none());
        assert_eq!(store.len(), 2);
        assert_eq!(store.delete(a.id()).unwrap(), a);
        assert_eq!(store.len(), 1);
        assert_eq!(store.total().value(), dec("2"));
        assert!(store.get(a.id()).is_none());
    }

    #[test]
    fn test_unparseable_amount_counts_as_zero() {
        let mut store = store();
        let a = store.add(ExpenseInput::new("abc", "mystery", "Food")).unwrap();
        assert!(a.amount().is_zero());
        store.add(ExpenseInput::new("7", "b", "Food")).unwrap();
        assert_eq!(store.total().value(), dec("7"));
        store.update(a.id(), ExpenseInput::new("3", "fixed", "Food"));
        assert_eq!(store.total().value(), dec("10"));
    }

    #[test]
    fn test_total_invariant_over_mixed_operations() {
        let mut store = store();
        let amounts = ["12.50", "3", "0.99", "-2", "100", "abc", "7.25", "40"];
        let mut ids = Vec::new();
        for (ix, amount) in amounts.iter().enumerate() {
            if let Some(e) = store.add(ExpenseInput::new(*amount, format!("e{ix}"), "Food")) {
                ids.push(e.id().to_string());
            }
            assert_total_matches(&store);

            // edit an older expense, then delete one every third round
            let target = ids[(ix * 7) % ids.len()].clone();
            store.update(&target, ExpenseInput::new(format!("{ix}.5"), "edit", "Bills"));
            assert_total_matches(&store);
            if ix % 3 == 2 {
                let victim = ids.remove(ix % ids.len());
                store.delete(&victim);
                assert_total_matches(&store);
            }
            store.delete("unknown");
            store.update("unknown", ExpenseInput::new("99", "x", "Food"));
            assert_total_matches(&store);
        }
    }

    #[test]
    fn test_overflowing_total_is_refused() {
        let max = "79228162514264337593543950335";
        let mut store = store();
        let first = store.add(ExpenseInput::new(max, "a", "Food")).unwrap();
        assert!(store.add(ExpenseInput::new(max, "b", "Food")).is_none());
        assert_eq!(store.len(), 1);
        assert_total_matches(&store);

        let small = store.add(ExpenseInput::new("-5", "refund", "Food")).unwrap();
        assert!(store
            .update(small.id(), ExpenseInput::new(max, "refund", "Food"))
            .is_none());
        assert_eq!(store.get(small.id()).unwrap().amount().value(), dec("-5"));
        assert_total_matches(&store);

        let negative = store.add(ExpenseInput::new("-1", "c", "Food")).unwrap();
        store.delete(small.id()).unwrap();
        store.add(ExpenseInput::new("1", "d", "Food")).unwrap();
        assert!(store.delete(negative.id()).is_none());
        assert_eq!(store.len(), 3);
        assert_total_matches(&store);

        store.delete(first.id()).unwrap();
        assert_total_matches(&store);
    }
}
