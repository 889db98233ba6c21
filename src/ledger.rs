use crate::history::History;
use crate::model::{
    default_categories, Amount, CategorySeed, CategoryStyle, Expense, ExpenseInput,
    FALLBACK_CATEGORY_NAME,
};
use crate::store::{CategoryOps, CategoryStore, ExpenseStore};
use crate::Clock;

/// The single owner of all expense and category state.
///
/// Views never hold the stores. They either go through the mutators here, borrow the category
/// capability from [`Ledger::categories_mut`], or take a [`History`] snapshot.
#[derive(Debug, Clone)]
pub struct Ledger {
    expenses: ExpenseStore,
    categories: CategoryStore,
    clock: Clock,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new(&default_categories(), Clock::System)
    }
}

impl Ledger {
    pub fn new(seeds: &[CategorySeed], clock: Clock) -> Self {
        Self {
            expenses: ExpenseStore::new(clock),
            categories: CategoryStore::new(seeds, clock),
            clock,
        }
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn add_expense(&mut self, input: ExpenseInput) -> Option<Expense> {
        self.expenses.add(input)
    }

    pub fn update_expense(&mut self, id: &str, input: ExpenseInput) -> Option<Expense> {
        self.expenses.update(id, input)
    }

    pub fn delete_expense(&mut self, id: &str) -> Option<Expense> {
        self.expenses.delete(id)
    }

    pub fn expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.get(id)
    }

    /// Newest first.
    pub fn expenses(&self) -> &[Expense] {
        self.expenses.list()
    }

    /// The running total of every current expense.
    pub fn total(&self) -> Amount {
        self.expenses.total()
    }

    pub fn categories(&self) -> &CategoryStore {
        &self.categories
    }

    /// The narrow interface handed to the category screen.
    pub fn categories_mut(&mut self) -> &mut impl CategoryOps {
        &mut self.categories
    }

    /// How `expense` should be drawn, falling back when its category no longer exists.
    pub fn style_of(&self, expense: &Expense) -> CategoryStyle {
        self.categories.lookup(expense.category())
    }

    /// The category preselected for a new expense.
    pub fn default_category(&self) -> String {
        self.categories
            .list()
            .first()
            .map(|c| c.name().to_string())
            .unwrap_or_else(|| FALLBACK_CATEGORY_NAME.to_string())
    }

    pub fn history(&self) -> History {
        History::snapshot(self.expenses.list(), self.clock.now())
    }
}
