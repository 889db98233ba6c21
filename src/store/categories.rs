use crate::model::{Category, CategorySeed, CategoryStyle, IdGenerator};
use crate::Clock;
use tracing::debug;

/// What a category screen is allowed to do with the categories. It never sees expenses.
pub trait CategoryOps {
    /// Appends a category and returns it. Callers check the name first.
    fn add(&mut self, name: &str, color: &str, icon: &str) -> Category;

    /// Removes the category with `id`. Expenses tagged with its name are left alone.
    fn delete(&mut self, id: &str) -> Option<Category>;

    /// The style of the category named `name`, or the fallback style.
    fn lookup(&self, name: &str) -> CategoryStyle;

    /// In insertion order.
    fn list(&self) -> &[Category];
}

/// The ordered list of categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    categories: Vec<Category>,
    ids: IdGenerator,
    clock: Clock,
}

impl CategoryStore {
    /// Seeds the store with `seeds`, numbering them `1..=n`. Later ids are always above `n`.
    pub fn new(seeds: &[CategorySeed], clock: Clock) -> Self {
        let categories = seeds
            .iter()
            .enumerate()
            .map(|(ix, seed)| {
                Category::new((ix + 1).to_string(), &seed.name, &seed.color, &seed.icon)
            })
            .collect();
        Self {
            categories,
            ids: IdGenerator::starting_after(seeds.len() as i64),
            clock,
        }
    }

    pub fn find(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }
}

impl CategoryOps for CategoryStore {
    fn add(&mut self, name: &str, color: &str, icon: &str) -> Category {
        let category = Category::new(self.ids.next(self.clock.now()), name, color, icon);
        debug!("Adding category '{name}' with id {}", category.id());
        self.categories.push(category.clone());
        category
    }

    fn delete(&mut self, id: &str) -> Option<Category> {
        let Some(ix) = self.categories.iter().position(|c| c.id() == id) else {
            debug!("No category with id {id} to delete");
            return None;
        };
        Some(self.categories.remove(ix))
    }

    fn lookup(&self, name: &str) -> CategoryStyle {
        self.find(name)
            .map(Category::style)
            .unwrap_or_else(CategoryStyle::fallback)
    }

    fn list(&self) -> &[Category] {
        &self.categories
    }
}
