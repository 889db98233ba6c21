//! Types that represent the core data model, such as `Expense` and `Category`.
mod amount;
mod category;
mod expense;
mod id;

pub use amount::{Amount, AmountError, AmountFormat};
pub use category::{
    default_categories, Category, CategorySeed, CategoryStyle, Palette, COLORS,
    FALLBACK_CATEGORY_NAME, FALLBACK_COLOR, FALLBACK_ICON, ICONS,
};
pub use expense::{Expense, ExpenseInput};
pub(crate) use id::IdGenerator;
