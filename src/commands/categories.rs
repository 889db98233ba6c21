//! Category command handlers: the category management screen.
//!
//! These only ever see the [`CategoryOps`] capability, never the expenses.

use crate::args::{AddCategoryArgs, CategoryIdArgs, CategoryNameArgs};
use crate::commands::{plural, Out};
use crate::model::{Category, CategoryStyle, Palette, COLORS, ICONS};
use crate::store::CategoryOps;
use crate::Result;
use anyhow::bail;

/// Appends a category. Color and icon default to the first entries of the palette.
///
/// # Errors
///
/// - Returns an error if the name is empty after trimming.
pub fn add_category(
    categories: &mut impl CategoryOps,
    args: AddCategoryArgs,
) -> Result<Out<Category>> {
    let name = args.name.trim();
    if name.is_empty() {
        bail!("Please enter a category name");
    }
    let color = args.color.as_deref().unwrap_or(COLORS[0]);
    let icon = args.icon.as_deref().unwrap_or(ICONS[0]);
    let category = categories.add(name, color, icon);
    Ok(Out::new("Category added successfully", category))
}

/// Removes a category by id. Expenses that use its name keep it and fall back to the default
/// style. An unknown id changes nothing.
pub fn delete_category(
    categories: &mut impl CategoryOps,
    args: CategoryIdArgs,
) -> Result<Out<Category>> {
    Ok(match categories.delete(&args.id) {
        Some(category) => Out::new(format!("Deleted category {}", category.name()), category),
        None => format!("No category with id {}", args.id).into(),
    })
}

pub fn list_categories(categories: &impl CategoryOps) -> Result<Out<Vec<Category>>> {
    let list = categories.list().to_vec();
    let count = list.len();
    Ok(Out::new(
        format!("{count} categor{}", plural(count, "y", "ies")),
        list,
    ))
}

/// The color and icon used for expenses tagged `name`.
pub fn lookup_category(
    categories: &impl CategoryOps,
    args: CategoryNameArgs,
) -> Result<Out<CategoryStyle>> {
    let style = categories.lookup(&args.name);
    Ok(Out::new(
        format!("'{}' is drawn as {} {}", args.name, style.color, style.icon),
        style,
    ))
}

/// The colors and icons offered for new categories.
pub fn palette() -> Result<Out<Palette>> {
    let palette = Palette::default();
    Ok(Out::new(
        format!(
            "{} colors and {} icons",
            palette.colors.len(),
            palette.icons.len()
        ),
        palette,
    ))
}
