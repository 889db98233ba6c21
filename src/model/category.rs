use serde::{Deserialize, Serialize};

/// The colors offered when creating a category.
pub const COLORS: [&str; 12] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFD93D", "#FF8066", "#6C63FF", "#FF4081",
    "#7C4DFF", "#64B5F6", "#81C784", "#FFB74D",
];

/// The icons offered when creating a category.
pub const ICONS: [&str; 12] = [
    "shopping-bag",
    "fastfood",
    "directions-car",
    "home",
    "movie",
    "fitness-center",
    "medical-services",
    "pets",
    "school",
    "work",
    "sports-esports",
    "more-horiz",
];

/// Used for expenses whose category name matches no category.
pub const FALLBACK_COLOR: &str = "#FFD93D";
pub const FALLBACK_ICON: &str = "more-horiz";

/// The name given to new expenses when no categories are left to pick from.
pub const FALLBACK_CATEGORY_NAME: &str = "Other";

/// A tag with display color and icon.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Category {
    id: String,
    name: String,
    color: String,
    icon: String,
}

impl Category {
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn style(&self) -> CategoryStyle {
        CategoryStyle {
            color: self.color.clone(),
            icon: self.icon.clone(),
        }
    }
}

/// How an expense's category is drawn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CategoryStyle {
    pub color: String,
    pub icon: String,
}

impl CategoryStyle {
    pub fn fallback() -> Self {
        Self {
            color: FALLBACK_COLOR.to_string(),
            icon: FALLBACK_ICON.to_string(),
        }
    }
}

/// A category definition without an id, as written in `config.json`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CategorySeed {
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl CategorySeed {
    pub fn new(name: &str, color: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// The five built-in categories.
pub fn default_categories() -> Vec<CategorySeed> {
    vec![
        CategorySeed::new("Food", "#FF6B6B", "fastfood"),
        CategorySeed::new("Transport", "#4ECDC4", "directions-car"),
        CategorySeed::new("Shopping", "#45B7D1", "shopping-bag"),
        CategorySeed::new("Bills", "#96CEB4", "home"),
        CategorySeed::new("Other", "#FFD93D", "more-horiz"),
    ]
}

/// The selectable colors and icons, serialized for clients that build a category form.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Palette {
    pub colors: Vec<&'static str>,
    pub icons: Vec<&'static str>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: COLORS.to_vec(),
            icons: ICONS.to_vec(),
        }
    }
}
