use std::str::FromStr;

use thiserror::Error;

/// Fixed set of expense classifications.
///
/// Variant order is the reporting order: totals are grouped in an ordered map
/// keyed by category, so `Ord` follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Groceries,
    Travel,
    Clothing,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Groceries,
        Category::Travel,
        Category::Clothing,
        Category::Entertainment,
        Category::Other,
    ];

    /// Token accepted on input (matched after upper-casing).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "GROCERIES",
            Category::Travel => "TRAVEL",
            Category::Clothing => "CLOTHING",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Other => "OTHER",
        }
    }

    /// Human-readable name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Travel => "Travel",
            Category::Clothing => "Clothing",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_uppercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == token)
            .ok_or_else(|| ParseCategoryError(s.trim().to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);
