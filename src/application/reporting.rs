use crate::domain::{Category, Cents};

/// Per-category spending plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    /// Only categories with at least one expense, in category order
    pub categories: Vec<CategorySummary>,
    pub total: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub total: Cents,
}
