use crate::types::category::Category;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// One or more of the required categories (top, bottom, shoes) has no items.
    #[error("Wardrobe is missing required categories: {}", join_categories(.missing))]
    InsufficientWardrobe { missing: Vec<Category> },

    #[error("Malformed weather observation: {0}")]
    MalformedWeather(MalformedWeather),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedWeather {
    #[error("temperature is missing or not a finite number")]
    MissingTemperature,
    #[error("condition label is empty")]
    MissingCondition,
}

impl SelectionError {
    /// The empty required categories, if this is an insufficient-wardrobe error.
    pub fn missing_categories(&self) -> &[Category] {
        match self {
            SelectionError::InsufficientWardrobe { missing } => missing,
            SelectionError::MalformedWeather(_) => &[],
        }
    }
}

fn join_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
