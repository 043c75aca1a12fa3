//! Nutrition: ideal weight, daily energy needs and food portions.

mod calculator;
mod foods;

pub use calculator::*;
pub use foods::*;

use thiserror::Error;

/// Nutrition errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NutritionError {
    #[error("Invalid weight: {0} kg")]
    InvalidWeight(f64),

    #[error("Unknown food brand: {0}")]
    UnknownBrand(String),

    #[error("Food energy density must be positive")]
    InvalidFoodEnergy,

    #[error("Meals per day must be at least 1")]
    InvalidMealCount,
}

pub type NutritionResult<T> = Result<T, NutritionError>;
