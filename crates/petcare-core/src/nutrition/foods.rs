//! Commercial food catalog and portion sizing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Species;

use super::{NutritionError, NutritionResult};

/// One product line of a brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodLine {
    pub name: String,
    /// Crude protein %
    pub protein_pct: f64,
    /// Crude fat %
    pub fat_pct: f64,
    /// Crude fiber %
    pub fiber_pct: f64,
    /// Metabolizable energy, kcal per kg of food
    pub kcal_per_kg: u32,
}

impl FoodLine {
    pub fn new(name: &str, protein_pct: f64, fat_pct: f64, fiber_pct: f64, kcal_per_kg: u32) -> Self {
        Self {
            name: name.to_string(),
            protein_pct,
            fat_pct,
            fiber_pct,
            kcal_per_kg,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct BrandLines {
    dog: Vec<FoodLine>,
    cat: Vec<FoodLine>,
}

/// Brand → species → product lines.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    brands: HashMap<String, BrandLines>,
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodCatalog {
    /// Create a catalog with the default brands.
    pub fn new() -> Self {
        Self {
            brands: Self::default_brands(),
        }
    }

    /// Product lines of `brand` for `species`. A known brand with no lines
    /// for the species yields an empty slice.
    pub fn lines(&self, brand: &str, species: Species) -> NutritionResult<&[FoodLine]> {
        let wanted = brand.trim().to_lowercase();
        let lines = self
            .brands
            .iter()
            .find(|(name, _)| name.to_lowercase() == wanted)
            .map(|(_, lines)| lines)
            .ok_or_else(|| NutritionError::UnknownBrand(brand.trim().to_string()))?;

        Ok(match species {
            Species::Dog => &lines.dog,
            Species::Cat => &lines.cat,
        })
    }

    /// Find a single product line by brand and name (case-insensitive).
    pub fn find(&self, brand: &str, species: Species, line: &str) -> NutritionResult<Option<&FoodLine>> {
        let wanted = line.trim().to_lowercase();
        Ok(self
            .lines(brand, species)?
            .iter()
            .find(|l| l.name.to_lowercase() == wanted))
    }

    /// Brand names, sorted.
    pub fn brands(&self) -> Vec<String> {
        let mut names: Vec<String> = self.brands.keys().cloned().collect();
        names.sort();
        names
    }

    /// Add a product line, creating the brand if needed.
    pub fn add_line(&mut self, brand: &str, species: Species, line: FoodLine) {
        let entry = self.brands.entry(brand.trim().to_string()).or_default();
        match species {
            Species::Dog => entry.dog.push(line),
            Species::Cat => entry.cat.push(line),
        }
    }

    fn default_brands() -> HashMap<String, BrandLines> {
        let mut map = HashMap::new();

        map.insert(
            "Royal Canin".to_string(),
            BrandLines {
                dog: vec![
                    FoodLine::new("Golden Retriever Adult", 23.0, 12.0, 3.9, 4000),
                    FoodLine::new("Labrador Adult", 25.0, 11.0, 3.8, 3950),
                    FoodLine::new("German Shepherd Adult", 24.0, 12.0, 4.2, 3980),
                    FoodLine::new("Mini Adult", 27.0, 16.0, 2.5, 4100),
                    FoodLine::new("Medium Adult", 25.0, 14.0, 2.8, 4050),
                    FoodLine::new("Maxi Adult", 26.0, 13.0, 3.1, 4000),
                    FoodLine::new("Digestive Care", 24.0, 12.0, 4.5, 3900),
                    FoodLine::new("Weight Care", 28.0, 9.0, 6.5, 3650),
                ],
                cat: vec![
                    FoodLine::new("Persian Adult", 30.0, 22.0, 5.2, 4200),
                    FoodLine::new("British Shorthair Adult", 31.0, 19.0, 4.8, 4150),
                    FoodLine::new("Indoor Adult", 27.0, 13.0, 6.1, 3900),
                    FoodLine::new("Sterilised", 37.0, 12.0, 6.4, 3750),
                    FoodLine::new("Digestive Care", 38.0, 15.0, 5.8, 3950),
                    FoodLine::new("Hairball Care", 34.0, 15.0, 6.9, 3900),
                ],
            },
        );

        map.insert(
            "Hill's".to_string(),
            BrandLines {
                dog: vec![
                    FoodLine::new("Science Diet Adult", 21.0, 13.0, 3.5, 4000),
                    FoodLine::new("Prescription Diet i/d", 25.5, 14.9, 2.5, 4120),
                    FoodLine::new("Prescription Diet r/d", 35.9, 8.5, 11.0, 3200),
                    FoodLine::new("Prescription Diet k/d", 14.2, 18.3, 2.5, 4120),
                    FoodLine::new("Science Diet Small Paws", 24.5, 15.5, 3.0, 4150),
                ],
                cat: vec![
                    FoodLine::new("Science Diet Adult", 32.0, 20.0, 3.0, 4200),
                    FoodLine::new("Prescription Diet i/d", 38.4, 15.5, 1.4, 4120),
                    FoodLine::new("Prescription Diet r/d", 39.9, 8.9, 8.5, 3200),
                    FoodLine::new("Prescription Diet k/d", 28.6, 19.4, 1.4, 4120),
                    FoodLine::new("Science Diet Indoor", 35.2, 15.2, 6.9, 3900),
                ],
            },
        );

        map.insert(
            "Premier".to_string(),
            BrandLines {
                dog: vec![
                    FoodLine::new("Golden Formula", 24.0, 14.0, 4.0, 4050),
                    FoodLine::new("Ambientes Internos", 26.0, 12.0, 4.5, 3950),
                    FoodLine::new("Raças Pequenas", 28.0, 16.0, 3.5, 4200),
                    FoodLine::new("Sênior", 22.0, 10.0, 5.0, 3800),
                ],
                cat: vec![
                    FoodLine::new("Ambientes Internos", 33.0, 12.0, 6.0, 3900),
                    FoodLine::new("Castrados", 35.0, 10.0, 7.0, 3750),
                    FoodLine::new("Sênior", 30.0, 12.0, 5.5, 3850),
                ],
            },
        );

        map.insert(
            "Pedigree".to_string(),
            BrandLines {
                dog: vec![
                    FoodLine::new("Adulto", 21.0, 8.0, 4.0, 3600),
                    FoodLine::new("Raças Pequenas", 24.0, 10.0, 3.5, 3750),
                    FoodLine::new("Sênior", 20.0, 7.0, 4.5, 3500),
                ],
                cat: Vec::new(),
            },
        );

        map.insert(
            "Whiskas".to_string(),
            BrandLines {
                dog: Vec::new(),
                cat: vec![
                    FoodLine::new("Adulto", 32.0, 13.0, 4.0, 3950),
                    FoodLine::new("Castrado", 34.0, 11.0, 5.0, 3800),
                    FoodLine::new("Sênior", 30.0, 12.0, 4.5, 3750),
                ],
            },
        );

        map
    }
}

/// Grams of food per day that supply `daily_kcal`.
pub fn daily_food_grams(daily_kcal: u32, food_kcal_per_kg: u32) -> NutritionResult<u32> {
    if food_kcal_per_kg == 0 {
        return Err(NutritionError::InvalidFoodEnergy);
    }
    Ok((f64::from(daily_kcal) / f64::from(food_kcal_per_kg) * 1000.0).round() as u32)
}

/// Grams per meal when the daily amount is split evenly.
pub fn meal_portion_grams(daily_grams: u32, meals_per_day: u32) -> NutritionResult<u32> {
    if meals_per_day == 0 {
        return Err(NutritionError::InvalidMealCount);
    }
    Ok((f64::from(daily_grams) / f64::from(meals_per_day)).round() as u32)
}
