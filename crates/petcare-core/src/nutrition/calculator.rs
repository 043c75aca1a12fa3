//! Weight and calorie calculator.
//!
//! Resting energy: `70 * ideal_weight^0.75`, scaled by an activity/neuter
//! multiplier and an age factor (×2 under 12 months, ×0.8 over 84 months).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::age_in_months;
use crate::models::{ActivityLevel, Pet, Species};

use super::{NutritionError, NutritionResult};

/// Ideal-weight range used when a dog breed is not in the table.
pub const DEFAULT_DOG_WEIGHT_RANGE: (f64, f64) = (10.0, 30.0);

/// Average adult cat weights (kg).
const CAT_IDEAL_NEUTERED: f64 = 4.5;
const CAT_IDEAL_INTACT: f64 = 4.0;

/// Age thresholds in months.
const JUVENILE_UNDER_MONTHS: i64 = 12;
const SENIOR_OVER_MONTHS: i64 = 84;

/// Dog breed → (min, max) adult weight in kg.
const DOG_BREED_WEIGHTS: &[(&str, f64, f64)] = &[
    ("Golden Retriever", 25.0, 34.0),
    ("Labrador", 25.0, 36.0),
    ("German Shepherd", 22.0, 40.0),
    ("Poodle", 20.0, 32.0),
    ("Bulldog", 18.0, 25.0),
    ("Beagle", 9.0, 11.0),
    ("Yorkshire", 2.0, 3.2),
    ("Chihuahua", 1.5, 3.0),
];

/// Body condition relative to ideal weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightStatus {
    UnderWeight,
    IdealWeight,
    OverWeight,
    Obese,
}

impl WeightStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightStatus::UnderWeight => "under_weight",
            WeightStatus::IdealWeight => "ideal_weight",
            WeightStatus::OverWeight => "over_weight",
            WeightStatus::Obese => "obese",
        }
    }
}

/// Everything the nutrition view shows for one pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionAssessment {
    pub pet_id: String,
    pub age_months: i64,
    pub ideal_weight_kg: f64,
    pub daily_calories: u32,
    /// Signed deviation from ideal weight in percent
    pub deviation_pct: f64,
    pub weight_status: WeightStatus,
}

/// Look up the adult weight range for a dog breed (case-insensitive).
pub fn breed_weight_range(breed: &str) -> Option<(f64, f64)> {
    let wanted = breed.trim().to_lowercase();
    DOG_BREED_WEIGHTS
        .iter()
        .find(|(name, _, _)| name.to_lowercase() == wanted)
        .map(|&(_, min, max)| (min, max))
}

/// Ideal weight in kg.
///
/// Dogs: midpoint of the breed range, or of [`DEFAULT_DOG_WEIGHT_RANGE`] for
/// unknown breeds. Cats: a fixed average depending on neuter status.
pub fn ideal_weight(pet: &Pet) -> f64 {
    match pet.species {
        Species::Dog => {
            let (min, max) = breed_weight_range(&pet.breed).unwrap_or(DEFAULT_DOG_WEIGHT_RANGE);
            (min + max) / 2.0
        }
        Species::Cat => {
            if pet.neutered {
                CAT_IDEAL_NEUTERED
            } else {
                CAT_IDEAL_INTACT
            }
        }
    }
}

/// Activity multiplier; neutered pets need less energy.
pub fn activity_multiplier(activity: ActivityLevel, neutered: bool) -> f64 {
    match (activity, neutered) {
        (ActivityLevel::Low, true) => 1.2,
        (ActivityLevel::Low, false) => 1.4,
        (ActivityLevel::Moderate, true) => 1.4,
        (ActivityLevel::Moderate, false) => 1.6,
        (ActivityLevel::High, true) => 1.6,
        (ActivityLevel::High, false) => 1.8,
    }
}

/// Age factor: growing pets double, seniors take 80%.
pub fn age_factor(age_months: i64) -> f64 {
    if age_months < JUVENILE_UNDER_MONTHS {
        2.0
    } else if age_months > SENIOR_OVER_MONTHS {
        0.8
    } else {
        1.0
    }
}

/// Daily energy requirement in kcal.
pub fn daily_calories(pet: &Pet, today: NaiveDate) -> NutritionResult<u32> {
    check_weight(pet.weight_kg)?;

    let base = (70.0 * ideal_weight(pet).powf(0.75)).round();
    let multiplier = activity_multiplier(pet.activity_level, pet.neutered);
    let age_months = age_in_months(pet.birth_date, today);

    Ok((base * multiplier * age_factor(age_months)).round() as u32)
}

/// Percentage deviation of actual weight from ideal weight.
pub fn weight_deviation_pct(pet: &Pet) -> NutritionResult<f64> {
    check_weight(pet.weight_kg)?;
    let ideal = ideal_weight(pet);
    Ok((pet.weight_kg - ideal) / ideal * 100.0)
}

/// Classify body weight: >20% over is obese, >10% over is overweight,
/// more than 10% under is underweight.
pub fn weight_status(pet: &Pet) -> NutritionResult<WeightStatus> {
    let pct = weight_deviation_pct(pet)?;
    let status = if pct > 20.0 {
        WeightStatus::Obese
    } else if pct > 10.0 {
        WeightStatus::OverWeight
    } else if pct < -10.0 {
        WeightStatus::UnderWeight
    } else {
        WeightStatus::IdealWeight
    };
    Ok(status)
}

/// Full assessment for one pet.
pub fn assess(pet: &Pet, today: NaiveDate) -> NutritionResult<NutritionAssessment> {
    Ok(NutritionAssessment {
        pet_id: pet.id.clone(),
        age_months: age_in_months(pet.birth_date, today),
        ideal_weight_kg: ideal_weight(pet),
        daily_calories: daily_calories(pet, today)?,
        deviation_pct: weight_deviation_pct(pet)?,
        weight_status: weight_status(pet)?,
    })
}

fn check_weight(weight_kg: f64) -> NutritionResult<()> {
    if weight_kg.is_finite() && weight_kg > 0.0 {
        Ok(())
    } else {
        Err(NutritionError::InvalidWeight(weight_kg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dog(breed: &str, weight: f64, birth: NaiveDate) -> Pet {
        Pet::new("Rex".into(), Species::Dog, breed.into(), birth, weight)
    }

    fn cat(neutered: bool) -> Pet {
        let mut pet = Pet::new("Mia".into(), Species::Cat, "Persian".into(), date(2021, 5, 10), 4.2);
        pet.neutered = neutered;
        pet
    }

    #[test]
    fn test_ideal_weight_by_breed() {
        let today = date(2022, 3, 15);
        assert_eq!(ideal_weight(&dog("Golden Retriever", 30.0, today)), 29.5);
        assert_eq!(ideal_weight(&dog("golden retriever", 30.0, today)), 29.5);
        assert_eq!(ideal_weight(&dog("Chihuahua", 2.0, today)), 2.25);
        assert_eq!(ideal_weight(&dog("Vira-lata", 15.0, today)), 20.0);
    }

    #[test]
    fn test_ideal_weight_cats() {
        assert_eq!(ideal_weight(&cat(true)), 4.5);
        assert_eq!(ideal_weight(&cat(false)), 4.0);
    }

    #[test]
    fn test_daily_calories_adult() {
        let pet = dog("Golden Retriever", 29.5, date(2022, 3, 15));
        // base round(70 * 29.5^0.75) = 886, moderate intact x1.6
        assert_eq!(daily_calories(&pet, date(2024, 3, 1)).unwrap(), 1418);
    }

    #[test]
    fn test_daily_calories_age_factors() {
        let puppy = dog("Golden Retriever", 10.0, date(2023, 12, 1));
        assert_eq!(daily_calories(&puppy, date(2024, 3, 1)).unwrap(), 2835);

        let senior = dog("Golden Retriever", 29.5, date(2015, 1, 1));
        assert_eq!(daily_calories(&senior, date(2024, 3, 1)).unwrap(), 1134);
    }

    #[test]
    fn test_daily_calories_neutered_cat() {
        let mut pet = cat(true);
        pet.activity_level = ActivityLevel::Low;
        // base round(70 * 4.5^0.75) = 216, low neutered x1.2
        assert_eq!(daily_calories(&pet, date(2024, 3, 1)).unwrap(), 259);
    }

    #[test]
    fn test_weight_status_thresholds() {
        let birth = date(2022, 3, 15);
        assert_eq!(weight_status(&dog("Golden Retriever", 36.0, birth)).unwrap(), WeightStatus::Obese);
        assert_eq!(weight_status(&dog("Golden Retriever", 33.0, birth)).unwrap(), WeightStatus::OverWeight);
        assert_eq!(weight_status(&dog("Golden Retriever", 29.5, birth)).unwrap(), WeightStatus::IdealWeight);
        assert_eq!(weight_status(&dog("Golden Retriever", 27.0, birth)).unwrap(), WeightStatus::IdealWeight);
        assert_eq!(weight_status(&dog("Golden Retriever", 25.0, birth)).unwrap(), WeightStatus::UnderWeight);
    }

    #[test]
    fn test_invalid_weight() {
        let pet = dog("Beagle", -1.0, date(2022, 3, 15));
        assert_eq!(weight_status(&pet), Err(NutritionError::InvalidWeight(-1.0)));
        assert!(daily_calories(&pet, date(2024, 3, 1)).is_err());
        assert!(assess(&pet, date(2024, 3, 1)).is_err());
    }

    #[test]
    fn test_assess() {
        let pet = dog("Beagle", 10.5, date(2022, 3, 15));
        let assessment = assess(&pet, date(2024, 3, 1)).unwrap();
        assert_eq!(assessment.ideal_weight_kg, 10.0);
        assert_eq!(assessment.age_months, 24);
        assert!((assessment.deviation_pct - 5.0).abs() < 1e-9);
        assert_eq!(assessment.weight_status, WeightStatus::IdealWeight);
    }
}
