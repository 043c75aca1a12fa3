//! Pet models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{invalid, RecordResult};

/// Supported species.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    /// Parse a species name ("dog", "Canine", "cat", "feline").
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dog" | "canine" => Some(Species::Dog),
            "cat" | "feline" => Some(Species::Cat),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

/// Daily activity level, used by the calorie multiplier matrix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    #[default]
    Moderate,
    High,
}

impl ActivityLevel {
    /// Parse an activity level; unknown values fall back to moderate.
    pub fn parse_or_default(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "low" => ActivityLevel::Low,
            "high" => ActivityLevel::High,
            _ => ActivityLevel::Moderate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
        }
    }
}

/// A pet as held by the caller's record store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    /// Record id
    pub id: String,
    /// Display name
    pub name: String,
    pub species: Species,
    /// Breed name as entered (matched against the ideal-weight table)
    pub breed: String,
    pub birth_date: NaiveDate,
    /// Weight in kg
    pub weight_kg: f64,
    /// Owner name
    pub owner: Option<String>,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub neutered: bool,
    #[serde(default)]
    pub health_conditions: Vec<String>,
}

impl Pet {
    /// Create a new pet with a generated id.
    pub fn new(
        name: String,
        species: Species,
        breed: String,
        birth_date: NaiveDate,
        weight_kg: f64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            species,
            breed,
            birth_date,
            weight_kg,
            owner: None,
            activity_level: ActivityLevel::default(),
            neutered: false,
            health_conditions: Vec::new(),
        }
    }

    /// Check the record invariants: positive weight, birth date not in the future.
    pub fn validate(&self, today: NaiveDate) -> RecordResult<()> {
        if self.weight_kg.is_nan() || self.weight_kg <= 0.0 {
            return Err(invalid(&self.id, format!("weight must be positive, got {}", self.weight_kg)));
        }
        if self.birth_date > today {
            return Err(invalid(&self.id, format!("birth date {} is in the future", self.birth_date)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rex() -> Pet {
        Pet::new(
            "Rex".into(),
            Species::Dog,
            "Golden Retriever".into(),
            NaiveDate::from_ymd_opt(2022, 3, 15).unwrap(),
            25.5,
        )
    }

    #[test]
    fn test_new_pet() {
        let pet = rex();
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.activity_level, ActivityLevel::Moderate);
        assert!(!pet.neutered);
        assert_eq!(pet.id.len(), 36); // UUID format
    }

    #[test]
    fn test_species_parse() {
        assert_eq!(Species::parse("Dog"), Some(Species::Dog));
        assert_eq!(Species::parse("canine"), Some(Species::Dog));
        assert_eq!(Species::parse("FELINE"), Some(Species::Cat));
        assert_eq!(Species::parse("equine"), None);
    }

    #[test]
    fn test_activity_fallback() {
        assert_eq!(ActivityLevel::parse_or_default("HIGH"), ActivityLevel::High);
        assert_eq!(ActivityLevel::parse_or_default(""), ActivityLevel::Moderate);
    }

    #[test]
    fn test_validate() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(rex().validate(today).is_ok());

        let mut pet = rex();
        pet.weight_kg = 0.0;
        assert!(pet.validate(today).is_err());

        let mut pet = rex();
        pet.weight_kg = f64::NAN;
        assert!(pet.validate(today).is_err());

        let mut pet = rex();
        pet.birth_date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert!(pet.validate(today).is_err());
    }

    #[test]
    fn test_serde_lowercase_enums() {
        let json = serde_json::to_string(&rex()).unwrap();
        assert!(json.contains("\"species\":\"dog\""));
        assert!(json.contains("\"activity_level\":\"moderate\""));
        assert!(json.contains("\"birth_date\":\"2022-03-15\""));
    }
}
