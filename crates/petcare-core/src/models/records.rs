//! Health records: vaccines, medications and appointments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{invalid, RecordResult};

/// A vaccine dose given to a pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaccineRecord {
    /// Record id
    pub id: String,
    /// Owning pet id
    pub pet_id: String,
    /// Vaccine name (e.g., "V10 (Múltipla)", "Antirrábica")
    pub name: String,
    /// Date the dose was administered
    pub administered_on: NaiveDate,
    /// Date the next dose is due
    pub next_due: NaiveDate,
    pub veterinarian: Option<String>,
    pub clinic: Option<String>,
    /// Manufacturer batch/lot
    pub batch: Option<String>,
    pub notes: Option<String>,
}

impl VaccineRecord {
    /// Create a new vaccine record with a generated id.
    pub fn new(pet_id: String, name: String, administered_on: NaiveDate, next_due: NaiveDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            pet_id,
            name,
            administered_on,
            next_due,
            veterinarian: None,
            clinic: None,
            batch: None,
            notes: None,
        }
    }

    /// Next dose must fall strictly after the administered date.
    pub fn validate(&self) -> RecordResult<()> {
        if self.next_due <= self.administered_on {
            return Err(invalid(
                &self.id,
                format!(
                    "next due {} is not after administered date {}",
                    self.next_due, self.administered_on
                ),
            ));
        }
        Ok(())
    }
}

/// Prescription vs. routine preventive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MedicationKind {
    Prescription,
    #[default]
    Preventive,
}

impl MedicationKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "prescription" => Some(MedicationKind::Prescription),
            "preventive" => Some(MedicationKind::Preventive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationKind::Prescription => "prescription",
            MedicationKind::Preventive => "preventive",
        }
    }
}

/// Therapeutic category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationCategory {
    Antibiotic,
    AntiInflammatory,
    FleaTick,
    Deworming,
    Heartworm,
    #[default]
    Other,
}

impl MedicationCategory {
    /// Parse a kebab-case category; unknown values map to `Other`.
    pub fn parse_or_default(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "antibiotic" => MedicationCategory::Antibiotic,
            "anti-inflammatory" => MedicationCategory::AntiInflammatory,
            "flea-tick" => MedicationCategory::FleaTick,
            "deworming" => MedicationCategory::Deworming,
            "heartworm" => MedicationCategory::Heartworm,
            _ => MedicationCategory::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationCategory::Antibiotic => "antibiotic",
            MedicationCategory::AntiInflammatory => "anti-inflammatory",
            MedicationCategory::FleaTick => "flea-tick",
            MedicationCategory::Deworming => "deworming",
            MedicationCategory::Heartworm => "heartworm",
            MedicationCategory::Other => "other",
        }
    }
}

/// A course of medication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationRecord {
    /// Record id
    pub id: String,
    /// Owning pet id
    pub pet_id: String,
    /// Product name (e.g., "Bravecto")
    pub name: String,
    #[serde(default)]
    pub kind: MedicationKind,
    #[serde(default)]
    pub category: MedicationCategory,
    /// Free-text dosage ("1 tablet")
    pub dosage: String,
    /// Free-text frequency ("every 12h")
    pub frequency: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub veterinarian: Option<String>,
    pub notes: Option<String>,
    /// Inactive courses never produce reminders
    pub is_active: bool,
}

impl MedicationRecord {
    /// Create a new active medication course with a generated id.
    pub fn new(pet_id: String, name: String, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            pet_id,
            name,
            kind: MedicationKind::default(),
            category: MedicationCategory::default(),
            dosage: String::new(),
            frequency: String::new(),
            start_date,
            end_date,
            veterinarian: None,
            notes: None,
            is_active: true,
        }
    }

    /// End date may equal but not precede the start date.
    pub fn validate(&self) -> RecordResult<()> {
        if self.end_date < self.start_date {
            return Err(invalid(
                &self.id,
                format!("end date {} precedes start date {}", self.end_date, self.start_date),
            ));
        }
        Ok(())
    }
}

/// Appointment lifecycle as tracked by the UI layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

/// A vet or grooming appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub pet_id: String,
    pub date: NaiveDate,
    /// Local time of day as entered ("14:30")
    pub time: String,
    /// Appointment type ("consulta", "banho e tosa", ...)
    pub kind: String,
    pub veterinarian: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_vaccine_validate() {
        let ok = VaccineRecord::new("1".into(), "Antirrábica".into(), date(2024, 1, 15), date(2025, 1, 15));
        assert!(ok.validate().is_ok());

        let same_day = VaccineRecord::new("1".into(), "Antirrábica".into(), date(2024, 1, 15), date(2024, 1, 15));
        assert!(matches!(
            same_day.validate(),
            Err(crate::models::RecordError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_medication_validate() {
        let single_day = MedicationRecord::new("1".into(), "Cerenia".into(), date(2024, 1, 15), date(2024, 1, 15));
        assert!(single_day.validate().is_ok());
        assert!(single_day.is_active);

        let backwards = MedicationRecord::new("1".into(), "Cerenia".into(), date(2024, 1, 15), date(2024, 1, 14));
        assert!(backwards.validate().is_err());
    }

    #[test]
    fn test_category_kebab_case() {
        let json = serde_json::to_string(&MedicationCategory::FleaTick).unwrap();
        assert_eq!(json, "\"flea-tick\"");
        let parsed: MedicationCategory = serde_json::from_str("\"anti-inflammatory\"").unwrap();
        assert_eq!(parsed, MedicationCategory::AntiInflammatory);
        assert_eq!(MedicationCategory::parse_or_default(parsed.as_str()), parsed);
        assert_eq!(MedicationCategory::parse_or_default("homeopathy"), MedicationCategory::Other);
        assert_eq!(MedicationKind::parse("Prescription"), Some(MedicationKind::Prescription));
    }
}
