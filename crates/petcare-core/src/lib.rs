//! Petcare Core Library
//!
//! Reminder and status engine for pet health records: due-date classification,
//! next-dose scheduling, notification generation, nutrition and travel
//! certificates.
//!
//! # Architecture
//!
//! ```text
//!  caller-owned records (pets, vaccines, medications, appointments)
//!                               │
//!            ┌──────────────────┼──────────────────┐
//!            ▼                  ▼                  ▼
//!       Recurrence         Classifier          Nutrition
//!    (next due date)   (overdue / due soon)  (kcal, weight)
//!            │                  │
//!            └────────┬─────────┘
//!                     ▼
//!          Reminder generator ──► Notifications (JSON / FFI)
//!                     │
//!          Quick confirmation ──► new record + acknowledgement
//! ```
//!
//! # Core Principle
//!
//! **Every operation is a pure function of its inputs.** "Now" is always passed
//! in; the library holds no clock and no record store.
//!
//! # Modules
//!
//! - [`dates`]: calendar arithmetic and parsing
//! - [`models`]: domain types (Pet, VaccineRecord, MedicationRecord, Notification)
//! - [`schedule`]: due-status classifier and recurrence tables
//! - [`reminders`]: notification generation and dashboard queries
//! - [`nutrition`]: calorie calculator and food catalog
//! - [`protocols`]: vaccination protocols by species and age
//! - [`confirmation`]: quick confirmation of pending items
//! - [`travel`]: destination requirements and health certificates

pub mod confirmation;
pub mod dates;
pub mod models;
pub mod nutrition;
pub mod protocols;
pub mod reminders;
pub mod schedule;
pub mod travel;

// Re-export commonly used types
pub use confirmation::{Confirmation, ConfirmedItem, ConfirmedRecord, PendingItem};
pub use models::{
    ActivityLevel, Appointment, AppointmentStatus, MedicationCategory, MedicationKind,
    MedicationRecord, Notification, NotificationKind, Pet, Priority, Species, VaccineRecord,
};
pub use nutrition::FoodCatalog;
pub use reminders::ReminderPolicy;
pub use schedule::{classify, DueClassification, DueStatus, ItemKind, RecurrenceTable};
pub use travel::{Certificate, CertificateRequest};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::reminders::OVERDUE_ESCALATION_DAYS;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PetcareError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<dates::DateError> for PetcareError {
    fn from(e: dates::DateError) -> Self {
        PetcareError::InvalidDate(e.to_string())
    }
}

impl From<schedule::ScheduleError> for PetcareError {
    fn from(e: schedule::ScheduleError) -> Self {
        match e {
            schedule::ScheduleError::NotFound { ref suggestions, .. } if !suggestions.is_empty() => {
                PetcareError::NotFound(format!("{} (did you mean: {})", e, suggestions.join(", ")))
            }
            schedule::ScheduleError::NotFound { .. } => PetcareError::NotFound(e.to_string()),
            schedule::ScheduleError::Date(inner) => inner.into(),
        }
    }
}

impl From<nutrition::NutritionError> for PetcareError {
    fn from(e: nutrition::NutritionError) -> Self {
        match e {
            nutrition::NutritionError::UnknownBrand(_) => PetcareError::NotFound(e.to_string()),
            _ => PetcareError::InvalidInput(e.to_string()),
        }
    }
}

impl From<models::RecordError> for PetcareError {
    fn from(e: models::RecordError) -> Self {
        PetcareError::InvalidInput(e.to_string())
    }
}

impl From<travel::TravelError> for PetcareError {
    fn from(e: travel::TravelError) -> Self {
        match e {
            travel::TravelError::UnknownDestination(_) => PetcareError::NotFound(e.to_string()),
            travel::TravelError::Date(inner) => inner.into(),
            travel::TravelError::DepartureInPast { .. } => PetcareError::InvalidInput(e.to_string()),
        }
    }
}

impl From<confirmation::ConfirmationError> for PetcareError {
    fn from(e: confirmation::ConfirmationError) -> Self {
        match e {
            confirmation::ConfirmationError::Schedule(inner) => inner.into(),
            confirmation::ConfirmationError::Record(inner) => inner.into(),
            confirmation::ConfirmationError::AppliedInFuture { .. } => {
                PetcareError::InvalidInput(e.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for PetcareError {
    fn from(e: serde_json::Error) -> Self {
        PetcareError::SerializationError(e.to_string())
    }
}

fn parse_day(input: &str) -> Result<NaiveDate, PetcareError> {
    Ok(dates::parse_date(input)?)
}

fn parse_now(input: &str) -> Result<DateTime<Utc>, PetcareError> {
    Ok(dates::parse_instant(input)?)
}

fn parse_kind(input: &str) -> Result<ItemKind, PetcareError> {
    ItemKind::parse(input).ok_or_else(|| PetcareError::InvalidInput(format!("Unknown item kind: {}", input)))
}

fn parse_species(input: &str) -> Result<Species, PetcareError> {
    Species::parse(input).ok_or_else(|| PetcareError::InvalidInput(format!("Unknown species: {}", input)))
}

// =========================================================================
// Stateless Functions (exported to FFI)
// =========================================================================

/// Create an engine with the default recurrence tables, food catalog and policy.
#[uniffi::export]
pub fn create_engine() -> Arc<PetcareEngine> {
    Arc::new(PetcareEngine::default())
}

/// Create an engine whose reminder policy is read from JSON.
#[uniffi::export]
pub fn create_engine_with_policy(policy_json: String) -> Result<Arc<PetcareEngine>, PetcareError> {
    let policy = ReminderPolicy::from_json(&policy_json)?;
    Ok(Arc::new(PetcareEngine {
        policy,
        ..PetcareEngine::default()
    }))
}

/// Classify a due date against today.
///
/// Overdue items escalate to high priority after the default
/// `OVERDUE_ESCALATION_DAYS`; use `PetcareEngine::classify_due_date` to apply
/// an engine's policy instead.
#[uniffi::export]
pub fn classify_due_date(
    due: String,
    today: String,
    due_soon_days: u32,
) -> Result<FfiDueClassification, PetcareError> {
    let result = classify(parse_day(&due)?, parse_day(&today)?, due_soon_days);
    Ok(FfiDueClassification::new(result, OVERDUE_ESCALATION_DAYS))
}

/// Signed days from `from` to `to`.
#[uniffi::export]
pub fn days_between(from: String, to: String) -> Result<i64, PetcareError> {
    Ok(dates::days_between(parse_day(&from)?, parse_day(&to)?))
}

/// Add calendar months, clamping to the end of shorter months.
#[uniffi::export]
pub fn add_months(date: String, months: i32) -> Result<String, PetcareError> {
    Ok(dates::add_months(parse_day(&date)?, months)?.to_string())
}

// =========================================================================
// Main API Object
// =========================================================================

/// Immutable lookup tables plus reminder policy. Safe to share across threads.
#[derive(uniffi::Object, Default)]
pub struct PetcareEngine {
    recurrences: RecurrenceTable,
    foods: FoodCatalog,
    policy: ReminderPolicy,
}

#[uniffi::export]
impl PetcareEngine {
    // =========================================================================
    // Scheduling
    // =========================================================================

    /// Classify a due date, escalating overdue items per this engine's policy.
    pub fn classify_due_date(
        &self,
        due: String,
        today: String,
        due_soon_days: u32,
    ) -> Result<FfiDueClassification, PetcareError> {
        let result = classify(parse_day(&due)?, parse_day(&today)?, due_soon_days);
        Ok(FfiDueClassification::new(result, self.policy.overdue_escalation_days))
    }

    /// Next due date for a vaccine or medication applied on `applied_on`.
    pub fn next_due_date(
        &self,
        name: String,
        applied_on: String,
        kind: String,
    ) -> Result<String, PetcareError> {
        let next = self
            .recurrences
            .next_due(&name, parse_day(&applied_on)?, parse_kind(&kind)?)?;
        Ok(next.to_string())
    }

    /// Known names that look like `name`.
    pub fn suggest_names(&self, name: String, kind: String) -> Result<Vec<String>, PetcareError> {
        Ok(self.recurrences.suggest(&name, parse_kind(&kind)?))
    }

    // =========================================================================
    // Reminders
    // =========================================================================

    /// Generate notifications for a record snapshot, most urgent first.
    pub fn generate_notifications(
        &self,
        pets: Vec<FfiPet>,
        vaccines: Vec<FfiVaccine>,
        medications: Vec<FfiMedication>,
        now: String,
    ) -> Result<Vec<FfiNotification>, PetcareError> {
        let mut notifications = self.generate(pets, vaccines, medications, &now)?;
        reminders::sort_for_display(&mut notifications);
        Ok(notifications.into_iter().map(|n| n.into()).collect())
    }

    /// Same as [`Self::generate_notifications`], as a JSON array.
    pub fn generate_notifications_json(
        &self,
        pets: Vec<FfiPet>,
        vaccines: Vec<FfiVaccine>,
        medications: Vec<FfiMedication>,
        now: String,
    ) -> Result<String, PetcareError> {
        let mut notifications = self.generate(pets, vaccines, medications, &now)?;
        reminders::sort_for_display(&mut notifications);
        Ok(reminders::to_json(&notifications)?)
    }

    /// Vaccines due within the policy window, soonest first.
    pub fn upcoming_vaccines(
        &self,
        vaccines: Vec<FfiVaccine>,
        today: String,
    ) -> Result<Vec<FfiVaccine>, PetcareError> {
        let records = convert_all::<_, VaccineRecord>(vaccines)?;
        let upcoming = reminders::upcoming_vaccines(
            &records,
            parse_day(&today)?,
            self.policy.upcoming_vaccine_window_days,
        );
        Ok(upcoming.into_iter().cloned().map(|v| v.into()).collect())
    }

    /// Display status of a medication course: finished, expired, ending or active.
    pub fn medication_status(
        &self,
        medication: FfiMedication,
        today: String,
    ) -> Result<String, PetcareError> {
        let record = MedicationRecord::try_from(medication)?;
        let status = reminders::medication_status(
            &record,
            parse_day(&today)?,
            self.policy.medication_window_days,
        );
        Ok(status.as_str().to_string())
    }

    // =========================================================================
    // Quick Confirmation
    // =========================================================================

    /// Confirm that a pending item was applied, producing the new record.
    pub fn confirm_pending(
        &self,
        pending: FfiPendingItem,
        applied_on: String,
        manual_next_due: Option<String>,
        now: String,
    ) -> Result<FfiConfirmedRecord, PetcareError> {
        let now = parse_now(&now)?;
        let manual = manual_next_due.as_deref().map(parse_day).transpose()?;
        let pending = PendingItem::try_from(pending)?;

        let prepared = confirmation::prepare(
            &pending,
            parse_day(&applied_on)?,
            now.date_naive(),
            &self.recurrences,
            manual,
        )?;
        Ok(confirmation::confirm(prepared, now)?.into())
    }

    // =========================================================================
    // Nutrition
    // =========================================================================

    /// Ideal weight, daily calories and weight status for a pet.
    pub fn assess_nutrition(
        &self,
        pet: FfiPet,
        today: String,
    ) -> Result<FfiNutritionAssessment, PetcareError> {
        let pet = Pet::try_from(pet)?;
        Ok(nutrition::assess(&pet, parse_day(&today)?)?.into())
    }

    /// Known food brands.
    pub fn food_brands(&self) -> Vec<String> {
        self.foods.brands()
    }

    /// Product lines of a brand for a species.
    pub fn food_lines(&self, brand: String, species: String) -> Result<Vec<FfiFoodLine>, PetcareError> {
        let lines = self.foods.lines(&brand, parse_species(&species)?)?;
        Ok(lines.iter().cloned().map(|l| l.into()).collect())
    }

    /// Daily and per-meal grams of a product line that meet a pet's energy needs.
    pub fn food_portion(
        &self,
        pet: FfiPet,
        brand: String,
        line: String,
        meals_per_day: u32,
        today: String,
    ) -> Result<FfiFoodPortion, PetcareError> {
        let pet = Pet::try_from(pet)?;
        let food = self
            .foods
            .find(&brand, pet.species, &line)?
            .ok_or_else(|| PetcareError::NotFound(format!("Food line '{}' of {}", line, brand)))?;

        let daily_kcal = nutrition::daily_calories(&pet, parse_day(&today)?)?;
        let daily_grams = nutrition::daily_food_grams(daily_kcal, food.kcal_per_kg)?;
        Ok(FfiFoodPortion {
            daily_kcal,
            daily_grams,
            meal_grams: nutrition::meal_portion_grams(daily_grams, meals_per_day)?,
        })
    }

    // =========================================================================
    // Protocols & Travel
    // =========================================================================

    /// Required protocol vaccines the pet has not received.
    pub fn missing_protocol_vaccines(
        &self,
        pet: FfiPet,
        vaccines: Vec<FfiVaccine>,
        today: String,
    ) -> Result<Vec<String>, PetcareError> {
        let pet = Pet::try_from(pet)?;
        let records = convert_all::<_, VaccineRecord>(vaccines)?;
        let report = protocols::protocol_progress(&pet, &records, parse_day(&today)?);
        Ok(report.missing_required().into_iter().map(|e| e.name.clone()).collect())
    }

    /// Destination vaccine requirements not met on the travel date.
    pub fn missing_travel_requirements(
        &self,
        destination: String,
        vaccines: Vec<FfiVaccine>,
        travel_date: String,
    ) -> Result<Vec<String>, PetcareError> {
        let destination = travel::find_destination(&destination)?;
        let records = convert_all::<_, VaccineRecord>(vaccines)?;
        Ok(travel::check_requirements(destination, &records, parse_day(&travel_date)?).missing)
    }

    /// Issue a travel health certificate.
    pub fn issue_certificate(
        &self,
        request: FfiCertificateRequest,
        today: String,
    ) -> Result<FfiCertificate, PetcareError> {
        let request = CertificateRequest::try_from(request)?;
        Ok(travel::issue_certificate(&request, parse_day(&today)?)?.into())
    }
}

impl PetcareEngine {
    fn generate(
        &self,
        pets: Vec<FfiPet>,
        vaccines: Vec<FfiVaccine>,
        medications: Vec<FfiMedication>,
        now: &str,
    ) -> Result<Vec<Notification>, PetcareError> {
        let now = parse_now(now)?;
        let pets = convert_all::<_, Pet>(pets)?;
        let vaccines = convert_all::<_, VaccineRecord>(vaccines)?;
        let medications = convert_all::<_, MedicationRecord>(medications)?;
        Ok(reminders::generate(&pets, &vaccines, &medications, now, &self.policy))
    }
}

fn convert_all<F, T>(items: Vec<F>) -> Result<Vec<T>, PetcareError>
where
    T: TryFrom<F, Error = PetcareError>,
{
    items.into_iter().map(T::try_from).collect()
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe pet. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub birth_date: String,
    pub weight_kg: f64,
    pub owner: Option<String>,
    pub activity_level: String,
    pub neutered: bool,
    pub health_conditions: Vec<String>,
}

impl TryFrom<FfiPet> for Pet {
    type Error = PetcareError;

    fn try_from(pet: FfiPet) -> Result<Self, Self::Error> {
        Ok(Pet {
            species: parse_species(&pet.species)?,
            birth_date: parse_day(&pet.birth_date)?,
            activity_level: ActivityLevel::parse_or_default(&pet.activity_level),
            id: pet.id,
            name: pet.name,
            breed: pet.breed,
            weight_kg: pet.weight_kg,
            owner: pet.owner,
            neutered: pet.neutered,
            health_conditions: pet.health_conditions,
        })
    }
}

impl From<Pet> for FfiPet {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            species: pet.species.as_str().to_string(),
            breed: pet.breed,
            birth_date: pet.birth_date.to_string(),
            weight_kg: pet.weight_kg,
            owner: pet.owner,
            activity_level: pet.activity_level.as_str().to_string(),
            neutered: pet.neutered,
            health_conditions: pet.health_conditions,
        }
    }
}

/// FFI-safe vaccine record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVaccine {
    pub id: String,
    pub pet_id: String,
    pub name: String,
    pub administered_on: String,
    pub next_due: String,
    pub veterinarian: Option<String>,
    pub clinic: Option<String>,
    pub batch: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<FfiVaccine> for VaccineRecord {
    type Error = PetcareError;

    fn try_from(v: FfiVaccine) -> Result<Self, Self::Error> {
        Ok(VaccineRecord {
            administered_on: parse_day(&v.administered_on)?,
            next_due: parse_day(&v.next_due)?,
            id: v.id,
            pet_id: v.pet_id,
            name: v.name,
            veterinarian: v.veterinarian,
            clinic: v.clinic,
            batch: v.batch,
            notes: v.notes,
        })
    }
}

impl From<VaccineRecord> for FfiVaccine {
    fn from(v: VaccineRecord) -> Self {
        Self {
            id: v.id,
            pet_id: v.pet_id,
            name: v.name,
            administered_on: v.administered_on.to_string(),
            next_due: v.next_due.to_string(),
            veterinarian: v.veterinarian,
            clinic: v.clinic,
            batch: v.batch,
            notes: v.notes,
        }
    }
}

/// FFI-safe medication course.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedication {
    pub id: String,
    pub pet_id: String,
    pub name: String,
    /// "prescription" or "preventive"
    pub kind: String,
    pub category: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    pub end_date: String,
    pub veterinarian: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
}

impl TryFrom<FfiMedication> for MedicationRecord {
    type Error = PetcareError;

    fn try_from(m: FfiMedication) -> Result<Self, Self::Error> {
        let kind = MedicationKind::parse(&m.kind)
            .ok_or_else(|| PetcareError::InvalidInput(format!("Unknown medication kind: {}", m.kind)))?;
        Ok(MedicationRecord {
            kind,
            category: MedicationCategory::parse_or_default(&m.category),
            start_date: parse_day(&m.start_date)?,
            end_date: parse_day(&m.end_date)?,
            id: m.id,
            pet_id: m.pet_id,
            name: m.name,
            dosage: m.dosage,
            frequency: m.frequency,
            veterinarian: m.veterinarian,
            notes: m.notes,
            is_active: m.is_active,
        })
    }
}

impl From<MedicationRecord> for FfiMedication {
    fn from(m: MedicationRecord) -> Self {
        Self {
            id: m.id,
            pet_id: m.pet_id,
            name: m.name,
            kind: m.kind.as_str().to_string(),
            category: m.category.as_str().to_string(),
            dosage: m.dosage,
            frequency: m.frequency,
            start_date: m.start_date.to_string(),
            end_date: m.end_date.to_string(),
            veterinarian: m.veterinarian,
            notes: m.notes,
            is_active: m.is_active,
        }
    }
}

/// FFI-safe notification. `generated_at` is RFC 3339.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNotification {
    pub id: String,
    pub kind: String,
    pub pet_id: String,
    pub title: String,
    pub message: String,
    pub generated_at: String,
    pub is_read: bool,
    pub priority: String,
}

impl From<Notification> for FfiNotification {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            kind: n.kind.as_str().to_string(),
            pet_id: n.pet_id,
            title: n.title,
            message: n.message,
            generated_at: n.generated_at.to_rfc3339(),
            is_read: n.is_read,
            priority: n.priority.as_str().to_string(),
        }
    }
}

/// FFI-safe classification result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDueClassification {
    pub status: String,
    pub days_delta: i64,
    /// Same priority a generated reminder would carry: overdue items are
    /// "medium" until past the escalation threshold, then "high".
    pub priority: String,
}

impl FfiDueClassification {
    fn new(c: DueClassification, overdue_escalation_days: i64) -> Self {
        Self {
            status: c.status.as_str().to_string(),
            days_delta: c.days_delta,
            priority: c.priority(overdue_escalation_days).as_str().to_string(),
        }
    }
}

/// FFI-safe pending item awaiting confirmation.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPendingItem {
    pub id: String,
    pub pet_id: String,
    pub item_name: String,
    pub due_date: String,
    /// "vaccine" or "medication"
    pub kind: String,
    pub veterinarian: Option<String>,
    pub clinic: Option<String>,
    pub priority: String,
}

impl TryFrom<FfiPendingItem> for PendingItem {
    type Error = PetcareError;

    fn try_from(p: FfiPendingItem) -> Result<Self, Self::Error> {
        let priority = Priority::parse(&p.priority)
            .ok_or_else(|| PetcareError::InvalidInput(format!("Unknown priority: {}", p.priority)))?;
        Ok(PendingItem {
            due_date: parse_day(&p.due_date)?,
            kind: parse_kind(&p.kind)?,
            priority,
            id: p.id,
            pet_id: p.pet_id,
            item_name: p.item_name,
            veterinarian: p.veterinarian,
            clinic: p.clinic,
        })
    }
}

/// FFI-safe confirmation outcome. Exactly one of `vaccine` / `medication` is set.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConfirmedRecord {
    pub resolved_pending_id: String,
    pub vaccine: Option<FfiVaccine>,
    pub medication: Option<FfiMedication>,
    pub notification: FfiNotification,
}

impl From<ConfirmedRecord> for FfiConfirmedRecord {
    fn from(c: ConfirmedRecord) -> Self {
        let (vaccine, medication) = match c.item {
            ConfirmedItem::Vaccine(v) => (Some(v.into()), None),
            ConfirmedItem::Medication(m) => (None, Some(m.into())),
        };
        Self {
            resolved_pending_id: c.resolved_pending_id,
            vaccine,
            medication,
            notification: c.notification.into(),
        }
    }
}

/// FFI-safe nutrition assessment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNutritionAssessment {
    pub pet_id: String,
    pub age_months: i64,
    pub ideal_weight_kg: f64,
    pub daily_calories: u32,
    pub deviation_pct: f64,
    pub weight_status: String,
}

impl From<nutrition::NutritionAssessment> for FfiNutritionAssessment {
    fn from(a: nutrition::NutritionAssessment) -> Self {
        Self {
            pet_id: a.pet_id,
            age_months: a.age_months,
            ideal_weight_kg: a.ideal_weight_kg,
            daily_calories: a.daily_calories,
            deviation_pct: a.deviation_pct,
            weight_status: a.weight_status.as_str().to_string(),
        }
    }
}

/// FFI-safe food product line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFoodLine {
    pub name: String,
    pub protein_pct: f64,
    pub fat_pct: f64,
    pub fiber_pct: f64,
    pub kcal_per_kg: u32,
}

impl From<nutrition::FoodLine> for FfiFoodLine {
    fn from(l: nutrition::FoodLine) -> Self {
        Self {
            name: l.name,
            protein_pct: l.protein_pct,
            fat_pct: l.fat_pct,
            fiber_pct: l.fiber_pct,
            kcal_per_kg: l.kcal_per_kg,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFoodPortion {
    pub daily_kcal: u32,
    pub daily_grams: u32,
    pub meal_grams: u32,
}

/// FFI-safe certificate request.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCertificateRequest {
    pub pet_id: String,
    pub destination: String,
    pub departure_date: String,
    pub vaccine_ids: Vec<String>,
    pub veterinarian: String,
    pub clinic: String,
    pub crmv: String,
}

impl TryFrom<FfiCertificateRequest> for CertificateRequest {
    type Error = PetcareError;

    fn try_from(r: FfiCertificateRequest) -> Result<Self, Self::Error> {
        Ok(CertificateRequest {
            departure_date: parse_day(&r.departure_date)?,
            pet_id: r.pet_id,
            destination: r.destination,
            vaccine_ids: r.vaccine_ids,
            veterinarian: r.veterinarian,
            clinic: r.clinic,
            crmv: r.crmv,
        })
    }
}

/// FFI-safe travel certificate.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCertificate {
    pub certificate_number: String,
    pub pet_id: String,
    pub destination_code: String,
    pub departure_date: String,
    pub vaccine_ids: Vec<String>,
    pub veterinarian: String,
    pub clinic: String,
    pub crmv: String,
    pub issue_date: String,
    pub valid_until: String,
    pub verification_code: String,
}

impl From<Certificate> for FfiCertificate {
    fn from(c: Certificate) -> Self {
        Self {
            certificate_number: c.certificate_number,
            pet_id: c.pet_id,
            destination_code: c.destination_code,
            departure_date: c.departure_date.to_string(),
            vaccine_ids: c.vaccine_ids,
            veterinarian: c.veterinarian,
            clinic: c.clinic,
            crmv: c.crmv,
            issue_date: c.issue_date.to_string(),
            valid_until: c.valid_until.to_string(),
            verification_code: c.verification_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ffi_pet(id: &str, name: &str) -> FfiPet {
        FfiPet {
            id: id.into(),
            name: name.into(),
            species: "dog".into(),
            breed: "Golden Retriever".into(),
            birth_date: "2022-03-15".into(),
            weight_kg: 36.0,
            owner: None,
            activity_level: "moderate".into(),
            neutered: false,
            health_conditions: vec![],
        }
    }

    fn ffi_vaccine(next_due: &str) -> FfiVaccine {
        FfiVaccine {
            id: "v1".into(),
            pet_id: "1".into(),
            name: "V10 (Múltipla)".into(),
            administered_on: "2023-01-15".into(),
            next_due: next_due.into(),
            veterinarian: None,
            clinic: None,
            batch: None,
            notes: None,
        }
    }

    #[test]
    fn test_invalid_date_at_boundary() {
        let err = classify_due_date("15/01/2024".into(), "2024-01-20".into(), 30).unwrap_err();
        assert!(matches!(err, PetcareError::InvalidDate(_)));
    }

    #[test]
    fn test_classify_due_date() {
        let result = classify_due_date("2024-01-15".into(), "2024-03-01".into(), 30).unwrap();
        assert_eq!(result.status, "overdue");
        assert_eq!(result.days_delta, 46);
        assert_eq!(result.priority, "high");

        let result = classify_due_date("2024-02-29".into(), "2024-03-01".into(), 30).unwrap();
        assert_eq!(result.status, "overdue");
        assert_eq!(result.days_delta, 1);
        assert_eq!(result.priority, "medium");
    }

    #[test]
    fn test_classification_matches_generated_priority() {
        let engine = create_engine_with_policy(r#"{"overdue_escalation_days": 60}"#.into()).unwrap();
        let result = engine
            .classify_due_date("2024-01-15".into(), "2024-03-01".into(), 30)
            .unwrap();
        let notifications = engine
            .generate_notifications(vec![], vec![ffi_vaccine("2024-01-15")], vec![], "2024-03-01".into())
            .unwrap();
        assert_eq!(result.priority, "medium");
        assert_eq!(notifications[0].priority, result.priority);
    }

    #[test]
    fn test_engine_next_due_and_suggestions() {
        let engine = create_engine();
        assert_eq!(
            engine
                .next_due_date("Bravecto".into(), "2024-01-15".into(), "medication".into())
                .unwrap(),
            "2024-04-15"
        );

        let err = engine
            .next_due_date("Bravekto".into(), "2024-01-15".into(), "medication".into())
            .unwrap_err();
        match err {
            PetcareError::NotFound(msg) => assert!(msg.contains("Bravecto")),
            other => panic!("expected NotFound, got {other:?}"),
        }

        assert!(matches!(
            engine.next_due_date("Bravecto".into(), "2024-01-15".into(), "toy".into()),
            Err(PetcareError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_engine_generate() {
        let engine = create_engine();
        let notifications = engine
            .generate_notifications(
                vec![ffi_pet("1", "Rex")],
                vec![ffi_vaccine("2024-01-15")],
                vec![],
                "2024-03-01T09:00:00Z".into(),
            )
            .unwrap();

        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, "vaccine_overdue");
        assert_eq!(notifications[0].priority, "high");
        assert!(notifications[0].message.contains("Rex"));

        let json = engine
            .generate_notifications_json(
                vec![ffi_pet("1", "Rex")],
                vec![ffi_vaccine("2024-01-15")],
                vec![],
                "2024-03-01".into(),
            )
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_engine_policy_from_json() {
        let engine = create_engine_with_policy(r#"{"overdue_escalation_days": 60}"#.into()).unwrap();
        let notifications = engine
            .generate_notifications(vec![], vec![ffi_vaccine("2024-01-15")], vec![], "2024-03-01".into())
            .unwrap();
        assert_eq!(notifications[0].priority, "medium");

        assert!(matches!(
            create_engine_with_policy("{".into()),
            Err(PetcareError::SerializationError(_))
        ));
    }

    #[test]
    fn test_engine_nutrition() {
        let engine = create_engine();
        let assessment = engine.assess_nutrition(ffi_pet("1", "Rex"), "2024-03-01".into()).unwrap();
        assert_eq!(assessment.weight_status, "obese");
        assert_eq!(assessment.daily_calories, 1418);

        let portion = engine
            .food_portion(
                ffi_pet("1", "Rex"),
                "Royal Canin".into(),
                "Golden Retriever Adult".into(),
                2,
                "2024-03-01".into(),
            )
            .unwrap();
        assert_eq!(portion.daily_kcal, 1418);
        assert_eq!(portion.daily_grams, 355);

        assert!(matches!(
            engine.food_lines("Acme".into(), "dog".into()),
            Err(PetcareError::NotFound(_))
        ));
    }

    #[test]
    fn test_engine_confirm_pending() {
        let engine = create_engine();
        let pending = FfiPendingItem {
            id: "pending_1".into(),
            pet_id: "1".into(),
            item_name: "Bravecto".into(),
            due_date: "2024-01-10".into(),
            kind: "medication".into(),
            veterinarian: None,
            clinic: None,
            priority: "high".into(),
        };
        let confirmed = engine
            .confirm_pending(pending, "2024-01-15".into(), None, "2024-01-20T10:00:00Z".into())
            .unwrap();

        assert_eq!(confirmed.resolved_pending_id, "pending_1");
        assert!(confirmed.vaccine.is_none());
        let medication = confirmed.medication.unwrap();
        assert_eq!(medication.end_date, "2024-04-15");
        assert_eq!(medication.category, "flea-tick");
        assert_eq!(confirmed.notification.priority, "low");
    }

    #[test]
    fn test_engine_travel() {
        let engine = create_engine();
        let missing = engine
            .missing_travel_requirements("FR".into(), vec![ffi_vaccine("2025-01-15")], "2024-06-01".into())
            .unwrap();
        assert_eq!(missing, vec!["Antirrábica".to_string()]);

        let request = FfiCertificateRequest {
            pet_id: "1".into(),
            destination: "FR".into(),
            departure_date: "2024-06-01".into(),
            vaccine_ids: vec!["v1".into()],
            veterinarian: "Dr. Carlos Mendes".into(),
            clinic: "Clínica Veterinária São Francisco".into(),
            crmv: "CRMV-SP 12345".into(),
        };
        let cert = engine.issue_certificate(request, "2024-03-01".into()).unwrap();
        assert_eq!(cert.valid_until, "2025-06-01");
        assert!(cert.certificate_number.starts_with("PET-2024-"));
    }
}
