//! Dashboard queries: upcoming vaccines, appointment lists, medication status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::days_between;
use crate::models::{Appointment, AppointmentStatus, MedicationRecord, VaccineRecord};
use crate::schedule::{classify, DueStatus};

/// Display status of a medication course.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MedicationStatus {
    /// Course marked inactive
    Finished,
    /// Active but past its end date
    Expired,
    /// Active and ending within the window
    Ending,
    Active,
}

impl MedicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationStatus::Finished => "finished",
            MedicationStatus::Expired => "expired",
            MedicationStatus::Ending => "ending",
            MedicationStatus::Active => "active",
        }
    }
}

/// Vaccines due between today and `window_days` ahead (inclusive), soonest first.
pub fn upcoming_vaccines<'a>(
    vaccines: &'a [VaccineRecord],
    today: NaiveDate,
    window_days: u32,
) -> Vec<&'a VaccineRecord> {
    let mut upcoming: Vec<&VaccineRecord> = vaccines
        .iter()
        .filter(|v| classify(v.next_due, today, window_days).status == DueStatus::DueSoon)
        .collect();
    upcoming.sort_by_key(|v| v.next_due);
    upcoming
}

/// Scheduled appointments on or after today, soonest first.
pub fn upcoming_appointments(appointments: &[Appointment], today: NaiveDate) -> Vec<&Appointment> {
    let mut upcoming: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| a.date >= today && a.status == AppointmentStatus::Scheduled)
        .collect();
    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    upcoming
}

/// Appointments before today or already completed, most recent first.
pub fn past_appointments(appointments: &[Appointment], today: NaiveDate) -> Vec<&Appointment> {
    let mut past: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| a.date < today || a.status == AppointmentStatus::Completed)
        .collect();
    past.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.time.cmp(&a.time)));
    past
}

/// Classify a medication course for display.
pub fn medication_status(
    medication: &MedicationRecord,
    today: NaiveDate,
    window_days: u32,
) -> MedicationStatus {
    if !medication.is_active {
        return MedicationStatus::Finished;
    }

    let days_until_end = days_between(today, medication.end_date);
    if days_until_end < 0 {
        MedicationStatus::Expired
    } else if days_until_end <= i64::from(window_days) {
        MedicationStatus::Ending
    } else {
        MedicationStatus::Active
    }
}
