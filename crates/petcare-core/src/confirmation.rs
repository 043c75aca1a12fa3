//! Quick confirmation of pending vaccines and preventives.
//!
//! Flow: PendingItem → prepare (next due from recurrence table or manual) →
//! Confirmation → confirm → new record + acknowledgement notification

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::days_between;
use crate::models::{
    MedicationCategory, MedicationKind, MedicationRecord, Notification, NotificationKind, Priority,
    RecordError, VaccineRecord,
};
use crate::schedule::{ItemKind, RecurrenceTable, ScheduleError};

/// Confirmation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfirmationError {
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Invalid record: {0}")]
    Record(#[from] RecordError),

    #[error("Application date {applied_on} is after today ({today})")]
    AppliedInFuture { applied_on: NaiveDate, today: NaiveDate },
}

pub type ConfirmationResult<T> = Result<T, ConfirmationError>;

/// An item awaiting confirmation that it was given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingItem {
    pub id: String,
    pub pet_id: String,
    /// Vaccine or medication name
    pub item_name: String,
    pub due_date: NaiveDate,
    pub kind: ItemKind,
    pub veterinarian: Option<String>,
    pub clinic: Option<String>,
    pub priority: Priority,
}

impl PendingItem {
    /// Days past the due date; zero when not yet due.
    pub fn overdue_days(&self, today: NaiveDate) -> i64 {
        days_between(self.due_date, today).max(0)
    }
}

/// Fields shared by both confirmation kinds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmationDetails {
    /// Pending item being resolved
    pub pending_id: String,
    pub pet_id: String,
    pub name: String,
    pub applied_on: NaiveDate,
    pub next_due: NaiveDate,
    pub veterinarian: Option<String>,
    pub clinic: Option<String>,
    pub notes: Option<String>,
}

/// A confirmed application, ready to become a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Confirmation {
    Vaccine {
        #[serde(flatten)]
        details: ConfirmationDetails,
        batch: Option<String>,
    },
    Medication {
        #[serde(flatten)]
        details: ConfirmationDetails,
    },
}

impl Confirmation {
    pub fn details(&self) -> &ConfirmationDetails {
        match self {
            Confirmation::Vaccine { details, .. } | Confirmation::Medication { details } => details,
        }
    }

    pub fn details_mut(&mut self) -> &mut ConfirmationDetails {
        match self {
            Confirmation::Vaccine { details, .. } | Confirmation::Medication { details } => details,
        }
    }
}

/// The record created by a confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum ConfirmedItem {
    Vaccine(VaccineRecord),
    Medication(MedicationRecord),
}

/// Outcome of [`confirm`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedRecord {
    /// Pending item the caller should now remove
    pub resolved_pending_id: String,
    pub item: ConfirmedItem,
    pub notification: Notification,
}

/// Build a confirmation for `pending` applied on `applied_on`.
///
/// The next due date comes from `manual_next_due` when given, otherwise from
/// the recurrence table; a table miss is returned so the caller can ask for a
/// manual date.
pub fn prepare(
    pending: &PendingItem,
    applied_on: NaiveDate,
    today: NaiveDate,
    table: &RecurrenceTable,
    manual_next_due: Option<NaiveDate>,
) -> ConfirmationResult<Confirmation> {
    if applied_on > today {
        return Err(ConfirmationError::AppliedInFuture { applied_on, today });
    }

    let next_due = match manual_next_due {
        Some(date) => date,
        None => table.next_due(&pending.item_name, applied_on, pending.kind)?,
    };

    let details = ConfirmationDetails {
        pending_id: pending.id.clone(),
        pet_id: pending.pet_id.clone(),
        name: pending.item_name.clone(),
        applied_on,
        next_due,
        veterinarian: pending.veterinarian.clone(),
        clinic: pending.clinic.clone(),
        notes: None,
    };

    Ok(match pending.kind {
        ItemKind::Vaccine => Confirmation::Vaccine { details, batch: None },
        ItemKind::Medication => Confirmation::Medication { details },
    })
}

/// Turn a confirmation into a new record plus a low-priority notification.
pub fn confirm(confirmation: Confirmation, now: DateTime<Utc>) -> ConfirmationResult<ConfirmedRecord> {
    let (details, item, kind, title) = match confirmation {
        Confirmation::Vaccine { details, batch } => {
            let mut record = VaccineRecord::new(
                details.pet_id.clone(),
                details.name.clone(),
                details.applied_on,
                details.next_due,
            );
            record.veterinarian = details.veterinarian.clone();
            record.clinic = details.clinic.clone();
            record.batch = batch;
            record.notes = details.notes.clone();
            record.validate()?;
            (
                details,
                ConfirmedItem::Vaccine(record),
                NotificationKind::VaccineOverdue,
                "Vaccine confirmed",
            )
        }
        Confirmation::Medication { details } => {
            let mut record = MedicationRecord::new(
                details.pet_id.clone(),
                details.name.clone(),
                details.applied_on,
                details.next_due,
            );
            record.kind = MedicationKind::Preventive;
            record.category = preventive_category(&details.name);
            record.dosage = "1 dose".into();
            record.frequency = "as prescribed".into();
            record.veterinarian = details.veterinarian.clone();
            record.notes = details.notes.clone();
            record.validate()?;
            (
                details,
                ConfirmedItem::Medication(record),
                NotificationKind::MedicationReminder,
                "Medication confirmed",
            )
        }
    };

    let notification = Notification {
        id: format!("confirmation_{}_{}", details.pending_id, now.timestamp_millis()),
        kind,
        pet_id: details.pet_id.clone(),
        title: title.into(),
        message: format!(
            "{} applied successfully. Next dose: {}",
            details.name,
            details.next_due.format("%Y-%m-%d")
        ),
        generated_at: now,
        is_read: false,
        priority: Priority::Low,
    };

    Ok(ConfirmedRecord {
        resolved_pending_id: details.pending_id,
        item,
        notification,
    })
}

/// Category of a known preventive brand.
pub fn preventive_category(name: &str) -> MedicationCategory {
    match name.trim().to_lowercase().as_str() {
        "bravecto" | "nexgard" | "simparic" | "revolution" | "advocate" => MedicationCategory::FleaTick,
        "drontal" | "milbemax" => MedicationCategory::Deworming,
        "heartgard" => MedicationCategory::Heartworm,
        _ => MedicationCategory::Other,
    }
}
