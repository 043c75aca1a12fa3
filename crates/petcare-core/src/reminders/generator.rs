//! Notification generation.
//!
//! Rules:
//! - Vaccine past its next-due date: `vaccine_overdue`, high priority when
//!   overdue longer than the escalation threshold
//! - Active medication ending within the window: `medication_reminder`, high
//!   priority on the last day

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, trace};

use crate::dates::days_between;
use crate::models::{
    MedicationRecord, Notification, NotificationKind, Pet, Priority, VaccineRecord,
};
use crate::schedule::{classify, DueStatus};

use super::ReminderPolicy;

/// Derive the candidate notifications for a record snapshot.
///
/// Same inputs always give the same output. Unknown pet ids are not an
/// error; the message simply leaves out the pet name.
pub fn generate(
    pets: &[Pet],
    vaccines: &[VaccineRecord],
    medications: &[MedicationRecord],
    now: DateTime<Utc>,
    policy: &ReminderPolicy,
) -> Vec<Notification> {
    let today = now.date_naive();
    let pet_names: HashMap<&str, &str> = pets
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    let mut notifications: Vec<Notification> = vaccines
        .iter()
        .filter_map(|v| overdue_vaccine(v, pet_names.get(v.pet_id.as_str()).copied(), today, now, policy))
        .collect();

    notifications.extend(medications.iter().filter_map(|m| {
        ending_medication(m, pet_names.get(m.pet_id.as_str()).copied(), today, now, policy)
    }));

    debug!(
        vaccines = vaccines.len(),
        medications = medications.len(),
        emitted = notifications.len(),
        "generated notifications"
    );

    notifications
}

/// Build the overdue notification for a vaccine, if it is overdue.
pub fn overdue_vaccine(
    vaccine: &VaccineRecord,
    pet_name: Option<&str>,
    today: NaiveDate,
    now: DateTime<Utc>,
    policy: &ReminderPolicy,
) -> Option<Notification> {
    let classification = classify(vaccine.next_due, today, 0);
    if classification.status != DueStatus::Overdue {
        return None;
    }

    let days_overdue = classification.days_delta;
    let priority = classification.priority(policy.overdue_escalation_days);

    let days = match days_overdue {
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    };
    let message = match pet_name {
        Some(name) => format!("{} is {} overdue for the {} vaccine", name, days, vaccine.name),
        None => format!("The {} vaccine is {} overdue", vaccine.name, days),
    };

    trace!(vaccine_id = %vaccine.id, days_overdue, ?priority, "vaccine overdue");

    Some(Notification {
        id: format!("vaccine_{}_{}", vaccine.id, now.timestamp_millis()),
        kind: NotificationKind::VaccineOverdue,
        pet_id: vaccine.pet_id.clone(),
        title: "Overdue vaccine".into(),
        message,
        generated_at: now,
        is_read: false,
        priority,
    })
}

/// Build the ending-soon notification for an active medication, if due.
pub fn ending_medication(
    medication: &MedicationRecord,
    pet_name: Option<&str>,
    today: NaiveDate,
    now: DateTime<Utc>,
    policy: &ReminderPolicy,
) -> Option<Notification> {
    if !medication.is_active {
        return None;
    }

    let days_until_end = days_between(today, medication.end_date);
    if days_until_end < 0 || days_until_end > i64::from(policy.medication_window_days) {
        return None;
    }

    let priority = if days_until_end == 0 {
        Priority::High
    } else {
        Priority::Medium
    };

    let ends = match days_until_end {
        0 => "ends today".to_string(),
        1 => "ends in 1 day".to_string(),
        n => format!("ends in {} days", n),
    };
    let message = match pet_name {
        Some(name) => format!("{} - {} {}", name, medication.name, ends),
        None => format!("{} {}", medication.name, ends),
    };

    trace!(medication_id = %medication.id, days_until_end, ?priority, "medication ending");

    Some(Notification {
        id: format!("medication_{}_{}", medication.id, now.timestamp_millis()),
        kind: NotificationKind::MedicationReminder,
        pet_id: medication.pet_id.clone(),
        title: "Medication ending".into(),
        message,
        generated_at: now,
        is_read: false,
        priority,
    })
}

/// Sort for display: priority descending, then newest first.
pub fn sort_for_display(notifications: &mut [Notification]) {
    notifications.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.generated_at.cmp(&a.generated_at))
    });
}

/// Notifications the user has not acknowledged yet.
pub fn unread(notifications: &[Notification]) -> Vec<&Notification> {
    notifications.iter().filter(|n| !n.is_read).collect()
}

/// Serialize notifications for UI layers that take a single JSON payload.
pub fn to_json(notifications: &[Notification]) -> Result<String, serde_json::Error> {
    serde_json::to_string(notifications)
}
