//! Notification models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a notification is about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    VaccineOverdue,
    MedicationReminder,
    AppointmentReminder,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::VaccineOverdue => "vaccine_overdue",
            NotificationKind::MedicationReminder => "medication_reminder",
            NotificationKind::AppointmentReminder => "appointment_reminder",
        }
    }
}

/// Urgency. Ordered so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// A user-facing reminder derived from the record snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Derived from the source record id and generation time
    pub id: String,
    pub kind: NotificationKind,
    /// Owning pet id
    pub pet_id: String,
    pub title: String,
    pub message: String,
    /// When the notification was generated
    pub generated_at: DateTime<Utc>,
    pub is_read: bool,
    pub priority: Priority,
}

impl Notification {
    /// Mark as acknowledged by the user.
    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_kind_wire_names() {
        let json = serde_json::to_string(&NotificationKind::MedicationReminder).unwrap();
        assert_eq!(json, "\"medication_reminder\"");
        assert_eq!(NotificationKind::VaccineOverdue.as_str(), "vaccine_overdue");
    }

    #[test]
    fn test_mark_read() {
        let mut notification = Notification {
            id: "n1".into(),
            kind: NotificationKind::VaccineOverdue,
            pet_id: "1".into(),
            title: "Overdue vaccine".into(),
            message: "Rex is overdue".into(),
            generated_at: Utc::now(),
            is_read: false,
            priority: Priority::High,
        };
        notification.mark_read();
        assert!(notification.is_read);
    }
}
