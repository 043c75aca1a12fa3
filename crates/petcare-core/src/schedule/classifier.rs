//! Due-date status classification.
//!
//! A due date is compared against "today" at day granularity:
//! - before today: overdue
//! - today up to `due_soon_days` ahead: due soon
//! - later: on track

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::days_between;
use crate::models::Priority;

/// Default due-soon window for vaccines.
pub const VACCINE_DUE_SOON_DAYS: u32 = 30;

/// Default due-soon window for medications.
pub const MEDICATION_DUE_SOON_DAYS: u32 = 3;

/// Where a due date stands relative to today.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    Overdue,
    DueSoon,
    OnTrack,
}

impl DueStatus {
    /// Severity of the status alone, ignoring how late an overdue item is.
    pub fn priority(&self) -> Priority {
        match self {
            DueStatus::Overdue => Priority::High,
            DueStatus::DueSoon => Priority::Medium,
            DueStatus::OnTrack => Priority::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DueStatus::Overdue => "overdue",
            DueStatus::DueSoon => "due_soon",
            DueStatus::OnTrack => "on_track",
        }
    }

    /// Whether the item needs the owner's attention.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, DueStatus::OnTrack)
    }
}

/// Classification result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DueClassification {
    pub status: DueStatus,
    /// Days overdue for `Overdue`, days until due otherwise. Never negative.
    pub days_delta: i64,
}

impl DueClassification {
    /// Severity of this result. Overdue items stay `Medium` until they are
    /// more than `overdue_escalation_days` late, matching generated reminders.
    pub fn priority(&self, overdue_escalation_days: i64) -> Priority {
        match self.status {
            DueStatus::Overdue if self.days_delta <= overdue_escalation_days => Priority::Medium,
            status => status.priority(),
        }
    }
}

/// Classify `due` against `today` with a due-soon window of `due_soon_days`.
///
/// A due date equal to today is `DueSoon` regardless of the window.
pub fn classify(due: NaiveDate, today: NaiveDate, due_soon_days: u32) -> DueClassification {
    let days_until_due = days_between(today, due);

    if days_until_due < 0 {
        return DueClassification {
            status: DueStatus::Overdue,
            days_delta: -days_until_due,
        };
    }

    let status = if days_until_due <= i64::from(due_soon_days) {
        DueStatus::DueSoon
    } else {
        DueStatus::OnTrack
    };

    DueClassification {
        status,
        days_delta: days_until_due,
    }
}
