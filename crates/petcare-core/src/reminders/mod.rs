//! Reminder generation and dashboard queries over a caller-owned record snapshot.
//!
//! Nothing here holds state: every call takes the records and "now" explicitly,
//! and deduplication against previously emitted notifications is the caller's job.

mod dashboard;
mod generator;

pub use dashboard::*;
pub use generator::*;

use serde::{Deserialize, Serialize};

use crate::schedule::{MEDICATION_DUE_SOON_DAYS, VACCINE_DUE_SOON_DAYS};

/// Overdue vaccines escalate to high priority past this many days.
pub const OVERDUE_ESCALATION_DAYS: i64 = 30;

/// Thresholds used by the generator and dashboard queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReminderPolicy {
    /// Overdue vaccines become high priority when overdue by more than this
    pub overdue_escalation_days: i64,
    /// Active medications ending within this many days produce a reminder
    pub medication_window_days: u32,
    /// Window for the upcoming-vaccines list
    pub upcoming_vaccine_window_days: u32,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            overdue_escalation_days: OVERDUE_ESCALATION_DAYS,
            medication_window_days: MEDICATION_DUE_SOON_DAYS,
            upcoming_vaccine_window_days: VACCINE_DUE_SOON_DAYS,
        }
    }
}

impl ReminderPolicy {
    /// Parse a policy from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the overdue escalation threshold.
    pub fn with_overdue_escalation_days(mut self, days: i64) -> Self {
        self.overdue_escalation_days = days;
        self
    }

    /// Set the medication reminder window.
    pub fn with_medication_window_days(mut self, days: u32) -> Self {
        self.medication_window_days = days;
        self
    }
}
