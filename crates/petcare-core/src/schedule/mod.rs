//! Due-date scheduling: status classification and next-dose calculation.
//!
//! Pipeline: Record → Recurrence lookup (next due) → Classification (status + priority)

mod classifier;
mod recurrence;

pub use classifier::*;
pub use recurrence::*;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::DateError;

/// Which recurrence table an item belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Vaccine,
    Medication,
}

impl ItemKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "vaccine" => Some(ItemKind::Vaccine),
            "medication" => Some(ItemKind::Medication),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Vaccine => write!(f, "vaccine"),
            ItemKind::Medication => write!(f, "medication"),
        }
    }
}

/// Scheduling errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("No recurrence rule for {kind} '{name}'")]
    NotFound {
        name: String,
        kind: ItemKind,
        /// Known names that look like the requested one
        suggestions: Vec<String>,
    },

    #[error("Date error: {0}")]
    Date(#[from] DateError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
