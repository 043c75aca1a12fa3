//! International travel: destination requirements and health certificates.

mod certificate;
mod destinations;

pub use certificate::*;
pub use destinations::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::dates::DateError;

/// Travel errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TravelError {
    #[error("Departure date {departure} is before today ({today})")]
    DepartureInPast { departure: NaiveDate, today: NaiveDate },

    #[error("Unknown destination: {0}")]
    UnknownDestination(String),

    #[error("Date error: {0}")]
    Date(#[from] DateError),
}

pub type TravelResult<T> = Result<T, TravelError>;
