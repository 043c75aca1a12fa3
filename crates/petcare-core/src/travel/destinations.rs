//! Destination countries and their entry requirements.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::VaccineRecord;

use super::{TravelError, TravelResult};

/// Entry requirements of one country.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Destination {
    /// ISO 3166-1 alpha-2
    pub code: &'static str,
    pub name: &'static str,
    /// Other accepted names, including the Portuguese ones
    pub aliases: &'static [&'static str],
    /// Vaccines that must be valid on the travel date, matched by name
    pub vaccines: &'static [&'static str],
    /// Documents or procedures the owner must arrange
    pub documents: &'static [&'static str],
}

const CORE: &[&str] = &["Antirrábica", "Múltipla"];

pub const DESTINATIONS: &[Destination] = &[
    Destination {
        code: "US",
        name: "United States",
        aliases: &["Estados Unidos", "EUA", "USA"],
        vaccines: CORE,
        documents: &["USDA certificate"],
    },
    Destination {
        code: "CA",
        name: "Canada",
        aliases: &["Canadá"],
        vaccines: CORE,
        documents: &["Clinical examination"],
    },
    Destination {
        code: "GB",
        name: "United Kingdom",
        aliases: &["UK", "Reino Unido"],
        vaccines: CORE,
        documents: &["Microchip", "Rabies antibody titre"],
    },
    Destination {
        code: "FR",
        name: "France",
        aliases: &["França"],
        vaccines: CORE,
        documents: &["Microchip", "EU pet passport"],
    },
    Destination {
        code: "DE",
        name: "Germany",
        aliases: &["Alemanha"],
        vaccines: CORE,
        documents: &["Microchip", "EU pet passport"],
    },
    Destination {
        code: "JP",
        name: "Japan",
        aliases: &["Japão"],
        vaccines: CORE,
        documents: &["Quarantine", "Laboratory tests"],
    },
    Destination {
        code: "AU",
        name: "Australia",
        aliases: &["Austrália"],
        vaccines: CORE,
        documents: &["Mandatory quarantine", "Microchip"],
    },
    Destination {
        code: "AR",
        name: "Argentina",
        aliases: &[],
        vaccines: CORE,
        documents: &["SENASA certificate"],
    },
    Destination {
        code: "UY",
        name: "Uruguay",
        aliases: &["Uruguai"],
        vaccines: CORE,
        documents: &["Clinical examination"],
    },
    Destination {
        code: "CL",
        name: "Chile",
        aliases: &[],
        vaccines: CORE,
        documents: &["SAG certificate"],
    },
];

/// Vaccine requirements checked against a pet's records.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequirementCheck {
    pub satisfied: Vec<String>,
    pub missing: Vec<String>,
}

impl RequirementCheck {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Look up a destination by code, English name or alias (case-insensitive).
pub fn find_destination(query: &str) -> TravelResult<&'static Destination> {
    let wanted = query.trim().to_lowercase();

    DESTINATIONS
        .iter()
        .find(|d| {
            std::iter::once(&d.code)
                .chain(std::iter::once(&d.name))
                .chain(d.aliases)
                .any(|candidate| candidate.to_lowercase() == wanted)
        })
        .ok_or_else(|| TravelError::UnknownDestination(query.trim().to_string()))
}

/// A vaccine covers a trip when it was given on or before the travel date
/// and is not yet due again.
pub fn is_vaccine_valid_for_travel(vaccine: &VaccineRecord, travel_date: NaiveDate) -> bool {
    vaccine.administered_on <= travel_date && travel_date <= vaccine.next_due
}

/// Check a destination's vaccine requirements against `vaccines`.
pub fn check_requirements(
    destination: &Destination,
    vaccines: &[VaccineRecord],
    travel_date: NaiveDate,
) -> RequirementCheck {
    let (satisfied, missing): (Vec<&str>, Vec<&str>) = destination.vaccines.iter().partition(|req| {
        let key = req.to_lowercase();
        vaccines
            .iter()
            .any(|v| v.name.to_lowercase().contains(&key) && is_vaccine_valid_for_travel(v, travel_date))
    });

    RequirementCheck {
        satisfied: satisfied.into_iter().map(String::from).collect(),
        missing: missing.into_iter().map(String::from).collect(),
    }
}
