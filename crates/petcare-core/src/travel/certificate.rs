//! Health certificates for international travel.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::dates::add_years;

use super::{find_destination, TravelError, TravelResult};

/// What the veterinarian fills in to issue a certificate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificateRequest {
    pub pet_id: String,
    /// Destination code or name
    pub destination: String,
    pub departure_date: NaiveDate,
    pub vaccine_ids: Vec<String>,
    pub veterinarian: String,
    pub clinic: String,
    /// Veterinary council registration
    pub crmv: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certificate {
    pub certificate_number: String,
    pub pet_id: String,
    pub destination_code: String,
    pub departure_date: NaiveDate,
    pub vaccine_ids: Vec<String>,
    pub veterinarian: String,
    pub clinic: String,
    pub crmv: String,
    pub issue_date: NaiveDate,
    pub valid_until: NaiveDate,
    /// Hex SHA-256 over the certificate contents
    pub verification_code: String,
}

impl Certificate {
    /// Whether the certificate is in force on `today`.
    pub fn is_valid(&self, today: NaiveDate) -> bool {
        self.issue_date <= today && today <= self.valid_until
    }

    /// Recompute the digest and compare it with the stored verification code.
    pub fn verify(&self) -> bool {
        let digest = DigestFields {
            pet_id: &self.pet_id,
            destination_code: &self.destination_code,
            departure_date: self.departure_date,
            vaccine_ids: &self.vaccine_ids,
            veterinarian: &self.veterinarian,
            clinic: &self.clinic,
            crmv: &self.crmv,
            issue_date: self.issue_date,
        }
        .digest();
        digest == self.verification_code && self.certificate_number == certificate_number(&digest, self.issue_date)
    }
}

/// Issue a certificate valid for one year from departure.
pub fn issue_certificate(request: &CertificateRequest, today: NaiveDate) -> TravelResult<Certificate> {
    if request.departure_date < today {
        return Err(TravelError::DepartureInPast {
            departure: request.departure_date,
            today,
        });
    }
    let destination = find_destination(&request.destination)?;
    let valid_until = add_years(request.departure_date, 1)?;

    let verification_code = DigestFields {
        pet_id: &request.pet_id,
        destination_code: destination.code,
        departure_date: request.departure_date,
        vaccine_ids: &request.vaccine_ids,
        veterinarian: &request.veterinarian,
        clinic: &request.clinic,
        crmv: &request.crmv,
        issue_date: today,
    }
    .digest();

    Ok(Certificate {
        certificate_number: certificate_number(&verification_code, today),
        pet_id: request.pet_id.clone(),
        destination_code: destination.code.to_string(),
        departure_date: request.departure_date,
        vaccine_ids: request.vaccine_ids.clone(),
        veterinarian: request.veterinarian.clone(),
        clinic: request.clinic.clone(),
        crmv: request.crmv.clone(),
        issue_date: today,
        valid_until,
        verification_code,
    })
}

fn certificate_number(digest: &str, issue_date: NaiveDate) -> String {
    let short: String = digest.chars().take(8).collect();
    format!("PET-{}-{}", issue_date.year(), short.to_uppercase())
}

/// Certificate fields covered by the verification code.
struct DigestFields<'a> {
    pet_id: &'a str,
    destination_code: &'a str,
    departure_date: NaiveDate,
    vaccine_ids: &'a [String],
    veterinarian: &'a str,
    clinic: &'a str,
    crmv: &'a str,
    issue_date: NaiveDate,
}

impl DigestFields<'_> {
    /// Every field is length-prefixed, so no two field lists share an encoding.
    fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        let mut field = |bytes: &[u8]| {
            hasher.update((bytes.len() as u64).to_be_bytes());
            hasher.update(bytes);
        };

        field(self.pet_id.as_bytes());
        field(self.destination_code.as_bytes());
        field(self.departure_date.to_string().as_bytes());
        field(&(self.vaccine_ids.len() as u64).to_be_bytes());
        for id in self.vaccine_ids {
            field(id.as_bytes());
        }
        field(self.veterinarian.as_bytes());
        field(self.clinic.as_bytes());
        field(self.crmv.as_bytes());
        field(self.issue_date.to_string().as_bytes());

        hex::encode(hasher.finalize())
    }
}
