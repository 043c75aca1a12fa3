//! Vaccination protocols by species and age group.
//!
//! Young animals (under 20 weeks) follow a primary series scheduled by age in
//! weeks; adults follow annual boosters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::age_in_weeks;
use crate::models::{Pet, Species, VaccineRecord};

/// Animals younger than this are on the primary series.
pub const PRIMARY_SERIES_UNDER_WEEKS: i64 = 20;

/// Core vaccines are recommended for every animal of the species.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VaccineType {
    Core,
    NonCore,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    /// Puppy or kitten
    Young,
    Adult,
}

/// When doses are given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolSchedule {
    /// Ages in weeks for each dose of the primary series
    Weeks(Vec<u32>),
    AnnualBooster,
}

/// One vaccine in a protocol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProtocolEntry {
    pub name: String,
    pub vaccine_type: VaccineType,
    pub schedule: ProtocolSchedule,
    pub description: String,
    /// Listed in the WSAVA guidelines
    pub wsava: bool,
    /// Legally or clinically mandatory
    pub required: bool,
}

impl ProtocolEntry {
    fn new(
        name: &str,
        vaccine_type: VaccineType,
        schedule: ProtocolSchedule,
        description: &str,
        required: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            vaccine_type,
            schedule,
            description: description.to_string(),
            wsava: vaccine_type == VaccineType::Core,
            required,
        }
    }

    /// Key used to match administered vaccines: the first word, lowercased.
    fn match_key(&self) -> String {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Whether any of the given vaccine records covers this entry.
    pub fn is_covered_by<'a, I>(&self, vaccines: I) -> bool
    where
        I: IntoIterator<Item = &'a VaccineRecord>,
    {
        let key = self.match_key();
        !key.is_empty()
            && vaccines
                .into_iter()
                .any(|v| v.name.to_lowercase().contains(&key))
    }

    /// First scheduled dose at or after `age_weeks`, for primary-series entries.
    pub fn next_dose_week(&self, age_weeks: i64) -> Option<u32> {
        match &self.schedule {
            ProtocolSchedule::Weeks(weeks) => weeks
                .iter()
                .copied()
                .find(|&w| i64::from(w) >= age_weeks),
            ProtocolSchedule::AnnualBooster => None,
        }
    }
}

/// Progress of one protocol entry for a pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProtocolProgress {
    pub entry: ProtocolEntry,
    pub completed: bool,
    pub next_dose_week: Option<u32>,
}

/// Protocol status for a pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProtocolReport {
    pub pet_id: String,
    pub age_weeks: i64,
    pub age_group: AgeGroup,
    pub entries: Vec<ProtocolProgress>,
}

impl ProtocolReport {
    /// Required entries not yet covered.
    pub fn missing_required(&self) -> Vec<&ProtocolEntry> {
        self.entries
            .iter()
            .filter(|p| p.entry.required && !p.completed)
            .map(|p| &p.entry)
            .collect()
    }
}

/// Age group of a pet on `today`.
pub fn age_group(pet: &Pet, today: NaiveDate) -> AgeGroup {
    if age_in_weeks(pet.birth_date, today) < PRIMARY_SERIES_UNDER_WEEKS {
        AgeGroup::Young
    } else {
        AgeGroup::Adult
    }
}

/// Protocol entries for a species and age group.
pub fn protocol(species: Species, group: AgeGroup) -> Vec<ProtocolEntry> {
    use ProtocolSchedule::{AnnualBooster, Weeks};
    use VaccineType::{Core, NonCore};

    match (species, group) {
        (Species::Dog, AgeGroup::Young) => vec![
            ProtocolEntry::new(
                "V8 ou V10 (Múltipla)",
                Core,
                Weeks(vec![6, 9, 12, 16]),
                "Distemper, hepatitis, parainfluenza, parvovirus, coronavirus, adenovirus, leptospirosis",
                true,
            ),
            ProtocolEntry::new("Antirrábica", Core, Weeks(vec![16]), "Rabies, mandatory by law", true),
            ProtocolEntry::new("Giárdia", NonCore, Weeks(vec![8, 12]), "Giardiasis prevention", false),
            ProtocolEntry::new(
                "Tosse dos Canis",
                NonCore,
                Weeks(vec![8, 12]),
                "Bordetella bronchiseptica and parainfluenza",
                false,
            ),
            ProtocolEntry::new(
                "Leishmaniose",
                NonCore,
                Weeks(vec![16, 20, 24]),
                "Visceral leishmaniasis prevention",
                false,
            ),
        ],
        (Species::Dog, AgeGroup::Adult) => vec![
            ProtocolEntry::new("V8 ou V10 (Múltipla) - Reforço Anual", Core, AnnualBooster, "Annual multivalent booster", true),
            ProtocolEntry::new("Antirrábica - Reforço Anual", Core, AnnualBooster, "Mandatory annual rabies booster", true),
            ProtocolEntry::new("Giárdia - Reforço Anual", NonCore, AnnualBooster, "Annual booster depending on exposure", false),
            ProtocolEntry::new("Tosse dos Canis - Reforço Anual", NonCore, AnnualBooster, "Annual booster for exposed dogs", false),
            ProtocolEntry::new("Leishmaniose - Reforço Anual", NonCore, AnnualBooster, "Annual booster in endemic areas", false),
        ],
        (Species::Cat, AgeGroup::Young) => vec![
            ProtocolEntry::new(
                "Tríplice Felina (V3)",
                Core,
                Weeks(vec![6, 9, 12, 16]),
                "Panleukopenia, rhinotracheitis, calicivirus",
                true,
            ),
            ProtocolEntry::new("Antirrábica", Core, Weeks(vec![16]), "Rabies, mandatory by law", true),
            ProtocolEntry::new("Leucemia Felina (FeLV)", NonCore, Weeks(vec![12, 16]), "For cats with outdoor access", false),
            ProtocolEntry::new("Clamidiose", NonCore, Weeks(vec![9, 12]), "Chlamydia felis", false),
        ],
        (Species::Cat, AgeGroup::Adult) => vec![
            ProtocolEntry::new("Tríplice Felina - Reforço Anual", Core, AnnualBooster, "Annual core booster", true),
            ProtocolEntry::new("Antirrábica - Reforço Anual", Core, AnnualBooster, "Mandatory annual rabies booster", true),
            ProtocolEntry::new("Leucemia Felina - Reforço Anual", NonCore, AnnualBooster, "For cats with outdoor access", false),
        ],
    }
}

/// Protocol that applies to `pet` on `today`.
pub fn protocol_for(pet: &Pet, today: NaiveDate) -> Vec<ProtocolEntry> {
    protocol(pet.species, age_group(pet, today))
}

/// Protocol progress for `pet`, checked against its vaccine records.
///
/// Records belonging to other pets are ignored.
pub fn protocol_progress(pet: &Pet, vaccines: &[VaccineRecord], today: NaiveDate) -> ProtocolReport {
    let age_weeks = age_in_weeks(pet.birth_date, today);
    let group = age_group(pet, today);
    let own: Vec<&VaccineRecord> = vaccines.iter().filter(|v| v.pet_id == pet.id).collect();

    let entries = protocol_for(pet, today)
        .into_iter()
        .map(|entry| ProtocolProgress {
            completed: entry.is_covered_by(own.iter().copied()),
            next_dose_week: entry.next_dose_week(age_weeks),
            entry,
        })
        .collect();

    ProtocolReport {
        pet_id: pet.id.clone(),
        age_weeks,
        age_group: group,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn puppy() -> Pet {
        let mut pet = Pet::new("Bolt".into(), Species::Dog, "Beagle".into(), date(2024, 1, 1), 3.0);
        pet.id = "p1".into();
        pet
    }

    fn vaccine(pet_id: &str, name: &str) -> VaccineRecord {
        VaccineRecord::new(pet_id.into(), name.into(), date(2024, 2, 12), date(2025, 2, 12))
    }

    #[test]
    fn test_age_group_boundary() {
        let pet = puppy();
        // 133 days = 19 weeks
        assert_eq!(age_group(&pet, date(2024, 5, 13)), AgeGroup::Young);
        // 134 days rounds up to 20 weeks
        assert_eq!(age_group(&pet, date(2024, 5, 14)), AgeGroup::Adult);
    }

    #[test]
    fn test_protocol_shapes() {
        let dog_young = protocol(Species::Dog, AgeGroup::Young);
        assert_eq!(dog_young.len(), 5);
        assert!(dog_young.iter().filter(|e| e.required).all(|e| e.vaccine_type == VaccineType::Core));

        let cat_adult = protocol(Species::Cat, AgeGroup::Adult);
        assert_eq!(cat_adult.len(), 3);
        assert!(cat_adult.iter().all(|e| e.schedule == ProtocolSchedule::AnnualBooster));
    }

    #[test]
    fn test_progress_matches_first_word() {
        let pet = puppy();
        let vaccines = vec![
            vaccine("p1", "V10 (Múltipla)"),
            vaccine("p1", "Giárdia"),
            vaccine("other", "Antirrábica"),
        ];
        // 9 weeks old
        let report = protocol_progress(&pet, &vaccines, date(2024, 3, 1));
        assert_eq!(report.age_group, AgeGroup::Young);
        assert_eq!(report.age_weeks, 9);

        let done: Vec<&str> = report
            .entries
            .iter()
            .filter(|p| p.completed)
            .map(|p| p.entry.name.as_str())
            .collect();
        assert_eq!(done, vec!["Giárdia"]);

        let missing: Vec<&str> = report.missing_required().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(missing, vec!["V8 ou V10 (Múltipla)", "Antirrábica"]);
    }

    #[test]
    fn test_adult_progress() {
        let mut pet = puppy();
        pet.birth_date = date(2020, 1, 1);
        let vaccines = vec![vaccine("p1", "Antirrábica"), vaccine("p1", "V8 (Óctupla)")];
        let report = protocol_progress(&pet, &vaccines, date(2024, 3, 1));

        assert_eq!(report.age_group, AgeGroup::Adult);
        let rabies = report.entries.iter().find(|p| p.entry.name.starts_with("Antirrábica")).unwrap();
        assert!(rabies.completed);
        assert_eq!(rabies.next_dose_week, None);
    }

    #[test]
    fn test_protocol_for_cat() {
        let mut kitten = puppy();
        kitten.species = Species::Cat;
        let entries = protocol_for(&kitten, date(2024, 3, 1));
        assert_eq!(entries[0].name, "Tríplice Felina (V3)");
        assert_eq!(protocol_for(&kitten, date(2025, 3, 1)).len(), 3);
    }

    #[test]
    fn test_next_dose_week() {
        let entry = &protocol(Species::Dog, AgeGroup::Young)[0];
        assert_eq!(entry.next_dose_week(0), Some(6));
        assert_eq!(entry.next_dose_week(10), Some(12));
        assert_eq!(entry.next_dose_week(17), None);
    }
}
