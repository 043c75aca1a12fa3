//! Recurrence tables and next-dose calculation.
//!
//! Handles:
//! - Vaccine boosters (annual, biannual)
//! - Preventive medications (monthly, quarterly)
//! - "Did you mean" suggestions when a name is not in the table

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strsim::{jaro_winkler, normalized_levenshtein};
use tracing::debug;

use crate::dates::add_months;

use super::{ItemKind, ScheduleError, ScheduleResult};

/// Maximum number of suggestions returned on a lookup miss.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum similarity for a name to be suggested.
const MIN_SUGGESTION_SCORE: f64 = 0.55;

/// Re-administration cadence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Monthly,
    Quarterly,
    Biannual,
    Annual,
}

impl Cadence {
    /// Interval in calendar months.
    pub fn months(&self) -> u32 {
        match self {
            Cadence::Monthly => 1,
            Cadence::Quarterly => 3,
            Cadence::Biannual => 6,
            Cadence::Annual => 12,
        }
    }
}

/// How often an item must be re-administered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub interval_months: u32,
    pub cadence: Cadence,
}

impl RecurrenceRule {
    pub fn of(cadence: Cadence) -> Self {
        Self {
            interval_months: cadence.months(),
            cadence,
        }
    }
}

/// Lookup tables: item name → recurrence rule, one table per item kind.
#[derive(Debug, Clone)]
pub struct RecurrenceTable {
    vaccines: HashMap<String, RecurrenceRule>,
    medications: HashMap<String, RecurrenceRule>,
}

impl Default for RecurrenceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RecurrenceTable {
    /// Create a table with the default vaccine and medication rules.
    pub fn new() -> Self {
        Self {
            vaccines: Self::default_vaccines(),
            medications: Self::default_medications(),
        }
    }

    /// Compute the next due date for `item_name` applied on `applied`.
    pub fn next_due(
        &self,
        item_name: &str,
        applied: NaiveDate,
        kind: ItemKind,
    ) -> ScheduleResult<NaiveDate> {
        let rule = self.rule(item_name, kind)?;
        let months = i32::try_from(rule.interval_months).unwrap_or(i32::MAX);
        Ok(add_months(applied, months)?)
    }

    /// Look up the rule for a name. Exact match first, then case-insensitive.
    pub fn rule(&self, item_name: &str, kind: ItemKind) -> ScheduleResult<&RecurrenceRule> {
        let table = self.table(kind);
        let trimmed = item_name.trim();

        if let Some(rule) = table.get(trimmed) {
            return Ok(rule);
        }

        let lower = trimmed.to_lowercase();
        if let Some((_, rule)) = table.iter().find(|(name, _)| name.to_lowercase() == lower) {
            return Ok(rule);
        }

        let suggestions = self.suggest(trimmed, kind);
        debug!(item = trimmed, %kind, ?suggestions, "no recurrence rule");
        Err(ScheduleError::NotFound {
            name: trimmed.to_string(),
            kind,
            suggestions,
        })
    }

    /// Known names closest to `item_name`, best first.
    pub fn suggest(&self, item_name: &str, kind: ItemKind) -> Vec<String> {
        let query = item_name.trim().to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .table(kind)
            .keys()
            .map(|name| (fuzzy_match(&query, &name.to_lowercase()), name))
            .filter(|(score, _)| *score >= MIN_SUGGESTION_SCORE)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });

        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Add or replace a rule.
    pub fn add_rule(&mut self, kind: ItemKind, name: &str, rule: RecurrenceRule) {
        self.table_mut(kind).insert(name.trim().to_string(), rule);
    }

    /// All known names for a kind, sorted.
    pub fn names(&self, kind: ItemKind) -> Vec<String> {
        let mut names: Vec<String> = self.table(kind).keys().cloned().collect();
        names.sort();
        names
    }

    fn table(&self, kind: ItemKind) -> &HashMap<String, RecurrenceRule> {
        match kind {
            ItemKind::Vaccine => &self.vaccines,
            ItemKind::Medication => &self.medications,
        }
    }

    fn table_mut(&mut self, kind: ItemKind) -> &mut HashMap<String, RecurrenceRule> {
        match kind {
            ItemKind::Vaccine => &mut self.vaccines,
            ItemKind::Medication => &mut self.medications,
        }
    }

    /// Default vaccine booster intervals.
    fn default_vaccines() -> HashMap<String, RecurrenceRule> {
        let mut map = HashMap::new();
        let annual = RecurrenceRule::of(Cadence::Annual);

        // Canine multivalent
        map.insert("V8 (Óctupla)".into(), annual);
        map.insert("V10 (Múltipla)".into(), annual);
        map.insert("V12 (Múltipla)".into(), annual);

        // Rabies
        map.insert("Antirrábica".into(), annual);

        // Feline multivalent
        map.insert("Tríplice Felina".into(), annual);
        map.insert("Quádrupla Felina".into(), annual);
        map.insert("Quíntupla Felina".into(), annual);

        // Non-core
        map.insert("Giárdia".into(), annual);
        map.insert("Leishmaniose".into(), annual);
        map.insert("Leucemia Felina".into(), annual);
        map.insert("Tosse dos Canis".into(), annual);
        map.insert("Gripe Canina".into(), RecurrenceRule::of(Cadence::Biannual));

        map
    }

    /// Default preventive medication intervals.
    fn default_medications() -> HashMap<String, RecurrenceRule> {
        let mut map = HashMap::new();
        let monthly = RecurrenceRule::of(Cadence::Monthly);
        let quarterly = RecurrenceRule::of(Cadence::Quarterly);

        // Flea/tick
        map.insert("Bravecto".into(), quarterly);
        map.insert("NexGard".into(), monthly);
        map.insert("Simparic".into(), monthly);
        map.insert("Revolution".into(), monthly);
        map.insert("Advocate".into(), monthly);

        // Dewormers
        map.insert("Drontal".into(), quarterly);
        map.insert("Milbemax".into(), quarterly);

        // Heartworm
        map.insert("Heartgard".into(), monthly);

        map
    }
}

/// Compute fuzzy string similarity using combined metrics.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Jaro-Winkler favors shared prefixes, Levenshtein overall edits
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);
    jw * 0.6 + lev * 0.4
}
