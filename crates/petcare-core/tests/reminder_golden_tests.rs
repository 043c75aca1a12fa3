//! Golden tests for reminder generation and next-dose scheduling.
//!
//! Each case is a small record snapshot with the notification it must produce.

use chrono::{NaiveDate, TimeZone, Utc};
use petcare_core::models::{
    MedicationRecord, NotificationKind, Pet, Priority, Species, VaccineRecord,
};
use petcare_core::reminders::{generate, ReminderPolicy};
use petcare_core::schedule::{ItemKind, RecurrenceTable};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// What the snapshot holds besides the pet "Rex".
enum Record {
    Vaccine { name: &'static str, next_due: NaiveDate },
    Medication { name: &'static str, end_date: NaiveDate, active: bool },
}

/// Test case for notification generation.
struct GoldenCase {
    id: &'static str,
    record: Record,
    now: NaiveDate,
    expected: Option<(NotificationKind, Priority, &'static str)>,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "rex-vaccine-46-days-overdue",
            record: Record::Vaccine { name: "V10 (Múltipla)", next_due: date(2024, 1, 15) },
            now: date(2024, 3, 1),
            expected: Some((
                NotificationKind::VaccineOverdue,
                Priority::High,
                "Rex is 46 days overdue for the V10 (Múltipla) vaccine",
            )),
        },
        GoldenCase {
            id: "vaccine-exactly-at-escalation",
            record: Record::Vaccine { name: "Antirrábica", next_due: date(2024, 1, 31) },
            now: date(2024, 3, 1),
            expected: Some((
                NotificationKind::VaccineOverdue,
                Priority::Medium,
                "Rex is 30 days overdue for the Antirrábica vaccine",
            )),
        },
        GoldenCase {
            id: "vaccine-one-day-overdue",
            record: Record::Vaccine { name: "Giárdia", next_due: date(2024, 2, 29) },
            now: date(2024, 3, 1),
            expected: Some((
                NotificationKind::VaccineOverdue,
                Priority::Medium,
                "Rex is 1 day overdue for the Giárdia vaccine",
            )),
        },
        GoldenCase {
            id: "vaccine-due-today-is-not-overdue",
            record: Record::Vaccine { name: "Giárdia", next_due: date(2024, 3, 1) },
            now: date(2024, 3, 1),
            expected: None,
        },
        GoldenCase {
            id: "medication-ends-in-two-days",
            record: Record::Medication { name: "Apoquel", end_date: date(2024, 3, 3), active: true },
            now: date(2024, 3, 1),
            expected: Some((NotificationKind::MedicationReminder, Priority::Medium, "Rex - Apoquel ends in 2 days")),
        },
        GoldenCase {
            id: "medication-ends-today",
            record: Record::Medication { name: "Apoquel", end_date: date(2024, 3, 1), active: true },
            now: date(2024, 3, 1),
            expected: Some((NotificationKind::MedicationReminder, Priority::High, "Rex - Apoquel ends today")),
        },
        GoldenCase {
            id: "medication-outside-window",
            record: Record::Medication { name: "Apoquel", end_date: date(2024, 3, 5), active: true },
            now: date(2024, 3, 1),
            expected: None,
        },
        GoldenCase {
            id: "medication-already-ended",
            record: Record::Medication { name: "Apoquel", end_date: date(2024, 2, 29), active: true },
            now: date(2024, 3, 1),
            expected: None,
        },
        GoldenCase {
            id: "inactive-medication",
            record: Record::Medication { name: "Apoquel", end_date: date(2024, 3, 1), active: false },
            now: date(2024, 3, 1),
            expected: None,
        },
    ]
}

#[test]
fn test_golden_generation() {
    let mut rex = Pet::new("Rex".into(), Species::Dog, "Golden Retriever".into(), date(2022, 3, 15), 30.0);
    rex.id = "1".into();
    let policy = ReminderPolicy::default();

    for case in get_golden_cases() {
        let (vaccines, medications) = match case.record {
            Record::Vaccine { name, next_due } => (
                vec![VaccineRecord::new("1".into(), name.into(), date(2023, 1, 15), next_due)],
                vec![],
            ),
            Record::Medication { name, end_date, active } => {
                let mut med = MedicationRecord::new("1".into(), name.into(), date(2024, 2, 1), end_date);
                med.is_active = active;
                (vec![], vec![med])
            }
        };
        let now = Utc.from_utc_datetime(&case.now.and_hms_opt(9, 0, 0).unwrap());

        let notifications = generate(std::slice::from_ref(&rex), &vaccines, &medications, now, &policy);

        match case.expected {
            None => assert!(notifications.is_empty(), "case {}: expected nothing, got {:?}", case.id, notifications),
            Some((kind, priority, message)) => {
                assert_eq!(notifications.len(), 1, "case {}", case.id);
                let n = &notifications[0];
                assert_eq!(n.kind, kind, "case {}", case.id);
                assert_eq!(n.priority, priority, "case {}", case.id);
                assert_eq!(n.pet_id, "1", "case {}", case.id);
                assert!(
                    n.message.contains(message),
                    "case {}: '{}' does not contain '{}'",
                    case.id,
                    n.message,
                    message
                );
            }
        }
    }
}

/// Next-dose case: item, kind, applied date, expected due date.
struct NextDueCase {
    name: &'static str,
    kind: ItemKind,
    applied: NaiveDate,
    expected: NaiveDate,
}

fn get_next_due_cases() -> Vec<NextDueCase> {
    vec![
        NextDueCase { name: "Bravecto", kind: ItemKind::Medication, applied: date(2024, 1, 15), expected: date(2024, 4, 15) },
        NextDueCase { name: "V10 (Múltipla)", kind: ItemKind::Vaccine, applied: date(2024, 1, 15), expected: date(2025, 1, 15) },
        NextDueCase { name: "NexGard", kind: ItemKind::Medication, applied: date(2024, 1, 31), expected: date(2024, 2, 29) },
        NextDueCase { name: "antirrábica", kind: ItemKind::Vaccine, applied: date(2024, 2, 29), expected: date(2025, 2, 28) },
        NextDueCase { name: "Gripe Canina", kind: ItemKind::Vaccine, applied: date(2024, 8, 31), expected: date(2025, 2, 28) },
        NextDueCase { name: "Drontal", kind: ItemKind::Medication, applied: date(2023, 11, 30), expected: date(2024, 2, 29) },
    ]
}

#[test]
fn test_golden_next_due() {
    let table = RecurrenceTable::new();
    for case in get_next_due_cases() {
        let next = table.next_due(case.name, case.applied, case.kind).unwrap();
        assert_eq!(next, case.expected, "next due for {}", case.name);
    }
}

#[test]
fn test_vaccine_name_is_not_a_medication() {
    let table = RecurrenceTable::new();
    assert!(table.next_due("Bravecto", date(2024, 1, 15), ItemKind::Vaccine).is_err());
}
