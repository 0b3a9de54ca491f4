#![forbid(unsafe_code)]
use corvee::{
    build_workbook, export_schedule_json, export_workbook_csv, generate_schedule,
    model::{Employee, Role, Roster, Schedule, WeekAssignment},
    notes::NoteStore,
    notify::{prepare_reminder, TextReminder},
    scheduler::AssignOptions,
};
use std::fs;
use tempfile::tempdir;

fn sample_roster() -> Roster {
    Roster::new(
        vec![Employee::new("Alice"), Employee::new("Bob")],
        vec![Role::new("Floors"), Role::new("Trash")],
    )
}

// Planning fixé à la main : une seule semaine, affectations connues.
fn sample_schedule() -> Schedule {
    let mut week = WeekAssignment::new();
    week.assign(Role::new("Floors"), Employee::new("Alice"));
    week.assign(Role::new("Trash"), Employee::new("Bob"));
    Schedule::new(vec![week])
}

#[test]
fn grid_has_expected_shape() {
    let roster = Roster::new(
        vec![
            Employee::new("Alice"),
            Employee::new("Bob"),
            Employee::new("Carol"),
        ],
        vec![Role::new("Floors"), Role::new("Trash"), Role::new("Kitchen")],
    );
    let schedule = generate_schedule(&roster, AssignOptions::seeded(8)).unwrap();
    let workbook = build_workbook(&roster, &schedule, &NoteStore::new());

    let grid = workbook.sheet("Assignments").unwrap();
    assert_eq!(grid.rows.len(), schedule.len() + 1);
    for row in &grid.rows {
        assert_eq!(row.len(), roster.roles.len() + 2);
    }

    assert_eq!(workbook.sheet("Employees").unwrap().rows.len(), 4);
    assert_eq!(workbook.sheet("Roles").unwrap().rows.len(), 4);
}

#[test]
fn notes_column_concatenates_in_role_order() {
    let roster = sample_roster();
    let schedule = sample_schedule();
    let mut notes = NoteStore::new();
    notes.set_note(1, Role::new("Trash"), "sortir jeudi");
    notes.set_note(1, Role::new("Floors"), "passer l'aspirateur");

    let workbook = build_workbook(&roster, &schedule, &notes);
    let grid = workbook.sheet("Assignments").unwrap();

    let row: Vec<&str> = grid.rows[1].iter().map(String::as_str).collect();
    assert_eq!(
        row,
        [
            "1",
            "Alice",
            "Bob",
            "Floors: passer l'aspirateur\nTrash: sortir jeudi",
        ]
    );
}

#[test]
fn notes_of_unknown_week_stay_out_of_the_grid() {
    let roster = sample_roster();
    let schedule = sample_schedule();
    let mut notes = NoteStore::new();
    notes.set_note(12, Role::new("Trash"), "hors planning");

    let workbook = build_workbook(&roster, &schedule, &notes);
    let grid = workbook.sheet("Assignments").unwrap();
    assert_eq!(grid.rows[1][3], "");
}

#[test]
fn workbook_writes_one_csv_per_sheet() {
    let dir = tempdir().unwrap();
    let stem = dir.path().join("Maintenance_and_Cleaning_Schedule");

    let roster = sample_roster();
    let schedule = sample_schedule();
    let workbook = build_workbook(&roster, &schedule, &NoteStore::new());

    let paths = export_workbook_csv(&stem, &workbook).unwrap();
    assert_eq!(paths.len(), 3);
    for path in &paths {
        assert!(path.exists(), "{} manquant", path.display());
    }

    let grid = fs::read_to_string(&paths[0]).unwrap();
    assert!(grid.starts_with("Week,Floors,Trash,Notes"));
    assert!(grid.contains("1,Alice,Bob"));
}

#[test]
fn json_export_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("planning.json");

    let roster = sample_roster();
    let schedule = sample_schedule();
    export_schedule_json(&path, &roster, &schedule).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["roster"]["employees"].as_array().unwrap().len(), 2);
    assert_eq!(value["schedule"]["weeks"].as_array().unwrap().len(), 1);
}

#[test]
fn reminder_lists_duties_in_role_order() {
    let roster = Roster::new(
        vec![Employee::new("Alice")],
        vec![Role::new("Floors"), Role::new("Trash")],
    );
    let mut week = WeekAssignment::new();
    week.assign(Role::new("Floors"), Employee::new("Alice"));
    week.assign(Role::new("Trash"), Employee::new("Alice"));
    let schedule = Schedule::new(vec![week]);

    let reminder = prepare_reminder(&roster, &schedule, "Alice", 1, &TextReminder).unwrap();
    assert_eq!(reminder.employee, "Alice");
    insta::assert_snapshot!(reminder.content, @r###"
    Bonjour Alice,

    Pour la semaine 1, tu es de corvée sur :
    - Floors
    - Trash

    Merci de signaler tout empêchement avant le début de la semaine.
    "###);
}

#[test]
fn reminder_fails_for_unknown_employee_or_idle_week() {
    let roster = sample_roster();
    let schedule = sample_schedule();

    assert!(prepare_reminder(&roster, &schedule, "Zoé", 1, &TextReminder).is_err());
    assert!(prepare_reminder(&roster, &schedule, "Alice", 9, &TextReminder).is_err());
}
