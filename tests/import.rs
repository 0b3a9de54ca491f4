#![forbid(unsafe_code)]
use corvee::io::import_employees_csv;
use std::fs;
use tempfile::tempdir;

#[test]
fn prefers_a_name_like_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(&path, "Id,Name\n1,Alice\n2,Bob\n3,\n").unwrap();

    let employees = import_employees_csv(&path).unwrap();
    let names: Vec<&str> = employees.iter().map(|e| e.as_str()).collect();
    // ligne 3 : cellule Name vide, repli sur la première valeur non vide
    assert_eq!(names, ["Alice", "Bob", "3"]);
}

#[test]
fn header_match_ignores_case() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(&path, "id,EMPLOYEE\n7,Carol\n8,Dan\n").unwrap();

    let employees = import_employees_csv(&path).unwrap();
    let names: Vec<&str> = employees.iter().map(|e| e.as_str()).collect();
    assert_eq!(names, ["Carol", "Dan"]);
}

#[test]
fn falls_back_to_first_non_empty_value() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(&path, "Person,Team\nCharlie,A\n,B\n  ,  \n").unwrap();

    let employees = import_employees_csv(&path).unwrap();
    let names: Vec<&str> = employees.iter().map(|e| e.as_str()).collect();
    assert_eq!(names, ["Charlie", "B"]);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(import_employees_csv(dir.path().join("absent.csv")).is_err());
}
