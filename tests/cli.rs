use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const HEADER: &str =
    "Name,Matric,Semester,Course,Score,Unit,Grade,Grade Point,Weighted Point,GPA,Remark";

fn cgpa(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cgpa").unwrap();
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    cmd
}

/// Point settings at a fresh data dir and return the results file path.
fn init(home: &Path) -> PathBuf {
    let data_dir = home.join("grades");
    cgpa(home)
        .args(["init", "--data-dir"])
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized cgpa"));
    data_dir.join("results.csv")
}

fn write_results(path: &Path, rows: &[&str]) {
    let mut content = format!("{HEADER}\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(path, content).unwrap();
}

const ADA_FIRST: [&str; 2] = [
    "Ada Obi,CSC/001,First,CSC101,75,3,A,5,15,4.2,Very Good",
    "Ada Obi,CSC/001,First,MTH101,55,2,C,3,6,4.2,Very Good",
];
const ADA_SECOND: [&str; 2] = [
    "Ada Obi,CSC/001,Second,CSC102,52,2,C,3,6,2.5,Good",
    "Ada Obi,CSC/001,Second,MTH102,47,2,D,2,4,2.5,Good",
];
const BAYO_FIRST: &str = "Bayo Ade,CSC/002,First,CSC101,30,3,F,0,0,0.0,Fail \u{2013} Needs Improvement";

#[test]
fn test_status_before_any_results() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    cgpa(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No results yet"));
}

#[test]
fn test_lookup_without_records_reports_no_data() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    cgpa(home.path())
        .args(["lookup", "csc/001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No record found for CSC/001 (no data)"));
}

#[test]
fn test_lookup_aggregates_all_semesters() {
    let home = tempfile::tempdir().unwrap();
    let results = init(home.path());
    let mut rows: Vec<&str> = ADA_FIRST.to_vec();
    rows.push(BAYO_FIRST);
    rows.extend(ADA_SECOND);
    write_results(&results, &rows);

    cgpa(home.path())
        .args(["lookup", "csc/001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CGPA of 3.44"))
        .stdout(predicate::str::contains("31 weighted points over 9 units"));
}

#[test]
fn test_all_fail_student_has_zero_cgpa() {
    let home = tempfile::tempdir().unwrap();
    let results = init(home.path());
    write_results(&results, &[BAYO_FIRST]);

    cgpa(home.path())
        .args(["lookup", "CSC/002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CGPA of 0.00"));
}

#[test]
fn test_results_filters_by_matric() {
    let home = tempfile::tempdir().unwrap();
    let results = init(home.path());
    let mut rows: Vec<&str> = ADA_FIRST.to_vec();
    rows.push(BAYO_FIRST);
    write_results(&results, &rows);

    cgpa(home.path())
        .args(["results", "--matric", "csc/002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bayo Ade"))
        .stdout(predicate::str::contains("Ada Obi").not())
        .stdout(predicate::str::contains("1 rows"));
}

#[test]
fn test_results_skips_truncated_tail() {
    let home = tempfile::tempdir().unwrap();
    let results = init(home.path());
    let mut rows: Vec<&str> = ADA_FIRST.to_vec();
    rows.push("Ada Obi,CSC/001,Sec");
    write_results(&results, &rows);

    cgpa(home.path())
        .arg("results")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rows"))
        .stdout(predicate::str::contains("1 malformed rows skipped"));
}

#[test]
fn test_transcript_breaks_down_semesters() {
    let home = tempfile::tempdir().unwrap();
    let results = init(home.path());
    let mut rows: Vec<&str> = ADA_FIRST.to_vec();
    rows.extend(ADA_SECOND);
    write_results(&results, &rows);

    cgpa(home.path())
        .args(["transcript", "CSC/001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First"))
        .stdout(predicate::str::contains("4.20"))
        .stdout(predicate::str::contains("2.50"))
        .stdout(predicate::str::contains("CGPA: 3.44 over 9 units"));
}

#[test]
fn test_status_counts_rows_and_students() {
    let home = tempfile::tempdir().unwrap();
    let results = init(home.path());
    let mut rows: Vec<&str> = ADA_FIRST.to_vec();
    rows.push(BAYO_FIRST);
    rows.extend(ADA_SECOND);
    write_results(&results, &rows);

    cgpa(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows:       5"))
        .stdout(predicate::str::contains("Students:   2"))
        .stdout(predicate::str::contains("Semesters:  3"));
}

#[test]
fn test_foreign_file_is_an_error() {
    let home = tempfile::tempdir().unwrap();
    let results = init(home.path());
    std::fs::write(&results, "Date,Description,Amount\n01/15/2025,COFFEE,-4.50\n").unwrap();

    cgpa(home.path())
        .args(["lookup", "CSC/001"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not a results file"));
}

#[test]
fn test_load_requires_results_file() {
    let home = tempfile::tempdir().unwrap();
    let empty = home.path().join("empty");
    std::fs::create_dir_all(&empty).unwrap();

    cgpa(home.path())
        .arg("load")
        .arg(&empty)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No results file found"));
}

#[test]
fn test_load_switches_data_dir() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    let other = home.path().join("archive");
    std::fs::create_dir_all(&other).unwrap();
    write_results(&other.join("results.csv"), &[BAYO_FIRST]);

    cgpa(home.path()).arg("load").arg(&other).assert().success();
    cgpa(home.path())
        .args(["lookup", "CSC/002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CGPA of 0.00"));
}

#[test]
fn test_backup_copies_results() {
    let home = tempfile::tempdir().unwrap();
    let results = init(home.path());
    write_results(&results, &ADA_FIRST);
    let dest = home.path().join("copy.csv");

    cgpa(home.path())
        .args(["backup", "--output"])
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup saved"));
    assert_eq!(
        std::fs::read_to_string(&dest).unwrap(),
        std::fs::read_to_string(&results).unwrap()
    );
}

#[test]
fn test_backup_without_results_fails() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    cgpa(home.path())
        .arg("backup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to back up"));
}
