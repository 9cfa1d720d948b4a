use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use crate::aggregator::transcript;
use crate::cli::normalize_matric;
use crate::error::Result;
use crate::fmt::gpa;
use crate::grading::semester_grade;
use crate::store::RecordStore;

pub fn run(store: &RecordStore, matric: &str) -> Result<()> {
    let matric = normalize_matric(matric);
    let Some(t) = transcript(store, &matric)? else {
        println!("{}", format!("No record found for {matric} (no data).").yellow());
        return Ok(());
    };

    println!("{} ({})", t.name.bold(), t.matric);
    let mut table = Table::new();
    table.set_header(vec!["Semester", "Courses", "Units", "Weighted", "GPA", "Grade"]);
    for s in &t.semesters {
        table.add_row(vec![
            Cell::new(&s.semester),
            Cell::new(s.courses).set_alignment(CellAlignment::Right),
            Cell::new(s.total_units).set_alignment(CellAlignment::Right),
            Cell::new(s.total_weighted_points).set_alignment(CellAlignment::Right),
            Cell::new(gpa(s.gpa)).set_alignment(CellAlignment::Right),
            Cell::new(semester_grade(s.gpa)),
        ]);
    }
    println!("{table}");
    println!(
        "CGPA: {} over {} units",
        gpa(t.cgpa.cgpa).bold(),
        t.cgpa.total_units
    );
    Ok(())
}
