use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use crate::cli::normalize_matric;
use crate::error::Result;
use crate::fmt::gpa;
use crate::store::RecordStore;

pub fn run(store: &RecordStore, matric: Option<&str>) -> Result<()> {
    let matric = matric.map(normalize_matric);
    let mut rows = store.read_all()?;

    let mut table = Table::new();
    table.set_header(vec![
        "Name", "Matric", "Semester", "Course", "Score", "Unit", "Grade", "GPA", "Remark",
    ]);
    let mut shown = 0usize;
    for row in rows.by_ref() {
        let row = row?;
        if matric.as_deref().is_some_and(|m| m != row.matric) {
            continue;
        }
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(&row.matric),
            Cell::new(&row.semester),
            Cell::new(&row.course),
            Cell::new(row.score).set_alignment(CellAlignment::Right),
            Cell::new(row.unit).set_alignment(CellAlignment::Right),
            Cell::new(&row.grade),
            Cell::new(gpa(row.gpa)).set_alignment(CellAlignment::Right),
            Cell::new(&row.remark),
        ]);
        shown += 1;
    }

    if shown == 0 {
        println!("{}", "No results found.".yellow());
    } else {
        println!("All Saved Results\n{table}");
        println!("{shown} rows");
    }
    if rows.skipped() > 0 {
        println!(
            "{}",
            format!("{} malformed rows skipped", rows.skipped()).dimmed()
        );
    }
    Ok(())
}
