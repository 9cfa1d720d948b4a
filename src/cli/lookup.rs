use colored::Colorize;
use dialoguer::Input;

use crate::aggregator::summarize;
use crate::cli::normalize_matric;
use crate::error::Result;
use crate::fmt::gpa;
use crate::store::RecordStore;

pub fn prompt(store: &RecordStore) -> Result<()> {
    let matric: String = Input::new()
        .with_prompt("Student matric number")
        .interact_text()?;
    run(store, &matric)
}

pub fn run(store: &RecordStore, matric: &str) -> Result<()> {
    let matric = normalize_matric(matric);
    match summarize(store, &matric)? {
        Some(summary) => {
            println!(
                "Student {} has a CGPA of {}",
                summary.matric,
                gpa(summary.cgpa).bold()
            );
            println!(
                "  {} weighted points over {} units",
                summary.total_weighted_points, summary.total_units
            );
        }
        None => println!("{}", format!("No record found for {matric} (no data).").yellow()),
    }
    Ok(())
}
