use colored::Colorize;
use comfy_table::{Cell, Table};
use dialoguer::{Confirm, Input};

use crate::calculator::{submit, SemesterBuilder};
use crate::cli::normalize_matric;
use crate::error::{CgpaError, Result};
use crate::fmt::{capitalize, gpa};
use crate::models::SemesterRecord;
use crate::store::RecordStore;

fn prompt_text(prompt: &str) -> Result<String> {
    let value: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(value.trim().to_string())
}

/// Non-numeric input is re-prompted by the input widget itself.
fn prompt_number(prompt: String) -> Result<i64> {
    Ok(Input::<i64>::new().with_prompt(prompt).interact_text()?)
}

/// One course as typed in, before grading.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseLine {
    pub code: String,
    pub score: i64,
    pub unit: i64,
}

/// Where course lines come from while a semester is being entered.
pub trait CourseSource {
    fn next_course(&mut self) -> Result<CourseLine>;
    fn add_another(&mut self) -> Result<bool>;
}

struct TerminalCourses;

impl CourseSource for TerminalCourses {
    fn next_course(&mut self) -> Result<CourseLine> {
        println!();
        let code = prompt_text("Course code (e.g. CSC101)")?.to_uppercase();
        let score = prompt_number(format!("{code} score (0-100)"))?;
        let unit = prompt_number(format!("{code} credit unit"))?;
        Ok(CourseLine { code, score, unit })
    }

    fn add_another(&mut self) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt("Add another course?")
            .default(true)
            .interact()?)
    }
}

/// Feed courses into `builder` until the source says stop. A rejected unit
/// asks for that course again rather than ending the semester.
pub fn collect_courses(builder: &mut SemesterBuilder, source: &mut impl CourseSource) -> Result<()> {
    loop {
        let line = source.next_course()?;
        match builder.add_course(&line.code, line.score, line.unit) {
            Ok(entry) => println!(
                "  {} {} \u{2192} {} ({} pts)",
                entry.code, entry.score, entry.grade, entry.weighted_point
            ),
            Err(e @ (CgpaError::InvalidUnit { .. } | CgpaError::Overflow(_))) => {
                println!("{}", format!("{e}. Enter the course again.").red());
                continue;
            }
            Err(e) => return Err(e),
        }

        println!(
            "  {} courses, {} units, {} weighted points so far",
            builder.courses().len(),
            builder.total_units(),
            builder.total_weighted_points()
        );

        if !source.add_another()? {
            return Ok(());
        }
    }
}

pub fn run(store: &RecordStore) -> Result<()> {
    println!("\n{}", "Add New Semester Result".bold());
    let name = prompt_text("Student name")?;
    let matric = normalize_matric(&prompt_text("Matric no")?);
    let semester = capitalize(&prompt_text("Semester (e.g. First, Second)")?);

    let mut builder = SemesterBuilder::new(&name, &matric, &semester);
    collect_courses(&mut builder, &mut TerminalCourses)?;

    let record = builder.finish()?;
    print_summary(&record);

    let submitted = submit(store, record)?;
    println!(
        "{}",
        format!(
            "\nSaved {} rows for {} ({}) to {}",
            submitted.rows_written,
            submitted.record.matric,
            submitted.record.semester,
            store.path().display()
        )
        .green()
    );
    match submitted.cgpa {
        Some(cgpa) => println!("Cumulative GPA (CGPA) so far: {}", gpa(cgpa).bold()),
        None => println!("{}", "No previous records found for CGPA.".yellow()),
    }
    Ok(())
}

pub fn print_summary(record: &SemesterRecord) {
    println!("\n{}", "Semester Result Summary".bold());
    println!(
        "Student: {} ({}) | Semester: {}",
        record.name, record.matric, record.semester
    );

    let mut table = Table::new();
    table.set_header(vec!["Course", "Score", "Unit", "Grade", "GP", "WP"]);
    for c in &record.courses {
        table.add_row(vec![
            Cell::new(&c.code),
            Cell::new(c.score),
            Cell::new(c.unit),
            Cell::new(c.grade),
            Cell::new(c.grade_point),
            Cell::new(c.weighted_point),
        ]);
    }
    println!("{table}");
    println!("Total units:           {}", record.total_units);
    println!("Total weighted points: {}", record.total_weighted_points);
    println!("GPA:                   {} ({})", gpa(record.gpa), record.grade);
    println!("Remark:                {}", record.remark);
}
