use log::debug;

use crate::aggregator::cgpa_of;
use crate::error::{CgpaError, Result};
use crate::grading::{grade_of, semester_grade, weighted_average};
use crate::models::{CourseEntry, SemesterRecord};
use crate::store::RecordStore;

/// Accumulates graded courses for one student's semester. Never touches I/O.
#[derive(Debug)]
pub struct SemesterBuilder {
    name: String,
    matric: String,
    semester: String,
    courses: Vec<CourseEntry>,
    total_units: i64,
    total_weighted_points: i64,
}

impl SemesterBuilder {
    pub fn new(name: &str, matric: &str, semester: &str) -> Self {
        Self {
            name: name.to_string(),
            matric: matric.to_string(),
            semester: semester.to_string(),
            courses: Vec::new(),
            total_units: 0,
            total_weighted_points: 0,
        }
    }

    /// Grade and add one course. A unit of zero or less, or one so large the
    /// totals would overflow, is rejected and the running totals stay as they were.
    pub fn add_course(&mut self, code: &str, score: i64, unit: i64) -> Result<&CourseEntry> {
        if unit <= 0 {
            return Err(CgpaError::InvalidUnit {
                course: code.to_string(),
                unit,
            });
        }
        let (grade, grade_point) = grade_of(score);
        let overflow = || CgpaError::Overflow(code.to_string());
        let weighted_point = grade_point.checked_mul(unit).ok_or_else(overflow)?;
        let total_units = self.total_units.checked_add(unit).ok_or_else(overflow)?;
        let total_weighted_points = self
            .total_weighted_points
            .checked_add(weighted_point)
            .ok_or_else(overflow)?;

        self.total_units = total_units;
        self.total_weighted_points = total_weighted_points;
        self.courses.push(CourseEntry {
            code: code.to_string(),
            score,
            unit,
            grade,
            grade_point,
            weighted_point,
        });
        self.courses
            .last()
            .ok_or_else(|| CgpaError::Other(format!("course {code} was not recorded")))
    }

    pub fn courses(&self) -> &[CourseEntry] {
        &self.courses
    }

    pub fn total_units(&self) -> i64 {
        self.total_units
    }

    pub fn total_weighted_points(&self) -> i64 {
        self.total_weighted_points
    }

    pub fn finish(self) -> Result<SemesterRecord> {
        let gpa = weighted_average(self.total_weighted_points, self.total_units)
            .ok_or(CgpaError::EmptySemester)?;
        let grade = semester_grade(gpa);
        Ok(SemesterRecord {
            name: self.name,
            matric: self.matric,
            semester: self.semester,
            courses: self.courses,
            total_units: self.total_units,
            total_weighted_points: self.total_weighted_points,
            gpa,
            grade,
            remark: grade.remark().to_string(),
        })
    }
}

pub struct Submission {
    pub record: SemesterRecord,
    pub rows_written: usize,
    /// Running CGPA after this semester was stored.
    pub cgpa: Option<f64>,
}

/// Persist a finished semester, then re-derive the student's CGPA from the store.
pub fn submit(store: &RecordStore, record: SemesterRecord) -> Result<Submission> {
    let rows_written = store.append(&record)?;
    let cgpa = cgpa_of(store, &record.matric)?;
    debug!("{} now has CGPA {:?}", record.matric, cgpa);
    Ok(Submission {
        record,
        rows_written,
        cgpa,
    })
}
