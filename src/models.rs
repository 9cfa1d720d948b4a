use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grading::remark_of;

/// Letter grade shared by per-course scores and the coarse semester band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    pub fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }

    pub fn remark(&self) -> &'static str {
        remark_of(self.letter())
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseEntry {
    pub code: String,
    pub score: i64,
    pub unit: i64,
    pub grade: Grade,
    pub grade_point: i64,
    pub weighted_point: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SemesterRecord {
    pub name: String,
    pub matric: String,
    pub semester: String,
    pub courses: Vec<CourseEntry>,
    pub total_units: i64,
    pub total_weighted_points: i64,
    pub gpa: f64,
    /// Coarse semester letter from the GPA band, not from raw scores.
    pub grade: Grade,
    pub remark: String,
}

impl SemesterRecord {
    /// Flatten into one storage row per course, repeating the semester scalars.
    pub fn rows(&self) -> impl Iterator<Item = PersistedRow> + '_ {
        self.courses.iter().map(move |c| PersistedRow {
            name: self.name.clone(),
            matric: self.matric.clone(),
            semester: self.semester.clone(),
            course: c.code.clone(),
            score: c.score,
            unit: c.unit,
            grade: c.grade.letter().to_string(),
            grade_point: c.grade_point,
            weighted_point: c.weighted_point,
            gpa: self.gpa,
            remark: self.remark.clone(),
        })
    }
}

/// One line of the results file. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Matric")]
    pub matric: String,
    #[serde(rename = "Semester")]
    pub semester: String,
    #[serde(rename = "Course")]
    pub course: String,
    #[serde(rename = "Score")]
    pub score: i64,
    #[serde(rename = "Unit")]
    pub unit: i64,
    #[serde(rename = "Grade")]
    pub grade: String,
    #[serde(rename = "Grade Point")]
    pub grade_point: i64,
    #[serde(rename = "Weighted Point")]
    pub weighted_point: i64,
    #[serde(rename = "GPA")]
    pub gpa: f64,
    #[serde(rename = "Remark")]
    pub remark: String,
}

pub const HEADER: [&str; 11] = [
    "Name",
    "Matric",
    "Semester",
    "Course",
    "Score",
    "Unit",
    "Grade",
    "Grade Point",
    "Weighted Point",
    "GPA",
    "Remark",
];
