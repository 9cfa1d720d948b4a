use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CgpaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid credit unit {unit} for {course}: units must be greater than zero")]
    InvalidUnit { course: String, unit: i64 },

    #[error("Credit totals too large to add up for {0}")]
    Overflow(String),

    #[error("A semester needs at least one course")]
    EmptySemester,

    #[error("Not a results file (unexpected header): {}", .0.display())]
    UnrecognizedStore(PathBuf),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CgpaError>;
