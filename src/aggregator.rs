use crate::error::{CgpaError, Result};
use crate::grading::weighted_average;
use crate::models::PersistedRow;
use crate::store::RecordStore;

pub struct CgpaSummary {
    pub matric: String,
    pub total_units: i64,
    pub total_weighted_points: i64,
    pub cgpa: f64,
}

pub struct SemesterSummary {
    pub semester: String,
    pub courses: usize,
    pub total_units: i64,
    pub total_weighted_points: i64,
    pub gpa: f64,
}

pub struct Transcript {
    pub name: String,
    pub matric: String,
    pub semesters: Vec<SemesterSummary>,
    pub cgpa: CgpaSummary,
}

/// Cumulative GPA over every stored row for `matric`.
///
/// `Ok(None)` means no usable rows, which is not the same as a CGPA of 0.
pub fn cgpa_of(store: &RecordStore, matric: &str) -> Result<Option<f64>> {
    Ok(summarize(store, matric)?.map(|s| s.cgpa))
}

/// Running unit and weighted-point sums that refuse to wrap.
#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    units: i64,
    weighted_points: i64,
}

impl Totals {
    fn add(&mut self, units: i64, weighted_points: i64, matric: &str) -> Result<()> {
        match (
            self.units.checked_add(units),
            self.weighted_points.checked_add(weighted_points),
        ) {
            (Some(units), Some(weighted_points)) => {
                self.units = units;
                self.weighted_points = weighted_points;
                Ok(())
            }
            _ => Err(CgpaError::Overflow(matric.to_string())),
        }
    }
}

pub fn summarize(store: &RecordStore, matric: &str) -> Result<Option<CgpaSummary>> {
    let mut totals = Totals::default();
    for row in store.read_all()? {
        let row = row?;
        if row.matric == matric {
            totals.add(row.unit, row.weighted_point, matric)?;
        }
    }
    Ok(weighted_average(totals.weighted_points, totals.units).map(|cgpa| CgpaSummary {
        matric: matric.to_string(),
        total_units: totals.units,
        total_weighted_points: totals.weighted_points,
        cgpa,
    }))
}

/// Per-semester totals in first-appearance order, plus the overall CGPA.
///
/// Repeated submissions of the same semester fold into one line, the same way
/// they inflate the CGPA weighting.
pub fn transcript(store: &RecordStore, matric: &str) -> Result<Option<Transcript>> {
    let rows: Vec<PersistedRow> = store
        .read_all()?
        .filter(|r| r.as_ref().map_or(true, |row| row.matric == matric))
        .collect::<Result<Vec<_>>>()?;

    let Some(first) = rows.first() else {
        return Ok(None);
    };
    let name = first.name.clone();

    let mut semesters: Vec<(String, usize, Totals)> = Vec::new();
    let mut overall = Totals::default();
    for row in &rows {
        let idx = match semesters.iter().position(|(s, ..)| *s == row.semester) {
            Some(i) => i,
            None => {
                semesters.push((row.semester.clone(), 0, Totals::default()));
                semesters.len() - 1
            }
        };
        let entry = &mut semesters[idx];
        entry.1 += 1;
        entry.2.add(row.unit, row.weighted_point, matric)?;
        overall.add(row.unit, row.weighted_point, matric)?;
    }

    let Some(cgpa) = weighted_average(overall.weighted_points, overall.units) else {
        return Ok(None);
    };

    let semesters = semesters
        .into_iter()
        .filter_map(|(semester, courses, totals)| {
            weighted_average(totals.weighted_points, totals.units).map(|gpa| SemesterSummary {
                semester,
                courses,
                total_units: totals.units,
                total_weighted_points: totals.weighted_points,
                gpa,
            })
        })
        .collect();

    Ok(Some(Transcript {
        name,
        matric: matric.to_string(),
        semesters,
        cgpa: CgpaSummary {
            matric: matric.to_string(),
            total_units: overall.units,
            total_weighted_points: overall.weighted_points,
            cgpa,
        },
    }))
}
