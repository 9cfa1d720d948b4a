use crate::models::Grade;

/// Map a raw course score to its letter and grade point.
///
/// Thresholds are inclusive lower bounds. Anything below 40, including
/// out-of-range negatives, lands in F.
pub fn grade_of(score: i64) -> (Grade, i64) {
    match score {
        s if s >= 70 => (Grade::A, 5),
        s if s >= 60 => (Grade::B, 4),
        s if s >= 50 => (Grade::C, 3),
        s if s >= 45 => (Grade::D, 2),
        s if s >= 40 => (Grade::E, 1),
        _ => (Grade::F, 0),
    }
}

pub fn remark_of(letter: &str) -> &'static str {
    match letter {
        "A" => "Excellent",
        "B" => "Very Good",
        "C" => "Good",
        "D" => "Fair",
        "E" => "Poor",
        "F" => "Fail \u{2013} Needs Improvement",
        _ => "Invalid",
    }
}

/// Coarse semester letter on the 5-point GPA scale.
///
/// Not the same bands as `grade_of`: those are on raw scores out of 100.
/// There is no E band here.
pub fn semester_grade(gpa: f64) -> Grade {
    if gpa >= 4.5 {
        Grade::A
    } else if gpa >= 3.5 {
        Grade::B
    } else if gpa >= 2.5 {
        Grade::C
    } else if gpa >= 1.5 {
        Grade::D
    } else {
        Grade::F
    }
}

/// Weighted average rounded to two decimals. `None` when there are no units.
pub fn weighted_average(weighted_points: i64, units: i64) -> Option<f64> {
    if units <= 0 {
        return None;
    }
    Some(round2(weighted_points as f64 / units as f64))
}

/// Round to two places, exact halves to even: 1.125 -> 1.12, 1.375 -> 1.38.
pub fn round2(val: f64) -> f64 {
    (val * 100.0).round_ties_even() / 100.0
}
