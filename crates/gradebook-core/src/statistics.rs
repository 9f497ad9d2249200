//! Grade averages and per-student summaries.

use crate::model::Student;

/// Arithmetic mean of `values`, or 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Averages for one subject of a student.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectSummary {
    pub subject: String,
    pub grade_count: usize,
    pub average: f64,
    pub lowest: f64,
    pub highest: f64,
}

/// Averages for a whole student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary {
    pub name: String,
    pub id: String,
    pub subjects: Vec<SubjectSummary>,
    pub overall_average: f64,
}

impl StudentSummary {
    /// Compute the summary for `student`. Subjects keep their recorded order.
    pub fn compute(student: &Student) -> Self {
        let subjects = student
            .subjects()
            .iter()
            .map(|record| SubjectSummary {
                subject: record.name.clone(),
                grade_count: record.grades.len(),
                average: record.average(),
                lowest: record.grades.iter().copied().fold(f64::INFINITY, f64::min),
                highest: record
                    .grades
                    .iter()
                    .copied()
                    .fold(f64::NEG_INFINITY, f64::max),
            })
            .collect();

        Self {
            name: student.name().to_string(),
            id: student.id().to_string(),
            subjects,
            overall_average: student.overall_average(),
        }
    }
}
