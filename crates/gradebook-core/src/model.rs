//! Core data model types for gradebook.
//!
//! A [`Student`] owns its subjects, and each subject owns the ordered list of
//! grades recorded for it. Subject and student keys are compared
//! case-insensitively through [`normalize_key`].

use std::collections::HashMap;
use std::fmt;

use crate::error::GradebookError;
use crate::statistics::mean;

/// Normalise a user-supplied identifier or subject name into a lookup key.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The inclusive range a grade must fall in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeScale {
    pub min: f64,
    pub max: f64,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10.0,
        }
    }
}

impl GradeScale {
    /// Build a scale, rejecting empty or non-finite ranges.
    pub fn new(min: f64, max: f64) -> Result<Self, GradebookError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(GradebookError::InvalidScale { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns `true` if `grade` lies within the scale (bounds included).
    pub fn contains(&self, grade: f64) -> bool {
        grade >= self.min && grade <= self.max
    }

    /// Check a grade against the scale.
    pub fn check(&self, grade: f64) -> Result<f64, GradebookError> {
        if self.contains(grade) {
            Ok(grade)
        } else {
            Err(GradebookError::GradeOutOfRange {
                grade,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl fmt::Display for GradeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.min, self.max)
    }
}

/// Parse grade text typed by the user and check it against `scale`.
///
/// Accepts either `.` or `,` as the decimal separator.
pub fn parse_grade(text: &str, scale: &GradeScale) -> Result<f64, GradebookError> {
    let trimmed = text.trim();
    let grade: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| GradebookError::InvalidGrade(trimmed.to_string()))?;
    if !grade.is_finite() {
        return Err(GradebookError::InvalidGrade(trimmed.to_string()));
    }
    scale.check(grade)
}

/// Reject blank subject names, returning the trimmed name otherwise.
pub fn check_subject(subject: &str) -> Result<&str, GradebookError> {
    let trimmed = subject.trim();
    if trimmed.is_empty() {
        return Err(GradebookError::EmptySubject);
    }
    Ok(trimmed)
}

/// The grades recorded for one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectRecord {
    /// Subject name as first entered.
    pub name: String,
    /// Grades in the order they were added.
    pub grades: Vec<f64>,
}

impl SubjectRecord {
    pub fn average(&self) -> f64 {
        mean(&self.grades)
    }
}

/// A registered student and their grades.
#[derive(Debug, Clone)]
pub struct Student {
    name: String,
    id: String,
    subjects: Vec<SubjectRecord>,
    subject_index: HashMap<String, usize>,
}

impl Student {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            subjects: Vec::new(),
            subject_index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append a grade to `subject`, creating the subject on first use.
    ///
    /// Range checks belong to the caller; see [`crate::roster::Roster::add_grade_to_student`].
    pub fn add_grade(&mut self, subject: &str, grade: f64) {
        match self.find_subject(subject) {
            Some(index) => self.subjects[index].grades.push(grade),
            None => {
                self.subject_index
                    .insert(normalize_key(subject), self.subjects.len());
                self.subjects.push(SubjectRecord {
                    name: subject.trim().to_string(),
                    grades: vec![grade],
                });
            }
        }
    }

    /// Mean of the grades for `subject`, or 0 if the subject is unknown.
    pub fn subject_average(&self, subject: &str) -> f64 {
        self.find_subject(subject)
            .map(|index| self.subjects[index].average())
            .unwrap_or(0.0)
    }

    /// Mean across every grade of every subject, or 0 if none are recorded.
    pub fn overall_average(&self) -> f64 {
        let all: Vec<f64> = self
            .subjects
            .iter()
            .flat_map(|s| s.grades.iter().copied())
            .collect();
        mean(&all)
    }

    /// The grades recorded for `subject`, if any.
    pub fn grades(&self, subject: &str) -> Option<&[f64]> {
        self.find_subject(subject)
            .map(|index| self.subjects[index].grades.as_slice())
    }

    /// Subjects in the order they were first graded.
    pub fn subjects(&self) -> &[SubjectRecord] {
        &self.subjects
    }

    /// Total number of grades across all subjects.
    pub fn grade_count(&self) -> usize {
        self.subjects.iter().map(|s| s.grades.len()).sum()
    }

    fn find_subject(&self, subject: &str) -> Option<usize> {
        self.subject_index.get(&normalize_key(subject)).copied()
    }
}
