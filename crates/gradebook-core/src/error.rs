//! Gradebook error types.
//!
//! Every variant is a user-input failure; the `Display` text is the message
//! shown to the user before the menu continues.

use thiserror::Error;

/// Errors raised while registering students or recording grades.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradebookError {
    /// The student name or identifier was blank.
    #[error("Name and ID cannot be empty.")]
    MissingNameOrId,

    /// Another student already uses this identifier (case-insensitive).
    #[error("A student with this ID already exists.")]
    DuplicateId,

    /// No student is registered under this identifier.
    #[error("Student not found. Check the ID.")]
    StudentNotFound,

    /// The subject name was blank.
    #[error("Subject cannot be empty.")]
    EmptySubject,

    /// The grade text is not a finite number.
    #[error("Invalid grade. Use numbers (e.g., 7.5).")]
    InvalidGrade(String),

    /// The grade lies outside the configured scale.
    #[error("Grade must be between {min} and {max}.")]
    GradeOutOfRange { grade: f64, min: f64, max: f64 },

    /// The configured scale is empty or not finite.
    #[error("invalid grade scale: min {min} must be finite and below max {max}")]
    InvalidScale { min: f64, max: f64 },
}
