//! Human-readable student records.

use crate::model::Student;
use crate::roster::Roster;

/// Heading printed above the full roster listing.
pub const RECORDS_HEADER: &str = "===== STUDENT RECORDS =====";

/// Printed instead of the listing when no student is registered.
pub const EMPTY_ROSTER: &str = "No students registered.";

/// Join grades the way they are displayed: `7, 8.5, 10`.
pub fn format_grades(grades: &[f64]) -> String {
    if grades.is_empty() {
        return "No grades".to_string();
    }
    grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format one student's record with averages rounded to `decimals` places.
///
/// ```text
/// Student: Ana | ID: 1
///   Subject: Math | Grades: 7, 9
///   Overall average: 8.00
/// ```
pub fn format_student(student: &Student, decimals: usize) -> String {
    let mut out = format!("Student: {} | ID: {}\n", student.name(), student.id());

    if student.subjects().is_empty() {
        out.push_str("  No grades recorded.\n");
        return out;
    }

    for record in student.subjects() {
        out.push_str(&format!(
            "  Subject: {} | Grades: {}\n",
            record.name,
            format_grades(&record.grades)
        ));
    }
    out.push_str(&format!(
        "  Overall average: {:.*}\n",
        decimals,
        student.overall_average()
    ));
    out
}

/// Format every student in registration order, under [`RECORDS_HEADER`].
pub fn format_roster(roster: &Roster, decimals: usize) -> String {
    if roster.is_empty() {
        return format!("{EMPTY_ROSTER}\n");
    }

    let mut out = String::new();
    out.push_str(RECORDS_HEADER);
    out.push('\n');
    for student in roster.students() {
        out.push_str(&format_student(student, decimals));
    }
    out
}
