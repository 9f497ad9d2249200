//! The roster of registered students.
//!
//! Students are kept in registration order and indexed by their normalised
//! identifier, so lookups ignore case and surrounding whitespace.

use std::collections::HashMap;

use tracing::debug;

use crate::error::GradebookError;
use crate::model::{check_subject, normalize_key, GradeScale, Student};

/// All registered students.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
    index: HashMap<String, usize>,
    scale: GradeScale,
}

impl Roster {
    /// Create an empty roster that accepts grades within `scale`.
    pub fn new(scale: GradeScale) -> Self {
        Self {
            students: Vec::new(),
            index: HashMap::new(),
            scale,
        }
    }

    pub fn scale(&self) -> &GradeScale {
        &self.scale
    }

    /// Register a new student.
    ///
    /// Fails if the name or id is blank, or the id is already taken.
    pub fn add_student(&mut self, name: &str, id: &str) -> Result<&Student, GradebookError> {
        let name = name.trim();
        let id = id.trim();
        if name.is_empty() || id.is_empty() {
            debug!("rejected student with blank name or id");
            return Err(GradebookError::MissingNameOrId);
        }

        let key = normalize_key(id);
        if self.index.contains_key(&key) {
            debug!(id, "rejected duplicate student id");
            return Err(GradebookError::DuplicateId);
        }

        let position = self.students.len();
        self.index.insert(key, position);
        self.students.push(Student::new(name, id));
        debug!(student = name, id, total = self.students.len(), "student added");
        Ok(&self.students[position])
    }

    /// Look up a student by id, ignoring case. Blank ids never match.
    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.position(id).map(|i| &self.students[i])
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.position(id).map(move |i| &mut self.students[i])
    }

    /// Like [`Roster::find_by_id`], but reports an unknown id as an error.
    pub fn require_student(&self, id: &str) -> Result<&Student, GradebookError> {
        self.find_by_id(id).ok_or(GradebookError::StudentNotFound)
    }

    /// Record `grade` for `subject` on the student registered as `id`.
    ///
    /// Nothing is stored unless the student exists, the subject is non-blank
    /// and the grade is within the roster's scale.
    pub fn add_grade_to_student(
        &mut self,
        id: &str,
        subject: &str,
        grade: f64,
    ) -> Result<(), GradebookError> {
        let scale = self.scale;
        let student = self
            .find_by_id_mut(id)
            .ok_or(GradebookError::StudentNotFound)?;

        let subject = match check_subject(subject) {
            Ok(subject) => subject,
            Err(e) => {
                debug!(id, "rejected blank subject");
                return Err(e);
            }
        };
        if let Err(e) = scale.check(grade) {
            debug!(id, subject, grade, "rejected out-of-range grade");
            return Err(e);
        }

        student.add_grade(subject, grade);
        debug!(id, subject, grade, "grade recorded");
        Ok(())
    }

    /// Students in registration order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        let key = normalize_key(id);
        if key.is_empty() {
            return None;
        }
        self.index.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with_ana() -> Roster {
        let mut roster = Roster::default();
        roster.add_student("Ana", "1").unwrap();
        roster
    }

    #[test]
    fn add_and_find_student() {
        let mut roster = Roster::default();
        let student = roster.add_student("  Ana ", " A1 ").unwrap();
        assert_eq!(student.name(), "Ana");
        assert_eq!(student.id(), "A1");

        assert!(roster.find_by_id("a1").is_some());
        assert!(roster.find_by_id(" A1").is_some());
        assert!(roster.find_by_id("A2").is_none());
        assert!(roster.find_by_id("").is_none());
        assert!(roster.find_by_id("   ").is_none());
    }

    #[test]
    fn blank_name_or_id_rejected() {
        let mut roster = Roster::default();
        assert_eq!(
            roster.add_student("", "1").unwrap_err(),
            GradebookError::MissingNameOrId
        );
        assert_eq!(
            roster.add_student("Ana", "  ").unwrap_err(),
            GradebookError::MissingNameOrId
        );
        assert!(roster.is_empty());
    }

    #[test]
    fn duplicate_id_rejected_case_insensitively() {
        let mut roster = Roster::default();
        roster.add_student("Ana", "abc").unwrap();
        let err = roster.add_student("Bruno", "ABC").unwrap_err();
        assert_eq!(err, GradebookError::DuplicateId);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.find_by_id("abc").unwrap().name(), "Ana");
    }

    #[test]
    fn worked_example() {
        let mut roster = roster_with_ana();
        roster.add_grade_to_student("1", "Math", 7.0).unwrap();
        roster.add_grade_to_student("1", "Math", 9.0).unwrap();

        let ana = roster.find_by_id("1").unwrap();
        assert!((ana.subject_average("Math") - 8.0).abs() < f64::EPSILON);
        assert!((ana.overall_average() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_grade_not_stored() {
        let mut roster = roster_with_ana();
        for grade in [-0.5, 10.01, 100.0] {
            let err = roster.add_grade_to_student("1", "Math", grade).unwrap_err();
            assert!(matches!(err, GradebookError::GradeOutOfRange { .. }));
        }
        let ana = roster.find_by_id("1").unwrap();
        assert_eq!(ana.grade_count(), 0);
        assert!(ana.subjects().is_empty());
    }

    #[test]
    fn boundary_grades_accepted() {
        let mut roster = roster_with_ana();
        roster.add_grade_to_student("1", "Math", 0.0).unwrap();
        roster.add_grade_to_student("1", "Math", 10.0).unwrap();
        assert_eq!(roster.find_by_id("1").unwrap().grade_count(), 2);
    }

    #[test]
    fn blank_subject_rejected() {
        let mut roster = roster_with_ana();
        assert_eq!(
            roster.add_grade_to_student("1", "  ", 5.0).unwrap_err(),
            GradebookError::EmptySubject
        );
        assert_eq!(roster.find_by_id("1").unwrap().grade_count(), 0);
    }

    #[test]
    fn unknown_student_rejected() {
        let mut roster = roster_with_ana();
        let err = roster.add_grade_to_student("2", "Math", 5.0).unwrap_err();
        assert_eq!(err, GradebookError::StudentNotFound);
    }

    #[test]
    fn require_student_reports_unknown_id() {
        let roster = roster_with_ana();
        assert_eq!(roster.require_student(" 1 ").unwrap().name(), "Ana");
        assert_eq!(
            roster.require_student("2").unwrap_err(),
            GradebookError::StudentNotFound
        );
        assert_eq!(
            roster.require_student("").unwrap_err(),
            GradebookError::StudentNotFound
        );
    }

    #[test]
    fn custom_scale() {
        let mut roster = Roster::new(GradeScale::new(0.0, 20.0).unwrap());
        roster.add_student("Ana", "1").unwrap();
        roster.add_grade_to_student("1", "Math", 18.0).unwrap();
        assert!(roster.add_grade_to_student("1", "Math", 21.0).is_err());
    }

    #[test]
    fn students_keep_registration_order() {
        let mut roster = Roster::default();
        roster.add_student("Carla", "3").unwrap();
        roster.add_student("Ana", "1").unwrap();
        let ids: Vec<&str> = roster.students().iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["3", "1"]);
    }
}
