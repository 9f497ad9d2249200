//! The interactive menu loop.
//!
//! A [`Session`] reads one option at a time, runs it to completion against the
//! roster and loops until the user exits or input runs out.

use std::io::{self, BufRead, Write};

use comfy_table::{Cell, Table};
use tracing::{debug, info};

use gradebook_core::model::{check_subject, parse_grade, GradeScale};
use gradebook_core::report::{format_roster, format_student};
use gradebook_core::roster::Roster;
use gradebook_core::statistics::StudentSummary;

const MENU: &str = "===== STUDENT GRADES MANAGER =====\n\
1 - Add student\n\
2 - Add grade to a student\n\
3 - Show all student records\n\
4 - Show averages of a student\n\
5 - Exit\n";

const GOODBYE: &str = "Exiting... Goodbye!";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddStudent,
    AddGrade,
    ShowAll,
    ShowStudent,
    Exit,
}

impl MenuOption {
    /// Map the text typed at the menu prompt to an option.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuOption::AddStudent),
            "2" => Some(MenuOption::AddGrade),
            "3" => Some(MenuOption::ShowAll),
            "4" => Some(MenuOption::ShowStudent),
            "5" => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive session over any line-based input and output.
pub struct Session<R, W> {
    roster: Roster,
    average_decimals: usize,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(roster: Roster, average_decimals: usize, input: R, output: W) -> Self {
        Self {
            roster,
            average_decimals,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Run the menu loop until the user exits or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        info!("session started");
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let flow = match self.prompt("Choose an option: ")? {
                None => self.farewell(true)?,
                Some(choice) => match MenuOption::parse(&choice) {
                    Some(option) => {
                        debug!(?option, "menu option selected");
                        self.execute(option)?
                    }
                    None => {
                        writeln!(self.output, "Invalid option. Try again.")?;
                        Flow::Continue
                    }
                },
            };

            if flow == Flow::Exit {
                break;
            }
            writeln!(self.output)?;
        }
        self.output.flush()?;
        info!(students = self.roster.len(), "session ended");
        Ok(())
    }

    fn execute(&mut self, option: MenuOption) -> io::Result<Flow> {
        match option {
            MenuOption::AddStudent => self.add_student(),
            MenuOption::AddGrade => self.add_grade(),
            MenuOption::ShowAll => self.show_all(),
            MenuOption::ShowStudent => self.show_student(),
            MenuOption::Exit => self.farewell(false),
        }
    }

    fn add_student(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Student name: ")? else {
            return self.farewell(true);
        };
        let Some(id) = self.prompt("Student ID: ")? else {
            return self.farewell(true);
        };

        match self.roster.add_student(&name, &id) {
            Ok(_) => writeln!(self.output, "Student added successfully.")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    fn add_grade(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter student ID: ")? else {
            return self.farewell(true);
        };
        if let Err(e) = self.roster.require_student(&id) {
            writeln!(self.output, "{e}")?;
            return Ok(Flow::Continue);
        }

        let Some(subject) = self.prompt("Subject name: ")? else {
            return self.farewell(true);
        };
        if let Err(e) = check_subject(&subject) {
            writeln!(self.output, "{e}")?;
            return Ok(Flow::Continue);
        }

        let scale: GradeScale = *self.roster.scale();
        let Some(text) = self.prompt(&format!("Grade ({scale}): "))? else {
            return self.farewell(true);
        };

        let outcome = parse_grade(&text, &scale)
            .and_then(|grade| self.roster.add_grade_to_student(&id, &subject, grade));
        match outcome {
            Ok(()) => writeln!(self.output, "Grade added successfully.")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    fn show_all(&mut self) -> io::Result<Flow> {
        let text = format_roster(&self.roster, self.average_decimals);
        self.output.write_all(text.as_bytes())?;
        Ok(Flow::Continue)
    }

    fn show_student(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter student ID: ")? else {
            return self.farewell(true);
        };
        let student = match self.roster.require_student(&id) {
            Ok(student) => student,
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok(Flow::Continue);
            }
        };

        let record = format_student(student, self.average_decimals);
        let summary = StudentSummary::compute(student);
        self.output.write_all(record.as_bytes())?;
        if !summary.subjects.is_empty() {
            writeln!(
                self.output,
                "{}",
                averages_table(&summary, self.average_decimals)
            )?;
        }
        Ok(Flow::Continue)
    }

    fn farewell(&mut self, end_of_input: bool) -> io::Result<Flow> {
        if end_of_input {
            // The pending prompt has no trailing newline.
            writeln!(self.output)?;
            debug!("input closed");
        }
        writeln!(self.output, "{GOODBYE}")?;
        Ok(Flow::Exit)
    }

    /// Print `label` and read one line. `None` means input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&line);
        Ok(Some(text.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Per-subject averages for one student as a table.
pub fn averages_table(summary: &StudentSummary, decimals: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Subject", "Grades", "Average", "Lowest", "Highest"]);

    for subject in &summary.subjects {
        table.add_row(vec![
            Cell::new(&subject.subject),
            Cell::new(subject.grade_count),
            Cell::new(format!("{:.*}", decimals, subject.average)),
            Cell::new(subject.lowest),
            Cell::new(subject.highest),
        ]);
    }
    table.add_row(vec![
        Cell::new("Overall"),
        Cell::new(summary.subjects.iter().map(|s| s.grade_count).sum::<usize>()),
        Cell::new(format!("{:.*}", decimals, summary.overall_average)),
        Cell::new(""),
        Cell::new(""),
    ]);
    table
}
