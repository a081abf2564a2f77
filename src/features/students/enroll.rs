//! Admin-side enrollment: validate the form record, derive the next roll
//! number from the roster size, and create the student with the shared
//! default password. Students replace that password through the
//! registration wizard.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::info;

use super::client;
use super::types::Student;
use crate::errors::Error;
use crate::http::ApiClient;
use crate::validation::forms::student_rules;
use crate::validation::validate_form;

/// Password every newly enrolled student starts with. A student counts as
/// registered once they have replaced it.
pub const DEFAULT_STUDENT_PASSWORD: &str = "student123";

/// Outcome of an enrollment attempt.
#[derive(Clone, Debug)]
pub enum Enrollment {
    /// The student was created. `message` is the confirmation text shown to
    /// the admin, roll number and default password included.
    Created {
        student: Student,
        roll_number: String,
        message: String,
    },
    /// The form record failed validation; nothing was sent.
    Invalid { errors: HashMap<String, String> },
    /// The backend refused the record or could not be reached.
    Failed { message: String },
}

/// Validates and enrolls a student from a form record.
///
/// # Errors
/// Only `Error::Unauthorized` escapes; every other failure is absorbed into
/// [`Enrollment::Failed`] so callers can surface it as a form-level message.
pub async fn enroll_student(
    api: &ApiClient,
    values: &HashMap<String, String>,
) -> Result<Enrollment, Error> {
    let report = validate_form(values, &student_rules());
    if !report.is_valid {
        return Ok(Enrollment::Invalid {
            errors: report.errors,
        });
    }

    match create_with_roll(api, values).await {
        Ok((student, roll_number)) => {
            info!("student {} enrolled with roll number {}", student.id, roll_number);
            let message = format!(
                "Student added successfully!\n\nRoll Number: {roll_number}\nDefault Password: {DEFAULT_STUDENT_PASSWORD}\n\nStudent can register using their Roll Number or Email to set their own password."
            );
            Ok(Enrollment::Created {
                student,
                roll_number,
                message,
            })
        }
        Err(Error::Unauthorized) => Err(Error::Unauthorized),
        Err(Error::Http { message, .. }) => Ok(Enrollment::Failed { message }),
        Err(_) => Ok(Enrollment::Failed {
            message: "Failed to add student. Please try again.".to_string(),
        }),
    }
}

/// Counts the roster, derives the next roll number, and creates the record.
async fn create_with_roll(
    api: &ApiClient,
    values: &HashMap<String, String>,
) -> Result<(Student, String), Error> {
    let roster = client::list_students(api).await?;
    let roll_number = next_roll_number(roster.len());
    let draft = draft_from_values(values, &roll_number);
    let student = client::create_student(api, &draft).await?;
    Ok((student, roll_number))
}

/// Next roll number for a roster of `count` students, zero-padded to four
/// digits: `STU0001`, `STU0042`. Derived from the count, not the max, so
/// deletions can make it collide; the backend's unique constraint is the
/// real guard.
#[must_use]
pub fn next_roll_number(count: usize) -> String {
    format!("STU{:04}", count + 1)
}

fn draft_from_values(values: &HashMap<String, String>, roll_number: &str) -> Student {
    let field = |name: &str| values.get(name).cloned().unwrap_or_default();
    let optional = |name: &str| values.get(name).cloned().filter(|v| !v.is_empty());

    Student {
        name: field("name"),
        email: field("email"),
        phone: optional("phone"),
        course: field("course"),
        gender: optional("gender"),
        dob: values
            .get("dob")
            .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok()),
        city: optional("city"),
        password: Some(DEFAULT_STUDENT_PASSWORD.to_string()),
        roll_number: Some(roll_number.to_string()),
        ..Student::default()
    }
}
