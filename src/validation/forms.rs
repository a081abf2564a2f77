//! Predefined rule sets for the console's forms, plus [`FormState`], the
//! value/error pair every form page keeps while the user types.

use super::{Rule, RuleSet, ValidationReport, rules, validate_form};
use std::collections::HashMap;

/// Error-map key for failures that belong to the whole form rather than a
/// single field (backend rejections, transport problems).
pub const GENERAL: &str = "general";

/// Rules for the add/edit student form.
#[must_use]
pub fn student_rules() -> RuleSet {
    RuleSet::new()
        .field(
            "name",
            vec![
                Rule::new("Name is required", rules::required),
                Rule::new("Name must be at least 2 characters", |v| {
                    rules::min_length(v, 2)
                }),
                Rule::new("Name must be less than 100 characters", |v| {
                    rules::max_length(v, 100)
                }),
                Rule::new("Name can only contain letters and spaces", rules::name),
            ],
        )
        .field(
            "email",
            vec![
                Rule::new("Email is required", rules::required),
                Rule::new("Please enter a valid email address", rules::email),
                Rule::new("Email must be less than 100 characters", |v| {
                    rules::max_length(v, 100)
                }),
            ],
        )
        .field(
            "phone",
            vec![
                Rule::new("Phone number is required", rules::required),
                Rule::new("Please enter a valid phone number", rules::phone),
                Rule::new("Phone number must be at least 10 digits", |v| {
                    rules::min_length(v, 10)
                }),
                Rule::new("Phone number must be less than 15 digits", |v| {
                    rules::max_length(v, 15)
                }),
            ],
        )
        .field(
            "course",
            vec![
                Rule::new("Course is required", rules::required),
                Rule::new("Course must be at least 2 characters", |v| {
                    rules::min_length(v, 2)
                }),
                Rule::new("Course must be less than 50 characters", |v| {
                    rules::max_length(v, 50)
                }),
            ],
        )
        .field(
            "gender",
            vec![Rule::new("Invalid gender selected", rules::gender)],
        )
        .field(
            "dob",
            vec![Rule::new(
                "Invalid date of birth or date is in the future",
                rules::dob,
            )],
        )
        .field(
            "city",
            vec![
                Rule::new("City must be less than 100 characters", |v| {
                    rules::max_length(v, 100)
                }),
                Rule::new("City contains invalid characters", rules::city),
            ],
        )
}

/// Rules for the admin login form.
#[must_use]
pub fn login_rules() -> RuleSet {
    RuleSet::new()
        .field(
            "username",
            vec![Rule::new("Username is required", rules::required)],
        )
        .field(
            "password",
            vec![Rule::new("Password is required", rules::required)],
        )
}

/// Form values and their current error messages. Setting a field clears that
/// field's error so stale messages disappear as soon as the user edits;
/// validating or recording a general failure replaces the error map wholesale.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value and clears any error recorded for that field.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        self.errors.remove(field);
    }

    #[must_use]
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn general_error(&self) -> Option<&str> {
        self.error(GENERAL)
    }

    /// Replaces all errors with a single whole-form message.
    pub fn set_general_error(&mut self, message: impl Into<String>) {
        self.errors.clear();
        self.errors.insert(GENERAL.to_string(), message.into());
    }

    /// Validates the current values, replacing the error map with the
    /// report's. Returns whether the form is valid.
    pub fn validate(&mut self, rules: &RuleSet) -> bool {
        let report = validate_form(&self.values, rules);
        self.apply(report)
    }

    /// Installs a prepared report's errors. Returns `report.is_valid`.
    pub fn apply(&mut self, report: ValidationReport) -> bool {
        let is_valid = report.is_valid;
        self.errors = report.errors;
        is_valid
    }
}
