//! State machine for the registration wizard.
//!
//! The wizard never performs I/O. Each step is split into a `begin_*` call
//! that validates local state and hands back a request descriptor, and an
//! `apply_*` call that folds the eventual outcome back in. Every request
//! carries an [`OpTicket`]; tickets minted before the latest state change
//! are stale and their outcomes are dropped, so a response that arrives
//! after the student pressed Back cannot resurrect the abandoned step.

use secrecy::{ExposeSecret, SecretString};

use crate::{errors::Error, features::auth::types::RegistrationStatus};

/// Which screen of the wizard is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Identifier entry, nothing verified yet.
    Verify,
    /// Identity confirmed, choosing a password.
    Password,
    /// Password saved, completion message shown.
    Done,
}

/// Ticket tying an in-flight request to the wizard state that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpTicket(u64);

/// Outcome of [`Wizard::begin_verify`].
#[derive(Debug)]
pub enum VerifyStart {
    /// Caller should look up the identifier and report back with the ticket.
    Request { ticket: OpTicket, identifier: String },
    /// Local validation failed or the wizard was not ready; no request.
    Skipped,
}

/// Outcome of [`Wizard::apply_verify`].
#[derive(Debug, PartialEq, Eq)]
pub enum VerifyApplied {
    /// Identity confirmed, the wizard moved to the password step.
    Advanced,
    /// Verification failed; the error is set and the step is unchanged.
    Rejected,
    /// The ticket was stale and the outcome was dropped.
    Stale,
}

/// Outcome of [`Wizard::begin_submit`].
#[derive(Debug)]
pub enum SubmitStart {
    /// Caller should save the password and report back with the ticket.
    Request {
        ticket: OpTicket,
        student_id: i64,
        password: SecretString,
    },
    /// Local validation failed or the wizard was not ready; no request.
    Skipped,
}

/// Outcome of [`Wizard::apply_submit`].
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitApplied {
    /// Password saved; the message is ready to show the student.
    Completed { message: String },
    /// The save failed; the error is set and inputs are preserved.
    Rejected,
    /// The ticket was stale and the outcome was dropped.
    Stale,
}

/// The registration wizard.
///
/// Holds the form fields for both steps plus the verified identity once the
/// first step succeeds. `identity` is `Some` exactly when the step is past
/// [`Step::Verify`].
#[derive(Debug)]
pub struct Wizard {
    step: Step,
    identity: Option<RegistrationStatus>,
    roll_number: String,
    email: String,
    password: SecretString,
    confirm_password: SecretString,
    error: Option<String>,
    busy: bool,
    seq: u64,
}

impl Wizard {
    /// A fresh wizard on the verify step with empty fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: Step::Verify,
            identity: None,
            roll_number: String::new(),
            email: String::new(),
            password: SecretString::default(),
            confirm_password: SecretString::default(),
            error: None,
            busy: false,
            seq: 0,
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn identity(&self) -> Option<&RegistrationStatus> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the flow is resetting an existing password rather than
    /// registering for the first time. Meaningful once verified.
    #[must_use]
    pub fn is_reset_mode(&self) -> bool {
        self.identity.as_ref().is_some_and(|s| s.is_registered)
    }

    pub fn set_roll_number(&mut self, value: &str) {
        self.roll_number = value.to_string();
        self.error = None;
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
        self.error = None;
    }

    pub fn set_password(&mut self, value: &str) {
        self.password = SecretString::from(value.to_string());
        self.error = None;
    }

    pub fn set_confirm_password(&mut self, value: &str) {
        self.confirm_password = SecretString::from(value.to_string());
        self.error = None;
    }

    /// Starts identity verification. The roll number wins when both fields
    /// are filled in.
    pub fn begin_verify(&mut self) -> VerifyStart {
        if self.step != Step::Verify || self.busy {
            return VerifyStart::Skipped;
        }
        if self.roll_number.is_empty() && self.email.is_empty() {
            self.error = Some("Please enter either Roll Number or Email".to_string());
            return VerifyStart::Skipped;
        }

        let identifier = if self.roll_number.is_empty() {
            self.email.clone()
        } else {
            self.roll_number.clone()
        };
        self.error = None;
        self.busy = true;
        self.seq += 1;
        VerifyStart::Request {
            ticket: OpTicket(self.seq),
            identifier,
        }
    }

    /// Folds the verification outcome back into the wizard.
    pub fn apply_verify(
        &mut self,
        ticket: OpTicket,
        outcome: Result<RegistrationStatus, Error>,
    ) -> VerifyApplied {
        if ticket.0 != self.seq {
            return VerifyApplied::Stale;
        }
        self.busy = false;

        match outcome {
            Ok(status) => {
                self.identity = Some(status);
                self.step = Step::Password;
                self.error = None;
                VerifyApplied::Advanced
            }
            Err(Error::Http { status: 404, .. }) => {
                self.error =
                    Some("Student not found. Please contact admin to add you first.".to_string());
                VerifyApplied::Rejected
            }
            Err(Error::Http {
                status: 200,
                message,
            }) => {
                // Envelope-level failure on an otherwise successful response;
                // surface the backend's own wording.
                self.error = Some(message);
                VerifyApplied::Rejected
            }
            Err(_) => {
                self.error = Some("Failed to verify student. Please try again.".to_string());
                VerifyApplied::Rejected
            }
        }
    }

    /// Starts the password save. Local checks run in order and the first
    /// failure wins.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.step != Step::Password || self.busy {
            return SubmitStart::Skipped;
        }
        let Some(identity) = self.identity.as_ref() else {
            return SubmitStart::Skipped;
        };

        if self.password.expose_secret().is_empty() {
            self.error = Some("Password is required".to_string());
            return SubmitStart::Skipped;
        }
        if self.password.expose_secret().chars().count() < 6 {
            self.error = Some("Password must be at least 6 characters long".to_string());
            return SubmitStart::Skipped;
        }
        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            self.error = Some("Passwords do not match".to_string());
            return SubmitStart::Skipped;
        }

        let student_id = identity.student_id;
        self.error = None;
        self.busy = true;
        self.seq += 1;
        SubmitStart::Request {
            ticket: OpTicket(self.seq),
            student_id,
            password: self.password.clone(),
        }
    }

    /// Folds the password save outcome back into the wizard.
    pub fn apply_submit(&mut self, ticket: OpTicket, outcome: Result<(), Error>) -> SubmitApplied {
        if ticket.0 != self.seq {
            return SubmitApplied::Stale;
        }
        self.busy = false;

        match outcome {
            Ok(()) => {
                let (action, roll) = match self.identity.as_ref() {
                    Some(status) => (
                        if status.is_registered {
                            "Password reset"
                        } else {
                            "Registration"
                        },
                        status.roll_number.as_deref().unwrap_or_default(),
                    ),
                    None => ("Registration", ""),
                };
                let message = format!(
                    "{action} successful!\n\nYour Roll Number: {roll}\nYou can now login with your Roll Number or Email and new password."
                );
                self.step = Step::Done;
                self.error = None;
                SubmitApplied::Completed { message }
            }
            Err(_) => {
                self.error =
                    Some("Failed to complete registration. Please try again.".to_string());
                SubmitApplied::Rejected
            }
        }
    }

    /// Returns to the verify step, forgetting the verified identity and all
    /// field values. Any in-flight request becomes stale. The current error
    /// stays visible until a field changes.
    pub fn back(&mut self) {
        if self.step != Step::Password {
            return;
        }
        self.step = Step::Verify;
        self.identity = None;
        self.roll_number.clear();
        self.email.clear();
        self.password = SecretString::default();
        self.confirm_password = SecretString::default();
        self.busy = false;
        self.seq += 1;
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
