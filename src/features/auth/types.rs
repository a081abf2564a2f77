use serde::{Deserialize, Serialize};

use crate::features::students::types::Student;

/// Admin profile stored under the user-data session key.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AdminUser {
    pub username: String,
    pub role: String,
}

/// Outcome of the local admin credential check.
#[derive(Clone, Debug, PartialEq)]
pub enum AdminLogin {
    Authenticated(AdminUser),
    InvalidCredentials,
}

/// Identity snapshot returned by the registration status check.
/// `is_registered` means the student has already replaced the default
/// password; the wizard uses it only to pick reset-versus-registration
/// wording, never to block the flow.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatus {
    pub is_registered: bool,
    pub student_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    pub course: String,
}

/// Login payload for the student portal.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentLoginRequest {
    pub email_or_roll: String,
    pub password: String,
}

/// Student login/registration response: the record (password nulled) plus a
/// bearer token.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StudentSession {
    pub student: Student,
    pub token: String,
}

/// Outcome of a student portal login.
#[derive(Clone, Debug)]
pub enum StudentLogin {
    Authenticated(StudentSession),
    /// Bad credentials or missing input; `message` is user-facing.
    Rejected { message: String },
}
