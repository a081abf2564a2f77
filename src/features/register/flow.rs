//! Async driver connecting the wizard to the backend.
//!
//! Each function pairs a `begin_*`/`apply_*` couple around one network call.
//! Callers that manage their own concurrency can skip this module and drive
//! the wizard directly.

use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use super::wizard::{SubmitApplied, SubmitStart, VerifyApplied, VerifyStart, Wizard};
use crate::{
    errors::Error,
    features::{auth, students},
    http::ApiClient,
};

/// Runs the identity lookup for the wizard's current identifier.
pub async fn verify(api: &ApiClient, wizard: &mut Wizard) -> VerifyApplied {
    let VerifyStart::Request { ticket, identifier } = wizard.begin_verify() else {
        return VerifyApplied::Rejected;
    };
    let outcome = auth::client::check_registration(api, &identifier).await;
    wizard.apply_verify(ticket, outcome)
}

/// Saves the chosen password for the verified student.
pub async fn submit(api: &ApiClient, wizard: &mut Wizard) -> SubmitApplied {
    let SubmitStart::Request {
        ticket,
        student_id,
        password,
    } = wizard.begin_submit()
    else {
        return SubmitApplied::Rejected;
    };
    let outcome = update_password(api, student_id, &password).await;
    if outcome.is_ok() {
        info!("password saved for student {student_id}");
    }
    wizard.apply_submit(ticket, outcome)
}

/// Fetches the full student record and writes it back with the new password.
/// The backend has no dedicated password endpoint; the update must carry
/// every current field or the write would blank them.
async fn update_password(
    api: &ApiClient,
    student_id: i64,
    password: &SecretString,
) -> Result<(), Error> {
    let mut student = students::client::get_student(api, student_id).await?;
    student.password = Some(password.expose_secret().to_string());
    students::client::update_student(api, student_id, &student).await
}
