use anyhow::{Result, bail};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::features::auth::{self, types::StudentLogin};
use crate::features::register::{
    flow,
    wizard::{SubmitApplied, VerifyApplied, Wizard},
};
use crate::http::ApiClient;

#[derive(Debug)]
pub struct Args {
    pub roll_number: Option<String>,
    pub email: Option<String>,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Drive the two-step registration wizard end to end: verify the identity,
/// then set the password.
/// # Errors
/// Returns an error carrying the wizard's own message when either step is
/// rejected.
pub async fn register(api: &ApiClient, args: Args) -> Result<()> {
    let mut wizard = Wizard::new();
    if let Some(roll_number) = &args.roll_number {
        wizard.set_roll_number(roll_number);
    }
    if let Some(email) = &args.email {
        wizard.set_email(email);
    }

    match flow::verify(api, &mut wizard).await {
        VerifyApplied::Advanced => {}
        VerifyApplied::Rejected | VerifyApplied::Stale => {
            bail!(
                "{}",
                wizard
                    .error()
                    .unwrap_or("Failed to verify student. Please try again.")
            );
        }
    }

    if let Some(identity) = wizard.identity() {
        debug!("verified student {}", identity.student_id);
        println!(
            "Verified: {} ({}), {}",
            identity.name,
            identity.roll_number.as_deref().unwrap_or("no roll number"),
            identity.course
        );
    }
    if wizard.is_reset_mode() {
        println!("Student already registered; resetting the password.");
    }

    wizard.set_password(args.password.expose_secret());
    wizard.set_confirm_password(args.confirm_password.expose_secret());

    match flow::submit(api, &mut wizard).await {
        SubmitApplied::Completed { message } => {
            println!("{message}");
            Ok(())
        }
        SubmitApplied::Rejected | SubmitApplied::Stale => {
            bail!(
                "{}",
                wizard
                    .error()
                    .unwrap_or("Failed to complete registration. Please try again.")
            );
        }
    }
}

/// Sign in to the student portal and report who the session belongs to.
/// # Errors
/// Returns an error with the backend's message when the login is rejected.
pub async fn login(
    api: &ApiClient,
    email_or_roll: &str,
    password: &SecretString,
) -> Result<()> {
    match auth::client::student_login(api, email_or_roll, password.expose_secret()).await? {
        StudentLogin::Authenticated(session) => {
            println!(
                "Signed in as {} ({})",
                session.student.name,
                session.student.roll_number.as_deref().unwrap_or("no roll number")
            );
            Ok(())
        }
        StudentLogin::Rejected { message } => bail!("{message}"),
    }
}
