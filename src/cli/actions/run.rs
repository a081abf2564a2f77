use std::sync::Arc;

use anyhow::{Result, bail};
use secrecy::ExposeSecret;

use crate::cli::actions::{Action, records, register, students};
use crate::config::AppConfig;
use crate::features::auth::{self, types::AdminLogin};
use crate::http::ApiClient;
use crate::navigator::StaticNavigator;
use crate::session::MemorySessionStore;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action, config: &AppConfig) -> Result<()> {
    match action {
        Action::Dashboard => records::dashboard(&admin_client(config)?).await,
        Action::StudentList => students::list(&admin_client(config)?).await,
        Action::StudentShow { id } => students::show(&admin_client(config)?, id).await,
        Action::StudentAdd { record } => students::add(&admin_client(config)?, &record).await,
        Action::StudentRemove { id } => students::remove(&admin_client(config)?, id).await,
        Action::Marks { student_id } => records::marks(&admin_client(config)?, student_id).await,
        Action::Attendance {
            student_id,
            percentage,
        } => records::attendance(&admin_client(config)?, student_id, percentage).await,
        Action::Subjects { course } => records::subjects(&admin_client(config)?, course).await,
        Action::Register(args) => register::register(&client(config)?, args).await,
        Action::Login {
            email_or_roll,
            password,
        } => register::login(&client(config)?, &email_or_roll, &password).await,
    }
}

/// One client per invocation: a fresh in-memory session and a navigator that
/// only logs where an expired session would have been sent.
fn client(config: &AppConfig) -> Result<ApiClient> {
    let api = ApiClient::new(
        config,
        Arc::new(MemorySessionStore::new()),
        Arc::new(StaticNavigator::default()),
    )?;
    Ok(api)
}

/// Client with an established admin session, for console-side operations.
fn admin_client(config: &AppConfig) -> Result<ApiClient> {
    let api = client(config)?;
    let admin = &config.admin;
    let outcome = auth::client::admin_login(
        &api,
        admin,
        &admin.username,
        admin.password.expose_secret(),
    )?;
    match outcome {
        AdminLogin::Authenticated(_) => Ok(api),
        AdminLogin::InvalidCredentials => bail!("Invalid credentials"),
    }
}
