use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use secrecy::SecretString;

use crate::cli::actions::{Action, register as register_action};
use crate::cli::commands::{self, records, register, students};
use crate::config::{AdminCredentials, AppConfig};

/// Turn parsed arguments into the runtime config and the action to execute.
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<(AppConfig, Action)> {
    let api_url = matches
        .get_one::<String>(commands::ARG_API_URL)
        .cloned()
        .unwrap_or_default();
    let timeout = matches
        .get_one::<u64>(commands::ARG_TIMEOUT)
        .copied()
        .context("missing required argument: --timeout")?;
    let admin_username = matches
        .get_one::<String>(commands::ARG_ADMIN_USERNAME)
        .cloned()
        .context("missing required argument: --admin-username")?;
    let admin_password = matches
        .get_one::<String>(commands::ARG_ADMIN_PASSWORD)
        .cloned()
        .context("missing required argument: --admin-password")?;

    let config = AppConfig::new(&api_url)
        .with_timeout(Duration::from_secs(timeout))
        .with_admin(AdminCredentials::new(
            admin_username,
            SecretString::from(admin_password),
        ));

    let action = match matches.subcommand() {
        Some((records::CMD_DASHBOARD, _)) => Action::Dashboard,
        Some((students::CMD_STUDENTS, sub)) => students_action(sub)?,
        Some((records::CMD_MARKS, sub)) => Action::Marks {
            student_id: sub.get_one::<i64>(records::ARG_STUDENT).copied(),
        },
        Some((records::CMD_ATTENDANCE, sub)) => Action::Attendance {
            student_id: sub.get_one::<i64>(records::ARG_STUDENT).copied(),
            percentage: sub.get_flag(records::ARG_PERCENTAGE),
        },
        Some((records::CMD_SUBJECTS, sub)) => Action::Subjects {
            course: sub.get_one::<String>(records::ARG_COURSE).cloned(),
        },
        Some((register::CMD_REGISTER, sub)) => Action::Register(register_action::Args {
            roll_number: sub.get_one::<String>(register::ARG_ROLL_NUMBER).cloned(),
            email: sub.get_one::<String>(register::ARG_EMAIL).cloned(),
            password: secret_arg(sub, register::ARG_PASSWORD)?,
            confirm_password: secret_arg(sub, register::ARG_CONFIRM_PASSWORD)?,
        }),
        Some((register::CMD_LOGIN, sub)) => Action::Login {
            email_or_roll: sub
                .get_one::<String>(register::ARG_EMAIL_OR_ROLL)
                .cloned()
                .context("missing required argument: --email-or-roll")?,
            password: secret_arg(sub, register::ARG_PASSWORD)?,
        },
        _ => bail!("missing subcommand"),
    };

    Ok((config, action))
}

fn students_action(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((students::CMD_LIST, _)) => Ok(Action::StudentList),
        Some((students::CMD_SHOW, sub)) => Ok(Action::StudentShow {
            id: sub
                .get_one::<i64>(students::ARG_ID)
                .copied()
                .context("missing required argument: <id>")?,
        }),
        Some((students::CMD_ADD, sub)) => {
            let record: HashMap<String, String> = students::FORM_FIELDS
                .iter()
                .filter_map(|field| {
                    sub.get_one::<String>(field)
                        .map(|value| ((*field).to_string(), value.clone()))
                })
                .collect();
            Ok(Action::StudentAdd { record })
        }
        Some((students::CMD_REMOVE, sub)) => Ok(Action::StudentRemove {
            id: sub
                .get_one::<i64>(students::ARG_ID)
                .copied()
                .context("missing required argument: <id>")?,
        }),
        _ => bail!("missing students subcommand"),
    }
}

fn secret_arg(matches: &clap::ArgMatches, name: &str) -> Result<SecretString> {
    let value = matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))?;
    Ok(SecretString::from(value))
}
