use std::collections::HashMap;

use anyhow::{Result, bail};
use tracing::debug;

use crate::features::students::{client, enroll};
use crate::http::ApiClient;

/// Print every student as pretty JSON.
/// # Errors
/// Returns an error if the backend call fails.
pub async fn list(api: &ApiClient) -> Result<()> {
    let roster = client::list_students(api).await?;
    debug!("fetched {} students", roster.len());
    println!("{}", serde_json::to_string_pretty(&roster)?);
    Ok(())
}

/// Print one student by id.
/// # Errors
/// Returns an error if the backend call fails.
pub async fn show(api: &ApiClient, id: i64) -> Result<()> {
    let student = client::get_student(api, id).await?;
    println!("{}", serde_json::to_string_pretty(&student)?);
    Ok(())
}

/// Validate and enroll a student from the collected form fields.
/// # Errors
/// Returns an error when validation fails, listing each field's message, or
/// when the backend refuses the record.
pub async fn add(api: &ApiClient, record: &HashMap<String, String>) -> Result<()> {
    match enroll::enroll_student(api, record).await? {
        enroll::Enrollment::Created { message, .. } => {
            println!("{message}");
            Ok(())
        }
        enroll::Enrollment::Invalid { errors } => {
            let mut lines: Vec<String> = errors
                .iter()
                .map(|(field, message)| format!("  {field}: {message}"))
                .collect();
            lines.sort();
            bail!("validation failed:\n{}", lines.join("\n"));
        }
        enroll::Enrollment::Failed { message } => bail!("{message}"),
    }
}

/// Delete a student by id.
/// # Errors
/// Returns an error if the backend call fails.
pub async fn remove(api: &ApiClient, id: i64) -> Result<()> {
    client::delete_student(api, id).await?;
    println!("Student {id} deleted");
    Ok(())
}
