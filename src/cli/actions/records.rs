use anyhow::Result;

use crate::features::{attendance, dashboard, marks, subjects};
use crate::http::ApiClient;

/// Print the aggregate dashboard counters.
/// # Errors
/// Returns an error if the backend call fails.
pub async fn dashboard(api: &ApiClient) -> Result<()> {
    let stats = dashboard::client::get_stats(api).await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

/// Print marks rows, for one student or the whole roster.
/// # Errors
/// Returns an error if the backend call fails.
pub async fn marks(api: &ApiClient, student_id: Option<i64>) -> Result<()> {
    let rows = match student_id {
        Some(id) => marks::client::student_marks(api, id).await?,
        None => marks::client::list_marks(api).await?,
    };
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

/// Print attendance rows, or per-subject percentages for one student.
/// # Errors
/// Returns an error if the backend call fails.
pub async fn attendance(
    api: &ApiClient,
    student_id: Option<i64>,
    percentage: bool,
) -> Result<()> {
    match (student_id, percentage) {
        (Some(id), true) => {
            let percentages = attendance::client::attendance_percentage(api, id).await?;
            println!("{}", serde_json::to_string_pretty(&percentages)?);
        }
        (Some(id), false) => {
            let rows = attendance::client::student_attendance(api, id).await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        (None, _) => {
            let rows = attendance::client::list_attendance(api).await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

/// Print the subject catalog, optionally filtered by course.
/// # Errors
/// Returns an error if the backend call fails.
pub async fn subjects(api: &ApiClient, course: Option<String>) -> Result<()> {
    let catalog = match course {
        Some(course) => subjects::client::course_subjects(api, &course).await?,
        None => subjects::client::list_subjects(api).await?,
    };
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}
