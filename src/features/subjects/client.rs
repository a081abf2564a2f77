//! Client helpers for the subject endpoints.

use super::types::Subject;
use crate::{errors::Error, http::ApiClient};

/// Fetches the whole subject catalog.
pub async fn list_subjects(api: &ApiClient) -> Result<Vec<Subject>, Error> {
    api.get_json("/subjects").await
}

/// Fetches the subjects for one course after basic input validation.
pub async fn course_subjects(api: &ApiClient, course: &str) -> Result<Vec<Subject>, Error> {
    let trimmed = course.trim();
    if trimmed.is_empty() {
        return Err(Error::Config("Course is required.".to_string()));
    }

    api.get_json(&format!("/subjects/course/{trimmed}")).await
}
