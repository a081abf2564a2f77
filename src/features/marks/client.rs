//! Client helpers for the marks endpoints.

use super::types::{MarkEntry, Marks};
use crate::{errors::Error, http::ApiClient};

/// Fetches every marks row, joined with student and subject names.
pub async fn list_marks(api: &ApiClient) -> Result<Vec<Marks>, Error> {
    api.get_json("/marks").await
}

/// Fetches the marks rows for one student.
pub async fn student_marks(api: &ApiClient, student_id: i64) -> Result<Vec<Marks>, Error> {
    api.get_json(&format!("/marks/student/{student_id}")).await
}

/// Records marks and returns the stored row.
pub async fn add_marks(api: &ApiClient, entry: &MarkEntry) -> Result<Marks, Error> {
    api.post_json("/marks", entry).await
}

/// Replaces a marks row by id.
pub async fn update_marks(api: &ApiClient, id: i64, entry: &MarkEntry) -> Result<(), Error> {
    api.put_empty(&format!("/marks/{id}"), entry).await
}

/// Deletes a marks row by id.
pub async fn delete_marks(api: &ApiClient, id: i64) -> Result<(), Error> {
    api.delete_empty(&format!("/marks/{id}")).await
}
