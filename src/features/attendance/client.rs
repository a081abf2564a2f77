//! Client helpers for the attendance endpoints.

use std::collections::HashMap;

use super::types::{Attendance, AttendanceEntry};
use crate::{errors::Error, http::ApiClient};

/// Fetches every attendance row, joined with student and subject names.
pub async fn list_attendance(api: &ApiClient) -> Result<Vec<Attendance>, Error> {
    api.get_json("/attendance").await
}

/// Fetches the attendance rows for one student.
pub async fn student_attendance(api: &ApiClient, student_id: i64) -> Result<Vec<Attendance>, Error> {
    api.get_json(&format!("/attendance/student/{student_id}")).await
}

/// Fetches a student's attendance percentage per subject name.
pub async fn attendance_percentage(
    api: &ApiClient,
    student_id: i64,
) -> Result<HashMap<String, f64>, Error> {
    api.get_json(&format!("/attendance/student/{student_id}/percentage"))
        .await
}

/// Marks attendance for one student on one date and returns the stored row.
pub async fn mark_attendance(api: &ApiClient, entry: &AttendanceEntry) -> Result<Attendance, Error> {
    api.post_json("/attendance", entry).await
}

/// Deletes an attendance row by id.
pub async fn delete_attendance(api: &ApiClient, id: i64) -> Result<(), Error> {
    api.delete_empty(&format!("/attendance/{id}")).await
}
