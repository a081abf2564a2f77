//! Client helpers for the student CRUD endpoints. These functions keep
//! endpoint paths centralized and assume the backend enforces authorization.

use super::types::Student;
use crate::{errors::Error, http::ApiClient};

/// Fetches every student. Passwords come back nulled.
pub async fn list_students(api: &ApiClient) -> Result<Vec<Student>, Error> {
    api.get_json("/students").await
}

/// Fetches one student by id.
pub async fn get_student(api: &ApiClient, id: i64) -> Result<Student, Error> {
    api.get_json(&format!("/students/{id}")).await
}

/// Creates a student and returns the stored record with its assigned id.
pub async fn create_student(api: &ApiClient, student: &Student) -> Result<Student, Error> {
    api.post_json("/students", student).await
}

/// Replaces a student record. The backend takes the id from the path, so
/// callers send the full record they fetched (plus any overlaid changes).
pub async fn update_student(api: &ApiClient, id: i64, student: &Student) -> Result<(), Error> {
    api.put_empty(&format!("/students/{id}"), student).await
}

/// Deletes a student by id.
pub async fn delete_student(api: &ApiClient, id: i64) -> Result<(), Error> {
    api.delete_empty(&format!("/students/{id}")).await
}
