use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Exam type used when none is given.
pub const DEFAULT_EXAM_TYPE: &str = "Regular";

/// A marks row as returned by the backend. `student_name`, `subject_name`
/// and `subject_code` are joined in for display and are absent on writes.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Marks {
    #[serde(default)]
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub marks_obtained: f64,
    pub total_marks: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_code: Option<String>,
}

/// Payload for recording or correcting marks.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkEntry {
    pub student_id: i64,
    pub subject_id: i64,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub exam_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<NaiveDate>,
}
