use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status values the console offers. The backend stores the raw
/// string, so rows read back may carry other values.
pub const STATUS_PRESENT: &str = "Present";
pub const STATUS_ABSENT: &str = "Absent";

/// An attendance row as returned by the backend, with subject (and for the
/// admin view, student) names joined in.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[serde(default)]
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance_date: Option<NaiveDate>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
}

/// Payload for marking attendance on one date.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub subject_id: i64,
    pub attendance_date: NaiveDate,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_serializes_camel_case_keys() {
        let entry = AttendanceEntry {
            student_id: 7,
            subject_id: 2,
            attendance_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: STATUS_PRESENT.to_string(),
        };
        let body = serde_json::to_value(&entry).unwrap();
        assert_eq!(body["studentId"], 7);
        assert_eq!(body["attendanceDate"], "2024-03-01");
        assert_eq!(body["status"], "Present");
    }

    #[test]
    fn row_tolerates_missing_joined_names() {
        let row: Attendance = serde_json::from_value(json!({
            "id": 1,
            "studentId": 7,
            "subjectId": 2,
            "attendanceDate": "2024-03-01",
            "status": "Absent"
        }))
        .unwrap();
        assert_eq!(row.status, STATUS_ABSENT);
        assert_eq!(row.subject_name, None);
    }
}
