use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student record as the backend stores it. The same shape is used for
/// reads and writes: the backend nulls `password` on every read and only
/// honors it on writes, and update calls echo the full fetched record back.
///
/// `created_at`/`updated_at` are kept opaque; the backend stamps them with a
/// literal `Z` suffix that is not a real offset, so they are echoed verbatim
/// rather than retyped.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub course: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn student_roundtrips_backend_field_names() {
        let body = json!({
            "id": 7,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "5551234567",
            "course": "Mathematics",
            "gender": "Female",
            "dob": "1990-12-10",
            "city": "London",
            "password": null,
            "rollNumber": "STU0007",
            "createdAt": "2024-01-15T10:30:00Z",
            "updatedAt": "2024-01-15T10:30:00Z"
        });

        let student: Student = serde_json::from_value(body).unwrap();
        assert_eq!(student.id, 7);
        assert_eq!(student.roll_number.as_deref(), Some("STU0007"));
        assert_eq!(
            student.dob,
            Some(NaiveDate::from_ymd_opt(1990, 12, 10).unwrap())
        );
        assert_eq!(student.password, None);

        let echoed = serde_json::to_value(&student).unwrap();
        assert_eq!(echoed["rollNumber"], "STU0007");
        assert_eq!(echoed["dob"], "1990-12-10");
        // Timestamps are echoed byte for byte, literal Z included.
        assert_eq!(echoed["createdAt"], "2024-01-15T10:30:00Z");
        // Nulled password is dropped rather than sent back explicitly.
        assert!(echoed.get("password").is_none());
    }

    #[test]
    fn draft_without_optional_fields_serializes_minimal_payload() {
        let draft = Student {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            course: "CS".to_string(),
            ..Student::default()
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["name"], "Grace Hopper");
        assert!(body.get("dob").is_none());
        assert!(body.get("rollNumber").is_none());
    }
}
