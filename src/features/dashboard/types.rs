use serde::{Deserialize, Serialize};

/// Aggregate counters for the admin landing page.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: i64,
    pub total_courses: i64,
    #[serde(default)]
    pub recent_students: Vec<RecentStudent>,
    #[serde(default)]
    pub active_students: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_stats: Option<AdditionalStats>,
}

/// Trimmed-down student entry in the recent-enrollments list.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentStudent {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Secondary counters. `average_students_per_course` is an integer because
/// the backend computes it with integer division.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalStats {
    pub students_this_month: i64,
    pub average_students_per_course: i64,
    pub system_health: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stats_decode_with_nested_counters() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "totalStudents": 12,
            "totalCourses": 3,
            "recentStudents": [
                {"id": 12, "name": "Ada Lovelace", "course": "Mathematics", "email": "ada@example.com"}
            ],
            "activeStudents": 12,
            "additionalStats": {
                "studentsThisMonth": 12,
                "averageStudentsPerCourse": 4,
                "systemHealth": "Good"
            }
        }))
        .unwrap();

        assert_eq!(stats.total_students, 12);
        assert_eq!(stats.recent_students.len(), 1);
        let additional = stats.additional_stats.unwrap();
        assert_eq!(additional.average_students_per_course, 4);
        assert_eq!(additional.system_health, "Good");
    }
}
