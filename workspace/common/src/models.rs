//! Request/response payloads of the analytics backend.
//!
//! Field names follow the backend's JSON exactly. The six chart payloads are
//! pairs of parallel arrays; a missing or `null` array deserializes as empty
//! so a malformed dataset degrades to an empty chart instead of failing the
//! page.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
    pub role: String,
}

/// Identity of the logged-in user, persisted next to the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub username: String,
    pub role: String,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_students: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_courses: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_enrollments: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_grade: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_payments: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_attendance: f64,
}

// SQL aggregates over empty tables come back as null.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DepartmentCounts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub departments: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub counts: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GradesOverTime {
    #[serde(default, deserialize_with = "null_as_default")]
    pub periods: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grades: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PaymentStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub statuses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub counts: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AttendanceByCourse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_hours: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GradeDistribution {
    #[serde(default, deserialize_with = "null_as_default")]
    pub grades: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub counts: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TopStudents {
    #[serde(default, deserialize_with = "null_as_default")]
    pub students: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grades: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub student_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub student_id: String,
    pub predicted_grade: f64,
}

/// Everything the dashboard page renders, produced by one fail-fast fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub department_counts: DepartmentCounts,
    pub grades_over_time: GradesOverTime,
    pub payment_status: PaymentStatus,
    pub attendance_by_course: AttendanceByCourse,
    pub grade_distribution: GradeDistribution,
    pub top_students: TopStudents,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_null_aggregates_read_as_zero() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"total_students": 3, "total_courses": 1, "total_enrollments": 0,
                "avg_grade": null, "total_payments": null, "avg_attendance": 4.25}"#,
        )
        .unwrap();
        assert_eq!(stats.total_students, 3);
        assert_eq!(stats.avg_grade, 0.0);
        assert_eq!(stats.total_payments, 0.0);
        assert_eq!(stats.avg_attendance, 4.25);
    }

    #[test]
    fn chart_payload_missing_array_is_empty() {
        let payload: AttendanceByCourse =
            serde_json::from_str(r#"{"courses": ["Databases"]}"#).unwrap();
        assert_eq!(payload.courses, vec!["Databases".to_string()]);
        assert!(payload.avg_hours.is_empty());
    }

    #[test]
    fn chart_payload_null_array_is_empty() {
        let payload: DepartmentCounts =
            serde_json::from_str(r#"{"departments": null, "counts": null}"#).unwrap();
        assert_eq!(payload, DepartmentCounts::default());
    }
}
