use serde::de::DeserializeOwned;
use tracing::{debug, error, info, trace, warn};

use crate::error::{AuthError, DownloadError, FetchError, PredictionError, RequestError, ValidationError};
use crate::models::{
    AttendanceByCourse, DashboardData, DashboardStats, DepartmentCounts, GradeDistribution,
    GradesOverTime, LoginRequest, LoginResponse, PaymentStatus, PredictionRequest,
    PredictionResult, TopStudents,
};
use crate::transport::{ApiRequest, ApiResponse, Transport};

pub mod endpoints {
    pub const LOGIN: &str = "/api/login";
    pub const STATS: &str = "/api/dashboard/stats";
    pub const STUDENTS_BY_DEPARTMENT: &str = "/api/dashboard/students-by-department";
    pub const GRADES_OVER_TIME: &str = "/api/dashboard/grades-over-time";
    pub const PAYMENT_STATUS: &str = "/api/dashboard/payment-status";
    pub const ATTENDANCE_BY_COURSE: &str = "/api/dashboard/attendance-by-course";
    pub const GRADE_DISTRIBUTION: &str = "/api/dashboard/grade-distribution";
    pub const TOP_STUDENTS: &str = "/api/dashboard/top-students";
    pub const PREDICT_PERFORMANCE: &str = "/api/dashboard/predict-performance";
    pub const REPORT: &str = "/api/report/generate";
}

/// Stateless client for the analytics backend.
///
/// Every authenticated operation takes the current bearer token explicitly.
#[derive(Debug, Clone)]
pub struct DashboardClient<T> {
    transport: T,
}

impl<T: Transport> DashboardClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        debug!("{} request to: {}", method, path);

        let response = self.transport.send(request).await.map_err(|e| {
            error!("{} {} - {}", method, path, e);
            RequestError::from(e)
        })?;

        if !response.ok() {
            warn!("{} {} - Non-OK response: {}", method, path, response.status);
        }
        response.error_for_status()
    }

    /// GET one dashboard dataset. A `null` or non-object body is an absent
    /// dataset and reads as empty; only transport, status and shape errors fail.
    async fn get_json<R: DeserializeOwned + Default>(
        &self,
        path: &'static str,
        token: Option<&str>,
    ) -> Result<R, FetchError> {
        let request = ApiRequest::get(path).bearer(token);
        let response = self
            .send(request)
            .await
            .map_err(|source| FetchError { endpoint: path, source })?;

        trace!("GET {} - Response received, parsing JSON", path);
        let data = response
            .decode::<serde_json::Value>()
            .and_then(|value| {
                if value.is_object() {
                    serde_json::from_value(value).map_err(|e| RequestError::Decode(e.to_string()))
                } else {
                    warn!("GET {} - No dataset in response, rendering it empty", path);
                    Ok(R::default())
                }
            })
            .map_err(|source| {
                error!("GET {} - {}", path, source);
                FetchError { endpoint: path, source }
            })?;

        info!("GET {} - Success", path);
        Ok(data)
    }

    /// Exchange credentials for a bearer token and the user's identity.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::post(endpoints::LOGIN)
            .json(&body)
            .map_err(|e| AuthError::from_request(&e))?;

        let response = self.send(request).await.map_err(|e| {
            warn!("Login rejected for '{}': {}", username, e);
            AuthError::from_request(&e)
        })?;

        let login: LoginResponse = response.decode().map_err(|e| AuthError::from_request(&e))?;
        info!("Logged in as '{}' ({})", login.username, login.role);
        Ok(login)
    }

    /// Issue the seven dashboard reads concurrently. The first failure ends
    /// the wait; results of the still-outstanding reads are dropped.
    pub async fn fetch_dashboard(&self, token: Option<&str>) -> Result<DashboardData, FetchError> {
        trace!("Fetching dashboard");
        let (
            stats,
            department_counts,
            grades_over_time,
            payment_status,
            attendance_by_course,
            grade_distribution,
            top_students,
        ) = futures::try_join!(
            self.get_json::<DashboardStats>(endpoints::STATS, token),
            self.get_json::<DepartmentCounts>(endpoints::STUDENTS_BY_DEPARTMENT, token),
            self.get_json::<GradesOverTime>(endpoints::GRADES_OVER_TIME, token),
            self.get_json::<PaymentStatus>(endpoints::PAYMENT_STATUS, token),
            self.get_json::<AttendanceByCourse>(endpoints::ATTENDANCE_BY_COURSE, token),
            self.get_json::<GradeDistribution>(endpoints::GRADE_DISTRIBUTION, token),
            self.get_json::<TopStudents>(endpoints::TOP_STUDENTS, token),
        )?;

        info!("Dashboard data loaded");
        Ok(DashboardData {
            stats,
            department_counts,
            grades_over_time,
            payment_status,
            attendance_by_course,
            grade_distribution,
            top_students,
        })
    }

    pub async fn predict_performance(
        &self,
        token: Option<&str>,
        student_id: &str,
    ) -> Result<PredictionResult, PredictionError> {
        let student_id = student_id.trim();
        if student_id.is_empty() {
            return Err(ValidationError::EmptyStudentId.into());
        }

        let body = PredictionRequest {
            student_id: student_id.to_string(),
        };
        let request = ApiRequest::post(endpoints::PREDICT_PERFORMANCE)
            .json(&body)
            .map_err(|e| PredictionError::from_request(&e))?
            .bearer(token);

        let response = self
            .send(request)
            .await
            .map_err(|e| PredictionError::from_request(&e))?;
        let result: PredictionResult = response
            .decode()
            .map_err(|e| PredictionError::from_request(&e))?;

        info!(
            "Predicted grade for {}: {}",
            result.student_id, result.predicted_grade
        );
        Ok(result)
    }

    /// Ask the backend to generate the report document.
    ///
    /// A JSON body means the backend could not render the document and sent
    /// its data fallback instead; that is reported as an error so the caller
    /// can switch to direct navigation.
    pub async fn request_report_download(&self, token: Option<&str>) -> Result<Vec<u8>, DownloadError> {
        let request = ApiRequest::post(endpoints::REPORT)
            .json(&serde_json::json!({}))?
            .bearer(token);

        let response = self.send(request).await?;
        if response.is_json() {
            let content_type = response.content_type.unwrap_or_default();
            warn!("Report endpoint answered with {}", content_type);
            return Err(DownloadError::UnexpectedContent(content_type));
        }

        info!("Report downloaded ({} bytes)", response.body.len());
        Ok(response.body)
    }

    /// Path a plain navigation falls back to when the download fails. Such a
    /// navigation cannot carry the bearer header.
    pub fn report_path(&self) -> &'static str {
        endpoints::REPORT
    }
}

/// File name the saved report gets: `university_report_<YYYY-MM-DD>.pdf`,
/// dated in UTC whatever the caller's time zone.
pub fn report_file_name<Tz: chrono::TimeZone>(at: &chrono::DateTime<Tz>) -> String {
    let date = at.with_timezone(&chrono::Utc).date_naive();
    format!("university_report_{}.pdf", date.format("%Y-%m-%d"))
}
