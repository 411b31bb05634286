//! Recording fake transport and canned backend payloads.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::json;

use crate::client::endpoints;
use crate::error::TransportError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

#[derive(Debug, Default)]
pub struct FakeTransport {
    routes: RefCell<HashMap<String, Result<ApiResponse, TransportError>>>,
    calls: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn with_routes(routes: Vec<(&str, ApiResponse)>) -> Self {
        let transport = Self::default();
        for (path, response) in routes {
            transport.respond(path, response);
        }
        transport
    }

    pub fn respond(&self, path: &str, response: ApiResponse) {
        self.routes.borrow_mut().insert(path.to_string(), Ok(response));
    }

    /// Make `path` fail as if the network dropped.
    pub fn fail(&self, path: &str) {
        self.routes.borrow_mut().insert(
            path.to_string(),
            Err(TransportError("network error".to_string())),
        );
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let outcome = self
            .routes
            .borrow()
            .get(&request.path)
            .cloned()
            .unwrap_or_else(|| Ok(ApiResponse::json(404, &json!({"error": "Not found"}))));
        self.calls.borrow_mut().push(request);
        outcome
    }
}

pub fn sample_routes() -> Vec<(&'static str, ApiResponse)> {
    vec![
        (
            endpoints::LOGIN,
            ApiResponse::json(
                200,
                &json!({"access_token": "token-123", "username": "admin", "role": "admin"}),
            ),
        ),
        (
            endpoints::STATS,
            ApiResponse::json(
                200,
                &json!({
                    "total_students": 1200,
                    "total_courses": 40,
                    "total_enrollments": 3500,
                    "avg_grade": 72.5,
                    "total_payments": 450000000,
                    "avg_attendance": 5.3
                }),
            ),
        ),
        (
            endpoints::STUDENTS_BY_DEPARTMENT,
            ApiResponse::json(
                200,
                &json!({"departments": ["Computing", "Law"], "counts": [700, 500]}),
            ),
        ),
        (
            endpoints::GRADES_OVER_TIME,
            ApiResponse::json(
                200,
                &json!({"periods": ["2024-01", "2024-02"], "grades": [70.1, 71.4]}),
            ),
        ),
        (
            endpoints::PAYMENT_STATUS,
            ApiResponse::json(200, &json!({"statuses": ["Paid", "Pending"], "counts": [80, 20]})),
        ),
        (
            endpoints::ATTENDANCE_BY_COURSE,
            ApiResponse::json(200, &json!({"courses": ["Databases"], "avg_hours": [6.5]})),
        ),
        (
            endpoints::GRADE_DISTRIBUTION,
            ApiResponse::json(200, &json!({"grades": ["A", "B"], "counts": [120, 300]})),
        ),
        (
            endpoints::TOP_STUDENTS,
            ApiResponse::json(200, &json!({"students": ["Jane Doe"], "grades": [91.2]})),
        ),
        (
            endpoints::PREDICT_PERFORMANCE,
            ApiResponse::json(200, &json!({"student_id": "STU000001", "predicted_grade": 74.35})),
        ),
        (
            endpoints::REPORT,
            ApiResponse {
                status: 200,
                content_type: Some("application/pdf".to_string()),
                body: b"%PDF-1.4 report".to_vec(),
            },
        ),
    ]
}
