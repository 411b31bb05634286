use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{RequestError, TransportError};
use crate::models::ErrorBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A single backend request. The credential travels with the request; there
/// is no process-wide default header.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            bearer: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: None,
            bearer: None,
        }
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, RequestError> {
        let value = serde_json::to_value(body).map_err(|e| RequestError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.map(str::to_string);
        self
    }

    /// Value of the `Authorization` header, if the request carries a credential.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {}", token))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn json<B: Serialize>(status: u16, body: &B) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: serde_json::to_vec(body).unwrap_or_default(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"))
    }

    /// The backend's `error` field, when the body carries one.
    pub fn error_message(&self) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(&self.body)
            .ok()
            .map(|body| body.error)
    }

    /// Turn a non-2xx response into [`RequestError::Status`].
    pub fn error_for_status(self) -> Result<Self, RequestError> {
        if self.ok() {
            Ok(self)
        } else {
            Err(RequestError::Status {
                status: self.status,
                message: self.error_message(),
            })
        }
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, RequestError> {
        serde_json::from_slice(&self.body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

/// HTTP round trip, supplied by the embedding application.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bearer_is_attached_per_request() {
        let request = ApiRequest::get("/api/dashboard/stats").bearer(Some("abc"));
        assert_eq!(request.authorization().as_deref(), Some("Bearer abc"));

        let anonymous = ApiRequest::get("/api/dashboard/stats").bearer(None);
        assert_eq!(anonymous.authorization(), None);
    }

    #[test]
    fn non_success_status_carries_backend_message() {
        let response = ApiResponse::json(401, &json!({"error": "Invalid credentials"}));
        let err = response.error_for_status().unwrap_err();
        assert_eq!(
            err,
            RequestError::Status {
                status: 401,
                message: Some("Invalid credentials".to_string())
            }
        );
    }

    #[test]
    fn non_json_error_body_has_no_message() {
        let response = ApiResponse {
            status: 502,
            content_type: Some("text/html".to_string()),
            body: b"<html>Bad Gateway</html>".to_vec(),
        };
        assert_eq!(response.error_message(), None);
        assert!(!response.is_json());
    }
}
