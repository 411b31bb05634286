use common::{ApiRequest, ApiResponse, DashboardClient, Method, Transport, TransportError};
use gloo_net::http::{Request, RequestBuilder};
use crate::settings;

/// `Transport` backed by the browser's fetch API.
#[derive(Debug, Clone)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        log::trace!("{} {} - sending", request.method.as_str(), url);

        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        if let Some(authorization) = request.authorization() {
            builder = builder.header("Authorization", &authorization);
        }

        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| TransportError(format!("Failed to serialize request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .binary()
            .await
            .map_err(|e| TransportError(format!("Failed to read response: {}", e)))?;

        Ok(ApiResponse { status, content_type, body })
    }
}

/// Client for the configured backend.
pub fn client() -> DashboardClient<BrowserTransport> {
    DashboardClient::new(BrowserTransport::new(settings::get_settings().api_base_url))
}
