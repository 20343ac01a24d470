//! Template service client implementation using reqwest.

use std::time::Duration;

use log::debug;
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::{Value, json};
use url::Url;

use super::field_casing::{
    carries_record, normalize_record, normalize_records, normalize_render, normalize_usage,
};
use crate::domain::{
    AppError, GatewayConfig, NewTemplate, RenderOutcome, TemplateId, TemplateRecord, UsageInfo,
};
use crate::ports::TemplateGateway;

const X_API_KEY: &str = "X-API-Key";

/// HTTP client for the template service.
#[derive(Clone)]
pub struct HttpTemplateGateway {
    api_key: String,
    base_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpTemplateGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTemplateGateway")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpTemplateGateway {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GatewayConfig) -> Result<Self, AppError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, base_url: config.base_url(), client })
    }

    /// Create from the environment variable named in `config`.
    pub fn from_env_with_config(config: &GatewayConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::config_error(format!(
                    "{} environment variable not set",
                    config.api_key_env
                ))
            })?;

        Self::new(api_key, config)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("api_url '{}' cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header(X_API_KEY, &self.api_key)
            .header(ACCEPT, "application/json")
    }

    fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &T,
    ) -> Result<Response, AppError> {
        self.request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))
    }

    fn send(&self, method: Method, url: Url) -> Result<Response, AppError> {
        self.request(method, url)
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))
    }

    /// Turn a response into its JSON body. `Ok(None)` for an empty success body.
    ///
    /// A 404 on a template endpoint becomes `NotFound`.
    fn read_body(response: Response, id: Option<&TemplateId>) -> Result<Option<Value>, AppError> {
        let status = response.status();
        debug!("-> {}", status.as_u16());

        if let (404, Some(id)) = (status.as_u16(), id) {
            return Err(AppError::not_found(id));
        }

        let text = response
            .text()
            .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(AppError::Remote { status: status.as_u16(), body: text });
        }
        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| AppError::MalformedResponse(format!("Failed to parse response: {}", e)))
    }

    fn require_body(body: Option<Value>, what: &str) -> Result<Value, AppError> {
        body.ok_or_else(|| AppError::MalformedResponse(format!("empty {what} response")))
    }
}

impl TemplateGateway for HttpTemplateGateway {
    fn list(&self) -> Result<Vec<TemplateRecord>, AppError> {
        let response = self.send(Method::GET, self.endpoint(&["templates"])?)?;
        match Self::read_body(response, None)? {
            Some(body) => normalize_records(&body),
            None => Ok(Vec::new()),
        }
    }

    fn get(&self, id: &TemplateId) -> Result<TemplateRecord, AppError> {
        let response = self.send(Method::GET, self.endpoint(&["templates", id.as_str()])?)?;
        match Self::read_body(response, Some(id))? {
            Some(body) => normalize_record(&body),
            None => Err(AppError::not_found(id)),
        }
    }

    fn create(&self, template: &NewTemplate) -> Result<TemplateRecord, AppError> {
        let response = self.send_json(Method::POST, self.endpoint(&["templates"])?, template)?;
        let body = Self::require_body(Self::read_body(response, None)?, "create")?;
        normalize_record(&body)
    }

    fn update(
        &self,
        id: &TemplateId,
        record: &TemplateRecord,
    ) -> Result<Option<TemplateRecord>, AppError> {
        let url = self.endpoint(&["templates", id.as_str()])?;
        let response = self.send_json(Method::PUT, url, record)?;
        match Self::read_body(response, Some(id))? {
            Some(body) if carries_record(&body) => normalize_record(&body).map(Some),
            Some(body) => {
                debug!("Ignoring update acknowledgement body: {}", body);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: &TemplateId) -> Result<(), AppError> {
        let response = self.send(Method::DELETE, self.endpoint(&["templates", id.as_str()])?)?;
        Self::read_body(response, Some(id)).map(|_| ())
    }

    fn render(&self, id: &TemplateId, sample_data: &Value) -> Result<RenderOutcome, AppError> {
        let url = self.endpoint(&["templates", id.as_str(), "render"])?;
        let response = self.send_json(Method::POST, url, &json!({ "data": sample_data }))?;
        let body = Self::require_body(Self::read_body(response, Some(id))?, "render")?;
        normalize_render(&body)
    }

    fn usage(&self) -> Result<UsageInfo, AppError> {
        let response = self.send(Method::GET, self.endpoint(&["usage"])?)?;
        let body = Self::require_body(Self::read_body(response, None)?, "usage")?;
        normalize_usage(&body)
    }
}
