use std::time::Duration;

use app_logging::{app_debug, app_info, app_warn};
use podscript_core::{RequestPayload, ResultModel};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;

use crate::GenerationError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

#[async_trait::async_trait]
pub trait GenerationClient: Send + Sync {
    /// Sends one generation request and parses the answer.
    async fn generate(&self, payload: &RequestPayload) -> Result<ResultModel, GenerationError>;

    /// Calls `GET /health`; `Ok(true)` when the service reports `ok`.
    async fn health(&self) -> Result<bool, GenerationError>;
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

#[derive(Debug, Clone)]
pub struct ReqwestGenerationClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestGenerationClient {
    pub fn new(settings: ClientSettings) -> Result<Self, GenerationError> {
        // No request timeout: a generation runs until the transport reports an outcome.
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|err| GenerationError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> Result<Url, GenerationError> {
        let invalid = |message: String| GenerationError::InvalidBaseUrl {
            base: self.settings.base_url.clone(),
            message,
        };
        // A path prefix on the base (`/api`) is kept: join relative to a trailing slash.
        let mut base = self.settings.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).map_err(|err| invalid(err.to_string()))?;
        base.join(path.trim_start_matches('/'))
            .map_err(|err| invalid(err.to_string()))
    }
}

#[async_trait::async_trait]
impl GenerationClient for ReqwestGenerationClient {
    async fn generate(&self, payload: &RequestPayload) -> Result<ResultModel, GenerationError> {
        let url = self.endpoint(payload.path())?;
        app_info!(
            "POST {} mode={} model={}",
            url,
            payload.mode().as_str(),
            payload.params().model
        );

        let request = match payload.json_body() {
            Some(body) => self.client.post(url).json(&body),
            None => self.client.post(url).multipart(multipart_form(payload)),
        };

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status
                    .canonical_reason()
                    .map(ToOwned::to_owned)
                    .unwrap_or_else(|| status.to_string())
            } else {
                body
            };
            app_warn!("Generation failed with status {}: {}", status.as_u16(), message);
            return Err(GenerationError::Transport {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let result: ResultModel = serde_json::from_slice(&bytes)
            .map_err(|err| GenerationError::Decode(err.to_string()))?;
        app_debug!(
            "Generation returned {} segments and {} notes",
            result.segments.len(),
            result.show_notes.len()
        );
        Ok(result)
    }

    async fn health(&self) -> Result<bool, GenerationError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Transport {
                status: status.as_u16(),
                message: status.to_string(),
            });
        }
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let health: HealthResponse = serde_json::from_slice(&bytes)
            .map_err(|err| GenerationError::Decode(err.to_string()))?;
        Ok(health.status == "ok")
    }
}

fn multipart_form(payload: &RequestPayload) -> Form {
    let mut form = Form::new();
    if let RequestPayload::File { file, .. } = payload {
        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        form = form.part("file", part);
    }
    payload
        .form_fields()
        .into_iter()
        .fold(form, |form, (name, value)| form.text(name, value))
}

fn map_reqwest_error(err: reqwest::Error) -> GenerationError {
    GenerationError::Network(err.to_string())
}
