use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{ExtractResponse, SelectedFile};

/// Multipart field the extraction service reads the upload from.
pub const UPLOAD_FIELD: &str = "file";

/// The remote side that turns a PDF into text.
#[async_trait]
pub trait ExtractionService: Send + Sync {
    async fn extract(&self, file: &SelectedFile) -> AppResult<ExtractResponse>;
}

pub struct HttpExtractionClient {
    http: Client,
    endpoint: String,
}

impl HttpExtractionClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    fn form_for(file: &SelectedFile) -> AppResult<Form> {
        let mut part = Part::bytes(file.content.to_vec()).file_name(file.name.clone());
        if let Some(mime_type) = &file.mime_type {
            part = part.mime_str(mime_type)?;
        }
        Ok(Form::new().part(UPLOAD_FIELD, part))
    }
}

#[async_trait]
impl ExtractionService for HttpExtractionClient {
    async fn extract(&self, file: &SelectedFile) -> AppResult<ExtractResponse> {
        let start = Instant::now();

        debug!(
            endpoint = %self.endpoint,
            file_name = %file.name,
            file_size = file.size,
            "Sending upload"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(Self::form_for(file)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Extraction service rejected upload");
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: ExtractResponse = serde_json::from_slice(&body)?;

        info!(
            status = status.as_u16(),
            body_bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Extraction service responded"
        );

        Ok(parsed)
    }
}
