//! # HTTP Transport
//!
//! The seam between view-models and the network. Requests go out either as
//! plain GETs or as multipart form POSTs; everything above this layer works
//! with [`ApiResponse`] and never touches reqwest directly.

use crate::storefront::error::{StorefrontError, StorefrontResult};
use crate::storefront::models::ImageFile;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Shorthand for a 200 response
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Check if the status indicates success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into a [`StorefrontError::Status`]
    pub fn ensure_success(self) -> StorefrontResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(StorefrontError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// File attached to a multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file: ImageFile,
}

/// Multipart form body: text fields plus an optional file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    pub fields: Vec<(String, String)>,
    pub file: Option<FilePart>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: ImageFile) -> Self {
        self.file = Some(FilePart {
            field: name.into(),
            file,
        });
        self
    }

    /// Look up a text field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn into_multipart(self) -> StorefrontResult<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        if let Some(FilePart { field, file }) = self.file {
            let part = Part::bytes(file.bytes.to_vec())
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(|e| StorefrontError::Config(format!("invalid content type: {e}")))?;
            form = form.part(field, part);
        }
        Ok(form)
    }
}

/// Backend transport abstraction
///
/// Production uses [`ReqwestTransport`]; tests use the recording mock in
/// `services::mock`. Paths are relative to the configured base URL.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET with optional query parameters
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> StorefrontResult<ApiResponse>;

    /// Issue a multipart form POST
    async fn post_form(&self, path: &str, form: FormPayload) -> StorefrontResult<ApiResponse>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> StorefrontResult<Self> {
        tracing::debug!("Creating reqwest client");
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_response(response: reqwest::Response) -> StorefrontResult<ApiResponse> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> StorefrontResult<ApiResponse> {
        let url = self.url(path);
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;
        Self::read_response(response).await
    }

    async fn post_form(&self, path: &str, form: FormPayload) -> StorefrontResult<ApiResponse> {
        let url = self.url(path);
        tracing::debug!("POST {url} fields={:?}", form.fields);

        let response = self
            .client
            .post(&url)
            .multipart(form.into_multipart()?)
            .send()
            .await?;
        Self::read_response(response).await
    }
}
