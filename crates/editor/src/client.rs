//! Client for the template service.
//!
//! [`TemplateApi`] is what the editor calls; [`HttpTemplateClient`] implements
//! it over HTTP using [`reqwest`].

use async_trait::async_trait;
use ebuilder_core::template::TemplatePayload;
use ebuilder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A persisted template as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTemplate {
    pub id: DbId,
    #[serde(flatten)]
    pub payload: TemplatePayload,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Errors from the template service client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Template service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Operations the editor needs from the template service.
#[async_trait]
pub trait TemplateApi: Send + Sync {
    async fn list_templates(&self) -> Result<Vec<SavedTemplate>, ClientError>;

    async fn get_template(&self, id: DbId) -> Result<SavedTemplate, ClientError>;

    /// `Ok(None)` when the service no longer knows the id.
    async fn update_template(
        &self,
        id: DbId,
        template: &TemplatePayload,
    ) -> Result<Option<SavedTemplate>, ClientError>;

    async fn create_template(&self, template: &TemplatePayload)
        -> Result<SavedTemplate, ClientError>;

    /// Upload an image, returning the path it is served under.
    async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<String, ClientError>;

    /// Render a template into the service's layout, returning HTML.
    async fn render_template(&self, template: &TemplatePayload) -> Result<String, ClientError>;

    /// Fetch the raw layout HTML.
    async fn fetch_layout(&self) -> Result<String, ClientError>;
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    template: SavedTemplate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    image_url: String,
}

#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    template: &'a TemplatePayload,
}

/// HTTP client for a template service instance.
#[derive(Debug, Clone)]
pub struct HttpTemplateClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTemplateClient {
    /// * `base_url` - Service root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a [`ClientError::Api`]
    /// carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn text_response(response: reqwest::Response) -> Result<String, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl TemplateApi for HttpTemplateClient {
    async fn list_templates(&self) -> Result<Vec<SavedTemplate>, ClientError> {
        let response = self.client.get(self.url("/templates")).send().await?;
        Self::parse_response(response).await
    }

    async fn get_template(&self, id: DbId) -> Result<SavedTemplate, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/templates/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update_template(
        &self,
        id: DbId,
        template: &TemplatePayload,
    ) -> Result<Option<SavedTemplate>, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/templates/{id}")))
            .json(template)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn create_template(
        &self,
        template: &TemplatePayload,
    ) -> Result<SavedTemplate, ClientError> {
        let response = self
            .client
            .post(self.url("/uploadEmailConfig"))
            .json(template)
            .send()
            .await?;
        let created: CreateResponse = Self::parse_response(response).await?;
        Ok(created.template)
    }

    async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<String, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(self.url("/uploadImage"))
            .multipart(form)
            .send()
            .await?;
        let uploaded: UploadResponse = Self::parse_response(response).await?;
        Ok(uploaded.image_url)
    }

    async fn render_template(&self, template: &TemplatePayload) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.url("/renderAndDownloadTemplate"))
            .json(&RenderRequest { template })
            .send()
            .await?;
        Self::text_response(response).await
    }

    async fn fetch_layout(&self) -> Result<String, ClientError> {
        let response = self.client.get(self.url("/getEmailLayout")).send().await?;
        Self::text_response(response).await
    }
}
