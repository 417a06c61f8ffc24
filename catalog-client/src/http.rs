//! HTTP operations against the catalog API

use std::path::Path;

use mime_guess::MimeGuess;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use shared::models::{Product, ProductPayload};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for the remote product catalog
///
/// Operations never retry and never cache; a duplicate submit issues a
/// duplicate create.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    api_url: String,
}

impl CatalogClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Map a non-success response to a status error carrying the status text
    async fn check_status(response: Response, context: &str) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = format!("{context}: {}", status_text(status));
        tracing::error!(%status, "{message}");
        Err(ClientError::Status { status, message })
    }

    /// Fetch the full product list
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        let response = self.client.get(self.url("products")).send().await?;
        let response = Self::check_status(response, "Error fetching products").await?;
        Ok(response.json().await?)
    }

    /// Fetch one product by id
    pub async fn get_product(&self, id: i64) -> ClientResult<Product> {
        let response = self
            .client
            .get(self.url(&format!("products/{id}")))
            .send()
            .await?;
        let response = Self::check_status(response, "Error fetching product").await?;
        Ok(response.json().await?)
    }

    /// Create a new product
    pub async fn create_product(&self, payload: &ProductPayload) -> ClientResult<Product> {
        let response = self
            .client
            .post(self.url("products"))
            .json(payload)
            .send()
            .await?;
        let response = Self::check_status(response, "Error creating product").await?;
        Ok(response.json().await?)
    }

    /// Update an existing product
    pub async fn update_product(&self, id: i64, payload: &ProductPayload) -> ClientResult<Product> {
        let response = self
            .client
            .put(self.url(&format!("products/{id}")))
            .json(payload)
            .send()
            .await?;
        let response = Self::check_status(response, "Error updating product").await?;
        Ok(response.json().await?)
    }

    /// Delete a product
    ///
    /// A failed delete carries the server's `message` field when the error
    /// body has one, falling back to the status text.
    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("products/{id}")))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let detail = match response.json::<ErrorBody>().await {
            Ok(ErrorBody { message: Some(message) }) => message,
            _ => status_text(status).to_string(),
        };
        let message = format!("Error deleting product: {detail}");
        tracing::error!(%status, "{message}");
        Err(ClientError::Status { status, message })
    }

    /// Upload a file, returning the server-assigned path
    ///
    /// Sent as multipart with the field name `file`; the part carries the
    /// original filename and a guessed MIME type.
    pub async fn upload_file(&self, path: &Path) -> ClientResult<String> {
        let data = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = MimeGuess::from_path(path).first_or_octet_stream();

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(filename)
            .mime_str(mime.essence_str())?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("upload"))
            .multipart(form)
            .send()
            .await?;
        let response = Self::check_status(response, "Error uploading file").await?;

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct UploadBody {
            file_path: String,
        }

        let body: UploadBody = response.json().await?;
        Ok(body.file_path)
    }
}

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("unknown status")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = CatalogClient::new(&ClientConfig::new("http://localhost:8080/api/v1/"));
        assert_eq!(client.url("products"), "http://localhost:8080/api/v1/products");
        assert_eq!(client.url("/products/7"), "http://localhost:8080/api/v1/products/7");
    }

    #[test]
    fn status_error_displays_its_message() {
        let err = ClientError::Status {
            status: StatusCode::CONFLICT,
            message: "Error deleting product: in use".to_string(),
        };
        assert_eq!(err.to_string(), "Error deleting product: in use");
    }

    #[test]
    fn status_text_falls_back_for_unknown_codes() {
        assert_eq!(status_text(StatusCode::NOT_FOUND), "Not Found");
        let odd = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_text(odd), "unknown status");
    }
}
