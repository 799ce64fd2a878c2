//! JSON document store client.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use zeroize::Zeroizing;

use super::StoreError;

/// Configuration for connecting to the document store.
#[derive(Clone)]
pub struct StoreConfig {
    /// Base URL, e.g. `"https://store.example.com/v1"`.
    pub base_url: String,

    /// Bearer token of the signed-in user.
    pub token: Zeroizing<String>,
}

impl Debug for StoreConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// HTTP client for the document store's collections.
#[derive(Debug, Clone)]
pub struct StoreClient {
    config: StoreConfig,
    http: Client,
}

impl StoreClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Fetch a document, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, StoreError> {
        let response = self.request(Method::GET, path).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::check(Method::GET, path, response).await?;

        Ok(Some(response.json().await?))
    }

    /// Create a document in a collection.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), StoreError> {
        let response = self.request(Method::POST, path).json(body).send().await?;

        Self::check(Method::POST, path, response).await?;

        Ok(())
    }

    /// Create or replace a document.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), StoreError> {
        let response = self.request(Method::PUT, path).json(body).send().await?;

        Self::check(Method::PUT, path, response).await?;

        Ok(())
    }

    /// Merge fields into an existing document. Returns `false` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn patch<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<bool, StoreError> {
        let response = self.request(Method::PATCH, path).json(body).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        Self::check(Method::PATCH, path, response).await?;

        Ok(true)
    }

    /// Delete a document. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn delete(&self, path: &str) -> Result<bool, StoreError> {
        let response = self.request(Method::DELETE, path).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        Self::check(Method::DELETE, path, response).await?;

        Ok(true)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);

        debug!(%method, %url, "store request");

        self.http
            .request(method, url)
            .bearer_auth(self.config.token.as_str())
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn check(method: Method, path: &str, response: Response) -> Result<Response, StoreError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(StoreError::UnexpectedResponse(format!(
                "{method} {path} failed with status {status}: {text}"
            )));
        }

        Ok(response)
    }
}
