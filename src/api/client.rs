//! HTTP client for the recipe API.
//!
//! This module wraps a [`reqwest::Client`] with the request contract the rest
//! of the crate relies on: every request is raced against a fixed timeout,
//! non-success statuses are normalized into [`LadleError::Api`] carrying the
//! server message and status code, and bodies are decoded as JSON. No request
//! is ever retried; a single failed attempt surfaces immediately to the caller.

use crate::api::types::ErrorBody;
use crate::domain::error::{LadleError, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Client for the recipe API with a fixed per-request timeout.
///
/// Cloneable; the underlying connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    timeout_secs: u64,
}

impl ApiClient {
    /// Creates a client whose requests time out after `timeout_secs` seconds.
    #[must_use]
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            http: Client::new(),
            timeout_secs,
        }
    }

    /// Issues a GET request and decodes the JSON response body.
    ///
    /// # Errors
    ///
    /// - [`LadleError::Timeout`] when the timeout elapses before the response
    /// - [`LadleError::Api`] on a non-success status, carrying the body message
    /// - [`LadleError::Request`] on transport failures or undecodable bodies
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url = %url, "GET");
        let response = self.send(self.http.get(url)).await?;
        Self::decode(response).await
    }

    /// Issues a POST request with a JSON body and decodes the JSON response.
    ///
    /// Serializes `payload` as the request body with
    /// `content-type: application/json`.
    ///
    /// # Errors
    ///
    /// Same contract as [`fetch_json`](Self::fetch_json).
    pub async fn post_json<T, B>(&self, url: &str, payload: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!(url = %url, "POST");
        let response = self.send(self.http.post(url).json(payload)).await?;
        Self::decode(response).await
    }

    /// Issues a DELETE request; no response body is expected.
    ///
    /// # Errors
    ///
    /// Same timeout and status contract as [`fetch_json`](Self::fetch_json).
    pub async fn delete_resource(&self, url: &str) -> Result<()> {
        tracing::debug!(url = %url, "DELETE");
        let response = self.send(self.http.delete(url)).await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Sends a request raced against the configured timeout.
    ///
    /// Whichever settles first determines the outcome; the losing future is
    /// dropped without further effect.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let deadline = Duration::from_secs(self.timeout_secs);
        match tokio::time::timeout(deadline, request.send()).await {
            Ok(sent) => sent.map_err(|e| LadleError::Request(e.to_string())),
            Err(_) => {
                tracing::debug!(timeout_secs = self.timeout_secs, "request timed out");
                Err(LadleError::Timeout {
                    seconds: self.timeout_secs,
                })
            }
        }
    }

    /// Rejects non-success responses, mapping the error body into
    /// [`LadleError::Api`].
    ///
    /// The API reports failures as `{ "message": ... }`; when that shape is
    /// missing the status reason is used instead.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        Err(LadleError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Decodes a successful response body as JSON.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| LadleError::Request(e.to_string()))
    }
}
