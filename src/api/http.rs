//! Low-level HTTP helpers shared by the customer and training clients.
//!
//! Helpers here return typed [`ApiError`]s; the clients catch them at the
//! operation boundary and convert to outcome values, so a raw transport
//! error never reaches caller code.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Shared request plumbing: one reqwest client plus the configured base.
pub(crate) struct Api {
    http: reqwest::Client,
    config: ApiConfig,
}

impl Api {
    pub(crate) fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http, config })
    }

    pub(crate) fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET `url` and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST `body` as JSON to a collection endpoint. Success is strictly
    /// `201 Created`; anything else is a failure.
    pub(crate) async fn post_created<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self.http.post(url).json(body).send().await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(status_error(status, response).await);
        }
        Ok(())
    }

    /// PUT `body` as JSON to an already-resolved entity address.
    pub(crate) async fn put_json<B: Serialize>(&self, url: &str, body: &B) -> Result<(), ApiError> {
        let response = self.http.put(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }
        Ok(())
    }

    /// DELETE an already-resolved entity address.
    pub(crate) async fn delete(&self, url: &str) -> Result<(), ApiError> {
        let response = self.http.delete(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }
        Ok(())
    }

    /// POST with an empty body.
    pub(crate) async fn post_empty(&self, url: &str) -> Result<(), ApiError> {
        let response = self.http.post(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }
        Ok(())
    }
}

/// Restore the backend's demo dataset (`POST /reset`). `true` on success.
pub async fn reset_demo_data(config: &ApiConfig) -> bool {
    let api = match Api::new(config.clone()) {
        Ok(api) => api,
        Err(e) => {
            warn!(error = %e, "could not build HTTP client for reset");
            return false;
        }
    };

    let url = format!("{}/reset", config.base_url());
    match api.post_empty(&url).await {
        Ok(()) => {
            info!("demo dataset restored");
            true
        }
        Err(e) => {
            warn!(error = %e, "demo dataset reset failed");
            false
        }
    }
}

async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    ApiError::Status {
        status: status.as_u16(),
        body: body.chars().take(200).collect(),
    }
}
