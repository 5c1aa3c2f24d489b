//! HTTP client for the `/api/buses` resource.
//!
//! [`BusApi`] is the seam between the roster and the network; the terminal
//! app uses [`HttpBusApi`], tests plug in their own implementations.
//!
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::model::{Bus, BusDraft, BusId, DeleteRequest};

/// Path of the bus resource relative to the base URL.
pub const BUSES_PATH: &str = "/api/buses";

#[async_trait]
pub trait BusApi: Send + Sync {
    /// `GET /api/buses`
    async fn list(&self) -> Result<Vec<Bus>>;
    /// `POST /api/buses` with a draft; returns the stored record.
    async fn create(&self, draft: &BusDraft) -> Result<Bus>;
    /// `PUT /api/buses` with a full record; returns the stored record.
    async fn update(&self, bus: &Bus) -> Result<Bus>;
    /// `DELETE /api/buses` with `{ "id": .. }`.
    async fn delete(&self, id: BusId) -> Result<()>;
}

pub struct HttpBusApi {
    client: Client,
    url: String,
}

impl HttpBusApi {
    /// Build a client for `base_url` (scheme and host, optional path prefix).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        let url = format!("{}{}", base_url.trim_end_matches('/'), BUSES_PATH);
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Reject any non-2xx answer before the body is looked at.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = check_status(response)?.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl BusApi for HttpBusApi {
    async fn list(&self) -> Result<Vec<Bus>> {
        tracing::debug!(url = %self.url, "GET buses");
        let response = self.client.get(&self.url).send().await?;
        decode(response).await
    }

    async fn create(&self, draft: &BusDraft) -> Result<Bus> {
        tracing::debug!(url = %self.url, bus_number = %draft.bus_number, "POST bus");
        let response = self.client.post(&self.url).json(draft).send().await?;
        decode(response).await
    }

    async fn update(&self, bus: &Bus) -> Result<Bus> {
        tracing::debug!(url = %self.url, id = bus.id, "PUT bus");
        let response = self.client.put(&self.url).json(bus).send().await?;
        decode(response).await
    }

    async fn delete(&self, id: BusId) -> Result<()> {
        tracing::debug!(url = %self.url, id, "DELETE bus");
        let response = self
            .client
            .delete(&self.url)
            .json(&DeleteRequest { id })
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_url_is_joined_once() {
        let api = HttpBusApi::with_client(Client::new(), "http://localhost:3000/");
        assert_eq!(api.url(), "http://localhost:3000/api/buses");
        let api = HttpBusApi::with_client(Client::new(), "http://fleet.example/admin");
        assert_eq!(api.url(), "http://fleet.example/admin/api/buses");
    }
}
