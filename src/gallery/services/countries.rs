//! # Country Service
//!
//! Fetches the dataset once. The fetch runs on a spawned task and reports
//! back over a channel so the event loop keeps handling input while the
//! request is in flight. If the controller goes away first, the result is
//! dropped with the channel.

use crate::gallery::models::{records_from_json, CountryRecord};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// The single error kind of the gallery: the load did not produce data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("the request ended without a result")]
    Interrupted,
}

impl LoadFailure {
    fn from_request(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            LoadFailure::Network("request timed out".to_string())
        } else {
            LoadFailure::Network(error.to_string())
        }
    }

    /// Errors while reading the body are parse failures unless the timeout hit
    fn from_body(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            LoadFailure::from_request(error)
        } else {
            LoadFailure::Parse(error.to_string())
        }
    }
}

/// Anything that can produce the full list of countries
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, LoadFailure>;
}

/// The public REST endpoint, fetched with reqwest
#[derive(Debug, Clone)]
pub struct HttpCountrySource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCountrySource {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("flagline/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CountrySource for HttpCountrySource {
    async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, LoadFailure> {
        tracing::info!(endpoint = %self.endpoint, "fetching countries");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(LoadFailure::from_request)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "country request failed");
            return Err(LoadFailure::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(LoadFailure::from_body)?;

        records_from_json(&payload)
            .ok_or_else(|| LoadFailure::Parse("expected a JSON array of countries".to_string()))
    }
}

/// Serves a fixed result; for tests and offline demos
#[derive(Debug, Clone)]
pub struct StaticCountrySource {
    result: Result<Vec<CountryRecord>, LoadFailure>,
}

impl StaticCountrySource {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self {
            result: Ok(records),
        }
    }

    pub fn failing(failure: LoadFailure) -> Self {
        Self {
            result: Err(failure),
        }
    }
}

#[async_trait]
impl CountrySource for StaticCountrySource {
    async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, LoadFailure> {
        self.result.clone()
    }
}

/// Outcome of a background load
#[derive(Debug)]
pub enum LoadMessage {
    Loaded(Vec<CountryRecord>),
    Failed(LoadFailure),
}

impl From<Result<Vec<CountryRecord>, LoadFailure>> for LoadMessage {
    fn from(result: Result<Vec<CountryRecord>, LoadFailure>) -> Self {
        match result {
            Ok(records) => LoadMessage::Loaded(records),
            Err(failure) => LoadMessage::Failed(failure),
        }
    }
}

/// Owns the data source and the channel of the in-flight load
pub struct CountryService {
    source: Arc<dyn CountrySource>,
    receiver: Option<mpsc::Receiver<LoadMessage>>,
}

impl CountryService {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self {
            source,
            receiver: None,
        }
    }

    /// Fetch and wait for the result
    pub async fn fetch(&self) -> Result<Vec<CountryRecord>, LoadFailure> {
        self.source.fetch_countries().await
    }

    /// Start the fetch on a background task. Poll with [`Self::try_receive`].
    pub fn spawn_fetch(&mut self) {
        if self.receiver.is_some() {
            tracing::debug!("country fetch already in flight");
            return;
        }

        let (sender, receiver) = mpsc::channel(1);
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let message = LoadMessage::from(source.fetch_countries().await);
            if sender.send(message).await.is_err() {
                tracing::debug!("gallery closed before the fetch finished, discarding result");
            }
        });
        self.receiver = Some(receiver);
    }

    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }

    /// The finished load, if it has arrived
    pub fn try_receive(&mut self) -> Option<LoadMessage> {
        let receiver = self.receiver.as_mut()?;
        match receiver.try_recv() {
            Ok(message) => {
                self.receiver = None;
                Some(message)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::error!("country fetch task ended without reporting");
                self.receiver = None;
                Some(LoadMessage::Failed(LoadFailure::Interrupted))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<CountryRecord> {
        vec![CountryRecord::new("Fiji", "Republic of Fiji", "", 896444)]
    }

    #[test]
    fn load_failure_should_describe_itself() {
        assert_eq!(
            LoadFailure::Status(503).to_string(),
            "server responded with status 503"
        );
        assert_eq!(
            LoadFailure::Parse("eof".to_string()).to_string(),
            "malformed response: eof"
        );
    }

    #[tokio::test]
    async fn static_source_should_return_its_result() {
        let service = CountryService::new(Arc::new(StaticCountrySource::new(records())));
        assert_eq!(service.fetch().await.unwrap(), records());

        let failing = CountryService::new(Arc::new(StaticCountrySource::failing(
            LoadFailure::Status(500),
        )));
        assert_eq!(failing.fetch().await.unwrap_err(), LoadFailure::Status(500));
    }

    #[tokio::test]
    async fn spawned_fetch_should_deliver_once() {
        let mut service = CountryService::new(Arc::new(StaticCountrySource::new(records())));
        assert!(service.try_receive().is_none());

        service.spawn_fetch();
        assert!(service.is_pending());

        let message = loop {
            if let Some(message) = service.try_receive() {
                break message;
            }
            tokio::task::yield_now().await;
        };

        assert!(matches!(message, LoadMessage::Loaded(ref r) if r.len() == 1));
        assert!(!service.is_pending());
        assert!(service.try_receive().is_none());
    }

    #[tokio::test]
    async fn dropping_the_service_should_discard_the_result() {
        let mut service = CountryService::new(Arc::new(StaticCountrySource::new(records())));
        service.spawn_fetch();
        drop(service);
        tokio::task::yield_now().await;
    }
}
