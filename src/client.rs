//! Lookup client — single GET to the maintenance backend's timeline endpoint.
//!
//! DESIGN
//! ======
//! One best-effort request per search: no retries, no caching, no
//! deduplication. Backend auth rides on the caller's session, so the
//! caller's `Cookie` header can be passed through. The trait seam exists so
//! the flow and routes can be tested with a stub instead of a live backend.

use std::time::Duration;

use crate::config::TrackConfig;
use crate::error::TrackError;
use crate::model::{LookupReply, parse_lookup_reply};

/// Backend path serving `{ success, fichas }` replies by cédula.
const TIMELINES_PATH: &str = "/reports/timelines/";

/// Ticket lookup by customer identifier. Enables mocking in tests.
#[async_trait::async_trait]
pub trait TicketLookup: Send + Sync {
    /// Fetch the tickets registered under `cedula`.
    ///
    /// # Errors
    ///
    /// Returns a [`TrackError`] on transport failure, non-success HTTP
    /// status, or an unparseable body. All three are terminal for the
    /// triggering search; nothing is retried.
    async fn lookup(&self, cedula: &str, cookie: Option<&str>) -> Result<LookupReply, TrackError>;
}

pub struct LookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl LookupClient {
    /// Build a client against the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::HttpClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &TrackConfig) -> Result<Self, TrackError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| TrackError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.backend_url.trim_end_matches('/').to_string() })
    }

    fn timelines_url(&self) -> String {
        format!("{}{TIMELINES_PATH}", self.base_url)
    }
}

#[async_trait::async_trait]
impl TicketLookup for LookupClient {
    async fn lookup(&self, cedula: &str, cookie: Option<&str>) -> Result<LookupReply, TrackError> {
        let mut request = self
            .http
            .get(self.timelines_url())
            .query(&[("cedula", cedula)]);
        if let Some(cookie) = cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TrackError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TrackError::Request(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(TrackError::BadStatus { status, body: text });
        }
        parse_lookup_reply(&text)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
