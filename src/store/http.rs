//! HTTP adapter for the record store (directly, or through the gateway).

use super::wire::{FetchResponse, ListResponse, UpsertRequest, UpsertResponse};
use super::{RecordStore, UpsertOutcome, check_limit, newest_first};
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use chrono::NaiveDate;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Talks to a single endpoint on behalf of a single user. No retries:
/// every failure is surfaced to the caller as `StoreUnavailable`.
pub struct HttpRecordStore {
    endpoint: String,
    username: String,
    client: Client,
}

impl HttpRecordStore {
    pub fn new(endpoint: impl Into<String>, username: impl Into<String>) -> AppResult<Self> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(AppError::Config("record store endpoint must not be empty".into()));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            endpoint,
            username: username.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn get(&self, query: &[(&str, &str)]) -> RequestBuilder {
        self.client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .query(query)
    }

    /// Send, then require a 2xx status and a body of the expected shape.
    fn exchange<T: DeserializeOwned>(&self, op: &str, request: RequestBuilder) -> AppResult<T> {
        debug!(op, endpoint = %self.endpoint, "record store request");

        let response = request.send().map_err(|e| {
            warn!(op, error = %e, "record store unreachable");
            AppError::StoreUnavailable {
                status: e.status().map(|s| s.as_u16()),
                body: e.to_string(),
            }
        })?;

        let status = response.status();
        let body = response.text().map_err(|e| AppError::StoreUnavailable {
            status: Some(status.as_u16()),
            body: format!("unable to read response body: {e}"),
        })?;

        if !status.is_success() {
            warn!(op, status = status.as_u16(), "record store returned an error status");
            return Err(AppError::StoreUnavailable {
                status: Some(status.as_u16()),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(op, error = %e, "malformed record store response");
            AppError::StoreUnavailable {
                status: Some(status.as_u16()),
                body,
            }
        })
    }
}

/// A parsed `{ ok: false, error }` reply.
fn rejected(error: Option<String>, fallback: &str) -> AppError {
    AppError::StoreUnavailable {
        status: None,
        body: error.unwrap_or_else(|| fallback.to_string()),
    }
}

impl RecordStore for HttpRecordStore {
    fn fetch_entry(&self, date: NaiveDate) -> AppResult<Option<Entry>> {
        let date = date.format("%Y-%m-%d").to_string();
        let request = self.get(&[("date", date.as_str()), ("username", self.username.as_str())]);
        let reply: FetchResponse = self.exchange("fetch", request)?;

        if !reply.ok {
            return Err(rejected(reply.error, "Failed to load entry."));
        }
        Ok(reply.entry)
    }

    fn list_entries(&self, limit: u32) -> AppResult<Vec<Entry>> {
        let max = check_limit(limit)?;
        let limit = limit.to_string();
        let request = self.get(&[
            ("action", "list"),
            ("username", self.username.as_str()),
            ("limit", limit.as_str()),
        ]);
        let reply: ListResponse = self.exchange("list", request)?;

        if !reply.ok {
            return Err(rejected(reply.error, "Failed to load history."));
        }
        Ok(newest_first(reply.entries.unwrap_or_default(), max))
    }

    fn upsert(&self, entry: &Entry) -> AppResult<UpsertOutcome> {
        let body = UpsertRequest {
            entry,
            username: &self.username,
        };
        let request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(serde_json::to_vec(&body)?);
        let reply: UpsertResponse = self.exchange("upsert", request)?;

        if !reply.ok {
            return Err(rejected(reply.error, "Failed to save."));
        }
        Ok(UpsertOutcome {
            row_number: reply.row_number,
            was_update: reply.updated,
        })
    }
}
