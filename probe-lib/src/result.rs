use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::headers::Headers;

pub const NETWORK_ERROR_STATUS: u16 = 0;
pub const NETWORK_ERROR_TEXT: &str = "Network Error";

/// Outcome of one executed request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub status: u16,
    pub status_text: String,
    pub headers: Headers,
    pub data: Value,
    pub duration_ms: u64,
    pub timestamp: String,
}

impl TestResult {
    pub fn from_response(
        status: u16,
        status_text: impl Into<String>,
        headers: Headers,
        data: Value,
        elapsed: Duration,
    ) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers,
            data,
            duration_ms: millis(elapsed),
            timestamp: now_iso8601(),
        }
    }

    /// No response was received. `message` is the transport's error text.
    pub fn network_error(message: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            status: NETWORK_ERROR_STATUS,
            status_text: NETWORK_ERROR_TEXT.to_string(),
            headers: Headers::new(),
            data: Value::String(message.into()),
            duration_ms: millis(elapsed),
            timestamp: now_iso8601(),
        }
    }

    pub fn is_network_error(&self) -> bool {
        self.status == NETWORK_ERROR_STATUS
    }

    pub fn is_success(&self) -> bool {
        self.status_class() == StatusClass::Success
    }

    pub fn status_class(&self) -> StatusClass {
        StatusClass::of(self.status)
    }

    /// `"200 OK"`, or `"200"` when the transport gave no reason phrase.
    pub fn status_line(&self) -> String {
        if self.status_text.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.status_text)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    NetworkError,
    Informational,
    Success,
    Redirect,
    ClientError,
    ServerError,
    Unknown,
}

impl StatusClass {
    pub fn of(status: u16) -> Self {
        match status {
            0 => StatusClass::NetworkError,
            100..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirect,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::NetworkError => "network error",
            StatusClass::Informational => "informational",
            StatusClass::Success => "success",
            StatusClass::Redirect => "redirect",
            StatusClass::ClientError => "client error",
            StatusClass::ServerError => "server error",
            StatusClass::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
