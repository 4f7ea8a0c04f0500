use serde::{Deserialize, Serialize};

use crate::error::{ProbeError, ProbeResult};
use crate::headers::{parse_headers, Headers};
use crate::http_method::HttpMethod;

/// The editable, textual form of a request: headers are raw JSON text and
/// an absent body is `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDraft {
    pub method: HttpMethod,
    pub url: String,
    pub headers_text: String,
    pub body: String,
}

impl RequestDraft {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers_text: "{}".to_string(),
            body: String::new(),
        }
    }

    pub fn with_headers_text(mut self, headers_text: impl Into<String>) -> Self {
        self.headers_text = headers_text.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Fails only when the URL is blank. Header text never fails here.
    pub fn into_spec(self) -> ProbeResult<RequestSpec> {
        let headers = parse_headers(&self.headers_text);
        self.into_spec_with_headers(headers)
    }

    /// Same as [`RequestDraft::into_spec`] with headers the caller already parsed.
    pub fn into_spec_with_headers(self, headers: Headers) -> ProbeResult<RequestSpec> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ProbeError::validation("URL required"));
        }
        Ok(RequestSpec {
            method: self.method,
            url: url.to_string(),
            headers,
            body: non_empty(self.body),
        })
    }
}

/// One outbound HTTP call, ready for the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = non_empty(body.into());
        self
    }

    /// The body that goes on the wire: never for GET, never when empty.
    pub fn transmitted_body(&self) -> Option<&str> {
        if self.method == HttpMethod::GET {
            return None;
        }
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}

pub(crate) fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
