use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProbeError, ProbeResult};
use crate::headers::{parse_headers, Headers};
use crate::http_method::HttpMethod;
use crate::request::{non_empty, RequestDraft};

/// A named request waiting to be persisted. The store assigns identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEndpoint {
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedEndpoint {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    #[serde(default)]
    pub headers: Headers,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SavedEndpoint {
    pub fn from_new(id: String, owner_id: &str, endpoint: NewEndpoint) -> Self {
        Self {
            id,
            owner_id: owner_id.to_string(),
            name: endpoint.name,
            method: endpoint.method,
            url: endpoint.url,
            headers: endpoint.headers,
            body: endpoint.body,
            created_at: Utc::now(),
        }
    }
}

/// Prepares a draft for saving. Headers are stored parsed, an empty body
/// is stored as `None`.
pub fn to_saved_endpoint(name: &str, draft: &RequestDraft) -> ProbeResult<NewEndpoint> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProbeError::validation("Name required"));
    }
    Ok(NewEndpoint {
        name: name.to_string(),
        method: draft.method,
        url: draft.url.clone(),
        headers: parse_headers(&draft.headers_text),
        body: non_empty(draft.body.clone()),
    })
}

/// Turns a saved endpoint back into an editable draft.
pub fn from_saved_endpoint(endpoint: &SavedEndpoint) -> RequestDraft {
    RequestDraft {
        method: endpoint.method,
        url: endpoint.url.clone(),
        headers_text: endpoint.headers.to_pretty_json(),
        body: endpoint.body.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(endpoint: NewEndpoint) -> SavedEndpoint {
        SavedEndpoint::from_new("id-1".to_string(), "owner", endpoint)
    }

    #[test]
    fn test_to_saved_endpoint_requires_name() {
        let draft = RequestDraft::new(HttpMethod::GET, "https://api.example.com/x");
        let err = to_saved_endpoint("  ", &draft).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Name required");
    }

    #[test]
    fn test_to_saved_endpoint_stores_parsed_headers() {
        let draft = RequestDraft::new(HttpMethod::POST, "https://api.example.com/x")
            .with_headers_text(r#"{"Authorization": "Bearer t", "X-Retry": 1}"#)
            .with_body("{\n  \"a\": 1\n}");
        let endpoint = to_saved_endpoint("Create", &draft).unwrap();
        assert_eq!(endpoint.headers.get("authorization"), Some("Bearer t"));
        assert_eq!(endpoint.headers.get("X-Retry"), Some("1"));
        assert_eq!(endpoint.body.as_deref(), Some("{\n  \"a\": 1\n}"));
    }

    #[test]
    fn test_to_saved_endpoint_bad_headers_become_empty() {
        let draft = RequestDraft::new(HttpMethod::GET, "https://api.example.com/x")
            .with_headers_text("nope");
        let endpoint = to_saved_endpoint("X", &draft).unwrap();
        assert!(endpoint.headers.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let draft = RequestDraft::new(HttpMethod::PATCH, "https://api.example.com/items/1")
            .with_headers_text(r#"{"X-A": "1", "X-B": "2"}"#);
        let restored = from_saved_endpoint(&saved(to_saved_endpoint("X", &draft).unwrap()));

        assert_eq!(restored.method, HttpMethod::PATCH);
        assert_eq!(restored.url, draft.url);
        assert_eq!(restored.body, "");
        assert_eq!(
            parse_headers(&restored.headers_text),
            parse_headers(&draft.headers_text)
        );
        assert_eq!(restored.headers_text, "{\n  \"X-A\": \"1\",\n  \"X-B\": \"2\"\n}");
    }

    #[test]
    fn test_empty_body_stored_as_null() {
        let draft = RequestDraft::new(HttpMethod::DELETE, "https://api.example.com/x");
        let endpoint = saved(to_saved_endpoint("X", &draft).unwrap());
        let value = serde_json::to_value(&endpoint).unwrap();
        assert!(value["body"].is_null());
        assert_eq!(value["ownerId"], "owner");
        assert!(value["createdAt"].is_string());
    }
}
