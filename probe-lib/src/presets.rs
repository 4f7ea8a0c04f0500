use serde::Serialize;

use crate::http_method::HttpMethod;
use crate::request::RequestDraft;

#[derive(Debug, Clone, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub draft: RequestDraft,
}

const JSON_HEADERS: &str = r#"{"Content-Type": "application/json"}"#;

pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "get",
            title: "GET Example",
            description: "Fetch a JSON post",
            draft: RequestDraft::new(
                HttpMethod::GET,
                "https://jsonplaceholder.typicode.com/posts/1",
            )
            .with_headers_text(JSON_HEADERS),
        },
        Preset {
            name: "post",
            title: "POST Example",
            description: "Create a new post",
            draft: RequestDraft::new(HttpMethod::POST, "https://jsonplaceholder.typicode.com/posts")
                .with_headers_text(JSON_HEADERS)
                .with_body("{\n  \"title\": \"foo\",\n  \"body\": \"bar\",\n  \"userId\": 1\n}"),
        },
        Preset {
            name: "status",
            title: "Status Test",
            description: "Test HTTP status codes",
            draft: RequestDraft::new(HttpMethod::GET, "https://httpstat.us/200"),
        },
    ]
}

pub fn preset(name: &str) -> Option<Preset> {
    presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::parse_headers;

    #[test]
    fn test_preset_lookup_is_case_insensitive() {
        assert_eq!(preset("POST").unwrap().draft.method, HttpMethod::POST);
        assert_eq!(preset(" get ").unwrap().draft.method, HttpMethod::GET);
        assert!(preset("missing").is_none());
    }

    #[test]
    fn test_presets_are_valid_drafts() {
        for preset in presets() {
            let spec = preset.draft.clone().into_spec().unwrap();
            assert!(spec.url.starts_with("https://"));
        }
    }

    #[test]
    fn test_post_preset_body_is_json() {
        let draft = preset("post").unwrap().draft;
        let body: serde_json::Value = serde_json::from_str(&draft.body).unwrap();
        assert_eq!(body["userId"], 1);
        assert_eq!(
            parse_headers(&draft.headers_text).get("content-type"),
            Some("application/json")
        );
    }

    #[test]
    fn test_status_preset_has_no_custom_headers() {
        let draft = preset("status").unwrap().draft;
        assert!(parse_headers(&draft.headers_text).is_empty());
        assert!(draft.body.is_empty());
    }
}
