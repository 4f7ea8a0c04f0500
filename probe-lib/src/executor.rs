use std::error::Error;
use std::time::{Duration, Instant};

use crate::headers::Headers;
use crate::json::{decode_body, CONTENT_TYPE};
use crate::request::RequestSpec;
use crate::result::TestResult;

#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("probe/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Sends one request per call and turns whatever happens into a
/// [`TestResult`]. Holds configuration only.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    config: ExecutorConfig,
}

impl Executor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Headers that go on the wire: the JSON content type, overridden by
    /// anything the caller supplied.
    pub fn outgoing_headers(spec: &RequestSpec) -> Headers {
        let defaults = Headers::from_pairs([("Content-Type", CONTENT_TYPE)]);
        spec.headers.merge_over(&defaults)
    }

    pub async fn execute(&self, spec: &RequestSpec) -> TestResult {
        tracing::debug!(method = %spec.method, url = %spec.url, "dispatching request");

        let start = Instant::now();
        let response = match self.dispatch(spec).await {
            Ok(response) => response,
            Err(e) => return self.failed(spec, &e, start.elapsed()),
        };
        let elapsed = start.elapsed();

        let status = response.status();
        let status_text = reason_phrase(&response);
        let mut headers = Headers::new();
        for (name, value) in response.headers() {
            headers.append(
                name.as_str(),
                &String::from_utf8_lossy(value.as_bytes()),
            );
        }
        let content_type = headers.get(reqwest::header::CONTENT_TYPE.as_str()).map(str::to_string);

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return self.failed(spec, &e, start.elapsed()),
        };

        tracing::debug!(
            status = status.as_u16(),
            elapsed_ms = elapsed.as_millis() as u64,
            "response received"
        );

        TestResult::from_response(
            status.as_u16(),
            status_text,
            headers,
            decode_body(content_type.as_deref(), body),
            elapsed,
        )
    }

    async fn dispatch(&self, spec: &RequestSpec) -> Result<reqwest::Response, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .user_agent(self.config.user_agent.as_str());
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let mut req_builder = client.request(spec.method.to_reqwest_method(), spec.url.as_str());
        for (key, value) in Self::outgoing_headers(spec).iter() {
            tracing::trace!(header = %key, "adding header");
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = spec.transmitted_body() {
            req_builder = req_builder.body(body.to_string());
        }

        req_builder.send().await
    }

    fn failed(&self, spec: &RequestSpec, error: &reqwest::Error, elapsed: Duration) -> TestResult {
        let message = error_chain(error);
        tracing::debug!(url = %spec.url, error = %message, "request failed before a response");
        TestResult::network_error(message, elapsed)
    }
}

/// The phrase the server sent. hyper only records it when it differs from
/// the canonical one for the status code.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or("")
            .to_string(),
    }
}

/// Flattens an error and its sources into one line.
fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
