//! Core of `probe`: send an ad-hoc HTTP request, capture what came back,
//! and keep named requests around for reuse.

pub mod endpoint;
pub mod error;
pub mod executor;
pub mod headers;
pub mod http_method;
pub mod json;
pub mod presets;
pub mod request;
pub mod result;
pub mod store;

pub use endpoint::{from_saved_endpoint, to_saved_endpoint, NewEndpoint, SavedEndpoint};
pub use error::{ProbeError, ProbeResult};
pub use executor::{Executor, ExecutorConfig};
pub use headers::{parse_headers, parse_headers_strict, HeaderParseWarning, Headers};
pub use http_method::HttpMethod;
pub use presets::{preset, presets, Preset};
pub use request::{RequestDraft, RequestSpec};
pub use result::{StatusClass, TestResult, NETWORK_ERROR_TEXT};
pub use store::{EndpointStore, JsonFileStore, MemoryStore};
