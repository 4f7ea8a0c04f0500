use crate::commands::validators;
use crate::core::config::{ConfigFile, Settings};
use crate::core::error::AppError;
use crate::core::exit_code::ExitCode;
use crate::core::formatter::OutputFormat;
use clap::Args;
use probe_lib::{
    parse_headers_strict, to_saved_endpoint, EndpointStore, Executor, HttpMethod, JsonFileStore,
    RequestDraft, TestResult,
};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct StoreArgs {
    #[arg(
        long = "store",
        env = "PROBE_STORE",
        value_name = "PATH",
        help = "Path to the saved endpoints file"
    )]
    pub store: Option<PathBuf>,

    #[arg(
        long = "owner",
        env = "PROBE_OWNER",
        help = "Owner whose saved endpoints are used"
    )]
    pub owner: Option<String>,
}

#[derive(Debug, Args)]
pub struct TimeoutArgs {
    #[arg(
        short = 't',
        long = "timeout",
        value_name = "SECONDS",
        help = "Give up on the request after this many seconds",
        value_parser = validators::validate_timeout
    )]
    pub timeout: Option<f64>,
}

#[derive(Debug, Args)]
pub struct RequestArgs {
    #[arg(
        short = 'X',
        long = "method",
        help = "HTTP method: GET, POST, PUT, PATCH or DELETE",
        value_parser = validators::validate_method
    )]
    pub method: Option<HttpMethod>,

    #[arg(short = 'u', long = "url", help = "Absolute request URL")]
    pub url: Option<String>,

    #[arg(
        short = 'H',
        long = "headers",
        value_name = "JSON",
        help = "Request headers as a JSON object"
    )]
    pub headers: Option<String>,

    #[arg(
        short = 'b',
        long = "body",
        help = "Request body, sent verbatim (ignored for GET)"
    )]
    pub body: Option<String>,
}

impl RequestArgs {
    /// Overwrites the fields of `draft` that were given on the command line.
    pub fn apply_to(&self, mut draft: RequestDraft) -> RequestDraft {
        if let Some(method) = self.method {
            draft.method = method;
        }
        if let Some(url) = &self.url {
            draft.url = url.clone();
        }
        if let Some(headers) = &self.headers {
            draft.headers_text = headers.clone();
        }
        if let Some(body) = &self.body {
            draft.body = body.clone();
        }
        draft
    }
}

pub fn resolve_settings(
    config: &ConfigFile,
    store: &StoreArgs,
    timeout: Option<f64>,
) -> Result<Settings, AppError> {
    Settings::resolve(
        config,
        store.store.as_deref(),
        store.owner.as_deref(),
        timeout,
    )
}

/// Sends `draft`, prints the result and saves it under `save_as` when asked.
/// The save name is checked before anything goes out.
pub async fn execute_draft(
    draft: RequestDraft,
    settings: &Settings,
    strict_headers: bool,
    save_as: Option<&str>,
    output: &OutputFormat,
) -> Result<ExitCode, AppError> {
    let pending_save = save_as
        .map(|name| to_saved_endpoint(name, &draft))
        .transpose()?;

    let spec = if strict_headers {
        let headers = parse_headers_strict(&draft.headers_text).unwrap_or_else(|warning| {
            tracing::warn!("{warning}");
            Default::default()
        });
        draft.into_spec_with_headers(headers)?
    } else {
        draft.into_spec()?
    };

    let executor = Executor::new(settings.executor.clone());
    let result = executor.execute(&spec).await;

    let formatter = crate::core::formatter::get_formatter(output);
    print!("{}", formatter.format_result(&result));

    if let Some(endpoint) = pending_save {
        let store = JsonFileStore::new(&settings.store_path);
        let saved = store.create(&settings.owner, endpoint)?;
        eprintln!("Saved endpoint '{}' ({})", saved.name, saved.id);
    }

    Ok(exit_code_for(&result))
}

pub fn exit_code_for(result: &TestResult) -> ExitCode {
    if result.is_network_error() {
        ExitCode::NetworkError
    } else {
        ExitCode::Success
    }
}
