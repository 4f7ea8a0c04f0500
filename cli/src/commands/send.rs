use crate::commands::shared::{
    execute_draft, resolve_settings, OutputArgs, RequestArgs, StoreArgs, TimeoutArgs,
};
use crate::commands::validators;
use crate::core::config::ConfigFile;
use crate::core::error::AppError;
use crate::core::exit_code::ExitCode;
use clap::Args;
use probe_lib::{preset, RequestDraft};

#[derive(Debug, Args)]
pub struct SendArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    #[arg(
        short = 'e',
        long = "example",
        help = "Start from a built-in example (see `probe example list`)"
    )]
    pub example: Option<String>,

    #[arg(
        long = "save",
        value_name = "NAME",
        help = "Save the request under this name once it has been sent",
        value_parser = validators::validate_endpoint_name
    )]
    pub save: Option<String>,

    #[arg(
        long = "strict-headers",
        help = "Warn when the headers are not a JSON object instead of silently dropping them"
    )]
    pub strict_headers: bool,

    #[command(flatten)]
    pub timeout: TimeoutArgs,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn build_draft(args: &SendArgs) -> Result<RequestDraft, AppError> {
    let base = match &args.example {
        Some(name) => {
            preset(name)
                .ok_or_else(|| AppError::PresetNotFound(name.clone()))?
                .draft
        }
        None => RequestDraft::default(),
    };
    Ok(args.request.apply_to(base))
}

pub async fn execute_send(args: &SendArgs, config: &ConfigFile) -> Result<ExitCode, AppError> {
    let settings = resolve_settings(config, &args.store, args.timeout.timeout)?;
    let draft = build_draft(args)?;
    tracing::debug!(method = %draft.method, url = %draft.url, "sending draft");

    execute_draft(
        draft,
        &settings,
        args.strict_headers,
        args.save.as_deref(),
        &args.output.output,
    )
    .await
}
