use crate::commands::shared::{
    execute_draft, resolve_settings, OutputArgs, RequestArgs, StoreArgs, TimeoutArgs,
};
use crate::commands::validators;
use crate::core::config::ConfigFile;
use crate::core::error::AppError;
use crate::core::exit_code::ExitCode;
use clap::{Args, Subcommand};
use probe_lib::{
    from_saved_endpoint, to_saved_endpoint, EndpointStore, Headers, JsonFileStore, RequestDraft,
    SavedEndpoint,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct EndpointSummaryView {
    pub name: String,
    pub method: String,
    pub url: String,
    pub id: String,
}

#[derive(Serialize)]
pub struct EndpointDetailsView {
    #[serde(rename = "Endpoint")]
    pub name: String,
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Headers")]
    pub headers: Headers,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "Created")]
    pub created_at: String,
}

impl From<SavedEndpoint> for EndpointDetailsView {
    fn from(endpoint: SavedEndpoint) -> Self {
        Self {
            name: endpoint.name,
            id: endpoint.id,
            method: endpoint.method.to_string(),
            url: endpoint.url,
            headers: endpoint.headers,
            body: endpoint.body,
            created_at: endpoint.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Args)]
#[command(about = "Manage saved endpoints")]
pub struct EndpointCommand {
    #[command(subcommand)]
    pub command: EndpointSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum EndpointSubcommand {
    #[command(about = "List saved endpoints")]
    List(ListArgs),
    #[command(about = "Show a saved endpoint")]
    Show(ShowArgs),
    #[command(about = "Save an endpoint without sending it")]
    Save(SaveArgs),
    #[command(about = "Send a saved endpoint")]
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct EndpointNameArgs {
    #[arg(
        short = 'n',
        long = "name",
        help = "Name of the saved endpoint",
        value_parser = validators::validate_endpoint_name
    )]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub endpoint_name_args: EndpointNameArgs,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    #[command(flatten)]
    pub endpoint_name_args: EndpointNameArgs,

    #[command(flatten)]
    pub request: RequestArgs,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub endpoint_name_args: EndpointNameArgs,

    #[arg(
        long = "strict-headers",
        help = "Warn when the stored headers cannot be used instead of silently dropping them"
    )]
    pub strict_headers: bool,

    #[command(flatten)]
    pub timeout: TimeoutArgs,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn find_endpoint(
    store: &JsonFileStore,
    owner: &str,
    name: &str,
) -> Result<SavedEndpoint, AppError> {
    store
        .find_by_name(owner, name)?
        .ok_or_else(|| AppError::EndpointNotFound(name.to_string()))
}

pub fn execute_list(args: &ListArgs, config: &ConfigFile) -> Result<(), AppError> {
    let settings = resolve_settings(config, &args.store, None)?;
    let store = JsonFileStore::new(&settings.store_path);

    let views: Vec<EndpointSummaryView> = store
        .list(&settings.owner)?
        .into_iter()
        .map(|e| EndpointSummaryView {
            name: e.name,
            method: e.method.to_string(),
            url: e.url,
            id: e.id,
        })
        .collect();

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(&views, "No saved endpoints")
    );

    Ok(())
}

pub fn execute_show(args: &ShowArgs, config: &ConfigFile) -> Result<(), AppError> {
    let settings = resolve_settings(config, &args.store, None)?;
    let store = JsonFileStore::new(&settings.store_path);
    let endpoint = find_endpoint(&store, &settings.owner, &args.endpoint_name_args.name)?;

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format(&EndpointDetailsView::from(endpoint)));

    Ok(())
}

pub fn execute_save(args: &SaveArgs, config: &ConfigFile) -> Result<(), AppError> {
    let settings = resolve_settings(config, &args.store, None)?;
    let draft = args.request.apply_to(RequestDraft::default());
    let endpoint = to_saved_endpoint(&args.endpoint_name_args.name, &draft)?;

    let store = JsonFileStore::new(&settings.store_path);
    let saved = store.create(&settings.owner, endpoint)?;

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format(&EndpointDetailsView::from(saved)));

    Ok(())
}

pub async fn execute_run(args: &RunArgs, config: &ConfigFile) -> Result<ExitCode, AppError> {
    let settings = resolve_settings(config, &args.store, args.timeout.timeout)?;
    let store = JsonFileStore::new(&settings.store_path);
    let endpoint = find_endpoint(&store, &settings.owner, &args.endpoint_name_args.name)?;
    tracing::debug!(id = %endpoint.id, name = %endpoint.name, "running saved endpoint");

    let draft = from_saved_endpoint(&endpoint);
    execute_draft(
        draft,
        &settings,
        args.strict_headers,
        None,
        &args.output.output,
    )
    .await
}
