use crate::commands::shared::OutputArgs;
use crate::core::error::AppError;
use clap::{Args, Subcommand};
use probe_lib::presets;
use serde::Serialize;

#[derive(Serialize)]
pub struct PresetView {
    pub name: String,
    pub title: String,
    pub method: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Args)]
#[command(about = "Built-in example requests")]
pub struct ExampleCommand {
    #[command(subcommand)]
    pub command: ExampleSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ExampleSubcommand {
    #[command(about = "List built-in examples")]
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_list(args: &ListArgs) -> Result<(), AppError> {
    let views: Vec<PresetView> = presets()
        .into_iter()
        .map(|p| PresetView {
            name: p.name.to_string(),
            title: p.title.to_string(),
            method: p.draft.method.to_string(),
            url: p.draft.url,
            description: p.description.to_string(),
        })
        .collect();

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format_list(&views, "No examples"));

    Ok(())
}
