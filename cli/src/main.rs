use clap::Parser;
use std::path::PathBuf;

mod commands;
mod core;

use commands::Commands;
use core::error::AppError;
use core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "probe")]
#[command(about = "Send ad-hoc HTTP requests, inspect the responses and keep the ones worth repeating.")]
#[command(version = crate::core::version::app_version())]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[arg(
        long,
        value_name = "PATH",
        help = "Config file (defaults to ./probe.toml when present)",
        global = true
    )]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    crate::core::logger::init_logging(args.debug);

    match run(args).await {
        Ok(ExitCode::Success) => {}
        Ok(code) => std::process::exit(code.code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(ExitCode::from(&e).code());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode, AppError> {
    let config = crate::core::config::load_config(args.config.as_deref())?;

    match args.command {
        Commands::Send(send_args) => commands::send::execute_send(&send_args, &config).await,
        Commands::Endpoint(endpoint_command) => match endpoint_command.command {
            commands::endpoint::EndpointSubcommand::List(list_args) => {
                commands::endpoint::execute_list(&list_args, &config).map(|_| ExitCode::Success)
            }
            commands::endpoint::EndpointSubcommand::Show(show_args) => {
                commands::endpoint::execute_show(&show_args, &config).map(|_| ExitCode::Success)
            }
            commands::endpoint::EndpointSubcommand::Save(save_args) => {
                commands::endpoint::execute_save(&save_args, &config).map(|_| ExitCode::Success)
            }
            commands::endpoint::EndpointSubcommand::Run(run_args) => {
                commands::endpoint::execute_run(&run_args, &config).await
            }
        },
        Commands::Example(example_command) => match example_command.command {
            commands::example::ExampleSubcommand::List(list_args) => {
                commands::example::execute_list(&list_args).map(|_| ExitCode::Success)
            }
        },
    }
}
