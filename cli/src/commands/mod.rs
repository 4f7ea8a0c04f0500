pub mod endpoint;
pub mod example;
pub mod send;
pub mod shared;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Send a request and show the response")]
    Send(send::SendArgs),
    Endpoint(endpoint::EndpointCommand),
    Example(example::ExampleCommand),
}
