//! Command dispatch: bridges CLI args -> admin API calls -> output formatting.

pub mod certificates;
pub mod config_cmd;
pub mod consumers;
pub mod info;
pub mod plugins;
pub mod routes;
pub mod services;
pub mod snis;
pub mod tags;
pub mod targets;
pub mod upstreams;
pub mod util;

use kong_api::KongClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch an admin-API-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &KongClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Services(args) => services::handle(client, args, global).await,
        Command::Routes(args) => routes::handle(client, args, global).await,
        Command::Consumers(args) => consumers::handle(client, args, global).await,
        Command::Plugins(args) => plugins::handle(client, args, global).await,
        Command::Certificates(args) => certificates::handle(client, args, global).await,
        Command::Snis(args) => snis::handle(client, args, global).await,
        Command::Upstreams(args) => upstreams::handle(client, args, global).await,
        Command::Targets(args) => targets::handle(client, args, global).await,
        Command::Tags(args) => tags::handle(client, args, global).await,
        Command::Info => info::handle_info(client, global).await,
        Command::Status => info::handle_status(client, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
