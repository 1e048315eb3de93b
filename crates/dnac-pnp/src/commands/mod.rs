//! Command dispatch.

pub mod config_cmd;
pub mod import;
pub mod sites;

use clap::CommandFactory;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    tracing::debug!(command = ?cmd, "dispatching command");

    match cmd {
        Command::Import(args) => import::handle(args, global).await,
        Command::Sites(args) => sites::handle(args, global).await,
        Command::Config(args) => config_cmd::handle(args, global),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "dnac-pnp", &mut std::io::stdout());
            Ok(())
        }
    }
}
