//! `sites` command handlers.

use dnac_core::add_sites;

use crate::cli::{GlobalOpts, SitesArgs, SitesCommand};
use crate::config;
use crate::error::CliError;
use crate::output::ConsoleReporter;

pub async fn handle(args: SitesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        SitesCommand::Add { file } => {
            let cfg = config::load(global)?;
            let controller = config::controller_config(global, &cfg)?;

            let mut reporter = ConsoleReporter::stdout(global);
            let outcomes = add_sites(&controller, &file, &mut reporter).await?;

            let failed = outcomes.iter().filter(|o| !o.success).count();
            if failed > 0 {
                tracing::warn!(failed, total = outcomes.len(), "some sites were rejected");
            }
            Ok(())
        }
    }
}
