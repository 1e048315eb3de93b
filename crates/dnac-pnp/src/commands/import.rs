//! `import` command handler.

use tracing::debug;

use dnac_core::{DeviceDefinition, ImportJob, ImportMode, PnpImporter, import_devices};

use crate::cli::{GlobalOpts, ImportArgs};
use crate::config;
use crate::error::CliError;
use crate::output::ConsoleReporter;

pub async fn handle(args: ImportArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mode = ImportMode::parse(&args.mode)?;

    let device = match (args.serial, args.pid, args.name) {
        (Some(serial_number), Some(pid), Some(name)) => Some(DeviceDefinition {
            serial_number,
            pid,
            name,
        }),
        _ => None,
    };
    let job = ImportJob::prepare(mode, device, args.devices_file.as_deref())?;

    let cfg = config::load(global)?;
    let controller = config::controller_config(global, &cfg)?;
    let base_directory = config::base_directory(global, &cfg)?;

    let mut reporter = ConsoleReporter::stdout(global);
    let report = import_devices(
        &controller,
        &base_directory,
        &job,
        &PnpImporter,
        &mut reporter,
    )
    .await?;

    debug!(?report, "import complete");
    Ok(())
}
