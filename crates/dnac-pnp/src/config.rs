//! Config resolution for the CLI: file + env via `dnac_config`, then
//! command-line overrides.

use std::path::PathBuf;
use std::time::Duration;

use dnac_config::Config;
use dnac_core::ControllerConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Config file in effect: `--config` or the platform default.
pub fn config_file(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(dnac_config::config_path)
}

pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let path = config_file(global);
    dnac_config::load_config(Some(path.as_path())).map_err(|e| CliError::from_config(e, &path))
}

/// Connection settings with `--timeout` applied.
pub fn controller_config(global: &GlobalOpts, cfg: &Config) -> Result<ControllerConfig, CliError> {
    let mut controller = dnac_config::controller_config(cfg)
        .map_err(|e| CliError::from_config(e, &config_file(global)))?;

    if let Some(secs) = global.timeout {
        if secs == 0 {
            return Err(CliError::Usage {
                message: "--timeout must be at least 1 second".into(),
            });
        }
        controller.timeout = Duration::from_secs(secs);
    }
    Ok(controller)
}

pub fn base_directory(global: &GlobalOpts, cfg: &Config) -> Result<PathBuf, CliError> {
    dnac_config::base_directory(cfg).map_err(|e| CliError::from_config(e, &config_file(global)))
}
