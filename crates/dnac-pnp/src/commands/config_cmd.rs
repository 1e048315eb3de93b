//! Config subcommand handlers.

use dnac_config::ConfigError;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::config_file(global);

    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let rendered =
                dnac_config::to_toml_redacted(&cfg).map_err(|e| CliError::from_config(e, &path))?;
            if !global.quiet {
                println!("# {}", path.display());
                print!("{rendered}");
            }
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }

        ConfigCommand::SetPassword => {
            let cfg = config::load(global)?;
            let host = cfg
                .dnac
                .host
                .as_deref()
                .filter(|h| !h.trim().is_empty())
                .ok_or_else(|| {
                    CliError::from_config(ConfigError::MissingKey { key: "dnac.host" }, &path)
                })?;

            let password = rpassword::prompt_password(format!("Password for {host}: "))?;
            if password.is_empty() {
                return Err(CliError::Usage {
                    message: "password cannot be empty".into(),
                });
            }

            let entry = dnac_config::keyring_entry(host).map_err(|e| CliError::from_config(e, &path))?;
            entry
                .set_password(&password)
                .map_err(|e| CliError::Keyring {
                    message: format!("failed to store password: {e}"),
                })?;

            if !global.quiet {
                println!("Password for {host} stored in the system keyring.");
            }
            Ok(())
        }
    }
}
