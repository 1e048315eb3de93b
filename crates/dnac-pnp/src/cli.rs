//! Clap derive structures for the `dnac-pnp` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// dnac-pnp -- PnP device import and site hierarchy creation
#[derive(Debug, Parser)]
#[command(
    name = "dnac-pnp",
    version,
    about = "Provision PnP devices and sites on a DNA Center controller",
    long_about = "Imports devices into the controller's Plug-and-Play inventory and\n\
        creates area/building/floor site hierarchies from a YAML file.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, env = "DNAC_PNP_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides dnac.timeout)
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import devices into the PnP inventory
    Import(ImportArgs),

    /// Manage the site hierarchy
    Sites(SitesArgs),

    /// Inspect configuration and store credentials
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Import mode: `single` or `bulk`
    #[arg(value_name = "MODE")]
    pub mode: String,

    /// Serial number (single mode)
    #[arg(long, required_if_eq("mode", "single"), conflicts_with = "devices_file")]
    pub serial: Option<String>,

    /// Product ID, e.g. C9300-24P (single mode)
    #[arg(long, required_if_eq("mode", "single"), conflicts_with = "devices_file")]
    pub pid: Option<String>,

    /// Device hostname (single mode)
    #[arg(long, required_if_eq("mode", "single"), conflicts_with = "devices_file")]
    pub name: Option<String>,

    /// YAML file with a `devices:` list (bulk mode)
    #[arg(long, value_name = "PATH", required_if_eq("mode", "bulk"))]
    pub devices_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SitesArgs {
    #[command(subcommand)]
    pub command: SitesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SitesCommand {
    /// Create every site defined in a YAML file, in file order
    Add {
        /// Site definitions file
        #[arg(value_name = "SITES_FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the resolved configuration (password masked)
    Show,

    /// Print the config file path
    Path,

    /// Store the controller password in the system keyring
    SetPassword,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
