// ── Site import workflow ──
//
// Read a sites file, log in once, then create each site in file order.
// A rejected site is reported and the run moves on to the next one. An
// entry that cannot be turned into a payload ends the run where it stands.

use std::path::Path;

use tracing::{debug, info};

use dnac_api::DnacClient;

use crate::config::ControllerConfig;
use crate::error::CoreError;
use crate::report::Reporter;
use crate::session;
use crate::site::{SiteEntry, build_payload, parse_sites};

/// Result of creating one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOutcome {
    pub site_name: String,
    pub success: bool,
    pub status: u16,
}

/// Create every site declared in `site_file`.
///
/// The file is parsed before logging in. Payloads are built one entry at a
/// time, so sites ahead of a bad definition have already been sent when
/// it fails.
pub async fn add_sites(
    config: &ControllerConfig,
    site_file: &Path,
    reporter: &mut dyn Reporter,
) -> Result<Vec<SiteOutcome>, CoreError> {
    debug!(path = %site_file.display(), "reading site definitions");
    let contents = std::fs::read_to_string(site_file).map_err(|source| CoreError::Io {
        path: site_file.to_path_buf(),
        source,
    })?;

    let entries = parse_sites(&contents)?;

    let client = session::connect(config, reporter).await?;
    create_sites(&client, &entries, reporter).await
}

/// Create sites one at a time, in order.
pub async fn create_sites(
    client: &DnacClient,
    entries: &[SiteEntry],
    reporter: &mut dyn Reporter,
) -> Result<Vec<SiteOutcome>, CoreError> {
    let endpoint = dnac_api::resolve("add-site")?;
    reporter.divider("Site creation");

    let mut outcomes = Vec::with_capacity(entries.len());
    for entry in entries {
        let site_name = &entry.site_name;
        let payload = build_payload(entry)?;
        debug!(site = %site_name, payload = %payload.to_json()?, "creating site");
        reporter.progress(&format!(
            "Creating {} [{site_name}].....",
            payload.site_type
        ));

        let response = client.call(&endpoint, &payload).await?;
        reporter.api_result(site_name, &response);

        outcomes.push(SiteOutcome {
            site_name: site_name.clone(),
            success: response.success,
            status: response.status,
        });
    }

    let failed = outcomes.iter().filter(|o| !o.success).count();
    info!(total = outcomes.len(), failed, "site import finished");
    Ok(outcomes)
}
