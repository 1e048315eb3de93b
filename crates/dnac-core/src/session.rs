// ── Authenticated session setup ──

use tracing::info;

use dnac_api::{DnacClient, controller_url};

use crate::config::{ControllerConfig, Credentials};
use crate::error::CoreError;
use crate::report::Reporter;

/// Log in and return a client whose calls carry the token.
///
/// The token is owned by the returned client and dropped with it; nothing
/// is cached between runs.
pub async fn connect(
    config: &ControllerConfig,
    reporter: &mut dyn Reporter,
) -> Result<DnacClient, CoreError> {
    let Credentials {
        host,
        username,
        password,
    } = &config.credentials;

    let client = DnacClient::new(controller_url(host)?, &config.transport())?;

    reporter.divider("DNAC login/Token creation");
    reporter.progress(&format!("Logging in to DNAC at [{host}]....."));
    let token = client.login(username, password).await?;
    reporter.success("Token received!");

    reporter.divider("API header management");
    reporter.progress("Attaching authentication token to API header.....");
    let client = client.with_token(&token)?;
    reporter.success("Authentication token successfully attached to API header!");

    info!(%host, "authenticated");
    Ok(client)
}
