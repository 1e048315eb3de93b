// dnac-core: Site and PnP device provisioning workflows on top of dnac-api.

pub mod config;
pub mod device;
pub mod device_import;
pub mod error;
pub mod report;
pub mod session;
pub mod site;
pub mod site_import;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ControllerConfig, Credentials, TlsVerification};
pub use device::{DeviceDefinition, ImportMode};
pub use device_import::{
    DeviceImportReport, DeviceImporter, ImportJob, PnpImporter, catalog_file, import_devices,
};
pub use error::CoreError;
pub use report::Reporter;
pub use site::{SiteDefinition, SiteEntry, SitePayload, SiteType, build_payload, parse_sites};
pub use site_import::{SiteOutcome, add_sites};

pub use dnac_api::{ApiResponse, ResponseBody};
