// ── PnP device import workflow ──

use std::path::{Path, PathBuf};

use tracing::info;

use dnac_api::{ApiResponse, DnacClient};

use crate::config::ControllerConfig;
use crate::device::{DeviceDefinition, ImportMode, parse_devices};
use crate::error::CoreError;
use crate::report::Reporter;
use crate::session;

/// Where the device catalog is expected under the base directory.
pub fn catalog_file(base_directory: &Path) -> PathBuf {
    base_directory.join("catalog").join("DeviceImport.csv")
}

/// Performs the actual PnP import calls.
#[allow(async_fn_in_trait)]
pub trait DeviceImporter {
    async fn import_single(
        &self,
        client: &DnacClient,
        device: &DeviceDefinition,
    ) -> Result<ApiResponse, CoreError>;

    async fn import_bulk(
        &self,
        client: &DnacClient,
        devices: &[DeviceDefinition],
    ) -> Result<ApiResponse, CoreError>;
}

/// Imports through the controller's onboarding endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct PnpImporter;

impl DeviceImporter for PnpImporter {
    async fn import_single(
        &self,
        client: &DnacClient,
        device: &DeviceDefinition,
    ) -> Result<ApiResponse, CoreError> {
        let endpoint = dnac_api::resolve("import-device")?;
        Ok(client.call(&endpoint, &device.to_record()).await?)
    }

    async fn import_bulk(
        &self,
        client: &DnacClient,
        devices: &[DeviceDefinition],
    ) -> Result<ApiResponse, CoreError> {
        let endpoint = dnac_api::resolve("import-devices-bulk")?;
        let records: Vec<_> = devices.iter().map(DeviceDefinition::to_record).collect();
        Ok(client.call(&endpoint, &records).await?)
    }
}

/// Validated input for one import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportJob {
    Single(DeviceDefinition),
    Bulk {
        source: PathBuf,
        devices: Vec<DeviceDefinition>,
    },
}

impl ImportJob {
    /// Check that `mode` has the input it needs, reading the devices file
    /// for bulk imports.
    pub fn prepare(
        mode: ImportMode,
        device: Option<DeviceDefinition>,
        devices_file: Option<&Path>,
    ) -> Result<Self, CoreError> {
        match mode {
            ImportMode::Single => device.map(Self::Single).ok_or(CoreError::MissingImportInput {
                mode: "single",
                required: "--serial, --pid and --name",
            }),
            ImportMode::Bulk => {
                let path = devices_file.ok_or(CoreError::MissingImportInput {
                    mode: "bulk",
                    required: "--devices-file",
                })?;
                let contents =
                    std::fs::read_to_string(path).map_err(|source| CoreError::Io {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Ok(Self::Bulk {
                    source: path.to_path_buf(),
                    devices: parse_devices(&contents)?,
                })
            }
        }
    }

    pub fn mode(&self) -> ImportMode {
        match self {
            Self::Single(_) => ImportMode::Single,
            Self::Bulk { .. } => ImportMode::Bulk,
        }
    }
}

/// What a finished import run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceImportReport {
    pub mode: ImportMode,
    pub success: bool,
    pub catalog_file: PathBuf,
}

/// Log in, hand the job to `importer`, then point at the device catalog.
pub async fn import_devices(
    config: &ControllerConfig,
    base_directory: &Path,
    job: &ImportJob,
    importer: &impl DeviceImporter,
    reporter: &mut dyn Reporter,
) -> Result<DeviceImportReport, CoreError> {
    let client = session::connect(config, reporter).await?;

    reporter.divider("Device import");
    let (subject, response) = match job {
        ImportJob::Single(device) => {
            reporter.progress(&format!(
                "Importing device [{}] ({}).....",
                device.name, device.serial_number
            ));
            let response = importer.import_single(&client, device).await?;
            (device.name.clone(), response)
        }
        ImportJob::Bulk { source, devices } => {
            reporter.progress(&format!(
                "Importing {} device(s) from [{}].....",
                devices.len(),
                source.display()
            ));
            let response = importer.import_bulk(&client, devices).await?;
            (source.display().to_string(), response)
        }
    };
    reporter.api_result(&subject, &response);

    let catalog = catalog_file(base_directory);
    reporter.progress(&format!(
        "Looking for device catalog in [{}].....",
        catalog.display()
    ));

    info!(mode = %job.mode(), success = response.success, "device import finished");
    Ok(DeviceImportReport {
        mode: job.mode(),
        success: response.success,
        catalog_file: catalog,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn catalog_lives_under_base_directory() {
        assert_eq!(
            catalog_file(Path::new("/srv/pnp")),
            PathBuf::from("/srv/pnp/catalog/DeviceImport.csv")
        );
    }

    #[test]
    fn single_without_device_is_rejected() {
        let err = ImportJob::prepare(ImportMode::Single, None, None).unwrap_err();
        assert!(
            matches!(err, CoreError::MissingImportInput { mode: "single", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn bulk_without_file_is_rejected() {
        let err = ImportJob::prepare(ImportMode::Bulk, None, None).unwrap_err();
        assert!(
            matches!(err, CoreError::MissingImportInput { mode: "bulk", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn bulk_reads_devices_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "devices:\n  - serial_number: FOC1\n    pid: C9300-24P\n    name: a1").unwrap();

        let job = ImportJob::prepare(ImportMode::Bulk, None, Some(file.path())).unwrap();

        assert_eq!(job.mode(), ImportMode::Bulk);
        match job {
            ImportJob::Bulk { devices, .. } => assert_eq!(devices[0].name, "a1"),
            ImportJob::Single(_) => panic!("expected bulk job"),
        }
    }

    #[test]
    fn bulk_with_missing_file_is_io_error() {
        let err = ImportJob::prepare(
            ImportMode::Bulk,
            None,
            Some(Path::new("/nonexistent/devices.yaml")),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }), "got {err:?}");
    }
}
