// ── PnP device definitions ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::CoreError;

/// How devices are handed to the PnP inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ImportMode {
    /// One device described on the command line.
    Single,
    /// Every device listed in a devices file, in one call.
    Bulk,
}

impl ImportMode {
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        value
            .parse()
            .map_err(|_| CoreError::UnknownImportMode(value.to_owned()))
    }
}

/// A device to pre-register for plug-and-play onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceDefinition {
    pub serial_number: String,
    /// Product ID, e.g. `C9300-24P`.
    pub pid: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PnpDeviceInfo<'a> {
    pub serial_number: &'a str,
    pub pid: &'a str,
    pub name: &'a str,
}

/// Wire shape of one PnP import record.
#[derive(Debug, Serialize)]
pub struct PnpImportRecord<'a> {
    #[serde(rename = "deviceInfo")]
    pub device_info: PnpDeviceInfo<'a>,
}

impl DeviceDefinition {
    pub fn to_record(&self) -> PnpImportRecord<'_> {
        PnpImportRecord {
            device_info: PnpDeviceInfo {
                serial_number: &self.serial_number,
                pid: &self.pid,
                name: &self.name,
            },
        }
    }
}

/// Parse a devices file (`devices: [{serial_number, pid, name}, ...]`).
pub fn parse_devices(contents: &str) -> Result<Vec<DeviceDefinition>, CoreError> {
    let malformed = |message: String| CoreError::MalformedDeviceFile { message };

    let doc: serde_yaml::Value =
        serde_yaml::from_str(contents).map_err(|e| malformed(e.to_string()))?;
    let devices = doc
        .get("devices")
        .ok_or_else(|| malformed("missing top-level `devices` key".into()))?;

    let devices: Vec<DeviceDefinition> =
        serde_yaml::from_value(devices.clone()).map_err(|e| malformed(e.to_string()))?;
    if devices.is_empty() {
        return Err(malformed("`devices` list is empty".into()));
    }
    Ok(devices)
}
