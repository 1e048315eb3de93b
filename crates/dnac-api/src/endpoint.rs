// API URL resolution
//
// Maps symbolic operation names ("add-site", "import-device", ...) to the
// HTTP method, path and accepted query parameters of the controller endpoint.

use std::str::FromStr;

use reqwest::Method;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::Error;

/// A controller operation this client knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ApiOperation {
    /// Exchange Basic credentials for a token.
    AuthToken,
    /// Create an area, building or floor.
    AddSite,
    /// Add one device to the PnP inventory.
    ImportDevice,
    /// Add a batch of devices to the PnP inventory.
    ImportDevicesBulk,
}

/// Resolved `(method, path, params)` for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub operation: ApiOperation,
    pub method: Method,
    /// Absolute path on the controller, joined onto the base URL.
    pub path: &'static str,
    /// Query parameters the endpoint accepts.
    pub params: &'static [&'static str],
}

const NO_PARAMS: &[&str] = &[];

impl ApiOperation {
    pub fn endpoint(self) -> Endpoint {
        let (method, path, params) = match self {
            Self::AuthToken => (Method::POST, "/dna/system/api/v1/auth/token", NO_PARAMS),
            Self::AddSite => (Method::POST, "/dna/intent/api/v1/site", NO_PARAMS),
            Self::ImportDevice => (
                Method::POST,
                "/dna/intent/api/v1/onboarding/pnp-device",
                NO_PARAMS,
            ),
            Self::ImportDevicesBulk => (
                Method::POST,
                "/dna/intent/api/v1/onboarding/pnp-device/import",
                NO_PARAMS,
            ),
        };
        Endpoint {
            operation: self,
            method,
            path,
            params,
        }
    }
}

/// Resolve an operation by its symbolic name.
pub fn resolve(name: &str) -> Result<Endpoint, Error> {
    ApiOperation::from_str(name)
        .map(ApiOperation::endpoint)
        .map_err(|_| Error::UnknownOperation(name.to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn add_site_resolves_to_site_post() {
        let endpoint = resolve("add-site").unwrap();
        assert_eq!(endpoint.operation, ApiOperation::AddSite);
        assert_eq!(endpoint.method, Method::POST);
        assert_eq!(endpoint.path, "/dna/intent/api/v1/site");
        assert!(endpoint.params.is_empty());
    }

    #[test]
    fn bulk_import_name_is_kebab_case() {
        let endpoint = resolve("import-devices-bulk").unwrap();
        assert_eq!(
            endpoint.path,
            "/dna/intent/api/v1/onboarding/pnp-device/import"
        );
    }

    #[test]
    fn every_operation_round_trips_through_its_name() {
        for op in ApiOperation::iter() {
            assert_eq!(resolve(&op.to_string()).unwrap().operation, op);
        }
    }

    #[test]
    fn unknown_operation_is_rejected() {
        let err = resolve("delete-everything").unwrap_err();
        assert!(
            matches!(err, Error::UnknownOperation(ref name) if name == "delete-everything"),
            "got {err:?}"
        );
    }
}
