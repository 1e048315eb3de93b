// ── Site hierarchy definitions and payloads ──
//
// A sites file declares entries of the form `{<site_name>: {type, ...}}`.
// Each entry is decoded loosely into `RawSite`, checked into a typed
// `SiteDefinition`, and mapped to the `SitePayload` the site-creation
// endpoint expects.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

use crate::error::CoreError;

/// Kind of node in the area → building → floor hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SiteType {
    Area,
    Building,
    Floor,
}

/// Site fields exactly as written in the file. Which ones are required
/// depends on `type`.
///
/// Text fields take any string or numeric scalar, so `name: 1` is the
/// floor named "1".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSite {
    #[serde(rename = "type", default, deserialize_with = "scalar_text")]
    pub site_type: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub parent: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub area_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub area_parent: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub address: Option<String>,
}

fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(text)) => Ok(Some(text)),
        Some(serde_yaml::Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, found {other:?}"
        ))),
    }
}

/// One `- <site_name>: {...}` entry of the `sites` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, RawSite>")]
pub struct SiteEntry {
    pub site_name: String,
    pub fields: RawSite,
}

impl TryFrom<BTreeMap<String, RawSite>> for SiteEntry {
    type Error = String;

    fn try_from(map: BTreeMap<String, RawSite>) -> Result<Self, Self::Error> {
        let count = map.len();
        let mut entries = map.into_iter();
        match (entries.next(), count) {
            (Some((site_name, fields)), 1) => Ok(Self { site_name, fields }),
            _ => Err(format!(
                "each site entry must have exactly one top-level key, found {count}"
            )),
        }
    }
}

/// Street location of a building.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// A validated site declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteDefinition {
    Area {
        name: String,
        parent: String,
    },
    Building {
        name: String,
        location: Location,
        area_name: String,
        area_parent: String,
    },
    /// `parent` is the building the floor belongs to.
    Floor {
        name: String,
        parent: String,
        location: Location,
        area_name: String,
        area_parent: String,
    },
}

impl SiteDefinition {
    pub fn site_type(&self) -> SiteType {
        match self {
            Self::Area { .. } => SiteType::Area,
            Self::Building { .. } => SiteType::Building,
            Self::Floor { .. } => SiteType::Floor,
        }
    }
}

impl TryFrom<&SiteEntry> for SiteDefinition {
    type Error = CoreError;

    fn try_from(entry: &SiteEntry) -> Result<Self, Self::Error> {
        let site = entry.site_name.as_str();
        let raw = &entry.fields;

        let type_str = required(site, "type", raw.site_type.as_ref())?;
        let site_type: SiteType =
            type_str
                .parse()
                .map_err(|_| CoreError::UnknownSiteType {
                    site: site.to_owned(),
                    site_type: type_str,
                })?;

        let name = required(site, "name", raw.name.as_ref())?;

        Ok(match site_type {
            SiteType::Area => Self::Area {
                name,
                parent: required(site, "parent", raw.parent.as_ref())?,
            },
            SiteType::Building => Self::Building {
                name,
                location: location(site, raw)?,
                area_name: required(site, "area_name", raw.area_name.as_ref())?,
                area_parent: required(site, "area_parent", raw.area_parent.as_ref())?,
            },
            SiteType::Floor => Self::Floor {
                name,
                parent: required(site, "parent", raw.parent.as_ref())?,
                location: location(site, raw)?,
                area_name: required(site, "area_name", raw.area_name.as_ref())?,
                area_parent: required(site, "area_parent", raw.area_parent.as_ref())?,
            },
        })
    }
}

fn required<T: Clone>(site: &str, field: &'static str, value: Option<&T>) -> Result<T, CoreError> {
    value.cloned().ok_or_else(|| CoreError::MissingField {
        site: site.to_owned(),
        field,
    })
}

fn location(site: &str, raw: &RawSite) -> Result<Location, CoreError> {
    Ok(Location {
        latitude: required(site, "latitude", raw.latitude.as_ref())?,
        longitude: required(site, "longitude", raw.longitude.as_ref())?,
        address: required(site, "address", raw.address.as_ref())?,
    })
}

// ── Payload ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaBlock {
    pub name: String,
    pub parent_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingBlock {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorBlock {
    pub name: String,
    pub parent_name: String,
}

/// The `site` object; its shape follows the site type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SiteBody {
    Area {
        area: AreaBlock,
    },
    Building {
        area: AreaBlock,
        building: BuildingBlock,
    },
    Floor {
        area: AreaBlock,
        building: BuildingBlock,
        floor: FloorBlock,
    },
}

/// Request body for the site-creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitePayload {
    #[serde(rename = "type")]
    pub site_type: SiteType,
    pub site: SiteBody,
}

impl SitePayload {
    /// Pretty JSON rendering, as sent on the wire.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Internal(format!("site payload serialization: {e}")))
    }
}

impl From<&SiteDefinition> for SitePayload {
    fn from(definition: &SiteDefinition) -> Self {
        let building = |name: &str, location: &Location| BuildingBlock {
            name: name.to_owned(),
            latitude: location.latitude,
            longitude: location.longitude,
            address: location.address.clone(),
        };
        let area = |name: &str, parent: &str| AreaBlock {
            name: name.to_owned(),
            parent_name: parent.to_owned(),
        };

        let site = match definition {
            SiteDefinition::Area { name, parent } => SiteBody::Area {
                area: area(name, parent),
            },
            SiteDefinition::Building {
                name,
                location,
                area_name,
                area_parent,
            } => SiteBody::Building {
                area: area(area_name, area_parent),
                building: building(name, location),
            },
            // Building and floor both carry the declared `name`.
            SiteDefinition::Floor {
                name,
                parent,
                location,
                area_name,
                area_parent,
            } => SiteBody::Floor {
                area: area(area_name, area_parent),
                building: building(name, location),
                floor: FloorBlock {
                    name: name.clone(),
                    parent_name: parent.clone(),
                },
            },
        };

        Self {
            site_type: definition.site_type(),
            site,
        }
    }
}

/// Build the site-creation payload for one file entry.
pub fn build_payload(entry: &SiteEntry) -> Result<SitePayload, CoreError> {
    let definition = SiteDefinition::try_from(entry)?;
    Ok(SitePayload::from(&definition))
}

// ── Sites file ──────────────────────────────────────────────────────

/// Parse a sites file, keeping entry order.
///
/// Decode errors name the offending entry by position and, when it has
/// one, by site name.
pub fn parse_sites(contents: &str) -> Result<Vec<SiteEntry>, CoreError> {
    let malformed = |message: String| CoreError::MalformedSiteConfig { message };

    let doc: serde_yaml::Value =
        serde_yaml::from_str(contents).map_err(|e| malformed(e.to_string()))?;
    let sites = doc
        .get("sites")
        .ok_or_else(|| malformed("missing top-level `sites` key".into()))?;
    let sites: Vec<serde_yaml::Value> =
        serde_yaml::from_value(sites.clone()).map_err(|e| malformed(format!("sites: {e}")))?;

    sites
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let label = entry_label(index, &value);
            serde_yaml::from_value(value).map_err(|e| malformed(format!("{label}: {e}")))
        })
        .collect()
}

fn entry_label(index: usize, value: &serde_yaml::Value) -> String {
    let name = value
        .as_mapping()
        .filter(|m| m.len() == 1)
        .and_then(|m| m.keys().next())
        .and_then(serde_yaml::Value::as_str);
    match name {
        Some(name) => format!("sites[{index}] ({name})"),
        None => format!("sites[{index}]"),
    }
}
