//! Product, warning and support information types.

use serde::{Deserialize, Serialize};

use super::common::Download;

/// Version and feature summary of the appliance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInfo {
    pub version_string: String,
    pub os_description: String,
    /// False for beta and release-candidate builds.
    pub final_version: bool,
    pub box_edition: String,
    pub box_name: String,
    pub wifi_available: bool,
    #[serde(rename = "ip6Available")]
    pub ip6_available: bool,
    pub license_set: bool,
    pub password_set: bool,
    pub client_statistics_set: bool,
    pub central_management_set: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningType {
    WarnBetaVersion,
    WarnUpdateFailed,
    WarnConfigurationReverted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(rename = "type")]
    pub warning_type: WarningType,
    /// Whether `ProductInfo.disableWarning` may hide it.
    #[serde(default)]
    pub suppressable: bool,
    #[serde(default)]
    pub property: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsedDevicesCount {
    pub devices: i64,
    pub accounts: i64,
}

/// Support bundle prepared for download.
pub type SupportInfo = Download;
