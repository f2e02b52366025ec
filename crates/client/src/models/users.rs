//! Local user account types.

use serde::{Deserialize, Serialize};

use super::common::{KId, Optional, OptionalEntity, OptionalStringList};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthType {
    #[default]
    Internal,
    KerberosNt,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialsConfig {
    pub user_name: String,
    /// Write-only; the appliance never returns the stored password.
    pub password: String,
    pub password_changed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRights {
    pub read_config: bool,
    pub write_config: bool,
    pub override_www_filter: bool,
    pub unlock_rule: bool,
    pub dial_ras_connection: bool,
    pub connect_vpn: bool,
    pub connect_ssl_vpn: bool,
    pub use_p2p: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteUnits {
    #[default]
    Bytes,
    KiloBytes,
    MegaBytes,
    GigaBytes,
    TeraBytes,
    PetaBytes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ByteValueWithUnits {
    pub value: i64,
    pub units: ByteUnits,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotaType {
    #[default]
    QuotaBoth,
    QuotaDownload,
    QuotaUpload,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaInterval {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub quota_type: QuotaType,
    pub limit: ByteValueWithUnits,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quota {
    pub daily: QuotaInterval,
    pub weekly: QuotaInterval,
    pub monthly: QuotaInterval,
    pub block_traffic: bool,
    pub notify_user: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WwwFilter {
    pub java_applet: bool,
    pub embed_object: bool,
    pub script: bool,
    pub popup: bool,
    pub referer: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub rights: UserRights,
    pub quota: Quota,
    pub www_filter: WwwFilter,
    pub language: String,
}

/// Automatic login by MAC address, IP address or address group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoLogin {
    pub mac_addresses: OptionalStringList,
    pub addresses: OptionalStringList,
    pub address_group: OptionalEntity,
}

/// User or group reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserReference {
    pub id: KId,
    pub name: String,
    pub is_group: bool,
    pub domain_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: KId,
    pub credentials: CredentialsConfig,
    pub full_name: String,
    pub description: String,
    pub email: String,
    pub auth_type: AuthType,
    pub local_enabled: bool,
    pub ad_enabled: bool,
    pub use_template: bool,
    pub data: UserData,
    pub auto_login: AutoLogin,
    pub vpn_address: Optional<String>,
    pub groups: Vec<UserReference>,
    pub conflict_with_local: bool,
    pub totp_configured: bool,
}

impl User {
    pub fn user_name(&self) -> &str {
        &self.credentials.user_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_user_deserialization() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "credentials": {"userName": "jdoe"},
            "fullName": "Jane Doe",
            "data": {"rights": {"readConfig": true}},
            "groups": [{"id": "g1", "name": "staff", "isGroup": true}]
        }))
        .unwrap();
        assert_eq!(user.user_name(), "jdoe");
        assert!(user.data.rights.read_config);
        assert!(!user.data.rights.write_config);
        assert_eq!(user.groups[0].name, "staff");
        assert_eq!(user.auth_type, AuthType::Internal);
    }

    #[test]
    fn test_quota_interval_wire_names() {
        let q = QuotaInterval {
            enabled: true,
            quota_type: QuotaType::QuotaDownload,
            limit: ByteValueWithUnits {
                value: 10,
                units: ByteUnits::GigaBytes,
            },
        };
        assert_eq!(
            serde_json::to_value(q).unwrap(),
            json!({"enabled": true, "type": "QuotaDownload", "limit": {"value": 10, "units": "GigaBytes"}})
        );
    }
}
