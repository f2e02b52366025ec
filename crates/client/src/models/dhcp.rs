//! DHCP scopes, leases, reservations and option types.

use serde::{Deserialize, Serialize};

use super::common::{Date, IpAddress, KId, StoreStatus, Time};

/// Address range inside a scope that is never leased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DhcpExclusion {
    pub description: String,
    pub ip_start: IpAddress,
    pub ip_end: IpAddress,
}

/// Value encoding of a DHCP option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DhcpOptionType {
    DhcpBool,
    DhcpInt8,
    DhcpInt16,
    DhcpInt32,
    DhcpIpAddr,
    #[default]
    DhcpString,
    DhcpHex,
    DhcpTimeSigned,
    DhcpTimeUnsigned,
    DhcpInt8List,
    DhcpInt16List,
    DhcpInt32List,
    DhcpIpAddrList,
    DhcpIpPairList,
    DhcpIpMaskList,
    DhcpIpMaskIpList,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DhcpOption {
    #[serde(rename = "type")]
    pub option_type: DhcpOptionType,
    pub option_id: i64,
    pub name: String,
    /// Textual value for scalar option types.
    pub value: String,
    /// Address tuples for the pair/mask list option types.
    pub ip_list_list: Vec<Vec<String>>,
}

/// Address pool served on one network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DhcpScope {
    pub id: KId,
    pub status: StoreStatus,
    pub enabled: bool,
    pub name: String,
    pub ip_start: IpAddress,
    pub ip_end: IpAddress,
    pub ip_mask: IpAddress,
    pub exclusions: Vec<DhcpExclusion>,
    pub options: Vec<DhcpOption>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DhcpLeaseType {
    DhcpTypeReservation,
    #[default]
    DhcpTypeLease,
}

/// Active lease or static reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DhcpLease {
    pub id: KId,
    pub lease_id: KId,
    pub scope_id: KId,
    pub status: StoreStatus,
    #[serde(rename = "type")]
    pub lease_type: DhcpLeaseType,
    /// True when a reservation is currently leased.
    pub leased: bool,
    pub is_ras: bool,
    pub card_manufacturer: String,
    pub ip_address: IpAddress,
    pub name: String,
    pub mac_defined: bool,
    pub mac_address: String,
    pub host_name: String,
    pub user_name: String,
    pub expiration_date: Date,
    pub expiration_time: Time,
    pub request_date: Date,
    pub request_time: Time,
    pub options: Vec<DhcpOption>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DhcpModeType {
    #[default]
    DhcpAutomatic,
    DhcpManual,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DhcpMode {
    #[serde(rename = "type")]
    pub mode_type: DhcpModeType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DhcpConfig {
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lease_deserialization() {
        let lease: DhcpLease = serde_json::from_value(json!({
            "id": "l1",
            "scopeId": "s1",
            "status": "StoreStatusClean",
            "type": "DhcpTypeReservation",
            "ipAddress": "192.168.1.20",
            "macAddress": "00-11-22-33-44-55",
            "expirationDate": {"year": 2026, "month": 9, "day": 15},
            "expirationTime": {"hour": 10, "min": 30}
        }))
        .unwrap();
        assert_eq!(lease.lease_type, DhcpLeaseType::DhcpTypeReservation);
        assert_eq!(lease.scope_id, "s1");
        assert_eq!(lease.expiration_time.min, 30);
        assert!(lease.options.is_empty());
    }

    #[test]
    fn test_mode_wire_shape() {
        let mode = DhcpMode {
            mode_type: DhcpModeType::DhcpManual,
        };
        assert_eq!(serde_json::to_value(mode).unwrap(), json!({"type": "DhcpManual"}));
    }

    #[test]
    fn test_unknown_option_type_is_rejected() {
        let result = serde_json::from_value::<DhcpOption>(json!({"type": "DhcpFloat"}));
        assert!(result.is_err());
    }
}
