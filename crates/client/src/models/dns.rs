//! DNS forwarder and local hosts table types.

use serde::{Deserialize, Serialize};

use super::common::{IpAddress, KId, Optional};

/// Conditional forwarding rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsForwarder {
    pub enabled: bool,
    /// `network/mask` for reverse lookups, a domain name otherwise.
    pub domain: String,
    /// Semicolon-separated server list; empty means "do not forward".
    pub forwarders: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DnsConfig {
    pub forwarder_enabled: bool,
    pub cache_enabled: bool,
    pub custom_forwarding_enabled: bool,
    pub custom_forwarders: Vec<DnsForwarder>,
    /// Read-only: enabled when the domain controller answers lookups.
    #[serde(rename = "useDomainControler")]
    pub use_domain_controller: Optional<String>,
    pub hosts_enabled: bool,
    pub dhcp_lookup_enabled: bool,
    pub domain_name: String,
}

/// Entry of the local hosts table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsHost {
    pub enabled: bool,
    pub id: KId,
    pub ip: IpAddress,
    /// Whitespace-separated host names.
    pub hosts: String,
    pub description: String,
}
