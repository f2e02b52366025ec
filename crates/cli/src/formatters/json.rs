//! JSON formatter implementation.
//!
//! Every resource is printed as pretty JSON with the appliance's camelCase field names.

use anyhow::Result;
use control_client::models::{
    DhcpLease, DhcpMode, DhcpScope, DnsConfig, DnsHost, LogItem, LogViewport, User,
};

use crate::formatters::{Formatter, InfoOutput};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_info(&self, info: &InfoOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(info)?)
    }

    fn format_users(&self, users: &[User]) -> Result<String> {
        Ok(serde_json::to_string_pretty(users)?)
    }

    fn format_dhcp_scopes(&self, scopes: &[DhcpScope]) -> Result<String> {
        Ok(serde_json::to_string_pretty(scopes)?)
    }

    fn format_dhcp_leases(&self, leases: &[DhcpLease]) -> Result<String> {
        Ok(serde_json::to_string_pretty(leases)?)
    }

    fn format_dhcp_mode(&self, mode: &DhcpMode) -> Result<String> {
        Ok(serde_json::to_string_pretty(mode)?)
    }

    fn format_dns_config(&self, config: &DnsConfig) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }

    fn format_dns_hosts(&self, hosts: &[DnsHost]) -> Result<String> {
        Ok(serde_json::to_string_pretty(hosts)?)
    }

    fn format_log(&self, viewport: &LogViewport) -> Result<String> {
        Ok(serde_json::to_string_pretty(viewport)?)
    }

    fn format_log_set(&self, logs: &[LogItem]) -> Result<String> {
        Ok(serde_json::to_string_pretty(logs)?)
    }

    fn format_value(&self, value: &serde_json::Value) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_valid_json() {
        let output = JsonFormatter.format_users(&[]).unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_wire_names_preserved() {
        let host = DnsHost {
            enabled: true,
            ip: "192.168.1.5".into(),
            hosts: "nas".into(),
            ..Default::default()
        };
        let output = JsonFormatter.format_dns_hosts(&[host]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["ip"], "192.168.1.5");
        assert_eq!(value[0]["enabled"], true);
    }
}
