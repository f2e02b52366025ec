//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format resources as tab-separated tables with a header row.
//! - Print key/value blocks for single objects.
//!
//! Does NOT handle:
//! - Column width alignment (left to the terminal's tab stops).

use anyhow::Result;
use control_client::models::{
    DhcpLease, DhcpMode, DhcpScope, DnsConfig, DnsHost, LogItem, LogViewport, User,
};
use serde_json::Value;

use crate::formatters::{Formatter, InfoOutput};

const MISSING_VALUE: &str = "N/A";

/// Table formatter.
pub struct TableFormatter;

fn or_missing(s: &str) -> &str {
    if s.is_empty() { MISSING_VALUE } else { s }
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

/// Render a JSON scalar without quotes; nested values as compact JSON.
fn format_json_value(value: &Value) -> String {
    match value {
        Value::Null => MISSING_VALUE.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn format_uptime(seconds: i64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else {
        format!("{hours}h {minutes}m")
    }
}

impl Formatter for TableFormatter {
    fn format_info(&self, info: &InfoOutput) -> Result<String> {
        let p = &info.product;
        let mut output = String::new();
        output.push_str(&format!("Hostname:\t{}\n", or_missing(&info.hostname)));
        output.push_str(&format!("Box Name:\t{}\n", or_missing(&p.box_name)));
        output.push_str(&format!("Version:\t{}\n", or_missing(&p.version_string)));
        output.push_str(&format!("Edition:\t{}\n", or_missing(&p.box_edition)));
        output.push_str(&format!("OS:\t{}\n", or_missing(&p.os_description)));
        output.push_str(&format!("Uptime:\t{}\n", format_uptime(info.uptime_seconds)));
        output.push_str(&format!("License Set:\t{}\n", yes_no(p.license_set)));
        output.push_str(&format!("IPv6:\t{}\n", yes_no(p.ip6_available)));
        output.push_str(&format!("Wi-Fi:\t{}\n", yes_no(p.wifi_available)));
        output.push_str(&format!(
            "Central Management:\t{}\n",
            yes_no(p.central_management_set)
        ));
        Ok(output)
    }

    fn format_users(&self, users: &[User]) -> Result<String> {
        if users.is_empty() {
            return Ok("No users found.".to_string());
        }

        let mut output = String::from("Username\tFull Name\tEmail\tAuth\tEnabled\tGroups\n");
        for user in users {
            let groups: Vec<&str> = user.groups.iter().map(|g| g.name.as_str()).collect();
            output.push_str(&format!(
                "{}\t{}\t{}\t{:?}\t{}\t{}\n",
                user.user_name(),
                or_missing(&user.full_name),
                or_missing(&user.email),
                user.auth_type,
                yes_no(user.local_enabled),
                or_missing(&groups.join(","))
            ));
        }
        Ok(output)
    }

    fn format_dhcp_scopes(&self, scopes: &[DhcpScope]) -> Result<String> {
        if scopes.is_empty() {
            return Ok("No DHCP scopes found.".to_string());
        }

        let mut output = String::from("ID\tName\tEnabled\tRange\tMask\tExclusions\tStatus\n");
        for scope in scopes {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}-{}\t{}\t{}\t{:?}\n",
                scope.id,
                scope.name,
                yes_no(scope.enabled),
                scope.ip_start,
                scope.ip_end,
                scope.ip_mask,
                scope.exclusions.len(),
                scope.status
            ));
        }
        Ok(output)
    }

    fn format_dhcp_leases(&self, leases: &[DhcpLease]) -> Result<String> {
        if leases.is_empty() {
            return Ok("No DHCP leases found.".to_string());
        }

        let mut output = String::from("IP Address\tMAC Address\tHost Name\tType\tScope\tExpires\n");
        for lease in leases {
            let expires = if lease.leased {
                let d = &lease.expiration_date;
                let t = &lease.expiration_time;
                format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}",
                    d.year, d.month, d.day, t.hour, t.min
                )
            } else {
                MISSING_VALUE.to_string()
            };
            output.push_str(&format!(
                "{}\t{}\t{}\t{:?}\t{}\t{}\n",
                lease.ip_address,
                or_missing(&lease.mac_address),
                or_missing(&lease.host_name),
                lease.lease_type,
                lease.scope_id,
                expires
            ));
        }
        Ok(output)
    }

    fn format_dhcp_mode(&self, mode: &DhcpMode) -> Result<String> {
        Ok(format!("Mode:\t{:?}\n", mode.mode_type))
    }

    fn format_dns_config(&self, config: &DnsConfig) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Domain:\t{}\n", or_missing(&config.domain_name)));
        output.push_str(&format!("Forwarder:\t{}\n", yes_no(config.forwarder_enabled)));
        output.push_str(&format!("Cache:\t{}\n", yes_no(config.cache_enabled)));
        output.push_str(&format!("Hosts Table:\t{}\n", yes_no(config.hosts_enabled)));
        output.push_str(&format!("DHCP Lookup:\t{}\n", yes_no(config.dhcp_lookup_enabled)));
        output.push_str(&format!(
            "Domain Controller:\t{}\n",
            config
                .use_domain_controller
                .as_option()
                .map(String::as_str)
                .unwrap_or(MISSING_VALUE)
        ));
        if config.custom_forwarding_enabled && !config.custom_forwarders.is_empty() {
            output.push_str("Custom Forwarding:\n");
            for rule in &config.custom_forwarders {
                output.push_str(&format!(
                    "  {}\t{}\t{}\n",
                    rule.domain,
                    rule.forwarders,
                    if rule.enabled { "" } else { "(disabled)" }
                ));
            }
        }
        Ok(output)
    }

    fn format_dns_hosts(&self, hosts: &[DnsHost]) -> Result<String> {
        if hosts.is_empty() {
            return Ok("No DNS hosts found.".to_string());
        }

        let mut output = String::from("IP Address\tHost Names\tEnabled\tDescription\n");
        for host in hosts {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                host.ip,
                host.hosts,
                yes_no(host.enabled),
                or_missing(&host.description)
            ));
        }
        Ok(output)
    }

    fn format_log(&self, viewport: &LogViewport) -> Result<String> {
        if viewport.viewport.is_empty() {
            return Ok(format!(
                "No log lines in range ({} lines total).",
                viewport.total_items
            ));
        }

        let mut output = String::new();
        for row in &viewport.viewport {
            output.push_str(&row.content);
            output.push('\n');
        }
        Ok(output)
    }

    fn format_log_set(&self, logs: &[LogItem]) -> Result<String> {
        if logs.is_empty() {
            return Ok("No logs found.".to_string());
        }

        let mut output = String::from("Log\tHas Messages\n");
        for log in logs {
            output.push_str(&format!("{}\t{}\n", log.log_name, yes_no(log.has_messages)));
        }
        Ok(output)
    }

    fn format_value(&self, value: &Value) -> Result<String> {
        match value {
            Value::Object(obj) if obj.is_empty() => Ok("OK".to_string()),
            Value::Object(obj) => {
                let mut output = String::new();
                for (key, v) in obj {
                    output.push_str(&format!("{}:\t{}\n", key, format_json_value(v)));
                }
                Ok(output)
            }
            Value::Array(items) if items.is_empty() => Ok("No results found.".to_string()),
            Value::Array(items) => {
                let mut keys: Vec<&String> = Vec::new();
                for item in items {
                    if let Some(obj) = item.as_object() {
                        for key in obj.keys() {
                            if !keys.contains(&key) {
                                keys.push(key);
                            }
                        }
                    }
                }
                if keys.is_empty() {
                    let rows: Vec<String> = items.iter().map(format_json_value).collect();
                    return Ok(rows.join("\n"));
                }

                let header: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
                let mut output = header.join("\t");
                output.push('\n');
                for item in items {
                    let row: Vec<String> = keys
                        .iter()
                        .map(|k| item.get(k.as_str()).map(format_json_value).unwrap_or_default())
                        .collect();
                    output.push_str(&row.join("\t"));
                    output.push('\n');
                }
                Ok(output)
            }
            scalar => Ok(format_json_value(scalar)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use control_client::models::{DhcpModeType, LogRow, ProductInfo};
    use serde_json::json;

    #[test]
    fn test_empty_users_message() {
        assert_eq!(TableFormatter.format_users(&[]).unwrap(), "No users found.");
    }

    #[test]
    fn test_uptime_rendering() {
        assert_eq!(format_uptime(59), "0h 0m");
        assert_eq!(format_uptime(3_660), "1h 1m");
        assert_eq!(format_uptime(90_061), "1d 1h 1m");
    }

    #[test]
    fn test_info_block() {
        let info = InfoOutput {
            product: ProductInfo {
                version_string: "9.4.5 build 8573".into(),
                box_name: "fw-branch-01".into(),
                license_set: true,
                ..Default::default()
            },
            hostname: "fw".into(),
            uptime_seconds: 90_061,
        };
        let output = TableFormatter.format_info(&info).unwrap();
        assert!(output.contains("Version:\t9.4.5 build 8573\n"));
        assert!(output.contains("Uptime:\t1d 1h 1m\n"));
        assert!(output.contains("OS:\tN/A\n"));
        assert!(output.contains("License Set:\tyes\n"));
    }

    #[test]
    fn test_dhcp_mode() {
        let mode = DhcpMode {
            mode_type: DhcpModeType::DhcpManual,
        };
        assert_eq!(TableFormatter.format_dhcp_mode(&mode).unwrap(), "Mode:\tDhcpManual\n");
    }

    #[test]
    fn test_log_lines_printed_verbatim() {
        let viewport = LogViewport {
            viewport: vec![
                LogRow {
                    content: "line one".into(),
                    highlight: String::new(),
                },
                LogRow {
                    content: "line two".into(),
                    highlight: "FF0000".into(),
                },
            ],
            total_items: 2,
        };
        assert_eq!(
            TableFormatter.format_log(&viewport).unwrap(),
            "line one\nline two\n"
        );
    }

    #[test]
    fn test_value_object_and_array() {
        let output = TableFormatter
            .format_value(&json!({"uptime": 42, "tags": ["a"]}))
            .unwrap();
        assert!(output.contains("uptime:\t42\n"));
        assert!(output.contains("tags:\t[\"a\"]\n"));

        let output = TableFormatter
            .format_value(&json!([{"id": "1", "name": "LAN"}, {"id": "2"}]))
            .unwrap();
        assert_eq!(output, "id\tname\n1\tLAN\n2\t\n");

        assert_eq!(TableFormatter.format_value(&json!({})).unwrap(), "OK");
        assert_eq!(TableFormatter.format_value(&json!("x")).unwrap(), "x");
    }
}
