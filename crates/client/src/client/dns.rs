//! `Dns.*` methods for [`Session`].

use serde::{Deserialize, Serialize};

use crate::client::Session;
use crate::error::Result;
use crate::models::{BulkResult, DnsConfig, DnsHost};

#[derive(Serialize, Deserialize)]
struct ConfigBody<T> {
    config: T,
}

#[derive(Serialize, Deserialize)]
struct HostsBody<T> {
    hosts: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportHostsParams<'a> {
    file_id: &'a str,
    clean: bool,
}

impl Session {
    pub async fn get_dns_config(&mut self) -> Result<DnsConfig> {
        let result: ConfigBody<DnsConfig> = self.call_no_params("Dns.get").await?;
        Ok(result.config)
    }

    pub async fn set_dns_config(&mut self, config: &DnsConfig) -> Result<BulkResult> {
        self.call("Dns.set", &ConfigBody { config }).await
    }

    /// Entries of the local hosts table.
    pub async fn get_dns_hosts(&mut self) -> Result<Vec<DnsHost>> {
        let result: HostsBody<Vec<DnsHost>> = self.call_no_params("Dns.getHosts").await?;
        Ok(result.hosts)
    }

    /// Replace the local hosts table.
    pub async fn set_dns_hosts(&mut self, hosts: &[DnsHost]) -> Result<BulkResult> {
        self.call("Dns.setHosts", &HostsBody { hosts }).await
    }

    /// Import a previously uploaded hosts file. `clean` drops existing entries first.
    pub async fn import_dns_hosts(&mut self, file_id: &str, clean: bool) -> Result<()> {
        self.call_void("Dns.importHosts", &ImportHostsParams { file_id, clean })
            .await
    }

    pub async fn clear_dns_cache(&mut self) -> Result<()> {
        self.call_void_no_params("Dns.clearCache").await
    }
}
