//! `Dhcp.*` methods for [`Session`].
//!
//! # What this module handles:
//! - Scopes: listing, bulk create/set/remove, interface templates
//! - Leases and reservations: listing, bulk create/set/remove, declined leases
//! - Server mode, on/off switch and option catalogue
//! - Applying or resetting staged changes
//!
//! # Invariants
//! - Listing queries are sent with a zero `limit` replaced by `-1`

use serde::{Deserialize, Serialize};

use crate::client::Session;
use crate::error::Result;
use crate::models::{
    BulkResult, CreateResults, DhcpConfig, DhcpLease, DhcpMode, DhcpOption, DhcpScope, KId,
    ListPage, SearchQuery,
};

#[derive(Serialize)]
struct QueryParams {
    query: SearchQuery,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeaseQueryParams<'a> {
    query: SearchQuery,
    scope_ids: &'a [KId],
}

#[derive(Serialize)]
struct ScopesParams<'a> {
    scopes: &'a [DhcpScope],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScopeIdsParams<'a> {
    scope_ids: &'a [KId],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetScopesParams<'a> {
    scope_ids: &'a [KId],
    details: &'a DhcpScope,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InterfaceParams<'a> {
    iface_id: &'a str,
}

#[derive(Deserialize)]
struct DetailsResult {
    details: DhcpScope,
}

#[derive(Serialize)]
struct LeasesParams<'a> {
    leases: &'a [DhcpLease],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeaseIdsParams<'a> {
    lease_ids: &'a [KId],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetLeasesParams<'a> {
    lease_ids: &'a [KId],
    details: &'a DhcpLease,
}

#[derive(Serialize, Deserialize)]
struct ModeBody {
    mode: DhcpMode,
}

#[derive(Serialize, Deserialize)]
struct ConfigBody {
    config: DhcpConfig,
}

#[derive(Deserialize)]
struct OptionsResult {
    options: Vec<DhcpOption>,
}

#[derive(Deserialize)]
struct CountResult {
    count: i64,
}

impl Session {
    /// List scopes matching `query`.
    pub async fn get_dhcp_scopes(&mut self, query: &SearchQuery) -> Result<ListPage<DhcpScope>> {
        let params = QueryParams {
            query: query.normalized(),
        };
        self.call("Dhcp.get", &params).await
    }

    /// Stage new scopes. Ids in the result are temporary until [`Self::apply_dhcp`].
    pub async fn create_dhcp_scopes(&mut self, scopes: &[DhcpScope]) -> Result<CreateResults> {
        self.call("Dhcp.create", &ScopesParams { scopes }).await
    }

    /// Apply `details` to every scope in `scope_ids`.
    pub async fn set_dhcp_scopes(
        &mut self,
        scope_ids: &[KId],
        details: &DhcpScope,
    ) -> Result<BulkResult> {
        self.call("Dhcp.set", &SetScopesParams { scope_ids, details })
            .await
    }

    pub async fn remove_dhcp_scopes(&mut self, scope_ids: &[KId]) -> Result<BulkResult> {
        self.call("Dhcp.remove", &ScopeIdsParams { scope_ids }).await
    }

    /// Scope pre-filled from the addressing of interface `iface_id`.
    pub async fn get_dhcp_interface_template(&mut self, iface_id: &str) -> Result<DhcpScope> {
        let result: DetailsResult = self
            .call("Dhcp.getInterfaceTemplate", &InterfaceParams { iface_id })
            .await?;
        Ok(result.details)
    }

    /// List leases and reservations of `scope_ids` matching `query`.
    pub async fn get_dhcp_leases(
        &mut self,
        query: &SearchQuery,
        scope_ids: &[KId],
    ) -> Result<ListPage<DhcpLease>> {
        let params = LeaseQueryParams {
            query: query.normalized(),
            scope_ids,
        };
        self.call("Dhcp.getLeases", &params).await
    }

    /// Stage new reservations.
    pub async fn create_dhcp_leases(&mut self, leases: &[DhcpLease]) -> Result<CreateResults> {
        self.call("Dhcp.createLeases", &LeasesParams { leases }).await
    }

    pub async fn set_dhcp_leases(
        &mut self,
        lease_ids: &[KId],
        details: &DhcpLease,
    ) -> Result<BulkResult> {
        self.call("Dhcp.setLeases", &SetLeasesParams { lease_ids, details })
            .await
    }

    pub async fn remove_dhcp_leases(&mut self, lease_ids: &[KId]) -> Result<BulkResult> {
        self.call("Dhcp.removeLeases", &LeaseIdsParams { lease_ids })
            .await
    }

    pub async fn get_dhcp_mode(&mut self) -> Result<DhcpMode> {
        let result: ModeBody = self.call_no_params("Dhcp.getMode").await?;
        Ok(result.mode)
    }

    pub async fn set_dhcp_mode(&mut self, mode: DhcpMode) -> Result<()> {
        self.call_void("Dhcp.setMode", &ModeBody { mode }).await
    }

    pub async fn get_dhcp_config(&mut self) -> Result<DhcpConfig> {
        let result: ConfigBody = self.call_no_params("Dhcp.getConfig").await?;
        Ok(result.config)
    }

    pub async fn set_dhcp_config(&mut self, config: DhcpConfig) -> Result<()> {
        self.call_void("Dhcp.setConfig", &ConfigBody { config }).await
    }

    /// Catalogue of DHCP options the appliance can serve.
    pub async fn get_dhcp_option_list(&mut self) -> Result<Vec<DhcpOption>> {
        let result: OptionsResult = self.call_no_params("Dhcp.getOptionList").await?;
        Ok(result.options)
    }

    /// Number of leases declined by clients in `scope_ids`.
    pub async fn get_dhcp_declined_leases(&mut self, scope_ids: &[KId]) -> Result<i64> {
        let result: CountResult = self
            .call("Dhcp.getDeclinedLeases", &ScopeIdsParams { scope_ids })
            .await?;
        Ok(result.count)
    }

    pub async fn remove_dhcp_declined_leases(&mut self, scope_ids: &[KId]) -> Result<()> {
        self.call_void("Dhcp.removeDeclinedLeases", &ScopeIdsParams { scope_ids })
            .await
    }

    /// Commit staged DHCP changes.
    pub async fn apply_dhcp(&mut self) -> Result<BulkResult> {
        self.call_no_params("Dhcp.apply").await
    }

    /// Discard staged DHCP changes.
    pub async fn reset_dhcp(&mut self) -> Result<()> {
        self.call_void_no_params("Dhcp.reset").await
    }
}
