//! `IpAddressGroups.*` methods for [`Session`].

use crate::client::Session;
use crate::error::Result;
use crate::models::BulkResult;

impl Session {
    /// Commit staged address group changes.
    pub async fn apply_ip_address_groups(&mut self) -> Result<BulkResult> {
        self.call_no_params("IpAddressGroups.apply").await
    }

    /// Discard staged address group changes.
    pub async fn reset_ip_address_groups(&mut self) -> Result<()> {
        self.call_void_no_params("IpAddressGroups.reset").await
    }
}
