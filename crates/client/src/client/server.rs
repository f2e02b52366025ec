//! `Server.*` methods for [`Session`].

use serde::Deserialize;

use crate::client::Session;
use crate::error::Result;
use crate::models::{Restriction, ServerOs};

#[derive(Deserialize)]
struct OsResult {
    os: ServerOs,
}

#[derive(Deserialize)]
struct RestrictionsResult {
    restrictions: Vec<Restriction>,
}

impl Session {
    /// Operating system family of the appliance.
    pub async fn get_server_os(&mut self) -> Result<ServerOs> {
        let result: OsResult = self.call_no_params("Server.getOs").await?;
        Ok(result.os)
    }

    /// Input restrictions (forbidden characters, lengths, patterns) per entity type.
    pub async fn get_restriction_list(&mut self) -> Result<Vec<Restriction>> {
        let result: RestrictionsResult = self.call_no_params("Server.getRestrictionList").await?;
        Ok(result.restrictions)
    }
}
