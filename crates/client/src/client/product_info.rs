//! `ProductInfo.*` methods for [`Session`].
//!
//! # What this module handles:
//! - Version, edition and licensing flags of the appliance
//! - Dashboard warnings and their suppression
//! - Host name, uptime, device counts and support bundle download

use serde::{Deserialize, Serialize};

use crate::client::Session;
use crate::error::Result;
use crate::models::{ProductInfo, SupportInfo, UsedDevicesCount, Warning, WarningType};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductInfoResult {
    product_info: ProductInfo,
}

#[derive(Deserialize)]
struct WarningsResult {
    warnings: Vec<Warning>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DisableWarningParams {
    warning_type: WarningType,
}

#[derive(Deserialize)]
struct HostnameResult {
    hostname: String,
}

#[derive(Deserialize)]
struct UptimeResult {
    uptime: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileDownloadResult {
    file_download: SupportInfo,
}

#[derive(Deserialize)]
struct UrlResult {
    url: String,
}

impl Session {
    pub async fn get_product_info(&mut self) -> Result<ProductInfo> {
        let result: ProductInfoResult = self.call_no_params("ProductInfo.get").await?;
        Ok(result.product_info)
    }

    pub async fn get_warnings(&mut self) -> Result<Vec<Warning>> {
        let result: WarningsResult = self.call_no_params("ProductInfo.getWarnings").await?;
        Ok(result.warnings)
    }

    /// Hide a suppressable warning.
    pub async fn disable_warning(&mut self, warning_type: WarningType) -> Result<()> {
        self.call_void(
            "ProductInfo.disableWarning",
            &DisableWarningParams { warning_type },
        )
        .await
    }

    pub async fn get_system_hostname(&mut self) -> Result<String> {
        let result: HostnameResult = self.call_no_params("ProductInfo.getSystemHostname").await?;
        Ok(result.hostname)
    }

    /// Seconds since the appliance started.
    pub async fn get_uptime(&mut self) -> Result<i64> {
        let result: UptimeResult = self.call_no_params("ProductInfo.getUptime").await?;
        Ok(result.uptime)
    }

    pub async fn get_used_devices_count(&mut self) -> Result<UsedDevicesCount> {
        self.call_no_params("ProductInfo.getUsedDevicesCount").await
    }

    /// Prepare a support information bundle and return its download descriptor.
    pub async fn get_support_info(&mut self) -> Result<SupportInfo> {
        let result: FileDownloadResult = self.call_no_params("ProductInfo.getSupportInfo").await?;
        Ok(result.file_download)
    }

    pub async fn get_acknowledgments_url(&mut self) -> Result<String> {
        let result: UrlResult = self
            .call_no_params("ProductInfo.getAcknowledgmentsUrl")
            .await?;
        Ok(result.url)
    }
}
