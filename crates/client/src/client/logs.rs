//! `Logs.*` methods for [`Session`].
//!
//! # What this module handles:
//! - Reading a window of log lines
//! - Listing and clearing logs
//! - Starting and cancelling server-side searches
//! - Per-log file, rotation and syslog settings

use serde::{Deserialize, Serialize};

use crate::client::Session;
use crate::error::Result;
use crate::models::{LogItem, LogSettings, LogViewport};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetParams<'a> {
    log_name: &'a str,
    from_line: i64,
    count_lines: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogSetResult {
    log_set: Vec<LogItem>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogNameParams<'a> {
    log_name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams<'a> {
    log_name: &'a str,
    what: &'a str,
    from_line: i64,
    to_line: i64,
    forward: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchIdBody<T> {
    search_id: T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsResult {
    current_settings: LogSettings,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetSettingsParams<'a> {
    log_name: &'a str,
    new_settings: &'a LogSettings,
}

impl Session {
    /// Read `count_lines` lines of `log_name` starting at `from_line`.
    pub async fn get_log(
        &mut self,
        log_name: &str,
        from_line: i64,
        count_lines: i64,
    ) -> Result<LogViewport> {
        let params = GetParams {
            log_name,
            from_line,
            count_lines,
        };
        self.call("Logs.get", &params).await
    }

    /// Logs available on the appliance.
    pub async fn get_log_set(&mut self) -> Result<Vec<LogItem>> {
        let result: LogSetResult = self.call_no_params("Logs.getLogSet").await?;
        Ok(result.log_set)
    }

    pub async fn clear_log(&mut self, log_name: &str) -> Result<()> {
        self.call_void("Logs.clear", &LogNameParams { log_name }).await
    }

    /// Start searching `log_name` for `what` between two lines and return the search id.
    pub async fn search_log(
        &mut self,
        log_name: &str,
        what: &str,
        from_line: i64,
        to_line: i64,
        forward: bool,
    ) -> Result<String> {
        let params = SearchParams {
            log_name,
            what,
            from_line,
            to_line,
            forward,
        };
        let result: SearchIdBody<String> = self.call("Logs.search", &params).await?;
        Ok(result.search_id)
    }

    pub async fn cancel_log_search(&mut self, search_id: &str) -> Result<()> {
        self.call_void("Logs.cancelSearch", &SearchIdBody { search_id })
            .await
    }

    pub async fn get_log_settings(&mut self, log_name: &str) -> Result<LogSettings> {
        let result: SettingsResult = self
            .call("Logs.getSettings", &LogNameParams { log_name })
            .await?;
        Ok(result.current_settings)
    }

    pub async fn set_log_settings(&mut self, log_name: &str, settings: &LogSettings) -> Result<()> {
        let params = SetSettingsParams {
            log_name,
            new_settings: settings,
        };
        self.call_void("Logs.setSettings", &params).await
    }
}
