//! Log viewer, search and log settings types.

use serde::{Deserialize, Serialize};

/// Log name as known to the appliance (e.g. `debug`, `error`, `security`).
pub type LogType = String;

/// One log offered by the appliance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogItem {
    pub log_name: LogType,
    pub has_messages: bool,
}

/// Single line of a log viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogRow {
    pub content: String,
    /// Highlight color as `RRGGBB`, empty when not highlighted.
    pub highlight: String,
}

/// Window of log lines returned by `Logs.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogViewport {
    pub viewport: Vec<LogRow>,
    /// Total number of lines in the log.
    pub total_items: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    ResultFound,
    Searching,
    Cancelled,
    ResultNotFound,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationPeriod {
    #[default]
    RotateNever,
    RotateHourly,
    RotateDaily,
    RotateWeekly,
    RotateMonthly,
}

/// Syslog facility, numbered as in RFC 5424.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityUnit {
    #[default]
    FacilityKernel,
    FacilityUserLevel,
    FacilityMailSystem,
    FacilitySystemDaemons,
    FacilitySecurity1,
    FacilityInternal,
    FacilityLinePrinter,
    FacilityNetworkNews,
    FacilityUucpSubsystem,
    FacilityClockDaemon1,
    FacilitySecurity2,
    FacilityFtpDaemon,
    FacilityNtpSubsystem,
    FacilityLogAudit,
    FacilityLogAlert,
    FacilityClockDaemon2,
    FacilityLocal0,
    FacilityLocal1,
    FacilityLocal2,
    FacilityLocal3,
    FacilityLocal4,
    FacilityLocal5,
    FacilityLocal6,
    FacilityLocal7,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityUnit {
    SeverityEmergency,
    SeverityAlert,
    SeverityCritical,
    SeverityError,
    SeverityWarning,
    SeverityNotice,
    #[default]
    SeverityInformational,
    SeverityDebug,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogFileSettings {
    pub enabled: bool,
    pub file_name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogRotationSettings {
    pub period: RotationPeriod,
    /// Megabytes; `-1` for unlimited.
    pub max_log_size: i64,
    pub rotate_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyslogSettings {
    pub enabled: bool,
    pub server_url: String,
    pub facility: FacilityUnit,
    /// Read-only.
    pub severity: SeverityUnit,
    pub application: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub general: LogFileSettings,
    pub rotation: LogRotationSettings,
    pub syslog: SyslogSettings,
}
