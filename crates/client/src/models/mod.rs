//! Wire types for the appliance JSON-RPC API.
//!
//! Types are organized by API group in submodules and re-exported here.
//! Field names follow the appliance's camelCase wire names via serde renames.

pub mod common;
pub mod dhcp;
pub mod dns;
pub mod logs;
pub mod product_info;
pub mod server;
pub mod session;
pub mod users;

pub use common::{
    ApiError, BulkResult, CompareOperator, CreateResult, CreateResults, Date, Download, ErrorList,
    IdReference, IpAddress, KId, KIdList, ListPage, LocalizableMessageParameters, LogicalOperator,
    Optional, OptionalEntity, OptionalIdReference, OptionalStringList, SearchQuery, SortDirection,
    SortOrder, StoreStatus, SubCondition, Time,
};
pub use dhcp::{
    DhcpConfig, DhcpExclusion, DhcpLease, DhcpLeaseType, DhcpMode, DhcpModeType, DhcpOption,
    DhcpOptionType, DhcpScope,
};
pub use dns::{DnsConfig, DnsForwarder, DnsHost};
pub use logs::{
    FacilityUnit, LogFileSettings, LogItem, LogRotationSettings, LogRow, LogSettings, LogType,
    LogViewport, RotationPeriod, SearchStatus, SeverityUnit, SyslogSettings,
};
pub use product_info::{ProductInfo, SupportInfo, UsedDevicesCount, Warning, WarningType};
pub use server::{Restriction, RestrictionKind, RestrictionTuple, ServerOs};
pub use session::{ApiApplication, ClientTimestamp, ClientTimestampList, LoginType};
pub use users::{
    AuthType, AutoLogin, ByteUnits, ByteValueWithUnits, CredentialsConfig, Quota, QuotaInterval,
    QuotaType, User, UserData, UserReference, UserRights, WwwFilter,
};
