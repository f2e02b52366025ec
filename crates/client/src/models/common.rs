//! Types shared across the appliance API groups.
//!
//! This module contains identifiers, the generic search query, optional-value
//! wrappers and the bulk error/result shapes. It does NOT contain types that
//! belong to a single API group.

use serde::{Deserialize, Serialize};

/// Opaque entity identifier assigned by the appliance.
pub type KId = String;

/// List of entity identifiers.
pub type KIdList = Vec<KId>;

/// IPv4 or IPv6 address in textual form.
pub type IpAddress = String;

/// Value paired with an on/off switch.
///
/// The appliance sends the value even when the switch is off, so both parts
/// are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Optional<T> {
    pub enabled: bool,
    pub value: T,
}

impl<T> Optional<T> {
    pub fn some(value: T) -> Self {
        Self {
            enabled: true,
            value,
        }
    }

    /// The value, if the switch is on.
    pub fn as_option(&self) -> Option<&T> {
        self.enabled.then_some(&self.value)
    }
}

impl<T: Default> Optional<T> {
    pub fn none() -> Self {
        Self {
            enabled: false,
            value: T::default(),
        }
    }
}

impl<T: Default> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::some(v),
            None => Self::none(),
        }
    }
}

/// Optional list of strings.
pub type OptionalStringList = Optional<Vec<String>>;

/// Reference to another entity by id, with its display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdReference {
    pub id: KId,
    pub name: String,
    /// True when the referenced entity no longer exists.
    pub invalid: bool,
}

pub type OptionalIdReference = Optional<IdReference>;

/// Reference that can be switched off, carrying id and name inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionalEntity {
    pub enabled: bool,
    pub id: KId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOperator {
    #[default]
    Eq,
    NotEq,
    LessThan,
    GreaterThan,
    LessEq,
    GreaterEq,
    /// Substring match, case-insensitive on the appliance.
    Like,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[default]
    Or,
    And,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Single filter condition of a [`SearchQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCondition {
    pub field_name: String,
    pub comparator: CompareOperator,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOrder {
    pub column_name: String,
    pub direction: SortDirection,
    pub case_sensitive: bool,
}

/// Listing query: field projection, filter, paging and ordering.
///
/// A `limit` of `-1` means "no limit".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<SubCondition>,
    #[serde(default)]
    pub combining: LogicalOperator,
    #[serde(default)]
    pub start: i64,
    pub limit: i64,
    #[serde(default)]
    pub order_by: Vec<SortOrder>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::all()
    }
}

impl SearchQuery {
    /// Query matching every item, unpaged.
    pub fn all() -> Self {
        Self {
            fields: Vec::new(),
            conditions: Vec::new(),
            combining: LogicalOperator::Or,
            start: 0,
            limit: -1,
            order_by: Vec::new(),
        }
    }

    pub fn page(mut self, start: i64, limit: i64) -> Self {
        self.start = start;
        self.limit = limit;
        self
    }

    pub fn condition(
        mut self,
        field_name: impl Into<String>,
        comparator: CompareOperator,
        value: impl Into<String>,
    ) -> Self {
        self.conditions.push(SubCondition {
            field_name: field_name.into(),
            comparator,
            value: value.into(),
        });
        self
    }

    pub fn combining(mut self, op: LogicalOperator) -> Self {
        self.combining = op;
        self
    }

    pub fn order_by(mut self, column_name: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by.push(SortOrder {
            column_name: column_name.into(),
            direction,
            case_sensitive: false,
        });
        self
    }

    /// Copy of the query with a zero `limit` replaced by `-1`.
    pub fn normalized(&self) -> Self {
        let mut query = self.clone();
        if query.limit == 0 {
            query.limit = -1;
        }
        query
    }
}

/// Parameters of a localisable server message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizableMessageParameters {
    pub positional_parameters: Vec<String>,
    /// Count used to choose the plural form.
    pub plurality: i64,
}

impl Default for LocalizableMessageParameters {
    fn default() -> Self {
        Self {
            positional_parameters: Vec::new(),
            plurality: 1,
        }
    }
}

/// Failure of one item in a bulk operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiError {
    /// Index of the failing item in the request list.
    pub input_index: i64,
    pub code: i64,
    pub message: String,
    pub message_parameters: LocalizableMessageParameters,
}

pub type ErrorList = Vec<ApiError>;

/// Id assigned to one item of a bulk create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateResult {
    pub input_index: i64,
    pub id: KId,
}

/// Result of a bulk set/remove/apply: an empty list means every item succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkResult {
    pub errors: ErrorList,
}

impl BulkResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of a bulk create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateResults {
    pub errors: ErrorList,
    pub result: Vec<CreateResult>,
}

impl CreateResults {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Id created for the request item at `input_index`.
    pub fn id_for(&self, input_index: i64) -> Option<&str> {
        self.result
            .iter()
            .find(|r| r.input_index == input_index)
            .map(|r| r.id.as_str())
    }
}

/// One page of a listing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    /// Number of matching items before `start`/`limit` were applied.
    #[serde(default)]
    pub total_items: i64,
    /// Non-fatal problems; only some listings report them.
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub warnings: ErrorList,
}

/// Persistence state of a configuration item not yet applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreStatus {
    #[default]
    #[serde(rename = "StoreStatusClean")]
    Clean,
    #[serde(rename = "StoreStatusModified")]
    Modified,
    #[serde(rename = "StoreStatusNew")]
    New,
}

/// File prepared by the appliance for download.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Download {
    /// Path relative to the appliance root.
    pub url: String,
    pub name: String,
    pub length: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Date {
    pub year: i32,
    /// Zero-based month, as the appliance sends it.
    pub month: i32,
    pub day: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Time {
    pub hour: i32,
    pub min: i32,
}
