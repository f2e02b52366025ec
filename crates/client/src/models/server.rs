//! Server platform and input restriction types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerOs {
    #[serde(rename = "Windows")]
    Windows,
    #[serde(rename = "Linux")]
    Linux,
}

/// Kind of check a restriction tuple applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestrictionKind {
    Regex,
    ByteLength,
    ForbiddenNameList,
    ForbiddenPrefixList,
    ForbiddenSuffixList,
    BadCharacterList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionTuple {
    /// Field the check applies to.
    pub name: String,
    pub kind: RestrictionKind,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Input restrictions for one entity type (e.g. user names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restriction {
    pub entity_name: String,
    #[serde(default)]
    pub tuples: Vec<RestrictionTuple>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_restriction_deserialization() {
        let r: Restriction = serde_json::from_value(json!({
            "entityName": "User",
            "tuples": [{"name": "userName", "kind": "BadCharacterList", "values": ["/", "\\"]}]
        }))
        .unwrap();
        assert_eq!(r.entity_name, "User");
        assert_eq!(r.tuples[0].kind, RestrictionKind::BadCharacterList);
        assert_eq!(r.tuples[0].values.len(), 2);
    }
}
