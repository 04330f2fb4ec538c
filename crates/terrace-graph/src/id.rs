use serde::{Deserialize, Serialize};
use std::fmt;

/// Node identifier as emitted by the graph producer.
///
/// Producers use either numbers or strings. Both are kept verbatim so exports print them back
/// unchanged. A graph never holds two ids that print the same, such as `1` and `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Str(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(v) => write!(f, "{v}"),
            NodeId::Str(v) => f.write_str(v),
        }
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for NodeId {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for NodeId {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::NodeId;

    #[test]
    fn display_prints_the_raw_value() {
        assert_eq!(NodeId::from(42).to_string(), "42");
        assert_eq!(NodeId::from("cmd").to_string(), "cmd");
    }

    #[test]
    fn numeric_and_string_ids_are_distinct() {
        assert_ne!(NodeId::from(1), NodeId::from("1"));
    }
}
