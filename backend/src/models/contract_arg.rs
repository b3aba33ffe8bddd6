use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a contract argument as chosen in the call form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    Symbol,
    Address,
    I32,
    U32,
    I128,
    U128,
    String,
    Bool,
    Vec,
    Map,
}

impl ArgKind {
    pub const ALL: [ArgKind; 10] = [
        ArgKind::Symbol,
        ArgKind::Address,
        ArgKind::I32,
        ArgKind::U32,
        ArgKind::I128,
        ArgKind::U128,
        ArgKind::String,
        ArgKind::Bool,
        ArgKind::Vec,
        ArgKind::Map,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArgKind::Symbol => "symbol",
            ArgKind::Address => "address",
            ArgKind::I32 => "i32",
            ArgKind::U32 => "u32",
            ArgKind::I128 => "i128",
            ArgKind::U128 => "u128",
            ArgKind::String => "string",
            ArgKind::Bool => "bool",
            ArgKind::Vec => "vec",
            ArgKind::Map => "map",
        }
    }

    /// Composite kinds carry JSON text in `raw`
    pub fn is_composite(&self) -> bool {
        matches!(self, ArgKind::Vec | ArgKind::Map)
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArgKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArgKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown argument type: {}", s))
    }
}

/// A single form argument, exactly as the operator typed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedArgument {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: ArgKind,
    #[serde(rename = "value", deserialize_with = "raw_from_json")]
    pub raw: String,
}

impl TypedArgument {
    pub fn new(id: impl Into<String>, kind: ArgKind, raw: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            raw: raw.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Display text of a JSON form value.
///
/// Strings pass through untouched, booleans and numbers become their literal
/// text, arrays and objects become compact JSON text.
pub fn raw_from_value(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn raw_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(raw_from_value)
}
