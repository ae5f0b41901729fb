use std::fmt;

use serde::{Deserialize, Serialize};

/// The discriminator of a [`Value`](crate::Value).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    DateTime,
    Array,
    Object,
}

impl ValueKind {
    /// Returns `true` for kinds that hold other values.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Plural noun used in argument errors ("objects, not arrays").
    pub fn plural(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "booleans",
            Self::Number => "numbers",
            Self::String => "strings",
            Self::DateTime => "datetimes",
            Self::Array => "arrays",
            Self::Object => "objects",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::DateTime => "datetime",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}
