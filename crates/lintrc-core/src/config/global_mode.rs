//! Access modes for pre-declared global variables

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Validated access mode of a global variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum GlobalMode {
    /// The identifier exists and must not be reassigned
    #[serde(rename = "readonly")]
    ReadOnly,
    /// The identifier exists and may be reassigned
    #[serde(rename = "writable")]
    Writable,
    /// The identifier is disallowed
    #[serde(rename = "off")]
    Off,
}

impl GlobalMode {
    /// Parse a mode written as a string
    ///
    /// Accepts the canonical names plus the legacy spellings `readable`,
    /// `writeable`, `true` and `false`. Matching is case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "readonly" | "readable" | "false" => Some(Self::ReadOnly),
            "writable" | "writeable" | "true" => Some(Self::Writable),
            "off" => Some(Self::Off),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadOnly => "readonly",
            Self::Writable => "writable",
            Self::Off => "off",
        }
    }

    /// Whether an identifier with this mode counts as declared
    pub fn is_declared(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for GlobalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A global mode as written in a fragment, before validation
///
/// Booleans are the legacy form: `true` means writable, `false` read-only.
/// `null` also means read-only. Any other value is kept as written so the
/// resolver can report it against its fragment and key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum GlobalSetting {
    Flag(bool),
    Name(String),
    Other(Value),
}

impl GlobalSetting {
    /// Resolve to a recognized mode, if any
    pub fn mode(&self) -> Option<GlobalMode> {
        match self {
            Self::Flag(true) => Some(GlobalMode::Writable),
            Self::Flag(false) => Some(GlobalMode::ReadOnly),
            Self::Name(name) => GlobalMode::parse(name),
            Self::Other(Value::Null) => Some(GlobalMode::ReadOnly),
            Self::Other(_) => None,
        }
    }
}

impl From<GlobalMode> for GlobalSetting {
    fn from(mode: GlobalMode) -> Self {
        Self::Name(mode.as_str().to_string())
    }
}

impl From<&str> for GlobalSetting {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl fmt::Display for GlobalSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Name(name) => f.write_str(name),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_legacy_spellings() {
        assert_eq!(GlobalMode::parse("readonly"), Some(GlobalMode::ReadOnly));
        assert_eq!(GlobalMode::parse("readable"), Some(GlobalMode::ReadOnly));
        assert_eq!(GlobalMode::parse("writeable"), Some(GlobalMode::Writable));
        assert_eq!(GlobalMode::parse("off"), Some(GlobalMode::Off));
        assert_eq!(GlobalMode::parse("maybe"), None);
        assert_eq!(GlobalMode::parse("ReadOnly"), None);
        assert_eq!(GlobalMode::parse(""), None);
    }

    #[test]
    fn test_boolean_settings() {
        assert_eq!(GlobalSetting::Flag(true).mode(), Some(GlobalMode::Writable));
        assert_eq!(GlobalSetting::Flag(false).mode(), Some(GlobalMode::ReadOnly));
    }

    #[test]
    fn test_setting_deserializes_from_bool_or_string() {
        let flag: GlobalSetting = serde_json::from_str("true").unwrap();
        assert_eq!(flag, GlobalSetting::Flag(true));

        let name: GlobalSetting = serde_json::from_str(r#""off""#).unwrap();
        assert_eq!(name, GlobalSetting::Name("off".to_string()));
    }

    #[test]
    fn test_null_is_readonly_and_other_values_unrecognized() {
        let null: GlobalSetting = serde_json::from_str("null").unwrap();
        assert_eq!(null, GlobalSetting::Other(Value::Null));
        assert_eq!(null.mode(), Some(GlobalMode::ReadOnly));

        let number: GlobalSetting = serde_json::from_str("1").unwrap();
        assert_eq!(number.mode(), None);
        assert_eq!(number.to_string(), "1");

        let list: GlobalSetting = serde_json::from_str(r#"["readonly"]"#).unwrap();
        assert_eq!(list.mode(), None);
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&GlobalMode::ReadOnly).unwrap();
        assert_eq!(json, r#""readonly""#);
        assert!(!GlobalMode::Off.is_declared());
    }
}
