//! Option values stored in the registry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single default value.
///
/// Deserialises untagged so a config file can write `height: 400px`,
/// `columns: 4` or `show_text: false` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean option.
    Bool(bool),
    /// Integer option.
    Int(i64),
    /// Floating point option.
    Float(f64),
    /// String option (CSS lengths, colours, variant names).
    Str(String),
}

impl OptionValue {
    /// Borrow the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for OptionValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for OptionValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(OptionValue::from("3rem").to_string(), "3rem");
        assert_eq!(OptionValue::Int(6).to_string(), "6");
        assert_eq!(OptionValue::from(0.5).to_string(), "0.5");
        assert_eq!(OptionValue::from(true).to_string(), "true");
    }

    #[test]
    fn test_untagged_yaml() {
        let values: Vec<OptionValue> =
            serde_yaml::from_str("[true, 4, 0.75, 400px, \"12\"]").unwrap();
        assert_eq!(
            values,
            vec![
                OptionValue::Bool(true),
                OptionValue::Int(4),
                OptionValue::Float(0.75),
                OptionValue::Str("400px".into()),
                OptionValue::Str("12".into()),
            ]
        );
    }
}
