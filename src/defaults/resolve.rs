//! Three-tier parameter resolution.

use super::registry::OptionMap;
use super::value::OptionValue;

/// Conversion from a stored registry value into a parameter type.
///
/// Returns `None` when the stored value cannot represent the parameter, in
/// which case resolution falls through to the hardcoded fallback.
pub trait FromOptionValue: Sized {
    /// Convert `value`, if it fits.
    fn from_option_value(value: &OptionValue) -> Option<Self>;
}

impl FromOptionValue for String {
    fn from_option_value(value: &OptionValue) -> Option<Self> {
        Some(value.to_string())
    }
}

impl FromOptionValue for i64 {
    fn from_option_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Int(i) => Some(*i),
            OptionValue::Str(s) => s.trim().parse().ok(),
            OptionValue::Bool(_) | OptionValue::Float(_) => None,
        }
    }
}

impl FromOptionValue for u32 {
    fn from_option_value(value: &OptionValue) -> Option<Self> {
        i64::from_option_value(value).and_then(|i| u32::try_from(i).ok())
    }
}

impl FromOptionValue for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_option_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Float(x) => Some(*x),
            OptionValue::Int(i) => Some(*i as f64),
            OptionValue::Str(s) => s.trim().parse().ok(),
            OptionValue::Bool(_) => None,
        }
    }
}

impl FromOptionValue for bool {
    fn from_option_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::Str(s) => s.trim().parse().ok(),
            OptionValue::Int(_) | OptionValue::Float(_) => None,
        }
    }
}

/// Parameters whose hardcoded fallback is "none".
impl<T: FromOptionValue> FromOptionValue for Option<T> {
    fn from_option_value(value: &OptionValue) -> Option<Self> {
        T::from_option_value(value).map(Some)
    }
}

/// Registry view for a single component.
///
/// Holds a copy of the component's option map taken when the component
/// renders, so a render sees one consistent set of defaults.
#[derive(Debug, Clone)]
pub struct Resolver {
    component: &'static str,
    options: OptionMap,
}

impl Resolver {
    /// Resolver over an explicit option map.
    #[must_use]
    pub fn new(component: &'static str, options: OptionMap) -> Self {
        Self { component, options }
    }

    /// Component this resolver serves.
    #[must_use]
    pub fn component(&self) -> &'static str {
        self.component
    }

    /// Explicit value, else registry default, else `fallback`.
    pub fn resolve<T: FromOptionValue>(&self, key: &str, explicit: Option<T>, fallback: T) -> T {
        explicit
            .or_else(|| self.options.get(key).and_then(T::from_option_value))
            .unwrap_or(fallback)
    }

    /// [`resolve`](Self::resolve) for string parameters.
    #[must_use]
    pub fn text(&self, key: &str, explicit: Option<&str>, fallback: &str) -> String {
        self.resolve(key, explicit.map(str::to_string), fallback.to_string())
    }

    /// Like [`text`](Self::text) for parameters whose hardcoded fallback is
    /// "absent" (optional content such as a subtitle or icon).
    #[must_use]
    pub fn optional_text(&self, key: &str, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.options.get(key).map(ToString::to_string))
    }
}
