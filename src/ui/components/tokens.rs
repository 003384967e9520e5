//! Typed CSS tokens shared by the components.

use std::fmt;

use thiserror::Error;

use crate::defaults::{FromOptionValue, OptionValue};

/// A string that names no variant of the requested token type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown token: {0}")]
pub struct UnknownToken(pub String);

css_token! {
    /// Bootstrap colour variant, used as `text-{v}`, `bg-{v}`, `var(--bs-{v})`.
    Variant {
        /// Primary brand colour.
        Primary => "primary",
        /// Secondary colour.
        Secondary => "secondary",
        /// Success/positive.
        Success => "success",
        /// Danger/destructive.
        Danger => "danger",
        /// Warning.
        Warning => "warning",
        /// Informational.
        Info => "info",
        /// Light.
        Light => "light",
        /// Dark.
        Dark => "dark",
    }
}

css_token! {
    /// Bootstrap button size modifier (`btn-sm`, `btn-lg`).
    ButtonSize {
        /// Small.
        Sm => "sm",
        /// Large.
        Lg => "lg",
    }
}

css_token! {
    /// Pulse loader size.
    PulseSize {
        /// Small.
        Sm => "sm",
        /// Medium.
        Md => "md",
        /// Large.
        Lg => "lg",
    }
}

css_token! {
    /// Glow strength on hover.
    GlowIntensity {
        /// Subtle glow.
        Low => "low",
        /// Default glow.
        Medium => "medium",
        /// Strong glow.
        High => "high",
    }
}

css_token! {
    /// Screen corner for a floating action button.
    FabPosition {
        /// Bottom right corner.
        BottomRight => "bottom-right",
        /// Bottom left corner.
        BottomLeft => "bottom-left",
        /// Top right corner.
        TopRight => "top-right",
        /// Top left corner.
        TopLeft => "top-left",
    }
}

impl FabPosition {
    /// Fixed-position offsets.
    #[must_use]
    pub fn offsets(self) -> &'static str {
        match self {
            Self::BottomRight => "bottom: 2rem; right: 2rem;",
            Self::BottomLeft => "bottom: 2rem; left: 2rem;",
            Self::TopRight => "top: 2rem; right: 2rem;",
            Self::TopLeft => "top: 2rem; left: 2rem;",
        }
    }
}

css_token! {
    /// Which side of the label an icon sits on.
    IconPosition {
        /// Icon before the text.
        Left => "left",
        /// Icon after the text.
        Right => "right",
    }
}

css_token! {
    /// Direction a scroll-revealed element moves in from.
    RevealDirection {
        /// Rise from below.
        Up => "up",
        /// Drop from above.
        Down => "down",
        /// Slide in from the right.
        Left => "left",
        /// Slide in from the left.
        Right => "right",
        /// Scale up.
        Zoom => "zoom",
    }
}

css_token! {
    /// Screen edge an off-canvas menu slides from.
    SlidePosition {
        /// Left edge.
        Left => "left",
        /// Right edge.
        Right => "right",
    }
}

/// Gradient background: a named preset or raw CSS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gradient {
    /// Indigo to violet.
    Purple,
    /// Sky blue to cyan.
    Blue,
    /// Green to teal.
    Green,
    /// Pink to yellow.
    Orange,
    /// Lilac to coral.
    Pink,
    /// Any CSS background image value.
    Custom(String),
}

impl Gradient {
    /// Parse a preset name; anything else is taken as custom CSS.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "purple" => Self::Purple,
            "blue" => Self::Blue,
            "green" => Self::Green,
            "orange" => Self::Orange,
            "pink" => Self::Pink,
            other => Self::Custom(other.to_string()),
        }
    }

    /// CSS `background` value.
    #[must_use]
    pub fn css(&self) -> &str {
        match self {
            Self::Purple => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            Self::Blue => "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
            Self::Green => "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
            Self::Orange => "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
            Self::Pink => "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
            Self::Custom(css) => css,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Custom(css) => css,
        }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Gradient {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl FromOptionValue for Gradient {
    fn from_option_value(value: &OptionValue) -> Option<Self> {
        value.as_str().map(Self::parse)
    }
}

impl From<Gradient> for OptionValue {
    fn from(g: Gradient) -> Self {
        Self::Str(g.name().to_string())
    }
}
