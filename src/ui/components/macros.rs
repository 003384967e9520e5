//! Builder boilerplate shared by every component.

/// Adds `cls`, `style` and `attr` builder methods backed by an `attrs: Attrs`
/// field.
macro_rules! caller_attrs {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Extra CSS classes, merged after the component's own.
                #[must_use]
                pub fn cls(mut self, cls: impl Into<String>) -> Self {
                    self.attrs.cls = cls.into();
                    self
                }

                /// Extra inline style, appended after the component's own.
                #[must_use]
                pub fn style(mut self, style: impl Into<String>) -> Self {
                    self.attrs.style = style.into();
                    self
                }

                /// Extra HTML attribute (`id`, `data-*`, `hx-*`).
                #[must_use]
                pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                    self.attrs.extra.push((name.into(), value.into()));
                    self
                }
            }
        )+
    };
}

/// Declares a CSS token enum with `as_str`, `FromStr`, `Display` and registry
/// conversions. Registry strings that name no variant convert to `None`.
macro_rules! css_token {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// CSS token for this value.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $token ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $token => Ok(Self::$variant), )+
                    other => Err(UnknownToken(other.to_string())),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl crate::defaults::FromOptionValue for $name {
            fn from_option_value(value: &crate::defaults::OptionValue) -> Option<Self> {
                value.as_str()?.parse().ok()
            }
        }

        impl From<$name> for crate::defaults::OptionValue {
            fn from(token: $name) -> Self {
                Self::Str(token.as_str().to_string())
            }
        }
    };
}
