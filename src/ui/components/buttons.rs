//! Buttons.

use super::{Attrs, ButtonSize, Component, FabPosition, Gradient, IconPosition, Variant};
use crate::defaults::DefaultsRegistry;
use crate::ui::markup::{Node, el};

fn size_class(size: Option<ButtonSize>) -> String {
    size.map(|s| format!("btn-{s}")).unwrap_or_default()
}

/// A button with a gradient background.
///
/// # Example
///
/// ```rust
/// use community_ui::defaults::DefaultsRegistry;
/// use community_ui::ui::components::{ButtonSize, Component, Gradient, GradientButton};
///
/// let html = GradientButton::new("Get Started")
///     .gradient(Gradient::Blue)
///     .size(ButtonSize::Lg)
///     .render(&DefaultsRegistry::new())
///     .render();
/// assert!(html.contains("btn-lg"));
/// assert!(html.contains("#4facfe"));
/// ```
#[derive(Debug, Clone)]
pub struct GradientButton {
    text: String,
    gradient: Option<Gradient>,
    size: Option<ButtonSize>,
    attrs: Attrs,
}

impl GradientButton {
    /// Button labelled `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            gradient: None,
            size: None,
            attrs: Attrs::default(),
        }
    }

    /// Preset or custom gradient (default purple).
    #[must_use]
    pub fn gradient(mut self, gradient: impl Into<Gradient>) -> Self {
        self.gradient = Some(gradient.into());
        self
    }

    /// Button size.
    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }
}

impl Component for GradientButton {
    const NAME: &'static str = "GradientButton";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let gradient = cfg.resolve("gradient", self.gradient, Gradient::Purple);
        let size = size_class(cfg.resolve("size", self.size.map(Some), None));

        self.attrs
            .wrap(
                el("button").attr("type", "button").child(self.text),
                &["fs-comm-gradient-button", "btn", size.as_str()],
                &format!("background: {}; border: none; color: white;", gradient.css()),
            )
            .into()
    }
}

/// A button with an icon beside (or instead of) its label.
#[derive(Debug, Clone)]
pub struct IconButton {
    icon: String,
    text: Option<String>,
    variant: Option<Variant>,
    size: Option<ButtonSize>,
    icon_position: Option<IconPosition>,
    attrs: Attrs,
}

impl IconButton {
    /// Icon-only button; `icon` is text or an emoji.
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            text: None,
            variant: None,
            size: None,
            icon_position: None,
            attrs: Attrs::default(),
        }
    }

    /// Label text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Button colour.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Button size.
    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Icon side (default left).
    #[must_use]
    pub fn icon_position(mut self, position: IconPosition) -> Self {
        self.icon_position = Some(position);
        self
    }
}

impl Component for IconButton {
    const NAME: &'static str = "IconButton";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let variant = cfg.resolve("variant", self.variant, Variant::Primary);
        let size = size_class(cfg.resolve("size", self.size.map(Some), None));
        let position = cfg.resolve("icon_position", self.icon_position, IconPosition::Left);
        let text = self.text.filter(|t| !t.is_empty());

        let spacing = match (&text, position) {
            (None, _) => "",
            (Some(_), IconPosition::Left) => "me-2",
            (Some(_), IconPosition::Right) => "ms-2",
        };
        let icon = el("span").class(spacing).child(self.icon);

        let button = el("button").attr("type", "button");
        let button = match (text, position) {
            (None, _) => button.child(icon),
            (Some(t), IconPosition::Left) => button.child(icon).child(t),
            (Some(t), IconPosition::Right) => button.child(t).child(icon),
        };
        let color = format!("btn btn-{variant}");

        self.attrs
            .wrap(
                button,
                &["fs-comm-icon-button", color.as_str(), size.as_str()],
                "",
            )
            .into()
    }
}

/// A round button fixed to a screen corner.
#[derive(Debug, Clone)]
pub struct FloatingActionButton {
    icon: String,
    variant: Option<Variant>,
    position: Option<FabPosition>,
    attrs: Attrs,
}

impl FloatingActionButton {
    /// Button showing `icon`.
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            variant: None,
            position: None,
            attrs: Attrs::default(),
        }
    }

    /// Button colour.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Screen corner (default bottom right).
    #[must_use]
    pub fn position(mut self, position: FabPosition) -> Self {
        self.position = Some(position);
        self
    }
}

impl Component for FloatingActionButton {
    const NAME: &'static str = "FloatingActionButton";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let variant = cfg.resolve("variant", self.variant, Variant::Primary);
        // Unknown registry positions fall through to bottom-right.
        let position = cfg.resolve("position", self.position, FabPosition::BottomRight);
        let color = format!("btn btn-{variant}");

        self.attrs
            .wrap(
                el("button")
                    .attr("type", "button")
                    .child(el("span").class("fs-4").child(self.icon)),
                &["fs-comm-fab", color.as_str(), "rounded-circle"],
                &format!(
                    "position: fixed; {} width: 56px; height: 56px; \
                     box-shadow: 0 4px 8px rgba(0,0,0,0.3); z-index: 1000;",
                    position.offsets()
                ),
            )
            .into()
    }
}

caller_attrs!(GradientButton, IconButton, FloatingActionButton);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_button_presets() {
        let node = GradientButton::new("Go").render(&DefaultsRegistry::new());
        let root = node.as_element().unwrap();
        assert_eq!(
            root.get_attr("class"),
            Some("fs-comm-gradient-button btn")
        );
        assert!(root.get_attr("style").unwrap().contains("#667eea"));
    }

    #[test]
    fn test_gradient_button_custom_from_registry() {
        let defaults = DefaultsRegistry::new();
        defaults.set("GradientButton", [("gradient", "linear-gradient(red, blue)")]);
        let node = GradientButton::new("Go").render(&defaults);
        assert_eq!(
            node.as_element().unwrap().get_attr("style"),
            Some("background: linear-gradient(red, blue); border: none; color: white;")
        );
    }

    #[test]
    fn test_icon_button_positions() {
        let defaults = DefaultsRegistry::new();
        let left = IconButton::new("🚀").text("Launch").render(&defaults);
        assert_eq!(left.render(), r#"<button type="button" class="fs-comm-icon-button btn btn-primary"><span class="me-2">🚀</span>Launch</button>"#);

        let right = IconButton::new("→")
            .text("Next")
            .icon_position(IconPosition::Right)
            .size(ButtonSize::Sm)
            .render(&defaults);
        let html = right.render();
        assert!(html.contains(r#"Next<span class="ms-2">→</span>"#));
        assert!(html.contains("btn-sm"));

        let only = IconButton::new("⚙").render(&defaults);
        assert!(only.render().contains("<span>⚙</span>"));
    }

    #[test]
    fn test_fab_position_and_fallback() {
        let defaults = DefaultsRegistry::new();
        let node = FloatingActionButton::new("+")
            .position(FabPosition::TopLeft)
            .render(&defaults);
        let style = node.as_element().unwrap().get_attr("style").unwrap();
        assert!(style.starts_with("position: fixed; top: 2rem; left: 2rem;"));
        assert!(style.contains("z-index: 1000;"));

        defaults.set("FloatingActionButton", [("position", "middle")]);
        let node = FloatingActionButton::new("+").render(&defaults);
        let style = node.as_element().unwrap().get_attr("style").unwrap();
        assert!(style.contains("bottom: 2rem; right: 2rem;"));
    }
}
