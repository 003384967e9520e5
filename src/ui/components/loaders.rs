//! Loading indicators.

use super::{Attrs, Component, PulseSize, Variant};
use crate::defaults::DefaultsRegistry;
use crate::ui::markup::{Node, el};

const RING_RADIUS: f64 = 45.0;
const LOADING_TEXT: &str = "Loading...";

/// Three bouncing dots.
///
/// # Example
///
/// ```rust
/// use community_ui::defaults::DefaultsRegistry;
/// use community_ui::ui::components::{Component, DotsLoader, Variant};
///
/// let html = DotsLoader::new()
///     .variant(Variant::Danger)
///     .render(&DefaultsRegistry::new())
///     .render();
/// assert_eq!(html.matches("var(--bs-danger)").count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DotsLoader {
    variant: Option<Variant>,
    attrs: Attrs,
}

impl DotsLoader {
    /// Loader in the registry (or primary) colour.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dot colour.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }
}

impl Component for DotsLoader {
    const NAME: &'static str = "DotsLoader";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let variant = cfg.resolve("variant", self.variant, Variant::Primary);

        // Primary comes from the stylesheet.
        let dot = match variant {
            Variant::Primary => el("div"),
            v => el("div").style(format!("background-color: var(--bs-{v});")),
        };

        self.attrs
            .wrap(
                el("div").children(std::iter::repeat_n(dot, 3)),
                &["fs-comm-dots-loader"],
                "",
            )
            .into()
    }
}

/// A spinning ring of four segments.
#[derive(Debug, Clone, Default)]
pub struct RingLoader {
    variant: Option<Variant>,
    size: Option<String>,
    attrs: Attrs,
}

impl RingLoader {
    /// Ring in the registry (or primary) colour.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment colour.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Ring width and height, e.g. `3rem`.
    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

impl Component for RingLoader {
    const NAME: &'static str = "RingLoader";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let variant = cfg.resolve("variant", self.variant, Variant::Primary);
        let size = cfg.text("size", self.size.as_deref(), "64px");

        let segment = match variant {
            Variant::Primary => el("div"),
            v => el("div").style(format!(
                "border-color: var(--bs-{v}) transparent transparent transparent;"
            )),
        };

        self.attrs
            .wrap(
                el("div").children(std::iter::repeat_n(segment, 4)),
                &["fs-comm-ring-loader"],
                &format!("width: {size}; height: {size};"),
            )
            .into()
    }
}

/// A single pulsing circle.
#[derive(Debug, Clone, Default)]
pub struct PulseLoader {
    variant: Option<Variant>,
    size: Option<PulseSize>,
    attrs: Attrs,
}

impl PulseLoader {
    /// Medium pulse in the registry (or primary) colour.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Circle colour.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Circle size.
    #[must_use]
    pub fn size(mut self, size: PulseSize) -> Self {
        self.size = Some(size);
        self
    }
}

impl Component for PulseLoader {
    const NAME: &'static str = "PulseLoader";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let variant = cfg.resolve("variant", self.variant, Variant::Primary);
        let size = cfg.resolve("size", self.size, PulseSize::Md);

        let circle = el("div")
            .class(format!("pulse-circle bg-{variant}"))
            .style(format!("background-color: var(--bs-{variant});"));
        let size_class = format!("pulse-{size}");

        self.attrs
            .wrap(
                el("div").child(circle),
                &["fs-comm-pulse-loader", size_class.as_str()],
                "",
            )
            .into()
    }
}

/// Five bars rising and falling in sequence.
#[derive(Debug, Clone, Default)]
pub struct WaveLoader {
    variant: Option<Variant>,
    attrs: Attrs,
}

impl WaveLoader {
    /// Wave in the registry (or primary) colour.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bar colour.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }
}

impl Component for WaveLoader {
    const NAME: &'static str = "WaveLoader";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let variant = cfg.resolve("variant", self.variant, Variant::Primary);

        let bars = (0..5u8).map(|i| {
            el("div").class("wave-bar").style(format!(
                "background-color: var(--bs-{variant}); animation-delay: {}s;",
                f64::from(i) / 10.0
            ))
        });

        self.attrs
            .wrap(el("div").children(bars), &["fs-comm-wave-loader"], "")
            .into()
    }
}

/// Upper bound on skeleton lines, whatever the caller or registry asks for.
const SKELETON_MAX_LINES: u32 = 50;

/// Shimmering placeholder lines, optionally under an avatar circle.
#[derive(Debug, Clone, Default)]
pub struct SkeletonLoader {
    lines: Option<u32>,
    avatar: Option<bool>,
    width: Option<String>,
    attrs: Attrs,
}

impl SkeletonLoader {
    /// Three lines, full width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of text lines, at most 50.
    #[must_use]
    pub fn lines(mut self, lines: u32) -> Self {
        self.lines = Some(lines);
        self
    }

    /// Show an avatar placeholder above the lines.
    #[must_use]
    pub fn avatar(mut self, avatar: bool) -> Self {
        self.avatar = Some(avatar);
        self
    }

    /// Overall width.
    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }
}

impl Component for SkeletonLoader {
    const NAME: &'static str = "SkeletonLoader";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let lines = cfg.resolve("lines", self.lines, 3).min(SKELETON_MAX_LINES);
        let avatar = cfg.resolve("avatar", self.avatar, false);
        let width = cfg.text("width", self.width.as_deref(), "100%");

        let avatar = avatar.then(|| el("div").class("skeleton-avatar rounded-circle mb-3"));
        // Last line is shorter.
        let lines = (0..lines).map(|i| {
            let line_width = if i + 1 < lines { "100%" } else { "60%" };
            el("div")
                .class("skeleton-line mb-2")
                .style(format!("width: {line_width};"))
        });

        self.attrs
            .wrap(
                el("div").child(avatar).children(lines),
                &["fs-comm-skeleton-loader"],
                &format!("width: {width};"),
            )
            .into()
    }
}

/// Circular SVG progress indicator.
#[derive(Debug, Clone)]
pub struct ProgressRing {
    value: f64,
    max_value: Option<f64>,
    size: Option<String>,
    variant: Option<Variant>,
    show_text: Option<bool>,
    attrs: Attrs,
}

impl ProgressRing {
    /// Ring showing `value` out of 100.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            max_value: None,
            size: None,
            variant: None,
            show_text: None,
            attrs: Attrs::default(),
        }
    }

    /// Value representing a full ring (default 100).
    #[must_use]
    pub fn max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Ring width and height (default `4rem`).
    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Progress stroke colour.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Show the percentage label in the centre (default true).
    #[must_use]
    pub fn show_text(mut self, show: bool) -> Self {
        self.show_text = Some(show);
        self
    }

    /// Completed percentage in `[0, 100]`. A zero maximum reads as 0%.
    #[must_use]
    pub fn percentage(value: f64, max_value: f64) -> f64 {
        if max_value == 0.0 {
            return 0.0;
        }
        (value / max_value * 100.0).clamp(0.0, 100.0)
    }
}

impl Component for ProgressRing {
    const NAME: &'static str = "ProgressRing";

    #[allow(clippy::cast_possible_truncation)]
    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let max_value = cfg.resolve("max_value", self.max_value, 100.0);
        let size = cfg.text("size", self.size.as_deref(), "4rem");
        let variant = cfg.resolve("variant", self.variant, Variant::Primary);
        let show_text = cfg.resolve("show_text", self.show_text, true);

        let percentage = Self::percentage(self.value, max_value);
        let circumference = 2.0 * 3.14159 * RING_RADIUS;
        let offset = circumference - percentage / 100.0 * circumference;

        let circle = |stroke: String| {
            el("circle")
                .attr("cx", "50")
                .attr("cy", "50")
                .attr("r", RING_RADIUS.to_string())
                .attr("fill", "none")
                .attr("stroke", stroke)
                .attr("stroke-width", "8")
        };
        let track = circle("var(--bs-border-color)".to_string());
        let progress = circle(format!("var(--bs-{variant})"))
            .attr("stroke-dasharray", circumference.to_string())
            .attr("stroke-dashoffset", offset.to_string())
            .attr("stroke-linecap", "round")
            .attr("transform", "rotate(-90 50 50)")
            .style("transition: stroke-dashoffset 0.3s ease;");
        let svg = el("svg")
            .attr("viewBox", "0 0 100 100")
            .style(format!("width: {size}; height: {size};"))
            .child(track)
            .child(progress);

        let label = show_text.then(|| {
            el("div")
                .class("position-absolute top-50 start-50 translate-middle fw-bold")
                .style("font-size: 0.875rem;")
                .child(format!("{}%", percentage.trunc() as i64))
        });

        self.attrs
            .wrap(
                el("div").child(svg).child(label),
                &["fs-comm-progress-ring"],
                "position: relative; display: inline-block;",
            )
            .into()
    }
}

/// A shape-shifting polygon.
#[derive(Debug, Clone, Default)]
pub struct PolygonLoader {
    variant: Option<Variant>,
    sides: Option<u32>,
    attrs: Attrs,
}

impl PolygonLoader {
    /// Hexagon in the registry (or primary) colour.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill colour.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Number of sides of the resting shape.
    #[must_use]
    pub fn sides(mut self, sides: u32) -> Self {
        self.sides = Some(sides);
        self
    }
}

impl Component for PolygonLoader {
    const NAME: &'static str = "PolygonLoader";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let variant = cfg.resolve("variant", self.variant, Variant::Primary);
        let sides = cfg.resolve("sides", self.sides, 6);

        let style = match variant {
            Variant::Primary => String::new(),
            v => format!("--fs-comm-polygon-color: var(--bs-{v});"),
        };

        self.attrs
            .wrap(
                el("div").attr("data-sides", sides.to_string()),
                &["fs-comm-polygon-loader"],
                &style,
            )
            .into()
    }
}

/// Text typed out character by character.
#[derive(Debug, Clone, Default)]
pub struct TypewriterLoader {
    text: Option<String>,
    variant: Option<Variant>,
    attrs: Attrs,
}

impl TypewriterLoader {
    /// Types `Loading...`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to type.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Text colour.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }
}

impl Component for TypewriterLoader {
    const NAME: &'static str = "TypewriterLoader";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let text = cfg.text("text", self.text.as_deref(), LOADING_TEXT);
        let variant = cfg.resolve("variant", self.variant, Variant::Primary);
        let color = format!("text-{variant}");

        self.attrs
            .wrap(
                el("div").attr("data-text", text),
                &["fs-comm-typewriter-loader", color.as_str()],
                "",
            )
            .into()
    }
}

/// Text with a pulsing shadow.
#[derive(Debug, Clone, Default)]
pub struct ShadowLoader {
    text: Option<String>,
    attrs: Attrs,
}

impl ShadowLoader {
    /// Shows `Loading...`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to show.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl Component for ShadowLoader {
    const NAME: &'static str = "ShadowLoader";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let text = defaults
            .resolver(Self::NAME)
            .text("text", self.text.as_deref(), LOADING_TEXT);

        self.attrs
            .wrap(
                el("div").attr("data-text", text),
                &["fs-comm-shadow-loader"],
                "",
            )
            .into()
    }
}

caller_attrs!(
    DotsLoader,
    RingLoader,
    PulseLoader,
    WaveLoader,
    SkeletonLoader,
    ProgressRing,
    PolygonLoader,
    TypewriterLoader,
    ShadowLoader,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::OptionValue;

    fn children(node: &Node) -> Vec<&crate::ui::markup::Element> {
        node.as_element().unwrap().child_elements().collect()
    }

    #[test]
    fn test_dots_loader_primary_has_no_inline_style() {
        let node = DotsLoader::new().render(&DefaultsRegistry::new());
        let dots = children(&node);
        assert_eq!(dots.len(), 3);
        assert!(dots.iter().all(|d| d.get_attr("style").is_none()));
    }

    #[test]
    fn test_dots_loader_variant_from_registry() {
        let defaults = DefaultsRegistry::new();
        defaults.set("DotsLoader", [("variant", "danger")]);
        let html = DotsLoader::new().render(&defaults).render();
        assert_eq!(html.matches("background-color: var(--bs-danger);").count(), 3);
    }

    #[test]
    fn test_ring_loader_size_tiers() {
        let defaults = DefaultsRegistry::new();
        let node = RingLoader::new().render(&defaults);
        assert_eq!(
            node.as_element().unwrap().get_attr("style"),
            Some("width: 3rem; height: 3rem;")
        );
        assert_eq!(children(&node).len(), 4);

        let node = RingLoader::new().size("5rem").render(&defaults);
        assert_eq!(
            node.as_element().unwrap().get_attr("style"),
            Some("width: 5rem; height: 5rem;")
        );

        let node = RingLoader::new().render(&DefaultsRegistry::empty());
        assert_eq!(
            node.as_element().unwrap().get_attr("style"),
            Some("width: 64px; height: 64px;")
        );
    }

    #[test]
    fn test_ring_loader_non_primary_colours_segments() {
        let node = RingLoader::new()
            .variant(Variant::Success)
            .render(&DefaultsRegistry::new());
        assert!(children(&node).iter().all(|s| {
            s.get_attr("style")
                == Some("border-color: var(--bs-success) transparent transparent transparent;")
        }));
    }

    #[test]
    fn test_pulse_loader() {
        let node = PulseLoader::new()
            .size(PulseSize::Lg)
            .variant(Variant::Info)
            .render(&DefaultsRegistry::new());
        assert!(node.as_element().unwrap().has_class("pulse-lg"));
        assert_eq!(node.find_by_class("bg-info").len(), 1);
    }

    #[test]
    fn test_wave_loader_delays() {
        let html = WaveLoader::new().render(&DefaultsRegistry::new()).render();
        assert_eq!(html.matches("wave-bar").count(), 5);
        assert!(html.contains("animation-delay: 0s;"));
        assert!(html.contains("animation-delay: 0.4s;"));
    }

    #[test]
    fn test_skeleton_loader() {
        let node = SkeletonLoader::new()
            .lines(4)
            .avatar(true)
            .render(&DefaultsRegistry::new());
        assert_eq!(node.find_by_class("skeleton-avatar").len(), 1);
        let lines = node.find_by_class("skeleton-line");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2].get_attr("style"), Some("width: 100%;"));
        assert_eq!(lines[3].get_attr("style"), Some("width: 60%;"));
    }

    #[test]
    fn test_skeleton_loader_zero_lines() {
        let node = SkeletonLoader::new().lines(0).render(&DefaultsRegistry::new());
        assert!(node.find_by_class("skeleton-line").is_empty());
    }

    #[test]
    fn test_skeleton_loader_caps_line_count() {
        let defaults = DefaultsRegistry::new();
        defaults.set("SkeletonLoader", [("lines", OptionValue::Int(4_000_000_000))]);
        let node = SkeletonLoader::new().render(&defaults);
        let lines = node.find_by_class("skeleton-line");
        assert_eq!(lines.len(), 50);
        assert_eq!(lines[49].get_attr("style"), Some("width: 60%;"));

        let node = SkeletonLoader::new().lines(u32::MAX).render(&defaults);
        assert_eq!(node.find_by_class("skeleton-line").len(), 50);
    }

    #[test]
    fn test_progress_ring_percentage_clamps() {
        assert!((ProgressRing::percentage(150.0, 100.0) - 100.0).abs() < f64::EPSILON);
        assert!(ProgressRing::percentage(-5.0, 100.0).abs() < f64::EPSILON);
        assert!(ProgressRing::percentage(5.0, 0.0).abs() < f64::EPSILON);
        assert!((ProgressRing::percentage(1.0, 4.0) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_ring_render() {
        let node = ProgressRing::new(75.0)
            .variant(Variant::Success)
            .render(&DefaultsRegistry::new());
        assert_eq!(node.find_by_tag("circle").len(), 2);
        assert!(node.text_content().contains("75%"));
        assert!(node.render().contains(r#"stroke="var(--bs-success)""#));

        let hidden = ProgressRing::new(10.0)
            .show_text(false)
            .render(&DefaultsRegistry::new());
        assert!(hidden.text_content().is_empty());
    }

    #[test]
    fn test_polygon_loader_registry_sides() {
        let defaults = DefaultsRegistry::new();
        let node = PolygonLoader::new().render(&defaults);
        let root = node.as_element().unwrap();
        assert_eq!(root.get_attr("data-sides"), Some("6"));
        assert_eq!(root.get_attr("style"), None);

        defaults.set("PolygonLoader", [("sides", OptionValue::Int(8))]);
        let node = PolygonLoader::new().variant(Variant::Warning).render(&defaults);
        let root = node.as_element().unwrap();
        assert_eq!(root.get_attr("data-sides"), Some("8"));
        assert_eq!(
            root.get_attr("style"),
            Some("--fs-comm-polygon-color: var(--bs-warning);")
        );
    }

    #[test]
    fn test_text_loaders() {
        let defaults = DefaultsRegistry::new();
        let node = TypewriterLoader::new().text("Please wait").render(&defaults);
        let root = node.as_element().unwrap();
        assert_eq!(root.get_attr("data-text"), Some("Please wait"));
        assert!(root.has_class("text-primary"));

        let node = ShadowLoader::new().render(&defaults);
        assert_eq!(node.as_element().unwrap().get_attr("data-text"), Some("Loading..."));
    }
}
