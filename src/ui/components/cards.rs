//! Card components.

use std::fmt::Write as _;

use super::{Attrs, Component, GlowIntensity, Variant};
use crate::defaults::DefaultsRegistry;
use crate::ui::markup::{Node, el};

const FLIP_DURATION: &str = "0.6s";
const TILT_MAX: &str = "15deg";
const TILT_DURATION: &str = "0.3s";
const REVEAL_OPACITY: &str = "0.9";
const AVATAR_PLACEHOLDER: &str = "https://via.placeholder.com/150";

/// A card that flips in 3D on hover to show its back face.
///
/// # Example
///
/// ```rust
/// use community_ui::defaults::DefaultsRegistry;
/// use community_ui::ui::components::{Component, FlipCard};
///
/// let html = FlipCard::new("Front", "Back")
///     .height("400px")
///     .render(&DefaultsRegistry::new())
///     .render();
/// assert!(html.contains("height: 400px"));
/// ```
#[derive(Debug, Clone)]
pub struct FlipCard {
    front: Node,
    back: Node,
    height: Option<String>,
    width: Option<String>,
    duration: Option<String>,
    attrs: Attrs,
}

impl FlipCard {
    /// Card with front and back content.
    pub fn new(front: impl Into<Node>, back: impl Into<Node>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            height: None,
            width: None,
            duration: None,
            attrs: Attrs::default(),
        }
    }

    /// Card height (default `300px`).
    #[must_use]
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Card width (default `100%`).
    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Flip animation duration (default `0.6s`).
    #[must_use]
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

impl Component for FlipCard {
    const NAME: &'static str = "FlipCard";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let height = cfg.text("height", self.height.as_deref(), "300px");
        let width = cfg.text("width", self.width.as_deref(), "100%");
        let duration = cfg.text("duration", self.duration.as_deref(), FLIP_DURATION);

        let mut style = format!("height: {height}; width: {width};");
        // The stylesheet already animates over the default duration.
        if duration != FLIP_DURATION {
            let _ = write!(style, " --fs-comm-flip-duration: {duration};");
        }

        let inner = el("div")
            .class("fs-comm-flip-card-inner")
            .child(el("div").class("fs-comm-flip-card-front card").child(self.front))
            .child(el("div").class("fs-comm-flip-card-back card").child(self.back));

        self.attrs
            .wrap(el("div").child(inner), &["fs-comm-flip-card"], &style)
            .into()
    }
}

/// A card that lifts and tilts on hover.
#[derive(Debug, Clone, Default)]
pub struct TiltCard {
    content: Vec<Node>,
    max_tilt: Option<String>,
    duration: Option<String>,
    attrs: Attrs,
}

impl TiltCard {
    /// Card wrapping `content`.
    pub fn new<I, N>(content: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Self {
            content: content.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Maximum tilt angle (default `15deg`).
    #[must_use]
    pub fn max_tilt(mut self, angle: impl Into<String>) -> Self {
        self.max_tilt = Some(angle.into());
        self
    }

    /// Transition duration (default `0.3s`).
    #[must_use]
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

impl Component for TiltCard {
    const NAME: &'static str = "TiltCard";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let max_tilt = cfg.text("max_tilt", self.max_tilt.as_deref(), TILT_MAX);
        let duration = cfg.text("duration", self.duration.as_deref(), TILT_DURATION);

        let mut style = String::new();
        if max_tilt != TILT_MAX {
            let _ = write!(style, "--fs-comm-tilt-max: {max_tilt};");
        }
        if duration != TILT_DURATION {
            let _ = write!(style, " --fs-comm-tilt-duration: {duration};");
        }

        self.attrs
            .wrap(
                el("div").children(self.content),
                &["fs-comm-tilt-card", "card"],
                &style,
            )
            .into()
    }
}

/// An image card whose overlay slides up on hover.
#[derive(Debug, Clone)]
pub struct RevealCard {
    img_src: String,
    title: String,
    description: Option<String>,
    button: Option<Node>,
    height: Option<String>,
    overlay_opacity: Option<String>,
    attrs: Attrs,
}

impl RevealCard {
    /// Card showing `img_src`, revealing `title` on hover.
    pub fn new(img_src: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            img_src: img_src.into(),
            title: title.into(),
            description: None,
            button: None,
            height: None,
            overlay_opacity: None,
            attrs: Attrs::default(),
        }
    }

    /// Overlay description text.
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Action button or link shown in the overlay.
    #[must_use]
    pub fn button(mut self, button: impl Into<Node>) -> Self {
        self.button = Some(button.into());
        self
    }

    /// Card height (default `300px`).
    #[must_use]
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Overlay background opacity (default `0.9`).
    #[must_use]
    pub fn overlay_opacity(mut self, opacity: impl Into<String>) -> Self {
        self.overlay_opacity = Some(opacity.into());
        self
    }
}

impl Component for RevealCard {
    const NAME: &'static str = "RevealCard";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let height = cfg.text("height", self.height.as_deref(), "300px");
        let opacity = cfg.text(
            "overlay_opacity",
            self.overlay_opacity.as_deref(),
            REVEAL_OPACITY,
        );
        let description = cfg
            .optional_text("description", self.description.as_deref())
            .filter(|d| !d.is_empty());

        let mut style = format!("height: {height};");
        if opacity != REVEAL_OPACITY {
            let _ = write!(style, " --fs-comm-reveal-opacity: {opacity};");
        }

        let overlay = el("div")
            .class("fs-comm-reveal-overlay")
            .child(el("h4").class("mb-2").child(self.title.as_str()))
            .child(description.map(|d| el("p").class("mb-3").child(d)))
            .child(self.button);
        let image = el("img")
            .attr("src", self.img_src)
            .class("fs-comm-reveal-image")
            .attr("alt", self.title);

        self.attrs
            .wrap(
                el("div").child(image).child(overlay),
                &["fs-comm-reveal-card", "card"],
                &style,
            )
            .into()
    }
}

/// A card with a coloured glow on hover.
#[derive(Debug, Clone, Default)]
pub struct GlowCard {
    content: Vec<Node>,
    glow_color: Option<String>,
    intensity: Option<GlowIntensity>,
    attrs: Attrs,
}

impl GlowCard {
    /// Card wrapping `content`.
    pub fn new<I, N>(content: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Self {
            content: content.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Glow colour (default `var(--bs-primary)`).
    #[must_use]
    pub fn glow_color(mut self, color: impl Into<String>) -> Self {
        self.glow_color = Some(color.into());
        self
    }

    /// Glow strength (default medium).
    #[must_use]
    pub fn intensity(mut self, intensity: GlowIntensity) -> Self {
        self.intensity = Some(intensity);
        self
    }
}

impl Component for GlowCard {
    const NAME: &'static str = "GlowCard";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let color = cfg.text("glow_color", self.glow_color.as_deref(), "var(--bs-primary)");
        let intensity = cfg.resolve("intensity", self.intensity, GlowIntensity::Medium);
        let level = format!("glow-{intensity}");

        self.attrs
            .wrap(
                el("div").children(self.content),
                &["fs-comm-glow-card", "card", level.as_str()],
                &format!("--glow-color: {color};"),
            )
            .into()
    }
}

/// A pricing tier with a feature list and call to action.
#[derive(Debug, Clone)]
pub struct PricingCard {
    title: String,
    price: String,
    period: Option<String>,
    features: Vec<String>,
    cta_text: Option<String>,
    cta_href: Option<String>,
    cta_variant: Option<String>,
    highlighted: Option<bool>,
    attrs: Attrs,
}

impl PricingCard {
    /// Tier named `title` costing `price`.
    pub fn new(title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            period: None,
            features: Vec::new(),
            cta_text: None,
            cta_href: None,
            cta_variant: None,
            highlighted: None,
            attrs: Attrs::default(),
        }
    }

    /// Billing period (default `month`).
    #[must_use]
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Feature bullet points.
    #[must_use]
    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Button label (default `Get Started`).
    #[must_use]
    pub fn cta_text(mut self, text: impl Into<String>) -> Self {
        self.cta_text = Some(text.into());
        self
    }

    /// Button link (default `#`).
    #[must_use]
    pub fn cta_href(mut self, href: impl Into<String>) -> Self {
        self.cta_href = Some(href.into());
        self
    }

    /// Bootstrap button variant, e.g. `outline-primary`.
    ///
    /// Defaults to `primary` when highlighted and `outline-primary` otherwise.
    #[must_use]
    pub fn cta_variant(mut self, variant: impl Into<String>) -> Self {
        self.cta_variant = Some(variant.into());
        self
    }

    /// Mark as the recommended tier.
    #[must_use]
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = Some(highlighted);
        self
    }
}

impl Component for PricingCard {
    const NAME: &'static str = "PricingCard";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let highlighted = cfg.resolve("highlighted", self.highlighted, false);
        let period = cfg.text("period", self.period.as_deref(), "month");
        let cta_text = cfg.text("cta_text", self.cta_text.as_deref(), "Get Started");
        let cta_href = cfg.text("cta_href", self.cta_href.as_deref(), "#");
        let cta_variant = cfg.text(
            "cta_variant",
            self.cta_variant.as_deref(),
            if highlighted { "primary" } else { "outline-primary" },
        );

        let badge = highlighted.then(|| {
            el("div")
                .class("text-center mb-2")
                .child(el("span").class("badge bg-primary").child("RECOMMENDED"))
        });

        let features = (!self.features.is_empty()).then(|| {
            el("ul")
                .class("list-unstyled mb-4")
                .children(self.features.iter().map(|feature| {
                    el("li")
                        .class("mb-2")
                        .child(el("span").class("text-success me-2").child("✓ "))
                        .child(feature)
                }))
        });

        let cta = el("a")
            .class(format!("btn btn-{cta_variant} w-100"))
            .attr("href", cta_href)
            .attr("role", "button")
            .child(cta_text);

        let body = el("div")
            .class("card-body d-flex flex-column")
            .child(badge)
            .child(
                el("h3")
                    .class("card-title text-center mb-3")
                    .child(self.title),
            )
            .child(
                el("div")
                    .class("text-center mb-4")
                    .child(el("h2").class("display-4 mb-0").child(self.price))
                    .child(el("span").class("text-muted").child(format!("/ {period}"))),
            )
            .child(features)
            .child(cta);

        let border = if highlighted { "border-primary" } else { "" };
        self.attrs
            .wrap(
                el("div").child(body),
                &["fs-comm-pricing-card", "card", "h-100", border],
                "",
            )
            .into()
    }
}

/// A user profile with avatar, name, title, bio and actions.
#[derive(Debug, Clone)]
pub struct ProfileCard {
    name: String,
    title: Option<String>,
    avatar: Option<String>,
    bio: Option<String>,
    actions: Vec<Node>,
    attrs: Attrs,
}

impl ProfileCard {
    /// Profile for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            avatar: None,
            bio: None,
            actions: Vec::new(),
            attrs: Attrs::default(),
        }
    }

    /// Role or job title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Avatar image URL (a placeholder is used otherwise).
    #[must_use]
    pub fn avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar = Some(url.into());
        self
    }

    /// Short bio.
    #[must_use]
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Add an action button or link.
    #[must_use]
    pub fn action(mut self, action: impl Into<Node>) -> Self {
        self.actions.push(action.into());
        self
    }
}

impl Component for ProfileCard {
    const NAME: &'static str = "ProfileCard";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let avatar = cfg.text("avatar", self.avatar.as_deref(), AVATAR_PLACEHOLDER);
        let title = cfg.optional_text("title", self.title.as_deref());
        let bio = cfg.optional_text("bio", self.bio.as_deref());

        let avatar = el("img")
            .attr("src", avatar)
            .attr("alt", self.name.as_str())
            .class("rounded-circle mb-3")
            .style("width: 100px; height: 100px; object-fit: cover;");
        let actions = (!self.actions.is_empty()).then(|| {
            el("div")
                .class("mt-3 d-flex gap-2 justify-content-center")
                .children(self.actions)
        });

        let body = el("div")
            .class("card-body")
            .child(avatar)
            .child(el("h5").class("card-title mb-1").child(self.name))
            .child(title.map(|t| el("p").class("text-muted mb-2").child(t)))
            .child(bio.map(|b| el("p").class("card-text small").child(b)))
            .child(actions);

        self.attrs
            .wrap(
                el("div").child(body),
                &["fs-comm-profile-card", "card", "text-center"],
                "",
            )
            .into()
    }
}

/// A dashboard metric with optional trend and icon.
#[derive(Debug, Clone)]
pub struct StatCard {
    title: String,
    value: String,
    trend: Option<String>,
    trend_positive: Option<bool>,
    icon: Option<String>,
    variant: Option<Variant>,
    attrs: Attrs,
}

impl StatCard {
    /// Metric `title` showing `value`.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            trend: None,
            trend_positive: None,
            icon: None,
            variant: None,
            attrs: Attrs::default(),
        }
    }

    /// Trend label such as `+12.5%`.
    #[must_use]
    pub fn trend(mut self, trend: impl Into<String>) -> Self {
        self.trend = Some(trend.into());
        self
    }

    /// Whether the trend is good news (default true).
    #[must_use]
    pub fn trend_positive(mut self, positive: bool) -> Self {
        self.trend_positive = Some(positive);
        self
    }

    /// Icon text or emoji.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Accent colour (default primary).
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }
}

impl Component for StatCard {
    const NAME: &'static str = "StatCard";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let variant = cfg.resolve("variant", self.variant, Variant::Primary);
        let positive = cfg.resolve("trend_positive", self.trend_positive, true);
        let icon = cfg.optional_text("icon", self.icon.as_deref());
        let trend = cfg.optional_text("trend", self.trend.as_deref());

        let icon = icon.map(|i| {
            el("div")
                .class(format!("text-{variant} mb-2"))
                .child(el("span").class("fs-4").child(i))
        });
        let trend = trend.map(|t| {
            let (color, arrow) = if positive {
                ("success", "↑")
            } else {
                ("danger", "↓")
            };
            el("span")
                .class(format!("badge bg-{color}-subtle text-{color} ms-2"))
                .child(format!("{arrow} {t}"))
        });

        let body = el("div")
            .class("card-body")
            .child(icon)
            .child(el("h6").class("text-muted mb-2").child(self.title))
            .child(
                el("div")
                    .class("d-flex align-items-center")
                    .child(el("h2").class("mb-0 d-inline").child(self.value))
                    .child(trend),
            );

        self.attrs
            .wrap(el("div").child(body), &["fs-comm-stat-card", "card"], "")
            .into()
    }
}

/// A chronological event with icon badge and timestamp.
#[derive(Debug, Clone)]
pub struct TimelineCard {
    title: String,
    description: Option<String>,
    timestamp: Option<String>,
    icon: Option<String>,
    variant: Option<Variant>,
    attrs: Attrs,
}

impl TimelineCard {
    /// Event titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            timestamp: None,
            icon: None,
            variant: None,
            attrs: Attrs::default(),
        }
    }

    /// Event description.
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Display timestamp such as `2 hours ago`.
    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Icon text or emoji.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Badge colour (default primary).
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }
}

impl Component for TimelineCard {
    const NAME: &'static str = "TimelineCard";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let variant = cfg.resolve("variant", self.variant, Variant::Primary);
        let icon = cfg.optional_text("icon", self.icon.as_deref());
        let timestamp = cfg.optional_text("timestamp", self.timestamp.as_deref());
        let description = cfg.optional_text("description", self.description.as_deref());

        let badge = icon.map(|i| {
            el("div")
                .class(format!(
                    "fs-comm-timeline-icon bg-{variant} text-white rounded-circle d-flex \
                     align-items-center justify-content-center"
                ))
                .style("width: 40px; height: 40px; position: absolute; left: -20px; top: 20px;")
                .child(el("span").class("fs-5").child(i))
        });

        let body = el("div")
            .class("card-body")
            .style("margin-left: 20px;")
            .child(
                el("div")
                    .class("mb-2")
                    .child(el("h5").class("card-title mb-1").child(self.title))
                    .child(timestamp.map(|t| el("small").class("text-muted").child(t))),
            )
            .child(description.map(|d| el("p").class("card-text mb-0").child(d)));

        self.attrs
            .wrap(
                el("div").child(badge).child(body),
                &["fs-comm-timeline-card", "card"],
                "position: relative; margin-left: 20px; \
                 border-left: 2px solid var(--bs-border-color);",
            )
            .into()
    }
}

caller_attrs!(
    FlipCard,
    TiltCard,
    RevealCard,
    GlowCard,
    PricingCard,
    ProfileCard,
    StatCard,
    TimelineCard,
);
