//! Scroll and background effects.

use super::{Attrs, Component, RevealDirection};
use crate::defaults::DefaultsRegistry;
use crate::ui::markup::{Node, el};

/// Observer setup shared by every [`ScrollReveal`] on a page. Guarded so
/// repeated copies only initialise once.
const REVEAL_SCRIPT: &str = r"
if (!window.fsCommRevealInit) {
    window.fsCommRevealInit = true;
    const observer = new IntersectionObserver((entries) => {
        entries.forEach(entry => {
            if (entry.isIntersecting) {
                entry.target.classList.add('revealed');
            }
        });
    }, { threshold: 0.1 });

    const initReveals = () => {
        document.querySelectorAll('.fs-comm-reveal').forEach(el => observer.observe(el));
    };

    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', initReveals);
    } else {
        initReveals();
    }
    if (window.htmx) document.body.addEventListener('htmx:afterSwap', initReveals);
}
";

/// Reveals its content with an animation when it scrolls into view.
///
/// # Example
///
/// ```rust
/// use community_ui::defaults::DefaultsRegistry;
/// use community_ui::ui::components::{Component, RevealDirection, ScrollReveal};
///
/// let node = ScrollReveal::new(["Hello"])
///     .direction(RevealDirection::Zoom)
///     .render(&DefaultsRegistry::new());
/// assert!(node.as_element().unwrap().has_class("zoom"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScrollReveal {
    content: Vec<Node>,
    direction: Option<RevealDirection>,
    delay: Option<String>,
    duration: Option<String>,
    attrs: Attrs,
}

impl ScrollReveal {
    /// Wrap `content`.
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

    /// Direction to enter from.
    #[must_use]
    pub fn direction(mut self, direction: RevealDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Delay before the animation starts.
    #[must_use]
    pub fn delay(mut self, delay: impl Into<String>) -> Self {
        self.delay = Some(delay.into());
        self
    }

    /// Animation duration.
    #[must_use]
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

impl Component for ScrollReveal {
    const NAME: &'static str = "ScrollReveal";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let direction = cfg.resolve("direction", self.direction, RevealDirection::Up);
        let delay = cfg.text("delay", self.delay.as_deref(), "0s");
        let duration = cfg.text("duration", self.duration.as_deref(), "0.6s");

        self.attrs
            .wrap(
                el("div")
                    .children(self.content)
                    .child(el("script").child(REVEAL_SCRIPT)),
                &["fs-comm-reveal", direction.as_str()],
                &format!(
                    "--fs-comm-reveal-delay: {delay}; --fs-comm-reveal-duration: {duration};"
                ),
            )
            .into()
    }
}

/// A full-width section over a fixed background image with a darkening
/// overlay.
#[derive(Debug, Clone)]
pub struct ParallaxSection {
    content: Vec<Node>,
    img_src: String,
    height: Option<String>,
    overlay_opacity: Option<f64>,
    speed: Option<f64>,
    attrs: Attrs,
}

impl ParallaxSection {
    /// Section over `img_src` showing `content` centred.
    pub fn new<I, N>(img_src: impl Into<String>, content: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Self {
            content: content.into_iter().map(Into::into).collect(),
            img_src: img_src.into(),
            height: None,
            overlay_opacity: None,
            speed: None,
            attrs: Attrs::default(),
        }
    }

    /// Section height (default `500px`).
    #[must_use]
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Darkening overlay opacity, 0.0 to 1.0 (default 0.5).
    #[must_use]
    pub fn overlay_opacity(mut self, opacity: f64) -> Self {
        self.overlay_opacity = Some(opacity);
        self
    }

    /// Scroll speed factor exposed as `data-speed` for scripted parallax.
    #[must_use]
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }
}

impl Component for ParallaxSection {
    const NAME: &'static str = "ParallaxSection";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let height = cfg.text("height", self.height.as_deref(), "500px");
        let opacity = cfg.resolve("overlay_opacity", self.overlay_opacity, 0.5);
        let speed = cfg.resolve("speed", self.speed, 0.5);

        let overlay = el("div")
            .style(format!(
                "background: rgba(0,0,0,{opacity}); width: 100%; height: 100%; display: flex; \
                 align-items: center; justify-content: center;"
            ))
            .children(self.content);

        self.attrs
            .wrap(
                el("div").attr("data-speed", speed.to_string()).child(overlay),
                &["fs-comm-parallax-section"],
                &format!(
                    "background-image: url('{}'); height: {height};",
                    self.img_src
                ),
            )
            .into()
    }
}

caller_attrs!(ScrollReveal, ParallaxSection);
