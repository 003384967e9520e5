//! Community UI components.
//!
//! Each component is a props struct with builder methods and a
//! [`Component::render`] that resolves its optional parameters through the
//! [`DefaultsRegistry`] before building a markup tree. Classes carry the
//! `fs-comm-` prefix targeted by the packaged stylesheets and sit on top of
//! Bootstrap 5.
//!
//! # Components
//!
//! - Cards: [`FlipCard`], [`TiltCard`], [`RevealCard`], [`GlowCard`],
//!   [`PricingCard`], [`ProfileCard`], [`StatCard`], [`TimelineCard`]
//! - Loaders: [`DotsLoader`], [`RingLoader`], [`PulseLoader`], [`WaveLoader`],
//!   [`SkeletonLoader`], [`ProgressRing`], [`PolygonLoader`],
//!   [`TypewriterLoader`], [`ShadowLoader`]
//! - Navbars: [`MegaMenuNavbar`], [`MegaMenuItem`], [`SlideMenuNavbar`],
//!   [`SlideToggler`], [`MorphingToggler`], [`VerticalMegaMenu`]
//! - Buttons: [`GradientButton`], [`IconButton`], [`FloatingActionButton`]
//! - Forms: [`AnimatedInput`], [`SearchBar`], [`TagInput`]
//! - Effects: [`ScrollReveal`], [`ParallaxSection`]

#[macro_use]
mod macros;

mod buttons;
mod cards;
mod effects;
mod forms;
mod loaders;
mod navbars;
mod tokens;

use crate::defaults::DefaultsRegistry;
use crate::ui::markup::{Element, Node, join_style, merge_classes};

pub use buttons::{FloatingActionButton, GradientButton, IconButton};
pub use cards::{
    FlipCard, GlowCard, PricingCard, ProfileCard, RevealCard, StatCard, TiltCard, TimelineCard,
};
pub use effects::{ParallaxSection, ScrollReveal};
pub use forms::{AnimatedInput, SearchBar, TagInput};
pub use loaders::{
    DotsLoader, PolygonLoader, ProgressRing, PulseLoader, RingLoader, ShadowLoader,
    SkeletonLoader, TypewriterLoader, WaveLoader,
};
pub use navbars::{
    MegaMenuItem, MegaMenuNavbar, MenuEntry, MorphingToggler, NavItem, SlideMenuNavbar,
    SlideToggler, VerticalMegaMenu,
};
pub use tokens::{
    ButtonSize, FabPosition, Gradient, GlowIntensity, IconPosition, PulseSize, RevealDirection,
    SlidePosition, UnknownToken, Variant,
};

/// A renderable component.
pub trait Component {
    /// Registry key for this component's defaults.
    const NAME: &'static str;

    /// Resolve parameters against `defaults` and build the markup tree.
    fn render(self, defaults: &DefaultsRegistry) -> Node;
}

/// Caller-supplied classes, style and attributes.
///
/// Classes are merged after the component's own, style is appended after the
/// component's declarations, other attributes are set last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    pub(crate) cls: String,
    pub(crate) style: String,
    pub(crate) extra: Vec<(String, String)>,
}

impl Attrs {
    /// Finish a root element: merged classes, joined style, extra attributes.
    pub(crate) fn wrap(self, element: Element, classes: &[&str], style: &str) -> Element {
        let mut all = classes.to_vec();
        all.push(self.cls.as_str());
        let element = element
            .class(merge_classes(&all))
            .style(join_style(style, &self.style));
        self.extra
            .into_iter()
            .fold(element, |e, (name, value)| e.attr(name, value))
    }

    /// Only the extra attributes, for components that forward them to an
    /// inner element.
    pub(crate) fn extras_onto(extra: Vec<(String, String)>, element: Element) -> Element {
        extra
            .into_iter()
            .fold(element, |e, (name, value)| e.attr(name, value))
    }
}
