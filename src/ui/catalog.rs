//! Name -> demo constructor table covering every component.

use crate::defaults::DefaultsRegistry;
use crate::ui::components::{
    AnimatedInput, ButtonSize, Component, DotsLoader, FabPosition, FlipCard, FloatingActionButton,
    GlowCard, GlowIntensity, Gradient, GradientButton, IconButton, MegaMenuItem, MegaMenuNavbar,
    MenuEntry, MorphingToggler, NavItem, ParallaxSection, PolygonLoader, PricingCard, ProfileCard,
    ProgressRing, PulseLoader, PulseSize, RevealCard, RevealDirection, RingLoader, ScrollReveal,
    SearchBar, ShadowLoader, SkeletonLoader, SlideMenuNavbar, SlideToggler, StatCard, TagInput,
    TiltCard, TimelineCard, TypewriterLoader, Variant, VerticalMegaMenu, WaveLoader,
};
use crate::ui::markup::{Node, el};

/// Builds a demo instance of one component.
pub type DemoFn = fn(&DefaultsRegistry) -> Node;

/// Every component with a representative demo, grouped by family.
pub const CATALOG: &[(&str, DemoFn)] = &[
    (FlipCard::NAME, |d| {
        FlipCard::new(
            el("div").class("card-body").child("Hover me"),
            el("div").class("card-body").child("Back side"),
        )
        .render(d)
    }),
    (TiltCard::NAME, |d| {
        TiltCard::new([el("div").class("card-body").child("Tilt on hover")]).render(d)
    }),
    (RevealCard::NAME, |d| {
        RevealCard::new("https://picsum.photos/400/300", "Mountain Retreat")
            .description("Hover to reveal details")
            .button(el("a").class("btn btn-light btn-sm").attr("href", "#").child("Book"))
            .render(d)
    }),
    (GlowCard::NAME, |d| {
        GlowCard::new([el("div").class("card-body").child("Glowing card")])
            .intensity(GlowIntensity::High)
            .render(d)
    }),
    (PricingCard::NAME, |d| {
        PricingCard::new("Pro", "$29")
            .features(["Unlimited projects", "Priority support", "Analytics"])
            .highlighted(true)
            .render(d)
    }),
    (ProfileCard::NAME, |d| {
        ProfileCard::new("Jane Doe")
            .title("Senior Developer")
            .bio("Builds fast, accessible interfaces.")
            .action(el("a").class("btn btn-primary btn-sm").attr("href", "#").child("Follow"))
            .render(d)
    }),
    (StatCard::NAME, |d| {
        StatCard::new("Revenue", "$45,231")
            .trend("+12.5%")
            .icon("$")
            .variant(Variant::Success)
            .render(d)
    }),
    (TimelineCard::NAME, |d| {
        TimelineCard::new("Project launched")
            .description("Version 1.0 is live.")
            .timestamp("2 hours ago")
            .icon("*")
            .render(d)
    }),
    (DotsLoader::NAME, |d| DotsLoader::new().render(d)),
    (RingLoader::NAME, |d| RingLoader::new().render(d)),
    (PulseLoader::NAME, |d| PulseLoader::new().size(PulseSize::Lg).render(d)),
    (WaveLoader::NAME, |d| WaveLoader::new().variant(Variant::Info).render(d)),
    (SkeletonLoader::NAME, |d| SkeletonLoader::new().avatar(true).render(d)),
    (ProgressRing::NAME, |d| ProgressRing::new(75.0).render(d)),
    (PolygonLoader::NAME, |d| PolygonLoader::new().render(d)),
    (TypewriterLoader::NAME, |d| TypewriterLoader::new().render(d)),
    (ShadowLoader::NAME, |d| ShadowLoader::new().render(d)),
    (MegaMenuNavbar::NAME, |d| {
        let products = MegaMenuItem::new(
            "Products",
            [
                el("div").child(el("h6").child("Laptops")),
                el("div").child(el("h6").child("Phones")),
                el("div").child(el("h6").child("Audio")),
            ],
        )
        .render(d);
        MegaMenuNavbar::new()
            .brand("Acme")
            .items([NavItem::link("Home", "/"), NavItem::from(products)])
            .render(d)
    }),
    (MegaMenuItem::NAME, |d| {
        el("ul")
            .class("navbar-nav")
            .child(MegaMenuItem::new("More", ["Panel content"]).render(d))
            .into()
    }),
    (SlideMenuNavbar::NAME, |d| {
        SlideMenuNavbar::new([("Home", "/"), ("Docs", "/docs")])
            .brand("Acme")
            .render(d)
    }),
    (SlideToggler::NAME, |d| SlideToggler::new("slide-menu").render(d)),
    (MorphingToggler::NAME, |d| MorphingToggler::new("mainNav").render(d)),
    (VerticalMegaMenu::NAME, |d| {
        VerticalMegaMenu::new([
            MenuEntry::new("Dashboard").icon("speedometer2").active(true),
            MenuEntry::new("Products")
                .icon("box")
                .subtitle("Catalogue")
                .children([MenuEntry::new("Laptops"), MenuEntry::new("Phones")]),
        ])
        .render(d)
    }),
    (GradientButton::NAME, |d| {
        GradientButton::new("Get Started")
            .gradient(Gradient::Blue)
            .size(ButtonSize::Lg)
            .render(d)
    }),
    (IconButton::NAME, |d| IconButton::new("+").text("Add").render(d)),
    (FloatingActionButton::NAME, |d| {
        FloatingActionButton::new("+")
            .position(FabPosition::BottomRight)
            .render(d)
    }),
    (AnimatedInput::NAME, |d| {
        AnimatedInput::new("Email Address", "email")
            .input_type("email")
            .render(d)
    }),
    (SearchBar::NAME, |d| SearchBar::new().render(d)),
    (TagInput::NAME, |d| {
        TagInput::new("skills").tags(["Rust", "Axum"]).render(d)
    }),
    (ScrollReveal::NAME, |d| {
        ScrollReveal::new([el("p").child("Revealed on scroll")])
            .direction(RevealDirection::Up)
            .render(d)
    }),
    (ParallaxSection::NAME, |d| {
        ParallaxSection::new(
            "https://picsum.photos/1200/600",
            [el("h2").class("text-white").child("Parallax")],
        )
        .height("300px")
        .render(d)
    }),
];

/// Every component name, sorted and distinct.
#[must_use]
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = CATALOG.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Demo for the component called `name`.
#[must_use]
pub fn demo(name: &str, defaults: &DefaultsRegistry) -> Option<Node> {
    CATALOG
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, build)| build(defaults))
}

/// Every demo, in catalogue order.
#[must_use]
pub fn demos(defaults: &DefaultsRegistry) -> Vec<(&'static str, Node)> {
    CATALOG
        .iter()
        .map(|(name, build)| (*name, build(defaults)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_sorted_and_distinct() {
        let names = names();
        assert_eq!(names.len(), CATALOG.len());
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(names.len(), 31);
    }

    #[test]
    fn test_every_demo_renders() {
        let defaults = DefaultsRegistry::new();
        for (name, node) in demos(&defaults) {
            assert!(!node.render().is_empty(), "{name} rendered nothing");
        }
    }

    #[test]
    fn test_demo_lookup() {
        let defaults = DefaultsRegistry::new();
        assert!(demo("FlipCard", &defaults).is_some());
        assert!(demo("Nope", &defaults).is_none());
    }

    #[test]
    fn test_builtin_registry_components_are_catalogued() {
        let names = names();
        for component in DefaultsRegistry::new().list() {
            assert!(names.iter().any(|n| *n == component), "{component} missing");
        }
    }
}
