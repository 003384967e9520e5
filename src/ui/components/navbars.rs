//! Navigation components.

use super::{Attrs, Component, SlidePosition};
use crate::defaults::DefaultsRegistry;
use crate::ui::markup::{Element, Node, el};

const MEGA_COLUMNS: u32 = 3;

/// An entry in a navbar's item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    /// Plain link rendered as `li.nav-item > a.nav-link`.
    Link {
        /// Link text.
        label: String,
        /// Target URL.
        href: String,
    },
    /// Caller-built markup.
    Node(Node),
}

impl NavItem {
    /// Plain link.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    fn link_li(label: String, href: String) -> Element {
        el("li")
            .class("nav-item")
            .child(el("a").class("nav-link").attr("href", href).child(label))
    }
}

impl<L: Into<String>, H: Into<String>> From<(L, H)> for NavItem {
    fn from((label, href): (L, H)) -> Self {
        Self::link(label, href)
    }
}

impl From<Node> for NavItem {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Element> for NavItem {
    fn from(element: Element) -> Self {
        Self::Node(element.into())
    }
}

fn collect_items<I, T>(items: I) -> Vec<NavItem>
where
    I: IntoIterator<Item = T>,
    T: Into<NavItem>,
{
    items.into_iter().map(Into::into).collect()
}

/// A Bootstrap navbar whose dropdowns open as wide multi-column panels.
///
/// Items built with [`MegaMenuItem`] are already list items and are inserted
/// unchanged; links become ordinary nav links.
#[derive(Debug, Clone, Default)]
pub struct MegaMenuNavbar {
    brand: Option<String>,
    items: Vec<NavItem>,
    container_type: Option<String>,
    columns: Option<u32>,
    attrs: Attrs,
}

impl MegaMenuNavbar {
    /// Empty navbar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Brand text.
    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Navbar items.
    #[must_use]
    pub fn items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NavItem>,
    {
        self.items = collect_items(items);
        self
    }

    /// Bootstrap container class (default `container`).
    #[must_use]
    pub fn container_type(mut self, container: impl Into<String>) -> Self {
        self.container_type = Some(container.into());
        self
    }

    /// Grid columns in every mega panel.
    #[must_use]
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }
}

impl Component for MegaMenuNavbar {
    const NAME: &'static str = "MegaMenuNavbar";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let container = cfg.text("container_type", self.container_type.as_deref(), "container");
        let columns = cfg.resolve("columns", self.columns, MEGA_COLUMNS);

        let style = if columns == MEGA_COLUMNS {
            String::new()
        } else {
            format!("--fs-comm-mega-columns: {columns};")
        };

        let items = self.items.into_iter().map(|item| match item {
            NavItem::Link { label, href } => NavItem::link_li(label, href).into(),
            NavItem::Node(node) => node,
        });
        let brand = self.brand.map(|b| {
            el("a").class("navbar-brand").attr("href", "/").child(b)
        });

        let inner = el("div")
            .class(container)
            .child(brand)
            .child(el("ul").class("navbar-nav").children(items));

        self.attrs
            .wrap(
                el("nav").child(inner),
                &["fs-comm-mega-navbar", "navbar", "navbar-expand-lg"],
                &style,
            )
            .into()
    }
}

/// A dropdown that expands into a mega panel.
#[derive(Debug, Clone)]
pub struct MegaMenuItem {
    label: String,
    content: Vec<Node>,
    attrs: Attrs,
}

impl MegaMenuItem {
    /// Toggle labelled `label` revealing `content`.
    pub fn new<I, N>(label: impl Into<String>, content: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Self {
            label: label.into(),
            content: content.into_iter().map(Into::into).collect(),
            attrs: Attrs::default(),
        }
    }
}

impl Component for MegaMenuItem {
    const NAME: &'static str = "MegaMenuItem";

    fn render(self, _defaults: &DefaultsRegistry) -> Node {
        let toggle = el("a")
            .class("nav-link dropdown-toggle")
            .attr("href", "#")
            .attr("role", "button")
            .attr("data-bs-toggle", "dropdown")
            .attr("aria-expanded", "false")
            .child(self.label);
        let menu = el("div").class("dropdown-menu").child(
            el("div")
                .class("fs-comm-mega-menu-content")
                .children(self.content),
        );

        self.attrs
            .wrap(
                el("li").child(toggle).child(menu),
                &["nav-item", "dropdown", "fs-comm-mega-menu"],
                "",
            )
            .into()
    }
}

/// An off-canvas menu sliding in from a screen edge, with a click-away
/// overlay.
///
/// Opened by a [`SlideToggler`] targeting the same id.
#[derive(Debug, Clone, Default)]
pub struct SlideMenuNavbar {
    items: Vec<NavItem>,
    brand: Option<String>,
    menu_id: Option<String>,
    position: Option<SlidePosition>,
    width: Option<String>,
    attrs: Attrs,
}

impl SlideMenuNavbar {
    /// Menu listing `items`: `(label, href)` pairs or markup.
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NavItem>,
    {
        Self {
            items: collect_items(items),
            ..Self::default()
        }
    }

    /// Heading shown above the items.
    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Element id of the menu (default `slide-menu`).
    #[must_use]
    pub fn menu_id(mut self, id: impl Into<String>) -> Self {
        self.menu_id = Some(id.into());
        self
    }

    /// Edge to slide from.
    #[must_use]
    pub fn position(mut self, position: SlidePosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Panel width.
    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }
}

impl Component for SlideMenuNavbar {
    const NAME: &'static str = "SlideMenuNavbar";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let menu_id = cfg.text("menu_id", self.menu_id.as_deref(), "slide-menu");
        let position = cfg.resolve("position", self.position, SlidePosition::Left);
        let width = cfg.text("width", self.width.as_deref(), "280px");

        let overlay = el("div")
            .class("fs-comm-slide-overlay")
            .attr("id", format!("{menu_id}-overlay"));

        let brand = self
            .brand
            .map(|b| el("div").class("mb-4 text-center").child(el("h4").child(b)));
        let items = self.items.into_iter().map(|item| match item {
            NavItem::Link { label, href } => NavItem::link_li(label, href),
            NavItem::Node(node) => el("li").class("nav-item").child(node),
        });

        let menu = el("div")
            .class(format!("fs-comm-slide-menu slide-{position}"))
            .attr("id", menu_id)
            .style(format!("width: {width};"))
            .child(brand)
            .child(el("ul").class("navbar-nav flex-column").children(items));

        self.attrs
            .wrap(el("div").child(overlay).child(menu), &[], "")
            .into()
    }
}

/// Button opening a [`SlideMenuNavbar`].
#[derive(Debug, Clone)]
pub struct SlideToggler {
    target_id: String,
    label: Option<String>,
    attrs: Attrs,
}

impl SlideToggler {
    /// Toggler for the menu with id `target_id`.
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            label: None,
            attrs: Attrs::default(),
        }
    }

    /// Button text (default `Open Menu`).
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn toggle_script(target: &str) -> String {
        format!(
            "document.getElementById('{target}').classList.toggle('show'); \
             document.getElementById('{target}-overlay').classList.toggle('show');"
        )
    }
}

impl Component for SlideToggler {
    const NAME: &'static str = "SlideToggler";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let label = defaults
            .resolver(Self::NAME)
            .text("label", self.label.as_deref(), "Open Menu");

        self.attrs
            .wrap(
                el("button")
                    .attr("type", "button")
                    .attr("onclick", Self::toggle_script(&self.target_id))
                    .child(label),
                &["btn", "btn-outline-primary"],
                "",
            )
            .into()
    }
}

/// Navbar toggler whose hamburger icon morphs into a cross when open.
#[derive(Debug, Clone)]
pub struct MorphingToggler {
    target_id: String,
    attrs: Attrs,
}

impl MorphingToggler {
    /// Toggler for the collapse element with id `target_id`.
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            attrs: Attrs::default(),
        }
    }
}

impl Component for MorphingToggler {
    const NAME: &'static str = "MorphingToggler";

    fn render(self, _defaults: &DefaultsRegistry) -> Node {
        let icon = el("div").class("fs-comm-morph-toggler").children(
            ["fs-comm-morph-span-1", "fs-comm-morph-span-2", "fs-comm-morph-span-3"]
                .map(|c| el("span").class(c)),
        );

        self.attrs
            .wrap(
                el("button")
                    .attr("type", "button")
                    .attr("data-bs-toggle", "collapse")
                    .attr("data-bs-target", format!("#{}", self.target_id))
                    .attr("aria-controls", self.target_id.as_str())
                    .attr("aria-expanded", "false")
                    .attr("aria-label", "Toggle navigation")
                    .child(icon),
                &["navbar-toggler"],
                "",
            )
            .into()
    }
}

/// An item of a [`VerticalMegaMenu`], possibly with a nested submenu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuEntry {
    /// Bold label.
    pub label: String,
    /// Bootstrap Icons name, without the `bi-` prefix.
    pub icon: Option<String>,
    /// Muted second line.
    pub subtitle: Option<String>,
    /// Link target (default `#`).
    pub href: Option<String>,
    /// Submenu entries.
    pub children: Vec<MenuEntry>,
    /// Highlight as the current page.
    pub active: bool,
}

impl MenuEntry {
    /// Entry labelled `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Icon name.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Subtitle.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Link target.
    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Mark active.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Nested entries.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = MenuEntry>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    fn into_li(self) -> Element {
        let icon = self
            .icon
            .filter(|i| !i.is_empty())
            .map(|i| el("i").class(format!("bi bi-{i}")));
        let text = el("div")
            .class("menu-text")
            .child(el("strong").child(self.label))
            .child(
                self.subtitle
                    .filter(|s| !s.is_empty())
                    .map(|s| el("small").child(s)),
            );
        let link = el("a")
            .attr("href", self.href.unwrap_or_else(|| "#".to_string()))
            .class(if self.active { "active" } else { "" })
            .child(icon)
            .child(text);

        let submenu = (!self.children.is_empty())
            .then(|| el("ul").children(self.children.into_iter().map(MenuEntry::into_li)));

        el("li").child(link).child(submenu)
    }
}

/// A vertical menu whose entries fly out into nested submenus on hover.
#[derive(Debug, Clone, Default)]
pub struct VerticalMegaMenu {
    items: Vec<MenuEntry>,
    width: Option<String>,
    attrs: Attrs,
}

impl VerticalMegaMenu {
    /// Menu of `items`.
    pub fn new(items: impl IntoIterator<Item = MenuEntry>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Menu width (default `250px`).
    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }
}

impl Component for VerticalMegaMenu {
    const NAME: &'static str = "VerticalMegaMenu";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let width = defaults
            .resolver(Self::NAME)
            .text("width", self.width.as_deref(), "250px");

        self.attrs
            .wrap(
                el("ul").children(self.items.into_iter().map(MenuEntry::into_li)),
                &["fs-comm-vertical-mega"],
                &format!("width: {width};"),
            )
            .into()
    }
}

caller_attrs!(
    MegaMenuNavbar,
    MegaMenuItem,
    SlideMenuNavbar,
    SlideToggler,
    MorphingToggler,
    VerticalMegaMenu,
);
