//! Markup node tree and HTML serialisation.
//!
//! Components build [`Node`] trees out of [`Element`]s and text. The tree is
//! plain data: it can be inspected in tests (attributes, classes, children)
//! and rendered to an HTML string for the host page.

use std::fmt::{self, Write as _};

/// Elements that never carry children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Elements whose body is emitted verbatim.
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// `name="value"`.
    Text(String),
    /// Bare boolean attribute (`required`, `disabled`).
    Flag,
}

/// An HTML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(String, AttrValue)>,
    children: Vec<Node>,
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Node {
    /// An element.
    Element(Element),
    /// Escaped text.
    Text(String),
    /// Sibling nodes without a wrapper.
    Fragment(Vec<Node>),
    /// Renders nothing.
    #[default]
    Empty,
}

/// Start building an element.
#[must_use]
pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

/// Join class fragments with single spaces, skipping empty ones.
///
/// Each fragment may itself hold several classes; surrounding whitespace is
/// trimmed so `merge_classes(&["a", " ", "b c"])` yields `"a b c"`.
#[must_use]
pub fn merge_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Append a caller style after a component's own declarations.
#[must_use]
pub fn join_style(base: &str, extra: &str) -> String {
    format!("{} {}", base.trim(), extra.trim()).trim().to_string()
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value under the same name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name.into(), AttrValue::Text(value.into()));
        self
    }

    /// Set an attribute only when `value` is `Some`.
    #[must_use]
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Set a bare boolean attribute when `on` is true.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.set(name.into(), AttrValue::Flag);
        }
        self
    }

    /// Set the `class` attribute. Empty input leaves the element unchanged.
    #[must_use]
    pub fn class(self, classes: impl Into<String>) -> Self {
        let classes = classes.into();
        if classes.trim().is_empty() {
            self
        } else {
            self.attr("class", classes)
        }
    }

    /// Set the `style` attribute. Empty input leaves the element unchanged.
    #[must_use]
    pub fn style(self, style: impl Into<String>) -> Self {
        let style = style.into();
        if style.trim().is_empty() {
            self
        } else {
            self.attr("style", style)
        }
    }

    /// Append one child. [`Node::Empty`] children are dropped.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        let node = node.into();
        if !matches!(node, Node::Empty) {
            self.children.push(node);
        }
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children<I, N>(self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        nodes.into_iter().fold(self, |e, n| e.child(n))
    }

    fn set(&mut self, name: String, value: AttrValue) {
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Text value of an attribute. Flags report as `Some("")`.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| match v {
                AttrValue::Text(s) => s.as_str(),
                AttrValue::Flag => "",
            })
    }

    /// Whether a boolean attribute is present.
    #[must_use]
    pub fn has_flag(&self, name: &str) -> bool {
        self.attrs
            .iter()
            .any(|(n, v)| n == name && *v == AttrValue::Flag)
    }

    /// Individual classes from the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or("").split_whitespace()
    }

    /// Whether the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Direct children.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Direct element children, flattening fragments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().flat_map(Node::top_elements)
    }
}

impl Node {
    /// Text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Render the tree as HTML.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The element if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    fn top_elements(&self) -> Vec<&Element> {
        match self {
            Self::Element(e) => vec![e],
            Self::Fragment(nodes) => nodes.iter().flat_map(Node::top_elements).collect(),
            Self::Text(_) | Self::Empty => Vec::new(),
        }
    }

    /// Every element in the tree, depth first, including this one.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Element>) {
        match self {
            Self::Element(e) => {
                out.push(e);
                for c in &e.children {
                    c.collect(out);
                }
            }
            Self::Fragment(nodes) => {
                for n in nodes {
                    n.collect(out);
                }
            }
            Self::Text(_) | Self::Empty => {}
        }
    }

    /// Every element carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Every element with tag `tag`.
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.tag == tag)
            .collect()
    }

    /// Concatenated text content.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(t),
            Self::Element(e) => {
                for c in &e.children {
                    c.push_text(out);
                }
            }
            Self::Fragment(nodes) => {
                for n in nodes {
                    n.push_text(out);
                }
            }
            Self::Empty => {}
        }
    }

    fn write_html(&self, out: &mut String, raw: bool) {
        match self {
            Self::Text(t) if raw => out.push_str(t),
            Self::Text(t) => escape_into(out, t, false),
            Self::Element(e) => e.write_html(out),
            Self::Fragment(nodes) => {
                for n in nodes {
                    n.write_html(out, raw);
                }
            }
            Self::Empty => {}
        }
    }
}

impl Element {
    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let AttrValue::Text(v) = value {
                out.push_str("=\"");
                escape_into(out, v, true);
                out.push('"');
            }
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        let raw = RAW_TEXT_TAGS.contains(&self.tag);
        for child in &self.children {
            child.write_html(out, raw);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_html(&mut out, false);
        f.write_str(&out)
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Node {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Empty, Into::into)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Fragment(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_classes_skips_empty() {
        assert_eq!(merge_classes(&["a", "", "  ", "b c"]), "a b c");
        assert_eq!(merge_classes(&[]), "");
    }

    #[test]
    fn test_join_style() {
        assert_eq!(join_style("height: 1px;", ""), "height: 1px;");
        assert_eq!(
            join_style("height: 1px;", "color: red;"),
            "height: 1px; color: red;"
        );
    }

    #[test]
    fn test_render_escapes_text_and_attributes() {
        let node: Node = el("div")
            .attr("title", "a \"quoted\" <tag>")
            .child("1 < 2 & 3")
            .into();
        assert_eq!(
            node.render(),
            r#"<div title="a &quot;quoted&quot; &lt;tag&gt;">1 &lt; 2 &amp; 3</div>"#
        );
    }

    #[test]
    fn test_void_and_raw_elements() {
        let input: Node = el("input").attr("type", "text").flag("required", true).into();
        assert_eq!(input.render(), r#"<input type="text" required>"#);

        let script: Node = el("script").child("if (a < b) {}").into();
        assert_eq!(script.render(), "<script>if (a < b) {}</script>");
    }

    #[test]
    fn test_empty_children_and_attrs_are_dropped() {
        let node: Node = el("div")
            .class("")
            .style("  ")
            .child(Node::Empty)
            .child(None::<Element>)
            .into();
        assert_eq!(node.render(), "<div></div>");
    }

    #[test]
    fn test_attr_replaces_previous_value() {
        let e = el("a").attr("href", "#").attr("href", "/x");
        assert_eq!(e.get_attr("href"), Some("/x"));
        let node: Node = e.into();
        assert_eq!(node.render(), r#"<a href="/x"></a>"#);
    }

    #[test]
    fn test_queries() {
        let node: Node = el("div")
            .class("outer")
            .child(el("span").class("inner x").child("hi"))
            .child(Node::Fragment(vec![el("span").class("inner").into()]))
            .into();
        assert_eq!(node.find_by_class("inner").len(), 2);
        assert_eq!(node.find_by_tag("span").len(), 2);
        assert_eq!(node.text_content(), "hi");
        assert_eq!(node.as_element().unwrap().child_elements().count(), 2);
    }
}
