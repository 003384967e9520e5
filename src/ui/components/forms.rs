//! Form controls.
//!
//! Caller classes land on the outer wrapper; caller style and attributes are
//! forwarded to the `<input>` itself.

use super::{Attrs, Component};
use crate::defaults::DefaultsRegistry;
use crate::ui::markup::{Element, Node, el, merge_classes};

const TAG_INPUT_SCRIPT: &str = r#"
document.querySelectorAll('.fs-comm-tag-input').forEach(container => {
    if (container.dataset.fsCommInit) return;
    container.dataset.fsCommInit = 'true';
    const input = container.querySelector('input[type="text"]');
    const hidden = container.querySelector('input[type="hidden"]');
    const tagsDiv = container.querySelector('.tags-container');

    const updateHidden = () => {
        hidden.value = Array.from(tagsDiv.querySelectorAll('.badge'))
            .map(b => b.dataset.tag)
            .join(',');
    };

    const addTag = (tag) => {
        const badge = document.createElement('span');
        badge.className = 'badge bg-primary me-2 mb-2 d-inline-flex align-items-center';
        badge.dataset.tag = tag;
        badge.textContent = tag;
        const close = document.createElement('button');
        close.type = 'button';
        close.className = 'btn-close btn-close-white ms-2';
        close.style.fontSize = '0.7rem';
        close.onclick = () => { badge.remove(); updateHidden(); };
        badge.appendChild(close);
        tagsDiv.appendChild(badge);
        updateHidden();
    };

    input.addEventListener('keypress', (e) => {
        if (e.key !== 'Enter') return;
        e.preventDefault();
        const tag = input.value.trim();
        if (tag) {
            addTag(tag);
            input.value = '';
        }
    });

    container.querySelectorAll('.btn-close').forEach(btn => {
        btn.onclick = (e) => {
            e.target.closest('.badge').remove();
            updateHidden();
        };
    });
});
"#;

/// Forward caller style and attributes onto `input`, returning the caller
/// classes for the wrapper.
fn split_attrs(attrs: Attrs, input: Element) -> (String, Element) {
    let Attrs { cls, style, extra } = attrs;
    (cls, Attrs::extras_onto(extra, input.style(style)))
}

/// Text input whose label floats above it on focus.
///
/// # Example
///
/// ```rust
/// use community_ui::defaults::DefaultsRegistry;
/// use community_ui::ui::components::{AnimatedInput, Component};
///
/// let html = AnimatedInput::new("Email Address", "email")
///     .input_type("email")
///     .required(true)
///     .render(&DefaultsRegistry::new())
///     .render();
/// assert!(html.contains(r#"id="input-email""#));
/// assert!(html.contains(r#"<label for="input-email">Email Address</label>"#));
/// ```
#[derive(Debug, Clone)]
pub struct AnimatedInput {
    label: String,
    name: String,
    input_type: Option<String>,
    placeholder: Option<String>,
    value: Option<String>,
    required: bool,
    attrs: Attrs,
}

impl AnimatedInput {
    /// Input `name` labelled `label`.
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            input_type: None,
            placeholder: None,
            value: None,
            required: false,
            attrs: Attrs::default(),
        }
    }

    /// HTML input type (default `text`).
    #[must_use]
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    /// Placeholder; the label is used when absent.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Mark the field required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

impl Component for AnimatedInput {
    const NAME: &'static str = "AnimatedInput";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let input_type = cfg.text("input_type", self.input_type.as_deref(), "text");
        let placeholder = cfg
            .optional_text("placeholder", self.placeholder.as_deref())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| self.label.clone());

        let input = el("input")
            .attr("type", input_type)
            .attr("name", self.name.as_str())
            .attr("id", format!("input-{}", self.name))
            .attr("placeholder", placeholder)
            .attr_opt("value", self.value)
            .flag("required", self.required)
            .class("form-control");
        // A caller id replaces the generated one.
        let (cls, input) = split_attrs(self.attrs, input);
        let input_id = input.get_attr("id").unwrap_or_default().to_string();

        el("div")
            .class(merge_classes(&["fs-comm-animated-input", "form-floating", cls.as_str()]))
            .child(input)
            .child(el("label").attr("for", input_id).child(self.label))
            .into()
    }
}

/// Search form: input plus submit button in an input group.
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    placeholder: Option<String>,
    name: Option<String>,
    action: Option<String>,
    method: Option<String>,
    attrs: Attrs,
}

impl SearchBar {
    /// `GET /search?q=...` form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder (default `Search...`).
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Query parameter name (default `q`).
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Form action URL (default `/search`).
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// HTTP method (default `GET`).
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

impl Component for SearchBar {
    const NAME: &'static str = "SearchBar";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let cfg = defaults.resolver(Self::NAME);
        let placeholder = cfg.text("placeholder", self.placeholder.as_deref(), "Search...");
        let name = cfg.text("name", self.name.as_deref(), "q");
        let action = cfg.text("action", self.action.as_deref(), "/search");
        let method = cfg.text("method", self.method.as_deref(), "GET");

        let input = el("input")
            .attr("type", "search")
            .attr("name", name)
            .attr("placeholder", placeholder)
            .class("form-control");
        let (cls, input) = split_attrs(self.attrs, input);
        let button = el("button")
            .attr("type", "submit")
            .class("btn btn-primary")
            .child(el("span").class("fs-5").child("🔍"));

        el("form")
            .attr("action", action)
            .attr("method", method)
            .class(merge_classes(&["fs-comm-search-bar", cls.as_str()]))
            .child(el("div").class("input-group").child(input).child(button))
            .into()
    }
}

/// Text input collecting a list of tags, mirrored into a hidden
/// comma-separated `{name}_tags` field.
#[derive(Debug, Clone)]
pub struct TagInput {
    name: String,
    tags: Vec<String>,
    placeholder: Option<String>,
    attrs: Attrs,
}

impl TagInput {
    /// Tag input named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            placeholder: None,
            attrs: Attrs::default(),
        }
    }

    /// Initial tags.
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Placeholder (default `Add tag...`).
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

impl Component for TagInput {
    const NAME: &'static str = "TagInput";

    fn render(self, defaults: &DefaultsRegistry) -> Node {
        let placeholder =
            defaults
                .resolver(Self::NAME)
                .text("placeholder", self.placeholder.as_deref(), "Add tag...");

        let badges = self.tags.iter().map(|tag| {
            el("span")
                .class("badge bg-primary me-2 mb-2 d-inline-flex align-items-center")
                .attr("data-tag", tag.as_str())
                .child(tag)
                .child(
                    el("button")
                        .attr("type", "button")
                        .class("btn-close btn-close-white ms-2")
                        .style("font-size: 0.7rem;"),
                )
        });
        let tags = el("div").class("tags-container mb-2").children(badges);

        let input = el("input")
            .attr("type", "text")
            .attr("name", self.name.as_str())
            .attr("placeholder", placeholder)
            .class("form-control");
        let (cls, input) = split_attrs(self.attrs, input);
        let hidden = el("input")
            .attr("type", "hidden")
            .attr("name", format!("{}_tags", self.name))
            .attr("value", self.tags.join(","));

        el("div")
            .class(merge_classes(&["fs-comm-tag-input", cls.as_str()]))
            .child(tags)
            .child(input)
            .child(hidden)
            .child(el("script").child(TAG_INPUT_SCRIPT))
            .into()
    }
}

caller_attrs!(AnimatedInput, SearchBar, TagInput);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animated_input_defaults() {
        let node = AnimatedInput::new("Full Name", "name").render(&DefaultsRegistry::new());
        let root = node.as_element().unwrap();
        assert_eq!(root.get_attr("class"), Some("fs-comm-animated-input form-floating"));
        let input = node.find_by_tag("input")[0];
        assert_eq!(input.get_attr("type"), Some("text"));
        assert_eq!(input.get_attr("placeholder"), Some("Full Name"));
        assert_eq!(input.get_attr("value"), None);
        assert!(!input.has_flag("required"));
    }

    #[test]
    fn test_animated_input_forwards_extras_to_input() {
        let node = AnimatedInput::new("Email", "email")
            .cls("mb-3")
            .style("max-width: 20rem;")
            .attr("id", "custom")
            .attr("hx-post", "/validate")
            .required(true)
            .render(&DefaultsRegistry::new());
        assert!(node.as_element().unwrap().has_class("mb-3"));
        let input = node.find_by_tag("input")[0];
        assert_eq!(input.get_attr("id"), Some("custom"));
        assert_eq!(input.get_attr("hx-post"), Some("/validate"));
        assert_eq!(input.get_attr("style"), Some("max-width: 20rem;"));
        assert!(input.has_flag("required"));
        assert_eq!(node.find_by_tag("label")[0].get_attr("for"), Some("custom"));
    }

    #[test]
    fn test_search_bar() {
        let defaults = DefaultsRegistry::new();
        let node = SearchBar::new().render(&defaults);
        let root = node.as_element().unwrap();
        assert_eq!(root.tag(), "form");
        assert_eq!(root.get_attr("action"), Some("/search"));
        assert_eq!(root.get_attr("method"), Some("GET"));
        let input = node.find_by_tag("input")[0];
        assert_eq!(input.get_attr("name"), Some("q"));
        assert_eq!(input.get_attr("placeholder"), Some("Search..."));

        defaults.set("SearchBar", [("action", "/products/search")]);
        let node = SearchBar::new().render(&defaults);
        assert_eq!(node.as_element().unwrap().get_attr("action"), Some("/products/search"));
    }

    #[test]
    fn test_tag_input() {
        let node = TagInput::new("skills")
            .tags(["Rust", "Axum"])
            .render(&DefaultsRegistry::new());
        assert_eq!(node.find_by_class("badge").len(), 2);
        let hidden = node
            .find_by_tag("input")
            .into_iter()
            .find(|i| i.get_attr("type") == Some("hidden"))
            .unwrap();
        assert_eq!(hidden.get_attr("name"), Some("skills_tags"));
        assert_eq!(hidden.get_attr("value"), Some("Rust,Axum"));
        assert_eq!(node.find_by_tag("script").len(), 1);
    }

    #[test]
    fn test_tag_input_empty() {
        let node = TagInput::new("t").render(&DefaultsRegistry::new());
        assert!(node.find_by_class("badge").is_empty());
        assert!(node.render().contains(r#"placeholder="Add tag...""#));
    }
}
