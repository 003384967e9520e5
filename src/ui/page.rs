//! HTML page shell.

use crate::defaults::DefaultsRegistry;
use crate::ui::catalog;
use crate::ui::markup::{Node, el};

/// Bootstrap's JS bundle, needed by dropdowns and collapse togglers.
const BOOTSTRAP_BUNDLE_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

/// Full HTML document around `content`, with `head` (the host's stylesheet
/// links) in the `<head>`.
pub fn html_shell(title: &str, head: &Node, content: &str) -> String {
    let title = Node::text(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - Community UI</title>
    {head}
</head>
<body>
    <main class="container py-5">
        {content}
    </main>
    <script src="{BOOTSTRAP_BUNDLE_URL}"></script>
</body>
</html>"#
    )
}

/// Showcase page: an index of component names followed by one demo each.
/// `static_url` is the prefix the community stylesheets are served under.
pub fn showcase_page(head: &Node, defaults: &DefaultsRegistry, static_url: &str) -> String {
    let demos = catalog::demos(defaults);

    let index = el("nav").class("mb-5").child(
        el("ul")
            .class("list-inline")
            .children(demos.iter().map(|(name, _)| {
                el("li")
                    .class("list-inline-item")
                    .child(el("a").attr("href", format!("#{name}")).child(*name))
            })),
    );
    let sections = demos.into_iter().map(|(name, demo)| {
        el("section")
            .attr("id", name)
            .class("mb-5")
            .child(el("h2").class("h5 mb-3").child(name))
            .child(demo)
    });

    let body = Node::Fragment(vec![
        el("h1").class("mb-2").child("Community UI").into(),
        el("p")
            .class("text-muted small mb-4")
            .child("Stylesheets served from ")
            .child(el("code").child(static_url))
            .into(),
        index.into(),
        Node::Fragment(sections.map(Node::from).collect()),
    ]);
    html_shell("Showcase", head, &body.render())
}

/// Page holding a single component demo, or `None` for an unknown name.
pub fn component_page(name: &str, head: &Node, defaults: &DefaultsRegistry) -> Option<String> {
    let demo = catalog::demo(name, defaults)?;
    let body = el("section")
        .child(el("h1").class("h4 mb-4").child(name))
        .child(demo);
    Some(html_shell(name, head, &Node::from(body).render()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_page_lists_every_component() {
        let page = showcase_page(&Node::Empty, &DefaultsRegistry::new(), "/assets");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<code>/assets</code>"));
        for name in catalog::names() {
            assert!(page.contains(&format!(r##"<section id="{name}""##)), "{name}");
        }
    }

    #[test]
    fn test_shell_includes_head_and_escapes_title() {
        let head: Node = el("link").attr("rel", "stylesheet").attr("href", "/x.css").into();
        let page = html_shell("A & B", &head, "<p>body</p>");
        assert!(page.contains(r#"<link rel="stylesheet" href="/x.css">"#));
        assert!(page.contains("<title>A &amp; B - Community UI</title>"));
        assert!(page.contains("<p>body</p>"));
    }

    #[test]
    fn test_component_page() {
        let defaults = DefaultsRegistry::new();
        let page = component_page("DotsLoader", &Node::Empty, &defaults).unwrap();
        assert!(page.contains("fs-comm-dots-loader"));
        assert!(component_page("Missing", &Node::Empty, &defaults).is_none());
    }
}
