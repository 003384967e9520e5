//! Host application model.
//!
//! [`HostApp`] stands in for the web application the components are mounted
//! into: an ordered list of `<head>` asset references, an ordered list of
//! static-file mounts and, once PWA support is enabled, a cache manifest.
//! After bootstrap it is turned into an axum [`Router`] serving its mounts.
//!
//! # Architecture
//!
//! - [`AssetReference`]: a stylesheet or script URL in the page head
//! - [`StaticMount`]: a URL prefix served from a directory
//! - [`HasBaseStyles`]: capability reported once base styles are attached
//! - [`KeyedList`]: ordered list with a membership index used for dedup

mod list;

use std::path::{Path, PathBuf};

use axum::Router;
use tower_http::services::ServeDir;
use tracing::{debug, info};

use crate::ui::markup::{Node, el};

pub use list::{Keyed, KeyedList};

/// Substring identifying the base stylesheet in the host headers.
pub const BASE_STYLES_MARKER: &str = "bootstrap";

/// Default base stylesheet location.
pub const DEFAULT_BASE_STYLES_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Kind of asset referenced from the page head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// `<link rel="stylesheet">`.
    Stylesheet,
    /// `<script src>`.
    Script,
}

/// A URL in the page head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    url: String,
    kind: AssetKind,
}

impl AssetReference {
    /// Stylesheet reference.
    #[must_use]
    pub fn stylesheet(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: AssetKind::Stylesheet,
        }
    }

    /// Script reference.
    #[must_use]
    pub fn script(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: AssetKind::Script,
        }
    }

    /// Referenced URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Asset kind.
    #[must_use]
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Markup for the page head.
    #[must_use]
    pub fn to_node(&self) -> Node {
        match self.kind {
            AssetKind::Stylesheet => el("link")
                .attr("rel", "stylesheet")
                .attr("href", &self.url)
                .into(),
            AssetKind::Script => el("script").attr("src", &self.url).into(),
        }
    }
}

// Deduplication is by URL only; assets of different kinds sharing a URL collapse into one.
impl Keyed for AssetReference {
    fn key(&self) -> &str {
        &self.url
    }
}

/// A URL prefix served from a directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMount {
    path: String,
    dir: PathBuf,
    name: String,
}

impl StaticMount {
    /// Mount `dir` at `path`.
    #[must_use]
    pub fn new(path: impl Into<String>, dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// Mount path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Served directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Route name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Keyed for StaticMount {
    fn key(&self) -> &str {
        &self.path
    }
}

/// Reported by hosts whose base style system has been attached.
pub trait HasBaseStyles {
    /// Whether base styles are present.
    fn has_base_styles(&self) -> bool;
}

/// The application the component library is mounted into.
#[derive(Debug, Default)]
pub struct HostApp {
    headers: KeyedList<AssetReference>,
    routes: KeyedList<StaticMount>,
    cache_urls: Option<KeyedList<String>>,
    base_styles: bool,
}

impl HostApp {
    /// Empty host: no headers, no routes, PWA disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the base style system, the prerequisite for
    /// [`setup`](crate::setup::setup).
    ///
    /// Adds the stylesheet header (once) and records the capability.
    pub fn attach_base_styles(&mut self, url: impl Into<String>) -> &mut Self {
        let added = self.headers.push_unique(AssetReference::stylesheet(url));
        self.base_styles = true;
        info!(name: "host.base_styles.attached", added, "Base styles attached");
        self
    }

    /// Enable PWA support, creating an empty cache manifest if there is none.
    pub fn enable_pwa(&mut self) -> &mut Self {
        if self.cache_urls.is_none() {
            self.cache_urls = Some(KeyedList::new());
            info!(name: "host.pwa.enabled", "PWA cache manifest enabled");
        }
        self
    }

    /// Whether PWA support is enabled.
    #[must_use]
    pub fn pwa_enabled(&self) -> bool {
        self.cache_urls.is_some()
    }

    /// Append a head entry. The host does not deduplicate its own entries.
    pub fn add_header(&mut self, asset: AssetReference) -> &mut Self {
        self.headers.push(asset);
        self
    }

    /// Append a static mount. A second mount at an existing path is ignored.
    pub fn add_route(&mut self, mount: StaticMount) -> &mut Self {
        if !self.routes.push_unique(mount) {
            debug!(name: "host.route.duplicate", "Static mount path already taken");
        }
        self
    }

    /// Head entries in order.
    #[must_use]
    pub fn headers(&self) -> &[AssetReference] {
        self.headers.as_slice()
    }

    /// Static mounts in order.
    #[must_use]
    pub fn routes(&self) -> &[StaticMount] {
        self.routes.as_slice()
    }

    /// Cache manifest URLs, when PWA is enabled.
    #[must_use]
    pub fn cache_urls(&self) -> Option<&[String]> {
        self.cache_urls.as_ref().map(KeyedList::as_slice)
    }

    pub(crate) fn headers_mut(&mut self) -> &mut KeyedList<AssetReference> {
        &mut self.headers
    }

    pub(crate) fn routes_mut(&mut self) -> &mut KeyedList<StaticMount> {
        &mut self.routes
    }

    pub(crate) fn cache_urls_mut(&mut self) -> Option<&mut KeyedList<String>> {
        self.cache_urls.as_mut()
    }

    /// Head markup for every header entry.
    #[must_use]
    pub fn head_nodes(&self) -> Node {
        Node::Fragment(self.headers.iter().map(AssetReference::to_node).collect())
    }

    /// Router serving every static mount.
    ///
    /// A mount at `/` becomes the fallback service.
    pub fn router<S>(&self) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.routes.iter().fold(Router::new(), |router, mount| {
            let service = ServeDir::new(mount.dir());
            if mount.path() == "/" {
                router.fallback_service(service)
            } else {
                router.nest_service(mount.path(), service)
            }
        })
    }
}

impl HasBaseStyles for HostApp {
    fn has_base_styles(&self) -> bool {
        self.base_styles
            || self
                .headers
                .iter()
                .any(|h| h.kind() == AssetKind::Stylesheet && h.url().contains(BASE_STYLES_MARKER))
    }
}
