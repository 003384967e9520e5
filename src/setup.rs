//! Host setup: mount the community assets into a [`HostApp`].
//!
//! [`setup`] is meant to run once during bootstrap, after the base style
//! system has been attached. Every step is idempotent, so repeated calls with
//! the same prefix leave the host unchanged.
//!
//! # Example
//!
//! ```rust
//! use community_ui::host::{DEFAULT_BASE_STYLES_URL, HostApp};
//! use community_ui::setup::setup;
//!
//! let mut app = HostApp::new();
//! app.attach_base_styles(DEFAULT_BASE_STYLES_URL);
//!
//! setup(&mut app, "/x", false).unwrap();
//! setup(&mut app, "/x", false).unwrap();
//!
//! assert_eq!(app.headers().len(), 6);
//! assert_eq!(app.routes().len(), 1);
//! assert_eq!(app.routes()[0].path(), "/x");
//! ```

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{ConfigurationError, Result};
use crate::host::{AssetReference, BASE_STYLES_MARKER, HasBaseStyles, HostApp, StaticMount};

/// Default URL prefix for the community assets.
pub const DEFAULT_STATIC_URL: &str = "/community-static";

/// Route name given to the community static mount.
pub const STATIC_ROUTE_NAME: &str = "community_static";

/// Stylesheets injected into the page head, in order.
pub const STYLESHEETS: [&str; 5] = [
    "community-base.css",
    "cards.css",
    "loaders.css",
    "navbars.css",
    "effects.css",
];

/// Additional stylesheets precached by [`setup_pwa`].
pub const PWA_EXTRA_STYLESHEETS: [&str; 2] = ["forms.css", "buttons.css"];

/// Directory holding the packaged stylesheets.
#[must_use]
pub fn default_asset_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// Canonical mount path for `static_url`: leading slash, no trailing slash.
#[must_use]
pub fn mount_path(static_url: &str) -> String {
    let trimmed = static_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn stylesheet_url(static_url: &str, file: &str) -> String {
    let base = mount_path(static_url);
    format!("{}/css/{file}", base.trim_end_matches('/'))
}

/// Head entries for the community stylesheets.
#[must_use]
pub fn community_assets(static_url: &str) -> Vec<AssetReference> {
    STYLESHEETS
        .iter()
        .map(|file| AssetReference::stylesheet(stylesheet_url(static_url, file)))
        .collect()
}

/// Every community stylesheet URL a PWA should precache.
#[must_use]
pub fn community_cache_urls(static_url: &str) -> Vec<String> {
    STYLESHEETS
        .iter()
        .chain(PWA_EXTRA_STYLESHEETS.iter())
        .map(|file| stylesheet_url(static_url, file))
        .collect()
}

/// Setup options.
#[derive(Debug, Clone)]
pub struct Setup {
    static_url: String,
    pwa_mode: bool,
    asset_dir: PathBuf,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            static_url: DEFAULT_STATIC_URL.to_string(),
            pwa_mode: false,
            asset_dir: default_asset_dir(),
        }
    }
}

/// What one [`Setup::apply`] call changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupReport {
    /// Whether the static route was newly mounted.
    pub route_mounted: bool,
    /// Head entries appended.
    pub headers_added: usize,
    /// Cache manifest URLs appended.
    pub cache_urls_added: usize,
}

impl SetupReport {
    /// Whether the call was a no-op.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        !self.route_mounted && self.headers_added == 0 && self.cache_urls_added == 0
    }
}

impl Setup {
    /// Defaults: `/community-static`, PWA off, packaged asset directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// URL prefix the assets are served under.
    #[must_use]
    pub fn static_url(mut self, static_url: impl Into<String>) -> Self {
        self.static_url = static_url.into();
        self
    }

    /// Also extend the host's PWA cache manifest, if it has one.
    #[must_use]
    pub fn pwa_mode(mut self, pwa_mode: bool) -> Self {
        self.pwa_mode = pwa_mode;
        self
    }

    /// Directory served at the mount path.
    #[must_use]
    pub fn asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Apply to `app`, returning it for chaining.
    pub fn apply<'a>(&self, app: &'a mut HostApp) -> Result<&'a mut HostApp> {
        self.apply_with_report(app)?;
        Ok(app)
    }

    /// Apply to `app` and report what changed.
    pub fn apply_with_report(&self, app: &mut HostApp) -> Result<SetupReport> {
        if !app.has_base_styles() {
            return Err(ConfigurationError::BaseStylesMissing {
                marker: BASE_STYLES_MARKER,
            });
        }
        if !self.asset_dir.is_dir() {
            return Err(ConfigurationError::StaticDirMissing {
                path: self.asset_dir.clone(),
            });
        }

        let mut report = SetupReport::default();

        let path = mount_path(&self.static_url);
        report.route_mounted = app.routes_mut().insert_front_unique(StaticMount::new(
            path.clone(),
            self.asset_dir.clone(),
            STATIC_ROUTE_NAME,
        ));
        if report.route_mounted {
            info!(
                name: "community.setup.route_mounted",
                path = %path,
                dir = %self.asset_dir.display(),
                "Community static files mounted"
            );
        } else {
            debug!(name: "community.setup.route_exists", path = %path, "Static route already mounted");
        }

        let headers = app.headers_mut();
        report.headers_added = community_assets(&self.static_url)
            .into_iter()
            .filter(|asset| headers.push_unique(asset.clone()))
            .count();

        if self.pwa_mode {
            match app.cache_urls_mut() {
                Some(cache) => {
                    report.cache_urls_added = STYLESHEETS
                        .iter()
                        .map(|file| stylesheet_url(&self.static_url, file))
                        .filter(|url| cache.push_unique(url.clone()))
                        .count();
                }
                None => debug!(
                    name: "community.setup.pwa_skipped",
                    "PWA mode requested but the host has no cache manifest"
                ),
            }
        }

        info!(
            name: "community.setup.complete",
            static_url = %path,
            route_mounted = report.route_mounted,
            headers_added = report.headers_added,
            cache_urls_added = report.cache_urls_added,
            "Community setup applied"
        );
        Ok(report)
    }
}

/// Mount the community assets into `app` using the packaged asset directory.
///
/// Fails with [`ConfigurationError::BaseStylesMissing`] when called before
/// [`HostApp::attach_base_styles`].
pub fn setup<'a>(
    app: &'a mut HostApp,
    static_url: &str,
    pwa_mode: bool,
) -> Result<&'a mut HostApp> {
    Setup::new()
        .static_url(static_url)
        .pwa_mode(pwa_mode)
        .apply(app)
}

/// Add every community stylesheet (including forms and buttons) to the PWA
/// cache manifest, skipping URLs already cached.
pub fn setup_pwa<'a>(app: &'a mut HostApp, static_url: &str) -> Result<&'a mut HostApp> {
    let cache = app
        .cache_urls_mut()
        .ok_or(ConfigurationError::PwaNotEnabled)?;
    let added = community_cache_urls(static_url)
        .into_iter()
        .filter(|url| cache.push_unique(url.clone()))
        .count();
    info!(name: "community.pwa.cache_extended", added, "Community assets added to PWA cache");
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DEFAULT_BASE_STYLES_URL;

    fn bootstrapped() -> HostApp {
        let mut app = HostApp::new();
        app.attach_base_styles(DEFAULT_BASE_STYLES_URL);
        app
    }

    #[test]
    fn test_mount_path() {
        assert_eq!(mount_path("/community-static"), "/community-static");
        assert_eq!(mount_path("/x/"), "/x");
        assert_eq!(mount_path("x"), "/x");
        assert_eq!(mount_path(""), "/");
        assert_eq!(mount_path("/"), "/");
    }

    #[test]
    fn test_asset_urls() {
        let assets = community_assets("/x/");
        assert_eq!(assets.len(), 5);
        assert_eq!(assets[0].url(), "/x/css/community-base.css");
        assert_eq!(assets[4].url(), "/x/css/effects.css");

        let root = community_assets("/");
        assert_eq!(root[1].url(), "/css/cards.css");
    }

    #[test]
    fn test_cache_urls() {
        let urls = community_cache_urls(DEFAULT_STATIC_URL);
        assert_eq!(urls.len(), 7);
        assert!(urls.contains(&"/community-static/css/forms.css".to_string()));
        assert!(urls.contains(&"/community-static/css/buttons.css".to_string()));
    }

    #[test]
    fn test_requires_base_styles() {
        let mut app = HostApp::new();
        let err = setup(&mut app, DEFAULT_STATIC_URL, false).unwrap_err();
        assert!(matches!(err, ConfigurationError::BaseStylesMissing { .. }));
        assert!(err.to_string().contains("AFTER attach_base_styles"));
        assert!(app.headers().is_empty());
        assert!(app.routes().is_empty());
    }

    #[test]
    fn test_missing_asset_dir() {
        let mut app = bootstrapped();
        let err = Setup::new()
            .asset_dir("/definitely/not/here")
            .apply(&mut app)
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::StaticDirMissing { .. }));
        assert!(err.to_string().contains("/definitely/not/here"));
    }

    #[test]
    fn test_report_second_call_is_noop() {
        let mut app = bootstrapped();
        app.enable_pwa();
        let setup = Setup::new().static_url("/x").pwa_mode(true);

        let first = setup.apply_with_report(&mut app).unwrap();
        assert!(first.route_mounted);
        assert_eq!(first.headers_added, 5);
        assert_eq!(first.cache_urls_added, 5);

        let second = setup.apply_with_report(&mut app).unwrap();
        assert!(second.is_noop());
    }

    #[test]
    fn test_route_inserted_at_front() {
        let mut app = bootstrapped();
        app.add_route(StaticMount::new("/static", "static", "static"));
        setup(&mut app, "/x", false).unwrap();
        assert_eq!(app.routes()[0].path(), "/x");
        assert_eq!(app.routes()[0].name(), STATIC_ROUTE_NAME);
        assert_eq!(app.routes()[1].path(), "/static");
    }

    #[test]
    fn test_setup_pwa_requires_pwa() {
        let mut app = bootstrapped();
        let err = setup_pwa(&mut app, DEFAULT_STATIC_URL).unwrap_err();
        assert!(matches!(err, ConfigurationError::PwaNotEnabled));
    }

    #[test]
    fn test_setup_pwa_after_setup_adds_only_extras() {
        let mut app = bootstrapped();
        app.enable_pwa();
        setup(&mut app, DEFAULT_STATIC_URL, true).unwrap();
        assert_eq!(app.cache_urls().unwrap().len(), 5);

        setup_pwa(&mut app, DEFAULT_STATIC_URL).unwrap();
        setup_pwa(&mut app, DEFAULT_STATIC_URL).unwrap();
        assert_eq!(app.cache_urls().unwrap().len(), 7);
    }
}
