use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use std::sync::Arc;

use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::defaults::{DefaultsRegistry, DefaultsTable};
use crate::error::ConfigurationError;
use crate::host::HostApp;
use crate::setup::{Setup, default_asset_dir, mount_path};
use crate::ui::{catalog, page};

/// Paths served by the showcase itself; the static mount may not take them.
pub const SHOWCASE_ROUTES: [&str; 3] = ["/", "/components", "/api/defaults"];

fn check_mount_path(static_url: &str) -> Result<(), ConfigurationError> {
    let path = mount_path(static_url);
    let conflict = SHOWCASE_ROUTES.iter().find(|route| {
        path == **route || (**route != "/" && path.starts_with(&format!("{route}/")))
    });
    match conflict {
        Some(&route) => Err(ConfigurationError::RouteConflict { path, route }),
        None => Ok(()),
    }
}

/// Build the host for `config`: base styles first, then the community setup.
///
/// Fails with [`ConfigurationError::RouteConflict`] when `static_url` would
/// shadow a showcase route.
pub fn build_host(config: &AppConfig) -> Result<HostApp, ConfigurationError> {
    check_mount_path(&config.community.static_url)?;

    let mut host = HostApp::new();
    if config.community.pwa_mode {
        host.enable_pwa();
    }
    host.attach_base_styles(config.community.base_styles_url.as_str());

    let asset_dir = config
        .community
        .asset_dir
        .clone()
        .unwrap_or_else(default_asset_dir);
    Setup::new()
        .static_url(config.community.static_url.as_str())
        .pwa_mode(config.community.pwa_mode)
        .asset_dir(asset_dir)
        .apply(&mut host)?;
    Ok(host)
}

/// Build the showcase router: pages, the defaults API and the static mounts.
pub fn build_app(
    config: Arc<AppConfig>,
    defaults: DefaultsRegistry,
) -> Result<Router, ConfigurationError> {
    let host = build_host(&config)?;

    let state = AppState {
        defaults,
        head: Arc::new(host.head_nodes()),
        config,
    };

    Ok(Router::new()
        .route("/", get(showcase))
        .route("/components", get(api_components))
        .route("/components/{name}", get(component))
        .route("/api/defaults", get(api_defaults))
        .with_state(state)
        .merge(host.router::<()>())
        .layer(TraceLayer::new_for_http()))
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let defaults = DefaultsRegistry::new();
    defaults.extend(config.defaults.clone());
    info!(
        name: "community.defaults.seeded",
        components = config.defaults.len(),
        "Component defaults loaded from configuration"
    );

    let app = build_app(Arc::clone(&config), defaults)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        static_url = %config.community.static_url,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Every component on one page.
async fn showcase(State(state): State<AppState>) -> Html<String> {
    Html(page::showcase_page(
        &state.head,
        &state.defaults,
        &state.config.community.static_url,
    ))
}

/// GET /components - Component names.
async fn api_components() -> Json<Vec<&'static str>> {
    Json(catalog::names())
}

/// GET /components/{name} - A single component demo.
async fn component(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, StatusCode> {
    page::component_page(&name, &state.head, &state.defaults)
        .map(Html)
        .ok_or(StatusCode::NOT_FOUND)
}

/// GET /api/defaults - The live defaults table.
async fn api_defaults(State(state): State<AppState>) -> Json<DefaultsTable> {
    let table = state
        .defaults
        .list()
        .into_iter()
        .map(|name| {
            let options = state.defaults.get(&name);
            (name, options)
        })
        .collect();
    Json(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_mount_path() {
        assert!(check_mount_path("/community-static").is_ok());
        assert!(check_mount_path("/api").is_ok());
        assert!(check_mount_path("/components-static").is_ok());

        for url in ["/", "", "/components", "components/", "/components/x", "/api/defaults"] {
            assert!(
                matches!(
                    check_mount_path(url),
                    Err(ConfigurationError::RouteConflict { .. })
                ),
                "{url}"
            );
        }
    }
}
