use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use community_ui::config::{AppConfig, CommunityConfig, ServerConfig};
use community_ui::defaults::{DefaultsRegistry, DefaultsTable};
use community_ui::error::ConfigurationError;
use community_ui::host::DEFAULT_BASE_STYLES_URL;
use community_ui::server::{build_app, build_host};
use community_ui::setup::DEFAULT_STATIC_URL;
use tower::ServiceExt;

fn test_config(pwa_mode: bool) -> AppConfig {
    config_with_static_url(DEFAULT_STATIC_URL, pwa_mode)
}

fn config_with_static_url(static_url: &str, pwa_mode: bool) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        community: CommunityConfig {
            static_url: static_url.to_string(),
            pwa_mode,
            base_styles_url: DEFAULT_BASE_STYLES_URL.to_string(),
            asset_dir: None,
        },
        defaults: DefaultsTable::new(),
    }
}

fn test_server(defaults: DefaultsRegistry) -> TestServer {
    let app = build_app(Arc::new(test_config(false)), defaults).unwrap();
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_showcase_page_renders_every_component() {
    let server = test_server(DefaultsRegistry::new());

    let response = server.get("/").await;
    response.assert_status_ok();

    let page = response.text();
    assert!(page.contains(DEFAULT_BASE_STYLES_URL));
    assert!(page.contains(r#"href="/community-static/css/cards.css""#));
    assert!(page.contains("<code>/community-static</code>"));
    for name in ["FlipCard", "RingLoader", "MegaMenuNavbar", "TagInput", "ParallaxSection"] {
        assert!(page.contains(&format!(r#"<section id="{name}""#)), "{name}");
    }
}

#[tokio::test]
async fn test_serves_packaged_stylesheets() {
    let server = test_server(DefaultsRegistry::new());

    let response = server.get("/community-static/css/cards.css").await;
    response.assert_status_ok();
    assert!(response.text().contains(".fs-comm-flip-card"));

    server
        .get("/community-static/css/missing.css")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_component_page_and_unknown_name() {
    let server = test_server(DefaultsRegistry::new());

    let response = server.get("/components/DotsLoader").await;
    response.assert_status_ok();
    assert!(response.text().contains("fs-comm-dots-loader"));

    server
        .get("/components/Nope")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pages_follow_live_defaults() {
    let defaults = DefaultsRegistry::new();
    let server = test_server(defaults.clone());

    defaults.set("RingLoader", [("size", "7rem")]);
    let page = server.get("/components/RingLoader").await.text();
    assert!(page.contains("width: 7rem; height: 7rem;"));

    let table: serde_json::Value = server.get("/api/defaults").await.json();
    assert_eq!(table["RingLoader"]["size"], "7rem");
    assert_eq!(table["PolygonLoader"]["sides"], 6);
}

#[tokio::test]
async fn test_component_names_endpoint() {
    let app = build_app(Arc::new(test_config(false)), DefaultsRegistry::new()).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/components")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let names: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert!(names.contains(&"FlipCard".to_string()));
    assert!(names.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_build_host_with_pwa() {
    let host = build_host(&test_config(true)).unwrap();
    assert_eq!(host.headers().len(), 6);
    assert_eq!(host.cache_urls().unwrap().len(), 5);
}

#[test]
fn test_build_host_with_missing_asset_dir() {
    let mut config = test_config(false);
    config.community.asset_dir = Some("/definitely/not/here".into());
    let err = build_host(&config).unwrap_err();
    assert!(matches!(err, ConfigurationError::StaticDirMissing { .. }));
}

#[test]
fn test_static_url_on_showcase_route_is_rejected() {
    for static_url in ["/components", "/components/", "/api/defaults", "/"] {
        let config = Arc::new(config_with_static_url(static_url, false));
        let result = std::panic::catch_unwind(|| build_app(config, DefaultsRegistry::new()));
        let err = result
            .unwrap_or_else(|_| panic!("building the router panicked for {static_url}"))
            .unwrap_err();
        assert!(
            matches!(err, ConfigurationError::RouteConflict { .. }),
            "{static_url}: {err}"
        );
    }
}

#[tokio::test]
async fn test_static_url_beside_showcase_routes() {
    let config = Arc::new(config_with_static_url("/api", false));
    let app = build_app(config, DefaultsRegistry::new()).unwrap();
    let server = TestServer::new(app).unwrap();

    server.get("/api/css/cards.css").await.assert_status_ok();
    server.get("/api/defaults").await.assert_status_ok();
}
