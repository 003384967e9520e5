//! Community UI components on Bootstrap 5
//!
//! Animated cards, loaders, navbars, buttons, form controls and scroll
//! effects that render to plain HTML, plus the plumbing to mount their
//! stylesheets into a host web application.
//!
//! # Architecture
//!
//! - **Defaults registry**: application-wide defaults for component
//!   parameters with explicit > registry > hardcoded precedence
//! - **Setup gate**: idempotent mounting of the packaged stylesheets into a
//!   host, guarded by a base-styles precondition
//! - **Server**: Axum showcase serving every component and the mounted assets
//!
//! # Modules
//!
//! - [`defaults`]: component defaults registry and parameter resolution
//! - [`host`]: host application model (headers, static routes, PWA cache)
//! - [`setup`]: mounting the community assets into a host
//! - [`ui`]: markup tree and the components themselves
//! - [`config`]: layered configuration for the showcase server

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::implicit_hasher)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod defaults;
pub mod error;
pub mod host;
pub mod server;
pub mod setup;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::defaults::DefaultsRegistry;
use crate::ui::markup::Node;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Component defaults used when rendering pages.
    pub defaults: DefaultsRegistry,
    /// Page head contributed by the host (base styles plus community assets).
    pub head: Arc<Node>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
