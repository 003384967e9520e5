//! Error types for host setup.

use std::path::PathBuf;

use thiserror::Error;

/// Bootstrap-time misconfiguration. Fatal to the setup call; the caller must
/// fix call order or packaging.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Setup ran before the base style system was attached to the host.
    #[error(
        "setup() must be called AFTER attach_base_styles(): no stylesheet containing \
         \"{marker}\" found in the host headers. Correct order: \
         1. attach_base_styles(app) 2. setup(app)"
    )]
    BaseStylesMissing {
        /// Substring the base stylesheet URL is expected to contain.
        marker: &'static str,
    },

    /// The packaged asset directory is missing.
    #[error("community static files not found at {}", path.display())]
    StaticDirMissing {
        /// Directory that was expected to exist.
        path: PathBuf,
    },

    /// The static mount would shadow one of the application's own routes.
    #[error("static_url \"{path}\" collides with the application route \"{route}\"")]
    RouteConflict {
        /// Normalised mount path.
        path: String,
        /// Route it collides with.
        route: &'static str,
    },

    /// PWA helpers were used on a host without PWA support.
    #[error("setup_pwa() requires PWA to be enabled: call enable_pwa() on the host first")]
    PwaNotEnabled,
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
