use std::path::{Path, PathBuf};

use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::defaults::DefaultsTable;
use crate::host::DEFAULT_BASE_STYLES_URL;
use crate::setup::DEFAULT_STATIC_URL;

/// Config file picked up from the working directory when none is given.
pub const FALLBACK_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// URL prefix the community assets are mounted under
    #[arg(long, env = "STATIC_URL")]
    pub static_url: Option<String>,

    /// Also register the community stylesheets for PWA precaching
    #[arg(long, env = "PWA_MODE")]
    pub pwa: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub community: CommunityConfig,
    /// Component defaults seeded into the registry at startup, read from the
    /// `defaults:` table of the config file.
    #[serde(skip)]
    pub defaults: DefaultsTable,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CommunityConfig {
    pub static_url: String,
    pub pwa_mode: bool,
    pub base_styles_url: String,
    /// Overrides the packaged stylesheet directory.
    #[serde(default)]
    pub asset_dir: Option<PathBuf>,
}

/// Shape of the `defaults:` section. Component names are case sensitive, so
/// the table is read straight from YAML rather than through the layered
/// (case-folding) config sources.
#[derive(Debug, Default, Deserialize)]
struct DefaultsSection {
    #[serde(default)]
    defaults: DefaultsTable,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("community.static_url", DEFAULT_STATIC_URL)?
            .set_default("community.pwa_mode", false)?
            .set_default("community.base_styles_url", DEFAULT_BASE_STYLES_URL)?;

        // 2. Config file: explicit path must exist, ./config.yaml is optional
        let config_file = resolve_config_file(cli.config.as_deref());
        if let Some(path) = &config_file {
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Yaml)
                    .required(true),
            );
        }

        // 3. Environment variables, e.g. COMMUNITY_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("COMMUNITY")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (and their env aliases) win over everything
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(static_url) = cli.static_url {
            builder = builder.set_override("community.static_url", static_url)?;
        }
        if let Some(pwa) = cli.pwa {
            builder = builder.set_override("community.pwa_mode", pwa)?;
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        if let Some(path) = &config_file {
            cfg.defaults = load_defaults_table(path)?;
        }
        Ok(cfg)
    }
}

fn resolve_config_file(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => {
            let fallback = PathBuf::from(FALLBACK_CONFIG_FILE);
            fallback.exists().then_some(fallback)
        }
    }
}

/// Read the `defaults:` table from a YAML config file.
pub fn load_defaults_table(path: &Path) -> Result<DefaultsTable, config::ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        config::ConfigError::Message(format!("failed to read {}: {e}", path.display()))
    })?;
    parse_defaults_table(&content)
}

/// Parse the `defaults:` table out of YAML config text. A document without
/// one yields an empty table.
pub fn parse_defaults_table(yaml: &str) -> Result<DefaultsTable, config::ConfigError> {
    let section: Option<DefaultsSection> = serde_yaml::from_str(yaml)
        .map_err(|e| config::ConfigError::Message(format!("invalid defaults table: {e}")))?;
    Ok(section.unwrap_or_default().defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::OptionValue;

    #[test]
    fn test_parse_defaults_table() {
        let yaml = r"
server:
  port: 8080
defaults:
  FlipCard:
    height: 400px
  MegaMenuNavbar:
    columns: 4
  ProgressRing:
    show_text: false
";
        let table = parse_defaults_table(yaml).unwrap();
        assert_eq!(table["FlipCard"]["height"], OptionValue::from("400px"));
        assert_eq!(table["MegaMenuNavbar"]["columns"], OptionValue::Int(4));
        assert_eq!(table["ProgressRing"]["show_text"], OptionValue::Bool(false));
    }

    #[test]
    fn test_parse_defaults_table_absent() {
        assert!(parse_defaults_table("server:\n  port: 1\n").unwrap().is_empty());
        assert!(parse_defaults_table("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_defaults_table_rejects_non_map() {
        assert!(parse_defaults_table("defaults: [1, 2]").is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["community-ui", "--port", "8081", "--pwa", "true"]).unwrap();
        assert_eq!(cli.port, Some(8081));
        assert_eq!(cli.pwa, Some(true));
    }
}
