use community_ui::config::AppConfig;
use community_ui::defaults::OptionValue;
use serial_test::serial;
use std::env;
use std::fs;
use std::panic::AssertUnwindSafe;
use tempfile::NamedTempFile;

const BIN: &str = "community-ui";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("COMMUNITY_SERVER__PORT");
        env::remove_var("COMMUNITY_COMMUNITY__STATIC_URL");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("STATIC_URL");
        env::remove_var("PWA_MODE");
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    fs::write(file.path(), content).expect("Failed to write temp config");
    file
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.community.static_url, "/community-static");
    assert!(!config.community.pwa_mode);
    assert!(config.community.base_styles_url.contains("bootstrap"));
    assert!(config.community.asset_dir.is_none());
    assert!(config.defaults.is_empty());
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("COMMUNITY_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load_with_defaults_table() {
    clear_env_vars();

    let file = write_config(
        r"
server:
  port: 7070
community:
  static_url: /assets/community
  pwa_mode: true
defaults:
  FlipCard:
    height: 420px
  PolygonLoader:
    sides: 8
",
    );

    // Point the loader at the file through the env alias of --config
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.community.static_url, "/assets/community");
    assert!(config.community.pwa_mode);
    assert_eq!(config.defaults["FlipCard"]["height"], OptionValue::from("420px"));
    assert_eq!(config.defaults["PolygonLoader"]["sides"], OptionValue::Int(8));

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();
    let result = AppConfig::load_from_args([BIN, "--config", "/definitely/not/here.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cli_flags_win() {
    clear_env_vars();

    let file = write_config("server:\n  port: 7070\n");
    unsafe {
        env::set_var("COMMUNITY_SERVER__PORT", "9090");
    }

    let path = file.path().to_string_lossy().into_owned();
    let config = AppConfig::load_from_args([
        BIN,
        "--config",
        path.as_str(),
        "--port",
        "8181",
        "--static-url",
        "/ui",
        "--pwa",
        "true",
    ])
    .expect("Failed to load config");

    assert_eq!(config.server.port, 8181);
    assert_eq!(config.community.static_url, "/ui");
    assert!(config.community.pwa_mode);

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_beats_file() {
    clear_env_vars();

    let file = write_config("server:\n  port: 7070\n");
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
        env::set_var("COMMUNITY_SERVER__PORT", "9191");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9191);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    // Create ./config.yaml
    let config_content = r"
server:
  port: 6060
defaults:
  RingLoader:
    size: 5rem
";
    let cwd_path = "config.yaml";
    fs::write(cwd_path, config_content).expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args([BIN]);

    // Catch assertion failures so ./config.yaml is always removed
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let config = config.expect("Failed to load config");
        assert_eq!(config.server.port, 6060);
        assert_eq!(config.defaults["RingLoader"]["size"], OptionValue::from("5rem"));
    }));

    fs::remove_file(cwd_path).unwrap();

    if let Err(e) = result {
        std::panic::resume_unwind(e);
    }
}
