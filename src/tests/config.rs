// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

use serial_test::{parallel, serial};

use crate::config::plugin_key;
use crate::error::ErrorKind;

const SAMPLE: &str = r#"
[cryptoplug.plugins.botan]
use_rng = false
load = "yes"
flag = "Disabled"
count = 1
bogus = "maybe"

[charon.plugins.botan]
use_rng = true
"#;

#[test]
#[parallel]
fn test_get_bool() {
    let config = Config::parse(SAMPLE).unwrap();
    assert!(!config.get_bool("cryptoplug.plugins.botan.use_rng", true));
    assert!(config.get_bool("cryptoplug.plugins.botan.load", false));
    assert!(!config.get_bool("cryptoplug.plugins.botan.flag", true));
    assert!(config.get_bool("cryptoplug.plugins.botan.count", false));
    assert!(config.get_bool("charon.plugins.botan.use_rng", false));

    /* unparseable and missing values fall back to the default */
    assert!(config.get_bool("cryptoplug.plugins.botan.bogus", true));
    assert!(!config.get_bool("cryptoplug.plugins.botan.bogus", false));
    assert!(config.get_bool("cryptoplug.plugins.openssl.use_rng", true));
    assert!(config.get_bool("cryptoplug.plugins", true));
    assert!(config.get_bool("", true));
}

#[test]
#[parallel]
fn test_plugin_key() {
    let mut config = Config::new();
    assert_eq!(
        plugin_key(&config, "use_rng"),
        "cryptoplug.plugins.botan.use_rng"
    );
    config.set_namespace("charon");
    assert_eq!(plugin_key(&config, "use_rng"), "charon.plugins.botan.use_rng");

    let other = Config::with_namespace("pki");
    assert_eq!(other.namespace(), "pki");
}

#[test]
#[parallel]
fn test_set_bool() {
    let mut config = Config::new();
    assert!(config.get_bool(USE_RNG_KEY, true));
    config.set_bool(USE_RNG_KEY, false).unwrap();
    assert!(!config.get_bool(USE_RNG_KEY, true));
    config.set_bool(USE_RNG_KEY, true).unwrap();
    assert!(config.get_bool(USE_RNG_KEY, false));

    let err = config.set_bool("cryptoplug.plugins.botan.use_rng.nested", true);
    assert_eq!(err.unwrap_err().kind(), ErrorKind::Config);
    let err = config.set_bool("cryptoplug.", true);
    assert_eq!(err.unwrap_err().kind(), ErrorKind::Config);
}

#[test]
#[parallel]
fn test_parse_errors() {
    let err = Config::parse("[cryptoplug\nuse_rng = ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    let err = Config::from_file("test_parse_errors_missing.conf").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Nested);
}

#[test]
#[parallel]
fn test_from_file() {
    let filename = std::env::temp_dir().join("cryptoplug_test_from_file.conf");
    std::fs::write(&filename, SAMPLE).unwrap();
    let config = Config::from_file(filename.to_str().unwrap()).unwrap();
    std::fs::remove_file(&filename).unwrap_or(());

    assert_eq!(config.namespace(), "cryptoplug");
    assert!(!config.get_bool(USE_RNG_KEY, true));
}

/// Restores an environment variable when dropped
struct EnvGuard {
    name: &'static str,
    saved: Option<String>,
}

impl EnvGuard {
    fn set(name: &'static str, value: Option<&str>) -> EnvGuard {
        let saved = std::env::var(name).ok();
        match value {
            Some(v) => std::env::set_var(name, v),
            None => std::env::remove_var(name),
        }
        EnvGuard { name, saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.saved {
            Some(v) => std::env::set_var(self.name, v),
            None => std::env::remove_var(self.name),
        }
    }
}

fn write_conf(dir: &std::path::Path) -> String {
    std::fs::create_dir_all(dir).unwrap();
    let file = dir.join("cryptoplug.conf");
    std::fs::write(&file, SAMPLE).unwrap();
    file.to_str().unwrap().to_string()
}

#[test]
#[serial]
fn test_find_conf() {
    let _conf = EnvGuard::set("CRYPTOPLUG_CONF", Some("/some/where/c.conf"));
    assert_eq!(Config::find_conf().unwrap(), "/some/where/c.conf");
    drop(_conf);

    let _conf = EnvGuard::set("CRYPTOPLUG_CONF", None);
    let _xdg = EnvGuard::set("XDG_CONFIG_HOME", Some("test_find_conf_xdg"));
    let _home = EnvGuard::set("HOME", Some("test_find_conf_home"));
    let err = Config::find_conf().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err.to_string(),
        "not found: test_find_conf_xdg/cryptoplug/cryptoplug.conf, \
         test_find_conf_home/.config/cryptoplug/cryptoplug.conf, \
         test/cryptoplug/cryptoplug.conf"
    );
}

#[test]
#[serial]
fn test_find_conf_home_fallback() {
    let home = std::env::temp_dir().join("cryptoplug_test_home");
    let expected = write_conf(&home.join(".config/cryptoplug"));

    let _conf = EnvGuard::set("CRYPTOPLUG_CONF", None);
    let _xdg = EnvGuard::set("XDG_CONFIG_HOME", Some("test_find_conf_xdg"));
    let _home = EnvGuard::set("HOME", home.to_str());
    let found = Config::find_conf();
    std::fs::remove_dir_all(&home).unwrap_or(());

    assert_eq!(found.unwrap(), expected);
}

#[test]
#[serial]
fn test_find_conf_system_fallback() {
    /* the system directory is "test" in test builds */
    let expected = write_conf(std::path::Path::new("test/cryptoplug"));

    let _conf = EnvGuard::set("CRYPTOPLUG_CONF", None);
    let _xdg = EnvGuard::set("XDG_CONFIG_HOME", None);
    let _home = EnvGuard::set("HOME", Some("/nonexistent_cryptoplug_home"));
    let found = Config::find_conf();
    let loaded = Config::load_default();
    std::fs::remove_dir_all("test").unwrap_or(());

    assert_eq!(found.unwrap(), expected);
    assert!(!loaded.unwrap().get_bool(USE_RNG_KEY, true));
}

#[test]
#[parallel]
fn test_feature_serialization() {
    let publisher = crate::Publisher::new(
        crate::Layout::standard(),
        Availability::MD5 | Availability::ECDSA,
    );
    let table = publisher.get_features(&Config::new());
    let json = serde_json::to_value(table.as_slice()).unwrap();
    assert_eq!(
        json[0],
        serde_json::json!({
            "kind": {"register": {"exclusive": null}},
            "family": "HASHER",
            "constructor": "botan_hasher_create",
        })
    );
    assert_eq!(
        json[1],
        serde_json::json!({
            "kind": "provide",
            "family": "HASHER",
            "algorithm": "MD5",
            "constructor": "botan_hasher_create",
        })
    );
    assert_eq!(
        json[2]["kind"],
        serde_json::json!({"register": {"exclusive": true}})
    );
    assert_eq!(json[2]["family"], "PRIVKEY");
}
