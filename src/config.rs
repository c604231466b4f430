// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! Runtime settings lookup.
//!
//! The registry only ever asks for booleans with a default, so the settings
//! store is abstracted behind [Settings]. [Config] implements it on top of
//! a TOML file where dotted keys walk nested tables, for example:
//!
//! ```toml
//! [cryptoplug.plugins.botan]
//! use_rng = false
//! ```

use std::env;
use std::fmt::Debug;
use std::fs;
use std::path::Path;

use log::warn;
use toml::{Table, Value};

use crate::error::{Error, Result};
use crate::plugin::BACKEND_NAME;

#[cfg(not(test))]
const DEFAULT_CONF_DIR: &str = {
    match option_env!("CONFDIR") {
        Some(p) => p,
        None => "/usr/local/etc",
    }
};
#[cfg(test)]
const DEFAULT_CONF_DIR: &str = "test";

/// Configuration file name searched for by [Config::find_conf]
pub const DEFAULT_CONF_NAME: &str = "cryptoplug.conf";

/// Namespace used when the host doesn't pick one
pub const DEFAULT_NAMESPACE: &str = "cryptoplug";

/// Read access to the host settings
pub trait Settings: Debug + Send + Sync {
    /// Namespace prefix of every key the plugin looks up
    fn namespace(&self) -> &str;

    /// The boolean stored under `key`, or `default` if unset or not a
    /// boolean
    fn get_bool(&self, key: &str, default: bool) -> bool;
}

/// Full key of a setting of this backend's plugin:
/// `<namespace>.plugins.<backend>.<name>`
pub fn plugin_key(settings: &dyn Settings, name: &str) -> String {
    format!("{}.plugins.{}.{}", settings.namespace(), BACKEND_NAME, name)
}

fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::Integer(1) => Some(true),
        Value::Integer(0) => Some(false),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "1" | "yes" | "true" | "enabled" => Some(true),
            "0" | "no" | "false" | "disabled" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// TOML backed settings
#[derive(Debug, Clone)]
pub struct Config {
    namespace: String,
    values: Table,
}

impl Config {
    /// Empty configuration in the default namespace
    pub fn new() -> Config {
        Config::with_namespace(DEFAULT_NAMESPACE)
    }

    /// Empty configuration in the given namespace
    pub fn with_namespace(namespace: &str) -> Config {
        Config {
            namespace: namespace.to_string(),
            values: Table::new(),
        }
    }

    /// Moves the configuration to another namespace
    pub fn set_namespace(&mut self, namespace: &str) {
        self.namespace = namespace.to_string();
    }

    /// Locates the configuration file
    pub fn find_conf() -> Result<String> {
        /* First check for our own env var,
         * this has the highest precedence */
        if let Ok(var) = env::var("CRYPTOPLUG_CONF") {
            return Ok(var);
        }
        let candidates = Self::conf_candidates();
        match candidates.iter().find(|c| Path::new(c).is_file()) {
            Some(conffile) => Ok(conffile.clone()),
            None => Err(Error::not_found(candidates.join(", "))),
        }
    }

    /* Freedesktop specification for config dirs first, then fallback to
     * $HOME/.config, and finally the system wide one */
    fn conf_candidates() -> Vec<String> {
        let mut candidates = Vec::with_capacity(3);
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            candidates
                .push(format!("{}/cryptoplug/{}", xdg, DEFAULT_CONF_NAME));
        }
        if let Ok(home) = env::var("HOME") {
            candidates.push(format!(
                "{}/.config/cryptoplug/{}",
                home, DEFAULT_CONF_NAME
            ));
        }
        candidates.push(format!(
            "{}/cryptoplug/{}",
            DEFAULT_CONF_DIR, DEFAULT_CONF_NAME
        ));
        candidates
    }

    /// Parses a configuration from TOML text
    pub fn parse(text: &str) -> Result<Config> {
        let values: Table = toml::from_str(text)?;
        Ok(Config {
            namespace: DEFAULT_NAMESPACE.to_string(),
            values: values,
        })
    }

    /// Loads a configuration file
    pub fn from_file(filename: &str) -> Result<Config> {
        let config_str = fs::read_to_string(filename)?;
        Self::parse(&config_str)
    }

    /// Loads the configuration file if one can be found, and falls back
    /// to an empty configuration (all defaults) otherwise
    pub fn load_default() -> Result<Config> {
        match Self::find_conf() {
            Ok(filename) => Self::from_file(&filename),
            Err(_) => Ok(Config::new()),
        }
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let mut value = self.values.get(parts.next()?)?;
        for part in parts {
            value = value.as_table()?.get(part)?;
        }
        Some(value)
    }

    /// Stores a boolean under a dotted key, creating the intermediate
    /// tables. Fails if a non-table value is in the way.
    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        let mut parts: Vec<&str> = key.split('.').collect();
        let last = match parts.pop() {
            Some(l) if !l.is_empty() => l,
            _ => return Err(Error::config(format!("invalid key '{}'", key))),
        };
        let mut table = &mut self.values;
        for part in parts {
            let entry = table
                .entry(part.to_string())
                .or_insert(Value::Table(Table::new()));
            table = match entry.as_table_mut() {
                Some(t) => t,
                None => {
                    return Err(Error::config(format!(
                        "'{}' in key '{}' is not a table",
                        part, key
                    )))
                }
            };
        }
        table.insert(last.to_string(), Value::Boolean(value));
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

impl Settings for Config {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.lookup(key) {
            None => default,
            Some(value) => match parse_bool(value) {
                Some(b) => b,
                None => {
                    warn!("'{}' is not a boolean, using {}", key, default);
                    default
                }
            },
        }
    }
}
