// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

use std::sync::Arc;

use serial_test::{parallel, serial};

use crate::feature::Family;
use crate::plugin::*;
use crate::publisher::{self, Publisher};
use crate::tables::Layout;

#[test]
#[serial]
fn test_plugin_descriptor() {
    let plugin = plugin_create(Arc::new(Config::new()));
    assert_eq!(plugin.name(), "botan");
    assert_eq!(plugin.name(), BACKEND_NAME);

    let features = plugin.features();
    assert!(std::ptr::eq(features, publisher::get_features(&Config::new())));
    assert_bound(features);
    plugin.destroy();
}

#[test]
#[serial]
fn test_destroy_keeps_shared_table() {
    let first = plugin_create(Arc::new(Config::new()));
    let second = plugin_create(Arc::new(Config::new()));

    let table = first.features() as *const _;
    let len = first.features().len();
    first.destroy();

    let features = second.features();
    assert!(std::ptr::eq(table, features));
    assert_eq!(features.len(), len);
    second.destroy();

    /* a descriptor created after all others are gone sees the same table */
    let third = plugin_create(Arc::new(Config::new()));
    assert!(std::ptr::eq(table, third.features()));
    third.destroy();
}

#[test]
#[parallel]
fn test_plugin_with_publisher() {
    let publisher: &'static Publisher = Box::leak(Box::new(Publisher::new(
        Layout::standard(),
        md5_and_rng(),
    )));
    let settings = Arc::new(TestSettings::new(false));
    let plugin = BotanPlugin::with_publisher(settings.clone(), publisher);

    assert_eq!(plugin.features().len(), 2);
    assert!(plugin.features().iter().all(|f| f.family != Family::Rng));

    /* the setting was sampled once, by the first call */
    settings.set_use_rng(true);
    assert_eq!(plugin.features().len(), 2);
    assert_eq!(settings.reads(), 1);
    Box::new(plugin).destroy();
}

#[test]
#[serial]
fn test_plugin_create_default() {
    std::env::set_var("CRYPTOPLUG_CONF", "test_plugin_create_default.conf");
    let plugin = plugin_create_default();
    std::env::remove_var("CRYPTOPLUG_CONF");

    assert_eq!(plugin.name(), BACKEND_NAME);
    assert!(!plugin.features().is_empty());
    plugin.destroy();
}
