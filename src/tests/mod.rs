// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::availability::Availability;
use crate::config::{Config, Settings, DEFAULT_NAMESPACE};
use crate::feature::{Constructor, Feature};

mod config;
mod plugin;
mod tables;

const USE_RNG_KEY: &str = "cryptoplug.plugins.botan.use_rng";

/// Settings whose RNG toggle can be flipped, counting lookups
#[derive(Debug)]
struct TestSettings {
    use_rng: AtomicBool,
    reads: AtomicUsize,
}

impl TestSettings {
    fn new(use_rng: bool) -> TestSettings {
        TestSettings {
            use_rng: AtomicBool::new(use_rng),
            reads: AtomicUsize::new(0),
        }
    }

    fn set_use_rng(&self, value: bool) {
        self.use_rng.store(value, Ordering::SeqCst);
    }

    fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Settings for TestSettings {
    fn namespace(&self) -> &str {
        DEFAULT_NAMESPACE
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if key == USE_RNG_KEY {
            self.use_rng.load(Ordering::SeqCst)
        } else {
            default
        }
    }
}

fn config_without_rng() -> Config {
    let mut config = Config::new();
    config.set_bool(USE_RNG_KEY, false).unwrap();
    config
}

/// A build with a single digest and the RNG
fn md5_and_rng() -> Availability {
    Availability::MD5 | Availability::SYSTEM_RNG | Availability::HMAC_DRBG
}

/// Checks every PROVIDE entry follows a REGISTER of the constructor it is
/// bound to
fn assert_bound(features: &[Feature]) {
    let mut current: Option<Constructor> = None;
    for (idx, f) in features.iter().enumerate() {
        if f.is_register() {
            assert!(f.algorithm.is_none(), "entry {}: {}", idx, f);
            current = Some(f.constructor);
        } else {
            assert!(f.algorithm.is_some(), "entry {}: {}", idx, f);
            assert_eq!(current, Some(f.constructor), "entry {}: {}", idx, f);
        }
    }
}
