// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! Builds the feature table once and hands out the cached result.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};
use once_cell::sync::{Lazy, OnceCell};

use crate::availability::Availability;
use crate::config::{plugin_key, Settings};
use crate::table::FeatureTable;
use crate::tables::{Layout, SubTable};

/// Plugin setting controlling whether the RNG sub-table is advertised
pub const USE_RNG: &str = "use_rng";

/// Lazily assembles and caches a feature table.
///
/// The first call to [Publisher::get_features] assembles the table and
/// samples the RNG setting. Concurrent first callers wait for that single
/// build; every later call returns the cached table untouched, even if the
/// settings have changed since.
#[derive(Debug)]
pub struct Publisher {
    layout: Layout,
    available: Availability,
    table: OnceCell<FeatureTable>,
    builds: AtomicUsize,
}

impl Publisher {
    /// A publisher for `layout` with the given capabilities
    pub fn new(layout: Layout, available: Availability) -> Publisher {
        Publisher {
            layout: layout,
            available: available,
            table: OnceCell::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// Returns the feature table, building it on first use
    pub fn get_features(&self, settings: &dyn Settings) -> &FeatureTable {
        self.table.get_or_init(|| self.build(settings))
    }

    /// The table, if it was built already
    pub fn published(&self) -> Option<&FeatureTable> {
        self.table.get()
    }

    /// How many times the table was assembled, never more than one
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Acquire)
    }

    fn build(&self, settings: &dyn Settings) -> FeatureTable {
        self.builds.fetch_add(1, Ordering::AcqRel);

        let mut table = FeatureTable::with_capacity(self.layout.max_len());
        for t in self.layout.tables() {
            self.add(&mut table, t);
        }
        if let Some(rng) = self.layout.rng() {
            if settings.get_bool(&plugin_key(settings, USE_RNG), true) {
                self.add(&mut table, rng);
            } else {
                debug!("RNG features disabled by configuration");
            }
        }
        debug!(
            "Published {} features (upper bound {})",
            table.len(),
            self.layout.max_len()
        );
        table
    }

    fn add(&self, table: &mut FeatureTable, sub: &SubTable) {
        let added = table.add(sub, self.available);
        trace!("{} sub-table contributed {} features", sub.id, added);
    }
}

/// The process-wide publisher, using the compiled capabilities
static PUBLISHER: Lazy<Publisher> =
    Lazy::new(|| Publisher::new(Layout::standard(), Availability::compiled()));

/// The process-wide publisher
pub fn global() -> &'static Publisher {
    &PUBLISHER
}

/// Returns the process-wide feature table, building it on first use
pub fn get_features(settings: &dyn Settings) -> &'static FeatureTable {
    PUBLISHER.get_features(settings)
}
