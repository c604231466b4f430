// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! The plugin descriptor handed to the host loader.

use std::fmt::Debug;
use std::sync::Arc;

use log::{debug, error};

use crate::config::{Config, Settings};
use crate::publisher::{self, Publisher};
use crate::table::FeatureTable;

/// Name under which the backend registers
pub const BACKEND_NAME: &str = "botan";

/// What a host loader sees of a backend plugin
pub trait Plugin: Debug + Send + Sync {
    /// Stable identifying name of the backend
    fn name(&self) -> &'static str;

    /// The backend's feature table, read-only and shared by every
    /// descriptor in the process
    fn features(&self) -> &FeatureTable;

    /// Releases the descriptor. The shared feature table stays alive.
    fn destroy(self: Box<Self>);
}

/// Descriptor of the botan backend
#[derive(Debug)]
pub struct BotanPlugin {
    settings: Arc<dyn Settings>,
    publisher: &'static Publisher,
}

impl BotanPlugin {
    /// Descriptor backed by the process-wide publisher
    pub fn new(settings: Arc<dyn Settings>) -> BotanPlugin {
        Self::with_publisher(settings, publisher::global())
    }

    /// Descriptor backed by a specific publisher
    pub fn with_publisher(
        settings: Arc<dyn Settings>,
        publisher: &'static Publisher,
    ) -> BotanPlugin {
        BotanPlugin {
            settings: settings,
            publisher: publisher,
        }
    }
}

impl Plugin for BotanPlugin {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn features(&self) -> &FeatureTable {
        self.publisher.get_features(self.settings.as_ref())
    }

    fn destroy(self: Box<Self>) {
        debug!("Destroying {} plugin descriptor", BACKEND_NAME);
    }
}

/// Creates a descriptor reading its settings from `settings`
pub fn plugin_create(settings: Arc<dyn Settings>) -> Box<dyn Plugin> {
    Box::new(BotanPlugin::new(settings))
}

/// Creates a descriptor from the configuration file, if there is one.
///
/// A configuration file that exists but can't be loaded is reported and
/// ignored, so the plugin still comes up with default settings.
pub fn plugin_create_default() -> Box<dyn Plugin> {
    let config = match Config::load_default() {
        Ok(c) => c,
        Err(e) => {
            error!("Ignoring configuration: {}", e);
            Config::new()
        }
    };
    plugin_create(Arc::new(config))
}
