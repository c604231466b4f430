// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

#![warn(missing_docs)]

//! This is cryptoplug
//!
//! The capability registry of the botan cryptographic backend. At first
//! use it assembles, from per-family sub-tables, the ordered list of
//! constructors and algorithms the backend was built with, and publishes
//! it once for the whole process through a small plugin descriptor.
//!
//! Which algorithms exist is decided by the [Availability] the backend was
//! compiled with (see the cargo features) and by a single runtime setting,
//! `<namespace>.plugins.botan.use_rng`, that controls whether random
//! number generators are advertised.

pub mod algorithm;
pub mod availability;
pub mod config;
pub mod error;
pub mod feature;
pub mod plugin;
pub mod publisher;
pub mod table;
pub mod tables;

#[cfg(feature = "log")]
pub mod log;

pub use availability::{Availability, Requirement};
pub use config::{Config, Settings};
pub use error::{Error, ErrorKind, Result};
pub use feature::{Constructor, Family, Feature, FeatureKind, Provider};
pub use plugin::{plugin_create, plugin_create_default, BotanPlugin, Plugin};
pub use publisher::{get_features, Publisher};
pub use table::FeatureTable;
pub use tables::Layout;

#[cfg(test)]
mod tests;
