// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

#![warn(missing_docs)]

//! This is the cryptoplug shared object
//!
//! Exports the botan backend plugin descriptor to C plugin loaders.

use std::ffi::{c_char, c_int, CString};
use std::ptr;

use cryptoplug::{plugin_create_default, FeatureKind, FeatureTable, Plugin};
use log::error;
use once_cell::sync::OnceCell;

/// Entry kind value of REGISTER entries
pub const FEATURE_REGISTER: u32 = 1;
/// Entry kind value of PROVIDE entries
pub const FEATURE_PROVIDE: u32 = 2;

/// Exclusivity value when the family has no such notion
pub const EXCLUSIVE_UNSET: c_int = -1;

/// A feature entry as seen from C
#[repr(C)]
#[derive(Debug)]
pub struct CFeature {
    /// [FEATURE_REGISTER] or [FEATURE_PROVIDE]
    pub kind: u32,
    /// Family code
    pub family: u32,
    /// Algorithm code, 0 on REGISTER entries
    pub algorithm: u32,
    /// Key size in bytes, 0 when unconstrained
    pub key_size: usize,
    /// 1 or 0 on exclusive or shared REGISTER entries, [EXCLUSIVE_UNSET]
    /// otherwise
    pub exclusive: c_int,
    /// NUL terminated factory symbol name
    pub constructor: *const c_char,
}

/// The plugin vtable handed to the loader
#[repr(C)]
pub struct CPlugin {
    /// Returns the NUL terminated backend name
    pub get_name: extern "C" fn(this: *mut CPlugin) -> *const c_char,
    /// Stores a pointer to the feature array and returns its length
    pub get_features: extern "C" fn(
        this: *mut CPlugin,
        features: *mut *const CFeature,
    ) -> c_int,
    /// Releases the descriptor
    pub destroy: extern "C" fn(this: *mut CPlugin),
}

/* The vtable must stay the first field, the loader only knows about it */
#[repr(C)]
struct PrivatePlugin {
    public: CPlugin,
    name: CString,
    plugin: Box<dyn Plugin>,
}

/// C rendition of the shared feature table, built once and never freed
struct CTable {
    entries: Vec<CFeature>,
    _symbols: Vec<CString>,
}

/* SAFETY: the raw pointers in `entries` point into `_symbols`, which is
 * owned by the same value and never mutated after construction */
unsafe impl Send for CTable {}
unsafe impl Sync for CTable {}

static C_TABLE: OnceCell<CTable> = OnceCell::new();

fn c_table(table: &FeatureTable) -> CTable {
    let mut symbols = Vec::with_capacity(table.len());
    let mut entries = Vec::with_capacity(table.len());
    for f in table.iter() {
        /* factory symbols are plain identifiers */
        let symbol = CString::new(f.constructor.symbol()).unwrap_or_default();
        let (kind, exclusive) = match f.kind {
            FeatureKind::Register { exclusive } => (
                FEATURE_REGISTER,
                exclusive.map(c_int::from).unwrap_or(EXCLUSIVE_UNSET),
            ),
            FeatureKind::Provide => (FEATURE_PROVIDE, EXCLUSIVE_UNSET),
        };
        entries.push(CFeature {
            kind: kind,
            family: f.family.code(),
            algorithm: f.algorithm.map(|a| a.code()).unwrap_or(0),
            key_size: f.key_size.unwrap_or(0),
            exclusive: exclusive,
            constructor: symbol.as_ptr(),
        });
        /* moving the CString does not move its heap buffer */
        symbols.push(symbol);
    }
    CTable {
        entries: entries,
        _symbols: symbols,
    }
}

extern "C" fn get_name(this: *mut CPlugin) -> *const c_char {
    if this.is_null() {
        return ptr::null();
    }
    /* SAFETY: `this` was returned by botan_plugin_create and points to the
     * first field of a live PrivatePlugin */
    let this = unsafe { &*(this as *const PrivatePlugin) };
    this.name.as_ptr()
}

extern "C" fn get_features(
    this: *mut CPlugin,
    features: *mut *const CFeature,
) -> c_int {
    if this.is_null() || features.is_null() {
        return 0;
    }
    /* SAFETY: see get_name */
    let this = unsafe { &*(this as *const PrivatePlugin) };
    let table = C_TABLE.get_or_init(|| c_table(this.plugin.features()));
    let count = match c_int::try_from(table.entries.len()) {
        Ok(c) => c,
        Err(_) => {
            error!("Feature table too large for the C interface");
            return 0;
        }
    };
    /* SAFETY: the caller passes a valid location to store the pointer */
    unsafe {
        *features = table.entries.as_ptr();
    }
    count
}

extern "C" fn destroy(this: *mut CPlugin) {
    if this.is_null() {
        return;
    }
    /* SAFETY: `this` came from Box::into_raw in botan_plugin_create and
     * the loader destroys each descriptor once */
    let this = unsafe { Box::from_raw(this as *mut PrivatePlugin) };
    let PrivatePlugin { plugin, .. } = *this;
    plugin.destroy();
}

/// Creates the botan plugin descriptor.
///
/// Settings come from the cryptoplug configuration file if one is found.
/// The returned descriptor must be released with its `destroy` entry.
#[unsafe(no_mangle)]
pub extern "C" fn botan_plugin_create() -> *mut CPlugin {
    let plugin = plugin_create_default();
    let name = CString::new(plugin.name()).unwrap_or_default();
    let this = Box::new(PrivatePlugin {
        public: CPlugin {
            get_name: get_name,
            get_features: get_features,
            destroy: destroy,
        },
        name: name,
        plugin: plugin,
    });
    Box::into_raw(this) as *mut CPlugin
}
