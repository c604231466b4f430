// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! Optional tracing backend, enabled with the `log` feature.

use std::fs::File;

use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};

/// Environment variable selecting where traces go
pub const TRACE_ENV: &str = "CRYPTOPLUG_TRACE";
/// Environment variable selecting the trace level
pub const TRACE_LEVEL_ENV: &str = "CRYPTOPLUG_TRACE_LEVEL";

/// Runs [cryptoplug_log_init] when the library is loaded
#[used]
#[cfg_attr(target_os = "linux", unsafe(link_section = ".init_array"))]
pub static INITIALIZE: extern "C" fn() = cryptoplug_log_init;

/// Maps the value of CRYPTOPLUG_TRACE_LEVEL to a filter.
///
/// Unset means errors only, unknown values enable everything.
fn trace_level(value: Option<&str>) -> LevelFilter {
    match value {
        None => LevelFilter::Error,
        Some(l) => l.parse::<LevelFilter>().unwrap_or(LevelFilter::Trace),
    }
}

/// Installs a logger as directed by CRYPTOPLUG_TRACE: `stdout` logs to
/// standard output, any other value is taken as a file name. When the
/// variable is absent, or the logger can't be set up, tracing stays off and
/// nothing is reported.
#[unsafe(no_mangle)]
pub extern "C" fn cryptoplug_log_init() {
    let level = trace_level(std::env::var(TRACE_LEVEL_ENV).ok().as_deref());
    let target = match std::env::var(TRACE_ENV) {
        Ok(t) => t,
        Err(_) => return,
    };
    if target == "stdout" {
        let _ = SimpleLogger::init(level, Config::default());
        return;
    }
    if let Ok(file) = File::create(&target) {
        let _ = WriteLogger::init(level, Config::default(), file);
    }
}
