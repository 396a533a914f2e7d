//! Console Logger
//!
//! Backs the `log` facade with the browser console so diagnostics from
//! target-agnostic code (rollbacks, failed reconciles) reach devtools.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = wasm_bindgen::JsValue::from(format!(
            "[{}] {}",
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_gates_records_below_max_level() {
        init(LevelFilter::Info).unwrap();

        let warn = Metadata::builder().level(Level::Warn).target("t").build();
        let debug = Metadata::builder().level(Level::Debug).target("t").build();
        assert!(LOGGER.enabled(&warn));
        assert!(!LOGGER.enabled(&debug));
    }
}
