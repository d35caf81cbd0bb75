//! `log` backend that writes to the browser console (stderr off-wasm).

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::GameError;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit(record.level(), &format_line(record));
    }

    fn flush(&self) {}
}

fn format_line(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;
    let msg = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&msg),
        Level::Warn => console::warn_1(&msg),
        Level::Info => console::info_1(&msg),
        Level::Debug | Level::Trace => console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the console logger. Safe to call more than once; later calls only
/// adjust the level.
pub fn init(filter: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(filter);
}

pub fn parse_level(name: &str) -> Result<LevelFilter, GameError> {
    name.trim()
        .parse::<LevelFilter>()
        .map_err(|_| GameError::InvalidConfig(format!("unknown log level '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("info").unwrap(), LevelFilter::Info);
        assert_eq!(parse_level(" DEBUG ").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn line_carries_level_and_target() {
        let line = format_line(
            &Record::builder()
                .args(format_args!("matched {} pairs", 3))
                .level(Level::Info)
                .target("memory_match::board")
                .build(),
        );
        assert_eq!(line, "[INFO] memory_match::board: matched 3 pairs");
    }
}
