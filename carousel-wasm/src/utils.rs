use carousel_core::CarouselConfig;
use log::{Level, LevelFilter, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::constants::{CONFIG_GLOBAL, DEBUG_QUERY_PARAM};

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; `?carouselDebug=1` raises the level.
pub fn init_logging(window: &Window) {
    let search = window.location().search().unwrap_or_default();
    let level = level_from_query(get_query_param(&search, DEBUG_QUERY_PARAM).as_deref());
    // a second start() keeps the first logger
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

pub fn level_from_query(value: Option<&str>) -> LevelFilter {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("trace") => LevelFilter::Trace,
        Some("1" | "true" | "debug") => LevelFilter::Debug,
        Some("0" | "false" | "off") => LevelFilter::Warn,
        _ => LevelFilter::Info,
    }
}

/// Read `window.__CAROUSEL_CONFIG`. Absent or invalid config falls back to
/// the defaults.
pub fn load_config(window: &Window) -> CarouselConfig {
    let Some(text) = global_json(window, CONFIG_GLOBAL) else {
        return CarouselConfig::default();
    };
    match CarouselConfig::from_json(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("ignoring window.{CONFIG_GLOBAL}: {e}");
            CarouselConfig::default()
        }
    }
}

/// JSON text of a global property, if it is set to anything.
fn global_json(window: &Window, key: &str) -> Option<String> {
    let v = js_sys::Reflect::get(window, &JsValue::from_str(key)).ok()?;
    if v.is_undefined() || v.is_null() {
        return None;
    }
    if let Some(s) = v.as_string() {
        return Some(s);
    }
    js_sys::JSON::stringify(&v).ok()?.as_string()
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    percent_encoding::percent_decode_str(s)
        .decode_utf8()
        .unwrap_or_else(|_| s.into())
        .to_string()
}
