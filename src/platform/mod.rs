//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock timestamps
//! - Log output

/// Initialize logging. On the browser target this wires the `log` facade to
/// the devtools console; the embedding shell calls it once at startup.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    // Host embeddings bring their own logger
}

/// Current wall-clock time as ISO-8601 (`2026-08-30T12:34:56.789Z`)
#[cfg(target_arch = "wasm32")]
pub fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Today's date, `YYYY-MM-DD` - the date half of the ISO timestamp
pub fn today() -> String {
    let iso = now_iso();
    match iso.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => iso,
    }
}
