//! Diagnostic channel: process-wide log and event callbacks.
//!
//! The layout engine never aborts on recoverable problems such as a font
//! without a definition for some character. It reports them here instead
//! and carries on. Nothing is emitted unless a callback is installed.

use std::sync::{Mutex, OnceLock};

/// Event name emitted when a font has no definition for a character.
pub const EVENT_MISSING_GLYPH: &str = "missing_glyph";

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = event_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Emit an event to the registered callback.
pub fn emit_event(name: &str, data: &str) {
    if let Ok(guard) = event_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(name, data);
        }
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Emit a log message.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Remove both callbacks.
pub fn clear_callbacks() {
    if let Ok(mut guard) = event_callback().lock() {
        *guard = None;
    }
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Report a character the font has no definition for.
pub(crate) fn report_missing_glyph(ch: char) {
    let code = format!("U+{:04X}", u32::from(ch));
    emit_log(
        LogLevel::Warn,
        &format!("no glyph definition for {ch:?} ({code}); character is skipped"),
    );
    emit_event(EVENT_MISSING_GLYPH, &code);
}
