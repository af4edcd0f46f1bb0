use std::{
    cmp::Ordering,
    sync::atomic::{AtomicU8, Ordering as AtomicOrdering},
};

pub const DEFAULT_MIN_LEVEL: LogLevel = LogLevel::Info;

static MIN_LEVEL: AtomicU8 = AtomicU8::new(DEFAULT_MIN_LEVEL.rank());

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl LogLevel {
    const fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
        }
    }

    fn from_rank(rank: u8) -> Self {
        if rank == 0 {
            Self::Debug
        } else {
            Self::Info
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub fn set_min_level(level: LogLevel) {
    MIN_LEVEL.store(level.rank(), AtomicOrdering::Relaxed);
}

pub fn min_level() -> LogLevel {
    LogLevel::from_rank(MIN_LEVEL.load(AtomicOrdering::Relaxed))
}

/// Emits one structured event line if `level` passes the process-wide filter.
pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    if !passes(level, min_level()) {
        return;
    }

    emit(&format_event(now_unix_seconds(), level, event, fields));
}

fn passes(level: LogLevel, min: LogLevel) -> bool {
    level >= min
}

fn format_event(ts: u64, level: LogLevel, event: &str, fields: serde_json::Value) -> String {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload).to_string()
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
pub fn now_unix_millis() -> u128 {
    js_sys::Date::now().max(0.0) as u128
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_unix_millis() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    (now_unix_millis() / 1_000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_ranks_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::from_rank(LogLevel::Debug.rank()), LogLevel::Debug);
    }

    #[test]
    fn parse_accepts_mixed_case_and_rejects_unknown() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn info_events_pass_the_default_filter() {
        assert_eq!(DEFAULT_MIN_LEVEL, LogLevel::Info);
        assert!(passes(LogLevel::Info, DEFAULT_MIN_LEVEL));
        assert!(!passes(LogLevel::Debug, DEFAULT_MIN_LEVEL));
        assert!(passes(LogLevel::Debug, LogLevel::Debug));
    }

    #[test]
    fn event_line_merges_fields_after_header() {
        let line = format_event(
            42,
            LogLevel::Info,
            "theme_write_failed",
            serde_json::json!({ "reason": "write_failed" }),
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed["ts"], 42);
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "theme_write_failed");
        assert_eq!(parsed["reason"], "write_failed");
    }

    #[test]
    fn non_object_fields_are_dropped() {
        let line = format_event(1, LogLevel::Debug, "tick", serde_json::Value::Null);
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed.as_object().map(|map| map.len()), Some(3));
    }
}
