use serde::Deserialize;
use std::cmp::Ordering;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Logger {
    threshold: LogLevel,
}

impl Logger {
    pub fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }

    pub fn debug(&self, event: &str, fields: serde_json::Value) {
        self.log_event(LogLevel::Debug, event, fields);
    }

    pub fn info(&self, event: &str, fields: serde_json::Value) {
        self.log_event(LogLevel::Info, event, fields);
    }

    pub fn warn(&self, event: &str, fields: serde_json::Value) {
        self.log_event(LogLevel::Warn, event, fields);
    }

    pub fn log_event(&self, level: LogLevel, event: &str, fields: serde_json::Value) {
        if let Some(line) = self.format_event(now_unix_millis(), level, event, fields) {
            emit(level, &line);
        }
    }

    fn format_event(
        &self,
        ts: u64,
        level: LogLevel,
        event: &str,
        fields: serde_json::Value,
    ) -> Option<String> {
        if level < self.threshold {
            return None;
        }

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

        Some(serde_json::Value::Object(payload).to_string())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let message = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&message),
        LogLevel::Info => web_sys::console::info_1(&message),
        LogLevel::Warn => web_sys::console::warn_1(&message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_below_threshold_are_dropped() {
        let logger = Logger::new(LogLevel::Info);

        let line = logger.format_event(1, LogLevel::Debug, "gallery_hover_enter", json!({}));
        assert!(line.is_none());
    }

    #[test]
    fn event_line_carries_fields() {
        let logger = Logger::new(LogLevel::Debug);

        let line = logger
            .format_event(1_700_000_000_000, LogLevel::Warn, "config_fallback", json!({ "reason": "duplicate" }))
            .expect("warn passes a debug threshold");
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("line is JSON");

        assert_eq!(parsed["ts"], 1_700_000_000_000u64);
        assert_eq!(parsed["level"], "warn");
        assert_eq!(parsed["event"], "config_fallback");
        assert_eq!(parsed["reason"], "duplicate");
    }

    #[test]
    fn level_parses_from_lowercase_name() {
        let level: LogLevel = serde_json::from_str("\"debug\"").expect("known level");

        assert_eq!(level, LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Warn);
    }
}
