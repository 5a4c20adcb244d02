//! JSONL event traces.
//!
//! One normalized input event per line, tagged on `type`:
//!
//! ```text
//! {"type":"focus","value":""}
//! {"type":"key_down","key":"a","code":229}
//! {"type":"composition_update","data":"と"}
//! {"type":"key_up","key":"a","code":229,"value":"と"}
//! {"type":"composition_end"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::io;
use std::path::Path;

use kana_session::{InputEvent, KanaEvent};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    Focus {
        #[serde(default)]
        value: String,
    },
    KeyDown {
        key: String,
        code: u16,
    },
    KeyUp {
        key: String,
        code: u16,
        #[serde(default)]
        value: String,
    },
    CompositionUpdate {
        data: String,
    },
    CompositionEnd,
    Input {
        #[serde(default)]
        data: Option<String>,
        #[serde(default)]
        is_composing: bool,
    },
}

impl TraceEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Focus { .. } => "focus",
            Self::KeyDown { .. } => "key_down",
            Self::KeyUp { .. } => "key_up",
            Self::CompositionUpdate { .. } => "composition_update",
            Self::CompositionEnd => "composition_end",
            Self::Input { .. } => "input",
        }
    }

    /// Short argument summary for text output.
    pub fn detail(&self) -> String {
        match self {
            Self::Focus { value } => format!("{value:?}"),
            Self::KeyDown { key, code } => format!("{key:?} {code}"),
            Self::KeyUp { key, code, value } => format!("{key:?} {code} {value:?}"),
            Self::CompositionUpdate { data } => format!("{data:?}"),
            Self::CompositionEnd => String::new(),
            Self::Input { data, is_composing } => format!("{data:?} composing={is_composing}"),
        }
    }
}

impl From<TraceEvent> for InputEvent {
    fn from(ev: TraceEvent) -> Self {
        match ev {
            TraceEvent::Focus { value } => Self::Focus { value },
            TraceEvent::KeyDown { key, code } => Self::KeyDown { key, code },
            TraceEvent::KeyUp { key, code, value } => Self::KeyUp { key, code, value },
            TraceEvent::CompositionUpdate { data } => Self::CompositionUpdate { data },
            TraceEvent::CompositionEnd => Self::CompositionEnd,
            TraceEvent::Input { data, is_composing } => Self::Input { data, is_composing },
        }
    }
}

/// Serializable form of an emitted notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationRecord {
    Clear,
    Update { text: String },
    Error { kind: String, message: String },
}

impl From<KanaEvent> for NotificationRecord {
    fn from(ev: KanaEvent) -> Self {
        match ev {
            KanaEvent::Clear => Self::Clear,
            KanaEvent::Update(text) => Self::Update { text },
            KanaEvent::Error { kind, message } => Self::Error {
                kind: kind.as_str().to_string(),
                message,
            },
        }
    }
}

pub fn parse_trace(content: &str) -> Result<Vec<TraceEvent>, TraceError> {
    let mut events = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|source| TraceError::Parse {
            line: i + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

pub fn read_trace(path: &Path) -> Result<Vec<TraceEvent>, TraceError> {
    let content = fs::read_to_string(path)?;
    parse_trace(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trace() {
        let content = r#"
# typed on a phone
{"type":"focus","value":""}
{"type":"key_down","key":"Process","code":229}
{"type":"composition_update","data":"と"}
{"type":"key_up","key":"Process","code":229,"value":"と"}
{"type":"input","data":"と","is_composing":true}
{"type":"composition_end"}
"#;
        let events = parse_trace(content).unwrap();
        assert_eq!(events.len(), 6);
        assert_eq!(
            events[0],
            TraceEvent::Focus {
                value: String::new()
            }
        );
        assert_eq!(
            events[2],
            TraceEvent::CompositionUpdate {
                data: "と".to_string()
            }
        );
        assert_eq!(events[5], TraceEvent::CompositionEnd);
        assert_eq!(
            InputEvent::from(events[3].clone()),
            InputEvent::key_up("Process", 229, "と")
        );
    }

    #[test]
    fn test_parse_error_reports_line() {
        let content = "{\"type\":\"focus\"}\n{\"type\":\"wheel\"}\n";
        let err = parse_trace(content).unwrap_err();
        assert!(matches!(err, TraceError::Parse { line: 2, .. }));
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn test_read_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.jsonl");
        fs::write(&path, "{\"type\":\"composition_end\"}\n").unwrap();
        assert_eq!(read_trace(&path).unwrap(), [TraceEvent::CompositionEnd]);

        let missing = dir.path().join("missing.jsonl");
        assert!(matches!(read_trace(&missing), Err(TraceError::Io(_))));
    }

    #[test]
    fn test_notification_json() {
        let rec = NotificationRecord::from(KanaEvent::Update("トウ".to_string()));
        assert_eq!(
            serde_json::to_string(&rec).unwrap(),
            r#"{"type":"update","text":"トウ"}"#
        );
    }
}
