use std::fmt;

// DOM `keyCode` values
pub mod key {
    pub const BACKSPACE: u16 = 8;
    pub const TAB: u16 = 9;
    pub const ENTER: u16 = 13;
    pub const SPACE: u16 = 32;
    /// Reported on key-down while the IME consumes the key.
    pub const PROCESS: u16 = 229;
}

/// Key names a space key-up may carry (`"Spacebar"` on legacy engines).
pub(crate) const SPACE_KEY_NAMES: [&str; 2] = ["Spacebar", " "];

/// A key identity as reported by key-down / key-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyInput {
    pub(crate) key: String,
    pub(crate) code: u16,
}

/// Normalized input event from the host element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The element gained focus; `value` is its current content.
    Focus { value: String },
    KeyDown { key: String, code: u16 },
    /// `value` is the element content after the key was processed.
    KeyUp { key: String, code: u16, value: String },
    CompositionUpdate { data: String },
    CompositionEnd,
    /// Informational only; no strategy acts on it.
    Input {
        data: Option<String>,
        is_composing: bool,
    },
}

impl InputEvent {
    pub fn focus(value: &str) -> Self {
        Self::Focus {
            value: value.to_string(),
        }
    }

    pub fn key_down(key: &str, code: u16) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            code,
        }
    }

    pub fn key_up(key: &str, code: u16, value: &str) -> Self {
        Self::KeyUp {
            key: key.to_string(),
            code,
            value: value.to_string(),
        }
    }

    pub fn composition_update(data: &str) -> Self {
        Self::CompositionUpdate {
            data: data.to_string(),
        }
    }
}

/// Anomalies a strategy can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input arrived in a way that suggests predictive conversion was used.
    PredictiveConversion,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PredictiveConversion => "predictive-conversion",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::PredictiveConversion => "predictive conversion may have been used",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KanaEvent {
    /// History was reset; any partial kana shown so far is stale.
    Clear,
    /// Finalized kana for one completed composition.
    Update(String),
    Error { kind: ErrorKind, message: String },
}

/// Which event-interpretation strategy a provider runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    /// Composition updates are trusted; composition-end arrives per phrase,
    /// so a shrinking snapshot is always a deletion.
    Continuous,
    /// Composition updates are trusted but key codes are not; a shrinking
    /// snapshot that still contains converted text is a phrase boundary.
    PhraseAware,
    /// Key-ups are reliable even while composing; the composition is the
    /// diff of the field against its value at focus time.
    Keystroke,
    /// Never records anything.
    Null,
}

impl Engine {
    /// Pick a strategy from a browser user-agent string.
    pub fn detect(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        let has = |needle: &str| ua.contains(needle);

        let is_edge = has("edge");
        let is_chrome = has("chrome") && !has("opr") && !is_edge;
        let is_safari = has("safari") && !has("chrome");
        let is_opera = has("opera");
        let is_ios = has("iphone") || has("ipad");
        let is_android = has("android");
        let is_ie11 = has("trident/7");
        let is_firefox = has("firefox");

        if is_chrome || is_safari || is_opera || is_ios || is_android {
            Self::Continuous
        } else if is_edge {
            Self::PhraseAware
        } else if is_ie11 {
            Self::Keystroke
        } else if is_firefox {
            Self::Continuous
        } else {
            Self::Null
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::PhraseAware => "phrase-aware",
            Self::Keystroke => "keystroke",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
