use kana_core::SettingsError;
use kana_session::{Engine, KanaEvent};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum KanaError {
    #[error("invalid settings: {msg}")]
    InvalidSettings { msg: String },
}

impl From<SettingsError> for KanaError {
    fn from(e: SettingsError) -> Self {
        Self::InvalidSettings { msg: e.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KanaEngineKind {
    Continuous,
    PhraseAware,
    Keystroke,
    Null,
}

impl From<Engine> for KanaEngineKind {
    fn from(engine: Engine) -> Self {
        match engine {
            Engine::Continuous => Self::Continuous,
            Engine::PhraseAware => Self::PhraseAware,
            Engine::Keystroke => Self::Keystroke,
            Engine::Null => Self::Null,
        }
    }
}

impl From<KanaEngineKind> for Engine {
    fn from(kind: KanaEngineKind) -> Self {
        match kind {
            KanaEngineKind::Continuous => Self::Continuous,
            KanaEngineKind::PhraseAware => Self::PhraseAware,
            KanaEngineKind::Keystroke => Self::Keystroke,
            KanaEngineKind::Null => Self::Null,
        }
    }
}

/// Notification returned from every session call.
#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KanaNotification {
    Clear,
    Update { text: String },
    Error { kind: String, message: String },
}

impl From<KanaEvent> for KanaNotification {
    fn from(event: KanaEvent) -> Self {
        match event {
            KanaEvent::Clear => Self::Clear,
            KanaEvent::Update(text) => Self::Update { text },
            KanaEvent::Error { kind, message } => Self::Error {
                kind: kind.as_str().to_string(),
                message,
            },
        }
    }
}
