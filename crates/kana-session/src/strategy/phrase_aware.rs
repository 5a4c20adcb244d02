use kana_core::KanaHistory;

use super::Outcome;
use crate::types::key;

/// Engines without usable key codes during composition.
pub(crate) struct PhraseAware {
    pub(super) history: KanaHistory,
}

impl PhraseAware {
    pub(super) fn new() -> Self {
        Self {
            history: KanaHistory::new(),
        }
    }

    pub(super) fn on_key_up(&mut self, code: u16, value: &str) -> Outcome {
        if code == key::BACKSPACE && value.is_empty() {
            self.history.clear();
            return Outcome::Cleared;
        }
        Outcome::Nothing
    }
}
