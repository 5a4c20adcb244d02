use kana_core::KanaHistory;
use tracing::debug;

use super::Outcome;
use crate::types::{key, KeyInput};

/// Engines that fire composition-end for every accepted phrase.
pub(crate) struct Continuous {
    pub(super) history: KanaHistory,
    /// Key-downs still waiting for their key-up.
    pressed: Vec<KeyInput>,
}

impl Continuous {
    pub(super) fn new() -> Self {
        Self {
            history: KanaHistory::new(),
            pressed: Vec::new(),
        }
    }

    pub(super) fn on_focus(&mut self) {
        self.pressed.clear();
    }

    pub(super) fn on_key_down(&mut self, key: &str, code: u16) {
        self.pressed.push(KeyInput {
            key: key.to_string(),
            code,
        });
    }

    pub(super) fn on_key_up(&mut self, code: u16, value: &str) -> Outcome {
        let down = self.pressed.pop();
        if code != key::BACKSPACE {
            return Outcome::Nothing;
        }
        // A backspace the IME consumed only edited the composition.
        if let Some(d) = down.filter(|d| d.code == key::PROCESS) {
            debug!(key = %d.key, "backspace consumed by IME");
            return Outcome::Nothing;
        }
        if value.is_empty() {
            self.history.clear();
            return Outcome::Cleared;
        }
        Outcome::Nothing
    }
}
