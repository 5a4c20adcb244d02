use kana_core::{diff_from_baseline, extract_trailing_kana, KanaHistory};
use tracing::debug;

use super::{Context, Outcome};
use crate::types::{key, ErrorKind, SPACE_KEY_NAMES};

/// Engines that report reliable key-ups while composing. Composition events
/// are ignored; the field value is the only source of truth.
pub(crate) struct Keystroke {
    pub(super) history: KanaHistory,
    /// Field value when focus was gained.
    baseline: String,
}

impl Keystroke {
    pub(super) fn new() -> Self {
        Self {
            history: KanaHistory::new(),
            baseline: String::new(),
        }
    }

    pub(super) fn on_focus(&mut self, value: &str) {
        value.clone_into(&mut self.baseline);
    }

    pub(super) fn on_key_up(
        &mut self,
        ctx: &Context,
        key_name: &str,
        code: u16,
        value: &str,
    ) -> Outcome {
        match code {
            key::BACKSPACE => {
                if value.is_empty() {
                    self.history.clear();
                    return Outcome::Cleared;
                }
                let kana = self.composing_kana(ctx, value);
                self.history.remove(&kana);
                Outcome::Nothing
            }
            key::TAB => {
                // Tab mid-composition accepts a prediction; its reading is unknown.
                debug!(stop = ctx.stop_on_error, "tab during composition");
                self.history.set_stopped(ctx.stop_on_error);
                Outcome::Anomaly(ErrorKind::PredictiveConversion)
            }
            key::ENTER => Outcome::finalized(&mut self.history),
            _ => {
                match full_width_space(ctx, key_name, code, value) {
                    Some(space) => self.history.push(space),
                    None => {
                        let kana = self.composing_kana(ctx, value);
                        self.history.push(&kana)
                    }
                };
                Outcome::Nothing
            }
        }
    }

    fn composing_kana(&self, ctx: &Context, value: &str) -> String {
        let composing = diff_from_baseline(&self.baseline, value);
        extract_trailing_kana(ctx.matcher, &composing)
    }
}

/// The trailing full-width space of `value`, if this key-up typed one.
fn full_width_space<'v>(
    ctx: &Context,
    key_name: &str,
    code: u16,
    value: &'v str,
) -> Option<&'v str> {
    if !ctx.allow_space || code != key::SPACE || !SPACE_KEY_NAMES.contains(&key_name) {
        return None;
    }
    let (start, _) = value.char_indices().next_back()?;
    let last = &value[start..];
    ctx.matcher.is_space_token(last).then_some(last)
}
