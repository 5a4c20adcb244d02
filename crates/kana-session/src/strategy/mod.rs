//! Per-engine interpretation of input events.
//!
//! Every variant owns the [`KanaHistory`] of its element and decides, per
//! event, whether to push, remove, clear or finalize it.

mod continuous;
mod keystroke;
mod phrase_aware;

use kana_core::{contains_non_kana, extract_trailing_kana, KanaHistory, KanaMatcher};

use crate::types::{Engine, ErrorKind};

use continuous::Continuous;
use keystroke::Keystroke;
use phrase_aware::PhraseAware;

/// Read-only inputs shared by all strategies.
pub(crate) struct Context<'a> {
    pub(crate) matcher: &'a KanaMatcher,
    pub(crate) allow_space: bool,
    pub(crate) stop_on_error: bool,
}

/// What an event did to the session, before listener gating.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Nothing,
    Cleared,
    Confirmed(String),
    Anomaly(ErrorKind),
}

impl Outcome {
    fn finalized(history: &mut KanaHistory) -> Self {
        history.finalize().map_or(Self::Nothing, Self::Confirmed)
    }
}

pub(crate) enum Strategy {
    Continuous(Continuous),
    PhraseAware(PhraseAware),
    Keystroke(Keystroke),
    Null,
}

impl Strategy {
    pub(crate) fn new(engine: Engine) -> Self {
        match engine {
            Engine::Continuous => Self::Continuous(Continuous::new()),
            Engine::PhraseAware => Self::PhraseAware(PhraseAware::new()),
            Engine::Keystroke => Self::Keystroke(Keystroke::new()),
            Engine::Null => Self::Null,
        }
    }

    pub(crate) fn history(&self) -> Option<&KanaHistory> {
        match self {
            Self::Continuous(s) => Some(&s.history),
            Self::PhraseAware(s) => Some(&s.history),
            Self::Keystroke(s) => Some(&s.history),
            Self::Null => None,
        }
    }

    pub(crate) fn on_focus(&mut self, value: &str) -> Outcome {
        match self {
            Self::Continuous(s) => s.on_focus(),
            Self::Keystroke(s) => s.on_focus(value),
            Self::PhraseAware(_) | Self::Null => {}
        }
        Outcome::Nothing
    }

    pub(crate) fn on_key_down(&mut self, key: &str, code: u16) -> Outcome {
        if let Self::Continuous(s) = self {
            s.on_key_down(key, code);
        }
        Outcome::Nothing
    }

    pub(crate) fn on_key_up(
        &mut self,
        ctx: &Context,
        key: &str,
        code: u16,
        value: &str,
    ) -> Outcome {
        match self {
            Self::Continuous(s) => s.on_key_up(code, value),
            Self::PhraseAware(s) => s.on_key_up(code, value),
            Self::Keystroke(s) => s.on_key_up(ctx, key, code, value),
            Self::Null => Outcome::Nothing,
        }
    }

    pub(crate) fn on_composition_update(&mut self, ctx: &Context, data: &str) -> Outcome {
        match self {
            Self::Continuous(s) => {
                apply_composition(&mut s.history, ctx, data, ShrinkPolicy::Delete);
            }
            Self::PhraseAware(s) => {
                apply_composition(&mut s.history, ctx, data, ShrinkPolicy::PhraseIfConverted);
            }
            Self::Keystroke(_) | Self::Null => {}
        }
        Outcome::Nothing
    }

    pub(crate) fn on_composition_end(&mut self) -> Outcome {
        match self {
            Self::Continuous(s) => Outcome::finalized(&mut s.history),
            Self::PhraseAware(s) => Outcome::finalized(&mut s.history),
            Self::Keystroke(_) | Self::Null => Outcome::Nothing,
        }
    }
}

/// How a composition snapshot shorter than the last one is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShrinkPolicy {
    /// Always a deletion.
    Delete,
    /// A phrase boundary when the raw data holds converted (non-kana) text,
    /// otherwise a deletion.
    PhraseIfConverted,
}

/// Record one composition-update snapshot.
pub(crate) fn apply_composition(
    history: &mut KanaHistory,
    ctx: &Context,
    data: &str,
    policy: ShrinkPolicy,
) {
    if ctx.allow_space && ctx.matcher.is_space_token(data) {
        history.push(data);
        return;
    }

    let latest = extract_trailing_kana(ctx.matcher, data);
    if latest.is_empty() {
        return;
    }

    let shrunk = match history.last() {
        Some(last) if last == latest => return,
        Some(last) => latest.chars().count() < last.chars().count(),
        None => false,
    };

    if !shrunk {
        history.push(&latest);
        return;
    }

    match policy {
        ShrinkPolicy::PhraseIfConverted if contains_non_kana(ctx.matcher, data) => {
            history.push(&latest);
        }
        _ => history.remove(&latest),
    }
}
