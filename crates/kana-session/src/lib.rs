//! Kana reconstruction from IME composition events.
//!
//! `KanaProvider` receives the normalized event stream of one input element,
//! lets the engine-specific strategy maintain the snapshot history, and
//! notifies listeners with the finalized kana.

mod emitter;
mod strategy;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use kana_core::{BehaviorSettings, KanaMatcher, Settings, SettingsError};
use tracing::{debug_span, info};

pub use emitter::{Listener, ListenerId};
pub use types::{key, Engine, ErrorKind, InputEvent, KanaEvent};

use emitter::Emitter;
use strategy::{Context, Outcome, Strategy};

/// Event interpreter and notifier for one input element.
pub struct KanaProvider {
    engine: Engine,
    strategy: Strategy,
    matcher: Arc<KanaMatcher>,
    behavior: BehaviorSettings,
    emitter: Emitter,
}

impl KanaProvider {
    pub fn new(engine: Engine, settings: &Settings) -> Result<Self, SettingsError> {
        let matcher = Arc::new(settings.matcher()?);
        Ok(Self::with_matcher(engine, matcher, settings.behavior))
    }

    /// Build a provider around an already compiled matcher, so several
    /// elements can share one set of patterns.
    pub fn with_matcher(
        engine: Engine,
        matcher: Arc<KanaMatcher>,
        behavior: BehaviorSettings,
    ) -> Self {
        Self {
            engine,
            strategy: Strategy::new(engine),
            matcher,
            behavior,
            emitter: Emitter::default(),
        }
    }

    pub fn for_user_agent(user_agent: &str, settings: &Settings) -> Result<Self, SettingsError> {
        let engine = Engine::detect(user_agent);
        if settings.behavior.debug {
            info!(user_agent, %engine, "engine detected");
        }
        Self::new(engine, settings)
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn behavior(&self) -> &BehaviorSettings {
        &self.behavior
    }

    /// Snapshots recorded in the current session.
    pub fn snapshots(&self) -> &[String] {
        match self.strategy.history() {
            Some(h) => h.snapshots(),
            None => &[],
        }
    }

    pub fn is_composing(&self) -> bool {
        !self.snapshots().is_empty()
    }

    pub fn is_stopped(&self) -> bool {
        self.strategy.history().is_some_and(|h| h.is_stopped())
    }

    /// Register a listener. Listeners are called synchronously, in
    /// registration order, before the event-handling call returns.
    pub fn on<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&KanaEvent) + Send + 'static,
    {
        self.emitter.on(Box::new(listener))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.emitter.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.emitter.len()
    }

    /// Process one event. Returns the notification it produced, which has
    /// already been delivered to every listener.
    pub fn handle(&mut self, event: InputEvent) -> Option<KanaEvent> {
        let _span = debug_span!("handle", engine = %self.engine, ?event).entered();

        let ctx = Context {
            matcher: &self.matcher,
            allow_space: self.behavior.allow_space,
            stop_on_error: self.behavior.stop_on_error,
        };
        let outcome = match &event {
            InputEvent::Focus { value } => self.strategy.on_focus(value),
            InputEvent::KeyDown { key, code } => self.strategy.on_key_down(key, *code),
            InputEvent::KeyUp { key, code, value } => {
                self.strategy.on_key_up(&ctx, key, *code, value)
            }
            InputEvent::CompositionUpdate { data } => {
                self.strategy.on_composition_update(&ctx, data)
            }
            InputEvent::CompositionEnd => self.strategy.on_composition_end(),
            InputEvent::Input { .. } => Outcome::Nothing,
        };

        if self.behavior.debug {
            info!(?event, snapshots = ?self.snapshots(), "input event");
        }

        let notification = self.notification(outcome)?;
        self.emitter.emit(&notification);
        Some(notification)
    }

    pub fn focus(&mut self, value: &str) -> Option<KanaEvent> {
        self.handle(InputEvent::focus(value))
    }

    pub fn key_down(&mut self, key: &str, code: u16) -> Option<KanaEvent> {
        self.handle(InputEvent::key_down(key, code))
    }

    pub fn key_up(&mut self, key: &str, code: u16, value: &str) -> Option<KanaEvent> {
        self.handle(InputEvent::key_up(key, code, value))
    }

    pub fn composition_update(&mut self, data: &str) -> Option<KanaEvent> {
        self.handle(InputEvent::composition_update(data))
    }

    pub fn composition_end(&mut self) -> Option<KanaEvent> {
        self.handle(InputEvent::CompositionEnd)
    }

    pub fn input(&mut self, data: Option<&str>, is_composing: bool) -> Option<KanaEvent> {
        self.handle(InputEvent::Input {
            data: data.map(str::to_string),
            is_composing,
        })
    }

    fn notification(&self, outcome: Outcome) -> Option<KanaEvent> {
        match outcome {
            Outcome::Nothing => None,
            Outcome::Cleared => self.behavior.on_cleared.then_some(KanaEvent::Clear),
            Outcome::Confirmed(kana) => {
                let text = if self.behavior.to_katakana {
                    self.matcher.to_katakana(&kana)
                } else {
                    kana
                };
                Some(KanaEvent::Update(text))
            }
            Outcome::Anomaly(kind) => Some(KanaEvent::Error {
                kind,
                message: kind.message().to_string(),
            }),
        }
    }
}
