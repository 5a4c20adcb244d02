mod continuous;

use std::sync::{Arc, Mutex};

use kana_core::{BehaviorSettings, Settings};

use super::*;

pub(super) fn provider(engine: Engine) -> KanaProvider {
    KanaProvider::new(engine, &Settings::default()).unwrap()
}

/// Provider with default patterns and adjusted behavior.
pub(super) fn provider_with(engine: Engine, f: impl FnOnce(&mut BehaviorSettings)) -> KanaProvider {
    let mut settings = Settings::default();
    f(&mut settings.behavior);
    KanaProvider::new(engine, &settings).unwrap()
}

/// Provider that emits hiragana, so expectations read like the snapshots.
pub(super) fn hiragana_provider(engine: Engine) -> KanaProvider {
    provider_with(engine, |b| b.to_katakana = false)
}

/// Collect every emitted event.
pub(super) fn record(p: &mut KanaProvider) -> Arc<Mutex<Vec<KanaEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    p.on(move |e| sink.lock().unwrap().push(e.clone()));
    events
}

// Helper: feed composition updates in order
pub(super) fn compose(p: &mut KanaProvider, updates: &[&str]) {
    for data in updates {
        assert_eq!(p.composition_update(data), None);
    }
}
