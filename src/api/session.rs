use std::sync::{Arc, Mutex, MutexGuard};

use kana_core::settings::{parse_settings_toml, Settings};
use kana_session::{Engine, InputEvent, KanaProvider};

use super::types::{KanaEngineKind, KanaError, KanaNotification};

/// One provider per host input element. Host listeners are replaced by the
/// notification each call returns.
#[derive(uniffi::Object)]
pub struct KanaSession {
    provider: Mutex<KanaProvider>,
}

fn settings_from(toml: Option<String>) -> Result<Settings, KanaError> {
    match toml {
        Some(content) => Ok(parse_settings_toml(&content)?),
        None => Ok(Settings::default()),
    }
}

#[uniffi::export]
impl KanaSession {
    #[uniffi::constructor]
    pub(super) fn new(
        engine: KanaEngineKind,
        settings_toml: Option<String>,
    ) -> Result<Arc<Self>, KanaError> {
        let settings = settings_from(settings_toml)?;
        let provider = KanaProvider::new(Engine::from(engine), &settings)?;
        Ok(Arc::new(Self {
            provider: Mutex::new(provider),
        }))
    }

    #[uniffi::constructor]
    pub(super) fn for_user_agent(
        user_agent: String,
        settings_toml: Option<String>,
    ) -> Result<Arc<Self>, KanaError> {
        let settings = settings_from(settings_toml)?;
        let provider = KanaProvider::for_user_agent(&user_agent, &settings)?;
        Ok(Arc::new(Self {
            provider: Mutex::new(provider),
        }))
    }

    pub(super) fn engine(&self) -> KanaEngineKind {
        self.lock().engine().into()
    }

    pub(super) fn focus(&self, value: String) -> Option<KanaNotification> {
        self.handle(InputEvent::Focus { value })
    }

    pub(super) fn key_down(&self, key: String, code: u16) -> Option<KanaNotification> {
        self.handle(InputEvent::KeyDown { key, code })
    }

    pub(super) fn key_up(
        &self,
        key: String,
        code: u16,
        value: String,
    ) -> Option<KanaNotification> {
        self.handle(InputEvent::KeyUp { key, code, value })
    }

    pub(super) fn composition_update(&self, data: String) -> Option<KanaNotification> {
        self.handle(InputEvent::CompositionUpdate { data })
    }

    pub(super) fn composition_end(&self) -> Option<KanaNotification> {
        self.handle(InputEvent::CompositionEnd)
    }

    pub(super) fn snapshots(&self) -> Vec<String> {
        self.lock().snapshots().to_vec()
    }

    pub(super) fn is_composing(&self) -> bool {
        self.lock().is_composing()
    }
}

impl KanaSession {
    fn lock(&self) -> MutexGuard<'_, KanaProvider> {
        self.provider.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn handle(&self, event: InputEvent) -> Option<KanaNotification> {
        self.lock().handle(event).map(KanaNotification::from)
    }
}
