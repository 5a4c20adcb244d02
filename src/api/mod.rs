//! UniFFI export layer — bindings for host applications.
//!
//! Each public type here maps to a generated foreign class, record, or enum.

mod session;
mod types;


pub use session::KanaSession;
pub use types::{KanaEngineKind, KanaError, KanaNotification};

use std::path::Path;

use kana_core::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};
use kana_session::Engine;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn detect_engine(user_agent: String) -> KanaEngineKind {
    Engine::detect(&user_agent).into()
}

#[uniffi::export]
fn settings_default_config() -> String {
    DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn settings_validate(toml: String) -> Result<(), KanaError> {
    parse_settings_toml(&toml)?;
    Ok(())
}

/// Resolve a snapshot list the way a finalize would.
#[uniffi::export]
fn resolve_snapshots(snapshots: Vec<String>) -> Option<String> {
    kana_core::resolve(snapshots.as_slice())
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
