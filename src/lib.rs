//! Kana reconstruction engine.
//!
//! Re-exports the core algorithms (`kana_core`) and the event interpreter
//! (`kana_session`), and exposes them to host applications through UniFFI.

uniffi::setup_scaffolding!();

pub mod api;
pub mod trace_init;

pub use kana_core;
pub use kana_session;

pub use kana_core::{resolve, KanaHistory, KanaMatcher, Settings, SettingsError};
pub use kana_session::{Engine, ErrorKind, InputEvent, KanaEvent, KanaProvider};
