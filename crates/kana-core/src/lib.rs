pub mod extract;
pub mod history;
pub mod settings;
pub mod unicode;

pub use extract::{contains_non_kana, diff_from_baseline, extract_trailing_kana};
pub use history::{resolve, KanaHistory};
pub use settings::{BehaviorSettings, PatternSettings, Settings, SettingsError};
pub use unicode::KanaMatcher;
