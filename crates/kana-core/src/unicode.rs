//! Character classification for composition text.
//!
//! All classes are configurable regular expressions, compiled once per
//! provider and shared read-only afterwards.

use regex::Regex;

use crate::settings::{PatternSettings, SettingsError};

/// Precompiled kana / katakana / full-width-space predicates.
#[derive(Debug, Clone)]
pub struct KanaMatcher {
    kana: Regex,
    katakana: Regex,
    space: Regex,
}

impl KanaMatcher {
    /// Compile the three patterns. Empty patterns are rejected because an
    /// empty regex matches every character.
    pub fn from_patterns(patterns: &PatternSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            kana: compile("patterns.kana", &patterns.kana)?,
            katakana: compile("patterns.katakana", &patterns.katakana)?,
            space: compile("patterns.space", &patterns.space)?,
        })
    }

    pub fn is_kana(&self, c: char) -> bool {
        matches_char(&self.kana, c)
    }

    /// Whether `c` is shifted by [`to_katakana`](Self::to_katakana).
    pub fn is_katakana_eligible(&self, c: char) -> bool {
        matches_char(&self.katakana, c)
    }

    /// Whether the space pattern matches anywhere in `s`.
    pub fn is_space_token(&self, s: &str) -> bool {
        self.space.is_match(s)
    }

    /// Shift every katakana-eligible character into the katakana block
    /// (U+0060 above its hiragana counterpart). Everything else passes through.
    pub fn to_katakana(&self, s: &str) -> String {
        s.chars()
            .map(|c| {
                if self.is_katakana_eligible(c) {
                    char::from_u32(c as u32 + 0x60).unwrap_or(c)
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Default for KanaMatcher {
    fn default() -> Self {
        Self::from_patterns(&PatternSettings::default()).expect("default patterns must compile")
    }
}

fn compile(field: &str, pattern: &str) -> Result<Regex, SettingsError> {
    if pattern.is_empty() {
        return Err(SettingsError::InvalidPattern {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Regex::new(pattern).map_err(|e| SettingsError::InvalidPattern {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

fn matches_char(re: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    re.is_match(c.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kana_class() {
        let m = KanaMatcher::default();
        assert!(m.is_kana('あ'));
        assert!(m.is_kana('ん'));
        assert!(m.is_kana('ー'));
        assert!(m.is_kana('ぁ'));
        // ゔ (U+3094) is outside ぁ..ん
        assert!(!m.is_kana('ゔ'));
        assert!(!m.is_kana('ア'));
        assert!(!m.is_kana('漢'));
        assert!(!m.is_kana('a'));
        assert!(!m.is_kana('\u{3000}'));
    }

    #[test]
    fn test_katakana_eligible() {
        let m = KanaMatcher::default();
        assert!(m.is_katakana_eligible('か'));
        assert!(m.is_katakana_eligible('ゝ'));
        assert!(!m.is_katakana_eligible('ー'));
        assert!(!m.is_katakana_eligible('カ'));
    }

    #[test]
    fn test_to_katakana() {
        let m = KanaMatcher::default();
        assert_eq!(m.to_katakana("とうきょう"), "トウキョウ");
        assert_eq!(m.to_katakana("らーめん"), "ラーメン");
        assert_eq!(m.to_katakana("ゝゞ"), "ヽヾ");
        assert_eq!(m.to_katakana("abc漢"), "abc漢");
        assert_eq!(m.to_katakana(""), "");
    }

    #[test]
    fn test_space_token() {
        let m = KanaMatcher::default();
        assert!(m.is_space_token("\u{3000}"));
        assert!(m.is_space_token("あ\u{3000}"));
        assert!(!m.is_space_token(" "));
        assert!(!m.is_space_token("あ"));
        assert!(!m.is_space_token(""));
    }

    #[test]
    fn test_custom_patterns() {
        let patterns = PatternSettings {
            kana: "[ァ-ン]".to_string(),
            ..PatternSettings::default()
        };
        let m = KanaMatcher::from_patterns(&patterns).unwrap();
        assert!(m.is_kana('カ'));
        assert!(!m.is_kana('か'));
    }

    #[test]
    fn test_invalid_pattern() {
        let patterns = PatternSettings {
            katakana: "[ぁ-".to_string(),
            ..PatternSettings::default()
        };
        let err = KanaMatcher::from_patterns(&patterns).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidPattern { ref field, .. } if field == "patterns.katakana")
        );
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let patterns = PatternSettings {
            space: String::new(),
            ..PatternSettings::default()
        };
        assert!(KanaMatcher::from_patterns(&patterns).is_err());
    }
}
