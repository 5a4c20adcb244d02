//! Extraction of the kana a composition snapshot stands for.

use crate::unicode::KanaMatcher;

/// Return the trailing run of kana in `text`.
///
/// Scans backward from the last character and stops at the first non-kana
/// character, so `"XYZかな"` yields `"かな"` while `"かなXYZ"` yields `""`.
pub fn extract_trailing_kana(matcher: &KanaMatcher, text: &str) -> String {
    let start = text
        .char_indices()
        .rev()
        .take_while(|&(_, c)| matcher.is_kana(c))
        .last()
        .map_or(text.len(), |(i, _)| i);
    text[start..].to_string()
}

/// Whether any character of `text` falls outside the kana class.
pub fn contains_non_kana(matcher: &KanaMatcher, text: &str) -> bool {
    text.chars().any(|c| !matcher.is_kana(c))
}

/// Characters of `value` that differ from `baseline` at the same position.
///
/// Positions past the end of `baseline` always count as different. Used to
/// recover the uncommitted part of a field from its value at focus time.
pub fn diff_from_baseline(baseline: &str, value: &str) -> String {
    let mut base = baseline.chars();
    value.chars().filter(|&c| base.next() != Some(c)).collect()
}
