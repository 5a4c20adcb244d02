use super::*;

// --- Composition updates ---

#[test]
fn test_compose_and_end() {
    let mut p = provider(Engine::Continuous);
    compose(&mut p, &["t", "と", "とu", "とう", "とうk", "とうきょ", "とうきょう"]);
    assert_eq!(p.snapshots(), ["と", "とう", "とうきょ", "とうきょう"]);

    let ev = p.composition_end();
    assert_eq!(ev, Some(KanaEvent::Update("トウキョウ".to_string())));
    assert!(!p.is_composing());
}

#[test]
fn test_romaji_tail_is_ignored() {
    let mut p = provider(Engine::Continuous);
    compose(&mut p, &["か", "かk"]);
    assert_eq!(p.snapshots(), ["か"]);
}

#[test]
fn test_repeated_update_not_duplicated() {
    let mut p = provider(Engine::Continuous);
    compose(&mut p, &["か", "か", "か"]);
    assert_eq!(p.snapshots(), ["か"]);
}

#[test]
fn test_shrink_is_delete() {
    let mut p = hiragana_provider(Engine::Continuous);
    compose(&mut p, &["か", "かん", "かんじ", "かん"]);
    assert_eq!(p.snapshots(), ["か", "かん"]);
    assert_eq!(p.composition_end(), Some(KanaEvent::Update("かん".to_string())));
}

#[test]
fn test_shrink_with_converted_text_is_still_delete() {
    let mut p = hiragana_provider(Engine::Continuous);
    compose(&mut p, &["と", "とう", "東京と"]);
    // "と" is anchored at index 0, so everything after it is dropped.
    assert_eq!(p.snapshots(), ["と"]);
}

#[test]
fn test_shrink_without_anchor_overwrites() {
    let mut p = hiragana_provider(Engine::Continuous);
    compose(&mut p, &["か", "かき", "かきく", "きく"]);
    assert_eq!(p.snapshots(), ["か", "きく"]);
}

#[test]
fn test_end_without_history() {
    let mut p = provider(Engine::Continuous);
    assert_eq!(p.composition_end(), None);
}

#[test]
fn test_end_finalizes_per_phrase() {
    let mut p = hiragana_provider(Engine::Continuous);
    compose(&mut p, &["と", "とう"]);
    assert_eq!(p.composition_end(), Some(KanaEvent::Update("とう".to_string())));
    compose(&mut p, &["き", "きょ", "きょう"]);
    assert_eq!(p.composition_end(), Some(KanaEvent::Update("きょう".to_string())));
}

// --- Backspace ---

#[test]
fn test_backspace_empties_field() {
    let mut p = provider(Engine::Continuous);
    compose(&mut p, &["か"]);
    p.key_down("Backspace", key::BACKSPACE);
    let ev = p.key_up("Backspace", key::BACKSPACE, "");
    assert_eq!(ev, Some(KanaEvent::Clear));
    assert!(p.snapshots().is_empty());
}

#[test]
fn test_backspace_consumed_by_ime() {
    let mut p = provider(Engine::Continuous);
    compose(&mut p, &["か"]);
    p.key_down("Process", key::PROCESS);
    assert_eq!(p.key_up("Backspace", key::BACKSPACE, ""), None);
    assert_eq!(p.snapshots(), ["か"]);
}

#[test]
fn test_backspace_without_key_down() {
    let mut p = provider(Engine::Continuous);
    compose(&mut p, &["か"]);
    assert_eq!(p.key_up("Backspace", key::BACKSPACE, ""), Some(KanaEvent::Clear));
}

#[test]
fn test_backspace_with_remaining_text() {
    let mut p = provider(Engine::Continuous);
    compose(&mut p, &["か"]);
    p.key_down("Backspace", key::BACKSPACE);
    assert_eq!(p.key_up("Backspace", key::BACKSPACE, "山"), None);
    assert_eq!(p.snapshots(), ["か"]);
}

#[test]
fn test_key_up_pairs_with_latest_key_down() {
    let mut p = provider(Engine::Continuous);
    p.key_down("Shift", 16);
    p.key_down("Backspace", key::BACKSPACE);
    assert_eq!(p.key_up("Backspace", key::BACKSPACE, ""), Some(KanaEvent::Clear));
    assert_eq!(p.key_up("Shift", 16, ""), None);
}

#[test]
fn test_focus_forgets_pressed_keys() {
    let mut p = provider(Engine::Continuous);
    p.key_down("Process", key::PROCESS);
    p.focus("");
    assert_eq!(p.key_up("Backspace", key::BACKSPACE, ""), Some(KanaEvent::Clear));
}

// --- Full-width space ---

#[test]
fn test_full_width_space_allowed() {
    let mut p = provider_with(Engine::Continuous, |b| b.allow_space = true);
    compose(&mut p, &["\u{3000}"]);
    assert_eq!(p.snapshots(), ["\u{3000}"]);
    assert_eq!(
        p.composition_end(),
        Some(KanaEvent::Update("\u{3000}".to_string()))
    );
}

#[test]
fn test_full_width_space_rejected_by_default() {
    let mut p = provider(Engine::Continuous);
    compose(&mut p, &["\u{3000}"]);
    assert!(p.snapshots().is_empty());
    assert_eq!(p.composition_end(), None);
}
