use contracts::{ContentCatalog, SelectOutcome, TabBar, TabKey, ToneToken};

fn titles(catalog: &ContentCatalog, key: TabKey) -> Vec<String> {
    catalog.payload(key).titles().map(str::to_string).collect()
}

#[test]
fn glossary_replaces_intro_and_unknown_key_is_ignored() {
    let catalog = ContentCatalog::bundled().expect("bundled content must parse");
    let mut tabs = TabBar::default();

    assert_eq!(tabs.active_key(), TabKey::Intro);
    let intro = titles(catalog, tabs.active_key());
    assert_eq!(
        intro,
        vec!["Objetivo Principal", "Contexto e Motivação", "Contribuições"]
    );

    assert!(tabs.select_code("glossario").is_changed());
    assert_eq!(tabs.active_key(), TabKey::Glossario);
    let glossary = titles(catalog, tabs.active_key());
    assert_eq!(glossary.len(), 9);
    assert!(glossary.iter().all(|title| !intro.contains(title)));

    assert_eq!(tabs.select_code("unknown_key"), SelectOutcome::Ignored);
    assert_eq!(tabs.active_key(), TabKey::Glossario);
}

#[test]
fn switching_away_and_back_gives_same_payload() {
    let catalog = ContentCatalog::bundled().unwrap();
    let mut tabs = TabBar::default();

    let first = catalog.payload(tabs.active_key()).clone();
    tabs.select(TabKey::Resultados);
    assert_ne!(catalog.payload(tabs.active_key()), &first);
    tabs.select(TabKey::Intro);
    assert_eq!(catalog.payload(tabs.active_key()), &first);
}

#[test]
fn undefined_tones_render_with_default_style() {
    let catalog = ContentCatalog::bundled().unwrap();
    let results = catalog.payload(TabKey::Resultados);

    // "info", "success" and "warning" have no entry in the tone table.
    let tones: Vec<ToneToken> = results.cards.iter().map(|card| card.tone).collect();
    assert_eq!(
        tones,
        vec![
            ToneToken::Default,
            ToneToken::Tip,
            ToneToken::Default,
            ToneToken::Default,
            ToneToken::Default,
        ]
    );
}

#[test]
fn methods_tab_lists_nine_steps() {
    let catalog = ContentCatalog::bundled().unwrap();
    let steps = titles(catalog, TabKey::Metodos)
        .into_iter()
        .filter(|title| title.starts_with(|c: char| c.is_ascii_digit()))
        .count();
    assert_eq!(steps, 9);
}
