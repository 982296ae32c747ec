use lingtree_core::{
    LANGUAGE_PREFERENCE_KEY, Language, MemoryPreferences, PreferenceStore, load_language,
    store_language,
};

#[test]
fn default_language_is_english() {
    let prefs = MemoryPreferences::new();
    assert_eq!(load_language(&prefs), Language::En);
}

#[test]
fn stored_language_round_trips_through_preferences() {
    let mut prefs = MemoryPreferences::new();
    store_language(&mut prefs, Language::Ru);
    assert_eq!(prefs.get(LANGUAGE_PREFERENCE_KEY).as_deref(), Some("ru"));
    assert_eq!(load_language(&prefs), Language::Ru);
}

#[test]
fn garbage_preference_falls_back_to_default() {
    let mut prefs = MemoryPreferences::new();
    prefs.set(LANGUAGE_PREFERENCE_KEY, "klingon");
    assert_eq!(load_language(&prefs), Language::En);
}

#[test]
fn every_language_has_a_code_and_flag() {
    for lang in Language::ALL {
        assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        assert!(!lang.flag().is_empty());
        assert_eq!(lang.to_string(), lang.code());
    }
}

#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(lingtree_core::VERSION, env!("CARGO_PKG_VERSION"));
}
