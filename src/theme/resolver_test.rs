use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::config::ThemeConfig;
use crate::theme::document::MemoryDocument;
use crate::theme::signal::ManualColorScheme;
use crate::theme::store::MemoryStore;

/// Store whose reads and writes always fail, like disabled `localStorage`.
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::StoreUnavailable("disabled".to_owned()))
    }

    fn save(&mut self, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StoreUnavailable("quota exceeded".to_owned()))
    }
}

fn resolver(store: MemoryStore) -> ThemeResolver<MemoryStore, MemoryDocument> {
    ThemeResolver::new(store, MemoryDocument::new(&ThemeConfig::default()))
}

fn rendered(resolver: &ThemeResolver<MemoryStore, MemoryDocument>) -> Option<EffectiveTheme> {
    resolver.document().rendered()
}

// =============================================================
// preference
// =============================================================

#[test]
fn empty_store_reads_as_system() {
    assert_eq!(resolver(MemoryStore::new()).preference(), ThemePreference::System);
}

#[test]
fn stored_garbage_reads_as_system() {
    assert_eq!(
        resolver(MemoryStore::with_value("sepia")).preference(),
        ThemePreference::System
    );
}

#[test]
fn set_preference_is_read_back_regardless_of_os() {
    let mut r = resolver(MemoryStore::new());
    r.initialize(true);
    r.set_preference(ThemePreference::Dark);
    assert_eq!(r.preference(), ThemePreference::Dark);
    r.handle_os_change(false);
    assert_eq!(r.preference(), ThemePreference::Dark);
    assert_eq!(r.store().value(), Some("dark"));
}

#[test]
fn set_preference_str_rejects_unknown_value_without_side_effects() {
    let mut r = resolver(MemoryStore::with_value("light"));
    r.initialize(false);
    let err = r.set_preference_str("blue").unwrap_err();
    assert_eq!(err, ThemeError::InvalidPreference("blue".to_owned()));
    assert_eq!(r.store().value(), Some("light"));
    assert_eq!(rendered(&r), Some(EffectiveTheme::Light));
}

#[test]
fn set_preference_str_accepts_system() {
    let mut r = resolver(MemoryStore::with_value("light"));
    r.initialize(true);
    assert_eq!(r.set_preference_str("system"), Ok(EffectiveTheme::Dark));
    assert_eq!(r.store().value(), Some("system"));
}

// =============================================================
// initialize / OS changes
// =============================================================

#[test]
fn no_preference_follows_os_on_load_and_change() {
    let mut r = resolver(MemoryStore::new());
    assert_eq!(r.initialize(true), EffectiveTheme::Dark);
    assert_eq!(rendered(&r), Some(EffectiveTheme::Dark));

    assert_eq!(r.handle_os_change(false), Some(EffectiveTheme::Light));
    assert_eq!(r.effective(), Some(EffectiveTheme::Light));
    assert_eq!(rendered(&r), Some(EffectiveTheme::Light));
}

#[test]
fn explicit_light_ignores_os_change_to_dark() {
    let mut r = resolver(MemoryStore::with_value("light"));
    r.initialize(false);
    assert_eq!(r.handle_os_change(true), None);
    assert_eq!(r.effective(), Some(EffectiveTheme::Light));
    assert_eq!(rendered(&r), Some(EffectiveTheme::Light));
}

#[test]
fn last_os_event_wins() {
    let mut r = resolver(MemoryStore::new());
    r.initialize(false);
    r.handle_os_change(true);
    r.handle_os_change(false);
    r.handle_os_change(true);
    assert_eq!(r.effective(), Some(EffectiveTheme::Dark));
}

#[test]
fn apply_effective_twice_is_idempotent() {
    let mut r = resolver(MemoryStore::new());
    r.apply_effective(EffectiveTheme::Dark);
    let once = r.document().clone();
    r.apply_effective(EffectiveTheme::Dark);
    assert_eq!(r.document().attributes, once.attributes);
    assert_eq!(r.document().toggle_checked, once.toggle_checked);
    assert_eq!(r.effective(), Some(EffectiveTheme::Dark));
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_stores_opposite_of_effective() {
    let mut r = resolver(MemoryStore::new());
    r.initialize(true);
    assert_eq!(r.toggle(), EffectiveTheme::Light);
    assert_eq!(r.store().value(), Some("light"));
    assert_eq!(r.document().toggle_checked, Some(true));
    assert_eq!(r.toggle(), EffectiveTheme::Dark);
    assert_eq!(r.store().value(), Some("dark"));
}

#[test]
fn toggle_before_initialize_uses_resolved_theme() {
    let mut r = resolver(MemoryStore::with_value("dark"));
    assert_eq!(r.toggle(), EffectiveTheme::Light);
}

// =============================================================
// failure semantics
// =============================================================

#[test]
fn broken_store_falls_back_to_os_then_session_memory() {
    let mut r = ThemeResolver::new(BrokenStore, MemoryDocument::new(&ThemeConfig::default()));
    assert_eq!(r.initialize(true), EffectiveTheme::Dark);

    assert_eq!(r.set_preference(ThemePreference::Light), EffectiveTheme::Light);
    assert_eq!(r.preference(), ThemePreference::Light);
    assert_eq!(r.handle_os_change(true), None);
    assert_eq!(r.document().rendered(), Some(EffectiveTheme::Light));
}

#[test]
fn missing_root_does_not_stop_resolution() {
    let mut r = ThemeResolver::new(
        MemoryStore::new(),
        MemoryDocument::detached(&ThemeConfig::default()),
    );
    assert_eq!(r.initialize(true), EffectiveTheme::Dark);
    assert_eq!(r.effective(), Some(EffectiveTheme::Dark));
    assert_eq!(r.set_preference(ThemePreference::Light), EffectiveTheme::Light);
}

// =============================================================
// install / listener wiring
// =============================================================

#[test]
fn installed_resolver_follows_os_until_user_chooses() {
    let os = ManualColorScheme::new(true);
    let shared = install(resolver(MemoryStore::new()), &os);
    assert_eq!(os.listener_count(), 1);
    assert_eq!(shared.borrow().effective(), Some(EffectiveTheme::Dark));

    os.set_dark(false);
    assert_eq!(shared.borrow().effective(), Some(EffectiveTheme::Light));

    shared.borrow_mut().set_preference(ThemePreference::Dark);
    os.set_dark(false);
    assert_eq!(shared.borrow().effective(), Some(EffectiveTheme::Dark));
}

#[test]
fn dropped_resolver_ignores_later_events() {
    let os = ManualColorScheme::new(false);
    let shared = install(resolver(MemoryStore::new()), &os);
    drop(shared);
    os.set_dark(true);
}

#[test]
fn reload_keeps_explicit_choice_over_os() {
    // Fresh session: nothing stored, OS dark.
    let os = ManualColorScheme::new(true);
    let shared = install(resolver(MemoryStore::new()), &os);
    assert_eq!(rendered(&shared.borrow()), Some(EffectiveTheme::Dark));

    shared.borrow_mut().set_preference(ThemePreference::Light);
    assert_eq!(rendered(&shared.borrow()), Some(EffectiveTheme::Light));
    let persisted = shared.borrow().store().clone();
    assert_eq!(persisted.value(), Some("light"));

    // Reload with the same storage; OS still dark.
    let os = ManualColorScheme::new(true);
    let reloaded = install(resolver(persisted), &os);
    assert_eq!(rendered(&reloaded.borrow()), Some(EffectiveTheme::Light));
}

// =============================================================
// applied observers
// =============================================================

fn observed(r: &mut ThemeResolver<MemoryStore, MemoryDocument>) -> Rc<RefCell<Vec<EffectiveTheme>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    r.on_applied(Box::new(move |theme| sink.borrow_mut().push(theme)));
    seen
}

#[test]
fn observer_sees_os_driven_change() {
    let os = ManualColorScheme::new(true);
    let mut r = resolver(MemoryStore::new());
    let seen = observed(&mut r);
    let shared = install(r, &os);

    os.set_dark(false);
    assert_eq!(*seen.borrow(), vec![EffectiveTheme::Dark, EffectiveTheme::Light]);
    assert_eq!(shared.borrow().effective(), Some(EffectiveTheme::Light));
}

#[test]
fn observer_sees_explicit_set_and_toggle() {
    let mut r = resolver(MemoryStore::new());
    r.initialize(false);
    let seen = observed(&mut r);

    r.set_preference(ThemePreference::Dark);
    r.toggle();
    assert_eq!(*seen.borrow(), vec![EffectiveTheme::Dark, EffectiveTheme::Light]);
}

#[test]
fn observer_is_quiet_when_explicit_choice_ignores_os() {
    let mut r = resolver(MemoryStore::with_value("light"));
    r.initialize(false);
    let seen = observed(&mut r);

    r.handle_os_change(true);
    assert!(seen.borrow().is_empty());
}
