//! Cookie consent gate backed by a single persisted flag.

use crate::config;
use crate::error::{Result, SiteError};

/// Key/value persistence for the consent flag.
pub trait FlagStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(SiteError::StorageUnavailable),
        }
    }
}

impl FlagStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| SiteError::storage("read", key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SiteError::storage("write", key, e))
    }
}

/// Stand-in when the browser refuses storage (privacy modes, sandboxed
/// frames). Reads and writes both fail.
pub struct NoStorage;

impl FlagStore for NoStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(SiteError::StorageUnavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(SiteError::StorageUnavailable)
    }
}

pub fn browser_store() -> Box<dyn FlagStore> {
    match LocalStorage::open() {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("Falling back to no persistence: {}", err);
            Box::new(NoStorage)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentState {
    Unknown,
    Shown,
    Accepted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentEvent {
    RevealElapsed,
    Accept,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsentGate {
    state: ConsentState,
}

impl ConsentGate {
    /// Any non-empty stored value counts as consent already given.
    pub fn load(store: &dyn FlagStore) -> Self {
        let accepted = match store.get(config::CONSENT_STORAGE_KEY) {
            Ok(value) => value.map_or(false, |v| !v.is_empty()),
            Err(err) => {
                log::warn!("Could not read consent flag: {}", err);
                false
            }
        };
        let state = if accepted {
            ConsentState::Accepted
        } else {
            ConsentState::Unknown
        };
        Self { state }
    }

    pub fn state(&self) -> ConsentState {
        self.state
    }

    /// Whether the reveal timer should be armed at all.
    pub fn needs_prompt(&self) -> bool {
        self.state == ConsentState::Unknown
    }

    /// Delay before [`ConsentEvent::RevealElapsed`] should fire, or `None`
    /// when there is nothing left to prompt for.
    pub fn reveal_after_ms(&self) -> Option<u32> {
        self.needs_prompt().then_some(config::COOKIE_POPUP_DELAY_MS)
    }

    pub fn is_visible(&self) -> bool {
        self.state == ConsentState::Shown
    }

    pub fn handle(&mut self, event: ConsentEvent, store: &dyn FlagStore) {
        match (self.state, event) {
            (ConsentState::Unknown, ConsentEvent::RevealElapsed) => {
                self.state = ConsentState::Shown;
            }
            (ConsentState::Accepted, _) | (ConsentState::Shown, ConsentEvent::RevealElapsed) => {}
            (_, ConsentEvent::Accept) => {
                if let Err(err) = store.set(config::CONSENT_STORAGE_KEY, config::CONSENT_ACCEPTED_VALUE) {
                    log::warn!("Consent accepted but not persisted: {}", err);
                }
                self.state = ConsentState::Accepted;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        fail_writes: bool,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = MemoryStore::default();
            store.items.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }
    }

    impl FlagStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if self.fail_writes {
                return Err(SiteError::StorageUnavailable);
            }
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn absent_flag_prompts_only_after_reveal() {
        let store = MemoryStore::default();
        let mut gate = ConsentGate::load(&store);
        assert_eq!(gate.state(), ConsentState::Unknown);
        assert!(gate.needs_prompt());
        assert!(!gate.is_visible());

        gate.handle(ConsentEvent::RevealElapsed, &store);
        assert!(gate.is_visible());
    }

    #[test]
    fn reveal_is_scheduled_three_seconds_out() {
        let store = MemoryStore::default();
        let mut gate = ConsentGate::load(&store);
        assert_eq!(gate.reveal_after_ms(), Some(3_000));

        gate.handle(ConsentEvent::RevealElapsed, &store);
        assert_eq!(gate.reveal_after_ms(), None);
    }

    #[test]
    fn accepted_gate_schedules_no_reveal() {
        let store = MemoryStore::with(config::CONSENT_STORAGE_KEY, "true");
        assert_eq!(ConsentGate::load(&store).reveal_after_ms(), None);

        let store = MemoryStore::default();
        let mut gate = ConsentGate::load(&store);
        gate.handle(ConsentEvent::Accept, &store);
        assert_eq!(gate.reveal_after_ms(), None);
    }

    #[test]
    fn stored_flag_skips_the_popup() {
        let store = MemoryStore::with(config::CONSENT_STORAGE_KEY, "true");
        let mut gate = ConsentGate::load(&store);
        assert_eq!(gate.state(), ConsentState::Accepted);
        assert!(!gate.needs_prompt());

        gate.handle(ConsentEvent::RevealElapsed, &store);
        assert!(!gate.is_visible());
    }

    #[test]
    fn empty_stored_value_is_not_consent() {
        let store = MemoryStore::with(config::CONSENT_STORAGE_KEY, "");
        assert_eq!(ConsentGate::load(&store).state(), ConsentState::Unknown);
    }

    #[test]
    fn accept_persists_literal_true_and_hides() {
        let store = MemoryStore::default();
        let mut gate = ConsentGate::load(&store);
        gate.handle(ConsentEvent::RevealElapsed, &store);
        gate.handle(ConsentEvent::Accept, &store);

        assert_eq!(gate.state(), ConsentState::Accepted);
        assert!(!gate.is_visible());
        assert_eq!(
            store.get(config::CONSENT_STORAGE_KEY).unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(ConsentGate::load(&store).state(), ConsentState::Accepted);
    }

    #[test]
    fn reveal_after_early_accept_stays_hidden() {
        let store = MemoryStore::default();
        let mut gate = ConsentGate::load(&store);
        gate.handle(ConsentEvent::Accept, &store);
        gate.handle(ConsentEvent::RevealElapsed, &store);
        assert_eq!(gate.state(), ConsentState::Accepted);
    }

    #[test]
    fn unavailable_storage_prompts_every_time() {
        let mut gate = ConsentGate::load(&NoStorage);
        assert!(gate.needs_prompt());
        gate.handle(ConsentEvent::RevealElapsed, &NoStorage);
        gate.handle(ConsentEvent::Accept, &NoStorage);
        assert_eq!(gate.state(), ConsentState::Accepted);
        assert!(ConsentGate::load(&NoStorage).needs_prompt());
    }

    #[test]
    fn failed_write_still_hides_for_this_page() {
        let store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        let mut gate = ConsentGate::load(&store);
        gate.handle(ConsentEvent::RevealElapsed, &store);
        gate.handle(ConsentEvent::Accept, &store);
        assert!(!gate.is_visible());
        assert_eq!(ConsentGate::load(&store).state(), ConsentState::Unknown);
    }
}
