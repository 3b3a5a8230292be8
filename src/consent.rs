use log::warn;

use crate::storage::{KeyValueStore, CONSENT_KEY};

/// Delay before the banner shows for visitors who have not decided yet.
pub const BANNER_DELAY_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Declined,
}

impl Consent {
    pub fn as_str(self) -> &'static str {
        match self {
            Consent::Accepted => "accepted",
            Consent::Declined => "declined",
        }
    }

    pub fn load(store: &impl KeyValueStore) -> Option<Consent> {
        match store.get(CONSENT_KEY).as_deref() {
            Some("accepted") => Some(Consent::Accepted),
            Some("declined") => Some(Consent::Declined),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsentBanner {
    decision: Option<Consent>,
    delay_elapsed: bool,
}

impl ConsentBanner {
    pub fn load(store: &impl KeyValueStore) -> Self {
        ConsentBanner {
            decision: Consent::load(store),
            delay_elapsed: false,
        }
    }

    /// Whether the delay timer needs to run at all on this page load.
    pub fn is_pending(&self) -> bool {
        self.decision.is_none()
    }

    pub fn visible(&self) -> bool {
        self.decision.is_none() && self.delay_elapsed
    }

    pub fn delay_elapsed(self) -> Self {
        ConsentBanner {
            delay_elapsed: true,
            ..self
        }
    }

    pub fn decide(self, consent: Consent, store: &impl KeyValueStore) -> Self {
        if let Err(e) = store.set(CONSENT_KEY, consent.as_str()) {
            warn!("Could not persist cookie consent: {}", e);
        }
        ConsentBanner {
            decision: Some(consent),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn hidden_until_delay_elapses() {
        let store = MemoryStorage::default();
        let banner = ConsentBanner::load(&store);
        assert!(banner.is_pending());
        assert!(!banner.visible());
        assert!(banner.delay_elapsed().visible());
    }

    #[test]
    fn accepting_stores_and_hides() {
        let store = MemoryStorage::default();
        let banner = ConsentBanner::load(&store)
            .delay_elapsed()
            .decide(Consent::Accepted, &store);

        assert!(!banner.visible());
        assert_eq!(store.get(CONSENT_KEY).as_deref(), Some("accepted"));
    }

    #[test]
    fn stored_decision_never_shows_banner_on_next_load() {
        let store = MemoryStorage::default();
        ConsentBanner::load(&store).decide(Consent::Accepted, &store);

        let next_load = ConsentBanner::load(&store);
        assert!(!next_load.is_pending());
        assert!(!next_load.delay_elapsed().visible());
    }

    #[test]
    fn declining_is_remembered_too() {
        let store = MemoryStorage::default();
        ConsentBanner::load(&store).decide(Consent::Declined, &store);
        assert_eq!(Consent::load(&store), Some(Consent::Declined));
    }

    #[test]
    fn unknown_stored_value_counts_as_undecided() {
        let store = MemoryStorage::default();
        store.set(CONSENT_KEY, "maybe").unwrap();
        assert!(ConsentBanner::load(&store).is_pending());
    }
}
