//! In-memory banner store.
//!
//! Reference implementation of `BannerStore` backed by a concurrent map.
//! Upsert and delete are commutative and idempotent, so concurrent passes
//! racing on the same banner id converge without any locking in the checks.

use dashmap::DashMap;

use crate::model::{BannerId, BannerMessage};
use crate::traits::BannerStore;

/// Concurrent, idempotent banner store keyed by `BannerId`.
#[derive(Default)]
pub struct MemoryBannerStore {
    banners: DashMap<BannerId, BannerMessage>,
}

impl MemoryBannerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active banners.
    pub fn len(&self) -> usize {
        self.banners.len()
    }

    /// True when no banners are active.
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    /// Returns the banner with the given id, if present.
    pub fn get(&self, id: BannerId) -> Option<BannerMessage> {
        self.banners.get(&id).map(|entry| entry.clone())
    }
}

impl BannerStore for MemoryBannerStore {
    fn upsert(&self, banner: BannerMessage) {
        self.banners.insert(banner.id, banner);
    }

    fn remove(&self, id: BannerId) {
        self.banners.remove(&id);
    }

    fn active(&self) -> Vec<BannerMessage> {
        self.banners.iter().map(|entry| entry.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BannerKind;

    fn banner(title: &str) -> BannerMessage {
        BannerMessage::new(
            BannerId::DeviceLimitExceeded,
            title,
            BannerKind::Warning,
            false,
        )
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let store = MemoryBannerStore::new();

        store.upsert(banner("first"));
        store.upsert(banner("second"));

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(BannerId::DeviceLimitExceeded).unwrap().title,
            "second"
        );
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let store = MemoryBannerStore::new();

        store.remove(BannerId::ServerUnavailable);
        assert!(store.is_empty());

        store.upsert(banner("only"));
        store.remove(BannerId::ServerUnavailable);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryBannerStore::new();

        store.upsert(banner("gone soon"));
        store.remove(BannerId::DeviceLimitExceeded);
        store.remove(BannerId::DeviceLimitExceeded);

        assert!(store.get(BannerId::DeviceLimitExceeded).is_none());
    }
}
