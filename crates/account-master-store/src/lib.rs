//! # Account Master Store
//!
//! In-memory profile repository shared by every request handler.
//!
//! Profiles live in a `HashMap` behind a single `parking_lot::RwLock`:
//! lookups share the lock, mutations take it exclusively. Every
//! check-then-act sequence (username uniqueness on create and rename) runs
//! inside one write guard, so two concurrent creates with the same username
//! can never both succeed.
//!
//! # Example
//!
//! ```ignore
//! use account_master_store::ProfileStore;
//!
//! let store = ProfileStore::new();
//! let id = store.create_user(profile)?;
//! let same = store.user_by_id(id)?;
//! ```

use account_master_models::{Profile, ProfileId, ProfilePatch};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no user with id {0}")]
    NotFound(ProfileId),
    #[error("no user with username {0}")]
    UsernameNotFound(String),
    #[error("user {0} already exists")]
    DuplicateUsername(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::UsernameNotFound(_))
    }
}

/// Cheaply cloneable handle; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct ProfileStore {
    users: Arc<RwLock<HashMap<ProfileId, Profile>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every profile, ordered by username.
    pub fn users(&self) -> Vec<Profile> {
        let mut users: Vec<Profile> = self.users.read().values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    /// Inserts `profile` under a freshly generated id and returns that id.
    ///
    /// Any id already set on `profile` is discarded.
    pub fn create_user(&self, mut profile: Profile) -> Result<ProfileId, StoreError> {
        let mut users = self.users.write();

        if users.values().any(|u| u.username == profile.username) {
            return Err(StoreError::DuplicateUsername(profile.username));
        }

        let mut id = ProfileId::new();
        while users.contains_key(&id) {
            id = ProfileId::new();
        }

        profile.id = id;
        debug!(user_id = %id, username = %profile.username, "Profile created");
        users.insert(id, profile);

        Ok(id)
    }

    pub fn user_by_id(&self, id: ProfileId) -> Result<Profile, StoreError> {
        self.users
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Applies `patch` to the stored profile and returns the merged record.
    ///
    /// Renaming onto a username held by another profile fails with
    /// [`StoreError::DuplicateUsername`] and leaves the profile unchanged.
    pub fn update_user(&self, id: ProfileId, patch: &ProfilePatch) -> Result<Profile, StoreError> {
        let mut users = self.users.write();

        if !users.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }

        if let Some(username) = patch.username() {
            if users
                .values()
                .any(|u| u.id != id && u.username == username)
            {
                return Err(StoreError::DuplicateUsername(username.to_string()));
            }
        }

        let profile = users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        patch.apply(profile);
        debug!(user_id = %id, "Profile updated");

        Ok(profile.clone())
    }

    pub fn delete_user(&self, id: ProfileId) -> Result<(), StoreError> {
        match self.users.write().remove(&id) {
            Some(profile) => {
                debug!(user_id = %id, username = %profile.username, "Profile deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Exact, case-sensitive username lookup.
    pub fn user_by_name(&self, name: &str) -> Result<Profile, StoreError> {
        self.users
            .read()
            .values()
            .find(|u| u.username == name)
            .cloned()
            .ok_or_else(|| StoreError::UsernameNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    fn profile(username: &str) -> Profile {
        Profile {
            username: username.to_string(),
            password: "hash".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_users_empty() {
        let store = ProfileStore::new();
        assert!(store.users().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_users_snapshot_sorted() {
        let store = ProfileStore::new();
        store.create_user(profile("test2")).unwrap();
        store.create_user(profile("test1")).unwrap();

        let names: Vec<String> = store.users().into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["test1", "test2"]);
    }

    #[test]
    fn test_create_then_fetch_by_id() {
        let store = ProfileStore::new();
        let input = Profile {
            email: "alice@example.com".to_string(),
            admin: true,
            ..profile("alice")
        };

        let id = store.create_user(input.clone()).unwrap();
        let stored = store.user_by_id(id).unwrap();

        assert_eq!(stored, Profile { id, ..input });
    }

    #[test]
    fn test_create_discards_caller_id() {
        let store = ProfileStore::new();
        let input = profile("alice");
        let caller_id = input.id;

        let id = store.create_user(input).unwrap();
        assert_ne!(id, caller_id);
    }

    #[test]
    fn test_create_duplicate_username() {
        let store = ProfileStore::new();
        store.create_user(profile("bob")).unwrap();

        let err = store.create_user(profile("bob")).unwrap_err();

        assert_eq!(err, StoreError::DuplicateUsername("bob".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.users().iter().filter(|u| u.username == "bob").count(),
            1
        );
    }

    #[test]
    fn test_username_is_case_sensitive() {
        let store = ProfileStore::new();
        store.create_user(profile("bob")).unwrap();
        assert!(store.create_user(profile("Bob")).is_ok());
        assert!(store.user_by_name("BOB").is_err());
    }

    #[test]
    fn test_user_by_id_missing() {
        let store = ProfileStore::new();
        let id = ProfileId::new();
        assert_eq!(store.user_by_id(id), Err(StoreError::NotFound(id)));
    }

    #[test]
    fn test_update_email_only() {
        let store = ProfileStore::new();
        let id = store
            .create_user(Profile {
                email: "old@example.com".to_string(),
                password: "oldPassword".to_string(),
                ..profile("test")
            })
            .unwrap();

        let returned = store
            .update_user(
                id,
                &ProfilePatch {
                    email: Some("new@example.com".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let updated = store.user_by_id(id).unwrap();
        assert_eq!(returned, updated);
        assert_eq!(updated.id, id);
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.username, "test");
        assert_eq!(updated.password, "oldPassword");
        assert!(!updated.admin);
    }

    #[test]
    fn test_update_admin_both_ways() {
        let store = ProfileStore::new();
        let id = store.create_user(profile("test")).unwrap();

        let promote = ProfilePatch {
            admin: Some(true),
            ..Default::default()
        };
        assert!(store.update_user(id, &promote).unwrap().admin);
        assert!(store.user_by_id(id).unwrap().admin);

        let demote = ProfilePatch {
            admin: Some(false),
            ..Default::default()
        };
        store.update_user(id, &demote).unwrap();
        assert!(!store.user_by_id(id).unwrap().admin);
    }

    #[test]
    fn test_update_missing_user() {
        let store = ProfileStore::new();
        let id = ProfileId::new();
        let patch = ProfilePatch {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(store.update_user(id, &patch), Err(StoreError::NotFound(id)));
    }

    #[test]
    fn test_update_rename_onto_taken_username() {
        let store = ProfileStore::new();
        store.create_user(profile("alice")).unwrap();
        let id = store.create_user(profile("bob")).unwrap();

        let patch = ProfilePatch {
            username: Some("alice".to_string()),
            email: Some("changed@example.com".to_string()),
            ..Default::default()
        };
        let err = store.update_user(id, &patch).unwrap_err();

        assert_eq!(err, StoreError::DuplicateUsername("alice".to_string()));
        let bob = store.user_by_id(id).unwrap();
        assert_eq!(bob.username, "bob");
        assert_eq!(bob.email, "");
    }

    #[test]
    fn test_update_keeping_own_username() {
        let store = ProfileStore::new();
        let id = store.create_user(profile("alice")).unwrap();

        let patch = ProfilePatch {
            username: Some("alice".to_string()),
            ..Default::default()
        };
        assert!(store.update_user(id, &patch).is_ok());
    }

    #[test]
    fn test_delete_then_lookup() {
        let store = ProfileStore::new();
        let id = store.create_user(profile("test")).unwrap();

        store.delete_user(id).unwrap();

        assert_eq!(store.user_by_id(id), Err(StoreError::NotFound(id)));
        assert_eq!(store.delete_user(id), Err(StoreError::NotFound(id)));
        assert_eq!(store.delete_user(id), Err(StoreError::NotFound(id)));
    }

    #[test]
    fn test_alice_lifecycle() {
        let store = ProfileStore::new();
        let id = store
            .create_user(Profile {
                password: "secret123".to_string(),
                ..profile("alice")
            })
            .unwrap();

        assert_eq!(store.user_by_name("alice").unwrap().id, id);

        store.delete_user(id).unwrap();

        let err = store.user_by_name("alice").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_user_by_name_missing() {
        let store = ProfileStore::new();
        assert_eq!(
            store.user_by_name("nonexistent"),
            Err(StoreError::UsernameNotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_clones_share_state() {
        let store = ProfileStore::new();
        let handle = store.clone();
        let id = handle.create_user(profile("shared")).unwrap();
        assert!(store.user_by_id(id).is_ok());
    }

    #[test]
    fn test_concurrent_creates_same_username() {
        const WORKERS: usize = 32;
        let store = ProfileStore::new();
        let barrier = Barrier::new(WORKERS);

        let successes: usize = thread::scope(|s| {
            let handles: Vec<_> = (0..WORKERS)
                .map(|_| {
                    let (store, barrier) = (&store, &barrier);
                    s.spawn(move || {
                        barrier.wait();
                        store.create_user(profile("racer")).is_ok()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|ok| *ok)
                .count()
        });

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_distinct_creates_get_distinct_ids() {
        const WORKERS: usize = 16;
        let store = ProfileStore::new();

        let ids: Vec<ProfileId> = thread::scope(|s| {
            let handles: Vec<_> = (0..WORKERS)
                .map(|i| {
                    let store = &store;
                    s.spawn(move || store.create_user(profile(&format!("user{i}"))).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), WORKERS);
        assert_eq!(store.users().len(), WORKERS);
    }
}
