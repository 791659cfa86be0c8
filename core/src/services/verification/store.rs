//! In-memory pending verification store with timer-based expiry
//!
//! The store holds at most one outstanding challenge per phone number. Every
//! insert arms a one-shot countdown that deletes the entry after the TTL
//! unless it is cancelled first by an explicit `remove` or replaced by a
//! newer `put`. Entries carry a generation counter so a countdown that lost
//! the cancellation race can never delete a successor entry for the same
//! phone number.
//!
//! Timers use the tokio clock, so expiry is fully deterministic under
//! `tokio::time::pause` in tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use otp_shared::phone::mask_phone;

use crate::domain::entities::PendingVerification;

/// How long a pending verification lives unless consumed or replaced sooner
pub const PENDING_TTL: Duration = Duration::from_secs(5 * 60);

struct StoreEntry {
    pending: PendingVerification,
    generation: u64,
    expiry_task: JoinHandle<()>,
}

type EntryMap = Arc<Mutex<HashMap<String, StoreEntry>>>;

/// In-memory map from normalized phone number to pending verification.
///
/// Cloning is cheap and clones share the same underlying map. All mutations
/// are atomic with respect to the map lock; no operation holds the lock
/// across an await point.
#[derive(Clone)]
pub struct PendingStore {
    entries: EntryMap,
    ttl: Duration,
    generation: Arc<AtomicU64>,
}

impl PendingStore {
    /// Create a store with the default 5-minute TTL
    pub fn new() -> Self {
        Self::with_ttl(PENDING_TTL)
    }

    /// Create a store with a custom TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Insert or replace the entry for `pending.phone` and arm its expiry
    /// countdown. Replacing an entry cancels the previous countdown, so the
    /// new entry always gets the full TTL.
    ///
    /// Must be called from within a tokio runtime.
    pub fn put(&self, pending: PendingVerification) {
        let key = pending.phone.clone();
        let generation = self.generation.fetch_add(1, Ordering::Relaxed);

        // The lock is held across the spawn so the expiry task cannot observe
        // the map before this entry is inserted.
        let mut entries = self.lock_entries();
        let expiry_task = tokio::spawn(expire_entry(
            Arc::clone(&self.entries),
            key.clone(),
            generation,
            self.ttl,
        ));

        debug!(
            phone = %mask_phone(&key),
            generation = generation,
            "stored pending verification"
        );

        if let Some(previous) = entries.insert(
            key,
            StoreEntry {
                pending,
                generation,
                expiry_task,
            },
        ) {
            previous.expiry_task.abort();
        }
    }

    /// Look up the pending verification for a phone number.
    ///
    /// Pure read: no side effects, returns a copy of the entry.
    pub fn get(&self, phone: &str) -> Option<PendingVerification> {
        self.lock_entries().get(phone).map(|e| e.pending.clone())
    }

    /// Delete the entry for a phone number, cancelling its expiry countdown.
    ///
    /// Removing an absent key is a no-op; calling this twice is safe.
    pub fn remove(&self, phone: &str) {
        if let Some(entry) = self.lock_entries().remove(phone) {
            entry.expiry_task.abort();
            debug!(phone = %mask_phone(phone), "removed pending verification");
        }
    }

    /// Number of currently pending verifications
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    /// Whether no verifications are pending
    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, StoreEntry>> {
        // Entry operations cannot panic while holding the lock, so poisoning
        // only happens if an expiry task is cancelled mid-critical-section;
        // the map itself is still consistent.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for PendingStore {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot expiry countdown for a single store entry.
///
/// Only deletes the entry whose generation it was armed for; an entry that
/// was replaced or removed in the meantime is left alone.
async fn expire_entry(entries: EntryMap, key: String, generation: u64, ttl: Duration) {
    tokio::time::sleep(ttl).await;

    let mut entries = entries
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let matches_generation = entries
        .get(&key)
        .is_some_and(|entry| entry.generation == generation);
    if matches_generation {
        entries.remove(&key);
        debug!(phone = %mask_phone(&key), "pending verification expired");
    }
}
