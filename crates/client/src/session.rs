//! Latest-wins guard for preview slots.
//!
//! Generation requests cannot be cancelled once in flight. Instead,
//! each request takes a monotonic generation id when it starts; when
//! its results arrive, the commit is accepted only if no newer request
//! has started since. Stale results are discarded, so overlapping
//! triggers resolve to last-wins with no races on the displayed state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// A slot holding the current value for one preview, guarded by a
/// generation id.
pub struct PreviewSlot<T> {
    latest: AtomicU64,
    current: Mutex<Option<(u64, T)>>,
}

impl<T> Default for PreviewSlot<T> {
    fn default() -> Self {
        PreviewSlot::new()
    }
}

impl<T> PreviewSlot<T> {
    pub fn new() -> Self {
        PreviewSlot {
            latest: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    /// Start a new generation; every later `begin` supersedes this one.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Commit a result for generation `id`. Returns `false` (and drops
    /// the value) when a newer generation has begun or already
    /// committed.
    pub fn commit(&self, id: u64, value: T) -> bool {
        if id != self.latest.load(Ordering::SeqCst) {
            return false;
        }
        let mut current = self.current.lock().unwrap();
        if let Some((held, _)) = current.as_ref() {
            if *held > id {
                return false;
            }
        }
        *current = Some((id, value));
        true
    }

    /// The currently displayed value, if any.
    pub fn current(&self) -> Option<T>
    where
        T: Clone,
    {
        self.current
            .lock()
            .unwrap()
            .as_ref()
            .map(|(_, v)| v.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_generation_commits() {
        let slot = PreviewSlot::new();
        let id = slot.begin();
        assert!(slot.commit(id, "a"));
        assert_eq!(slot.current(), Some("a"));
    }

    #[test]
    fn stale_generation_is_discarded() {
        let slot = PreviewSlot::new();
        let first = slot.begin();
        let second = slot.begin();
        // The older request's result arrives after a newer one started.
        assert!(!slot.commit(first, "old"));
        assert!(slot.commit(second, "new"));
        assert_eq!(slot.current(), Some("new"));
    }

    #[test]
    fn stale_commit_does_not_clobber_newer_value() {
        let slot = PreviewSlot::new();
        let first = slot.begin();
        let second = slot.begin();
        assert!(slot.commit(second, "new"));
        assert!(!slot.commit(first, "old"));
        assert_eq!(slot.current(), Some("new"));
    }

    #[test]
    fn failed_generation_leaves_previous_result_untouched() {
        let slot = PreviewSlot::new();
        let first = slot.begin();
        assert!(slot.commit(first, "shown"));
        // A later generation that fails never commits; the prior result
        // stays current.
        let _abandoned = slot.begin();
        assert_eq!(slot.current(), Some("shown"));
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let slot: PreviewSlot<()> = PreviewSlot::new();
        let a = slot.begin();
        let b = slot.begin();
        let c = slot.begin();
        assert!(a < b && b < c);
    }
}
