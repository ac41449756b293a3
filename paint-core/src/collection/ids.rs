//! Opening identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::OpeningId;

// Single static counter for all openings in the process
static NEXT_OPENING_ID: AtomicU64 = AtomicU64::new(1);

/// Next identifier from the process-wide counter.
pub fn generate_id() -> OpeningId {
    OpeningId::from_raw(NEXT_OPENING_ID.fetch_add(1, Ordering::SeqCst))
}

/// Source of fresh opening identifiers.
///
/// Implementations must never hand out the same identifier twice.
pub trait IdGenerator {
    fn next_id(&mut self) -> OpeningId;
}

/// Identifiers drawn from the process-wide counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessIds;

impl IdGenerator for ProcessIds {
    fn next_id(&mut self) -> OpeningId {
        generate_id()
    }
}

/// Per-instance counter, deterministic across runs.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> OpeningId {
        let id = OpeningId::from_raw(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_increase() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id().raw(), 1);
        assert_eq!(ids.next_id().raw(), 2);
        assert_eq!(ids.next_id().raw(), 3);
    }

    #[test]
    fn test_process_ids_never_repeat() {
        let mut ids = ProcessIds;
        let a = ids.next_id();
        let b = ids.next_id();
        let c = generate_id();
        assert!(a < b);
        assert!(b < c);
    }
}
