//! Process-wide generation counter.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

/// Issues the next generation identifier.
///
/// Identifiers are strictly increasing in issuance order and never reused
/// within a process, even when several strategies run side by side.
pub fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}
