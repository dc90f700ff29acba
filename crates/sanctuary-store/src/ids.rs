//! # Generated Record Ids
//!
//! Ids are `<prefix>_<millis>`. The millisecond component never repeats
//! within one generator: a create in the same millisecond as the previous
//! one takes the next free millisecond, so ids stay unique without changing
//! their shape.

use parking_lot::Mutex;
use sanctuary_core::{EntityKind, PhysicalTime};

/// Monotonic id source shared by every collection in a store.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_ms: Mutex<u64>,
}

impl IdGenerator {
    /// Create a generator with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for `kind` created at `at`.
    pub fn next(&self, kind: EntityKind, at: PhysicalTime) -> String {
        let mut last = self.last_ms.lock();
        let ms = if at.ts_ms > *last { at.ts_ms } else { *last + 1 };
        *last = ms;
        format!("{}_{}", kind.id_prefix(), ms)
    }
}
