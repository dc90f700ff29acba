//! Wall-clock time effect.
//!
//! Used by the store for generated ids and date stamps, and by page loaders
//! to decide what "today" and "upcoming" mean. Tests substitute a fixed clock.

use async_trait::async_trait;

use crate::time::PhysicalTime;

/// Physical (wall-clock) time source.
#[async_trait]
pub trait PhysicalTimeEffects: Send + Sync {
    /// Current wall-clock time.
    async fn physical_time(&self) -> PhysicalTime;
}
