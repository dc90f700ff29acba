//! Layer 3: Time Effect Handler - Production Only

use async_trait::async_trait;
use sanctuary_core::effects::PhysicalTimeEffects;
use sanctuary_core::PhysicalTime;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Real time handler for production use.
///
/// Stateless; delegates to the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeHandler;

impl RealTimeHandler {
    /// Create a new real time handler
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PhysicalTimeEffects for RealTimeHandler {
    async fn physical_time(&self) -> PhysicalTime {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        PhysicalTime::from_millis(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_real_time_is_after_2024() {
        let now = RealTimeHandler::new().physical_time().await;
        // 2024-01-01T00:00:00Z
        assert!(now.ts_ms > 1_704_067_200_000);
    }
}
