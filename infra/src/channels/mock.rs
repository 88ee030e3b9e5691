//! Mock message sender for development and testing
//!
//! Logs outbound messages instead of delivering them and generates mock
//! message ids.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use cl_core::services::verification::MessageSender;
use cl_shared::utils::address::mask_address;

/// Mock message sender
///
/// This implementation:
/// - Logs messages instead of sending them
/// - Generates mock message ids
/// - Tracks message count for testing
/// - Can simulate failures
#[derive(Clone)]
pub struct MockSender {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockSender {
    /// Create a new mock sender
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock sender that fails every send
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageSender for MockSender {
    async fn send(&self, address: &str, message: &str) -> Result<String, String> {
        if self.simulate_failure {
            warn!(
                address = %mask_address(address),
                "mock sender simulating delivery failure"
            );
            return Err("simulated delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            provider = "mock",
            address = %mask_address(address),
            message_id = %message_id,
            message_length = message.len(),
            count = count,
            "message sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
