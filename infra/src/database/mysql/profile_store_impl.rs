//! MySQL implementation of the user profile store

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::{debug, warn};

use cl_core::domain::entities::verification_attempt::Channel;
use cl_core::repositories::profile::ProfileStore;
use cl_shared::utils::address::{is_email, mask_address};

/// Profile store backed by the users table
///
/// Flags the matching profile row as verified after a successful check.
/// The update is best-effort from the engine's point of view; a missing
/// row is reported as an error for the caller to log.
pub struct MySqlProfileStore {
    pool: MySqlPool,
}

impl MySqlProfileStore {
    /// Create a new MySQL profile store
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for MySqlProfileStore {
    async fn mark_verified(&self, address: &str, channel: Channel) -> Result<(), String> {
        // Column pair chosen from a fixed set, never from user input
        let (flag_column, key_column) = if is_email(address) {
            ("email_verified_at", "email")
        } else {
            ("phone_verified_at", "phone")
        };

        let sql = format!(
            "UPDATE users SET {} = NOW(), verification_method = ? WHERE {} = ?",
            flag_column, key_column
        );

        debug!(
            address = %mask_address(address),
            channel = %channel,
            "flagging profile as verified"
        );

        let result = sqlx::query(&sql)
            .bind(channel.as_str())
            .bind(address)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("profile update failed: {}", e))?;

        if result.rows_affected() == 0 {
            warn!(
                address = %mask_address(address),
                "no profile row matched verified address"
            );
            return Err("no matching profile for address".to_string());
        }

        Ok(())
    }
}
