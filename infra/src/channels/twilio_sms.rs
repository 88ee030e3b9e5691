//! Twilio SMS sender
//!
//! Sends verification messages through the Twilio API with E.164
//! validation, bounded retry with exponential backoff, and masked
//! addresses in every log line.

use async_trait::async_trait;
use phonenumber::{Mode, PhoneNumber};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use twilio::{Client, OutboundMessage};

use cl_core::services::verification::MessageSender;
use cl_shared::utils::address::mask_address;

use crate::InfrastructureError;

/// Maximum message length accepted by Twilio
const MAX_MESSAGE_LENGTH: usize = 1600;

/// Twilio sender configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Maximum retry attempts for failed requests
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| InfrastructureError::Config("TWILIO_ACCOUNT_SID not set".to_string()))?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| InfrastructureError::Config("TWILIO_AUTH_TOKEN not set".to_string()))?;
        let from_number = std::env::var("TWILIO_SMS_FROM")
            .map_err(|_| InfrastructureError::Config("TWILIO_SMS_FROM not set".to_string()))?;

        if !from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_SMS_FROM must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid,
            auth_token,
            from_number,
            ..Default::default()
        })
    }
}

/// Twilio SMS sender implementation
pub struct TwilioSmsSender {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsSender {
    /// Create a new Twilio SMS sender
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "Twilio credentials are not configured".to_string(),
            ));
        }

        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_address(&config.from_number),
            "Twilio SMS sender initialized"
        );

        Ok(Self { client, config })
    }

    /// Validate and normalize a phone number to E.164 form
    pub(crate) fn validate_phone_number(phone: &str) -> Result<String, InfrastructureError> {
        match phone.parse::<PhoneNumber>() {
            Ok(parsed) => {
                let formatted = parsed.format().mode(Mode::E164).to_string();
                debug!(phone = %mask_address(&formatted), "validated phone number");
                Ok(formatted)
            }
            Err(e) => {
                error!(phone = %mask_address(phone), error = %e, "invalid phone number");
                Err(InfrastructureError::Delivery(format!(
                    "invalid phone number format: {}",
                    e
                )))
            }
        }
    }

    /// Send a message with bounded retry and exponential backoff
    pub(crate) async fn send_with_retry(
        client: &Client,
        from: &str,
        to: &str,
        message: &str,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                attempt = attempts,
                max = max_retries,
                to = %mask_address(to),
                "sending message via Twilio"
            );

            let msg = OutboundMessage::new(from, to, message);

            match client.send_message(msg).await {
                Ok(response) => {
                    info!(
                        to = %mask_address(to),
                        sid = %response.sid,
                        "message sent successfully via Twilio"
                    );
                    return Ok(response.sid);
                }
                Err(e) => {
                    error!(
                        attempt = attempts,
                        max = max_retries,
                        error = %e,
                        "failed to send message via Twilio"
                    );

                    if attempts >= max_retries {
                        return Err(InfrastructureError::Delivery(format!(
                            "failed after {} attempts: {}",
                            max_retries, e
                        )));
                    }

                    let error_msg = e.to_string();
                    if error_msg.contains("400") || error_msg.contains("invalid") {
                        // Client errors will not succeed on retry
                        return Err(InfrastructureError::Delivery(format!(
                            "invalid request: {}",
                            e
                        )));
                    }
                    if error_msg.contains("429") || error_msg.contains("rate") {
                        warn!(delay = ?delay, "rate limit detected, backing off");
                    }

                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

#[async_trait]
impl MessageSender for TwilioSmsSender {
    async fn send(&self, address: &str, message: &str) -> Result<String, String> {
        let normalized = Self::validate_phone_number(address).map_err(|e| e.to_string())?;

        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(format!(
                "message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            ));
        }

        Self::send_with_retry(
            &self.client,
            &self.config.from_number,
            &normalized,
            message,
            self.config.max_retries,
            self.config.retry_delay_ms,
        )
        .await
        .map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
