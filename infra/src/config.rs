//! Configuration for delivery providers
//!
//! Handles credentials and sender identities for the outbound channels.
//! Values are loaded from environment variables; a `.env` file is picked
//! up when present.

use serde::{Deserialize, Serialize};

/// Delivery provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Provider for phone channels ("twilio" or "mock")
    pub provider: String,

    /// Twilio Account SID (or generic API key)
    pub api_key: String,

    /// Twilio Auth Token (or generic API secret)
    pub api_secret: String,

    /// From number for SMS, E.164 format
    pub sms_from: String,

    /// From number for WhatsApp, E.164 format
    pub whatsapp_from: String,

    /// SMTP relay host for the email channel
    pub smtp_host: String,

    /// SMTP username
    pub smtp_username: String,

    /// SMTP password
    pub smtp_password: String,

    /// From mailbox for verification emails
    pub email_from: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            api_key: String::new(),
            api_secret: String::new(),
            sms_from: "+12025550100".to_string(),
            whatsapp_from: "+12025550100".to_string(),
            smtp_host: String::new(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            email_from: "CitaLink <no-reply@citalink.app>".to_string(),
        }
    }
}

impl DeliveryConfig {
    /// Load delivery configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            provider: std::env::var("DELIVERY_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            api_key: std::env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            api_secret: std::env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            sms_from: std::env::var("TWILIO_SMS_FROM")
                .unwrap_or_else(|_| "+12025550100".to_string()),
            whatsapp_from: std::env::var("TWILIO_WHATSAPP_FROM")
                .unwrap_or_else(|_| "+12025550100".to_string()),
            smtp_host: std::env::var("SMTP_HOST").unwrap_or_default(),
            smtp_username: std::env::var("SMTP_USERNAME").unwrap_or_default(),
            smtp_password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            email_from: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "CitaLink <no-reply@citalink.app>".to_string()),
        }
    }
}
