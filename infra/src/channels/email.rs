//! SMTP email sender for the email verification channel

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};
use uuid::Uuid;

use cl_core::services::verification::MessageSender;
use cl_shared::utils::address::mask_address;

use crate::config::DeliveryConfig;
use crate::InfrastructureError;

/// Configuration for the SMTP email sender
#[derive(Debug, Clone)]
pub struct EmailSenderConfig {
    /// SMTP relay host
    pub smtp_host: String,
    /// SMTP username
    pub username: String,
    /// SMTP password
    pub password: String,
    /// From mailbox, e.g. `CitaLink <no-reply@citalink.app>`
    pub from: String,
    /// Subject line for verification emails, bilingual by convention
    pub subject: String,
}

impl Default for EmailSenderConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::new(),
            username: String::new(),
            password: String::new(),
            from: "CitaLink <no-reply@citalink.app>".to_string(),
            subject: "CitaLink 인증번호 | Código de verificación CitaLink".to_string(),
        }
    }
}

impl From<&DeliveryConfig> for EmailSenderConfig {
    fn from(config: &DeliveryConfig) -> Self {
        Self {
            smtp_host: config.smtp_host.clone(),
            username: config.smtp_username.clone(),
            password: config.smtp_password.clone(),
            from: config.email_from.clone(),
            ..Default::default()
        }
    }
}

/// SMTP sender for verification emails
pub struct EmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: EmailSenderConfig,
}

impl EmailSender {
    /// Create a new email sender over an SMTP relay
    pub fn new(config: EmailSenderConfig) -> Result<Self, InfrastructureError> {
        if config.smtp_host.is_empty() {
            return Err(InfrastructureError::Config(
                "SMTP_HOST not set".to_string(),
            ));
        }

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Email(format!("invalid SMTP relay: {}", e)))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        info!(host = %config.smtp_host, "SMTP email sender initialized");

        Ok(Self { transport, config })
    }

    async fn deliver(&self, address: &str, body: &str) -> Result<String, InfrastructureError> {
        let email = Message::builder()
            .from(
                self.config
                    .from
                    .parse()
                    .map_err(|e| InfrastructureError::Email(format!("invalid from mailbox: {}", e)))?,
            )
            .to(address
                .parse()
                .map_err(|e| InfrastructureError::Email(format!("invalid recipient: {}", e)))?)
            .subject(self.config.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| InfrastructureError::Email(format!("failed to build message: {}", e)))?;

        self.transport.send(email).await.map_err(|e| {
            error!(
                address = %mask_address(address),
                error = %e,
                "failed to send verification email"
            );
            InfrastructureError::Email(e.to_string())
        })?;

        // SMTP does not hand back a provider id; mint one for tracing
        let message_id = format!("smtp_{}", Uuid::new_v4());

        info!(
            provider = "smtp",
            address = %mask_address(address),
            message_id = %message_id,
            "verification email sent"
        );

        Ok(message_id)
    }

    /// Validate a recipient address well enough to fail fast
    fn is_plausible_recipient(address: &str) -> bool {
        match address.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.'),
            None => false,
        }
    }
}

#[async_trait]
impl MessageSender for EmailSender {
    async fn send(&self, address: &str, message: &str) -> Result<String, String> {
        if !Self::is_plausible_recipient(address) {
            return Err(format!(
                "invalid email recipient: {}",
                mask_address(address)
            ));
        }

        self.deliver(address, message)
            .await
            .map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        "Smtp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_host_is_config_error() {
        let result = EmailSender::new(EmailSenderConfig::default());
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_plausible_recipient() {
        assert!(EmailSender::is_plausible_recipient("user@example.com"));
        assert!(!EmailSender::is_plausible_recipient("userexample.com"));
        assert!(!EmailSender::is_plausible_recipient("@example.com"));
        assert!(!EmailSender::is_plausible_recipient("user@nodomain"));
    }

    #[test]
    fn test_subject_defaults_bilingual() {
        let config = EmailSenderConfig::default();
        assert!(config.subject.contains("인증번호"));
        assert!(config.subject.contains("verificación"));
    }
}
