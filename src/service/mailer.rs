use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error as ThisError;
use tracing::info;

use crate::config::Config;

#[derive(Debug, ThisError)]
pub enum MailError {
    #[error("mail credentials not configured")]
    NotConfigured,

    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("message build failed: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

#[derive(Debug, Clone)]
struct GmailAccount {
    user: String,
    app_password: String,
}

/// Outbound mail collaborator relaying through Gmail with an app password.
/// Credentials are optional at construction; callers check `is_configured`
/// before attempting a send so the missing-config case surfaces as a 400
/// instead of a transport failure.
#[derive(Debug, Clone)]
pub struct Mailer {
    relay: String,
    account: Option<GmailAccount>,
}

impl Mailer {
    pub fn new(relay: &str, user: Option<String>, app_password: Option<String>) -> Self {
        let account = match (user, app_password) {
            (Some(user), Some(app_password)) => Some(GmailAccount { user, app_password }),
            _ => None,
        };
        Self {
            relay: relay.to_string(),
            account,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            &cfg.smtp_relay,
            cfg.gmail_user.clone(),
            cfg.gmail_app_password.clone(),
        )
    }

    /// Construction without credentials; every send short-circuits.
    pub fn unconfigured() -> Self {
        Self::new("smtp.gmail.com", None, None)
    }

    pub fn is_configured(&self) -> bool {
        self.account.is_some()
    }

    pub async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let account = self.account.as_ref().ok_or(MailError::NotConfigured)?;

        let message = Message::builder()
            .from(account.user.parse()?)
            .to(recipient.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        let transport: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.relay)?
                .credentials(Credentials::new(
                    account.user.clone(),
                    account.app_password.clone(),
                ))
                .build();

        transport.send(message).await?;
        info!(recipient = %recipient, subject = %subject, "email relayed");
        Ok(())
    }
}
