use crate::config::toml_config::SantaConfig;
use crate::domain::model::OutgoingMessage;
use crate::domain::ports::Mailer;
use crate::utils::error::{Result, SantaError};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Sends through an authenticated STARTTLS relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn from_config(config: &SantaConfig) -> Result<Self> {
        let password = &config.sender.password;
        if password.is_empty() || (password.starts_with("${") && password.ends_with('}')) {
            return Err(SantaError::MissingConfigError {
                field: "sender.password".to_string(),
            });
        }

        let credentials = Credentials::new(
            config.sender.email.clone(),
            config.sender.password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp.host)
            .map_err(|e| SantaError::ConfigValidationError {
                field: "smtp.host".to_string(),
                message: e.to_string(),
            })?
            .port(config.smtp_port())
            .credentials(credentials)
            .build();

        tracing::debug!(
            "SMTP relay {}:{} as {}",
            config.smtp.host,
            config.smtp_port(),
            config.sender.email
        );

        Ok(Self { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &OutgoingMessage) -> Result<()> {
        let email = build_email(message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| mail_error(message, e))?;

        Ok(())
    }
}

pub fn build_email(message: &OutgoingMessage) -> Result<Message> {
    let from = mailbox(message, &message.sender_name, &message.sender_email)?;
    let to = mailbox(message, &message.to.name, &message.to.email)?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(message.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())
        .map_err(|e| mail_error(message, e))
}

fn mailbox(message: &OutgoingMessage, name: &str, email: &str) -> Result<Mailbox> {
    let address: Address = email.parse().map_err(|e| mail_error(message, e))?;
    Ok(Mailbox::new(Some(name.to_string()), address))
}

fn mail_error(message: &OutgoingMessage, error: impl std::fmt::Display) -> SantaError {
    SantaError::MailError {
        recipient: message.to.name.clone(),
        message: error.to_string(),
    }
}
