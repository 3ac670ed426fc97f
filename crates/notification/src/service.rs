//! Email notification service using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    /// Plain connection without TLS or credentials, for local catchers like MailDev.
    #[serde(default)]
    pub smtp_insecure: bool,
    pub from_address: String,
    pub contact_address: String,
}

/// A fully composed message, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends the message and returns its Message-ID.
    async fn send(&self, mail: OutgoingMail) -> anyhow::Result<String>;
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_insecure {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "using unauthenticated SMTP connection"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.parse()?,
        })
    }

    fn message_id(&self) -> String {
        format!("<{}@{}>", ulid::Ulid::new(), self.from.email.domain())
    }
}

impl EmailService {
    /// Builds the MIME message. A Reply-To that is not a valid mailbox is
    /// left out rather than failing the send.
    fn build_message(&self, mail: OutgoingMail, message_id: &str) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(mail.to.parse()?)
            .subject(mail.subject)
            .message_id(Some(message_id.to_owned()));

        if let Some(reply_to) = mail.reply_to {
            match reply_to.parse::<Mailbox>() {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(err) => {
                    tracing::warn!(reply_to = %reply_to, error = %err, "sending without reply-to");
                }
            }
        }

        Ok(builder.multipart(MultiPart::alternative_plain_html(mail.plain, mail.html))?)
    }
}

#[async_trait]
impl Mailer for EmailService {
    #[tracing::instrument(skip_all, fields(to = %mail.to, subject = %mail.subject))]
    async fn send(&self, mail: OutgoingMail) -> anyhow::Result<String> {
        let message_id = self.message_id();
        let message = self.build_message(mail, &message_id)?;

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        tracing::info!(message_id = %message_id, "email sent");

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use lettre::message::header::ReplyTo;

    use super::*;

    fn service() -> EmailService {
        EmailService::new(&EmailConfig {
            smtp_host: "localhost".to_owned(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_insecure: true,
            from_address: "SequenceIT <noreply@sequenceit.test>".to_owned(),
            contact_address: "hello@sequenceit.test".to_owned(),
        })
        .unwrap()
    }

    fn mail(reply_to: &str) -> OutgoingMail {
        OutgoingMail {
            to: "hello@sequenceit.test".to_owned(),
            reply_to: Some(reply_to.to_owned()),
            subject: "New Contact Form Submission from Jane".to_owned(),
            html: "<p>Hi</p>".to_owned(),
            plain: "Hi".to_owned(),
        }
    }

    #[test]
    fn invalid_reply_to_is_dropped() {
        let service = service();

        let message = service.build_message(mail("jane"), "<1@sequenceit.test>").unwrap();
        assert!(message.headers().get::<ReplyTo>().is_none());

        let message = service
            .build_message(mail("jane@acme.test"), "<2@sequenceit.test>")
            .unwrap();
        assert!(message.headers().get::<ReplyTo>().is_some());
    }
}
