//! SMTP mailer for the run report.

use crate::report::{compose_body, compose_subject};
use async_trait::async_trait;
use gazette_core::RunReport;
use gazette_error::{NotifyError, NotifyErrorKind, NotifyResult};
use gazette_interface::Mailer;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, error, info, instrument};

const SMTP_PORT: u16 = 587;

/// Mailer that delivers the run report through a regional SES SMTP relay.
///
/// The admin address serves as both sender and recipient.
#[derive(Debug, Clone)]
pub struct SesMailer {
    smtp_host: String,
    smtp_username: String,
    smtp_password: String,
    site_name: String,
    admin_user: String,
    admin_email: String,
}

impl SesMailer {
    /// Creates a new mailer for the given SES region.
    pub fn new(
        region: &str,
        smtp_username: impl Into<String>,
        smtp_password: impl Into<String>,
        site_name: impl Into<String>,
        admin_user: impl Into<String>,
        admin_email: impl Into<String>,
    ) -> Self {
        debug!(region = %region, "Creating new mailer");
        Self {
            smtp_host: format!("email-smtp.{}.amazonaws.com", region),
            smtp_username: smtp_username.into(),
            smtp_password: smtp_password.into(),
            site_name: site_name.into(),
            admin_user: admin_user.into(),
            admin_email: admin_email.into(),
        }
    }

    /// Override the SMTP relay host, e.g. for a local test server.
    pub fn with_smtp_host(mut self, host: impl Into<String>) -> Self {
        self.smtp_host = host.into();
        self
    }
}

#[async_trait]
impl Mailer for SesMailer {
    #[instrument(skip(self, report), fields(slug = %report.draft().slug()))]
    async fn send_report(&self, report: &RunReport) -> NotifyResult<()> {
        let mailbox: Mailbox = self.admin_email.parse().map_err(|e| {
            NotifyError::new(NotifyErrorKind::InvalidAddress(format!(
                "{}: {}",
                self.admin_email, e
            )))
        })?;

        let message = Message::builder()
            .from(mailbox.clone())
            .to(mailbox)
            .subject(compose_subject(&self.site_name, report))
            .header(ContentType::TEXT_HTML)
            .body(compose_body(&self.site_name, &self.admin_user, report))
            .map_err(|e| {
                NotifyError::new(NotifyErrorKind::MessageBuild(format!(
                    "Failed to build report email: {}",
                    e
                )))
            })?;

        let credentials =
            Credentials::new(self.smtp_username.clone(), self.smtp_password.clone());

        let transport: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_host)
                .map_err(|e| {
                    error!(error = ?e, "SMTP transport setup failed");
                    NotifyError::new(NotifyErrorKind::Transport(format!(
                        "Failed to create SMTP transport: {}",
                        e
                    )))
                })?
                .port(SMTP_PORT)
                .credentials(credentials)
                .build();

        transport.send(message).await.map_err(|e| {
            error!(error = ?e, "Report email send failed");
            NotifyError::new(NotifyErrorKind::SendFailed(format!(
                "Failed to send report email: {}",
                e
            )))
        })?;

        info!(to = %self.admin_email, "Sent run report email");
        Ok(())
    }
}
