//! Monta e envia o alerta de DPUs para o Slack
//!
//! Um attachment por job, na ordem running, idle, failed. A cor segue a
//! precedência: FAILED -> vermelho; senão pela capacidade (<= 10 verde,
//! 10..50 amarelo, >= 50 vermelho).

use slack::{Attachment, Message, WebhookClient};

use crate::config::settings::{SlackSettings, DEFAULT_HEADER_TEXT};
use crate::models::{JobBuckets, JobSnapshot, JobStatus};
use crate::utils::logging::*;
use crate::utils::NotifyError;

pub const GREEN_MAX_CAPACITY: f64 = 10.0;
pub const RED_MIN_CAPACITY: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertColor {
    Green,
    Yellow,
    Red,
}

impl AlertColor {
    pub fn for_job(status: &JobStatus, capacity: f64) -> Self {
        if status.is_failed() {
            AlertColor::Red
        } else if capacity <= GREEN_MAX_CAPACITY {
            AlertColor::Green
        } else if capacity > GREEN_MAX_CAPACITY && capacity < RED_MIN_CAPACITY {
            AlertColor::Yellow
        } else {
            // >= 50, e também NaN
            AlertColor::Red
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            AlertColor::Green => "#36a64f",
            AlertColor::Yellow => "#ffcc00",
            AlertColor::Red => "#ff0000",
        }
    }
}

fn job_attachment(job: &JobSnapshot) -> Attachment {
    let color = AlertColor::for_job(&job.status, job.max_capacity);
    Attachment::new(color.hex(), format!("Job Name: {}", job.name))
        .short_field("DPUs", job.max_capacity)
        .short_field("Status", job.status.as_str())
        .short_field("Last Run Time", job.last_run_display())
}

/// Monta a mensagem completa a partir dos três grupos
pub fn build_message(header: &str, buckets: &JobBuckets) -> Message {
    Message::new(header).with_attachments(buckets.iter_in_order().map(job_attachment))
}

#[derive(Clone)]
pub struct AlertNotifier {
    client: WebhookClient,
    header_text: String,
}

impl AlertNotifier {
    pub fn new(client: WebhookClient) -> Self {
        Self {
            client,
            header_text: DEFAULT_HEADER_TEXT.to_string(),
        }
    }

    pub fn with_header(mut self, header_text: impl Into<String>) -> Self {
        self.header_text = header_text.into();
        self
    }

    /// Falha com `NotifyError::Config` se a URL estiver vazia ou com o
    /// placeholder
    pub fn from_settings(slack: &SlackSettings, header_text: &str) -> Result<Self, NotifyError> {
        if !slack.webhook_configured() {
            return Err(NotifyError::Config(
                "slack.webhook_url não configurado (use SLACK_WEBHOOK_URL)".to_string(),
            ));
        }
        let client = WebhookClient::with_timeouts(
            slack.webhook_url.clone(),
            slack.timeout_seconds,
            slack.connect_timeout_seconds,
        )?;
        Ok(Self::new(client).with_header(header_text))
    }

    /// Envia um único POST, sem retry. Sucesso e falha são logados aqui;
    /// o erro é devolvido apenas para inspeção do chamador.
    pub async fn notify(&self, buckets: &JobBuckets) -> Result<(), NotifyError> {
        let message = build_message(&self.header_text, buckets);

        match self.client.post_message(&message).await {
            Ok(status) => {
                log_slack_posted(status);
                Ok(())
            }
            Err(err) => {
                let err = NotifyError::from(err);
                match &err {
                    NotifyError::Rejected { status, body } => log_slack_rejected(*status, body),
                    other => log_slack_error(&other.to_string()),
                }
                Err(err)
            }
        }
    }
}
