//! Cliente HTTP para Incoming Webhooks do Slack

use crate::error::{Result, SlackError};
use crate::types::Message;
use reqwest::{Client as HttpClient, StatusCode};
use std::time::Duration;

/// Cliente para publicar mensagens em um webhook fixo
///
/// Não faz retry: cada chamada de `post_message` resulta em exatamente
/// um POST.
#[derive(Clone)]
pub struct WebhookClient {
    http_client: HttpClient,
    webhook_url: String,
}

impl WebhookClient {
    /// Cria um novo cliente de webhook
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(webhook_url: impl Into<String>) -> Result<Self> {
        Self::with_timeouts(webhook_url, 30, 5)
    }

    /// Cria um novo cliente com timeouts customizados
    pub fn with_timeouts(
        webhook_url: impl Into<String>,
        total_timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self> {
        let webhook_url = webhook_url.into();
        if webhook_url.trim().is_empty() {
            return Err(SlackError::ConfigError("webhook URL is empty".to_string()));
        }

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(total_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .map_err(|e| SlackError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            webhook_url,
        })
    }

    /// Publica a mensagem no webhook
    ///
    /// Retorna o status HTTP quando o Slack responde 200. Qualquer outro
    /// status vira `SlackError::Rejected` com o corpo da resposta.
    pub async fn post_message(&self, message: &Message) -> Result<u16> {
        let body = serde_json::to_vec(message)?;

        tracing::debug!(
            "POST webhook com {} attachment(s), {} bytes",
            message.attachments.len(),
            body.len()
        );

        let response = self
            .http_client
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(status.as_u16());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SlackError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
