//! Tipos de erro para o crate slack

use thiserror::Error;

/// Erros do cliente de webhook do Slack
#[derive(Debug, Error)]
pub enum SlackError {
    /// Erro de transporte (conexão, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Webhook respondeu com status diferente de 200
    #[error("Slack webhook rejected message (status {status}): {body}")]
    Rejected { status: u16, body: String },

    /// Erro de serialização do payload
    #[error("JSON serialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, SlackError>;
