use thiserror::Error;

/// Falhas ao consultar jobs no Glue
#[derive(Debug, Error)]
pub enum FetchError {
    /// Nenhuma credencial encontrada na cadeia do perfil
    #[error("Credentials not available: {0}")]
    MissingCredentials(String),

    /// Token de sessão (SSO/STS) expirado
    #[error("Session token has expired: {0}")]
    ExpiredToken(String),

    /// Qualquer outra falha da API do Glue
    #[error("Glue API error in {operation}: {message}")]
    Api { operation: &'static str, message: String },
}

impl FetchError {
    pub fn is_credentials(&self) -> bool {
        matches!(self, FetchError::MissingCredentials(_) | FetchError::ExpiredToken(_))
    }
}

/// Falhas ao entregar o alerta no Slack
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Slack webhook returned status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Slack transport error: {0}")]
    Transport(String),

    #[error("Slack client configuration error: {0}")]
    Config(String),
}

impl From<slack::SlackError> for NotifyError {
    fn from(err: slack::SlackError) -> Self {
        match err {
            slack::SlackError::Rejected { status, body } => NotifyError::Rejected { status, body },
            slack::SlackError::ConfigError(msg) => NotifyError::Config(msg),
            other => NotifyError::Transport(other.to_string()),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_errors_are_flagged() {
        assert!(FetchError::MissingCredentials("x".into()).is_credentials());
        assert!(FetchError::ExpiredToken("x".into()).is_credentials());
        assert!(!FetchError::Api { operation: "GetJobs", message: "x".into() }.is_credentials());
    }

    #[test]
    fn test_slack_rejection_keeps_status_and_body() {
        let err: NotifyError = slack::SlackError::Rejected {
            status: 404,
            body: "no_service".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Slack webhook returned status 404: no_service");
    }
}
