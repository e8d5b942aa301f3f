use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Placeholder deixado no arquivo de exemplo; nunca é uma URL válida
pub const WEBHOOK_PLACEHOLDER: &str = "<SLACK_WEBHOOK_URL>";

pub const DEFAULT_HEADER_TEXT: &str = "AWS Glue Jobs Alert For Above 2 DPUs";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub aws: AwsSettings,
    pub slack: SlackSettings,
    pub alert: AlertSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AwsSettings {
    pub profile: Option<String>,  // Perfil nomeado ou SSO do AWS CLI
    pub region: Option<String>,  // Se ausente, usa a região do perfil
    pub page_size: Option<i32>,  // MaxResults por página do GetJobs
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SlackSettings {
    pub webhook_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl SlackSettings {
    /// URL ainda vazia ou com o placeholder do arquivo de exemplo
    pub fn webhook_configured(&self) -> bool {
        let url = self.webhook_url.trim();
        !url.is_empty() && url != WEBHOOK_PLACEHOLDER
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AlertSettings {
    /// Limite de DPUs; jobs acima sempre entram, jobs iguais só se FAILED
    pub capacity_threshold: f64,
    pub header_text: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Self::defaults()?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(
                Environment::with_prefix("GLUE_ALERTS")
                    .prefix_separator("_")
                    .separator("__"),
            );

        // Nomes de variável usados pelo AWS CLI e pelos webhooks do Slack
        if let Ok(url) = std::env::var("SLACK_WEBHOOK_URL") {
            builder = builder.set_override("slack.webhook_url", url)?;
        }
        if let Ok(profile) = std::env::var("AWS_PROFILE") {
            builder = builder.set_override("aws.profile", profile)?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Builder já com os valores padrão aplicados
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("slack.webhook_url", "")?
            .set_default("slack.timeout_seconds", 30)?
            .set_default("slack.connect_timeout_seconds", 5)?
            .set_default("alert.capacity_threshold", 2.0)?
            .set_default("alert.header_text", DEFAULT_HEADER_TEXT)
    }

    /// Erros estruturais. A URL do webhook não é validada aqui: sem ela a
    /// busca e o resumo ainda rodam, só o envio falha.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.alert.capacity_threshold.is_finite() || self.alert.capacity_threshold < 0.0 {
            return Err(ConfigError::Message(format!(
                "alert.capacity_threshold inválido: {}",
                self.alert.capacity_threshold
            )));
        }
        if matches!(self.aws.page_size, Some(n) if n <= 0) {
            return Err(ConfigError::Message("aws.page_size deve ser positivo".to_string()));
        }
        Ok(())
    }
}
