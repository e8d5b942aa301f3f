/// Alerta de DPUs do AWS Glue
///
/// Fluxo de uma execução (disparada por agendador externo):
/// - Lista os jobs do Glue e a execução mais recente de cada um
/// - Seleciona os jobs acima do limite de DPUs e separa por estado
/// - Imprime o resumo no console
/// - Envia um único alerta ao Slack se houver algum job selecionado
///
/// O processo sempre termina com código 0.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use glue_dpu_alerts::config::Settings;
use glue_dpu_alerts::models::JobBuckets;
use glue_dpu_alerts::services::job_fetcher::report_fetch_error;
use glue_dpu_alerts::services::{AlertNotifier, AwsGlueClient, JobFetcher};
use glue_dpu_alerts::utils::logging::*;
use glue_dpu_alerts::{report_and_notify, run};

async fn run_once() -> anyhow::Result<()> {
    let settings = Settings::new().context("Failed to load settings")?;
    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    // Sem webhook válido a busca e o resumo continuam; só o envio falha
    let notifier = match AlertNotifier::from_settings(&settings.slack, &settings.alert.header_text) {
        Ok(notifier) => Some(notifier),
        Err(err) => {
            log_warning(&format!("Slack notifier indisponível: {}", err));
            None
        }
    };
    let threshold = settings.alert.capacity_threshold;

    if settings.aws.profile.is_none() {
        log_warning("Nenhum perfil AWS configurado - usando a cadeia padrão de credenciais");
    }

    let report = match AwsGlueClient::connect(&settings.aws).await {
        Ok(api) => {
            let fetcher = JobFetcher::new(api)
                .with_threshold(threshold)
                .with_profile(settings.aws.profile.clone());
            run(&fetcher, notifier.as_ref()).await
        }
        Err(err) => {
            report_fetch_error(&err);
            report_and_notify(&JobBuckets::new(), threshold, notifier.as_ref()).await
        }
    };

    log_info(&format!(
        "Execução concluída: running={} idle={} failed={} notificado={}",
        report.running, report.idle, report.failed, report.notified
    ));
    Ok(())
}

#[tokio::main]
async fn main() {
    // Carregar variáveis de ambiente do arquivo .env (se existir)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if !dotenv_loaded {
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    if let Err(e) = run_once().await {
        log_error(&format!("{:#}", e));
    }
}
