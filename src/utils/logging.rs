use tracing::{debug, error, info, warn};

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_fetch_started(profile: Option<&str>) {
    info!("🔎 Listando jobs do Glue (perfil: {})", profile.unwrap_or("default chain"));
}

pub fn log_jobs_listed(count: usize) {
    info!("📋 {} job(s) encontrados na conta", count);
}

pub fn log_job_scanned(job: &str, capacity: f64, status: &str, selected: bool) {
    debug!(
        "Job {} - DPUs: {} - Status: {} - selecionado: {}",
        job, capacity, status, selected
    );
}

pub fn log_credentials_missing(detail: &str) {
    error!(
        "Credentials not available. Please configure your AWS credentials or IAM role. ({})",
        detail
    );
}

pub fn log_token_expired(detail: &str) {
    error!("SSO token has expired. Please refresh your SSO session. ({})", detail);
}

pub fn log_job_skipped(job: &str, error: &str) {
    warn!("⚠️ Job {} ignorado - falha ao buscar última execução: {}", job, error);
}

pub fn log_glue_api_error(operation: &str, error: &str) {
    error!("Glue API error: {} - Error: {}", operation, error);
}

pub fn log_slack_posted(status: u16) {
    info!("✅ Message posted to Slack. Status code: {}", status);
}

pub fn log_slack_rejected(status: u16, body: &str) {
    error!(
        "Failed to post message to Slack. Status code: {}. Response: {}",
        status, body
    );
}

pub fn log_slack_error(error: &str) {
    error!("An error occurred while sending the message to Slack: {}", error);
}

pub fn log_slack_not_configured(jobs: usize) {
    error!(
        "Slack webhook not configured - alerta com {} job(s) não enviado",
        jobs
    );
}

pub fn log_nothing_to_notify() {
    info!("Nenhum job acima do limite - alerta não enviado");
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
