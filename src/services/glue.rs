//! Acesso à API do AWS Glue
//!
//! Duas chamadas somente-leitura: `GetJobs` (paginado) e `GetJobRuns`
//! com `MaxResults = 1`. O trait `GlueApi` isola o SDK para que o
//! fetcher possa ser testado sem credenciais.

use async_trait::async_trait;
use aws_credential_types::provider::{error::CredentialsError, ProvideCredentials};
use aws_sdk_glue::config::Region;
use aws_sdk_glue::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_glue::Client;
use chrono::{DateTime, Utc};

use crate::config::settings::AwsSettings;
use crate::utils::{FetchError, FetchResult};

/// Definição de job como devolvida pelo `GetJobs`
#[derive(Debug, Clone, PartialEq)]
pub struct JobDefinition {
    pub name: String,
    pub max_capacity: Option<f64>,
}

/// Execução mais recente de um job
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub state: Option<String>,
    pub started_on: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait GlueApi: Send + Sync {
    /// Lista todos os jobs da conta, seguindo o `NextToken` até o fim
    async fn list_jobs(&self) -> FetchResult<Vec<JobDefinition>>;

    /// Busca apenas a execução mais recente do job
    async fn latest_run(&self, job_name: &str) -> FetchResult<Option<RunRecord>>;
}

/// Implementação sobre o `aws-sdk-glue`
#[derive(Clone)]
pub struct AwsGlueClient {
    client: Client,
    page_size: Option<i32>,
}

impl AwsGlueClient {
    /// Carrega a configuração do perfil e valida as credenciais
    ///
    /// As credenciais são resolvidas uma vez aqui para que credencial
    /// ausente ou token SSO expirado virem um `FetchError` nomeado em vez
    /// de falhar no meio da listagem.
    pub async fn connect(settings: &AwsSettings) -> FetchResult<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let provider = sdk_config.credentials_provider().ok_or_else(|| {
            FetchError::MissingCredentials("no credentials provider configured".to_string())
        })?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| map_credentials_error(&e))?;

        Ok(Self::from_client(Client::new(&sdk_config), settings.page_size))
    }

    /// Usa um cliente já configurado (endpoint e credenciais próprios)
    pub fn from_client(client: Client, page_size: Option<i32>) -> Self {
        Self { client, page_size }
    }
}

#[async_trait]
impl GlueApi for AwsGlueClient {
    async fn list_jobs(&self) -> FetchResult<Vec<JobDefinition>> {
        let mut jobs = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let output = self
                .client
                .get_jobs()
                .set_next_token(next_token.take())
                .set_max_results(self.page_size)
                .send()
                .await
                .map_err(|e| map_sdk_error("GetJobs", e))?;

            for job in output.jobs() {
                let Some(name) = job.name() else {
                    continue;
                };
                jobs.push(JobDefinition {
                    name: name.to_string(),
                    max_capacity: job.max_capacity(),
                });
            }

            match output.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        Ok(jobs)
    }

    async fn latest_run(&self, job_name: &str) -> FetchResult<Option<RunRecord>> {
        let output = self
            .client
            .get_job_runs()
            .job_name(job_name)
            .max_results(1)
            .send()
            .await
            .map_err(|e| map_sdk_error("GetJobRuns", e))?;

        Ok(output.job_runs().first().map(|run| RunRecord {
            state: run.job_run_state().map(|s| s.as_str().to_string()),
            started_on: run
                .started_on()
                .and_then(|t| DateTime::<Utc>::from_timestamp(t.secs(), t.subsec_nanos())),
        }))
    }
}

/// Traduz falhas da cadeia de credenciais
pub fn map_credentials_error(err: &CredentialsError) -> FetchError {
    let detail = DisplayErrorContext(err).to_string();
    match err {
        CredentialsError::CredentialsNotLoaded(_) => FetchError::MissingCredentials(detail),
        _ if mentions_expiry(&detail) => FetchError::ExpiredToken(detail),
        _ => FetchError::MissingCredentials(detail),
    }
}

fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> FetchError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = err.code().map(str::to_string);
    let message = DisplayErrorContext(&err).to_string();
    classify_service_error(operation, code.as_deref(), message)
}

/// Códigos de erro do serviço que indicam sessão expirada ou inválida
pub fn classify_service_error(
    operation: &'static str,
    code: Option<&str>,
    message: String,
) -> FetchError {
    match code {
        Some("ExpiredTokenException") | Some("ExpiredToken") | Some("RequestExpired") => {
            FetchError::ExpiredToken(message)
        }
        Some("UnrecognizedClientException") | Some("InvalidClientTokenId")
        | Some("MissingAuthenticationToken") => FetchError::MissingCredentials(message),
        _ => FetchError::Api { operation, message },
    }
}

fn mentions_expiry(detail: &str) -> bool {
    detail.to_lowercase().contains("expired")
}
