//! Filtro e classificação dos jobs do Glue
//!
//! Regra de inclusão: `capacidade > limite`, ou `capacidade == limite` com
//! a última execução em FAILED. Jobs sem execução recebem o status
//! `NO_RUNS` e caem no grupo idle.

use crate::models::{JobBuckets, JobSnapshot, JobStatus};
use crate::services::glue::GlueApi;
use crate::utils::logging::*;
use crate::utils::{FetchError, FetchResult};

pub const DEFAULT_CAPACITY_THRESHOLD: f64 = 2.0;

/// Decide se um job entra no alerta
pub fn qualifies(capacity: f64, status: &JobStatus, threshold: f64) -> bool {
    capacity > threshold || (capacity == threshold && status.is_failed())
}

pub struct JobFetcher<A: GlueApi> {
    api: A,
    threshold: f64,
    profile: Option<String>,
}

impl<A: GlueApi> JobFetcher<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            threshold: DEFAULT_CAPACITY_THRESHOLD,
            profile: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Perfil usado apenas para os logs
    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    /// Percorre todos os jobs, um `GetJobRuns` por vez, e separa os
    /// selecionados em running, idle e failed
    ///
    /// Falha de `GetJobRuns` em um job isolado só descarta aquele job.
    /// Erros de credencial interrompem a busca inteira.
    pub async fn fetch(&self) -> FetchResult<JobBuckets> {
        log_fetch_started(self.profile.as_deref());

        let jobs = self.api.list_jobs().await?;
        log_jobs_listed(jobs.len());

        let mut buckets = JobBuckets::new();
        for job in jobs {
            let capacity = job.max_capacity.unwrap_or(0.0);
            let run = match self.api.latest_run(&job.name).await {
                Ok(run) => run,
                Err(err) if err.is_credentials() => return Err(err),
                Err(err) => {
                    log_job_skipped(&job.name, &err.to_string());
                    continue;
                }
            };

            let (status, last_run_time) = match run {
                Some(run) => (
                    run.state
                        .as_deref()
                        .map(JobStatus::from_api)
                        .unwrap_or(JobStatus::NoRuns),
                    run.started_on,
                ),
                None => (JobStatus::NoRuns, None),
            };

            let selected = qualifies(capacity, &status, self.threshold);
            log_job_scanned(&job.name, capacity, status.as_str(), selected);

            if selected {
                buckets.push(JobSnapshot::new(job.name, capacity, status, last_run_time));
            }
        }

        Ok(buckets)
    }

    /// Igual a `fetch`, mas qualquer falha vira listas vazias e um
    /// diagnóstico no log
    pub async fn fetch_or_empty(&self) -> JobBuckets {
        match self.fetch().await {
            Ok(buckets) => buckets,
            Err(err) => {
                report_fetch_error(&err);
                JobBuckets::new()
            }
        }
    }
}

pub fn report_fetch_error(err: &FetchError) {
    match err {
        FetchError::MissingCredentials(detail) => log_credentials_missing(detail),
        FetchError::ExpiredToken(detail) => log_token_expired(detail),
        FetchError::Api { operation, message } => log_glue_api_error(operation, message),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::services::glue::{JobDefinition, RunRecord};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Conta Glue em memória
    #[derive(Default)]
    pub(crate) struct FakeGlue {
        pub jobs: Vec<JobDefinition>,
        pub runs: HashMap<String, RunRecord>,
        pub fail_with: Option<fn() -> FetchError>,
        pub failing_run: Option<(String, fn() -> FetchError)>,
        pub run_calls: Mutex<Vec<String>>,
    }

    impl FakeGlue {
        pub fn with_job(mut self, name: &str, capacity: Option<f64>, state: Option<&str>) -> Self {
            self.jobs.push(JobDefinition {
                name: name.to_string(),
                max_capacity: capacity,
            });
            if let Some(state) = state {
                self.runs.insert(
                    name.to_string(),
                    RunRecord {
                        state: Some(state.to_string()),
                        started_on: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
                    },
                );
            }
            self
        }

        /// `GetJobRuns` falha apenas para `job_name`
        pub fn with_failing_run(mut self, job_name: &str, fail_with: fn() -> FetchError) -> Self {
            self.failing_run = Some((job_name.to_string(), fail_with));
            self
        }

        pub fn failing(fail_with: fn() -> FetchError) -> Self {
            Self {
                fail_with: Some(fail_with),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl GlueApi for FakeGlue {
        async fn list_jobs(&self) -> FetchResult<Vec<JobDefinition>> {
            if let Some(fail) = self.fail_with {
                return Err(fail());
            }
            Ok(self.jobs.clone())
        }

        async fn latest_run(&self, job_name: &str) -> FetchResult<Option<RunRecord>> {
            self.run_calls.lock().unwrap().push(job_name.to_string());
            if let Some((name, fail)) = &self.failing_run {
                if name == job_name {
                    return Err(fail());
                }
            }
            Ok(self.runs.get(job_name).cloned())
        }
    }

    fn names(jobs: &[JobSnapshot]) -> Vec<&str> {
        jobs.iter().map(|j| j.name.as_str()).collect()
    }

    #[test]
    fn test_qualifies_boundaries() {
        assert!(qualifies(2.5, &JobStatus::Succeeded, 2.0));
        assert!(qualifies(2.0, &JobStatus::Failed, 2.0));
        assert!(!qualifies(2.0, &JobStatus::Succeeded, 2.0));
        assert!(!qualifies(2.0, &JobStatus::Running, 2.0));
        assert!(!qualifies(1.0, &JobStatus::Failed, 2.0));
        assert!(!qualifies(0.0, &JobStatus::NoRuns, 2.0));
    }

    #[tokio::test]
    async fn test_scenarios_are_classified() {
        let api = FakeGlue::default()
            .with_job("A", Some(5.0), Some("RUNNING"))
            .with_job("B", Some(30.0), Some("SUCCEEDED"))
            .with_job("C", Some(2.0), Some("FAILED"))
            .with_job("D", Some(2.0), Some("SUCCEEDED"))
            .with_job("E", Some(60.0), Some("STARTING"));

        let buckets = JobFetcher::new(api).fetch().await.unwrap();

        assert_eq!(names(&buckets.running), vec!["A", "E"]);
        assert_eq!(names(&buckets.idle), vec!["B"]);
        assert_eq!(names(&buckets.failed), vec!["C"]);
        assert_eq!(buckets.len(), 4);
    }

    #[tokio::test]
    async fn test_small_jobs_are_excluded_unless_failed_at_threshold() {
        let api = FakeGlue::default()
            .with_job("tiny", Some(1.0), Some("FAILED"))
            .with_job("two-ok", Some(2.0), Some("RUNNING"))
            .with_job("no-capacity", None, Some("FAILED"));

        let buckets = JobFetcher::new(api).fetch().await.unwrap();
        assert!(buckets.is_empty());
    }

    #[tokio::test]
    async fn test_job_without_runs_goes_to_idle_with_sentinel() {
        let api = FakeGlue::default()
            .with_job("never-ran", Some(10.0), None)
            .with_job("never-ran-small", Some(2.0), None);

        let buckets = JobFetcher::new(api).fetch().await.unwrap();

        assert!(buckets.running.is_empty());
        assert!(buckets.failed.is_empty());
        assert_eq!(buckets.idle.len(), 1);
        let job = &buckets.idle[0];
        assert_eq!(job.name, "never-ran");
        assert_eq!(job.status, JobStatus::NoRuns);
        assert_eq!(job.last_run_display(), "N/A");
    }

    #[tokio::test]
    async fn test_every_job_is_looked_up_in_listing_order() {
        let api = FakeGlue::default()
            .with_job("z", Some(3.0), Some("STOPPED"))
            .with_job("a", Some(1.0), Some("RUNNING"))
            .with_job("m", Some(4.0), Some("TIMEOUT"));

        let fetcher = JobFetcher::new(api);
        let buckets = fetcher.fetch().await.unwrap();

        assert_eq!(names(&buckets.idle), vec!["z", "m"]);
        assert_eq!(*fetcher.api.run_calls.lock().unwrap(), vec!["z", "a", "m"]);
    }

    #[tokio::test]
    async fn test_custom_threshold() {
        let api = FakeGlue::default()
            .with_job("five", Some(5.0), Some("SUCCEEDED"))
            .with_job("ten", Some(10.0), Some("FAILED"))
            .with_job("twelve", Some(12.0), Some("RUNNING"));

        let buckets = JobFetcher::new(api).with_threshold(10.0).fetch().await.unwrap();

        assert_eq!(names(&buckets.running), vec!["twelve"]);
        assert_eq!(names(&buckets.failed), vec!["ten"]);
        assert!(buckets.idle.is_empty());
    }

    #[tokio::test]
    async fn test_credential_failure_yields_empty_buckets() {
        let fetcher = JobFetcher::new(FakeGlue::failing(|| {
            FetchError::MissingCredentials("no providers".to_string())
        }));
        assert!(matches!(fetcher.fetch().await, Err(FetchError::MissingCredentials(_))));
        assert!(fetcher.fetch_or_empty().await.is_empty());

        let fetcher = JobFetcher::new(FakeGlue::failing(|| {
            FetchError::ExpiredToken("sso expired".to_string())
        }));
        assert!(fetcher.fetch_or_empty().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_run_lookup_skips_only_that_job() {
        let api = FakeGlue::default()
            .with_job("first", Some(5.0), Some("RUNNING"))
            .with_job("throttled", Some(40.0), Some("FAILED"))
            .with_job("last", Some(30.0), Some("SUCCEEDED"))
            .with_failing_run("throttled", || FetchError::Api {
                operation: "GetJobRuns",
                message: "ThrottlingException".to_string(),
            });

        let fetcher = JobFetcher::new(api);
        let buckets = fetcher.fetch().await.unwrap();

        assert_eq!(names(&buckets.running), vec!["first"]);
        assert_eq!(names(&buckets.idle), vec!["last"]);
        assert!(buckets.failed.is_empty());
        assert_eq!(fetcher.api.run_calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_expired_token_during_run_lookup_stops_the_scan() {
        let api = FakeGlue::default()
            .with_job("first", Some(5.0), Some("RUNNING"))
            .with_job("second", Some(6.0), Some("RUNNING"))
            .with_job("third", Some(7.0), Some("RUNNING"))
            .with_failing_run("second", || FetchError::ExpiredToken("expired".to_string()));

        let fetcher = JobFetcher::new(api);
        assert!(matches!(fetcher.fetch().await, Err(FetchError::ExpiredToken(_))));
        assert_eq!(*fetcher.api.run_calls.lock().unwrap(), vec!["first", "second"]);
        assert!(fetcher.fetch_or_empty().await.is_empty());
    }

    #[tokio::test]
    async fn test_api_failure_is_absorbed() {
        let fetcher = JobFetcher::new(FakeGlue::failing(|| FetchError::Api {
            operation: "GetJobs",
            message: "ThrottlingException".to_string(),
        }));
        assert!(fetcher.fetch_or_empty().await.is_empty());
    }
}
