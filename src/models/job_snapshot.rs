//! Snapshot de um job do Glue e agrupamento por estado de execução
//!
//! Um `JobSnapshot` só é construído para jobs que passaram no filtro de
//! capacidade. Vive apenas durante uma execução do processo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Formato usado no console e na mensagem do Slack
pub const LAST_RUN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Valor exibido quando o job não tem execução registrada
pub const NOT_AVAILABLE: &str = "N/A";

/// Estado da execução mais recente de um job
///
/// Os valores seguem os `JobRunState` da API do Glue. `NoRuns` é o
/// sentinela para jobs sem histórico de execução.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Starting,
    Running,
    Stopping,
    Stopped,
    Succeeded,
    Failed,
    Timeout,
    Error,
    Waiting,
    Expired,
    NoRuns,
    /// Estado que a API passou a devolver e ainda não mapeamos
    Other(String),
}

impl JobStatus {
    /// Converte o texto da API (e.g., "RUNNING") para o enum
    pub fn from_api(state: &str) -> Self {
        match state {
            "STARTING" => JobStatus::Starting,
            "RUNNING" => JobStatus::Running,
            "STOPPING" => JobStatus::Stopping,
            "STOPPED" => JobStatus::Stopped,
            "SUCCEEDED" => JobStatus::Succeeded,
            "FAILED" => JobStatus::Failed,
            "TIMEOUT" => JobStatus::Timeout,
            "ERROR" => JobStatus::Error,
            "WAITING" => JobStatus::Waiting,
            "EXPIRED" => JobStatus::Expired,
            other => JobStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Starting => "STARTING",
            JobStatus::Running => "RUNNING",
            JobStatus::Stopping => "STOPPING",
            JobStatus::Stopped => "STOPPED",
            JobStatus::Succeeded => "SUCCEEDED",
            JobStatus::Failed => "FAILED",
            JobStatus::Timeout => "TIMEOUT",
            JobStatus::Error => "ERROR",
            JobStatus::Waiting => "WAITING",
            JobStatus::Expired => "EXPIRED",
            JobStatus::NoRuns => "NO_RUNS",
            JobStatus::Other(s) => s,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, JobStatus::Failed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Job que passou no filtro de capacidade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub name: String,

    /// DPUs provisionadas (`MaxCapacity`)
    pub max_capacity: f64,

    pub status: JobStatus,

    /// Início da execução mais recente, se houver
    pub last_run_time: Option<DateTime<Utc>>,
}

impl JobSnapshot {
    pub fn new(
        name: impl Into<String>,
        max_capacity: f64,
        status: JobStatus,
        last_run_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            name: name.into(),
            max_capacity,
            status,
            last_run_time,
        }
    }

    /// Data da última execução formatada, ou "N/A"
    pub fn last_run_display(&self) -> String {
        self.last_run_time
            .map(|t| t.format(LAST_RUN_FORMAT).to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Capacidade sem ".0" para valores inteiros (e.g., 10.0 -> "10")
    pub fn capacity_display(&self) -> String {
        format_capacity(self.max_capacity)
    }
}

pub fn format_capacity(capacity: f64) -> String {
    if capacity.is_finite() && capacity.fract() == 0.0 {
        format!("{}", capacity as i64)
    } else {
        format!("{}", capacity)
    }
}

/// Grupo de destino de um job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Running,
    Idle,
    Failed,
}

impl Bucket {
    /// RUNNING/STARTING -> Running, FAILED -> Failed, resto -> Idle
    pub fn for_status(status: &JobStatus) -> Self {
        match status {
            JobStatus::Running | JobStatus::Starting => Bucket::Running,
            JobStatus::Failed => Bucket::Failed,
            _ => Bucket::Idle,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Running => "Running Jobs",
            Bucket::Idle => "Idle Jobs",
            Bucket::Failed => "Failed Jobs",
        }
    }
}

/// Jobs selecionados, separados em três listas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobBuckets {
    pub running: Vec<JobSnapshot>,
    pub idle: Vec<JobSnapshot>,
    pub failed: Vec<JobSnapshot>,
}

impl JobBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona o job na lista correspondente ao seu status
    pub fn push(&mut self, job: JobSnapshot) -> Bucket {
        let bucket = Bucket::for_status(&job.status);
        self.bucket_mut(bucket).push(job);
        bucket
    }

    pub fn bucket(&self, bucket: Bucket) -> &[JobSnapshot] {
        match bucket {
            Bucket::Running => &self.running,
            Bucket::Idle => &self.idle,
            Bucket::Failed => &self.failed,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<JobSnapshot> {
        match bucket {
            Bucket::Running => &mut self.running,
            Bucket::Idle => &mut self.idle,
            Bucket::Failed => &mut self.failed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty() && self.idle.is_empty() && self.failed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.running.len() + self.idle.len() + self.failed.len()
    }

    /// Todos os jobs na ordem running, idle, failed
    pub fn iter_in_order(&self) -> impl Iterator<Item = &JobSnapshot> {
        self.running.iter().chain(self.idle.iter()).chain(self.failed.iter())
    }
}
