pub mod alert_notifier;
pub mod glue;
pub mod job_fetcher;
pub mod summary;

pub use alert_notifier::{build_message, AlertColor, AlertNotifier};
pub use glue::{AwsGlueClient, GlueApi, JobDefinition, RunRecord};
pub use job_fetcher::{qualifies, JobFetcher};
pub use summary::render_summary;
