pub mod job_snapshot;

pub use job_snapshot::{Bucket, JobBuckets, JobSnapshot, JobStatus};
