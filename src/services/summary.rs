//! Resumo em texto exibido no console antes do envio ao Slack

use std::fmt::Write;

use crate::models::job_snapshot::format_capacity;
use crate::models::{Bucket, JobBuckets, JobSnapshot};

fn job_line(job: &JobSnapshot) -> String {
    format!(
        "Job Name: {}, DPUs: {}, Status: {}, Last Run Time: {}",
        job.name,
        job.capacity_display(),
        job.status,
        job.last_run_display()
    )
}

pub fn render_summary(buckets: &JobBuckets, threshold: f64) -> String {
    let none_found = format!("No jobs with more than {} DPUs.", format_capacity(threshold));

    if buckets.is_empty() {
        return none_found;
    }

    let mut out = format!("Jobs with more than {} DPUs:\n", format_capacity(threshold));
    for bucket in [Bucket::Running, Bucket::Idle, Bucket::Failed] {
        let jobs = buckets.bucket(bucket);
        if jobs.is_empty() {
            let _ = writeln!(out, "{}: {}", bucket.label(), none_found);
            continue;
        }
        let _ = writeln!(out, "{}:", bucket.label());
        for job in jobs {
            let _ = writeln!(out, "{}", job_line(job));
        }
    }
    out.truncate(out.trim_end().len());
    out
}
