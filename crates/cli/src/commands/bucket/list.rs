//! list command - List buckets
//!
//! Lists every bucket in the account. This is the only bucket command that
//! needs neither `--name` nor `--region`.

use serde::Serialize;
use ss_core::BucketInfo;

use super::{CommandContext, connect, report_error};
use crate::exit_code::ExitCode;

#[derive(Debug, Serialize)]
struct ListOutput {
    buckets: Vec<BucketInfo>,
}

/// Execute the list command
pub async fn execute(ctx: &CommandContext<'_>) -> ExitCode {
    if let Some(profile) = ctx.session.profile() {
        tracing::info!("Using AWS profile: {profile}");
    }

    let client = match connect(ctx).await {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client.list_buckets().await {
        Ok(buckets) => {
            if ctx.formatter.is_json() {
                ctx.formatter.json(&ListOutput { buckets });
            } else if buckets.is_empty() {
                ctx.formatter.println("No buckets found");
            } else {
                ctx.formatter.println("Buckets:");
                for bucket in &buckets {
                    ctx.formatter.println(&format_bucket(bucket));
                }
            }
            ExitCode::Success
        }
        Err(e) => report_error(ctx, "Error listing buckets", &e),
    }
}

fn format_bucket(bucket: &BucketInfo) -> String {
    let created = bucket
        .created
        .map(|ts| ts.strftime("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    format!(" - {} (created: {created})", bucket.name)
}
