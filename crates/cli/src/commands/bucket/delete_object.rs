//! delete-object command - Remove a single key

use clap::Args;
use serde::Serialize;
use ss_core::non_empty;

use super::{CommandContext, connect, report_error, require_target, usage_error};
use crate::exit_code::ExitCode;

/// Delete an object
#[derive(Args, Debug)]
pub struct DeleteObjectArgs {
    /// Object key to delete
    #[arg(long)]
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeleteObjectOutput {
    status: &'static str,
    bucket: String,
    key: String,
}

/// Execute the delete-object command
pub async fn execute(args: &DeleteObjectArgs, ctx: &CommandContext<'_>) -> ExitCode {
    let target = match require_target(ctx) {
        Ok(target) => target,
        Err(code) => return code,
    };

    let Some(key) = non_empty(&args.key) else {
        return usage_error(ctx, "You must provide --key to delete an object");
    };

    let client = match connect(ctx).await {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client.delete_object(&target.bucket, key).await {
        Ok(()) => {
            if ctx.formatter.is_json() {
                ctx.formatter.json(&DeleteObjectOutput {
                    status: "success",
                    bucket: target.bucket,
                    key: key.to_string(),
                });
            } else {
                ctx.formatter
                    .success(&format!("Object deleted successfully: {key}"));
            }
            ExitCode::Success
        }
        Err(e) => report_error(ctx, "Error deleting object", &e),
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{FakeFactory, MockStore, context, session};
    use super::*;
    use ss_core::Error;

    #[tokio::test]
    async fn test_delete_object_success() {
        let mut store = MockStore::new();
        store
            .expect_delete_object()
            .withf(|bucket, key| bucket == "mybucket" && key == "tmp/old.txt")
            .times(1)
            .returning(|_, _| Ok(()));
        let factory = FakeFactory::with_store(store);
        let (ctx, captured) = context(&factory, session("mybucket", "eu-west-1"));

        let args = DeleteObjectArgs {
            key: Some("tmp/old.txt".into()),
        };
        assert_eq!(execute(&args, &ctx).await, ExitCode::Success);
        assert_eq!(captured.stdout(), "Object deleted successfully: tmp/old.txt");
    }

    #[tokio::test]
    async fn test_delete_object_requires_key() {
        for key in [None, Some(String::new())] {
            let factory = FakeFactory::new();
            let (ctx, captured) = context(&factory, session("mybucket", "eu-west-1"));

            let code = execute(&DeleteObjectArgs { key }, &ctx).await;

            assert_eq!(code, ExitCode::UsageError);
            assert_eq!(factory.connects(), 0);
            assert_eq!(
                captured.stderr(),
                "You must provide --key to delete an object"
            );
        }
    }

    #[tokio::test]
    async fn test_delete_object_denied() {
        let mut store = MockStore::new();
        store
            .expect_delete_object()
            .returning(|_, _| Err(Error::Auth("AccessDenied: Access Denied".into())));
        let factory = FakeFactory::with_store(store);
        let (ctx, captured) = context(&factory, session("mybucket", "eu-west-1"));

        let args = DeleteObjectArgs {
            key: Some("locked.txt".into()),
        };
        assert_eq!(execute(&args, &ctx).await, ExitCode::AuthError);
        assert_eq!(
            captured.stderr(),
            "Error deleting object: Authentication failed: AccessDenied: Access Denied"
        );
    }
}
