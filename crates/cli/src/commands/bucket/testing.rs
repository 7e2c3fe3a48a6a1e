//! Test doubles for bucket command handlers

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mockall::mock;
use ss_core::{
    BucketInfo, ClientFactory, ClientOptions, CreateBucketRequest, Defaults, Error, ListOptions,
    ListResult, ObjectBody, ObjectInfo, ObjectStore, Result, Session, UploadBody,
};

use super::{BucketArgs, CommandContext};
use crate::exit_code::ExitCode;
use crate::output::{CaptureHandle, Formatter, OutputConfig};

mock! {
    pub Store {}

    #[async_trait]
    impl ObjectStore for Store {
        async fn create_bucket(&self, request: CreateBucketRequest) -> Result<()>;
        async fn delete_bucket(&self, bucket: &str) -> Result<()>;
        async fn list_buckets(&self) -> Result<Vec<BucketInfo>>;
        async fn bucket_location(&self, bucket: &str) -> Result<Option<String>>;
        async fn put_object(&self, bucket: &str, key: &str, body: UploadBody) -> Result<ObjectInfo>;
        async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectBody>;
        async fn list_objects(&self, bucket: &str, options: &ListOptions) -> Result<ListResult>;
        async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
    }
}

/// Client factory handing out a prepared [`MockStore`] and recording calls
pub struct FakeFactory {
    store: Mutex<Option<MockStore>>,
    failure: Mutex<Option<Error>>,
    connects: AtomicUsize,
    options: Mutex<Vec<ClientOptions>>,
}

impl FakeFactory {
    /// A factory whose store has no expectations; any store call panics
    pub fn new() -> Self {
        Self::with_store(MockStore::new())
    }

    pub fn with_store(store: MockStore) -> Self {
        Self {
            store: Mutex::new(Some(store)),
            failure: Mutex::new(None),
            connects: AtomicUsize::new(0),
            options: Mutex::new(Vec::new()),
        }
    }

    /// A factory whose `connect` fails with `error`
    pub fn failing(error: Error) -> Self {
        let factory = Self::new();
        *factory.failure.lock().unwrap() = Some(error);
        factory
    }

    /// Number of clients built so far
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Options passed to the most recent `connect`
    pub fn last_options(&self) -> Option<ClientOptions> {
        self.options.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ClientFactory for FakeFactory {
    async fn connect(&self, options: &ClientOptions) -> Result<Box<dyn ObjectStore>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.options.lock().unwrap().push(options.clone());

        if let Some(error) = self.failure.lock().unwrap().take() {
            return Err(error);
        }

        let store = self
            .store
            .lock()
            .unwrap()
            .take()
            .expect("client built more than once");
        Ok(Box::new(store))
    }
}

/// Formatter recording plain human-readable output
pub fn capture_formatter() -> (Formatter, CaptureHandle) {
    Formatter::capture(OutputConfig {
        no_color: true,
        no_progress: true,
        ..Default::default()
    })
}

/// Formatter recording JSON output
pub fn json_formatter() -> (Formatter, CaptureHandle) {
    Formatter::capture(OutputConfig {
        json: true,
        no_color: true,
        no_progress: true,
        ..Default::default()
    })
}

/// Session with bucket and region set
pub fn session(bucket: &str, region: &str) -> Session {
    Session::new(Some(bucket.into()), Some(region.into()), None, None)
}

/// Handler context over `factory` with captured human output
pub fn context<'a>(factory: &'a FakeFactory, session: Session) -> (CommandContext<'a>, CaptureHandle) {
    let (formatter, captured) = capture_formatter();
    (
        CommandContext {
            session,
            factory,
            formatter,
        },
        captured,
    )
}

/// Handler context over `factory` with captured JSON output
pub fn json_context<'a>(
    factory: &'a FakeFactory,
    session: Session,
) -> (CommandContext<'a>, CaptureHandle) {
    let (formatter, captured) = json_formatter();
    (
        CommandContext {
            session,
            factory,
            formatter,
        },
        captured,
    )
}

/// Run a parsed bucket command with default configuration
pub async fn run(args: BucketArgs, factory: &FakeFactory) -> (ExitCode, CaptureHandle) {
    let (formatter, captured) = capture_formatter();
    let code = super::execute(args, &Defaults::default(), factory, formatter).await;
    (code, captured)
}
