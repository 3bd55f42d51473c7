//! Test doubles shared by the flow and form tests.

use std::sync::{Mutex, OnceLock};

use crate::error::{StorageError, TransportError};
use crate::storage::{KeyValueStore, MemoryStore};
use crate::transport::{LoginResponse, LoginTransport};

// =============================================================================
// MockTransport
// =============================================================================

/// Replays scripted results and records every request.
pub struct MockTransport {
    results: Mutex<Vec<Result<LoginResponse, TransportError>>>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl MockTransport {
    pub fn new(results: Vec<Result<LoginResponse, TransportError>>) -> Self {
        Self { results: Mutex::new(results), calls: Mutex::new(Vec::new()) }
    }

    pub fn ok(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(LoginResponse { status, body: body.to_owned() })])
    }

    pub fn failing(error: TransportError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl LoginTransport for MockTransport {
    async fn post_login(&self, url: &str, authorization: &str) -> Result<LoginResponse, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_owned(), authorization.to_owned()));
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            Err(TransportError::Request("no scripted response".to_owned()))
        } else {
            results.remove(0)
        }
    }
}

// =============================================================================
// RecordingNavigator
// =============================================================================

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl crate::navigate::Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_owned());
    }
}

// =============================================================================
// ReadOnlyStore
// =============================================================================

/// Serves reads from an inner store and rejects every write.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("read-only".to_owned()))
    }
}

// =============================================================================
// NoDeleteStore
// =============================================================================

/// Reads and writes through to an inner store but refuses every removal.
#[derive(Default)]
pub struct NoDeleteStore {
    pub inner: MemoryStore,
}

impl KeyValueStore for NoDeleteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("remove denied".to_owned()))
    }
}

// =============================================================================
// UnreadableStore
// =============================================================================

/// Accepts writes into an inner store but fails every read.
#[derive(Default)]
pub struct UnreadableStore {
    pub inner: MemoryStore,
}

impl KeyValueStore for UnreadableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

// =============================================================================
// Log capture
// =============================================================================

struct CaptureLogger {
    records: Mutex<Vec<String>>,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.records
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<&'static CaptureLogger> = OnceLock::new();

/// Install the process-wide capturing logger (idempotent) at trace level.
pub fn capture_logs() {
    LOGGER.get_or_init(|| {
        let logger: &'static CaptureLogger = Box::leak(Box::new(CaptureLogger { records: Mutex::new(Vec::new()) }));
        log::set_logger(logger).expect("logger already installed");
        log::set_max_level(log::LevelFilter::Trace);
        logger
    });
}

/// Every record captured so far, across all tests in this binary.
pub fn captured_logs() -> Vec<String> {
    LOGGER
        .get()
        .map(|logger| logger.records.lock().unwrap().clone())
        .unwrap_or_default()
}
