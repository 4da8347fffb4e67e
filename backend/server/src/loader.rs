//! # Maps Script Loader
//!
//! Fetches the mapping provider's JavaScript once and hands the same bytes to
//! every caller, so the API key never leaves the server.
//!
//! ## Phases
//! - Idle: nothing fetched. First `load()` checks for a local copy, otherwise starts a fetch
//! - Loading: a fetch is in flight. Callers enqueue a oneshot and wait on it
//! - Loaded: callers get the cached script immediately
//!
//! A failed fetch completes every waiter with the error and drops back to
//! Idle, so the next `load()` fetches again. A fetch task that dies without
//! finishing (panic, runtime shutdown) does the same with `Abandoned`.
use std::{
    future::Future,
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use axum::body::Bytes;
use reqwest::Client;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, error, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Failed to load maps script: {0}")]
    Fetch(String),

    #[error("Maps script was empty")]
    Empty,

    #[error("Maps script load was abandoned")]
    Abandoned,
}

/// Where the script comes from.
pub trait ScriptSource: Send + Sync + 'static {
    /// A copy that is already available without a fetch. Called with the
    /// loader lock held, so it must not block.
    fn present(&self) -> Option<Bytes> {
        None
    }

    fn fetch(&self) -> impl Future<Output = Result<Bytes, LoadError>> + Send;
}

pub struct HttpScriptSource {
    client: Client,
    url: String,
    api_key: String,
    local_copy: Option<Bytes>,
}

impl HttpScriptSource {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            api_key: api_key.into(),
            local_copy: None,
        }
    }

    /// Reads the local copy now so `present()` never touches the disk.
    pub fn with_local_copy(mut self, path: Option<PathBuf>) -> Self {
        self.local_copy = path.and_then(|path| {
            std::fs::read(&path)
                .map_err(|e| debug!("No local maps script at {}: {e}", path.display()))
                .ok()
                .filter(|script| !script.is_empty())
                .map(Bytes::from)
        });
        self
    }
}

impl ScriptSource for HttpScriptSource {
    fn present(&self) -> Option<Bytes> {
        self.local_copy.clone()
    }

    async fn fetch(&self) -> Result<Bytes, LoadError> {
        let fetch_error = |e: reqwest::Error| LoadError::Fetch(e.to_string());

        let script = self
            .client
            .get(&self.url)
            .query(&[("key", self.api_key.as_str()), ("libraries", "places")])
            .send()
            .await
            .map_err(fetch_error)?
            .error_for_status()
            .map_err(fetch_error)?
            .bytes()
            .await
            .map_err(fetch_error)?;

        if script.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok(script)
    }
}

type Waiter = oneshot::Sender<Result<Bytes, LoadError>>;

enum Phase {
    Idle,
    Loading,
    Loaded(Bytes),
}

struct Inner {
    phase: Phase,
    waiters: Vec<Waiter>,
}

pub struct ScriptLoader<S> {
    source: Arc<S>,
    inner: Arc<Mutex<Inner>>,
}

impl<S: ScriptSource> ScriptLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            inner: Arc::new(Mutex::new(Inner {
                phase: Phase::Idle,
                waiters: Vec::new(),
            })),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(lock(&self.inner).phase, Phase::Loaded(_))
    }

    pub async fn load(&self) -> Result<Bytes, LoadError> {
        let receiver = {
            let mut inner = lock(&self.inner);

            if let Phase::Loaded(script) = &inner.phase {
                return Ok(script.clone());
            }

            let idle = matches!(inner.phase, Phase::Idle);

            if idle {
                if let Some(script) = self.source.present() {
                    info!("Maps script already present, skipping fetch");
                    inner.phase = Phase::Loaded(script.clone());
                    flush(&mut inner, Ok(script.clone()));
                    return Ok(script);
                }
            }

            let (sender, receiver) = oneshot::channel();
            inner.waiters.push(sender);

            if idle {
                inner.phase = Phase::Loading;
                self.spawn_fetch();
            } else {
                debug!("Maps script already loading, waiting");
            }

            receiver
        };

        receiver.await.unwrap_or(Err(LoadError::Abandoned))
    }

    fn spawn_fetch(&self) {
        let source = self.source.clone();
        let inner = self.inner.clone();

        info!("Fetching maps script");

        tokio::spawn(async move {
            let guard = FetchGuard { inner: Some(inner) };
            let result = source.fetch().await;

            guard.finish(result);
        });
    }
}

/// Owns the loading phase while a fetch task runs. Dropping it without
/// `finish` resets to Idle and fails every waiter with `Abandoned`.
struct FetchGuard {
    inner: Option<Arc<Mutex<Inner>>>,
}

impl FetchGuard {
    fn finish(mut self, result: Result<Bytes, LoadError>) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        let mut inner = lock(&inner);

        match &result {
            Ok(script) => {
                info!("Maps script loaded ({} bytes)", script.len());
                inner.phase = Phase::Loaded(script.clone());
            }
            Err(e) => {
                error!("Maps script loading error: {e}");
                inner.phase = Phase::Idle;
            }
        }

        flush(&mut inner, result);
    }
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.take() {
            error!("Maps script fetch ended without a result");

            let mut inner = lock(&inner);
            inner.phase = Phase::Idle;
            flush(&mut inner, Err(LoadError::Abandoned));
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

fn flush(inner: &mut Inner, result: Result<Bytes, LoadError>) {
    for waiter in inner.waiters.drain(..) {
        // Receiver dropped means the caller went away.
        let _ = waiter.send(result.clone());
    }
}
