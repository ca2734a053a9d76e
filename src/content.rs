//! Markdown document loading for blueprint sub-pages.
//!
//! Documents live under `{base}/{blueprint_id}/` with one file per content
//! kind. The loader tries the locale-specific file first and falls back to
//! the locale-agnostic one; at most two attempts, no caching, no retry.
//! A missing document is a `NotFound` outcome, distinct from a transport
//! failure.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::locale::Locale;
use crate::logging::{log, obj, v_str, Domain, Level};

// =============================================================================
// Content kinds
// =============================================================================

/// The four documentation sub-pages of a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Implementation,
    Requirements,
    Validation,
    Project,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Implementation,
        ContentKind::Requirements,
        ContentKind::Validation,
        ContentKind::Project,
    ];

    /// File-name stem for this kind. The report kinds use longer stems
    /// than their route segments.
    pub fn stem(&self) -> &'static str {
        match self {
            ContentKind::Implementation => "implementation",
            ContentKind::Requirements => "requirements",
            ContentKind::Validation => "validation-report",
            ContentKind::Project => "project-report",
        }
    }

    /// Route segment, as used in page URLs and tool arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Implementation => "implementation",
            ContentKind::Requirements => "requirements",
            ContentKind::Validation => "validation",
            ContentKind::Project => "project",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        ContentKind::ALL.into_iter().find(|k| k.as_str() == id)
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ContentError {
    /// Caller defect: the loader was invoked without a blueprint id.
    #[error("content request missing blueprint identifier")]
    MissingIdentifier,
    /// Both the localized and the fallback document are absent.
    #[error("content not found: {blueprint_id}/{stem}")]
    NotFound {
        blueprint_id: String,
        stem: &'static str,
    },
    #[error("content url error: {0}")]
    BadUrl(#[from] url::ParseError),
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}

// =============================================================================
// Sources
// =============================================================================

/// Where documents come from. `Ok(None)` means "no such document here",
/// which is what triggers the fallback attempt; `Err` is a transport
/// failure and aborts the load.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, rel_path: &str) -> Result<Option<String>, ContentError>;
}

/// Fetches documents over HTTP. Any non-success status counts as absent.
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    /// Fails if the client cannot be built; a fallback client would lose
    /// the configured timeout.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, ContentError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, rel_path: &str) -> Result<Option<String>, ContentError> {
        // Keep the base's directory semantics: a trailing slash on the base
        // is required for join() to append rather than replace.
        let mut base = self.base.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        let url = base.join(rel_path)?;
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Ok(None);
        }
        Ok(Some(resp.text().await?))
    }
}

/// Reads documents from a local directory. Used by tools running against a
/// checkout of the content tree, and by tests.
pub struct FsSource {
    base: PathBuf,
}

impl FsSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait]
impl ContentSource for FsSource {
    async fn fetch(&self, rel_path: &str) -> Result<Option<String>, ContentError> {
        match tokio::fs::read_to_string(self.base.join(rel_path)).await {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

// =============================================================================
// Loader
// =============================================================================

pub struct ContentLoader<S> {
    source: S,
}

impl<S: ContentSource> ContentLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load one document: `{id}/{stem}.{locale}.md`, then `{id}/{stem}.md`.
    pub async fn load(
        &self,
        blueprint_id: &str,
        kind: ContentKind,
        locale: Locale,
    ) -> Result<String, ContentError> {
        if blueprint_id.trim().is_empty() {
            return Err(ContentError::MissingIdentifier);
        }
        let stem = kind.stem();

        let localized = format!("{blueprint_id}/{stem}.{}.md", locale.as_str());
        if let Some(text) = self.source.fetch(&localized).await? {
            log(
                Level::Debug,
                Domain::Content,
                "loaded",
                obj(&[("path", v_str(&localized))]),
            );
            return Ok(text);
        }

        let fallback = format!("{blueprint_id}/{stem}.md");
        if let Some(text) = self.source.fetch(&fallback).await? {
            log(
                Level::Debug,
                Domain::Content,
                "loaded_fallback",
                obj(&[("path", v_str(&fallback))]),
            );
            return Ok(text);
        }

        Err(ContentError::NotFound {
            blueprint_id: blueprint_id.to_string(),
            stem,
        })
    }
}

// =============================================================================
// Load session (per-page state machine)
// =============================================================================

/// Where a page's document request currently stands. `Loaded`, `NotFound`
/// and `Failed` are terminal until the next `begin()`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(String),
    /// Render the "coming soon" placeholder.
    NotFound {
        blueprint_id: String,
        stem: &'static str,
    },
    /// Transport failure; the message is shown as a diagnostic.
    Failed(String),
}

/// Tracks one consumer's in-flight document request. Each `begin()` bumps a
/// generation counter; a completion carrying a stale generation is dropped
/// instead of overwriting the newer request's state. The counter lives
/// inside the same mutex as the state, so the staleness check and the
/// state write are one atomic step: a `begin()` racing a `complete()` can
/// never slip in between them.
pub struct LoadSession {
    inner: Mutex<SessionInner>,
}

struct SessionInner {
    generation: u64,
    state: LoadState,
}

impl LoadSession {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                generation: 0,
                state: LoadState::Idle,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionInner> {
        // A poisoned session still holds coherent data (every write is a
        // single assignment), so recover rather than propagate.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start a new request; returns the token to pass to `complete`.
    pub fn begin(&self) -> u64 {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = LoadState::Loading;
        inner.generation
    }

    /// Apply a load outcome. Returns false (and changes nothing) when a
    /// newer request has started since `token` was issued.
    pub fn complete(&self, token: u64, outcome: Result<String, ContentError>) -> bool {
        let next = match outcome {
            Ok(text) => LoadState::Loaded(text),
            Err(ContentError::NotFound {
                blueprint_id,
                stem,
            }) => LoadState::NotFound {
                blueprint_id,
                stem,
            },
            Err(err) => LoadState::Failed(err.to_string()),
        };
        let mut inner = self.lock();
        if token != inner.generation {
            log(
                Level::Debug,
                Domain::Content,
                "stale_response_dropped",
                obj(&[("token", serde_json::json!(token))]),
            );
            return false;
        }
        inner.state = next;
        true
    }

    pub fn state(&self) -> LoadState {
        self.lock().state.clone()
    }
}

impl Default for LoadSession {
    fn default() -> Self {
        Self::new()
    }
}
