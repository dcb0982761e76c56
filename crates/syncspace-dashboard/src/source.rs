//! Upstream call sources.
//!
//! The video backend owns the list of scheduled calls. The dashboard only
//! needs an asynchronous "give me the upcoming calls" operation, captured by
//! the [`CallSource`] trait.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use syncspace_core::MeetingRecord;
use tracing::debug;

use crate::error::{SourceError, SourceResult};

/// A boxed future for the object-safe trait methods below.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Something that can list the user's upcoming calls.
pub trait CallSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetches the upcoming calls, in no particular order.
    ///
    /// Records may lack a start time.
    fn fetch_upcoming(&self) -> BoxFuture<'_, SourceResult<Vec<MeetingRecord>>>;
}

/// An in-memory list of calls.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    calls: Vec<MeetingRecord>,
}

impl StaticSource {
    /// Creates a source that always returns `calls`.
    pub fn new(calls: Vec<MeetingRecord>) -> Self {
        Self { calls }
    }
}

impl CallSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_upcoming(&self) -> BoxFuture<'_, SourceResult<Vec<MeetingRecord>>> {
        Box::pin(async move { Ok(self.calls.clone()) })
    }
}

/// Calls read from a JSON file holding an array of records.
///
/// A missing file or a `null` payload both mean "no calls".
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CallSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch_upcoming(&self) -> BoxFuture<'_, SourceResult<Vec<MeetingRecord>>> {
        Box::pin(async move {
            let content = match tokio::fs::read_to_string(&self.path).await {
                Ok(content) => content,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(path = %self.path.display(), "Calls file missing, treating as empty");
                    return Ok(Vec::new());
                }
                Err(source) => {
                    return Err(SourceError::Read {
                        path: self.path.clone(),
                        source,
                    });
                }
            };

            let calls: Option<Vec<MeetingRecord>> =
                serde_json::from_str(&content).map_err(|source| SourceError::Decode {
                    path: self.path.clone(),
                    source,
                })?;
            let calls = calls.unwrap_or_default();
            debug!(path = %self.path.display(), count = calls.len(), "Loaded calls");
            Ok(calls)
        })
    }
}

/// What the dashboard currently knows about the user's calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CallsState {
    /// The source has not answered yet.
    #[default]
    Loading,
    /// The source answered with these calls.
    Ready(Vec<MeetingRecord>),
}

impl CallsState {
    /// Returns `true` while waiting for the source.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The known calls, empty while loading.
    pub fn calls(&self) -> &[MeetingRecord] {
        match self {
            Self::Loading => &[],
            Self::Ready(calls) => calls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn static_source_returns_its_calls() {
        let source = StaticSource::new(vec![MeetingRecord::new("a"), MeetingRecord::new("b")]);
        let calls = source.fetch_upcoming().await.unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(source.name(), "static");
    }

    #[tokio::test]
    async fn file_source_reads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"a","startsAt":"2026-10-14T15:00:00Z","description":"Sync"}},{{"id":"b"}}]"#
        )
        .unwrap();

        let source = FileSource::new(file.path());
        let calls = source.fetch_upcoming().await.unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].description.as_deref(), Some("Sync"));
        assert_eq!(calls[1].starts_at, None);
    }

    #[tokio::test]
    async fn file_source_null_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "null").unwrap();

        let calls = FileSource::new(file.path()).fetch_upcoming().await.unwrap();
        assert!(calls.is_empty());
    }

    #[tokio::test]
    async fn file_source_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("calls.json"));
        assert!(source.fetch_upcoming().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn file_source_bad_json_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id":"not-an-array"}}"#).unwrap();

        let err = FileSource::new(file.path()).fetch_upcoming().await.unwrap_err();
        assert!(matches!(err, SourceError::Decode { .. }));
    }

    #[test]
    fn calls_state() {
        let state = CallsState::default();
        assert!(state.is_loading());
        assert!(state.calls().is_empty());

        let state = CallsState::Ready(vec![MeetingRecord::new("a")]);
        assert!(!state.is_loading());
        assert_eq!(state.calls().len(), 1);
    }
}
