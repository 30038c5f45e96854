//! Content store - read-only access to the JSON indices and Markdown bodies
//!
//! A store answers one question: "what are the bytes at this content path?".
//! Paths are relative to the content root (`authors.json`,
//! `blogs/index.json`, `blogs/<fileName>`).

use serde::de::DeserializeOwned;
use std::future::Future;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading from a content store
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid content path: {0}")]
    InvalidPath(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} responded with HTTP {status}")]
    Status { path: String, status: u16 },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A read-only source of content
pub trait ContentStore: Send + Sync {
    /// Fetch the text stored at `path`
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetch and deserialize a JSON document
pub async fn fetch_json<S, T>(store: &S, path: &str) -> Result<T, FetchError>
where
    S: ContentStore,
    T: DeserializeOwned,
{
    let body = store.fetch(path).await?;
    serde_json::from_str(&body).map_err(|source| FetchError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Content stored in a local directory
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The content root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a content path below the root, rejecting anything that escapes it
    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || escapes {
            return Err(FetchError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl ContentStore for FsStore {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let file = self.resolve(path)?;
        tracing::debug!("Reading content {:?}", file);
        tokio::fs::read_to_string(&file)
            .await
            .map_err(|source| FetchError::Io {
                path: path.to_string(),
                source,
            })
    }
}

/// Content served over HTTP
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Create a store that issues `GET {base_url}/{path}`
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The remote content root
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ContentStore for HttpStore {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// The store selected by configuration
#[derive(Debug, Clone)]
pub enum Store {
    Fs(FsStore),
    Http(HttpStore),
}

impl Store {
    /// Local content root, if the content lives on disk
    pub fn local_root(&self) -> Option<&Path> {
        match self {
            Store::Fs(store) => Some(store.root()),
            Store::Http(_) => None,
        }
    }
}

impl ContentStore for Store {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        match self {
            Store::Fs(store) => store.fetch(path).await,
            Store::Http(store) => store.fetch(path).await,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory store that records every fetch

    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Semaphore;

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        files: HashMap<String, String>,
        holds: HashMap<String, Arc<Semaphore>>,
        fetched: Mutex<Vec<String>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, path: &str, body: &str) -> Self {
            self.files.insert(path.to_string(), body.to_string());
            self
        }

        /// Block fetches of `path` until a permit is added to the returned semaphore
        pub fn hold(&mut self, path: &str) -> Arc<Semaphore> {
            let gate = Arc::new(Semaphore::new(0));
            self.holds.insert(path.to_string(), Arc::clone(&gate));
            gate
        }

        pub fn fetched(&self) -> Vec<String> {
            self.fetched.lock().unwrap().clone()
        }
    }

    impl ContentStore for MemoryStore {
        async fn fetch(&self, path: &str) -> Result<String, FetchError> {
            self.fetched.lock().unwrap().push(path.to_string());

            if let Some(gate) = self.holds.get(path) {
                let _permit = gate.acquire().await;
            }

            self.files.get(path).cloned().ok_or_else(|| FetchError::Status {
                path: path.to_string(),
                status: 404,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_fs_store_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blogs")).unwrap();
        fs::write(dir.path().join("blogs/hello.md"), "# Hello\n").unwrap();

        let store = FsStore::new(dir.path());
        assert_eq!(store.fetch("blogs/hello.md").await.unwrap(), "# Hello\n");
        assert_eq!(store.fetch("/blogs/hello.md").await.unwrap(), "# Hello\n");
        assert!(matches!(
            store.fetch("blogs/missing.md").await,
            Err(FetchError::Io { .. })
        ));
    }

    #[tokio::test]
    async fn test_fs_store_rejects_escaping_paths() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path());
        assert!(matches!(
            store.fetch("../secret").await,
            Err(FetchError::InvalidPath(_))
        ));
        assert!(matches!(
            store.fetch("blogs/../../secret").await,
            Err(FetchError::InvalidPath(_))
        ));
        assert!(matches!(store.fetch("").await, Err(FetchError::InvalidPath(_))));
    }

    #[tokio::test]
    async fn test_fetch_json_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("authors.json"), "{ not json").unwrap();

        let store = Store::Fs(FsStore::new(dir.path()));
        let result: Result<serde_json::Value, _> = fetch_json(&store, "authors.json").await;
        let err = result.unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
        assert!(err.to_string().contains("authors.json"));
        assert_eq!(store.local_root(), Some(dir.path()));
    }

    #[test]
    fn test_http_store_base_url() {
        let store = HttpStore::new("https://cdn.example.com/content/");
        assert_eq!(store.base_url(), "https://cdn.example.com/content");
        assert!(Store::Http(store).local_root().is_none());
    }
}
