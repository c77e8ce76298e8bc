//! Lazy, cached content loading behind a pluggable content source.
//!
//! A content unit is addressed by `(category, content_key)`. The loader
//! resolves it through a [`ContentSource`] on first access and keeps the
//! result for the lifetime of the loader. Nothing is ever evicted: content
//! is read-only and bounded by the manifest size.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::{AppError, Result};

/// Extension appended to content keys by [`DirectorySource`] unless overridden.
pub const DEFAULT_EXTENSION: &str = "md";

/// Retrieves the raw text of a content unit.
///
/// Implementations must be deterministic: repeated fetches of the same
/// unit return the same text.
///
/// [`ContentLoader`] calls `fetch` synchronously from async context, so a
/// fetch blocks its runtime worker until it returns. Sources are expected to
/// be local and fast; slow or remote backends belong behind
/// `tokio::task::spawn_blocking` in their own wrapper.
pub trait ContentSource: Send + Sync {
    /// Fetch the text stored for `(category, content_key)`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the unit does not exist or cannot be read.
    fn fetch(&self, category: &str, content_key: &str) -> io::Result<String>;
}

/// Content stored on disk as `{root}/{category}/{content_key}.{extension}`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
}

impl DirectorySource {
    /// Create a source rooted at `root` using the default `md` extension.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.into(),
        }
    }

    /// Override the file extension. An empty extension uses the bare key.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Root directory of the content tree.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Physical path of a content unit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either component is empty, `.`/`..`, or
    /// contains a path separator.
    pub fn path_for(&self, category: &str, content_key: &str) -> io::Result<PathBuf> {
        check_component(category)?;
        check_component(content_key)?;
        let file_name = if self.extension.is_empty() {
            content_key.to_owned()
        } else {
            format!("{content_key}.{}", self.extension)
        };
        Ok(self.root.join(category).join(file_name))
    }
}

fn check_component(component: &str) -> io::Result<()> {
    if component.is_empty()
        || component == "."
        || component == ".."
        || component.contains(['/', '\\'])
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid content path component '{component}'"),
        ));
    }
    Ok(())
}

impl ContentSource for DirectorySource {
    fn fetch(&self, category: &str, content_key: &str) -> io::Result<String> {
        let path = self.path_for(category, content_key)?;
        fs::read_to_string(&path)
            .map_err(|err| io::Error::new(err.kind(), format!("{}: {err}", path.display())))
    }
}

/// In-memory content table, for embedded payloads and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: HashMap<(String, String), String>,
}

impl StaticSource {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a content unit, builder style.
    #[must_use]
    pub fn with(
        mut self,
        category: impl Into<String>,
        content_key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(category, content_key, text);
        self
    }

    /// Add or replace a content unit.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        content_key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.entries
            .insert((category.into(), content_key.into()), text.into());
    }
}

impl ContentSource for StaticSource {
    fn fetch(&self, category: &str, content_key: &str) -> io::Result<String> {
        self.entries
            .get(&(category.to_owned(), content_key.to_owned()))
            .cloned()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no embedded content for {category}/{content_key}"),
                )
            })
    }
}

/// Thread-safe process-lifetime cache keyed by `(category, content_key)`.
type ContentCache = RwLock<HashMap<(String, String), Arc<str>>>;

/// Resolves content units lazily and caches every successful load.
pub struct ContentLoader {
    source: Arc<dyn ContentSource>,
    cache: ContentCache,
}

impl ContentLoader {
    /// Create a loader with an empty cache over `source`.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Load a content unit, reading the source only on a cache miss.
    ///
    /// Concurrent misses for the same unit may each read the source; the
    /// first value inserted wins and every caller receives it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Load` if the source cannot produce the unit.
    /// Failures are not cached.
    pub async fn load(&self, category: &str, content_key: &str) -> Result<Arc<str>> {
        let key = (category.to_owned(), content_key.to_owned());

        let cached = {
            let cache = self.cache.read().await;
            cache.get(&key).cloned()
        };
        if let Some(content) = cached {
            debug!(category, content_key, "content cache hit");
            return Ok(content);
        }

        debug!(category, content_key, "content cache miss");
        let text = self
            .source
            .fetch(category, content_key)
            .map_err(|err| AppError::Load {
                category: category.to_owned(),
                content_key: content_key.to_owned(),
                cause: err.to_string(),
            })?;

        let mut cache = self.cache.write().await;
        let entry = cache.entry(key).or_insert_with(|| Arc::from(text));
        Ok(Arc::clone(entry))
    }

    /// Number of content units currently cached.
    pub async fn cached_count(&self) -> usize {
        self.cache.read().await.len()
    }
}
