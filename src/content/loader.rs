//! Content loader - fetches collection indexes and single documents
//!
//! The content store is a tree of static JSON files:
//! `{root}/{collection}/index.json` holds the whole collection and
//! `{root}/{collection}/{slug}.json` a single record. It is read either over
//! HTTP ([`HttpSource`]) or straight from disk ([`DirSource`]).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::Collection;
use crate::config::SiteConfig;
use crate::error::{ContentError, FetchError};

/// Characters escaped in a URL path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Read-only access to the content store
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the document at `segments` (relative to the content root)
    async fn fetch(&self, segments: &[&str]) -> Result<String, FetchError>;

    /// Human-readable location of the store, for logs
    fn describe(&self) -> String;
}

/// Content served over HTTP
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of a document
    pub fn url_for(&self, segments: &[&str]) -> String {
        let path: Vec<String> = segments
            .iter()
            .map(|s| utf8_percent_encode(s, SEGMENT).to_string())
            .collect();
        format!("{}/{}", self.base_url, path.join("/"))
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, segments: &[&str]) -> Result<String, FetchError> {
        let url = self.url_for(segments);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Content read from a local directory
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch(&self, segments: &[&str]) -> Result<String, FetchError> {
        let path = segments
            .iter()
            .fold(self.root.clone(), |path, segment| path.join(segment));
        tracing::debug!("Reading {:?}", path);

        Ok(tokio::fs::read_to_string(&path).await?)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Choose the source for a configured content root.
///
/// `http://` and `https://` roots are fetched over the network; anything else
/// is a directory, resolved against `base_dir` when relative.
pub fn source_for(config: &SiteConfig, base_dir: &Path) -> Arc<dyn ContentSource> {
    let root = &config.content_root;
    if config.is_remote_root() {
        Arc::new(HttpSource::new(root))
    } else {
        Arc::new(DirSource::new(base_dir.join(root)))
    }
}

/// Loads collections and single documents, failing fast with one error per
/// attempt.
#[derive(Clone)]
pub struct Loader {
    source: Arc<dyn ContentSource>,
}

impl Loader {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Load `{root}/{collection}/index.json`
    pub async fn load_collection<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, ContentError> {
        let text = self
            .source
            .fetch(&[collection.dir(), "index.json"])
            .await
            .map_err(|source| ContentError::Fetch { collection, source })?;

        let items: Vec<T> = serde_json::from_str(&text)
            .map_err(|source| ContentError::Parse { collection, source })?;
        tracing::debug!("Loaded {} {} entries", items.len(), collection);

        Ok(items)
    }

    /// Load `{root}/{collection}/{slug}.json`
    pub async fn load_item<T: DeserializeOwned>(
        &self,
        collection: Collection,
        slug: &str,
    ) -> Result<T, ContentError> {
        if !is_valid_slug(slug) {
            return Err(ContentError::NotFound {
                collection,
                slug: slug.to_string(),
            });
        }

        let file = format!("{}.json", slug);
        let text = self
            .source
            .fetch(&[collection.dir(), file.as_str()])
            .await
            .map_err(|source| ContentError::Fetch { collection, source })?;

        serde_json::from_str(&text).map_err(|source| ContentError::Parse { collection, source })
    }
}

/// A slug must name a single file inside its collection directory
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}
