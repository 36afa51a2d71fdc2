//! Error types for content loading

use thiserror::Error;

use crate::content::Collection;

/// Failure to retrieve a document from a content source
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("unexpected response status {0}")]
    Status(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a collection or detail load.
///
/// Every variant carries the collection it happened in so the log line and
/// the inline message can name the section that is affected.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to fetch {collection}: {source}")]
    Fetch {
        collection: Collection,
        #[source]
        source: FetchError,
    },

    #[error("failed to parse {collection}: {source}")]
    Parse {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {collection} entry with slug `{slug}`")]
    NotFound { collection: Collection, slug: String },
}

impl ContentError {
    /// Collection the failure belongs to
    pub fn collection(&self) -> Collection {
        match self {
            ContentError::Fetch { collection, .. }
            | ContentError::Parse { collection, .. }
            | ContentError::NotFound { collection, .. } => *collection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_collection() {
        let err = ContentError::Fetch {
            collection: Collection::Gallery,
            source: FetchError::Status(404),
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch gallery: unexpected response status 404"
        );
        assert_eq!(err.collection(), Collection::Gallery);

        let err = ContentError::NotFound {
            collection: Collection::Blog,
            slug: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "no blog entry with slug `missing`");
    }
}
