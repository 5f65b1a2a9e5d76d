use std::fmt::{Display, Formatter};

use reqwest::StatusCode;

/// The request that was running when a pager gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CategoryPage,
    TopicMetadata,
    PostBatch,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::CategoryPage => "requesting category data",
                Self::TopicMetadata => "requesting topic data",
                Self::PostBatch => "requesting post data",
            }
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} requesting {url} ({})", String::from_utf8_lossy(.body).trim())]
    Status {
        status: StatusCode,
        url: String,
        body: Vec<u8>,
    },

    #[error("Unexpected JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Nothing to do: one of --query, --category or --topic is required")]
    NothingToDo,

    #[error("Could not write output file: {0}")]
    Output(#[from] std::io::Error),

    #[error("Error {operation} (page {page}): {source}")]
    Aborted {
        operation: Operation,
        page: usize,
        partial: Option<Vec<u8>>,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps a failure inside a pagination loop.
    ///
    /// Keeps the wrapper `collected` builds from the pages fetched so far. When nothing was
    /// fetched yet, a status error keeps its literal response body instead.
    pub fn aborted(
        self,
        operation: Operation,
        page: usize,
        collected: impl FnOnce() -> Option<Vec<u8>>,
    ) -> Self {
        let partial = collected().or_else(|| match &self {
            Self::Status { body, .. } => Some(body.clone()),
            _ => None,
        });
        Self::Aborted {
            operation,
            page,
            partial,
            source: Box::new(self),
        }
    }

    /// Bytes worth writing to the output file even though the run failed.
    pub fn salvage(&self) -> Option<&[u8]> {
        match self {
            Self::Status { body, .. } => Some(body),
            Self::Aborted { partial, .. } => partial.as_deref(),
            _ => None,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::NothingToDo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> Error {
        Error::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://forum.example/t/-/1.json".to_string(),
            body: br#"{"errors":["not found"]}"#.to_vec(),
        }
    }

    #[test]
    fn test_status_salvage_is_body() {
        assert_eq!(not_found().salvage(), Some(&br#"{"errors":["not found"]}"#[..]));
    }

    #[test]
    fn test_aborted_status_without_pages_keeps_body() {
        let err = not_found().aborted(Operation::CategoryPage, 1, || None);
        assert_eq!(err.salvage(), Some(&br#"{"errors":["not found"]}"#[..]));
        let message = err.to_string();
        assert!(message.contains("requesting category data"));
        assert!(message.contains("page 1"));
        assert!(message.contains("404"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_aborted_status_after_pages_keeps_collected() {
        let err = not_found().aborted(Operation::PostBatch, 3, || Some(b"[1]".to_vec()));
        assert_eq!(err.salvage(), Some(&b"[1]"[..]));
    }

    #[test]
    fn test_aborted_other_keeps_collected() {
        let json_err = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let err = Error::from(json_err).aborted(Operation::PostBatch, 2, || Some(b"[]".to_vec()));
        assert_eq!(err.salvage(), Some(&b"[]"[..]));
    }

    #[test]
    fn test_aborted_other_without_pages_has_no_salvage() {
        let json_err = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let err = Error::from(json_err).aborted(Operation::TopicMetadata, 1, || None);
        assert!(err.salvage().is_none());
    }

    #[test]
    fn test_config_has_no_salvage() {
        let err = Error::Config("missing".to_string());
        assert!(err.salvage().is_none());
        assert!(err.is_config());
        assert!(Error::NothingToDo.is_config());
    }
}
