use std::fmt::{Display, Formatter};

use url::Url;

use crate::error::Error;

/// Prepends `https://` unless the address already names a scheme.
pub fn with_scheme(address: &str) -> String {
    if address.starts_with("https://") || address.starts_with("http://") {
        address.to_string()
    } else {
        format!("https://{address}")
    }
}

/// Root address of a Discourse forum, without trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forum {
    root: String,
}

impl Forum {
    pub fn parse(address: &str) -> Result<Self, Error> {
        let address = address.trim();
        if address.is_empty() {
            return Err(Error::Config("forum address is empty".to_string()));
        }
        let root = with_scheme(address);
        let url = Url::parse(&root)
            .map_err(|e| Error::Config(format!("invalid forum address '{address}': {e}")))?;
        if url.host_str().is_none() {
            return Err(Error::Config(format!("forum address '{address}' has no host")));
        }
        Ok(Self {
            root: root.trim_end_matches('/').to_string(),
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    /// Latest-first topic listing of a category.
    CategoryLatest(u64),
    /// Topic metadata with the first chunk of posts and the full post stream.
    Topic(u64),
    /// A batch of posts of a topic, selected by id.
    Posts(u64, Vec<u64>),
    /// A path handed out by the forum itself, such as `more_topics_url`.
    Relative(String),
}

impl Endpoint {
    pub fn url(&self, forum: &Forum) -> String {
        format!("{}{}", forum.root(), self)
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CategoryLatest(category) => {
                write!(f, "/c/communities/-/{category}/l/latest.json?ascending=false")
            }
            Self::Topic(topic) => write!(f, "/t/-/{topic}.json"),
            Self::Posts(topic, post_ids) => {
                let ids = post_ids
                    .iter()
                    .map(|id| format!("post_ids[]={id}"))
                    .collect::<Vec<_>>()
                    .join("&");
                write!(f, "/t/{topic}/posts.json?{ids}")
            }
            Self::Relative(path) if path.starts_with('/') => write!(f, "{path}"),
            Self::Relative(path) => write!(f, "/{path}"),
        }
    }
}
