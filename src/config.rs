use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::cli::Cli;
use crate::discourse::{Forum, with_scheme};
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Query(String),
    Category {
        forum: Forum,
        category: u64,
        pages: u32,
    },
    Topic {
        forum: Forum,
        topic: u64,
    },
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query(url) => write!(f, "Requesting data for query {url} ..."),
            Self::Category { category, .. } => {
                write!(f, "Requesting data (list of topics) for category {category} ...")
            }
            Self::Topic { topic, .. } => {
                write!(f, "Requesting data (list of posts) for topic {topic} ...")
            }
        }
    }
}

/// Everything a run needs, fixed before the first request.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub api_key: String,
    pub sleep: Duration,
    pub batch_size: NonZeroUsize,
    pub https_proxy: Option<String>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, Error> {
        let api_key = cli
            .userapikey
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "user API key not found (neither as option --userapikey nor as environment variable USER_API_KEY)"
                        .to_string(),
                )
            })?
            .to_string();

        let sleep = u64::try_from(cli.sleeptime)
            .map(Duration::from_secs)
            .map_err(|_| Error::Config("option --sleeptime must be >= 0".to_string()))?;

        let batch_size = NonZeroUsize::new(cli.batchsize)
            .ok_or_else(|| Error::Config("option --batchsize must be >= 1".to_string()))?;

        let mode = if !cli.query.trim().is_empty() {
            Mode::Query(with_scheme(cli.query.trim()))
        } else if cli.category > 0 {
            Mode::Category {
                forum: Self::forum(cli)?,
                category: cli.category.unsigned_abs(),
                pages: cli.pages,
            }
        } else if cli.topic > 0 {
            Mode::Topic {
                forum: Self::forum(cli)?,
                topic: cli.topic.unsigned_abs(),
            }
        } else {
            return Err(Error::NothingToDo);
        };

        Ok(Self {
            mode,
            api_key,
            sleep,
            batch_size,
            https_proxy: cli.https_proxy.clone().filter(|proxy| !proxy.is_empty()),
        })
    }

    fn forum(cli: &Cli) -> Result<Forum, Error> {
        if cli.forum.trim().is_empty() {
            return Err(Error::Config("option --forum is required".to_string()));
        }
        Forum::parse(&cli.forum)
    }
}
