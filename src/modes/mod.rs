mod category;
mod query;
mod topic;

pub use category::run_category;
pub use query::run_query;
pub use topic::run_topic;

use crate::config::{Config, Mode};
use crate::discourse::DiscourseClient;
use crate::error::Error;
use crate::pacing::Pacer;

/// Runs the mode selected by the configuration and returns the bytes to write out.
pub async fn run(config: &Config, client: &DiscourseClient, pacer: &impl Pacer) -> Result<Vec<u8>, Error> {
    match &config.mode {
        Mode::Query(url) => run_query(client, url).await,
        Mode::Category {
            forum,
            category,
            pages,
        } => run_category(client, pacer, forum, *category, *pages).await,
        Mode::Topic { forum, topic } => {
            run_topic(client, pacer, forum, *topic, config.batch_size).await
        }
    }
}

/// Body of a 200 response; any other status becomes an error holding the body.
async fn fetch_ok(client: &DiscourseClient, url: &str) -> Result<Vec<u8>, Error> {
    client.fetch(url).await?.into_ok(url)
}
