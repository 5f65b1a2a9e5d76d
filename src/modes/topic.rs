use std::num::NonZeroUsize;

use tracing::info;

use super::fetch_ok;
use crate::aggregate;
use crate::common_tools::Progress;
use crate::discourse::{DiscourseClient, Endpoint, Forum, TopicView};
use crate::error::{Error, Operation};
use crate::pacing::Pacer;

/// Collects a topic's metadata and all of its posts.
///
/// The metadata embeds only a first chunk of posts (about 20) but lists every post id
/// in `post_stream.stream`. Posts are then requested by id, `batch_size` at a time.
/// The first batch asks again for the posts already embedded in the metadata, so that
/// every batch response has the same shape.
///
/// ```text
/// 143 posts, batch size 50:
///   1: metadata + 20 posts
///   2: posts 1..=50
///   3: posts 51..=100
///   4: posts 101..=143
/// ```
pub async fn run_topic(
    client: &DiscourseClient,
    pacer: &impl Pacer,
    forum: &Forum,
    topic: u64,
    batch_size: NonZeroUsize,
) -> Result<Vec<u8>, Error> {
    let mut progress = Progress::new();
    let page_nb = progress.next_page();
    let url = Endpoint::Topic(topic).url(forum);

    let meta_data = match fetch_ok(client, &url).await {
        Ok(body) => serde_json::from_slice::<TopicView>(&body)
            .map(|view| (view, body))
            .map_err(Error::from),
        Err(e) => Err(e),
    };
    let (view, meta_data) = meta_data.map_err(|e| {
        progress.finish();
        e.aborted(Operation::TopicMetadata, page_nb, || None)
    })?;

    let stream = view.post_stream.stream;
    info!("topic {} has {} post(s)", topic, stream.len());

    let mut batches = Vec::with_capacity(stream.len().div_ceil(batch_size.get()));
    for post_ids in stream.chunks(batch_size.get()) {
        pacer.pause().await;
        let page_nb = progress.next_page();
        let url = Endpoint::Posts(topic, post_ids.to_vec()).url(forum);
        let body = fetch_ok(client, &url).await.map_err(|e| {
            progress.finish();
            e.aborted(Operation::PostBatch, page_nb, || {
                Some(aggregate::topic_pages(&meta_data, &batches))
            })
        })?;
        batches.push(body);
    }

    progress.finish();
    info!("{} post batch(es) retrieved for topic {}", batches.len(), topic);
    Ok(aggregate::topic_pages(&meta_data, &batches))
}
