use tracing::{debug, info, warn};

use super::fetch_ok;
use crate::aggregate;
use crate::common_tools::Progress;
use crate::discourse::{CategoryListing, DiscourseClient, Endpoint, Forum};
use crate::error::{Error, Operation};
use crate::pacing::Pacer;

/// Collects up to `max_pages` latest-first topic listings of a category.
///
/// Follows `more_topics_url` from page to page and stops early on the first listing
/// without one. On failure the error carries the pages collected so far, wrapped, or
/// the failing response body when the first page already failed.
pub async fn run_category(
    client: &DiscourseClient,
    pacer: &impl Pacer,
    forum: &Forum,
    category: u64,
    max_pages: u32,
) -> Result<Vec<u8>, Error> {
    if max_pages == 0 {
        warn!("page limit is 0, no category page requested");
    }

    let mut pages: Vec<Vec<u8>> = Vec::new();
    let mut progress = Progress::new();
    let mut endpoint = Endpoint::CategoryLatest(category);

    for _ in 0..max_pages {
        if !pages.is_empty() {
            pacer.pause().await;
        }
        let page_nb = progress.next_page();
        let url = endpoint.url(forum);

        let fetched = match fetch_ok(client, &url).await {
            Ok(body) => serde_json::from_slice::<CategoryListing>(&body)
                .map(|listing| (listing, body))
                .map_err(Error::from),
            Err(e) => Err(e),
        };
        let (listing, body) = fetched.map_err(|e| {
            progress.finish();
            e.aborted(Operation::CategoryPage, page_nb, || {
                (!pages.is_empty()).then(|| aggregate::category_pages(&pages))
            })
        })?;

        let next = listing.next_page().map(str::to_string);
        pages.push(body);
        match next {
            Some(path) => endpoint = Endpoint::Relative(path),
            None => {
                debug!("no more topics after page {}", page_nb);
                break;
            }
        }
    }

    progress.finish();
    info!("{} page(s) retrieved for category {}", pages.len(), category);
    Ok(aggregate::category_pages(&pages))
}
