use serde::Deserialize;

// Only the fields that drive pagination are read. Everything else stays in the raw page.

#[derive(Deserialize, Debug, Default)]
pub struct CategoryListing {
    #[serde(default)]
    pub topic_list: TopicList,
}

#[derive(Deserialize, Debug, Default)]
pub struct TopicList {
    #[serde(default)]
    pub more_topics_url: Option<String>,
}

impl CategoryListing {
    /// Relative path of the next listing page; `None` once the listing is exhausted.
    pub fn next_page(&self) -> Option<&str> {
        self.topic_list
            .more_topics_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct TopicView {
    #[serde(default)]
    pub post_stream: PostStream,
}

#[derive(Deserialize, Debug, Default)]
pub struct PostStream {
    /// Every post id of the topic, in order, even those not embedded in the response.
    #[serde(default)]
    pub stream: Vec<u64>,
}
