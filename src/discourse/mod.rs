mod client;
mod endpoint;
mod types;

pub use client::DiscourseClient;
pub use endpoint::{Endpoint, Forum, with_scheme};
pub use types::{CategoryListing, TopicView};
