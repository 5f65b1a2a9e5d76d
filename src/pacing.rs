use std::time::Duration;

use tracing::debug;

/// Delay taken before every request of a pagination run except the first one.
///
/// Forums limit users to a few requests per minute; the pause keeps a run under that limit.
pub trait Pacer {
    async fn pause(&self);
}

/// Sleeps for a fixed duration, whatever the forum answered before.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Pacer for FixedDelay {
    async fn pause(&self) {
        if self.0.is_zero() {
            return;
        }
        debug!("sleeping {:?} before next request", self.0);
        tokio::time::sleep(self.0).await;
    }
}
