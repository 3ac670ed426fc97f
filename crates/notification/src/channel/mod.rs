use async_trait::async_trait;

use crate::{Channel, ContactSubmission, DeliveryOutcome};

mod backend;
mod relay;

pub use backend::BackendChannel;
pub use relay::{RelayChannel, RelayConfig};

/// One independent way of delivering a contact submission.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    fn channel(&self) -> Channel;

    /// Performs the delivery. Any error is reported through `deliver`.
    async fn send(&self, submission: ContactSubmission) -> anyhow::Result<()>;

    /// Sends and settles into an outcome, never failing.
    async fn deliver(&self, submission: ContactSubmission) -> DeliveryOutcome {
        let channel = self.channel();

        match self.send(submission).await {
            Ok(()) => {
                tracing::info!(channel = %channel, "contact submission delivered");

                DeliveryOutcome::success(channel)
            }
            Err(err) => {
                tracing::error!(channel = %channel, error = %err, "contact submission delivery failed");

                DeliveryOutcome::failure(channel, format!("{err:#}"))
            }
        }
    }
}
