use std::sync::Arc;

use crate::{AggregateResult, ContactSubmission, DeliveryChannel, DeliveryOutcome, Policy, settle_all};

/// Fans a submission out to every registered channel at once and reports
/// once all of them have settled. No retries and no timeouts beyond what each
/// channel's transport applies.
#[derive(Clone)]
pub struct Dispatcher {
    channels: Vec<Arc<dyn DeliveryChannel>>,
}

impl Dispatcher {
    pub fn new(channels: Vec<Arc<dyn DeliveryChannel>>) -> Self {
        Self { channels }
    }

    pub fn channels(&self) -> usize {
        self.channels.len()
    }

    #[tracing::instrument(skip_all, fields(channels = self.channels.len()))]
    pub async fn dispatch(&self, submission: &ContactSubmission) -> AggregateResult {
        let tasks = self.channels.iter().map(|channel| {
            let submission = submission.clone();
            async move { channel.deliver(submission).await }
        });

        let settled = settle_all(tasks, Policy::Any, |o: &DeliveryOutcome| o.succeeded).await;
        let all_succeeded = Policy::All.evaluate(settled.results.iter().map(|o| o.succeeded));

        tracing::info!(
            any_succeeded = settled.satisfied,
            all_succeeded,
            "contact submission dispatched"
        );

        AggregateResult {
            any_succeeded: settled.satisfied,
            all_succeeded,
            outcomes: settled.results,
        }
    }
}
