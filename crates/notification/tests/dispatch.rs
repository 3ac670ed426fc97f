use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use sequenceit_notification::{
    Channel, ContactSubmission, DeliveryChannel, DeliveryOutcome, Dispatcher,
};

struct FakeChannel {
    channel: Channel,
    delay: Duration,
    fail: bool,
}

#[async_trait]
impl DeliveryChannel for FakeChannel {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn send(&self, _submission: ContactSubmission) -> anyhow::Result<()> {
        tokio::time::sleep(self.delay).await;

        if self.fail {
            anyhow::bail!("{} unavailable", self.channel);
        }

        Ok(())
    }
}

fn dispatcher(relay: (u64, bool), smtp: (u64, bool)) -> Dispatcher {
    Dispatcher::new(vec![
        Arc::new(FakeChannel {
            channel: Channel::RelayClient,
            delay: Duration::from_millis(relay.0),
            fail: !relay.1,
        }),
        Arc::new(FakeChannel {
            channel: Channel::BackendSmtp,
            delay: Duration::from_millis(smtp.0),
            fail: !smtp.1,
        }),
    ])
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_owned(),
        email: "jane@x.com".to_owned(),
        company: Some("Acme".to_owned()),
        message: "Hello\nWorld".to_owned(),
    }
}

#[tokio::test]
async fn test_both_channels_succeed() {
    let result = dispatcher((5, true), (5, true)).dispatch(&submission()).await;

    assert!(result.any_succeeded);
    assert!(result.all_succeeded);
    assert_eq!(
        result.outcomes,
        vec![
            DeliveryOutcome::success(Channel::RelayClient),
            DeliveryOutcome::success(Channel::BackendSmtp),
        ]
    );
    assert_eq!(result.qualifier().as_deref(), Some("(Sent via both Relay and SMTP)"));
}

#[tokio::test]
async fn test_one_channel_fails() {
    let result = dispatcher((5, false), (5, true)).dispatch(&submission()).await;

    assert!(result.any_succeeded);
    assert!(!result.all_succeeded);
    assert_eq!(result.succeeded_channels(), vec![Channel::BackendSmtp]);
    assert_eq!(
        result.outcomes[0].error_detail.as_deref(),
        Some("Relay unavailable")
    );
    assert_eq!(result.qualifier().as_deref(), Some("(Sent via SMTP)"));

    let result = dispatcher((5, true), (5, false)).dispatch(&submission()).await;
    assert_eq!(result.qualifier().as_deref(), Some("(Sent via Relay)"));
}

#[tokio::test]
async fn test_both_channels_fail() {
    let result = dispatcher((5, false), (5, false)).dispatch(&submission()).await;

    assert!(!result.any_succeeded);
    assert!(!result.all_succeeded);
    assert_eq!(result.outcomes.len(), 2);
    assert!(result.outcomes.iter().all(|o| o.error_detail.is_some()));
    assert_eq!(result.qualifier(), None);
}

#[tokio::test]
async fn test_outcomes_keep_registration_order_regardless_of_timing() {
    let result = dispatcher((40, true), (1, true)).dispatch(&submission()).await;

    let channels = result.outcomes.iter().map(|o| o.channel).collect::<Vec<_>>();
    assert_eq!(channels, vec![Channel::RelayClient, Channel::BackendSmtp]);
}

#[tokio::test]
async fn test_failing_channel_does_not_delay_the_other() {
    let started = Instant::now();
    let result = dispatcher((10, false), (60, true)).dispatch(&submission()).await;
    let elapsed = started.elapsed();

    assert!(result.any_succeeded);
    assert!(elapsed >= Duration::from_millis(60));
    assert!(elapsed < Duration::from_millis(110), "channels ran sequentially: {elapsed:?}");
}
