use strum::{AsRefStr, Display};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Hosted transactional-email relay, authenticated with a public key.
    #[strum(serialize = "Relay")]
    RelayClient,
    /// The private `/api/send-email` endpoint backed by SMTP.
    #[strum(serialize = "SMTP")]
    BackendSmtp,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryOutcome {
    pub channel: Channel,
    pub succeeded: bool,
    pub error_detail: Option<String>,
}

impl DeliveryOutcome {
    pub fn success(channel: Channel) -> Self {
        Self {
            channel,
            succeeded: true,
            error_detail: None,
        }
    }

    pub fn failure(channel: Channel, error_detail: impl Into<String>) -> Self {
        Self {
            channel,
            succeeded: false,
            error_detail: Some(error_detail.into()),
        }
    }
}

/// Settled result of one dispatch. `outcomes` holds one entry per channel in
/// registration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateResult {
    pub any_succeeded: bool,
    pub all_succeeded: bool,
    pub outcomes: Vec<DeliveryOutcome>,
}

impl AggregateResult {
    pub fn succeeded_channels(&self) -> Vec<Channel> {
        self.outcomes
            .iter()
            .filter(|o| o.succeeded)
            .map(|o| o.channel)
            .collect()
    }

    /// Qualifier naming the channels that delivered, e.g. `(Sent via Relay)`.
    pub fn qualifier(&self) -> Option<String> {
        let channels = self.succeeded_channels();

        match channels.as_slice() {
            [] => None,
            [one] => Some(format!("(Sent via {one})")),
            [first, second] => Some(format!("(Sent via both {first} and {second})")),
            many => Some(format!(
                "(Sent via {})",
                many.iter()
                    .map(Channel::as_ref)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(relay: bool, smtp: bool) -> AggregateResult {
        let outcome = |channel, ok| {
            if ok {
                DeliveryOutcome::success(channel)
            } else {
                DeliveryOutcome::failure(channel, "boom")
            }
        };

        AggregateResult {
            any_succeeded: relay || smtp,
            all_succeeded: relay && smtp,
            outcomes: vec![
                outcome(Channel::RelayClient, relay),
                outcome(Channel::BackendSmtp, smtp),
            ],
        }
    }

    #[test]
    fn qualifier_names_successful_channels() {
        assert_eq!(
            aggregate(true, true).qualifier().as_deref(),
            Some("(Sent via both Relay and SMTP)")
        );
        assert_eq!(
            aggregate(true, false).qualifier().as_deref(),
            Some("(Sent via Relay)")
        );
        assert_eq!(
            aggregate(false, true).qualifier().as_deref(),
            Some("(Sent via SMTP)")
        );
        assert_eq!(aggregate(false, false).qualifier(), None);
    }
}
