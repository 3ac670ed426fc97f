use async_trait::async_trait;
use serde::Deserialize;

use super::DeliveryChannel;
use crate::{Channel, ContactSubmission};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailResponse {
    message_id: Option<String>,
}

/// Posts the submission as JSON to the send-email endpoint, which delivers it
/// over SMTP.
pub struct BackendChannel {
    client: reqwest::Client,
    endpoint: String,
}

impl BackendChannel {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl DeliveryChannel for BackendChannel {
    fn channel(&self) -> Channel {
        Channel::BackendSmtp
    }

    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn send(&self, submission: ContactSubmission) -> anyhow::Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{status} {body}");
        }

        let body = response.json::<SendEmailResponse>().await?;
        tracing::debug!(message_id = ?body.message_id, "send-email endpoint accepted submission");

        Ok(())
    }
}
