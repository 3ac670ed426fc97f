use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::DeliveryChannel;
use crate::{Channel, ContactSubmission};

#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    pub endpoint: String,
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TemplateParams {
    pub from_name: String,
    pub reply_to: String,
    pub user_email: String,
    pub company: String,
    pub message: String,
}

impl From<&ContactSubmission> for TemplateParams {
    fn from(value: &ContactSubmission) -> Self {
        Self {
            from_name: value.name.to_owned(),
            reply_to: value.email.to_owned(),
            user_email: value.email.to_owned(),
            company: value.company().unwrap_or_default().to_owned(),
            message: value.message.to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams,
}

/// Hands the submission to a hosted email relay which renders its own
/// template from `TemplateParams`.
pub struct RelayChannel {
    client: reqwest::Client,
    config: RelayConfig,
}

impl RelayChannel {
    pub fn new(client: reqwest::Client, config: RelayConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl DeliveryChannel for RelayChannel {
    fn channel(&self) -> Channel {
        Channel::RelayClient
    }

    #[tracing::instrument(skip_all, fields(endpoint = %self.config.endpoint))]
    async fn send(&self, submission: ContactSubmission) -> anyhow::Result<()> {
        let request = RelayRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams::from(&submission),
        };

        self.client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_submission_to_template_params() {
        let params = TemplateParams::from(&ContactSubmission {
            name: "Jane Doe".to_owned(),
            email: "jane@x.com".to_owned(),
            company: None,
            message: "Hi".to_owned(),
        });

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({
                "from_name": "Jane Doe",
                "reply_to": "jane@x.com",
                "user_email": "jane@x.com",
                "company": "",
                "message": "Hi",
            })
        );
    }
}
