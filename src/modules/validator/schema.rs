use serde::Serialize;

/// Body of the summaries query sent to the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SummariesRequest {
    #[serde(rename = "type")]
    pub request_type: &'static str,
}

impl Default for SummariesRequest {
    fn default() -> Self {
        Self {
            request_type: "validatorSummaries",
        }
    }
}

/// Body posted to a Discord-compatible webhook.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookMessage<'a> {
    pub content: &'a str,
}
