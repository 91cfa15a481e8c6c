use std::sync::Arc;

use anyhow::Context;
use folio_extern_contracts::emailjs::{EmailDispatchParams, EmailJsApiService};
use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::http::HttpClient;

const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone)]
pub struct EmailJsApiServiceImpl {
    config: EmailJsApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct EmailJsApiServiceConfig {
    send_endpoint: Arc<Url>,
    service_id: Arc<str>,
    template_id: Arc<str>,
    public_key: Arc<str>,
}

impl EmailJsApiServiceConfig {
    pub fn new(
        send_endpoint_override: Option<Url>,
        service_id: String,
        template_id: String,
        public_key: String,
    ) -> Self {
        Self {
            send_endpoint: send_endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }
}

impl EmailJsApiServiceImpl {
    pub fn new(config: EmailJsApiServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

impl EmailJsApiService for EmailJsApiServiceImpl {
    async fn send(&self, params: EmailDispatchParams) -> anyhow::Result<bool> {
        let response = self
            .client
            .post((*self.config.send_endpoint).clone())
            .json(&SendRequest {
                service_id: &self.config.service_id,
                template_id: &self.config.template_id,
                user_id: &self.config.public_key,
                template_params: &params,
            })
            .send()
            .await
            .context("Failed to reach email provider")?;

        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }

        // Rejection detail stays in the logs; callers only see the boolean.
        let detail = response.text().await.unwrap_or_default();
        warn!("Email provider rejected dispatch: {status} {detail}");
        Ok(false)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        // Any HTTP response counts as reachable, only transport failures
        // bubble up.
        self.client
            .head((*self.config.send_endpoint).clone())
            .send()
            .await
            .map(drop)
            .context("Failed to reach email provider")
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailDispatchParams,
}
