use std::future::Future;

use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailJsApiService: Send + Sync + 'static {
    /// Dispatches one message through the provider.
    ///
    /// Returns whether the provider accepted the dispatch. Transport failures
    /// are reported as errors. Exactly one request is issued per call; there
    /// is no retry and no deduplication across calls.
    fn send(
        &self,
        params: EmailDispatchParams,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Reachability probe for the provider endpoint.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Template parameters of one dispatch: the validated contact submission,
/// transcribed into the field names the provider template expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailDispatchParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[cfg(feature = "mock")]
impl MockEmailJsApiService {
    pub fn with_send(mut self, params: EmailDispatchParams, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(params))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_transport_error(mut self, params: EmailDispatchParams) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(params))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "connection reset by peer"
                ))))
            });
        self
    }

    pub fn with_ping(mut self, ok: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(
                ok.then_some(())
                    .ok_or_else(|| anyhow::anyhow!("provider unreachable")),
            ))
        });
        self
    }
}
