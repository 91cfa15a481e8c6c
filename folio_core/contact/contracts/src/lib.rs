use std::future::Future;

use folio_models::contact::{ContactMessage, ContactValidation};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates one contact form submission and dispatches it through the
    /// email provider.
    fn submit_message(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = Result<(), ContactSubmitMessageError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitMessageError {
    #[error("The submission failed validation.")]
    InvalidMessage(ContactValidation),
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
