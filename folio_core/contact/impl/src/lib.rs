use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitMessageError};
use folio_extern_contracts::emailjs::{EmailDispatchParams, EmailJsApiService};
use folio_models::contact::ContactMessage;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<EmailJs> {
    emailjs: EmailJs,
}

impl<EmailJs> ContactFeatureServiceImpl<EmailJs> {
    pub fn new(emailjs: EmailJs) -> Self {
        Self { emailjs }
    }
}

impl<EmailJs> ContactFeatureService for ContactFeatureServiceImpl<EmailJs>
where
    EmailJs: EmailJsApiService,
{
    async fn submit_message(
        &self,
        message: ContactMessage,
    ) -> Result<(), ContactSubmitMessageError> {
        let validation = message.validate();
        if !validation.is_valid() {
            return Err(ContactSubmitMessageError::InvalidMessage(validation));
        }

        let params = EmailDispatchParams {
            from_name: message.name,
            from_email: message.email,
            message: message.message,
        };

        if !self.emailjs.send(params).await? {
            return Err(ContactSubmitMessageError::Send);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use folio_extern_contracts::emailjs::MockEmailJsApiService;
    use folio_models::contact::ContactField;
    use folio_utils::assert_matches;

    use super::*;

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Max Mustermann".into(),
            email: "max.mustermann@example.de".into(),
            message: "Hello, I would like to talk about your projects!".into(),
        }
    }

    fn dispatch_params() -> EmailDispatchParams {
        EmailDispatchParams {
            from_name: "Max Mustermann".into(),
            from_email: "max.mustermann@example.de".into(),
            message: "Hello, I would like to talk about your projects!".into(),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let emailjs = MockEmailJsApiService::new().with_send(dispatch_params(), true);

        let sut = ContactFeatureServiceImpl::new(emailjs);

        // Act
        let result = sut.submit_message(valid_message()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn provider_rejected() {
        // Arrange
        let emailjs = MockEmailJsApiService::new().with_send(dispatch_params(), false);

        let sut = ContactFeatureServiceImpl::new(emailjs);

        // Act
        let result = sut.submit_message(valid_message()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitMessageError::Send));
    }

    #[tokio::test]
    async fn transport_error() {
        // Arrange
        let emailjs = MockEmailJsApiService::new().with_send_transport_error(dispatch_params());

        let sut = ContactFeatureServiceImpl::new(emailjs);

        // Act
        let result = sut.submit_message(valid_message()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitMessageError::Other(_)));
    }

    #[tokio::test]
    async fn invalid_message_is_not_dispatched() {
        // Arrange
        // No expectations on the mock: any dispatch attempt panics.
        let emailjs = MockEmailJsApiService::new();

        let sut = ContactFeatureServiceImpl::new(emailjs);

        // Act
        let result = sut
            .submit_message(ContactMessage {
                name: "Max Mustermann".into(),
                email: "max.mustermann@example.de".into(),
                message: "short".into(),
            })
            .await;

        // Assert
        let Err(ContactSubmitMessageError::InvalidMessage(validation)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(
            validation.error(ContactField::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[tokio::test]
    async fn repeated_submission_dispatches_again() {
        // Arrange
        let mut emailjs = MockEmailJsApiService::new();
        emailjs
            .expect_send()
            .times(2)
            .with(mockall::predicate::eq(dispatch_params()))
            .returning(|_| Box::pin(std::future::ready(Ok(true))));

        let sut = ContactFeatureServiceImpl::new(emailjs);

        // Act
        sut.submit_message(valid_message()).await.unwrap();
        sut.submit_message(valid_message()).await.unwrap();

        // Assert: expectation count checked on drop.
    }
}
