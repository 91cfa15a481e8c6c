use folio_config::EmailJsConfig;
use folio_extern_impl::emailjs::{EmailJsApiServiceConfig, EmailJsApiServiceImpl};

/// Builds the email provider client from the configuration.
pub fn client(config: &EmailJsConfig) -> EmailJsApiServiceImpl {
    EmailJsApiServiceImpl::new(EmailJsApiServiceConfig::new(
        config.endpoint.clone(),
        config.service_id.clone(),
        config.template_id.clone(),
        config.public_key.clone(),
    ))
}
