use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_extern_impl::emailjs::EmailJsApiServiceImpl;

// Extern
pub type EmailJs = EmailJsApiServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<EmailJs>;
pub type HealthFeature = HealthFeatureServiceImpl<EmailJs>;

// API
pub type RestServer = folio_api_rest::RestServer<HealthFeature, ContactFeature>;
