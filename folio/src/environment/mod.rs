use folio_api_rest::RestServerConfig;
use folio_config::Config;
use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_core_health_impl::{HealthFeatureConfig, HealthFeatureServiceImpl};

use crate::environment::types::{EmailJs, RestServer};

pub mod types;

/// Builds the service graph from the configuration and the provider client.
pub fn build(config: &Config, emailjs: EmailJs) -> RestServer {
    let health = HealthFeatureServiceImpl::new(
        emailjs.clone(),
        HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );

    let contact = ContactFeatureServiceImpl::new(emailjs);

    RestServer::new(
        health,
        contact,
        RestServerConfig {
            allowed_origins: config.http.allowed_origins.clone(),
        },
    )
}
