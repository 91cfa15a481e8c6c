use folio_config::Config;
use folio_extern_contracts::emailjs::EmailJsApiService;
use tracing::info;

use crate::{emailjs, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let emailjs = emailjs::client(&config.emailjs);

    info!("Checking email provider reachability");
    emailjs.ping().await?;

    let server = environment::build(&config, emailjs);

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
