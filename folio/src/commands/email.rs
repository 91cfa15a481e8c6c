use anyhow::ensure;
use clap::Subcommand;
use folio_config::Config;
use folio_extern_contracts::emailjs::{EmailDispatchParams, EmailJsApiService};

use crate::emailjs;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability through the provider
    Test,
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test => test(config).await,
        }
    }
}

async fn test(config: Config) -> anyhow::Result<()> {
    let emailjs = emailjs::client(&config.emailjs);

    let ok = emailjs
        .send(EmailDispatchParams {
            from_name: config.contact.from_name,
            from_email: config.contact.from_email,
            message: "Email deliverability seems to be working!".into(),
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
