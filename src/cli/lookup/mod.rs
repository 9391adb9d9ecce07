//! Lookup command - drives the form controller once against a running relay

use clap::Args;

use crate::client::{FormController, RelayClient, DEFAULT_RELAY_URL};
use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Arguments for the lookup command
#[derive(Args, Clone, Debug)]
pub struct LookupArgs {
    /// Comma-separated city names
    pub cities: String,

    /// Relay URL to send the request to
    #[arg(long, default_value = DEFAULT_RELAY_URL)]
    pub api_url: String,
}

/// Submit the city list and print the rendered results.
/// A displayed error becomes the command's error.
pub async fn run(args: LookupArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let client = RelayClient::new(&args.api_url);
    let mut form = FormController::new();
    form.set_input(args.cities);
    form.submit(&client).await;

    if let Some(message) = form.error() {
        anyhow::bail!("{}", message);
    }

    for line in form.render() {
        println!("{}", line);
    }

    Ok(())
}
