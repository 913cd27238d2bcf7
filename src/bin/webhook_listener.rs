use std::sync::Arc;

use anyhow::Result;
use payment_ops::application::usecases::payment_webhook::PaymentWebhookUseCase;
use payment_ops::config::config_loader;
use payment_ops::infrastructure::axum_http::http_serve;
use payment_ops::infrastructure::stripe::stripe_client::StripeClient;
use payment_ops::observability;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Webhook listener exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_tracing("webhook-listener")?;

    let config = config_loader::load_webhook_listener()?;
    info!("ENV has been loaded");

    let stripe_client = Arc::new(StripeClient::new(config.stripe.webhook_secret.clone()));

    let usecase = Arc::new(PaymentWebhookUseCase::new(stripe_client));

    http_serve::start(Arc::new(config), usecase).await?;

    Ok(())
}
