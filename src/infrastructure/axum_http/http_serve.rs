use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use tracing::info;

use crate::application::usecases::payment_webhook::{PaymentWebhookUseCase, StripeGateway};
use crate::config::config_model::WebhookListenerConfig;
use crate::infrastructure::axum_http::{default_routers, routers};

pub async fn start<Stripe>(
    config: Arc<WebhookListenerConfig>,
    usecase: Arc<PaymentWebhookUseCase<Stripe>>,
) -> Result<()>
where
    Stripe: StripeGateway + Send + Sync + 'static,
{
    let app = Router::new()
        .fallback(default_routers::not_found)
        .merge(routers::payment_webhook::routes(usecase))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.webhook_server.timeout,
        )))
        .layer(RequestBodyLimitLayer::new(
            (config.webhook_server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.webhook_server.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        "Webhook listener is running on port {}",
        config.webhook_server.port
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
