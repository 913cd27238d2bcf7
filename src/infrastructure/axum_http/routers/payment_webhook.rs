use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
    routing::post,
};
use serde_json::json;
use tracing::warn;

use crate::application::usecases::payment_webhook::{
    PaymentWebhookUseCase, StripeGateway, WebhookError,
};
use crate::infrastructure::axum_http::default_routers;

pub fn routes<Stripe>(usecase: Arc<PaymentWebhookUseCase<Stripe>>) -> Router
where
    Stripe: StripeGateway + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/webhook",
            // Non-POST methods on the webhook path answer 404, not 405.
            post(receive_event).fallback(default_routers::not_found),
        )
        .with_state(usecase)
}

pub async fn receive_event<Stripe>(
    State(usecase): State<Arc<PaymentWebhookUseCase<Stripe>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, WebhookError>
where
    Stripe: StripeGateway + Send + Sync + 'static,
{
    let signature = headers
        .get("stripe-signature")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            warn!("webhook: missing stripe-signature header");
            WebhookError::InvalidWebhook("missing stripe-signature header".into())
        })?;

    usecase.handle_event(&body, signature).await?;

    Ok(Json(json!({ "received": true })))
}
