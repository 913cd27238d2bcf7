use std::sync::Arc;

use anyhow::Result as AnyResult;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::value_objects::payment_events::{PaymentEvent, PaymentEventKind};
use crate::infrastructure::stripe::stripe_client::StripeClient;

#[cfg_attr(test, mockall::automock)]
pub trait StripeGateway: Send + Sync {
    fn verify_webhook_signature(&self, payload: &[u8], signature: &str) -> AnyResult<PaymentEvent>;
}

impl StripeGateway for StripeClient {
    fn verify_webhook_signature(&self, payload: &[u8], signature: &str) -> AnyResult<PaymentEvent> {
        self.verify_webhook_signature(payload, signature)
    }
}

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("invalid webhook payload: {0}")]
    InvalidWebhook(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl WebhookError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            WebhookError::InvalidWebhook(_) => StatusCode::BAD_REQUEST,
            WebhookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, WebhookError>;

/// Verifies inbound provider events and dispatches on their type. Every
/// branch only logs: the downstream mutations (retry scheduling, account
/// updates) are handled elsewhere.
pub struct PaymentWebhookUseCase<Stripe>
where
    Stripe: StripeGateway + Send + Sync + 'static,
{
    stripe_client: Arc<Stripe>,
}

impl<Stripe> PaymentWebhookUseCase<Stripe>
where
    Stripe: StripeGateway + Send + Sync + 'static,
{
    pub fn new(stripe_client: Arc<Stripe>) -> Self {
        Self { stripe_client }
    }

    /// Verifies and dispatches one delivery. A redelivered event is processed
    /// again identically; the provider owns retry semantics.
    pub async fn handle_event(&self, payload: &[u8], signature: &str) -> UseCaseResult<()> {
        let event = self
            .stripe_client
            .verify_webhook_signature(payload, signature)
            .map_err(|err| {
                warn!(error = %err, "webhook: signature verification failed");
                WebhookError::InvalidWebhook("signature verification failed".into())
            })?;

        info!(
            event_type = %event.type_,
            event_id = ?event.id,
            "webhook: event verified"
        );

        let Some(kind) = event.kind() else {
            debug!(event_type = %event.type_, "webhook: unhandled event type");
            return Ok(());
        };

        self.dispatch(kind, &event);

        Ok(())
    }

    fn dispatch(&self, kind: PaymentEventKind, event: &PaymentEvent) {
        match kind {
            PaymentEventKind::PaymentSucceeded => self.on_payment_succeeded(event),
            PaymentEventKind::PaymentFailed => self.on_payment_failed(event),
            PaymentEventKind::Refunded => self.on_refunded(event),
        }
    }

    fn on_payment_succeeded(&self, event: &PaymentEvent) {
        info!(
            event_id = ?event.id,
            object = %event.data.object,
            "webhook: payment succeeded"
        );
    }

    fn on_payment_failed(&self, event: &PaymentEvent) {
        warn!(
            event_id = ?event.id,
            object = %event.data.object,
            "webhook: payment failed, retry is handled by the provider"
        );
    }

    fn on_refunded(&self, event: &PaymentEvent) {
        info!(
            event_id = ?event.id,
            object = %event.data.object,
            "webhook: charge refunded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::payment_events::PaymentEventData;
    use axum::http::StatusCode;

    fn sample_event(event_type: &str) -> PaymentEvent {
        PaymentEvent {
            id: Some("evt_123".to_string()),
            type_: event_type.to_string(),
            data: PaymentEventData {
                object: serde_json::json!({"id": "pi_123", "amount": 1000}),
            },
        }
    }

    #[tokio::test]
    async fn accepts_event_with_valid_signature() {
        let mut gateway = MockStripeGateway::new();
        gateway
            .expect_verify_webhook_signature()
            .times(1)
            .returning(|_, _| Ok(sample_event("payment_intent.succeeded")));

        let usecase = PaymentWebhookUseCase::new(Arc::new(gateway));
        let result = usecase.handle_event(b"{}", "t=1,v1=abc").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_event_with_invalid_signature() {
        let mut gateway = MockStripeGateway::new();
        gateway
            .expect_verify_webhook_signature()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("invalid webhook signature")));

        let usecase = PaymentWebhookUseCase::new(Arc::new(gateway));
        let err = usecase
            .handle_event(b"{}", "t=1,v1=bad")
            .await
            .expect_err("bad signature must be rejected");

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn accepts_unknown_event_type_without_dispatch() {
        let mut gateway = MockStripeGateway::new();
        gateway
            .expect_verify_webhook_signature()
            .times(1)
            .returning(|_, _| Ok(sample_event("customer.subscription.deleted")));

        let usecase = PaymentWebhookUseCase::new(Arc::new(gateway));
        let result = usecase.handle_event(b"{}", "t=1,v1=abc").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn handles_failure_and_refund_events() {
        for event_type in ["payment_intent.payment_failed", "charge.refunded"] {
            let mut gateway = MockStripeGateway::new();
            let event_type_owned = event_type.to_string();
            gateway
                .expect_verify_webhook_signature()
                .times(1)
                .returning(move |_, _| Ok(sample_event(&event_type_owned)));

            let usecase = PaymentWebhookUseCase::new(Arc::new(gateway));
            assert!(usecase.handle_event(b"{}", "t=1,v1=abc").await.is_ok());
        }
    }
}
