use anyhow::Result;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::value_objects::payment_events::PaymentEvent;

type HmacSha256 = Hmac<Sha256>;

/// Minimal Stripe client. The webhook listener only verifies inbound event
/// signatures; no provider API calls are made here.
pub struct StripeClient {
    webhook_secret: String,
}

impl StripeClient {
    pub fn new(webhook_secret: String) -> Self {
        Self { webhook_secret }
    }

    /// Verifies the webhook signature. https://stripe.com/docs/webhooks/signatures
    pub fn verify_webhook_signature(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<PaymentEvent> {
        let mut timestamp: Option<String> = None;
        let mut signature: Option<String> = None;

        for part in signature_header.split(',') {
            if let Some(rest) = part.strip_prefix("t=") {
                timestamp = Some(rest.to_string());
            } else if let Some(rest) = part.strip_prefix("v1=") {
                signature = Some(rest.to_string());
            }
        }

        let timestamp =
            timestamp.ok_or_else(|| anyhow::anyhow!("missing timestamp in stripe-signature"))?;
        let signature =
            signature.ok_or_else(|| anyhow::anyhow!("missing v1 in stripe-signature"))?;

        let signed_payload = format!("{}.{}", timestamp, String::from_utf8_lossy(payload));
        let mut mac = HmacSha256::new_from_slice(self.webhook_secret.as_bytes())?;
        mac.update(signed_payload.as_bytes());
        let expected = mac.finalize().into_bytes();
        let provided = hex::decode(signature)?;

        if expected[..] != provided[..] {
            anyhow::bail!("invalid webhook signature");
        }

        let event: PaymentEvent = serde_json::from_slice(payload)?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEBHOOK_SECRET: &str = "whsec_test_secret";

    fn client() -> StripeClient {
        StripeClient::new(WEBHOOK_SECRET.to_string())
    }

    fn sign(payload: &[u8], timestamp: &str, secret: &str) -> String {
        let signed_payload = format!("{}.{}", timestamp, String::from_utf8_lossy(payload));
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(signed_payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn sample_payload() -> Vec<u8> {
        serde_json::json!({
            "id": "evt_1",
            "type": "payment_intent.succeeded",
            "data": {"object": {"id": "pi_1", "amount": 1500}}
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn accepts_valid_signature() {
        let payload = sample_payload();
        let signature = sign(&payload, "1700000000", WEBHOOK_SECRET);
        let header = format!("t=1700000000,v1={signature}");

        let event = client()
            .verify_webhook_signature(&payload, &header)
            .expect("valid signature should verify");

        assert_eq!(event.type_, "payment_intent.succeeded");
        assert_eq!(event.id.as_deref(), Some("evt_1"));
    }

    #[test]
    fn rejects_signature_from_wrong_secret() {
        let payload = sample_payload();
        let signature = sign(&payload, "1700000000", "whsec_other");
        let header = format!("t=1700000000,v1={signature}");

        assert!(client().verify_webhook_signature(&payload, &header).is_err());
    }

    #[test]
    fn rejects_tampered_payload() {
        let payload = sample_payload();
        let signature = sign(&payload, "1700000000", WEBHOOK_SECRET);
        let header = format!("t=1700000000,v1={signature}");

        let mut tampered = payload.clone();
        tampered[0] = b' ';

        assert!(
            client()
                .verify_webhook_signature(&tampered, &header)
                .is_err()
        );
    }

    #[test]
    fn rejects_header_without_timestamp() {
        let payload = sample_payload();
        let signature = sign(&payload, "1700000000", WEBHOOK_SECRET);
        let header = format!("v1={signature}");

        assert!(client().verify_webhook_signature(&payload, &header).is_err());
    }

    #[test]
    fn rejects_header_without_v1() {
        let payload = sample_payload();

        assert!(
            client()
                .verify_webhook_signature(&payload, "t=1700000000")
                .is_err()
        );
    }

    #[test]
    fn rejects_non_hex_signature() {
        let payload = sample_payload();

        assert!(
            client()
                .verify_webhook_signature(&payload, "t=1700000000,v1=not-hex")
                .is_err()
        );
    }

    #[test]
    fn rejects_payload_that_is_not_an_event() {
        let payload = b"not json at all".to_vec();
        let signature = sign(&payload, "1700000000", WEBHOOK_SECRET);
        let header = format!("t=1700000000,v1={signature}");

        assert!(client().verify_webhook_signature(&payload, &header).is_err());
    }
}
