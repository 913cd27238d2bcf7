pub mod fine_tuning;
pub mod payment_webhook;
pub mod payout_batch;
pub mod revenue_aggregation;
