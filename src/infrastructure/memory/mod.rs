pub mod logging_payout_gateway;
pub mod sample_interactions;
pub mod sample_payouts;
