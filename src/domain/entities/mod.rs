pub mod business_metrics;
pub mod interactions;
pub mod invoices;
pub mod payouts;
