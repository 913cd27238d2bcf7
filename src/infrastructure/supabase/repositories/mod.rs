pub mod business_metrics;
pub mod invoices;
