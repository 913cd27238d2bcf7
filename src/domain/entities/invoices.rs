use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Paid-invoice row as returned by the `invoices` resource. Read-only here.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceRow {
    pub business_id: String,
    pub amount: f64,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}
