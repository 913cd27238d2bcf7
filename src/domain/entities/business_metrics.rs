use chrono::NaiveDate;
use serde::Serialize;

/// Daily revenue rollup written to `business_metrics`, keyed by
/// `(business_id, date)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRevenueUpsert {
    pub business_id: String,
    pub date: NaiveDate,
    pub revenue: f64,
}
