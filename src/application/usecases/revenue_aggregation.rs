use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tracing::{debug, info};

use crate::domain::entities::business_metrics::DailyRevenueUpsert;
use crate::domain::entities::invoices::InvoiceRow;
use crate::domain::repositories::business_metrics::BusinessMetricsRepository;
use crate::domain::repositories::invoices::InvoiceRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationSummary {
    pub date: NaiveDate,
    pub business_count: usize,
}

/// Rolls up yesterday's paid invoices into per-business revenue rows.
///
/// The read and the upserts are separate store calls; a concurrent writer to
/// `invoices` between them is not accounted for.
pub struct RevenueAggregationUseCase<Inv, Metrics>
where
    Inv: InvoiceRepository + Send + Sync + 'static,
    Metrics: BusinessMetricsRepository + Send + Sync + 'static,
{
    invoice_repo: Arc<Inv>,
    metrics_repo: Arc<Metrics>,
}

impl<Inv, Metrics> RevenueAggregationUseCase<Inv, Metrics>
where
    Inv: InvoiceRepository + Send + Sync + 'static,
    Metrics: BusinessMetricsRepository + Send + Sync + 'static,
{
    pub fn new(invoice_repo: Arc<Inv>, metrics_repo: Arc<Metrics>) -> Self {
        Self {
            invoice_repo,
            metrics_repo,
        }
    }

    pub async fn run(&self) -> Result<AggregationSummary> {
        let (from, to, date) = yesterday_window(Utc::now());
        self.run_for_window(from, to, date).await
    }

    pub async fn run_for_window(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        date: NaiveDate,
    ) -> Result<AggregationSummary> {
        info!(%date, %from, %to, "revenue: aggregating paid invoices");

        let rows = self.invoice_repo.list_paid_between(from, to).await?;

        if rows.is_empty() {
            info!(%date, "revenue: no paid invoices in window, nothing to upsert");
            return Ok(AggregationSummary {
                date,
                business_count: 0,
            });
        }

        let totals = aggregate_by_business(&rows);
        let business_count = totals.len();

        for (business_id, revenue) in totals {
            debug!(%business_id, revenue, "revenue: upserting daily revenue");
            self.metrics_repo
                .upsert_daily_revenue(DailyRevenueUpsert {
                    business_id,
                    date,
                    revenue,
                })
                .await?;
        }

        info!(
            %date,
            invoice_count = rows.len(),
            business_count,
            "revenue: aggregation completed"
        );

        Ok(AggregationSummary {
            date,
            business_count,
        })
    }
}

/// Sums invoice amounts per business id.
pub fn aggregate_by_business(rows: &[InvoiceRow]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for row in rows {
        *totals.entry(row.business_id.clone()).or_insert(0.0) += row.amount;
    }
    totals
}

/// Yesterday as a UTC calendar day. The upper bound is 23:59:59 rather than
/// the start of the next day, so the final second of each day falls outside
/// every window.
pub fn yesterday_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>, NaiveDate) {
    let date = now.date_naive() - Duration::days(1);
    let from = date.and_time(NaiveTime::MIN).and_utc();
    let to = from + Duration::seconds(86_399);
    (from, to, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::business_metrics::MockBusinessMetricsRepository;
    use crate::domain::repositories::invoices::MockInvoiceRepository;
    use chrono::{NaiveDate, TimeZone, Timelike};

    fn paid_row(business_id: &str, amount: f64) -> InvoiceRow {
        InvoiceRow {
            business_id: business_id.to_string(),
            amount,
            status: "paid".to_string(),
            updated_at: Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn sums_amounts_per_business() {
        let rows = vec![paid_row("A", 10.0), paid_row("A", 5.0), paid_row("B", 7.0)];

        let totals = aggregate_by_business(&rows);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["A"], 15.0);
        assert_eq!(totals["B"], 7.0);
    }

    #[test]
    fn window_spans_midnight_to_last_second_of_yesterday() {
        let now = Utc.with_ymd_and_hms(2025, 3, 11, 9, 30, 0).unwrap();

        let (from, to, date) = yesterday_window(now);

        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(from, Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(to, Utc.with_ymd_and_hms(2025, 3, 10, 23, 59, 59).unwrap());
        assert_eq!(to.second(), 59);
    }

    #[tokio::test]
    async fn upserts_one_record_per_business() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let from = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 3, 10, 23, 59, 59).unwrap();

        let mut invoice_repo = MockInvoiceRepository::new();
        invoice_repo
            .expect_list_paid_between()
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(vec![
                        paid_row("A", 10.0),
                        paid_row("A", 5.0),
                        paid_row("B", 7.0),
                    ])
                })
            });

        let mut metrics_repo = MockBusinessMetricsRepository::new();
        metrics_repo
            .expect_upsert_daily_revenue()
            .withf(move |record| {
                record.date == date
                    && match record.business_id.as_str() {
                        "A" => record.revenue == 15.0,
                        "B" => record.revenue == 7.0,
                        _ => false,
                    }
            })
            .times(2)
            .returning(|_| Box::pin(async { Ok(()) }));

        let usecase =
            RevenueAggregationUseCase::new(Arc::new(invoice_repo), Arc::new(metrics_repo));
        let summary = usecase.run_for_window(from, to, date).await.unwrap();

        assert_eq!(summary.business_count, 2);
        assert_eq!(summary.date, date);
    }

    #[tokio::test]
    async fn empty_result_set_performs_no_upserts() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let from = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 3, 10, 23, 59, 59).unwrap();

        let mut invoice_repo = MockInvoiceRepository::new();
        invoice_repo
            .expect_list_paid_between()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(vec![]) }));

        let mut metrics_repo = MockBusinessMetricsRepository::new();
        metrics_repo.expect_upsert_daily_revenue().times(0);

        let usecase =
            RevenueAggregationUseCase::new(Arc::new(invoice_repo), Arc::new(metrics_repo));
        let summary = usecase.run_for_window(from, to, date).await.unwrap();

        assert_eq!(summary.business_count, 0);
    }
}
