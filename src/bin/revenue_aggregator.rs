use std::sync::Arc;

use anyhow::Result;
use payment_ops::application::usecases::revenue_aggregation::RevenueAggregationUseCase;
use payment_ops::config::config_loader;
use payment_ops::infrastructure::supabase::repositories::business_metrics::BusinessMetricsSupabase;
use payment_ops::infrastructure::supabase::repositories::invoices::InvoiceSupabase;
use payment_ops::infrastructure::supabase::supabase_rest::SupabaseRestClient;
use payment_ops::observability;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Revenue aggregator exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_tracing("revenue-aggregator")?;

    let supabase = config_loader::load_supabase()?;
    info!("ENV has been loaded");

    let client = Arc::new(SupabaseRestClient::new(
        supabase.url,
        supabase.service_role_key,
    ));

    let invoice_repo = Arc::new(InvoiceSupabase::new(Arc::clone(&client)));
    let metrics_repo = Arc::new(BusinessMetricsSupabase::new(Arc::clone(&client)));

    let usecase = RevenueAggregationUseCase::new(invoice_repo, metrics_repo);
    let summary = usecase.run().await?;

    info!(
        date = %summary.date,
        business_count = summary.business_count,
        "Revenue aggregation finished"
    );

    Ok(())
}
