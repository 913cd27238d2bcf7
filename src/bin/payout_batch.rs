use std::sync::Arc;

use anyhow::Result;
use payment_ops::application::usecases::payout_batch::PayoutBatchUseCase;
use payment_ops::infrastructure::memory::logging_payout_gateway::LoggingPayoutGateway;
use payment_ops::infrastructure::memory::sample_payouts::SamplePayoutRepository;
use payment_ops::observability;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Payout batch exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_tracing("payout-batch")?;

    let payout_repo = Arc::new(SamplePayoutRepository::new());
    let gateway = Arc::new(LoggingPayoutGateway::new());

    let usecase = PayoutBatchUseCase::new(payout_repo, gateway);
    let summary = usecase.run().await?;

    info!(
        success_count = summary.success_count,
        fail_count = summary.fail_count,
        "Payout batch finished"
    );

    Ok(())
}
