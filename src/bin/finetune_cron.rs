use std::sync::Arc;

use anyhow::Result;
use payment_ops::application::usecases::fine_tuning::FineTuningUseCase;
use payment_ops::infrastructure::memory::sample_interactions::SampleInteractionRepository;
use payment_ops::observability;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Fine-tune cron exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_tracing("finetune-cron")?;

    let interaction_repo = Arc::new(SampleInteractionRepository::new());
    let usecase = FineTuningUseCase::new(interaction_repo);

    match usecase.run().await? {
        Some(outcome) => info!(
            interaction_count = outcome.interaction_count,
            model_version = %outcome.model_version,
            "Fine-tune run completed"
        ),
        None => info!("Fine-tune run completed with no interactions"),
    }

    Ok(())
}
