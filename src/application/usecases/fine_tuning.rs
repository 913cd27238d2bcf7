use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::domain::repositories::interactions::InteractionRepository;

/// Version string reported by the synthetic tuning step. No model call is
/// made and nothing is persisted.
pub const MODEL_VERSION: &str = "assistant-v2.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FineTuneOutcome {
    pub interaction_count: usize,
    pub model_version: String,
}

pub struct FineTuningUseCase<Repo>
where
    Repo: InteractionRepository + Send + Sync + 'static,
{
    interaction_repo: Arc<Repo>,
}

impl<Repo> FineTuningUseCase<Repo>
where
    Repo: InteractionRepository + Send + Sync + 'static,
{
    pub fn new(interaction_repo: Arc<Repo>) -> Self {
        Self { interaction_repo }
    }

    /// Returns `None` when there is nothing to tune on.
    pub async fn run(&self) -> Result<Option<FineTuneOutcome>> {
        let interactions = self.interaction_repo.list_recent().await?;

        if interactions.is_empty() {
            info!("fine-tune: no interactions to tune on");
            return Ok(None);
        }

        info!(
            interaction_count = interactions.len(),
            model_version = MODEL_VERSION,
            "fine-tune: model updated"
        );

        Ok(Some(FineTuneOutcome {
            interaction_count: interactions.len(),
            model_version: MODEL_VERSION.to_string(),
        }))
    }
}
