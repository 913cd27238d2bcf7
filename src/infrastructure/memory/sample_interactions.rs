use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::interactions::Interaction;
use crate::domain::repositories::interactions::InteractionRepository;

/// Fixed sample data standing in for the interaction store. The "past 24h"
/// intent of the cron is not applied here.
pub struct SampleInteractionRepository {
    interactions: Vec<Interaction>,
}

impl SampleInteractionRepository {
    pub fn new() -> Self {
        Self {
            interactions: vec![
                Interaction {
                    user_id: Uuid::new_v4(),
                    query: "where is my order".to_string(),
                    rating: 5,
                },
                Interaction {
                    user_id: Uuid::new_v4(),
                    query: "how do I publish a listing".to_string(),
                    rating: 4,
                },
                Interaction {
                    user_id: Uuid::new_v4(),
                    query: "refund my last purchase".to_string(),
                    rating: 2,
                },
            ],
        }
    }

    pub fn empty() -> Self {
        Self {
            interactions: Vec::new(),
        }
    }
}

impl Default for SampleInteractionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InteractionRepository for SampleInteractionRepository {
    async fn list_recent(&self) -> Result<Vec<Interaction>> {
        Ok(self.interactions.clone())
    }
}
