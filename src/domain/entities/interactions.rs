use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rated assistant interaction used as fine-tuning input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: Uuid,
    pub query: String,
    pub rating: i32,
}
