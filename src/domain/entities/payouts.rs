use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pending seller payout. The status update after processing is not
/// persisted anywhere; the batch only reports counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    pub user_id: Uuid,
    pub amount: f64,
    pub gateway: String,
}
