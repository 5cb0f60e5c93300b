use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque bearer token, one per user. Reissued tokens return the existing
/// row rather than minting a second one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}
