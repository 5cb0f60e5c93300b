use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub time_minutes: u32,
    pub price: f64,
    pub user_id: String,
    /// Associated tags, all owned by the same user.
    pub tag_ids: Vec<String>,
    pub ingredient_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}
