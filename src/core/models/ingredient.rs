use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub user_id: String,
}
