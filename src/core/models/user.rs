use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Stored lowercase; uniqueness is case-insensitive.
    pub email: String,
    /// bcrypt hash, never serialized into responses.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}
