use uuid::Uuid;

/// Generate an opaque bearer token. Two v4 uuids give 64 hex characters of
/// randomness; the token carries no claims and is only meaningful as a
/// storage key.
pub fn generate_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}
