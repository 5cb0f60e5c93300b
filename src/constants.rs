/// Minimum accepted password length at signup and profile update.
pub const MIN_PASSWORD_LEN: usize = 5;

/// Upper bound for free-text fields (names, titles).
pub const MAX_NAME_LEN: usize = 100;

/// Upper bound for a recipe price.
pub const MAX_PRICE: f64 = 1_000_000.0;
