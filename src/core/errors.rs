use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum RecipeBoxError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Authentication required: {0}")]
    AuthRequired(String),
    #[error("User {0} not found")]
    UserNotFound(String),
    #[error("Recipe {0} not found")]
    RecipeNotFound(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
