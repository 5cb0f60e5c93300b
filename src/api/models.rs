use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::RecipeBoxError;
use crate::core::models::user::User;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct TokenRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateTagRequest {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateIngredientRequest {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub time_minutes: u32,
    pub price: f64,
    #[serde(default)]
    pub tag_ids: Vec<String>,
    #[serde(default)]
    pub ingredient_ids: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub time_minutes: Option<u32>,
    pub price: Option<f64>,
    pub tag_ids: Option<Vec<String>>,
    pub ingredient_ids: Option<Vec<String>>,
}

/// Public view of a user; the password hash never crosses the API.
#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for RecipeBoxError to implement IntoResponse
pub struct ApiError(pub RecipeBoxError);

impl From<RecipeBoxError> for ApiError {
    fn from(err: RecipeBoxError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            RecipeBoxError::MissingEmail
            | RecipeBoxError::InvalidEmail(_)
            | RecipeBoxError::EmailAlreadyRegistered(_)
            | RecipeBoxError::PasswordTooShort(_)
            | RecipeBoxError::InvalidInput(_, _) => StatusCode::BAD_REQUEST,
            // Bad credentials at token exchange are a validation failure,
            // not a challenge: 400, not 401.
            RecipeBoxError::InvalidCredentials => StatusCode::BAD_REQUEST,
            RecipeBoxError::AuthRequired(_) => StatusCode::UNAUTHORIZED,
            RecipeBoxError::UserNotFound(_) | RecipeBoxError::RecipeNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            RecipeBoxError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RecipeBoxError::StorageError(_) | RecipeBoxError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}
