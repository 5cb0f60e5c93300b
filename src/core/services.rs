use crate::auth::token::generate_token;
use crate::constants::{MAX_NAME_LEN, MAX_PRICE, MIN_PASSWORD_LEN};
use crate::core::errors::{FieldError, RecipeBoxError};
use crate::core::models::{
    ingredient::Ingredient, recipe::Recipe, tag::Tag, token::AuthToken, user::User,
};
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Profile {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub time_minutes: u32,
    pub price: f64,
    pub tag_ids: Vec<String>,
    pub ingredient_ids: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub time_minutes: Option<u32>,
    pub price: Option<f64>,
    pub tag_ids: Option<Vec<String>>,
    pub ingredient_ids: Option<Vec<String>>,
}

pub struct RecipeBoxService<S: Storage> {
    storage: S,
}

impl<S: Storage> RecipeBoxService<S> {
    pub fn new(storage: S) -> Self {
        info!("Initializing RecipeBoxService");
        RecipeBoxService { storage }
    }

    // VALIDATION HELPERS

    fn validate_string_input(
        &self,
        field: &str,
        value: &str,
        max_length: usize,
    ) -> Result<(), RecipeBoxError> {
        if value.trim().is_empty() {
            return Err(RecipeBoxError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} cannot be empty", field),
                },
            ));
        }
        if value.len() > max_length {
            return Err(RecipeBoxError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        if value.chars().any(|c| c.is_control()) {
            return Err(RecipeBoxError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} contains invalid characters", field),
                },
            ));
        }
        Ok(())
    }

    /// Normalize and validate an email address. Returns the lowercase form
    /// that gets stored and queried.
    fn normalize_email(&self, email: &str) -> Result<String, RecipeBoxError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(RecipeBoxError::MissingEmail);
        }
        if !email.contains('@') || !email.contains('.') || email.len() < 5 {
            return Err(RecipeBoxError::InvalidEmail(email));
        }
        Ok(email)
    }

    fn validate_password(&self, password: &str) -> Result<(), RecipeBoxError> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(RecipeBoxError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        Ok(())
    }

    fn hash_password(&self, password: &str) -> Result<String, RecipeBoxError> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| RecipeBoxError::InternalServerError(format!("Password hash error: {}", e)))
    }

    fn validate_price(&self, field: &str, price: f64) -> Result<(), RecipeBoxError> {
        if !price.is_finite() || price < 0.0 || price > MAX_PRICE {
            return Err(RecipeBoxError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Invalid Price".to_string(),
                    description: format!("{} must be between 0 and {}", field, MAX_PRICE),
                },
            ));
        }
        Ok(())
    }

    /// Every referenced tag/ingredient must exist and belong to the caller.
    /// Unknown and foreign-owned ids fail with the same message so
    /// ownership is not observable through association errors.
    async fn validate_recipe_refs(
        &self,
        user: &User,
        tag_ids: &[String],
        ingredient_ids: &[String],
    ) -> Result<(), RecipeBoxError> {
        for tag_id in tag_ids {
            let owned = matches!(
                self.storage.get_tag(tag_id).await?,
                Some(tag) if tag.user_id == user.id
            );
            if !owned {
                return Err(RecipeBoxError::InvalidInput(
                    "tag_ids".to_string(),
                    FieldError {
                        field: "tag_ids".to_string(),
                        title: "Invalid Tag".to_string(),
                        description: format!("Unknown tag {}", tag_id),
                    },
                ));
            }
        }
        for ingredient_id in ingredient_ids {
            let owned = matches!(
                self.storage.get_ingredient(ingredient_id).await?,
                Some(ingredient) if ingredient.user_id == user.id
            );
            if !owned {
                return Err(RecipeBoxError::InvalidInput(
                    "ingredient_ids".to_string(),
                    FieldError {
                        field: "ingredient_ids".to_string(),
                        title: "Invalid Ingredient".to_string(),
                        description: format!("Unknown ingredient {}", ingredient_id),
                    },
                ));
            }
        }
        Ok(())
    }

    // CREDENTIAL STORE

    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, RecipeBoxError> {
        let email = self.normalize_email(email)?;
        self.validate_password(password)?;
        if !name.is_empty() {
            self.validate_string_input("name", name, MAX_NAME_LEN)?;
        }

        info!("Creating user with email: {}", email);
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email,
            password: self.hash_password(password)?,
            is_staff: false,
            is_superuser: false,
        };
        let created = self.storage.create_user(user).await?;
        debug!("User created with ID: {}", created.id);
        Ok(created)
    }

    pub async fn create_superuser(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, RecipeBoxError> {
        let mut user = self.create_user(email, password, "").await?;
        user.is_staff = true;
        user.is_superuser = true;
        self.storage.update_user(user).await
    }

    pub fn check_password(&self, user: &User, plaintext: &str) -> bool {
        bcrypt::verify(plaintext, &user.password).unwrap_or(false)
    }

    // TOKEN ISSUER

    /// Exchange credentials for the user's bearer token. One token per
    /// user: reissuing returns the existing token.
    pub async fn issue_token(&self, email: &str, password: &str) -> Result<String, RecipeBoxError> {
        if password.is_empty() {
            return Err(RecipeBoxError::InvalidCredentials);
        }
        let email = email.trim().to_lowercase();
        let user = self
            .storage
            .get_user_by_email(&email)
            .await?
            .ok_or(RecipeBoxError::InvalidCredentials)?;
        if !self.check_password(&user, password) {
            warn!("Failed credential exchange for {}", email);
            return Err(RecipeBoxError::InvalidCredentials);
        }

        if let Some(existing) = self.storage.get_token_for_user(&user.id).await? {
            return Ok(existing.token);
        }
        let token = AuthToken {
            token: generate_token(),
            user_id: user.id.clone(),
            created_at: Utc::now(),
        };
        self.storage.save_token(token.clone()).await?;
        debug!("Issued token for user {}", user.id);
        Ok(token.token)
    }

    /// Resolve a bearer token to its user. Unknown tokens fail with the
    /// 401-mapped error regardless of why they are unknown.
    pub async fn user_for_token(&self, token: &str) -> Result<User, RecipeBoxError> {
        let auth_token = self
            .storage
            .get_token(token)
            .await?
            .ok_or_else(|| RecipeBoxError::AuthRequired("Invalid token".to_string()))?;
        self.storage
            .get_user(&auth_token.user_id)
            .await?
            .ok_or_else(|| RecipeBoxError::AuthRequired("Invalid token".to_string()))
    }

    // USER PROFILE

    pub fn get_profile(&self, user: &User) -> Profile {
        Profile {
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }

    pub async fn update_profile(
        &self,
        user: &User,
        update: ProfileUpdate,
    ) -> Result<Profile, RecipeBoxError> {
        let mut updated = user.clone();
        if let Some(name) = update.name {
            self.validate_string_input("name", &name, MAX_NAME_LEN)?;
            updated.name = name;
        }
        if let Some(password) = update.password {
            self.validate_password(&password)?;
            updated.password = self.hash_password(&password)?;
        }
        let saved = self.storage.update_user(updated).await?;
        debug!("Profile updated for user {}", saved.id);
        Ok(self.get_profile(&saved))
    }

    // TAGS

    pub async fn list_tags(&self, user: &User) -> Result<Vec<Tag>, RecipeBoxError> {
        self.storage.list_tags(&user.id).await
    }

    pub async fn create_tag(&self, user: &User, name: &str) -> Result<Tag, RecipeBoxError> {
        self.validate_string_input("name", name, MAX_NAME_LEN)?;
        let tag = Tag {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            // Owner comes from the authenticated caller, never the payload.
            user_id: user.id.clone(),
        };
        let created = self.storage.create_tag(tag).await?;
        debug!("Tag {} created for user {}", created.id, user.id);
        Ok(created)
    }

    // INGREDIENTS

    pub async fn list_ingredients(&self, user: &User) -> Result<Vec<Ingredient>, RecipeBoxError> {
        self.storage.list_ingredients(&user.id).await
    }

    pub async fn create_ingredient(
        &self,
        user: &User,
        name: &str,
    ) -> Result<Ingredient, RecipeBoxError> {
        self.validate_string_input("name", name, MAX_NAME_LEN)?;
        let ingredient = Ingredient {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            user_id: user.id.clone(),
        };
        let created = self.storage.create_ingredient(ingredient).await?;
        debug!("Ingredient {} created for user {}", created.id, user.id);
        Ok(created)
    }

    // RECIPES

    pub async fn list_recipes(&self, user: &User) -> Result<Vec<Recipe>, RecipeBoxError> {
        self.storage.list_recipes(&user.id).await
    }

    pub async fn create_recipe(
        &self,
        user: &User,
        new_recipe: NewRecipe,
    ) -> Result<Recipe, RecipeBoxError> {
        self.validate_string_input("title", &new_recipe.title, MAX_NAME_LEN)?;
        self.validate_price("price", new_recipe.price)?;
        self.validate_recipe_refs(user, &new_recipe.tag_ids, &new_recipe.ingredient_ids)
            .await?;

        let recipe = Recipe {
            id: Uuid::new_v4().to_string(),
            title: new_recipe.title,
            time_minutes: new_recipe.time_minutes,
            price: new_recipe.price,
            user_id: user.id.clone(),
            tag_ids: new_recipe.tag_ids,
            ingredient_ids: new_recipe.ingredient_ids,
            created_at: Utc::now(),
        };
        let created = self.storage.create_recipe(recipe).await?;
        debug!("Recipe {} created for user {}", created.id, user.id);
        Ok(created)
    }

    /// Fetch an owned recipe. A recipe owned by someone else fails with the
    /// same error as a missing id.
    pub async fn get_recipe(&self, user: &User, recipe_id: &str) -> Result<Recipe, RecipeBoxError> {
        match self.storage.get_recipe(recipe_id).await? {
            Some(recipe) if recipe.user_id == user.id => Ok(recipe),
            _ => Err(RecipeBoxError::RecipeNotFound(recipe_id.to_string())),
        }
    }

    pub async fn update_recipe(
        &self,
        user: &User,
        recipe_id: &str,
        update: RecipeUpdate,
    ) -> Result<Recipe, RecipeBoxError> {
        let mut recipe = self.get_recipe(user, recipe_id).await?;

        if let Some(title) = update.title {
            self.validate_string_input("title", &title, MAX_NAME_LEN)?;
            recipe.title = title;
        }
        if let Some(time_minutes) = update.time_minutes {
            recipe.time_minutes = time_minutes;
        }
        if let Some(price) = update.price {
            self.validate_price("price", price)?;
            recipe.price = price;
        }
        if let Some(tag_ids) = update.tag_ids {
            self.validate_recipe_refs(user, &tag_ids, &[]).await?;
            recipe.tag_ids = tag_ids;
        }
        if let Some(ingredient_ids) = update.ingredient_ids {
            self.validate_recipe_refs(user, &[], &ingredient_ids).await?;
            recipe.ingredient_ids = ingredient_ids;
        }

        let saved = self.storage.update_recipe(recipe).await?;
        debug!("Recipe {} updated by user {}", saved.id, user.id);
        Ok(saved)
    }

    pub async fn delete_recipe(&self, user: &User, recipe_id: &str) -> Result<(), RecipeBoxError> {
        // Ownership check first so a foreign recipe reads as missing.
        self.get_recipe(user, recipe_id).await?;
        self.storage.delete_recipe(recipe_id).await?;
        debug!("Recipe {} deleted by user {}", recipe_id, user.id);
        Ok(())
    }
}
