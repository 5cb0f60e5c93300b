use crate::core::errors::RecipeBoxError;
use crate::core::models::{
    ingredient::Ingredient, recipe::Recipe, tag::Tag, token::AuthToken, user::User,
};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_user(&self, user: User) -> Result<User, RecipeBoxError>;
    async fn update_user(&self, user: User) -> Result<User, RecipeBoxError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, RecipeBoxError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RecipeBoxError>;

    async fn save_token(&self, token: AuthToken) -> Result<(), RecipeBoxError>;
    async fn get_token(&self, token: &str) -> Result<Option<AuthToken>, RecipeBoxError>;
    async fn get_token_for_user(&self, user_id: &str) -> Result<Option<AuthToken>, RecipeBoxError>;

    async fn create_tag(&self, tag: Tag) -> Result<Tag, RecipeBoxError>;
    async fn get_tag(&self, tag_id: &str) -> Result<Option<Tag>, RecipeBoxError>;
    /// Owned tags, name descending.
    async fn list_tags(&self, user_id: &str) -> Result<Vec<Tag>, RecipeBoxError>;

    async fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, RecipeBoxError>;
    async fn get_ingredient(&self, ingredient_id: &str)
    -> Result<Option<Ingredient>, RecipeBoxError>;
    /// Owned ingredients, name descending.
    async fn list_ingredients(&self, user_id: &str) -> Result<Vec<Ingredient>, RecipeBoxError>;

    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, RecipeBoxError>;
    async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, RecipeBoxError>;
    async fn get_recipe(&self, recipe_id: &str) -> Result<Option<Recipe>, RecipeBoxError>;
    /// Owned recipes, most recently created first.
    async fn list_recipes(&self, user_id: &str) -> Result<Vec<Recipe>, RecipeBoxError>;
    async fn delete_recipe(&self, recipe_id: &str) -> Result<(), RecipeBoxError>;
}

pub mod in_memory;
