use crate::core::errors::RecipeBoxError;
use crate::core::models::{
    ingredient::Ingredient, recipe::Recipe, tag::Tag, token::AuthToken, user::User,
};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryStorage {
    users: Arc<RwLock<HashMap<String, User>>>,
    /// email -> user_id; emails are stored lowercase so lookups are
    /// case-insensitive by construction.
    emails: Arc<RwLock<HashMap<String, String>>>,
    /// token string -> AuthToken
    tokens: Arc<RwLock<HashMap<String, AuthToken>>>,
    tags: Arc<RwLock<HashMap<String, Tag>>>,
    ingredients: Arc<RwLock<HashMap<String, Ingredient>>>,
    /// Kept as a Vec to preserve creation order.
    recipes: Arc<RwLock<Vec<Recipe>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(HashMap::new())),
            emails: Arc::new(RwLock::new(HashMap::new())),
            tokens: Arc::new(RwLock::new(HashMap::new())),
            tags: Arc::new(RwLock::new(HashMap::new())),
            ingredients: Arc::new(RwLock::new(HashMap::new())),
            recipes: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_user(&self, user: User) -> Result<User, RecipeBoxError> {
        let mut emails = self.emails.write().await;
        if emails.contains_key(&user.email) {
            return Err(RecipeBoxError::EmailAlreadyRegistered(user.email));
        }
        emails.insert(user.email.clone(), user.id.clone());
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_user(&self, user: User) -> Result<User, RecipeBoxError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(RecipeBoxError::UserNotFound(user.id));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, RecipeBoxError> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RecipeBoxError> {
        // For production: database index on email
        let user_id = self.emails.read().await.get(email).cloned();
        Ok(match user_id {
            Some(id) => self.users.read().await.get(&id).cloned(),
            None => None,
        })
    }

    async fn save_token(&self, token: AuthToken) -> Result<(), RecipeBoxError> {
        self.tokens
            .write()
            .await
            .insert(token.token.clone(), token);
        Ok(())
    }

    async fn get_token(&self, token: &str) -> Result<Option<AuthToken>, RecipeBoxError> {
        Ok(self.tokens.read().await.get(token).cloned())
    }

    async fn get_token_for_user(&self, user_id: &str) -> Result<Option<AuthToken>, RecipeBoxError> {
        // For production: database index on user_id
        Ok(self
            .tokens
            .read()
            .await
            .values()
            .find(|t| t.user_id == user_id)
            .cloned())
    }

    async fn create_tag(&self, tag: Tag) -> Result<Tag, RecipeBoxError> {
        self.tags.write().await.insert(tag.id.clone(), tag.clone());
        Ok(tag)
    }

    async fn get_tag(&self, tag_id: &str) -> Result<Option<Tag>, RecipeBoxError> {
        Ok(self.tags.read().await.get(tag_id).cloned())
    }

    async fn list_tags(&self, user_id: &str) -> Result<Vec<Tag>, RecipeBoxError> {
        let mut tags: Vec<Tag> = self
            .tags
            .read()
            .await
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        tags.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(tags)
    }

    async fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, RecipeBoxError> {
        self.ingredients
            .write()
            .await
            .insert(ingredient.id.clone(), ingredient.clone());
        Ok(ingredient)
    }

    async fn get_ingredient(
        &self,
        ingredient_id: &str,
    ) -> Result<Option<Ingredient>, RecipeBoxError> {
        Ok(self.ingredients.read().await.get(ingredient_id).cloned())
    }

    async fn list_ingredients(&self, user_id: &str) -> Result<Vec<Ingredient>, RecipeBoxError> {
        let mut ingredients: Vec<Ingredient> = self
            .ingredients
            .read()
            .await
            .values()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect();
        ingredients.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(ingredients)
    }

    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, RecipeBoxError> {
        self.recipes.write().await.push(recipe.clone());
        Ok(recipe)
    }

    async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, RecipeBoxError> {
        let mut recipes = self.recipes.write().await;
        match recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(slot) => {
                *slot = recipe.clone();
                Ok(recipe)
            }
            None => Err(RecipeBoxError::RecipeNotFound(recipe.id)),
        }
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Option<Recipe>, RecipeBoxError> {
        Ok(self
            .recipes
            .read()
            .await
            .iter()
            .find(|r| r.id == recipe_id)
            .cloned())
    }

    async fn list_recipes(&self, user_id: &str) -> Result<Vec<Recipe>, RecipeBoxError> {
        // Insertion order holds creation order; reverse for newest-first.
        Ok(self
            .recipes
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_recipe(&self, recipe_id: &str) -> Result<(), RecipeBoxError> {
        let mut recipes = self.recipes.write().await;
        let before = recipes.len();
        recipes.retain(|r| r.id != recipe_id);
        if recipes.len() == before {
            return Err(RecipeBoxError::RecipeNotFound(recipe_id.to_string()));
        }
        Ok(())
    }
}
