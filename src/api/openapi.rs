use utoipa::OpenApi;

use crate::{
    api::models::{
        CreateIngredientRequest, CreateRecipeRequest, CreateTagRequest, CreateUserRequest,
        ErrorResponse, TokenRequest, TokenResponse, UpdateProfileRequest, UpdateRecipeRequest,
        UserResponse,
    },
    core::{
        models::{ingredient::Ingredient, recipe::Recipe, tag::Tag},
        services::Profile,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::issue_token,
        super::handlers::get_profile,
        super::handlers::update_profile,
        super::handlers::profile_post_not_allowed,
        super::handlers::list_tags,
        super::handlers::create_tag,
        super::handlers::list_ingredients,
        super::handlers::create_ingredient,
        super::handlers::list_recipes,
        super::handlers::create_recipe,
        super::handlers::get_recipe,
        super::handlers::replace_recipe,
        super::handlers::update_recipe,
        super::handlers::delete_recipe
    ),
    components(schemas(
        CreateUserRequest,
        TokenRequest,
        TokenResponse,
        UpdateProfileRequest,
        CreateTagRequest,
        CreateIngredientRequest,
        CreateRecipeRequest,
        UpdateRecipeRequest,
        UserResponse,
        ErrorResponse,
        Profile,
        Tag,
        Ingredient,
        Recipe
    )),
    info(
        title = "RecipeBox API",
        description = "API for managing user-owned recipes, tags and ingredients",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
