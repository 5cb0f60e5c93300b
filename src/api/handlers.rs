use crate::{
    api::models::*,
    core::{
        errors::RecipeBoxError,
        models::{ingredient::Ingredient, recipe::Recipe, tag::Tag, user::User},
        services::{NewRecipe, Profile, ProfileUpdate, RecipeBoxService, RecipeUpdate},
    },
    infrastructure::storage::in_memory::InMemoryStorage,
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
};
use http::header;

use std::sync::Arc;

type Service = Arc<RecipeBoxService<InMemoryStorage>>;

/// Authenticated identity, resolved from the bearer token and threaded to
/// handlers through request extensions.
#[derive(Clone)]
pub struct CurrentUser(pub User);

/// Middleware to resolve the bearer token into a CurrentUser
pub async fn auth_middleware(
    State(service): State<Service>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| RecipeBoxError::AuthRequired("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| RecipeBoxError::AuthRequired("Invalid Authorization header".to_string()))?;

    let user = service.user_for_token(token).await?;
    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(service: Service) -> Router {
    let protected_routes = Router::new()
        .route(
            "/users/profile",
            axum::routing::get(get_profile)
                .patch(update_profile)
                .post(profile_post_not_allowed),
        )
        .route(
            "/recipe/tags",
            axum::routing::get(list_tags).post(create_tag),
        )
        .route(
            "/recipe/ingredients",
            axum::routing::get(list_ingredients).post(create_ingredient),
        )
        .route(
            "/recipe/recipes",
            axum::routing::get(list_recipes).post(create_recipe),
        )
        .route(
            "/recipe/recipes/{recipe_id}",
            axum::routing::get(get_recipe)
                .put(replace_recipe)
                .patch(update_recipe)
                .delete(delete_recipe),
        )
        .route_layer(middleware::from_fn_with_state(
            service.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/users/create", axum::routing::post(create_user)) // Unprotected
        .route("/users/token", axum::routing::post(issue_token)) // Unprotected
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/users/create",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Validation failure (bad email, short password, duplicate email)", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(service): State<Service>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = service
        .create_user(&req.email, &req.password, req.name.as_deref().unwrap_or(""))
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(
    post,
    path = "/api/users/token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn issue_token(
    State(service): State<Service>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = service.issue_token(&req.email, &req.password).await?;
    Ok(Json(TokenResponse { token }))
}

#[utoipa::path(
    get,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "Profile of the authenticated user", body = Profile),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_profile(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(service.get_profile(&user)))
}

#[utoipa::path(
    patch,
    path = "/api/users/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = Profile),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn update_profile(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    let profile = service
        .update_profile(
            &user,
            ProfileUpdate {
                name: req.name,
                password: req.password,
            },
        )
        .await?;
    Ok(Json(profile))
}

#[utoipa::path(
    post,
    path = "/api/users/profile",
    responses(
        (status = 405, description = "Profile is singular, not a creatable collection", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn profile_post_not_allowed() -> ApiError {
    ApiError(RecipeBoxError::MethodNotAllowed)
}

#[utoipa::path(
    get,
    path = "/api/recipe/tags",
    responses(
        (status = 200, description = "Tags of the authenticated user, name descending", body = [Tag]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn list_tags(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<Tag>>, ApiError> {
    let tags = service.list_tags(&user).await?;
    Ok(Json(tags))
}

#[utoipa::path(
    post,
    path = "/api/recipe/tags",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created", body = Tag),
        (status = 400, description = "Empty name", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn create_tag(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateTagRequest>,
) -> Result<(StatusCode, Json<Tag>), ApiError> {
    let tag = service.create_tag(&user, &req.name).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

#[utoipa::path(
    get,
    path = "/api/recipe/ingredients",
    responses(
        (status = 200, description = "Ingredients of the authenticated user, name descending", body = [Ingredient]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn list_ingredients(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    let ingredients = service.list_ingredients(&user).await?;
    Ok(Json(ingredients))
}

#[utoipa::path(
    post,
    path = "/api/recipe/ingredients",
    request_body = CreateIngredientRequest,
    responses(
        (status = 201, description = "Ingredient created", body = Ingredient),
        (status = 400, description = "Empty name", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn create_ingredient(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateIngredientRequest>,
) -> Result<(StatusCode, Json<Ingredient>), ApiError> {
    let ingredient = service.create_ingredient(&user, &req.name).await?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}

#[utoipa::path(
    get,
    path = "/api/recipe/recipes",
    responses(
        (status = 200, description = "Recipes of the authenticated user, newest first", body = [Recipe]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn list_recipes(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = service.list_recipes(&user).await?;
    Ok(Json(recipes))
}

#[utoipa::path(
    post,
    path = "/api/recipe/recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn create_recipe(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let recipe = service
        .create_recipe(
            &user,
            NewRecipe {
                title: req.title,
                time_minutes: req.time_minutes,
                price: req.price,
                tag_ids: req.tag_ids,
                ingredient_ids: req.ingredient_ids,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    get,
    path = "/api/recipe/recipes/{recipe_id}",
    params(("recipe_id" = String, Path, description = "ID of the recipe")),
    responses(
        (status = 200, description = "Recipe retrieved", body = Recipe),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Missing or owned by another user", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_recipe(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(recipe_id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = service.get_recipe(&user, &recipe_id).await?;
    Ok(Json(recipe))
}

#[utoipa::path(
    put,
    path = "/api/recipe/recipes/{recipe_id}",
    request_body = CreateRecipeRequest,
    params(("recipe_id" = String, Path, description = "ID of the recipe")),
    responses(
        (status = 200, description = "Recipe replaced", body = Recipe),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Missing or owned by another user", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn replace_recipe(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(recipe_id): Path<String>,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = service
        .update_recipe(
            &user,
            &recipe_id,
            RecipeUpdate {
                title: Some(req.title),
                time_minutes: Some(req.time_minutes),
                price: Some(req.price),
                tag_ids: Some(req.tag_ids),
                ingredient_ids: Some(req.ingredient_ids),
            },
        )
        .await?;
    Ok(Json(recipe))
}

#[utoipa::path(
    patch,
    path = "/api/recipe/recipes/{recipe_id}",
    request_body = UpdateRecipeRequest,
    params(("recipe_id" = String, Path, description = "ID of the recipe")),
    responses(
        (status = 200, description = "Recipe updated", body = Recipe),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Missing or owned by another user", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn update_recipe(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(recipe_id): Path<String>,
    Json(req): Json<UpdateRecipeRequest>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = service
        .update_recipe(
            &user,
            &recipe_id,
            RecipeUpdate {
                title: req.title,
                time_minutes: req.time_minutes,
                price: req.price,
                tag_ids: req.tag_ids,
                ingredient_ids: req.ingredient_ids,
            },
        )
        .await?;
    Ok(Json(recipe))
}

#[utoipa::path(
    delete,
    path = "/api/recipe/recipes/{recipe_id}",
    params(("recipe_id" = String, Path, description = "ID of the recipe")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Missing or owned by another user", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn delete_recipe(
    State(service): State<Service>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(recipe_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_recipe(&user, &recipe_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
