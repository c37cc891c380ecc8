use axum::{
    extract::{rejection::JsonRejection, Path},
    routing::{get, post},
    Extension, Json, Router,
};
use mongodb::bson::oid::ObjectId;

use super::{
    text_models::{TextInput, TextOutput},
    text_transformer::Transformation,
};
use crate::{app_module::AppState, error::ApiError};

pub fn text_router() -> Router {
    Router::new()
        .route("/changetoUpperCase", post(change_to_upper_case))
        .route("/changetoLowerCase", post(change_to_lower_case))
        .route("/reverseText", post(reverse_text))
        .route("/countWordsandCharacters", post(count_words_and_characters))
        .route("/convertanythingtohello", post(convert_anything_to_hello))
        .route("/getText/:id", get(get_text))
}

pub async fn change_to_upper_case(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<TextInput>, JsonRejection>,
) -> Result<Json<TextOutput>, ApiError> {
    review(&ctx, Transformation::Uppercase, payload).await
}

pub async fn change_to_lower_case(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<TextInput>, JsonRejection>,
) -> Result<Json<TextOutput>, ApiError> {
    review(&ctx, Transformation::Lowercase, payload).await
}

pub async fn reverse_text(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<TextInput>, JsonRejection>,
) -> Result<Json<TextOutput>, ApiError> {
    review(&ctx, Transformation::Reverse, payload).await
}

pub async fn count_words_and_characters(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<TextInput>, JsonRejection>,
) -> Result<Json<TextOutput>, ApiError> {
    review(&ctx, Transformation::Count, payload).await
}

pub async fn convert_anything_to_hello(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<TextInput>, JsonRejection>,
) -> Result<Json<TextOutput>, ApiError> {
    review(&ctx, Transformation::Hello, payload).await
}

pub async fn get_text(
    Extension(ctx): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TextOutput>, ApiError> {
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::BadRequest(format!("invalid id format: {id}")))?;

    match ctx.service.text_service.find(oid).await? {
        Some(output) => Ok(Json(output)),
        None => Err(ApiError::NotFound("text not found".to_string())),
    }
}

async fn review(
    ctx: &AppState,
    transformation: Transformation,
    payload: Result<Json<TextInput>, JsonRejection>,
) -> Result<Json<TextOutput>, ApiError> {
    let Json(input) = payload?;
    let output = ctx
        .service
        .text_service
        .review(transformation, input.text)
        .await?;
    Ok(Json(output))
}
