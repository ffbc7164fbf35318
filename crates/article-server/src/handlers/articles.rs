//! Article CRUD handlers (list, get, create, update, delete).
//!
//! Request and response bodies are [`Article`] JSON objects. Malformed
//! bodies are rejected with 400 and unknown ids with 404.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use article_store::Article;

use crate::error::ApiError;
use crate::state::AppState;

/// Decodes a request body into an [`Article`].
///
/// Only a JSON object is an article. Arrays, scalars and `null` are rejected
/// even though the derived `Deserialize` would map an array by position.
fn decode_article(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Article, ApiError> {
    let Json(value) = payload?;
    if !value.is_object() {
        return Err(ApiError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Lists every article in insertion order.
///
/// `GET /all`
pub async fn list_articles(State(state): State<AppState>) -> Json<Vec<Article>> {
    let store = state.store.lock().await;
    let articles = store.list();
    tracing::info!(count = articles.len(), "endpoint hit: list_articles");
    Json(articles)
}

/// Returns the first article with the given id.
///
/// `GET /article/{id}`
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    tracing::info!(%id, "endpoint hit: get_article");
    let store = state.store.lock().await;
    store
        .find_by_id(&id)
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// Appends a new article and echoes it back.
///
/// `POST /article`
pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<Article>, ApiError> {
    let article = decode_article(payload)?;
    tracing::info!(id = %article.id, "endpoint hit: create_article");
    let mut store = state.store.lock().await;
    store.append(article.clone());
    Ok(Json(article))
}

/// Overwrites title, desc and content of the article whose id is in the body.
///
/// `PUT /update_article`
pub async fn update_article(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<Article>, ApiError> {
    let article = decode_article(payload)?;
    let (id, fields) = article.into_parts();
    tracing::info!(%id, "endpoint hit: update_article");
    let mut store = state.store.lock().await;
    store
        .update_by_id(&id, fields)
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// Removes the first article with the given id.
///
/// `DELETE /delete_article/{id}`
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(%id, "endpoint hit: delete_article");
    let mut store = state.store.lock().await;
    if store.remove_by_id(&id) {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(id))
    }
}
