//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use super::dto::{HealthResponse, PageQuery, ProductDto};
use super::error::AppError;
use super::helpers;
use super::state::AppState;
use crate::api::ProductId;

/// Entity name carried in alert headers and error params.
pub const ENTITY_NAME: &str = "produto";

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.service.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Produto CRUD
// =============================================================================

/// POST /api/produtos
///
/// Create a new produto. A payload that already carries an id is rejected
/// with 400 and the `idexists` error key; otherwise responds 201 with a
/// Location header and a creation alert.
pub async fn create_produto(
    State(state): State<AppState>,
    Json(produto): Json<ProductDto>,
) -> Result<Response, AppError> {
    debug!("REST request to save Produto : {:?}", produto);
    if produto.id.is_some() {
        return Err(AppError::bad_request_alert(
            ENTITY_NAME,
            "idexists",
            "A new produto cannot already have an ID",
        ));
    }

    let result = state.service.save(produto).await?;
    let id = result
        .id
        .ok_or_else(|| AppError::Internal("Saved produto has no id".to_string()))?;

    let mut headers = helpers::create_entity_creation_alert(ENTITY_NAME, &id.to_string());
    if let Ok(location) = HeaderValue::from_str(&format!("/api/produtos/{}", id)) {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(result)).into_response())
}

/// PUT /api/produtos
///
/// Update an existing produto. A payload without an id falls through to the
/// create path and gets the 201 treatment.
pub async fn update_produto(
    State(state): State<AppState>,
    Json(produto): Json<ProductDto>,
) -> Result<Response, AppError> {
    debug!("REST request to update Produto : {:?}", produto);
    let Some(id) = produto.id else {
        return create_produto(State(state), Json(produto)).await;
    };

    let result = state.service.save(produto).await?;
    let headers = helpers::create_entity_update_alert(ENTITY_NAME, &id.to_string());

    Ok((StatusCode::OK, headers, Json(result)).into_response())
}

/// GET /api/produtos
///
/// Get a page of produtos. The body carries the page content only; the page
/// metadata travels in the `Link` and `X-Total-Count` headers.
pub async fn get_all_produtos(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    debug!("REST request to get a page of Produtos");
    let page_request = query.into_page_request().map_err(AppError::BadRequest)?;
    let page = state.service.find_all(&page_request).await?;

    let headers = helpers::generate_pagination_headers(&page, "/api/produtos");

    Ok((StatusCode::OK, headers, Json(page.content)).into_response())
}

/// GET /api/produtos/{id}
///
/// Get the "id" produto, or an empty-body 404 when it does not exist.
pub async fn get_produto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    debug!("REST request to get Produto : {}", id);
    let produto = state.service.find_one(ProductId::new(id)).await?;
    Ok(helpers::wrap_or_not_found(produto))
}

/// DELETE /api/produtos/{id}
///
/// Delete the "id" produto. Always responds 200 with a deletion alert, even
/// when the id was never stored.
pub async fn delete_produto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    debug!("REST request to delete Produto : {}", id);
    state.service.delete(ProductId::new(id)).await?;

    let headers = helpers::create_entity_deletion_alert(ENTITY_NAME, &id.to_string());
    Ok((StatusCode::OK, headers).into_response())
}
