//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{
        ConfigResponse, HealthResponse, OptionsRequest, OptionsResponse, ResolveRequest,
        ResolveResponse, SelectedRequest, SelectedResponse,
    },
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use facetlink_core::{LinkResolver, shape_options};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// CONFIG HANDLER
// =============================================================================

/// Get the effective facet configuration.
pub async fn config_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(ConfigResponse::from_registry(&state.registry)))
}

// =============================================================================
// SELECTED HANDLER
// =============================================================================

/// Check whether a facet option is selected in the given filters.
pub async fn selected_handler(
    Json(request): Json<SelectedRequest>,
) -> impl IntoResponse {
    let (facet, value) = match request.to_target() {
        Ok(target) => target,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(SelectedResponse::error(format!("Invalid request: {}", e))),
            );
        }
    };

    let selected = LinkResolver::is_selected(&request.filters, &facet, &value);
    (StatusCode::OK, Json(SelectedResponse::success(selected)))
}

// =============================================================================
// RESOLVE HANDLER
// =============================================================================

/// Resolve a facet link into its target filter parameters.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> impl IntoResponse {
    let (facet, value) = match request.to_target() {
        Ok(target) => target,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ResolveResponse::error(format!("Invalid request: {}", e))),
            );
        }
    };

    // Explicit request config wins over the configured facet entry
    let config = request
        .config
        .unwrap_or_else(|| state.registry.config_for(facet.as_str()));

    let link = LinkResolver::resolve(&request.filters, &facet, &value, &config);
    (StatusCode::OK, Json(ResolveResponse::success(link)))
}

// =============================================================================
// OPTIONS HANDLER
// =============================================================================

/// Shape a facet's option buckets into link-ready view state.
pub async fn options_handler(
    State(state): State<AppState>,
    Json(request): Json<OptionsRequest>,
) -> impl IntoResponse {
    let facet = match request.to_target() {
        Ok(facet) => facet,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(OptionsResponse::error(format!("Invalid request: {}", e))),
            );
        }
    };

    let config = request
        .config
        .unwrap_or_else(|| state.registry.config_for(facet.as_str()));
    let limit = request
        .limit
        .unwrap_or_else(|| state.registry.options_limit_for(facet.as_str()));

    let states = shape_options(&facet, &request.options, &request.filters, &config, limit);
    (StatusCode::OK, Json(OptionsResponse::success(states)))
}
