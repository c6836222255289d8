//! Route handler functions for all API endpoints.
//!
//! Each handler extracts query/path/body input via axum extractors, calls
//! into the domain crates held by [`AppState`], and returns JSON.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use ppemarts_calc::state::{DEFAULT_WORKERS, DEFAULT_WORK_DAYS};
use ppemarts_calc::{Calculation, CalculatorState};
use ppemarts_core::equipment::{self, EquipmentItemView};
use ppemarts_core::{Category, ConversationTurn, EquipmentKey, Preset, Product, ShareLinks};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Absent and `null` both mean no prior turns.
    #[serde(default)]
    pub history: Option<Vec<ConversationTurn>>,
}

#[derive(Debug, Deserialize)]
pub struct ProductsParams {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShareParams {
    pub url: Option<String>,
}

fn default_workers() -> u32 {
    DEFAULT_WORKERS
}

fn default_work_days() -> u32 {
    DEFAULT_WORK_DAYS
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    #[serde(default = "default_workers")]
    pub workers: u32,
    #[serde(default = "default_work_days")]
    pub work_days: u32,
    pub preset: Preset,
    /// Used only when `preset` is `custom`.
    #[serde(default)]
    pub items: Vec<EquipmentKey>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub text: String,
    pub recommendations: Vec<&'static Product>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<&'static Product>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct EquipmentResponse {
    pub items: Vec<EquipmentItemView>,
}

#[derive(Debug, Serialize)]
pub struct PresetInfo {
    pub name: Preset,
    pub items: &'static [EquipmentKey],
}

#[derive(Debug, Serialize)]
pub struct PresetsResponse {
    pub presets: Vec<PresetInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub completion_configured: bool,
    pub products: usize,
}

// =============================================================================
// Assistant
// =============================================================================

/// POST /api/ai-assistant - reply to a visitor message with recommendations.
pub async fn assistant(
    State(state): State<AppState>,
    payload: Result<Json<AssistantRequest>, JsonRejection>,
) -> Result<Json<AssistantResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let message = request.message.unwrap_or_default();
    let history = request.history.unwrap_or_default();

    let text = state.responder.respond(&message, &history).await?;

    let recommendations = {
        let mut rng = rand::rng();
        state
            .recommender
            .recommend(&message, state.catalog.all(), &mut rng)
    };

    tracing::info!(
        history = history.len(),
        recommendations = recommendations.len(),
        "Assistant request answered"
    );

    Ok(Json(AssistantResponse {
        text,
        recommendations,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Any other method on /api/ai-assistant.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /api/products - catalog, optionally filtered by `category`.
pub async fn products(
    State(state): State<AppState>,
    Query(params): Query<ProductsParams>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let category = match params.category.as_deref().map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(name) => Some(name.parse::<Category>()?),
    };

    let products = state.catalog.filter(category);
    Ok(Json(ProductsResponse {
        total: products.len(),
        products,
    }))
}

/// GET /api/products/{id} - one product.
pub async fn product(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<&'static Product>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::BadRequest("Product id must be a number".to_string()))?;
    state
        .catalog
        .by_id(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id)))
}

/// GET /api/categories - every product category.
pub async fn categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: Category::ALL.to_vec(),
    })
}

// =============================================================================
// Calculator
// =============================================================================

/// GET /api/equipment - consumption table.
pub async fn equipment() -> Json<EquipmentResponse> {
    Json(EquipmentResponse {
        items: equipment::items().iter().map(EquipmentItemView::from).collect(),
    })
}

/// GET /api/presets - named equipment sets.
pub async fn presets() -> Json<PresetsResponse> {
    Json(PresetsResponse {
        presets: Preset::ALL
            .into_iter()
            .map(|preset| PresetInfo {
                name: preset,
                items: preset.members(),
            })
            .collect(),
    })
}

/// GET /api/calculator - initial calculator form values.
pub async fn calculator_defaults() -> Json<CalculatorState> {
    Json(CalculatorState::default())
}

/// POST /api/calculate - compute requirements for a preset or custom list.
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<Calculation>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let mut form = CalculatorState {
        workers: request.workers,
        work_days: request.work_days,
        preset: request.preset,
        custom_items: request.items,
        results: None,
    };
    let calculation = form.compute(&state.calculator)?.clone();

    tracing::debug!(
        preset = %request.preset,
        total = calculation.total,
        "Calculation served"
    );

    Ok(Json(calculation))
}

// =============================================================================
// Share / health
// =============================================================================

/// GET /api/share - social share links for `url`.
pub async fn share(Query(params): Query<ShareParams>) -> Result<Json<ShareLinks>, ApiError> {
    let url = params
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Parameter 'url' is required".to_string()))?;
    Ok(Json(ShareLinks::for_url(&url)))
}

/// GET /health - liveness and basic service info.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        completion_configured: state.responder.has_completion(),
        products: state.catalog.len(),
    })
}

/// Fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
