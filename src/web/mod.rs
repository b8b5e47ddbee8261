//! Web API module for the assembly viewer.
//!
//! This module exposes the abstract UI event surface as a small REST API:
//! every user interaction is one POST, and every successful response is the
//! complete recomputed view state — there are no partial updates. The
//! embedded frontend is served alongside the API.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/view` - Current fully-derived view state
//! - `POST /api/step/select` - Jump directly to a step
//! - `POST /api/step/navigate` - Prev/next arrow navigation
//! - `POST /api/panel` - Minimize or maximize a panel

pub mod static_files;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::dataset::Datasets;
use crate::geometry::MeshLibrary;
use crate::session::{NavDirection, PanelAction, PanelId, SessionState, UiEvent};
use crate::view::{self, RenderError, ViewState};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration (immutable after startup).
    config: Arc<Config>,
    /// Mesh library resolving object names (immutable after startup).
    resolver: Arc<MeshLibrary>,
    /// The one viewer session of this server process.
    session: Arc<Mutex<SessionState>>,
}

impl AppState {
    /// Creates the application state: loads both datasets, builds the mesh
    /// library, and initializes a fresh session at the first step.
    ///
    /// Any dataset problem is fatal here — there is no partial-data mode.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let datasets = Arc::new(Datasets::load(&config.data_dir())?);
        let resolver = Arc::new(MeshLibrary::new(config.models_dir()));

        // Every object name referenced by a step must be resolvable.
        let missing = resolver.missing_objects(&datasets.referenced_object_names());
        if !missing.is_empty() {
            warn!("steps reference objects without mesh files: {missing:?}");
        }

        let session = SessionState::new(datasets)?;
        Ok(Self {
            config: Arc::new(config),
            resolver,
            session: Arc::new(Mutex::new(session)),
        })
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Request body for `POST /api/step/select`.
#[derive(Debug, Deserialize)]
pub struct SelectStepRequest {
    /// Key of the step to activate.
    pub step_id: String,
}

/// Request body for `POST /api/step/navigate`.
#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    /// Which arrow was clicked.
    pub direction: NavDirection,
}

/// Request body for `POST /api/panel`.
#[derive(Debug, Deserialize)]
pub struct PanelRequest {
    /// The panel being toggled.
    pub panel: PanelId,
    /// Minimize or maximize.
    pub action: PanelAction,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/view - Current fully-derived view state.
async fn get_view(State(state): State<AppState>) -> ApiResult<ViewState> {
    let session = state
        .session
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let view = view::render(&state.config, &session, state.resolver.as_ref())
        .map_err(render_error_response)?;
    Ok(Json(view))
}

/// POST /api/step/select - Jump directly to a step.
async fn select_step(
    State(state): State<AppState>,
    Json(request): Json<SelectStepRequest>,
) -> ApiResult<ViewState> {
    apply_event(
        &state,
        UiEvent::SelectStep {
            step_id: request.step_id,
        },
    )
}

/// POST /api/step/navigate - Prev/next arrow navigation.
async fn navigate(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> ApiResult<ViewState> {
    apply_event(
        &state,
        UiEvent::Navigate {
            direction: request.direction,
        },
    )
}

/// POST /api/panel - Minimize or maximize a panel.
async fn toggle_panel(
    State(state): State<AppState>,
    Json(request): Json<PanelRequest>,
) -> ApiResult<ViewState> {
    apply_event(
        &state,
        UiEvent::Panel {
            panel: request.panel,
            action: request.action,
        },
    )
}

/// Applies one event and returns the recomputed view state.
///
/// The event runs against a scratch copy of the session; the copy replaces
/// the live session only once derivation has succeeded. A rejected event or
/// a failed derivation therefore leaves the prior state fully intact.
fn apply_event(state: &AppState, event: UiEvent) -> ApiResult<ViewState> {
    let mut session = state
        .session
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    let mut next = session.clone();
    next.apply(&event).map_err(|err| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::with_details("Unknown step id", err.to_string())),
        )
    })?;

    let view = view::render(&state.config, &next, state.resolver.as_ref())
        .map_err(render_error_response)?;

    *session = next;
    Ok(Json(view))
}

/// Maps a derivation failure to an HTTP error response.
fn render_error_response(err: RenderError) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::with_details(
            "Failed to derive view state",
            err.to_string(),
        )),
    )
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for development.
    // The server is designed to run locally on the user's machine alongside
    // the frontend; restrict origins before deploying anywhere shared.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // View state and event surface
        .route("/api/view", get(get_view))
        .route("/api/step/select", post(select_step))
        .route("/api/step/navigate", post(navigate))
        .route("/api/panel", post(toggle_panel))
        // Embedded frontend
        .fallback(static_files::serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the datasets fail to load or the server fails to
/// start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let app = create_router(state);

    info!("Starting assembly viewer on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
