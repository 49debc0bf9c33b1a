//! HTTP server mode for the paginated record list

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::forms::{SearchForm, Validator};
use crate::listing::RecordSource;
use crate::pagination::{effective_page_len, Pagination};
use crate::types::QueryParams;

/// App state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Where rows and counts come from
    pub source: Arc<dyn RecordSource>,
    /// Rows per page
    pub page_len: i64,
}

impl AppState {
    /// Create state for a record source
    pub fn new(source: Arc<dyn RecordSource>, page_len: i64) -> Self {
        Self { source, page_len }
    }
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }
}

impl ApiResponse<()> {
    fn error(msg: impl Into<String>, details: Option<Value>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
            details,
        }
    }
}

/// Build the router
pub fn router(state: AppState) -> Router {
    // Build CORS layer - read-only API, any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/records", get(list_records))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: &AppConfig, source: Arc<dyn RecordSource>) -> Result<()> {
    let addr = config.socket_addr()?;
    let app = router(AppState::new(source, config.list.page_len));

    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// List one page of records matching the query's filters
///
/// The whole query string, filters and unknown keys included, is handed to
/// the pagination so the pager links reproduce it.
async fn list_records(State(state): State<Arc<AppState>>, RawQuery(query): RawQuery) -> Response {
    let params = QueryParams::parse(query.as_deref().unwrap_or_default());

    let mut form = match SearchForm::decode(&params, chrono::Utc::now().date_naive()) {
        Ok(form) => form,
        Err(e) => return error_response(&e),
    };

    let mut validator = Validator::new();
    form.validate(&mut validator);
    if let Err(e) = validator.into_result() {
        return error_response(&e);
    }

    let total = match state.source.count(&form).await {
        Ok(total) => total,
        Err(e) => return error_response(&e),
    };

    let pagination = match Pagination::new(state.page_len, total, form.page, params) {
        Ok(pagination) => pagination,
        Err(e) => {
            tracing::warn!(requested = e.requested, max = e.max, "rejected page request");
            return error_response(&Error::from(e));
        }
    };

    let limit = effective_page_len(state.page_len);
    let offset = form.offset(state.page_len);
    let records = match state.source.fetch(&form, limit, offset).await {
        Ok(records) => records,
        Err(e) => return error_response(&e),
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(json!({
            "type": "RECORDS",
            "total": total,
            "records": records,
            "pagination": pagination,
            "next_url": pagination.next_url(),
            "previous_url": pagination.previous_url(),
        }))),
    )
        .into_response()
}

/// Map an error to a JSON error response
fn error_response(err: &Error) -> Response {
    let details = match err {
        Error::InvalidPageNumber(e) => Some(json!({ "requested": e.requested, "max": e.max })),
        Error::Validation { errors } => Some(json!(errors)),
        Error::InvalidQueryParam { field, value } => {
            Some(json!({ "field": field, "value": value }))
        }
        _ => None,
    };

    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!("list request failed: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(ApiResponse::<()>::error(err.to_string(), details))).into_response()
}
