//! HTTP routes of the dashboard

use crate::error::{ApiError, ApiResult};
use crate::layout::{render_page, sport_fragment};
use crate::state::{AppState, RenderedFigure};
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use olympics_common::{DashboardError, Result};
use olympics_graphs::FigureId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

#[derive(Debug, Deserialize)]
pub struct SportQuery {
    pub sport: Option<String>,
}

/// Entry of `GET /api/figures`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FigureSummary {
    pub id: String,
    pub title: String,
}

/// All routes with tracing and permissive CORS
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/figures/sport", get(sport_section))
        .route("/api/sports", get(list_sports))
        .route("/api/figures", get(list_figures))
        .route("/api/figures/:id", get(figure_data))
        .route("/api/figures/:id/svg", get(figure_svg))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Bind `host:port` and serve until Ctrl-C
pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    info!(address = %listener.local_addr()?, "Dashboard listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl-C");
    }
}

/// Build the sport figures off the async executor
async fn render_sport(state: AppState, sport: String) -> ApiResult<Vec<RenderedFigure>> {
    if sport.trim().is_empty() {
        return Err(DashboardError::validation_field("Sport cannot be empty", "sport").into());
    }
    let figures = tokio::task::spawn_blocking(move || state.sport_figures(&sport)).await??;
    Ok(figures)
}

fn parse_static_id(id: &str) -> ApiResult<FigureId> {
    let id: FigureId = id.parse()?;
    if id.is_sport_figure() {
        return Err(DashboardError::not_found(format!("static figure '{id}'")).into());
    }
    Ok(id)
}

fn static_figure<'a>(state: &'a AppState, id: &str) -> ApiResult<&'a RenderedFigure> {
    let id = parse_static_id(id)?;
    state
        .figure(id)
        .ok_or_else(|| DashboardError::not_found(format!("figure '{id}'")).into())
}

async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let sport = state.config().dashboard.default_sport.clone();
    // The page still loads when the default sport is absent from the data
    let figures = match render_sport(state.clone(), sport).await {
        Ok(figures) => figures,
        Err(ApiError::Dashboard(err)) if err.is_not_found() => Vec::new(),
        Err(err) => return Err(err),
    };
    Ok(Html(render_page(&state, &figures)))
}

#[instrument(skip(state))]
async fn sport_section(
    State(state): State<AppState>,
    Query(query): Query<SportQuery>,
) -> ApiResult<Html<String>> {
    let sport = query
        .sport
        .unwrap_or_else(|| state.config().dashboard.default_sport.clone());
    let figures = render_sport(state, sport).await?;
    Ok(Html(sport_fragment(&figures)))
}

async fn list_sports(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.bundle().all.sports())
}

async fn list_figures(State(state): State<AppState>) -> Json<Vec<FigureSummary>> {
    Json(
        state
            .figures()
            .iter()
            .map(|f| FigureSummary {
                id: f.id().to_string(),
                title: f.title().to_string(),
            })
            .collect(),
    )
}

async fn figure_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let figure = static_figure(&state, &id)?;
    Ok(Json(figure.figure.data.clone()))
}

async fn figure_svg(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let figure = static_figure(&state, &id)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], figure.svg.clone()))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "rows": state.bundle().all.len() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_figures_are_not_static() {
        assert!(parse_static_id("top-sports").is_ok());
        assert_eq!(
            parse_static_id("weight-height").unwrap_err().status(),
            axum::http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            parse_static_id("nope").unwrap_err().status(),
            axum::http::StatusCode::NOT_FOUND
        );
    }
}
