//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the application services.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};

use crate::application::dto::{
    ConsistencyForm, ExpectancyForm, MonteCarloForm, RecordTradeDto, RiskForm,
};
use crate::application::services::{CalculatorService, JournalService};
use crate::domain::journal::{Trade, TradeRepository, UserId};
use crate::domain::simulation::SimulationResult;
use crate::error::ApiError;

use super::request::{CalendarPath, UserPath};
use super::response::{
    ConsistencyResponse, ExpectancyResponse, HealthResponse, RiskResponse, StatsResponse,
    TradesResponse,
};

/// Application state shared across handlers.
pub struct AppState<R>
where
    R: TradeRepository,
{
    /// Journal queries and commands.
    pub journal: JournalService<R>,
    /// Configured calculators.
    pub calculators: CalculatorService,
    /// Application version.
    pub version: String,
}

impl<R> Clone for AppState<R>
where
    R: TradeRepository,
{
    fn clone(&self) -> Self {
        Self {
            journal: self.journal.clone(),
            calculators: self.calculators.clone(),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: TradeRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/trades", post(record_trade))
        .route("/api/v1/users/{user_id}/trades", get(list_trades))
        .route("/api/v1/users/{user_id}/stats", get(journal_stats))
        .route(
            "/api/v1/users/{user_id}/calendar/{year}/{month}",
            get(month_calendar),
        )
        .route("/api/v1/users/{user_id}/export", get(export_csv))
        .route("/api/v1/calculators/expectancy", post(expectancy))
        .route("/api/v1/calculators/monte-carlo", post(monte_carlo))
        .route("/api/v1/calculators/risk", post(risk_sizing))
        .route("/api/v1/calculators/consistency", post(consistency))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<R>(State(state): State<AppState<R>>) -> impl IntoResponse
where
    R: TradeRepository,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Record a trade.
async fn record_trade<R>(
    State(state): State<AppState<R>>,
    Json(request): Json<RecordTradeDto>,
) -> Result<(StatusCode, Json<Trade>), ApiError>
where
    R: TradeRepository,
{
    let trade = state.journal.record_trade(request).await?;
    Ok((StatusCode::CREATED, Json(trade)))
}

/// List a user's trades.
async fn list_trades<R>(
    State(state): State<AppState<R>>,
    Path(path): Path<UserPath>,
) -> Result<Json<TradesResponse>, ApiError>
where
    R: TradeRepository,
{
    let trades = state.journal.trades_for(&path.user_id()).await?;
    Ok(Json(TradesResponse {
        count: trades.len(),
        user_id: path.user_id,
        trades,
    }))
}

/// Journal statistics for a user.
async fn journal_stats<R>(
    State(state): State<AppState<R>>,
    Path(path): Path<UserPath>,
) -> Result<Json<StatsResponse>, ApiError>
where
    R: TradeRepository,
{
    let stats = state.journal.stats_for(&path.user_id()).await?;
    Ok(Json(StatsResponse::from(stats)))
}

/// Month calendar for a user.
async fn month_calendar<R>(
    State(state): State<AppState<R>>,
    Path(path): Path<CalendarPath>,
) -> Result<impl IntoResponse, ApiError>
where
    R: TradeRepository,
{
    let user_id = UserId::new(path.user_id);
    let calendar = state
        .journal
        .calendar_for(&user_id, path.year, path.month)
        .await?;
    Ok(Json(calendar))
}

/// CSV export of a user's trades.
async fn export_csv<R>(
    State(state): State<AppState<R>>,
    Path(path): Path<UserPath>,
) -> Result<impl IntoResponse, ApiError>
where
    R: TradeRepository,
{
    let csv = state.journal.export_csv(&path.user_id()).await?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv))
}

/// Expectancy projection.
async fn expectancy<R>(
    State(state): State<AppState<R>>,
    Json(form): Json<ExpectancyForm>,
) -> Json<ExpectancyResponse>
where
    R: TradeRepository,
{
    Json(ExpectancyResponse::from(state.calculators.expectancy(&form)))
}

/// Monte Carlo simulation.
///
/// Runs on the blocking pool; large runs take milliseconds of pure CPU.
async fn monte_carlo<R>(
    State(state): State<AppState<R>>,
    Json(form): Json<MonteCarloForm>,
) -> Result<Json<SimulationResult>, ApiError>
where
    R: TradeRepository,
{
    let calculators = state.calculators.clone();
    let result = tokio::task::spawn_blocking(move || calculators.monte_carlo(&form))
        .await
        .map_err(|e| ApiError::internal(format!("Simulation task failed: {e}")))?;
    Ok(Json(result))
}

/// Risk sizing.
async fn risk_sizing<R>(
    State(state): State<AppState<R>>,
    Json(form): Json<RiskForm>,
) -> Json<RiskResponse>
where
    R: TradeRepository,
{
    Json(RiskResponse::from(state.calculators.risk(&form)))
}

/// Consistency rule.
async fn consistency<R>(
    State(state): State<AppState<R>>,
    Json(form): Json<ConsistencyForm>,
) -> Json<ConsistencyResponse>
where
    R: TradeRepository,
{
    Json(ConsistencyResponse::from(state.calculators.consistency(&form)))
}
