use crate::dtos::{MenuListResponse, MenuResponse, SpinParams, SpinResponse};
use crate::error::MenuError;
use crate::services::metrics::{record_data_error, record_pick};
use crate::startup::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use service_core::error::AppError;
use validator::Validate;

fn data_error(err: MenuError) -> AppError {
    record_data_error(&err);
    tracing::error!(kind = err.kind(), error = %err, "Failed to load menu catalog");
    AppError::from(err)
}

#[tracing::instrument(skip(state))]
pub async fn random_menu(State(state): State<AppState>) -> Result<Json<MenuResponse>, AppError> {
    let menu = state.picker.pick_random().await.map_err(data_error)?;
    record_pick("random");

    tracing::debug!(menu = %menu, "Random menu picked");

    Ok(Json(MenuResponse { menu }))
}

#[tracing::instrument(skip(state))]
pub async fn list_menus(
    State(state): State<AppState>,
) -> Result<Json<MenuListResponse>, AppError> {
    let catalog = state.picker.list_menus().await.map_err(data_error)?;

    tracing::debug!(count = catalog.len(), "Menu catalog listed");

    Ok(Json(MenuListResponse::from(catalog)))
}

#[tracing::instrument(skip(state, params))]
pub async fn spin_menu(
    State(state): State<AppState>,
    params: Result<Query<SpinParams>, QueryRejection>,
) -> Result<Json<SpinResponse>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(anyhow::anyhow!(e.body_text())))?;
    params.validate()?;
    let ticks = params.tick_count();

    let spin = state
        .picker
        .spin(params.seed.as_deref(), ticks)
        .await
        .map_err(data_error)?;
    record_pick("spin");

    tracing::info!(
        seeded = params.seed.is_some(),
        ticks,
        result = %spin.result,
        duration_ms = spin.duration_ms,
        "Roulette spun"
    );

    Ok(Json(SpinResponse::from(spin)))
}
