use crate::{
    dto::{VisitorCountResponse, VisitorsQuery},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_visitors")]
pub async fn get_visitors(
    State(state): State<AppState>,
    Query(params): Query<VisitorsQuery>,
) -> Result<Json<VisitorCountResponse>, ApiError> {
    let count = state.count_visitors.execute(params.scope.as_deref()).await?;
    debug!(window = %count.window, value = count.value, "Visitor count served");
    Ok(Json(count.into()))
}
