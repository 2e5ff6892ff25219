use crate::{
    directive::{self, Rendered},
    dto::VisitorsQuery,
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use tracing::instrument;

/// Standalone rendering of the directive. Diagnostics are returned with 200
/// since they are meant to be shown inline.
#[instrument(skip(state), name = "embed_visitors")]
pub async fn get_embed_visitors(
    State(state): State<AppState>,
    Query(params): Query<VisitorsQuery>,
) -> Result<Response, ApiError> {
    let rendered = directive::render(
        &state.count_visitors,
        params.scope.as_deref(),
        &state.stylesheet_url,
    )
    .await?;

    Ok(match rendered {
        Rendered::Count(text) => {
            ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response()
        }
        Rendered::Diagnostic(html) => Html(html).into_response(),
    })
}
