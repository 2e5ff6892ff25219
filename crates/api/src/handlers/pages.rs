use crate::{directive, errors::ApiError, middleware::ClientIdentifier, state::AppState};
use axum::{
    extract::{Path, State},
    response::Html,
    Extension,
};
use std::io::ErrorKind;
use tracing::{debug, error, instrument};
use visitor_counter_domain::DomainError;

const INDEX_PAGE: &str = "index";
const MAX_PAGE_NAME_LEN: usize = 64;

#[instrument(skip(state))]
pub async fn get_index(
    State(state): State<AppState>,
    Extension(client): Extension<ClientIdentifier>,
) -> Result<Html<String>, ApiError> {
    render_page(&state, &client, INDEX_PAGE).await
}

#[instrument(skip(state))]
pub async fn get_page(
    State(state): State<AppState>,
    Extension(client): Extension<ClientIdentifier>,
    Path(page): Path<String>,
) -> Result<Html<String>, ApiError> {
    let name = page.strip_suffix(".html").unwrap_or(&page);
    if !is_valid_page_name(name) {
        return Err(DomainError::NotFound(format!("Page '{}' not found", page)).into());
    }
    render_page(&state, &client, name).await
}

pub fn is_valid_page_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_PAGE_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Reads the page, records the visit, then expands directives so the page
/// counts its own load.
async fn render_page(
    state: &AppState,
    client: &ClientIdentifier,
    name: &str,
) -> Result<Html<String>, ApiError> {
    let path = state.pages_dir.join(format!("{}.html", name));

    let body = tokio::fs::read_to_string(&path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            DomainError::NotFound(format!("Page '{}' not found", name))
        } else {
            error!(error = %e, path = %path.display(), "Failed to read page");
            DomainError::IoError(e.to_string())
        }
    })?;

    state.record_visit.execute(&client.0).await?;

    let html =
        directive::expand_directives(&body, &state.count_visitors, &state.stylesheet_url).await?;
    debug!(page = name, bytes = html.len(), "Page rendered");
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_names() {
        assert!(is_valid_page_name("index"));
        assert!(is_valid_page_name("about-us_2"));
        assert!(!is_valid_page_name(""));
        assert!(!is_valid_page_name("../secret"));
        assert!(!is_valid_page_name("a.b"));
        assert!(!is_valid_page_name(&"x".repeat(65)));
    }
}
