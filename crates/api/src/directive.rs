//! Expansion of the `[visitors]` directive embedded in page bodies.
//!
//! `[visitors]` renders the `now` count. `[visitors scope="hour"]` selects
//! another window; the value may be double quoted, single quoted or bare. An
//! unknown scope renders an HTML diagnostic in place of the number; storage
//! failures abort the render.

use askama::Template;
use fancy_regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use visitor_counter_application::use_cases::CountVisitorsUseCase;
use visitor_counter_domain::{DomainError, UnknownWindowError};

static DIRECTIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\[visitors(?:\s+scope\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s\]"']+)))?\s*\]"#,
    )
    .expect("valid visitors directive pattern")
});

/// One directive occurrence inside a page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub span: Range<usize>,
    pub scope: Option<&'a str>,
}

/// Output of a single directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Locale-formatted count, plain text.
    Count(String),
    /// HTML fragment explaining an unknown scope.
    Diagnostic(String),
}

impl Rendered {
    pub fn into_string(self) -> String {
        match self {
            Rendered::Count(s) | Rendered::Diagnostic(s) => s,
        }
    }
}

#[derive(Template)]
#[template(path = "visitors_error.html")]
struct UnknownWindowTemplate<'a> {
    stylesheet_url: &'a str,
    requested: &'a str,
    valid_options: String,
}

/// Locates every directive in `body`. A matcher failure is returned rather
/// than leaving the remaining directives unexpanded.
pub fn find_directives(body: &str) -> Result<Vec<Directive<'_>>, DomainError> {
    let mut found = Vec::new();
    for caps in DIRECTIVE_PATTERN.captures_iter(body) {
        let caps = caps.map_err(|e| {
            DomainError::RenderError(format!("visitors directive matching failed: {}", e))
        })?;
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let scope = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str());
        found.push(Directive {
            span: whole.start()..whole.end(),
            scope,
        });
    }
    Ok(found)
}

pub async fn render(
    count_visitors: &CountVisitorsUseCase,
    scope: Option<&str>,
    stylesheet_url: &str,
) -> Result<Rendered, DomainError> {
    match count_visitors.execute(scope).await {
        Ok(count) => Ok(Rendered::Count(count.formatted)),
        Err(DomainError::UnknownWindow(e)) => {
            render_unknown_window(&e, stylesheet_url).map(Rendered::Diagnostic)
        }
        Err(e) => Err(e),
    }
}

/// Replaces every directive in `body` with its rendered output.
pub async fn expand_directives(
    body: &str,
    count_visitors: &CountVisitorsUseCase,
    stylesheet_url: &str,
) -> Result<String, DomainError> {
    let directives = find_directives(body)?;
    if directives.is_empty() {
        return Ok(body.to_string());
    }

    let mut out = String::with_capacity(body.len());
    let mut cursor = 0;
    for directive in directives {
        out.push_str(&body[cursor..directive.span.start]);
        let rendered = render(count_visitors, directive.scope, stylesheet_url).await?;
        out.push_str(&rendered.into_string());
        cursor = directive.span.end;
    }
    out.push_str(&body[cursor..]);
    Ok(out)
}

/// HTML diagnostic for an unknown scope. Interpolated values are escaped.
pub fn render_unknown_window(
    err: &UnknownWindowError,
    stylesheet_url: &str,
) -> Result<String, DomainError> {
    UnknownWindowTemplate {
        stylesheet_url,
        requested: &err.requested,
        valid_options: err.valid_options.join(", "),
    }
    .render()
    .map_err(|e| DomainError::RenderError(e.to_string()))
}
