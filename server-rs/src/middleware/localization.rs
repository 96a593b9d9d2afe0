use axum::{
    extract::{Query, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::format::DisplayLocale;
use crate::AppState;

#[derive(Deserialize)]
struct LocaleQuery {
    locale: Option<String>,
}

/// `Accept-Language` tags ordered by descending `q`, header order breaking ties.
/// Entries with `q=0` are dropped.
fn accept_language_tags(value: &str) -> Vec<String> {
    let mut weighted: Vec<(String, f32)> = value
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let q = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|v| v.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((tag.to_string(), q))
        })
        .filter(|(_, q)| *q > 0.0)
        .collect();
    weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    weighted.into_iter().map(|(tag, _)| tag).collect()
}

/// Requested locale tags in preference order: `?locale=` first, then
/// `Accept-Language`.
fn requested_locales(req: &Request) -> Vec<String> {
    let mut tags = Vec::new();

    if let Ok(Query(LocaleQuery {
        locale: Some(locale),
    })) = Query::<LocaleQuery>::try_from_uri(req.uri())
    {
        tags.push(locale);
    }

    if let Some(al) = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
    {
        tags.extend(accept_language_tags(al));
    }

    tags
}

pub fn resolve_locale(req: &Request, default: &DisplayLocale) -> DisplayLocale {
    requested_locales(req)
        .iter()
        .find_map(|tag| DisplayLocale::for_tag(tag))
        .unwrap_or_else(|| default.clone())
}

/// Middleware: attaches the display locale for this request.
pub async fn locale_detector(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let locale = resolve_locale(&req, &state.config.display.default_locale);
    req.extensions_mut().insert(locale);
    next.run(req).await
}
