use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use visitor_counter_domain::{LOOPBACK_PLACEHOLDER, MAX_CLIENT_IDENTIFIER_LEN};

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Who made the request, as stored with a visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentifier(pub String);

/// Attaches the [`ClientIdentifier`] for the page handlers. Recording is left
/// to the handler so that only pages which actually exist are counted.
pub async fn resolve_client(mut request: Request, next: Next) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client = client_identifier(request.headers(), peer);

    request.extensions_mut().insert(ClientIdentifier(client));
    next.run(request).await
}

/// `X-Forwarded-For` as sent, else the peer IP, else loopback.
pub fn client_identifier(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let raw = headers
        .get(FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| LOOPBACK_PLACEHOLDER.to_string());

    truncate_chars(raw, MAX_CLIENT_IDENTIFIER_LEN)
}

fn truncate_chars(mut s: String, max_chars: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max_chars) {
        s.truncate(idx);
    }
    s
}
