use crate::api::routes::AppState;
use crate::errors::AppError;
use crate::observability::MetricsRecorder;
use crate::rate_limit::limiter::RateLimitDecision;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

/// Rate limiting middleware
///
/// Keyed purely by client identifier: every route mounted behind this
/// layer draws from the same per-client quota.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identifier = extract_identifier(&headers, connect_info.map(|ConnectInfo(addr)| addr));

    let decision = state.limiter.check_and_increment(&identifier);
    MetricsRecorder::set_tracked_clients(state.limiter.tracked_clients() as i64);

    match decision {
        RateLimitDecision::RateLimited {
            retry_after_secs, ..
        } => {
            tracing::warn!(
                identifier = %identifier,
                retry_after_secs,
                "Rate limit exceeded"
            );
            MetricsRecorder::record_rate_limit_exceeded();

            Err(AppError::RateLimitExceeded { retry_after_secs })
        }
        RateLimitDecision::Allowed {
            limit,
            remaining,
            reset_ms,
        } => {
            let mut response = next.run(request).await;
            add_rate_limit_headers(response.headers_mut(), limit, remaining, reset_ms);
            Ok(response)
        }
    }
}

/// Extract the client identifier from proxy headers or the peer address
fn extract_identifier(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(forwarded_for) = headers.get("x-forwarded-for") {
        if let Ok(value) = forwarded_for.to_str() {
            let first_hop = value.split(',').next().unwrap_or("").trim();
            if !first_hop.is_empty() {
                return format!("ip:{}", first_hop);
            }
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip") {
        if let Ok(ip) = real_ip.to_str() {
            return format!("ip:{}", ip);
        }
    }

    match peer {
        Some(addr) => format!("ip:{}", addr.ip()),
        None => "ip:unknown".to_string(),
    }
}

/// Add rate limit headers to an allowed response
fn add_rate_limit_headers(headers: &mut HeaderMap, limit: u32, remaining: u32, reset_ms: u64) {
    use axum::http::header::HeaderName;
    use axum::http::HeaderValue;

    // X-RateLimit-Limit: maximum number of requests allowed in the window
    if let Ok(value) = HeaderValue::from_str(&limit.to_string()) {
        headers.insert(HeaderName::from_static("x-ratelimit-limit"), value);
    }

    // X-RateLimit-Remaining: number of requests remaining
    if let Ok(value) = HeaderValue::from_str(&remaining.to_string()) {
        headers.insert(HeaderName::from_static("x-ratelimit-remaining"), value);
    }

    // X-RateLimit-Reset: Unix timestamp when the window resets
    if let Ok(value) = HeaderValue::from_str(&(reset_ms / 1000).to_string()) {
        headers.insert(HeaderName::from_static("x-ratelimit-reset"), value);
    }
}
