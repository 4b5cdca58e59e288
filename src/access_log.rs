use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use tracing::{Level, error, info, warn};

/// Middleware writing one access line per completed request.
pub async fn access_log(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let full_url = full_url(&request);
    let forwarded = forwarded(request.headers());

    let response = next.run(request).await;

    let status = response.status();
    let line = format_access_line(
        status,
        method.as_str(),
        &full_url,
        started.elapsed(),
        &forwarded,
    );
    let level = access_log_level(status);
    if level == Level::ERROR {
        error!(target: "access", "{}", line);
    } else if level == Level::WARN {
        warn!(target: "access", "{}", line);
    } else {
        info!(target: "access", "{}", line);
    }

    response
}

/// 404s are routine noise, so they stay at info with the successes.
pub fn access_log_level(status: StatusCode) -> Level {
    let code = status.as_u16();
    if code < 400 || code == 404 {
        Level::INFO
    } else if code < 500 {
        Level::WARN
    } else {
        Level::ERROR
    }
}

pub fn format_access_line(
    status: StatusCode,
    method: &str,
    full_url: &str,
    elapsed: Duration,
    forwarded: &str,
) -> String {
    format!(
        "{} {} {} {:.2}ms {}",
        status.as_u16(),
        method,
        full_url,
        elapsed.as_secs_f64() * 1000.0,
        forwarded
    )
}

/// Reconstructs `http://host/path?query` from the Host header.
pub fn full_url(request: &Request) -> String {
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    match request
        .headers()
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
    {
        Some(host) => format!("http://{}{}", host, path),
        None => path.to_string(),
    }
}

pub fn forwarded(headers: &HeaderMap) -> String {
    headers
        .get(header::FORWARDED)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string()
}
