//! Access logging middleware.
//!
//! Every request produces two lines on the access channel:
//!
//! ```text
//! A GET /ows            (or N for anonymous requests)
//! R GET /ows 200 OK
//! ```
//!
//! The response line keeps a trailing space after the reason phrase.
//! Both carry the `remote_addr` and `username` fields (`-` when unknown).
//! The request line and successful responses use the authenticated or
//! unauthenticated level; 4xx responses log at WARN and 5xx at ERROR.
//!
//! A handler that changes who is logged in (logout) reports the new user as
//! a [`RequestUser`] response extension. The level of the response line then
//! follows that user while the `username` field keeps the one of the request.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use allauth_auth::RequestUser;
use allauth_core::config::{AccessChannel, AccessConfig, AccessLevel};

/// One access log line with its context fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRecord {
    /// Client address, `-` when unknown.
    pub remote_addr: String,
    /// Authenticated username, `-` for anonymous requests.
    pub username: String,
    /// The line itself, e.g. `N GET /ows`.
    pub message: String,
}

/// Destination of access log lines.
pub trait AccessSink: Send + Sync + 'static {
    /// Emits one line at the given level.
    fn log(&self, level: AccessLevel, record: &AccessRecord);
}

/// Emits access lines as tracing events targeted at the configured channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAccessSink {
    channel: AccessChannel,
}

impl TracingAccessSink {
    /// Creates a sink writing to `channel`.
    pub fn new(channel: AccessChannel) -> Self {
        Self { channel }
    }
}

// tracing needs the target and the level as constants
macro_rules! emit {
    ($target:literal, $level:expr, $record:expr) => {{
        let r = $record;
        match $level {
            AccessLevel::Trace => tracing::trace!(target: $target, remote_addr = %r.remote_addr, username = %r.username, "{}", r.message),
            AccessLevel::Debug => tracing::debug!(target: $target, remote_addr = %r.remote_addr, username = %r.username, "{}", r.message),
            AccessLevel::Info => tracing::info!(target: $target, remote_addr = %r.remote_addr, username = %r.username, "{}", r.message),
            AccessLevel::Warn => tracing::warn!(target: $target, remote_addr = %r.remote_addr, username = %r.username, "{}", r.message),
            AccessLevel::Error => tracing::error!(target: $target, remote_addr = %r.remote_addr, username = %r.username, "{}", r.message),
        }
    }};
}

impl AccessSink for TracingAccessSink {
    fn log(&self, level: AccessLevel, record: &AccessRecord) {
        match self.channel {
            AccessChannel::Access => emit!("access", level, record),
            AccessChannel::Legacy => emit!("eoxs_allauth.access", level, record),
        }
    }
}

/// Access logger: a sink plus the levels used for non-error traffic.
#[derive(Clone)]
pub struct AccessLogger {
    sink: Arc<dyn AccessSink>,
    level_authenticated: AccessLevel,
    level_unauthenticated: AccessLevel,
}

impl AccessLogger {
    /// Creates a logger writing to `sink` with the configured levels.
    pub fn new(sink: Arc<dyn AccessSink>, config: &AccessConfig) -> Self {
        Self {
            sink,
            level_authenticated: config.level_authenticated,
            level_unauthenticated: config.level_unauthenticated,
        }
    }

    /// Creates a logger emitting tracing events on the configured channel.
    pub fn from_config(config: &AccessConfig) -> Self {
        Self::new(Arc::new(TracingAccessSink::new(config.channel)), config)
    }

    /// Same sink, different levels. Used for routes that should log
    /// more quietly than the rest, such as the health check.
    pub fn with_levels(&self, authenticated: AccessLevel, unauthenticated: AccessLevel) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            level_authenticated: authenticated,
            level_unauthenticated: unauthenticated,
        }
    }

    /// Level of the request line and of responses below 400.
    pub fn request_level(&self, authenticated: bool) -> AccessLevel {
        if authenticated {
            self.level_authenticated
        } else {
            self.level_unauthenticated
        }
    }

    /// Level of the response line.
    pub fn response_level(&self, status: StatusCode, authenticated: bool) -> AccessLevel {
        match status.as_u16() {
            0..=399 => self.request_level(authenticated),
            400..=499 => AccessLevel::Warn,
            _ => AccessLevel::Error,
        }
    }

    fn emit(&self, level: AccessLevel, remote_addr: &str, username: &str, message: String) {
        self.sink.log(
            level,
            &AccessRecord {
                remote_addr: remote_addr.to_string(),
                username: username.to_string(),
                message,
            },
        );
    }
}

/// Client address: first `X-Forwarded-For` entry when present, else the
/// peer address.
pub fn remote_addr(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    forwarded.or_else(|| peer.map(|addr| addr.ip().to_string()))
}

/// Logs the request before and the response after the inner handler.
/// The response is passed through untouched.
pub async fn log_access(
    State(logger): State<AccessLogger>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let remote_addr = remote_addr(request.headers(), peer).unwrap_or_else(|| "-".to_string());

    let user = request
        .extensions()
        .get::<RequestUser>()
        .cloned()
        .unwrap_or_default();
    let authenticated = user.is_authenticated();
    let username = user.username().unwrap_or("-");

    let kind = if authenticated { "A" } else { "N" };
    logger.emit(
        logger.request_level(authenticated),
        &remote_addr,
        username,
        format!("{kind} {method} {path}"),
    );

    let response = next.run(request).await;

    let authenticated = response
        .extensions()
        .get::<RequestUser>()
        .map_or(authenticated, RequestUser::is_authenticated);
    let status = response.status();
    logger.emit(
        logger.response_level(status, authenticated),
        &remote_addr,
        username,
        format!(
            "R {method} {path} {} {} ",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        ),
    );

    response
}
