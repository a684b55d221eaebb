//! Open-redirect-safe redirect handler.

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use url::Url;

use super::AppState;
use crate::web::dto::RedirectQuery;
use crate::web::error::ApiError;
use crate::web::extract::FirstQuery;

const REDIRECT_NOT_ALLOWED: &str = "Redirect not allowed";

/// Where a redirect target points.
#[derive(Debug, PartialEq, Eq)]
enum RedirectTarget {
    /// No network location; stays on this site.
    Local,
    /// Network location (`host` or `host:port`) of an off-site target.
    Remote(String),
    /// Unparseable, non-HTTP, or carrying credentials.
    Rejected,
}

fn classify(target: &str) -> RedirectTarget {
    if target.chars().any(char::is_control) {
        return RedirectTarget::Rejected;
    }

    // Browsers ignore leading blanks and read `\` as `/`, so `\/evil.com`
    // and ` //evil.com` are both scheme-relative.
    let trimmed = target.trim_start();
    let normalized = trimmed.replace('\\', "/");
    if normalized.starts_with("//") {
        return match Url::parse(&format!("http:{normalized}")) {
            Ok(url) => remote(&url),
            Err(_) => RedirectTarget::Rejected,
        };
    }

    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => remote(&url),
        Ok(_) => RedirectTarget::Rejected,
        Err(url::ParseError::RelativeUrlWithoutBase) => RedirectTarget::Local,
        Err(_) => RedirectTarget::Rejected,
    }
}

fn remote(url: &Url) -> RedirectTarget {
    if !url.username().is_empty() || url.password().is_some() {
        return RedirectTarget::Rejected;
    }
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => RedirectTarget::Remote(format!("{host}:{port}")),
        (Some(host), None) => RedirectTarget::Remote(host.to_string()),
        (None, _) => RedirectTarget::Rejected,
    }
}

/// Decide whether `/redirect` may send the client to `target`.
///
/// Relative references without a scheme are allowed. Absolute targets must
/// use `http` or `https` and carry no userinfo, so `javascript:`, `mailto:`
/// and `ftp://` are refused even for an allow-listed host. Anything with a
/// network location, including scheme-relative `//host` forms, must name an
/// entry of `allowed_hosts` exactly (case-insensitive, port included).
pub fn redirect_target_allowed(target: &str, allowed_hosts: &[String]) -> bool {
    match classify(target) {
        RedirectTarget::Local => true,
        RedirectTarget::Remote(netloc) => allowed_hosts
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&netloc)),
        RedirectTarget::Rejected => false,
    }
}

/// GET /redirect?url= - Redirect to an allow-listed target with 302 Found.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    FirstQuery(query): FirstQuery<RedirectQuery>,
) -> Result<Response, ApiError> {
    let url = query.url.unwrap_or_else(|| "/".to_string());

    if !redirect_target_allowed(&url, &state.redirect_hosts) {
        tracing::warn!(endpoint = "/redirect", len = url.len(), "Rejected redirect target");
        return Err(ApiError::bad_request(REDIRECT_NOT_ALLOWED));
    }

    let location = HeaderValue::from_str(&url).map_err(|_| {
        tracing::warn!(endpoint = "/redirect", "Redirect target is not a valid header value");
        ApiError::bad_request(REDIRECT_NOT_ALLOWED)
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
