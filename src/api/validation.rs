//! Guard checks applied to request input before the service layer is called.
//!
//! Each guard returns the validated value or a [`Violation`] naming the
//! offending field. Request-level validators collect every violation before
//! failing.

use url::Url;

use crate::api::dto::link::NewLinkRequest;
use crate::domain::entities::NewLink;
use crate::error::Violation;

pub const LINK_ID_FIELD: &str = "linkId";
pub const URL_FIELD: &str = "url";

/// Parses a link identifier from a path segment.
///
/// Accepts only integers greater than zero.
pub fn validate_link_id(raw: &str) -> Result<i64, Violation> {
    let link_id: i64 = raw
        .parse()
        .map_err(|_| Violation::new(LINK_ID_FIELD, "must be a positive integer"))?;

    if link_id <= 0 {
        return Err(Violation::new(LINK_ID_FIELD, "must be greater than 0"));
    }

    Ok(link_id)
}

/// Checks that a URL is present and is an absolute URL with a host.
///
/// Returns the trimmed input unchanged; the URL is not normalized. The parser
/// silently drops tabs and newlines and tolerates spaces, so inner whitespace
/// and control characters are rejected up front.
pub fn validate_url(raw: Option<&str>) -> Result<String, Violation> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(Violation::new(URL_FIELD, "must not be blank"));
    }

    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(Violation::new(URL_FIELD, "must be a valid URL"));
    }

    match Url::parse(raw) {
        Ok(url) if url.has_host() => Ok(raw.to_string()),
        _ => Err(Violation::new(URL_FIELD, "must be a valid URL")),
    }
}

/// Validates a create-link request body.
///
/// Client-supplied `linkId` and `dateCreate` are never read.
pub fn validate_new_link(request: &NewLinkRequest) -> Result<NewLink, Vec<Violation>> {
    let mut violations = Vec::new();

    let url = validate_url(request.url.as_deref())
        .map_err(|v| violations.push(v))
        .ok();

    match url {
        Some(url) if violations.is_empty() => Ok(NewLink::new(url)),
        _ => Err(violations),
    }
}
