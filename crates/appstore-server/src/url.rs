//! URL validation and endpoint construction
//!
//! The base URL is validated once when a client is built. Endpoint URLs are
//! then assembled from path segments, each percent-encoded, so identifiers
//! from callers can never change the request path.

use crate::error::{Error, Result};
use crate::limits::MAX_BASE_URL_LENGTH;

/// Validate base URL format and size
pub(crate) fn validate_base_url(base_url: &str) -> Result<url::Url> {
    if base_url.trim().is_empty() {
        return Err(Error::RemoteUrlInvalid("base URL cannot be empty".into()));
    }

    if base_url.len() > MAX_BASE_URL_LENGTH {
        return Err(Error::RemoteUrlInvalid(format!(
            "base URL too long: {} characters (maximum: {} characters)",
            base_url.len(),
            MAX_BASE_URL_LENGTH
        )));
    }

    let parsed = base_url
        .parse::<url::Url>()
        .map_err(|e| Error::RemoteUrlInvalid(format!("invalid base URL: {e}")))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::RemoteUrlInvalid(
            "base URL must use http or https scheme".into(),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(Error::RemoteUrlInvalid(
            "base URL must have a valid host".into(),
        ));
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(Error::RemoteUrlInvalid(
            "base URL must not carry a query or fragment".into(),
        ));
    }

    Ok(parsed)
}

/// Build the URL of an endpoint below `base`
///
/// `segments` are appended to the base path one by one; `query` pairs are
/// appended in order, repeating names as given. Empty, `.` and `..`
/// segments are rejected since the URL parser would drop or resolve them.
pub(crate) fn endpoint(
    base: &url::Url,
    segments: &[&str],
    query: &[(&str, String)],
) -> Result<url::Url> {
    let mut url = base.clone();

    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| Error::RemoteUrlInvalid("base URL cannot carry a path".into()))?;
        path.pop_if_empty();
        for segment in segments {
            match *segment {
                "" => return Err(Error::RemoteUrlInvalid("empty path parameter".into())),
                "." | ".." => {
                    return Err(Error::RemoteUrlInvalid(format!(
                        "path parameter cannot be '{segment}'"
                    )));
                }
                _ => {
                    path.push(segment);
                }
            }
        }
    }

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in query {
            pairs.append_pair(name, value);
        }
    }

    Ok(url)
}
