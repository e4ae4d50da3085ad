//! HTTP fetcher implementation
//!
//! This module handles the two kinds of HTTP requests the scanner makes:
//!
//! - Page fetches: GET the full body of a page so its anchors can be
//!   extracted. Bounded by a 10 second total timeout and a 10-redirect cap.
//! - Liveness probes: GET a candidate link only to observe its status code.
//!   Same timeout, but the client's default redirect policy.
//!
//! A timeout on either request is a classification (the URL is dead), not
//! an error. Every other transport failure (DNS, refused connection, TLS,
//! malformed response, redirect cap) is a `ScanError` and ends the run.

use crate::ScanError;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Total request timeout for page fetches and liveness probes
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum redirect hops a page fetch will follow
pub const MAX_REDIRECTS: usize = 10;

/// Result of fetching a page body
#[derive(Debug)]
pub enum FetchOutcome {
    /// The full response body, regardless of status code
    Body(String),

    /// The request timed out; the caller treats the URL as dead
    TimedOut,
}

/// Verdict of a liveness probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    /// Responded within the timeout with status < 400
    Alive,

    /// Timed out, or responded with status >= 400
    Dead,
}

/// Builds the HTTP client used for page fetches
///
/// 10 second total timeout, at most 10 redirect hops per fetch chain.
pub fn build_page_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .build()
}

/// Builds the HTTP client used for liveness probes
///
/// Same timeout as page fetches; redirect handling is left at the client
/// default rather than overridden.
pub fn build_probe_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// Fetches the full body of a page
///
/// Any status code counts as a successful fetch; the body is returned
/// as-is. The response is fully consumed (or dropped) on every path, so
/// the connection is always released before this returns.
///
/// # Arguments
///
/// * `client` - The page client from [`build_page_client`]
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchOutcome::Body)` - The response body text
/// * `Ok(FetchOutcome::TimedOut)` - The request or body read timed out
/// * `Err(ScanError)` - A non-timeout transport failure (fatal to the run)
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchOutcome, ScanError> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) if e.is_timeout() => return Ok(FetchOutcome::TimedOut),
        Err(e) if e.is_redirect() => {
            return Err(ScanError::RedirectLimit {
                url: url.to_string(),
            })
        }
        Err(e) => {
            return Err(ScanError::Http {
                url: url.to_string(),
                source: e,
            })
        }
    };

    // The total timeout also covers the body read, so a stalled body
    // surfaces here as a timeout.
    match response.text().await {
        Ok(body) => Ok(FetchOutcome::Body(body)),
        Err(e) if e.is_timeout() => Ok(FetchOutcome::TimedOut),
        Err(e) => Err(ScanError::Body {
            url: url.to_string(),
            source: e,
        }),
    }
}

/// Probes a candidate link for liveness
///
/// Issues a GET and looks only at the outcome: timeout or status >= 400 is
/// [`Liveness::Dead`], status < 400 is [`Liveness::Alive`]. The response
/// body is never read; dropping the response releases the connection.
///
/// # Arguments
///
/// * `client` - The probe client from [`build_probe_client`]
/// * `url` - The URL to probe
///
/// # Returns
///
/// * `Ok(Liveness)` - The probe verdict
/// * `Err(ScanError)` - A non-timeout transport failure (fatal to the run)
pub async fn probe_liveness(client: &Client, url: &str) -> Result<Liveness, ScanError> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) if e.is_timeout() => return Ok(Liveness::Dead),
        Err(e) if e.is_redirect() => {
            return Err(ScanError::RedirectLimit {
                url: url.to_string(),
            })
        }
        Err(e) => {
            return Err(ScanError::Http {
                url: url.to_string(),
                source: e,
            })
        }
    };

    if response.status().as_u16() >= 400 {
        Ok(Liveness::Dead)
    } else {
        Ok(Liveness::Alive)
    }
}
