//! Request dumper.
//!
//! Buffers the whole request body and renders method, target, version,
//! headers and body in wire-like HTTP/1.x text for the log. The body stream can
//! only be read once, so the dumper owns the request.

use std::fmt::Write;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header::HOST, request::Parts, Request};
use bytes::Bytes;

use dumpsrv_core::error::{DumpSrvError, Result};

/// Bounds applied while buffering a body for dumping.
#[derive(Debug, Clone)]
pub struct DumpLimits {
    pub max_body_bytes: usize,
    pub read_timeout: Duration,
}

/// Consume `req` and return its text dump.
///
/// Fails with [`DumpSrvError::BodyRead`] if the body stream errors, exceeds
/// `max_body_bytes`, or is not fully received within `read_timeout`.
pub async fn dump_request(req: Request<Body>, limits: &DumpLimits) -> Result<String> {
    let (parts, body) = req.into_parts();
    let bytes = read_body(body, limits).await?;
    Ok(render(&parts, &bytes))
}

async fn read_body(body: Body, limits: &DumpLimits) -> Result<Bytes> {
    match tokio::time::timeout(limits.read_timeout, to_bytes(body, limits.max_body_bytes)).await {
        Ok(Ok(bytes)) => Ok(bytes),
        Ok(Err(e)) => Err(DumpSrvError::BodyRead(e.to_string())),
        Err(_) => Err(DumpSrvError::BodyRead(format!(
            "body not received within {:?}",
            limits.read_timeout
        ))),
    }
}

/// Render request head plus body. Non-UTF-8 bytes are replaced lossily.
///
/// The `Host` line comes first (from the header, or the URI authority for
/// HTTP/2), followed by the remaining headers in canonical case.
pub fn render(parts: &Parts, body: &[u8]) -> String {
    let mut out = String::with_capacity(256 + body.len());
    let target = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let _ = write!(out, "{} {} {:?}\r\n", parts.method, target, parts.version);

    match parts.headers.get(HOST) {
        Some(host) => {
            let _ = write!(out, "Host: {}\r\n", String::from_utf8_lossy(host.as_bytes()));
        }
        None => {
            if let Some(authority) = parts.uri.authority() {
                let _ = write!(out, "Host: {}\r\n", authority);
            }
        }
    }
    for (name, value) in parts.headers.iter().filter(|(name, _)| **name != HOST) {
        let _ = write!(
            out,
            "{}: {}\r\n",
            canonical_name(name.as_str()),
            String::from_utf8_lossy(value.as_bytes())
        );
    }
    out.push_str("\r\n");
    out.push_str(&String::from_utf8_lossy(body));
    out
}

/// `x-forwarded-for` -> `X-Forwarded-For`.
fn canonical_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        upper = c == '-';
    }
    out
}
