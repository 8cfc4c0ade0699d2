//! Contact relay handler
//!
//! The single endpoint of the service: validate a form submission POST and
//! forward it to the configured Telegram chat. When no credentials are
//! configured the submission is accepted without forwarding, so a fresh
//! deployment can be smoke-tested before the chat is wired up.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler::submission;
use crate::http::response;
use crate::logger;
use crate::telegram::TelegramError;

/// Main entry point for request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    if state.config.logging.access_log {
        logger::log_request(&method, &path, req.version());
    }

    // 1. Method check, before the body is touched
    if method != Method::POST {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return Ok(finish(response::build_405_response(), &state));
    }

    // 2. Reject oversized payloads by declared length
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(finish(resp, &state));
    }

    // 3. Read the body; a failed read is treated like malformed input
    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            return Ok(finish(
                response::error_response(StatusCode::BAD_REQUEST, "invalid JSON"),
                &state,
            ));
        }
    };

    Ok(finish(process(&body, &state).await, &state))
}

/// Validate and forward one submission body
pub async fn process(body: &[u8], state: &AppState) -> Response<Full<Bytes>> {
    let submission = match submission::parse(body) {
        Ok(s) => s,
        Err(e) => {
            logger::log_warning(&format!("Rejected submission: {e}"));
            return response::error_response(e.status(), &e.to_string());
        }
    };

    match &state.telegram {
        Some(client) => match client.send_message(&submission.to_message()).await {
            Ok(()) => response::success_response(),
            Err(e @ TelegramError::Api { .. }) => {
                logger::log_error(&format!("Telegram rejected submission: {e}"));
                response::error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "delivery failed, try later",
                )
            }
            Err(e @ TelegramError::Transport(_)) => {
                logger::log_error(&format!("Telegram request failed: {e}"));
                response::error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "send error, try later or message directly",
                )
            }
        },
        None => {
            logger::log_forwarding_skipped();
            response::success_response()
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_warning(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(response::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Log the outcome when access logging is enabled
fn finish(resp: Response<Full<Bytes>>, state: &AppState) -> Response<Full<Bytes>> {
    if state.config.logging.access_log {
        logger::log_response(resp.status().as_u16());
    }
    resp
}
