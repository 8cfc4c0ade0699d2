// Logging module
// Named log functions with an access/error split over stdout/stderr.
// Access lines carry a timestamp so logs from concurrent connections
// can be correlated.

use chrono::Local;
use hyper::{Method, Version};
use std::net::SocketAddr;

use crate::config::Config;

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, forwarding_enabled: bool) {
    println!("======================================");
    println!("Contact relay started successfully");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    if forwarding_enabled {
        println!("Telegram forwarding: enabled");
    } else {
        println!("Telegram forwarding: disabled (credentials not configured)");
    }
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, path: &str, version: Version) {
    println!("[{}] [Request] {method} {path} {version:?}", timestamp());
}

pub fn log_response(status: u16) {
    println!("[{}] [Response] {status}", timestamp());
}

pub fn log_forwarding_skipped() {
    println!("[Forward] Credentials not configured, submission accepted without forwarding");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_shutdown() {
    println!("\n[Shutdown] Stop signal received, closing listener");
}
