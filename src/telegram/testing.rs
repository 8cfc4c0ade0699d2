//! Test doubles for the Bot API endpoint.
//!
//! A stub HTTP server that answers every request with a canned JSON reply
//! and records what it has seen, so tests can assert on the outbound call.

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// What a stub endpoint has observed
#[derive(Default)]
pub struct StubLog {
    pub calls: AtomicUsize,
    pub last_path: Mutex<Option<String>>,
    pub last_body: Mutex<Option<String>>,
}

/// Spawn a local HTTP server answering every request with `reply`.
/// Returns its address and the request log.
pub async fn spawn_stub_api(reply: &'static str) -> (SocketAddr, Arc<StubLog>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener addr");
    let log = Arc::new(StubLog::default());
    let task_log = Arc::clone(&log);

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let conn_log = Arc::clone(&task_log);
            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let req_log = Arc::clone(&conn_log);
                    async move {
                        req_log.calls.fetch_add(1, Ordering::SeqCst);
                        *req_log.last_path.lock().unwrap() = Some(req.uri().path().to_string());
                        let body = req
                            .collect()
                            .await
                            .map(http_body_util::Collected::to_bytes)
                            .unwrap_or_default();
                        *req_log.last_body.lock().unwrap() =
                            Some(String::from_utf8_lossy(&body).into_owned());

                        Ok::<_, Infallible>(
                            Response::builder()
                                .header("Content-Type", "application/json")
                                .body(Full::new(Bytes::from(reply)))
                                .unwrap(),
                        )
                    }
                });
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
            });
        }
    });

    (addr, log)
}

/// Bind then drop a listener so the returned address refuses connections
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe listener addr");
    drop(listener);
    addr
}
