//! Local HTTP fixtures for exercising the fetch strategies without the network.
//!
//! Routes:
//! - `/chars/{n}` answers with `n` ASCII characters
//! - `/unicode/{n}` answers with `n` two-byte characters
//! - `/slow/{ms}/{n}` waits `ms` milliseconds, then answers like `/chars/{n}`
//! - `/status/{code}/{n}` answers like `/chars/{n}` with the given status

use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;

pub struct MockServer {
    addr: SocketAddr,
}

impl MockServer {
    /// Binds an ephemeral port and serves from a dedicated thread for the rest
    /// of the test process.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        listener
            .set_nonblocking(true)
            .expect("set mock listener non-blocking");
        let addr = listener.local_addr().expect("mock server address");

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("mock server runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("adopt mock listener");
                axum::serve(listener, router())
                    .await
                    .expect("mock server crashed");
            });
        });

        Self { addr }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// URLs serving 100, 200, ..., `count * 100` characters.
    pub fn sized_urls(&self, count: usize) -> Vec<String> {
        (1..=count)
            .map(|idx| self.url(&format!("/chars/{}", idx * 100)))
            .collect()
    }
}

/// A URL on a port nothing listens on, so connecting is refused.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let addr = listener.local_addr().expect("reserved address");
    drop(listener);
    format!("http://{addr}/")
}

/// Splits captured report output into lines.
pub fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(out)
        .lines()
        .map(str::to_string)
        .collect()
}

fn router() -> Router {
    Router::new()
        .route("/chars/:n", get(chars))
        .route("/unicode/:n", get(unicode))
        .route("/slow/:ms/:n", get(slow))
        .route("/status/:code/:n", get(status))
}

async fn chars(Path(n): Path<usize>) -> String {
    "a".repeat(n)
}

async fn unicode(Path(n): Path<usize>) -> String {
    "é".repeat(n)
}

async fn slow(Path((ms, n)): Path<(u64, usize)>) -> String {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    "a".repeat(n)
}

async fn status(Path((code, n)): Path<(u16, usize)>) -> (StatusCode, String) {
    let code = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (code, "a".repeat(n))
}
