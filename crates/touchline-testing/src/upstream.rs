//! In-process fake for third-party HTTP APIs.
//!
//! Tests describe the upstream as an axum `Router`; `FakeUpstream::spawn` serves
//! it on an OS-assigned port and hands back the base URL to point clients at.

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct FakeUpstream {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl FakeUpstream {
    pub async fn spawn(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake upstream");
        let port = listener.local_addr().expect("local addr").port();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("fake upstream server");
        });
        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            handle,
        }
    }

    /// `base_url` joined with `path` (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
