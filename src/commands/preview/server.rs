//! Live preview HTTP server.
//!
//! Serves the active project folder at a fixed local address so the
//! editor can preview the project in a browser view. At most one server
//! runs at a time; shutdown is signalled through a oneshot channel held
//! in managed state.

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Mutex;

use tokio::sync::oneshot;
use warp::Filter;

pub const PREVIEW_PORT: u16 = 8080;

// ─── State Management ──────────────────────────────────────────────

/// Managed state owning the shutdown sender of the running server, if any.
pub struct PreviewState {
    shutdown: Mutex<Option<oneshot::Sender<()>>>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self {
            shutdown: Mutex::new(None),
        }
    }

    /// Claim the single server slot by storing the shutdown sender.
    /// Returns false (leaving the stored sender untouched) when a server
    /// is already running.
    pub fn install(&self, sender: oneshot::Sender<()>) -> bool {
        let mut slot = self.shutdown.lock().unwrap();
        if slot.is_some() {
            return false;
        }
        *slot = Some(sender);
        true
    }

    /// Release the slot, returning the shutdown sender of the running
    /// server (None when nothing is running).
    pub fn take(&self) -> Option<oneshot::Sender<()>> {
        self.shutdown.lock().unwrap().take()
    }

    pub fn is_running(&self) -> bool {
        self.shutdown.lock().unwrap().is_some()
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Server ────────────────────────────────────────────────────────

/// Bind the preview server for a project folder.
///
/// Static files are served from the folder with permissive CORS and
/// caching disabled so edits show up on reload; the root path serves the
/// project's `index.html`. Returns the bound address and the server
/// future, which runs until the shutdown receiver fires. Must be called
/// from within the async runtime.
pub fn bind(
    folder: String,
    shutdown: oneshot::Receiver<()>,
) -> Result<(SocketAddr, impl Future<Output = ()>), warp::Error> {
    let index_path = Path::new(&folder).join("index.html");

    let files = warp::fs::dir(folder)
        .with(warp::cors().allow_any_origin())
        .with(warp::reply::with::header("Cache-Control", "no-cache"));
    let index_route = warp::path::end().and(warp::fs::file(index_path));
    let routes = index_route.or(files);

    warp::serve(routes).try_bind_with_graceful_shutdown(
        ([127, 0, 0, 1], PREVIEW_PORT),
        async move {
            shutdown.await.ok();
        },
    )
}

#[cfg(test)]
#[path = "tests/server_tests.rs"]
mod tests;
