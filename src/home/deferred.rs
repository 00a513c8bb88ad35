//! Deferred values: data that arrives after the response has started.
//!
//! A `Deferred<T>` settles exactly once, to `Some(value)` or to `None` when
//! the producer failed. Failures are logged at the source and never reach
//! the consumer as errors.

use std::fmt::Display;
use std::future::Future;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::error;

pub struct Deferred<T> {
    rx: oneshot::Receiver<Option<T>>,
}

impl<T: Send + 'static> Deferred<T> {
    /// Start `fut` in the background right away.
    ///
    /// There is no timeout: if `fut` never completes the value stays
    /// pending until the consumer drops it.
    pub fn spawn<F, E>(label: &'static str, fut: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let value = match fut.await {
                Ok(value) => Some(value),
                Err(e) => {
                    error!("deferred {label} failed: {e}");
                    None
                }
            };
            // The consumer may have gone away already.
            let _ = tx.send(value);
        });
        Self { rx }
    }

    /// Wait for the value. A producer that vanished without sending
    /// counts as a failure.
    pub async fn resolve(self) -> Option<T> {
        self.rx.await.ok().flatten()
    }

    /// Run `f` with the value once it settles; the handle yields its result.
    pub fn on_ready<F, R>(self, f: F) -> JoinHandle<R>
    where
        F: FnOnce(Option<T>) -> R + Send + 'static,
        R: Send + 'static,
    {
        tokio::spawn(async move { f(self.resolve().await) })
    }
}

impl<T> std::fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Deferred(..)")
    }
}
