//! Cancellable repeating tick on a background thread.
//!
//! The worker parks on a stop channel with `recv_timeout`, so each period
//! either fires the callback (timeout) or exits (stop message / sender
//! dropped). `stop` joins the worker, so after it returns no further tick
//! can run.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Ticker {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel();
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => on_tick(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Signal the worker and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Send fails only if the worker already exited.
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Tick worker panicked during shutdown");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
