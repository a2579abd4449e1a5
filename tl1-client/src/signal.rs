//! Termination signal watcher
//!
//! Runs on its own task so a signal is honored no matter where the main
//! path is blocked. The first of SIGINT, SIGHUP, or SIGTERM writes exactly
//! one shutdown line to the lifecycle log and exits the process with
//! status 0, abandoning any in-flight connection to the OS. Cancellation is
//! only ever total; there is no partial teardown of a running exchange.

use crate::lifecycle::LifecycleLog;
use tokio::signal::unix::{SignalKind, signal};

/// Shutdown line written for a caught signal.
pub fn shutdown_message(name: &str, number: i32, app: &str, version: &str) -> String {
    format!(
        "signal {} #{}. {}.{} service stopped...",
        name, number, app, version
    )
}

async fn caught(kind: SignalKind, name: &'static str) -> (&'static str, i32) {
    match signal(kind) {
        Ok(mut stream) => {
            stream.recv().await;
            (name, kind.as_raw_value())
        }
        Err(e) => {
            log::warn!("cannot handle {}: {}", name, e);
            std::future::pending().await
        }
    }
}

/// Wait for the first termination signal.
pub async fn wait_for_termination() -> (&'static str, i32) {
    tokio::select! {
        sig = caught(SignalKind::hangup(), "SIGHUP") => sig,
        sig = caught(SignalKind::interrupt(), "SIGINT") => sig,
        sig = caught(SignalKind::terminate(), "SIGTERM") => sig,
    }
}

/// Spawn the watcher task.
///
/// The task never returns control to the caller: once a signal lands it
/// writes its single shutdown line and terminates the process directly, so
/// the normal exit path can never duplicate the line.
pub fn spawn_watcher(lifecycle: LifecycleLog, app: &'static str, version: &'static str) {
    tokio::spawn(async move {
        let (name, number) = wait_for_termination().await;
        match lifecycle.append(&shutdown_message(name, number, app, version)) {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("{}", e.diagnostic("signal"));
                std::process::exit(e.exit_code());
            }
        }
    });
}
