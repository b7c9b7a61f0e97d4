//! Launcher watchdog.
//!
//! When the launcher that spawned this bot dies, the bot must not be
//! left running as an orphan. The watchdog polls the launcher pid with
//! a non-destructive probe and resolves once the process is gone; the
//! caller then shuts down cleanly. The bot never outlives its launcher
//! by more than one polling interval.

use std::time::Duration;

use tokio::time;
use tracing::trace;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Resolves once the process identified by `pid` no longer exists.
pub async fn wait_for_parent_exit(pid: u32) {
    loop {
        time::sleep(POLL_INTERVAL).await;
        trace!(pid, "probing launcher liveness");
        if !process_alive(pid) {
            return;
        }
    }
}

/// Signal-0 existence probe. EPERM means the process exists but belongs
/// to someone else, which still counts as alive.
#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    match unsafe { libc::kill(pid as libc::pid_t, 0) } {
        0 => true,
        _ => std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM),
    }
}

/// No portable probe off unix; the watchdog never fires there.
#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}
