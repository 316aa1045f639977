//! Cross-process ownership of the containment workspace.
//!
//! The lock is a file created with `create_new` that holds the owner's pid.
//! A lock whose owner is gone is removed and taken over.

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::ContainmentError;

const LOCK_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Removes the lock file when dropped.
#[derive(Debug)]
pub struct WorkspaceLockGuard {
    path: PathBuf,
}

impl Drop for WorkspaceLockGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Take the lock at `lock_path`, waiting up to `timeout` for a live owner
/// to release it.
///
/// # Errors
///
/// Returns `ContainmentError::WorkspaceLocked` when the lock is still held
/// after `timeout`.
pub fn acquire(
    lock_path: &Path,
    timeout: Duration,
) -> Result<WorkspaceLockGuard, ContainmentError> {
    let started = Instant::now();
    loop {
        let holder = match try_acquire(lock_path) {
            Ok(guard) => return Ok(guard),
            Err(LockState::Stale(pid)) => {
                warn!(path = %lock_path.display(), pid, "removing stale containment lock");
                let _ = fs::remove_file(lock_path);
                continue;
            }
            Err(LockState::HeldBy(pid)) => Some(pid),
            Err(LockState::Unknown) => None,
        };
        if started.elapsed() >= timeout {
            return Err(ContainmentError::WorkspaceLocked {
                path: lock_path.to_path_buf(),
                holder,
            });
        }
        debug!(path = %lock_path.display(), ?holder, "containment workspace busy, waiting");
        thread::sleep(LOCK_RETRY_DELAY);
    }
}

#[derive(Debug)]
enum LockState {
    HeldBy(i32),
    Stale(i32),
    /// Unreadable, or created but the pid not written yet.
    Unknown,
}

fn try_acquire(lock_path: &Path) -> Result<WorkspaceLockGuard, LockState> {
    if let Some(parent) = lock_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    match OpenOptions::new().create_new(true).write(true).open(lock_path) {
        Ok(mut file) => {
            let _ = writeln!(file, "{}", std::process::id());
            Ok(WorkspaceLockGuard {
                path: lock_path.to_path_buf(),
            })
        }
        Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
            let mut contents = String::new();
            if OpenOptions::new()
                .read(true)
                .open(lock_path)
                .and_then(|mut file| file.read_to_string(&mut contents))
                .is_err()
            {
                return Err(LockState::Unknown);
            }
            match contents.trim().parse::<i32>().ok() {
                Some(pid) if is_process_running(pid) => Err(LockState::HeldBy(pid)),
                Some(pid) => Err(LockState::Stale(pid)),
                None => Err(LockState::Unknown),
            }
        }
        Err(_) => Err(LockState::Unknown),
    }
}

#[cfg(unix)]
fn is_process_running(pid: i32) -> bool {
    use std::process::{Command, Stdio};

    Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

/// Without `kill -0` every recorded owner is taken as alive.
#[cfg(not(unix))]
fn is_process_running(_pid: i32) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn acquires_and_releases_lock_file() {
        let temp = tempfile::tempdir().unwrap();
        let lock_path = temp.path().join("containment").join("containment.lock");

        let guard = acquire(&lock_path, Duration::ZERO).unwrap();
        assert_eq!(
            fs::read_to_string(&lock_path).unwrap().trim(),
            std::process::id().to_string()
        );
        drop(guard);
        assert!(!lock_path.exists());
    }

    #[test]
    fn held_lock_times_out() {
        let temp = tempfile::tempdir().unwrap();
        let lock_path = temp.path().join("containment.lock");
        let _guard = acquire(&lock_path, Duration::ZERO).unwrap();

        let error = acquire(&lock_path, Duration::from_millis(250)).unwrap_err();
        match error {
            ContainmentError::WorkspaceLocked { path, holder } => {
                assert_eq!(path, lock_path);
                assert_eq!(holder, i32::try_from(std::process::id()).ok());
            }
            other => panic!("expected WorkspaceLocked, got {other:?}"),
        }
    }

    #[test]
    fn released_lock_is_taken_by_waiter() {
        let temp = tempfile::tempdir().unwrap();
        let lock_path = temp.path().join("containment.lock");
        let guard = acquire(&lock_path, Duration::ZERO).unwrap();

        let waiter = {
            let lock_path = lock_path.clone();
            thread::spawn(move || acquire(&lock_path, Duration::from_secs(10)).map(drop))
        };
        thread::sleep(Duration::from_millis(300));
        assert!(!waiter.is_finished());
        drop(guard);
        assert!(waiter.join().unwrap().is_ok());
    }

    #[test]
    fn unreadable_owner_is_not_reclaimed() {
        let temp = tempfile::tempdir().unwrap();
        let lock_path = temp.path().join("containment.lock");
        fs::write(&lock_path, "").unwrap();

        let error = acquire(&lock_path, Duration::ZERO).unwrap_err();
        assert!(matches!(error, ContainmentError::WorkspaceLocked { holder: None, .. }));
        assert!(lock_path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn lock_of_exited_process_is_reclaimed() {
        let mut child = std::process::Command::new("true").spawn().unwrap();
        let dead_pid = child.id();
        child.wait().unwrap();

        let temp = tempfile::tempdir().unwrap();
        let lock_path = temp.path().join("containment.lock");
        fs::write(&lock_path, format!("{dead_pid}\n")).unwrap();

        let _guard = acquire(&lock_path, Duration::ZERO).unwrap();
        assert_eq!(
            fs::read_to_string(&lock_path).unwrap().trim(),
            std::process::id().to_string()
        );
    }
}
