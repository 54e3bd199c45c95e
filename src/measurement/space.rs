//! Peak-memory measurement via an isolated child process.
//!
//! Running the function in a fork keeps its footprint out of the caller's
//! address space, so measurements at successive input sizes cannot
//! accumulate. Protocol: the child samples its own RSS, runs the function,
//! samples again, ships both readings over a pipe, and exits; meanwhile the
//! parent polls the child's RSS at a fixed interval until it reads zero
//! (process gone). The indicator is `max - min` over the merged sample set,
//! or 0 when fewer than three samples were obtained.
//!
//! The child is reaped on every exit path, including when `fun` panics
//! inside it or the parent's own sampling fails.

use std::io;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;
use std::time::Duration;

use super::rss::resident_kb;
use super::Strategy;
use crate::error::Error;

/// Interval between parent-side RSS polls of the child.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Below this many merged samples the measurement carries no signal.
const MIN_SAMPLES: usize = 3;

/// Measures peak resident memory growth of `fun(n)` in kilobytes.
#[derive(Debug, Default)]
pub struct SpaceStrategy;

impl SpaceStrategy {
    /// Create a space strategy.
    pub fn new() -> Self {
        Self
    }
}

/// Joins the owned child pid on drop so no exit path leaks a zombie.
struct ChildGuard {
    pid: libc::pid_t,
    reaped: bool,
}

impl ChildGuard {
    fn new(pid: libc::pid_t) -> Self {
        Self { pid, reaped: false }
    }

    fn wait(&mut self) {
        if !self.reaped {
            let mut status = 0;
            unsafe { libc::waitpid(self.pid, &mut status, 0) };
            self.reaped = true;
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        self.wait();
    }
}

fn write_sample(fd: libc::c_int, kb: u64) {
    let bytes = kb.to_ne_bytes();
    // A failed write only costs the parent one merged sample.
    unsafe { libc::write(fd, bytes.as_ptr().cast(), bytes.len()) };
}

fn read_samples(fd: libc::c_int) -> Vec<u64> {
    let mut samples = Vec::new();
    let mut buf = [0u8; 8];
    loop {
        let mut filled = 0;
        while filled < buf.len() {
            let rc = unsafe { libc::read(fd, buf[filled..].as_mut_ptr().cast(), buf.len() - filled) };
            if rc <= 0 {
                // EOF or error: a partial record is dropped.
                return samples;
            }
            filled += rc as usize;
        }
        samples.push(u64::from_ne_bytes(buf));
    }
}

impl Strategy for SpaceStrategy {
    fn measure(&mut self, n: u64, fun: &mut dyn FnMut(u64)) -> Result<f64, Error> {
        let mut fds = [0 as libc::c_int; 2];
        if unsafe { libc::pipe(fds.as_mut_ptr()) } != 0 {
            return Err(io::Error::last_os_error().into());
        }
        let [read_fd, write_fd] = fds;

        match unsafe { libc::fork() } {
            -1 => {
                let err = io::Error::last_os_error();
                unsafe {
                    libc::close(read_fd);
                    libc::close(write_fd);
                }
                Err(err.into())
            }
            0 => {
                // Child: bracket the function with its own RSS readings.
                unsafe { libc::close(read_fd) };
                let pid = unsafe { libc::getpid() };
                write_sample(write_fd, resident_kb(pid).unwrap_or(0));
                let panicked = catch_unwind(AssertUnwindSafe(|| fun(n))).is_err();
                write_sample(write_fd, resident_kb(pid).unwrap_or(0));
                unsafe {
                    libc::close(write_fd);
                    libc::_exit(if panicked { 1 } else { 0 })
                }
            }
            pid => {
                unsafe { libc::close(write_fd) };
                let mut guard = ChildGuard::new(pid);

                let mut samples = Vec::new();
                let outcome = loop {
                    match resident_kb(pid) {
                        Ok(0) => break Ok(()),
                        Ok(kb) => samples.push(kb),
                        Err(e) => break Err(e),
                    }
                    thread::sleep(POLL_INTERVAL);
                };
                // The pipe hits EOF once the child has exited, so this
                // drains the child's two bracket readings.
                samples.extend(read_samples(read_fd));
                unsafe { libc::close(read_fd) };
                guard.wait();
                outcome?;

                if samples.len() < MIN_SAMPLES {
                    return Ok(0.0);
                }
                let min = samples.iter().copied().min().unwrap_or(0);
                let max = samples.iter().copied().max().unwrap_or(0);
                Ok((max - min) as f64)
            }
        }
    }

    fn default_error_pct(&self) -> f64 {
        0.05
    }
}
