//! Resident-set-size sampling of a live process.
//!
//! A reading of 0 means "no resident memory observable", which the space
//! strategy treats as "the process is gone"; that covers both a vanished
//! pid and a zombie awaiting reaping (whose RSS is already zero).

use std::io;

/// Resident set size of `pid` in kilobytes, or 0 if the process is gone.
#[cfg(target_os = "linux")]
pub(crate) fn resident_kb(pid: libc::pid_t) -> io::Result<u64> {
    let text = match std::fs::read_to_string(format!("/proc/{pid}/statm")) {
        Ok(text) => text,
        // ESRCH surfaces as NotFound once the pid has been reaped.
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };
    let pages: u64 = text
        .split_whitespace()
        .nth(1)
        .and_then(|field| field.parse().ok())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "malformed statm"))?;
    let page_kb = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as u64 / 1024;
    Ok(pages * page_kb)
}

/// Resident set size of `pid` in kilobytes, or 0 if the process is gone.
///
/// Portable unix fallback shelling out to `ps`, which reports kilobytes and
/// prints nothing for a dead pid.
#[cfg(all(unix, not(target_os = "linux")))]
pub(crate) fn resident_kb(pid: libc::pid_t) -> io::Result<u64> {
    let output = std::process::Command::new("ps")
        .args(["-o", "rss=", "-p", &pid.to_string()])
        .output()?;
    let text = String::from_utf8_lossy(&output.stdout);
    Ok(text.trim().parse().unwrap_or(0))
}
