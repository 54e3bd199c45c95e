//! Shared helpers simulating workloads with a known resource footprint.

use std::hint::black_box;
use std::mem::MaybeUninit;
use std::thread;
use std::time::Duration;

/// Seconds of user CPU time consumed by this process so far.
pub fn user_time() -> f64 {
    let mut usage = MaybeUninit::<libc::rusage>::zeroed();
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    assert_eq!(rc, 0, "getrusage failed");
    let usage = unsafe { usage.assume_init() };
    usage.ru_utime.tv_sec as f64 + usage.ru_utime.tv_usec as f64 * 1e-6
}

/// Spin until this process has accrued `seconds` of additional user CPU
/// time. Sleeping would not register; the work must be real.
pub fn burn_user_time(seconds: f64) {
    let start = user_time();
    while user_time() - start < seconds {
        let mut acc = 0u64;
        for i in 0..10_000u64 {
            acc = acc.wrapping_add(black_box(i));
        }
        black_box(acc);
    }
}

/// Allocate and touch `kilobytes` of memory, holding it resident long
/// enough for an observer to sample it.
pub fn hold_memory(kilobytes: usize) {
    let buf = vec![0xAAu8; kilobytes * 1024];
    black_box(&buf);
    thread::sleep(Duration::from_millis(15));
}
