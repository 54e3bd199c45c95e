//! Space-strategy scenarios: linear allocation against matching and
//! mismatching growth hypotheses.
//!
//! Allocation sizes are tens of megabytes so the signal stands well clear
//! of fork overhead, allocator slack, and page-granularity noise.

use complexity_oracle::ComplexityOracle;

use crate::common::hold_memory;

const MEGABYTE_KB: usize = 1024;

#[test]
fn linear_allocation_matches_linear_level() {
    let mut engine = ComplexityOracle::new()
        .range(1..=5)
        .approximation(0.3)
        .space(|n| hold_memory(n as usize * 8 * MEGABYTE_KB), |n| n as f64);

    assert!(engine.process().unwrap());
    // The baseline allocation is visible in the calibrated scale.
    assert!(engine.scale().unwrap() > 4.0 * 1024.0);
}

#[test]
fn linear_allocation_rejected_by_constant_level() {
    let mut engine = ComplexityOracle::new()
        .range(1..=5)
        .approximation(0.3)
        .space(|n| hold_memory(n as usize * 8 * MEGABYTE_KB), |_| 1.0);

    assert!(!engine.process().unwrap());
}

#[test]
#[cfg(target_os = "linux")]
fn measurements_do_not_accumulate_in_the_parent() {
    // Each sample runs in its own child, so five 32 MiB measurements must
    // not grow this process by anything like 160 MiB.
    let before = resident_kb_self();

    let mut engine = ComplexityOracle::new()
        .range(1..=5)
        .approximation(0.5)
        .space(|_| hold_memory(32 * MEGABYTE_KB), |_| 1.0);
    engine.process().unwrap();

    let after = resident_kb_self();
    assert!(
        after.saturating_sub(before) < 64 * 1024,
        "parent RSS grew by {} KB",
        after.saturating_sub(before)
    );
}

#[cfg(target_os = "linux")]
fn resident_kb_self() -> u64 {
    let pid = unsafe { libc::getpid() };
    let text = std::fs::read_to_string(format!("/proc/{pid}/statm")).unwrap_or_default();
    let pages: u64 = text
        .split_whitespace()
        .nth(1)
        .and_then(|field| field.parse().ok())
        .unwrap_or(0);
    pages * unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as u64 / 1024
}
