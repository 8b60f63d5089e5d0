//! Timing and memory probes for the operator benchmarks.
//!
//! Peak memory is read from `/proc/self/status`, so it is only available on Linux; other
//! platforms report 0.

use std::time::Instant;

/// Runs `op` `reps` times and returns the mean wall-clock time per call in seconds.
///
/// Returns 0.0 when `reps` is zero.
pub fn mean_time_s<F: FnMut()>(reps: usize, mut op: F) -> f64 {
    if reps == 0 {
        return 0.0;
    }
    let start = Instant::now();
    for _ in 0..reps {
        op();
    }
    start.elapsed().as_secs_f64() / reps as f64
}

/// Extracts the `VmPeak` value (in KB) from the contents of a `/proc/<pid>/status` file.
fn parse_vm_peak_kb(status: &str) -> Option<u64> {
    status
        .lines()
        .find(|line| line.starts_with("VmPeak:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|value| value.parse().ok())
}

/// Reads the peak virtual memory size (VmPeak) of the current process, in KB.
///
/// Returns 0 if the value cannot be read.
#[cfg(target_os = "linux")]
pub fn get_peak_rss_kb() -> u64 {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|status| parse_vm_peak_kb(&status))
        .unwrap_or(0)
}

#[cfg(not(target_os = "linux"))]
pub fn get_peak_rss_kb() -> u64 {
    use std::sync::Once;
    static WARN_ONCE: Once = Once::new();
    WARN_ONCE.call_once(|| {
        log::warn!("Peak RSS measurement is only supported on Linux; returning 0.");
    });
    0
}
