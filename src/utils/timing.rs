// file: src/utils/timing.rs
// description: cooperative randomized sleep
// reference: https://docs.rs/tokio/latest/tokio/time

use std::time::Duration;

use crate::logger::Logger;
use crate::utils::random::random_int;

/// Suspends the calling task without blocking others.
///
/// With `Some(max)` above the minimum, the delay is a uniform random integer
/// number of milliseconds in `[min_ms, max]` inclusive; otherwise exactly
/// `min_ms`. A zero minimum is reported through the shared logger and
/// resolves immediately. Always runs to completion of the computed duration;
/// there are no cancellation or timeout semantics.
pub async fn sleep(min_ms: u64, max_ms: Option<u64>) {
    if min_ms == 0 {
        Logger::global().error("sleep called without a minimum delay");
        return;
    }

    let delay = match max_ms {
        Some(max) if max > min_ms => {
            random_int(min_ms as i64, max as i64).unwrap_or(min_ms as i64) as u64
        }
        _ => min_ms,
    };

    tokio::time::sleep(Duration::from_millis(delay)).await;
}
