// file: src/utils/random.rs
// description: inclusive random integer generation
// reference: https://docs.rs/rand

use crate::logger::Logger;
use rand::Rng;

/// Uniformly distributed integer in `[min, max]`, both ends reachable.
///
/// A zero bound reads as missing and is rejected: the error is reported
/// through the shared logger and `None` comes back. The same applies to an
/// inverted range, which the sampler would otherwise panic on.
pub fn random_int(min: i64, max: i64) -> Option<i64> {
    if min == 0 || max == 0 {
        Logger::global().error("random_int called with a zero bound");
        return None;
    }
    if min > max {
        Logger::global().error(&format!("random_int range is inverted: {}..={}", min, max));
        return None;
    }
    Some(rand::rng().random_range(min..=max))
}
