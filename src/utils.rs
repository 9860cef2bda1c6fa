use std::time::{Duration, Instant};

pub mod data_structures;
pub mod io;

/// runs the given function and returns its result together with the
/// elapsed wall clock time
pub fn measure_time<R, F: FnOnce() -> R>(function: F) -> (Duration, R) {
    let start = Instant::now();
    let result = function();

    (start.elapsed(), result)
}
