use log::info;
use std::collections::LinkedList;
use std::time::{Duration, SystemTime};

/// Wrapper function to measure duration of an async execution phase
pub async fn measure_dur_async<'a, F, Fut, T, E>(
    phase_name: &'a str,
    phase_timings: &mut LinkedList<(&'a str, SystemTime, Duration)>,
    operation: F,
    trace_log_fn: Option<fn(&T) -> String>,
) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let start = SystemTime::now();
    let result = operation().await;
    let dur = start.elapsed().unwrap_or_else(|_| Duration::from_millis(0));
    phase_timings.push_back((phase_name, start, dur));
    let log_line = result
        .as_ref()
        .ok()
        .and_then(|r| trace_log_fn.map(|f| f(r)))
        .unwrap_or_default();
    info!("{} | {}, took={}", phase_name, log_line, dur.as_millis());
    result
}

/// Wrapper function to measure duration of a synchronous phase that returns Result
pub fn measure_dur_with_error<'a, F, T, E>(
    phase_name: &'a str,
    phase_timings: &mut LinkedList<(&'a str, SystemTime, Duration)>,
    mut operation: F,
    trace_log_fn: Option<fn(&T) -> String>,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    let start = SystemTime::now();
    let result = operation();
    let dur = start.elapsed().unwrap_or_else(|_| Duration::from_millis(0));
    phase_timings.push_back((phase_name, start, dur));
    let log_line = result
        .as_ref()
        .ok()
        .and_then(|r| trace_log_fn.map(|f| f(r)))
        .unwrap_or_default();
    info!("{} | {}, took={}", phase_name, log_line, dur.as_millis());
    result
}

pub async fn measure_dur<'a, F, T>(
    phase_name: &'a str,
    phase_timings: &mut LinkedList<(&'a str, SystemTime, Duration)>,
    mut operation: F,
    trace_log_fn: Option<fn(&T) -> String>,
) -> T
where
    F: FnMut() -> T,
{
    let start = SystemTime::now();
    let result = operation();
    let dur = start.elapsed().unwrap_or_else(|_| Duration::from_millis(0));
    phase_timings.push_back((phase_name, start, dur));
    let log_line = trace_log_fn.map(|f| f(&result)).unwrap_or_default();
    info!("{} | {}, took={}", phase_name, log_line, dur.as_millis());
    result
}
