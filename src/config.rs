use std::sync::OnceLock;

pub(crate) const DEFAULT_PARALLEL_MIN: usize = 256;
pub(crate) const DEFAULT_TIMESTAMP_FORMAT: &str = "%d.%m.%Y  %H:%M:%S";

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_string(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

static PARALLEL_MIN: OnceLock<usize> = OnceLock::new();

/// Batch size at which batch rendering switches to rayon.
pub fn parallel_min() -> usize {
    *PARALLEL_MIN.get_or_init(|| {
        parse_env_usize("SCAN_RESULT_PARALLEL_MIN", DEFAULT_PARALLEL_MIN).clamp(1, 1_000_000)
    })
}

static TIMESTAMP_FORMAT: OnceLock<String> = OnceLock::new();

/// `chrono` format string used for history timestamps.
pub fn timestamp_format() -> &'static str {
    TIMESTAMP_FORMAT.get_or_init(|| {
        parse_env_string("SCAN_RESULT_TIMESTAMP_FORMAT", DEFAULT_TIMESTAMP_FORMAT)
    })
}
