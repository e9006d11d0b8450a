use rayon::prelude::*;

use crate::classify::{PayloadKind, classify, display_value};
use crate::config::parallel_min;

/// Render display values for a list of decoded values (e.g. scan history).
///
/// Output order matches input order. Runs on rayon once the batch reaches
/// `SCAN_RESULT_PARALLEL_MIN` items.
pub fn render_display_values<S: AsRef<str> + Sync>(values: &[S]) -> Vec<String> {
    if values.len() >= parallel_min() {
        tracing::debug!(count = values.len(), "rendering batch in parallel");
        render_display_values_parallel(values)
    } else {
        values.iter().map(|v| display_value(v.as_ref())).collect()
    }
}

/// Always-parallel variant of [`render_display_values`]
pub fn render_display_values_parallel<S: AsRef<str> + Sync>(values: &[S]) -> Vec<String> {
    values.par_iter().map(|v| display_value(v.as_ref())).collect()
}

/// Classify a list of decoded values, preserving order
pub fn classify_all<S: AsRef<str> + Sync>(values: &[S]) -> Vec<PayloadKind> {
    if values.len() >= parallel_min() {
        values.par_iter().map(|v| classify(v.as_ref())).collect()
    } else {
        values.iter().map(|v| classify(v.as_ref())).collect()
    }
}
