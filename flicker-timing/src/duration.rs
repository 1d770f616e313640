use flicker_core::{FlickerError, Result};

/// Seconds appended to every run after the last volume.
pub const TRAILING_MARGIN_SECS: f64 = 3.0;

/// Total renderer runtime: `tr * n_volumes` plus the trailing margin.
///
/// Fails with [`FlickerError::InvalidDuration`] unless `tr` is finite and
/// positive and `n_volumes` is positive.
pub fn total_duration(tr: f64, n_volumes: i64) -> Result<f64> {
    if !tr.is_finite() || tr <= 0.0 || n_volumes <= 0 {
        return Err(FlickerError::InvalidDuration { tr, n_volumes });
    }
    let total = tr * n_volumes as f64 + TRAILING_MARGIN_SECS;
    if !total.is_finite() {
        return Err(FlickerError::InvalidDuration { tr, n_volumes });
    }
    Ok(total)
}
