use crate::math::interpolation::interpolationerror::FitError;
use crate::math::interpolation::interpolator::Interpolator;

/// Replaces every sample whose ordinate matches `exclude` with the value the
/// interpolator gives at that abscissa when fitted on the remaining samples.
///
/// The interpolator ends up fitted on the original abscissae with the healed
/// ordinates. If the reduced fit fails (e.g. too few samples survive) the
/// error is returned and the interpolator is left as it was.
pub fn resample(
    interpolator: &mut dyn Interpolator,
    exclude: impl Fn(f64) -> bool,
) -> Result<(), FitError> {
    let (raw_x, mut raw_y) = interpolator.raw_data();
    let (kept, replaced): (Vec<usize>, Vec<usize>) =
        (0..raw_y.len()).partition(|&i| !exclude(raw_y[i]));
    if replaced.is_empty() {
        return Ok(());
    }
    tracing::debug!(
        "Resampling {} of {} points with {:?}",
        replaced.len(),
        raw_y.len(),
        interpolator.method()
    );

    let kept_x = kept.iter().map(|&i| raw_x[i]).collect();
    let kept_y = kept.iter().map(|&i| raw_y[i]).collect();
    interpolator.set_raw_data(kept_x, kept_y)?;

    let replaced_x: Vec<f64> = replaced.iter().map(|&i| raw_x[i]).collect();
    let healed = interpolator.values(&replaced_x, None);
    for (&i, value) in replaced.iter().zip(healed) {
        raw_y[i] = value;
    }

    interpolator.set_raw_data(raw_x, raw_y)
}
