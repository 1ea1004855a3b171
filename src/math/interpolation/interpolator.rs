use crate::math::interpolation::interpolationerror::FitError;
use crate::math::interpolation::interpolatorgenerator::InterpolationMethod;

// ─────────────────────────────────────────────
// Samples
// ─────────────────────────────────────────────

/// The `(x, y)` coordinates an interpolator is fitted against.
///
/// `x` is kept strictly ascending by every interpolator in this module: a
/// store only becomes the active one after [`Samples::validate`] succeeds.
/// The abscissae can only be replaced wholesale, the ordinates may also be
/// edited in place through [`Samples::y_mut`] (followed by a refit).
#[derive(Clone, Debug, PartialEq)]
pub struct Samples {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Samples {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Samples {
        Samples { x, y }
    }

    /// Builds a store and checks it against `required` points in one go.
    pub fn validated(x: Vec<f64>, y: Vec<f64>, required: usize) -> Result<Samples, FitError> {
        let samples = Samples::new(x, y);
        samples.validate(required)?;
        Ok(samples)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn y_mut(&mut self) -> &mut [f64] {
        &mut self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn to_raw(&self) -> (Vec<f64>, Vec<f64>) {
        (self.x.clone(), self.y.clone())
    }

    pub fn validate(&self, required: usize) -> Result<(), FitError> {
        if self.x.len() != self.y.len() {
            return Err(FitError::LengthMismatch {
                expected: self.x.len(),
                found: self.y.len(),
            });
        }
        if self.x.len() < required {
            return Err(FitError::TooFewPoints {
                found: self.x.len(),
                required,
            });
        }
        match self.x.windows(2).position(|pair| !(pair[0] < pair[1])) {
            Some(i) => Err(FitError::NotSorted { index: i + 1 }),
            None => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────
// Bracket search
// ─────────────────────────────────────────────

/// Number of abscissae `<= x`, searching from `cursor` onwards.
///
/// A result `i` brackets `x` as `xs[i - 1] <= x < xs[i]`; `0` means `x` lies
/// below the domain and `xs.len()` means it lies at or past the last sample.
/// The cursor is only a hint: when it already points past `x` (a batch that
/// is not ascending) the search restarts from the front.
pub fn search_from(xs: &[f64], x: f64, cursor: usize) -> usize {
    let cursor_is_behind = cursor <= xs.len() && (cursor == 0 || xs[cursor - 1] <= x);
    if cursor_is_behind {
        cursor + xs[cursor..].partition_point(|&v| v <= x)
    } else {
        tracing::trace!("Cursor {} is ahead of query {}, searching from the start", cursor, x);
        xs.partition_point(|&v| v <= x)
    }
}

// ─────────────────────────────────────────────
// Interpolator
// ─────────────────────────────────────────────

/// Capability set shared by every one-dimensional interpolation strategy.
pub trait Interpolator: Send + Sync {
    fn method(&self) -> InterpolationMethod;

    fn samples(&self) -> &Samples;

    /// In-place access to the sample store. Call [`Interpolator::fit`]
    /// afterwards, evaluation keeps using the previous fit until then.
    fn samples_mut(&mut self) -> &mut Samples;

    /// Evaluates `x` starting the bracket search at `cursor`, returning the
    /// value and the cursor to use for the next (larger) query.
    fn value_from(&self, x: f64, cursor: usize) -> (f64, usize);

    /// Recomputes derived state from the current sample store. On error the
    /// previous fit is kept.
    fn fit(&mut self) -> Result<(), FitError>;

    /// Replaces the sample store and refits. Nothing changes on error.
    fn set_raw_data(&mut self, x: Vec<f64>, y: Vec<f64>) -> Result<(), FitError>;

    fn value(&self, x: f64) -> f64 {
        self.value_from(x, 0).0
    }

    /// Evaluates an ascending batch with one shared cursor.
    ///
    /// When `dst` is given the results are also written into it.
    ///
    /// # Panics
    /// If `dst` is given and its length differs from `xs.len()`.
    fn values(&self, xs: &[f64], dst: Option<&mut [f64]>) -> Vec<f64> {
        if let Some(dst) = dst.as_deref() {
            assert!(
                dst.len() == xs.len(),
                "{}",
                FitError::LengthMismatch { expected: xs.len(), found: dst.len() }
            );
        }

        let mut cursor = 0;
        let result: Vec<f64> = xs
            .iter()
            .map(|&x| {
                let (value, next) = self.value_from(x, cursor);
                cursor = next;
                value
            })
            .collect();

        if let Some(dst) = dst {
            dst.copy_from_slice(&result);
        }
        result
    }

    fn raw_data(&self) -> (Vec<f64>, Vec<f64>) {
        self.samples().to_raw()
    }

    fn num_points(&self) -> usize {
        self.samples().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_brackets_queries() {
        let xs = [0.0, 2.5, 5.0, 7.5, 10.0];
        assert_eq!(search_from(&xs, -1.0, 0), 0);
        assert_eq!(search_from(&xs, 0.0, 0), 1);
        assert_eq!(search_from(&xs, 3.0, 0), 2);
        assert_eq!(search_from(&xs, 10.0, 0), 5);
        assert_eq!(search_from(&xs, 11.0, 0), 5);
    }

    #[test]
    fn search_recovers_from_stale_cursor() {
        let xs = [0.0, 2.5, 5.0, 7.5, 10.0];
        assert_eq!(search_from(&xs, 8.0, 2), 4);
        assert_eq!(search_from(&xs, 1.0, 4), 1);
        assert_eq!(search_from(&xs, 1.0, 5), 1);
        assert_eq!(search_from(&xs, 1.0, 42), 1);
    }

    #[test]
    fn validate_reports_first_offending_index() {
        let samples = Samples::new(vec![0.0, 1.0, 1.0, 3.0], vec![0.0; 4]);
        assert_eq!(samples.validate(2), Err(FitError::NotSorted { index: 2 }));

        let samples = Samples::new(vec![0.0, 1.0], vec![0.0]);
        assert_eq!(
            samples.validate(2),
            Err(FitError::LengthMismatch { expected: 2, found: 1 })
        );

        let samples = Samples::new(vec![0.0], vec![0.0]);
        assert_eq!(
            samples.validate(2),
            Err(FitError::TooFewPoints { found: 1, required: 2 })
        );
    }

    #[test]
    fn nan_abscissa_is_not_sorted() {
        let samples = Samples::new(vec![0.0, f64::NAN, 2.0], vec![0.0; 3]);
        assert_eq!(samples.validate(2), Err(FitError::NotSorted { index: 1 }));
    }
}
