use crate::math::interpolation::interpolationerror::FitError;
use crate::math::interpolation::interpolator::{
    Interpolator,
    Samples,
    search_from
};
use crate::math::interpolation::interpolatorgenerator::InterpolationMethod;

/// Piecewise-linear interpolation, held flat at the boundary values outside
/// the sampled domain.
#[derive(Clone, Debug)]
pub struct LinearInterpolator {
    samples: Samples,
}

impl LinearInterpolator {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<LinearInterpolator, FitError> {
        let samples = Samples::validated(x, y, InterpolationMethod::Linear.necessary_points())?;
        tracing::debug!("Fitted linear interpolator on {} points", samples.len());
        Ok(LinearInterpolator { samples })
    }
}

fn linear_piecewise(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    let slope = (y1 - y0) / (x1 - x0);
    f64::mul_add(x - x0, slope, y0)
}

impl Interpolator for LinearInterpolator {
    fn method(&self) -> InterpolationMethod {
        InterpolationMethod::Linear
    }

    fn samples(&self) -> &Samples {
        &self.samples
    }

    fn samples_mut(&mut self) -> &mut Samples {
        &mut self.samples
    }

    fn value_from(&self, x: f64, cursor: usize) -> (f64, usize) {
        let xs = self.samples.x();
        let ys = self.samples.y();
        let index = search_from(xs, x, cursor);
        let value = if index == 0 {
            ys[0]
        } else if index == xs.len() {
            ys[xs.len() - 1]
        } else {
            linear_piecewise(x, xs[index - 1], xs[index], ys[index - 1], ys[index])
        };
        (value, index)
    }

    fn fit(&mut self) -> Result<(), FitError> {
        self.samples
            .validate(InterpolationMethod::Linear.necessary_points())
            .inspect_err(|error| tracing::warn!("Linear refit rejected: {}", error))
    }

    fn set_raw_data(&mut self, x: Vec<f64>, y: Vec<f64>) -> Result<(), FitError> {
        *self = LinearInterpolator::new(x, y)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn sample_interpolator() -> LinearInterpolator {
        LinearInterpolator::new(
            vec![0.0, 2.5, 5.0, 7.5, 10.0],
            vec![2.0, 9.5, 17.0, 24.5, 32.0],
        )
        .unwrap()
    }

    #[test]
    fn clamps_outside_domain() {
        let linear = sample_interpolator();
        let expected = [2.0, 11.0, 20.0, 26.0, 32.0];
        for (x, y) in [-1.0, 3.0, 6.0, 8.0, 11.0].into_iter().zip(expected) {
            assert_relative_eq!(linear.value(x), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn reproduces_knots() {
        let linear = sample_interpolator();
        for (&x, &y) in linear.samples().x().iter().zip(linear.samples().y()) {
            assert_eq!(linear.value(x), y);
        }
    }

    #[test]
    fn failed_set_raw_data_keeps_previous_state() {
        let mut linear = sample_interpolator();
        let result = linear.set_raw_data(vec![0.0, 2.0, 1.0], vec![0.0, 1.0, 2.0]);
        assert_eq!(result, Err(FitError::NotSorted { index: 2 }));
        assert_eq!(linear.num_points(), 5);
        assert_relative_eq!(linear.value(3.0), 11.0, epsilon = 1e-12);
    }

    #[test]
    fn refit_picks_up_new_ordinates() {
        let mut linear = sample_interpolator();
        linear.samples_mut().y_mut()[1] = 2.0;
        linear.fit().unwrap();
        assert_relative_eq!(linear.value(1.25), 2.0, epsilon = 1e-12);
    }
}
