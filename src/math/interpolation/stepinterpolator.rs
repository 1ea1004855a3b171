use crate::math::interpolation::interpolationerror::FitError;
use crate::math::interpolation::interpolator::{
    Interpolator,
    Samples,
    search_from
};
use crate::math::interpolation::interpolatorgenerator::InterpolationMethod;

/// Piecewise-constant interpolation holding the left sample's value on
/// every `[x_i, x_{i+1})`.
///
/// There is no derived state: `fit` only checks the store, so ordinates
/// edited through `samples_mut` are visible right after a refit.
#[derive(Clone, Debug)]
pub struct StepInterpolator {
    samples: Samples,
}

impl StepInterpolator {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<StepInterpolator, FitError> {
        let samples = Samples::validated(x, y, InterpolationMethod::Step.necessary_points())?;
        tracing::debug!("Fitted step interpolator on {} points", samples.len());
        Ok(StepInterpolator { samples })
    }
}

impl Interpolator for StepInterpolator {
    fn method(&self) -> InterpolationMethod {
        InterpolationMethod::Step
    }

    fn samples(&self) -> &Samples {
        &self.samples
    }

    fn samples_mut(&mut self) -> &mut Samples {
        &mut self.samples
    }

    fn value_from(&self, x: f64, cursor: usize) -> (f64, usize) {
        let index = search_from(self.samples.x(), x, cursor);
        (self.samples.y()[index.saturating_sub(1)], index)
    }

    fn fit(&mut self) -> Result<(), FitError> {
        self.samples
            .validate(InterpolationMethod::Step.necessary_points())
            .inspect_err(|error| tracing::warn!("Step refit rejected: {}", error))
    }

    fn set_raw_data(&mut self, x: Vec<f64>, y: Vec<f64>) -> Result<(), FitError> {
        *self = StepInterpolator::new(x, y)?;
        Ok(())
    }
}
