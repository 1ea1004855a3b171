use serde::{
    Deserialize,
    Serialize
};

use crate::math::interpolation::cubicspline::CubicSplineInterpolator;
use crate::math::interpolation::interpolationerror::FitError;
use crate::math::interpolation::interpolator::{
    Interpolator,
    Samples
};
use crate::math::interpolation::linearinterpolator::LinearInterpolator;
use crate::math::interpolation::stepinterpolator::StepInterpolator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterpolationMethod {
    Linear,
    Step,
    CubicSpline,
}

impl InterpolationMethod {
    pub fn necessary_points(&self) -> usize {
        match self {
            InterpolationMethod::Linear      => 2,
            InterpolationMethod::Step        => 2,
            InterpolationMethod::CubicSpline => 2, // 2 points degenerate to one line
        }
    }
}

pub fn new_linear(x: Vec<f64>, y: Vec<f64>) -> Result<Box<dyn Interpolator>, FitError> {
    Ok(Box::new(LinearInterpolator::new(x, y)?))
}

pub fn new_step(x: Vec<f64>, y: Vec<f64>) -> Result<Box<dyn Interpolator>, FitError> {
    Ok(Box::new(StepInterpolator::new(x, y)?))
}

pub fn new_cubic_spline(x: Vec<f64>, y: Vec<f64>) -> Result<Box<dyn Interpolator>, FitError> {
    Ok(Box::new(CubicSplineInterpolator::new(x, y)?))
}

/// A validated recipe (method plus samples) that builds fresh interpolators.
///
/// Interpolators own mutable state, so registries hand out generators and
/// let every caller fit its own instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolatorGenerator {
    method: InterpolationMethod,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl InterpolatorGenerator {
    pub fn new(
        method: InterpolationMethod,
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> Result<InterpolatorGenerator, FitError> {
        let generator = InterpolatorGenerator { method, x, y };
        generator.validate()?;
        Ok(generator)
    }

    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn validate(&self) -> Result<(), FitError> {
        Samples::new(self.x.clone(), self.y.clone()).validate(self.method.necessary_points())
    }

    pub fn generate(&self) -> Result<Box<dyn Interpolator>, FitError> {
        let (x, y) = (self.x.clone(), self.y.clone());
        match self.method {
            InterpolationMethod::Linear      => new_linear(x, y),
            InterpolationMethod::Step        => new_step(x, y),
            InterpolationMethod::CubicSpline => new_cubic_spline(x, y),
        }
    }
}
