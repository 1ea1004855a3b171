use crate::math::interpolation::interpolationerror::FitError;
use crate::math::interpolation::interpolator::{
    Interpolator,
    Samples,
    search_from
};
use crate::math::interpolation::interpolatorgenerator::InterpolationMethod;

// ─────────────────────────────────────────────
// SplineSegment
// ─────────────────────────────────────────────

/// One cubic piece anchored at `x`:
///   S(t) = a + b*(t-x) + c*(t-x)^2 + d*(t-x)^3
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplineSegment {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    x: f64,
}

impl SplineSegment {
    pub fn new(a: f64, b: f64, c: f64, d: f64, x: f64) -> SplineSegment {
        SplineSegment { a, b, c, d, x }
    }

    pub fn coefs(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn lhs_x(&self) -> f64 {
        self.x
    }

    pub fn value(&self, x: f64) -> f64 {
        let x_diff = x - self.x;
        let mut result = self.d;
        for beta in [self.c, self.b, self.a] {
            result = f64::mul_add(result, x_diff, beta);
        }
        result
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let x_diff = x - self.x;
        f64::mul_add(f64::mul_add(3.0 * self.d, x_diff, 2.0 * self.c), x_diff, self.b)
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        f64::mul_add(6.0 * self.d, x - self.x, 2.0 * self.c)
    }
}

// ─────────────────────────────────────────────
// Natural cubic fit
// ─────────────────────────────────────────────
//
// With n = N - 1 intervals and h[i] = x[i+1] - x[i], the second-derivative
// coefficients c[0..=n] satisfy, for every interior knot i in [1, n),
//
//   h[i-1]*c[i-1] + 2*(h[i-1]+h[i])*c[i] + h[i]*c[i+1]
//     = 3*(y[i+1]-y[i])/h[i] - 3*(y[i]-y[i-1])/h[i-1]
//
// closed by c[0] = c[n] = 0. The system is tridiagonal and solved with one
// forward elimination sweep and one back substitution (Thomas algorithm).

fn generate_natural_cubic_segments(samples: &Samples) -> Vec<SplineSegment> {
    let x = samples.x();
    let a = samples.y();
    let n = x.len() - 1;

    let h: Vec<f64> = (0..n).map(|i| x[i + 1] - x[i]).collect();

    let mut alpha = vec![0.0; n];
    for i in 1..n {
        alpha[i] = 3.0 / h[i] * (a[i + 1] - a[i]) - 3.0 / h[i - 1] * (a[i] - a[i - 1]);
    }

    // forward elimination, l[0] = 1 and mu[0] = z[0] = 0
    let mut mu = vec![0.0; n + 1];
    let mut z = vec![0.0; n + 1];
    for i in 1..n {
        let l = 2.0 * (x[i + 1] - x[i - 1]) - h[i - 1] * mu[i - 1];
        mu[i] = h[i] / l;
        z[i] = (alpha[i] - h[i - 1] * z[i - 1]) / l;
    }

    let mut c = vec![0.0; n + 1];
    let mut b = vec![0.0; n];
    let mut d = vec![0.0; n];
    for j in (0..n).rev() {
        c[j] = z[j] - mu[j] * c[j + 1];
        b[j] = (a[j + 1] - a[j]) / h[j] - h[j] * (c[j + 1] + 2.0 * c[j]) / 3.0;
        d[j] = (c[j + 1] - c[j]) / (3.0 * h[j]);
    }

    (0..n)
        .map(|i| SplineSegment::new(a[i], b[i], c[i], d[i], x[i]))
        .collect()
}

// ─────────────────────────────────────────────
// CubicSplineInterpolator
// ─────────────────────────────────────────────

/// Natural cubic spline. Outside the sampled domain the first and last
/// cubic pieces are evaluated as-is rather than clamped.
#[derive(Clone, Debug)]
pub struct CubicSplineInterpolator {
    samples: Samples,
    segments: Vec<SplineSegment>,
}

impl CubicSplineInterpolator {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<CubicSplineInterpolator, FitError> {
        let samples = Samples::validated(x, y, InterpolationMethod::CubicSpline.necessary_points())?;
        let segments = generate_natural_cubic_segments(&samples);
        tracing::debug!("Fitted natural cubic spline with {} segments", segments.len());
        Ok(CubicSplineInterpolator { samples, segments })
    }

    pub fn segments(&self) -> &[SplineSegment] {
        &self.segments
    }

    pub fn derivative(&self, x: f64) -> f64 {
        self.segments[self.find_segment(x, 0).0].derivative(x)
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        self.segments[self.find_segment(x, 0).0].second_derivative(x)
    }

    fn find_segment(&self, x: f64, cursor: usize) -> (usize, usize) {
        let index = search_from(self.samples.x(), x, cursor);
        let segment = index.saturating_sub(1).min(self.segments.len() - 1);
        (segment, index)
    }
}

impl Interpolator for CubicSplineInterpolator {
    fn method(&self) -> InterpolationMethod {
        InterpolationMethod::CubicSpline
    }

    fn samples(&self) -> &Samples {
        &self.samples
    }

    fn samples_mut(&mut self) -> &mut Samples {
        &mut self.samples
    }

    fn value_from(&self, x: f64, cursor: usize) -> (f64, usize) {
        let (segment, index) = self.find_segment(x, cursor);
        (self.segments[segment].value(x), index)
    }

    fn fit(&mut self) -> Result<(), FitError> {
        self.samples
            .validate(InterpolationMethod::CubicSpline.necessary_points())
            .inspect_err(|error| tracing::warn!("Cubic spline refit rejected: {}", error))?;
        self.segments = generate_natural_cubic_segments(&self.samples);
        tracing::debug!("Refitted natural cubic spline with {} segments", self.segments.len());
        Ok(())
    }

    fn set_raw_data(&mut self, x: Vec<f64>, y: Vec<f64>) -> Result<(), FitError> {
        *self = CubicSplineInterpolator::new(x, y)?;
        Ok(())
    }
}
