use rand::Rng;
use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DistributionError {
    #[error("dist: invalid bounds [{min}, {max}]")]
    InvalidBounds { min: f64, max: f64 },

    #[error("dist: probability {0} out of bounds")]
    ProbabilityOutOfRange(f64),

    #[error("dist: expected {expected} parameters, found {found}")]
    ParameterCount { expected: usize, found: usize },
}

/// Continuous uniform distribution on `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Uniform {
    min: f64,
    max: f64,
}

impl Uniform {
    pub fn new(min: f64, max: f64) -> Result<Uniform, DistributionError> {
        Self::check_bounds(min, max)?;
        Ok(Uniform { min, max })
    }

    fn check_bounds(min: f64, max: f64) -> Result<(), DistributionError> {
        if min.is_finite() && max.is_finite() && min < max {
            Ok(())
        } else {
            Err(DistributionError::InvalidBounds { min, max })
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if x < self.min {
            0.0
        } else if x > self.max {
            1.0
        } else {
            (x - self.min) / self.width()
        }
    }

    pub fn survival(&self, x: f64) -> f64 {
        if x < self.min {
            1.0
        } else if x > self.max {
            0.0
        } else {
            (self.max - x) / self.width()
        }
    }

    pub fn prob(&self, x: f64) -> f64 {
        if self.min <= x && x <= self.max {
            1.0 / self.width()
        } else {
            0.0
        }
    }

    pub fn log_prob(&self, x: f64) -> f64 {
        self.prob(x).ln()
    }

    pub fn quantile(&self, p: f64) -> Result<f64, DistributionError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(DistributionError::ProbabilityOutOfRange(p));
        }
        Ok(f64::mul_add(p, self.width(), self.min))
    }

    pub fn mean(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn median(&self) -> f64 {
        self.mean()
    }

    pub fn variance(&self) -> f64 {
        self.width() * self.width() / 12.0
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn entropy(&self) -> f64 {
        self.width().ln()
    }

    pub fn ex_kurtosis(&self) -> f64 {
        -6.0 / 5.0
    }

    pub fn skewness(&self) -> f64 {
        0.0
    }

    pub fn num_parameters(&self) -> usize {
        2
    }

    /// `[min, max]`
    pub fn parameters(&self) -> [f64; 2] {
        [self.min, self.max]
    }

    pub fn set_parameters(&mut self, parameters: &[f64]) -> Result<(), DistributionError> {
        let [min, max] = parameters else {
            return Err(DistributionError::ParameterCount {
                expected: self.num_parameters(),
                found: parameters.len(),
            });
        };
        Self::check_bounds(*min, *max)?;
        self.min = *min;
        self.max = *max;
        Ok(())
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        f64::mul_add(rng.random::<f64>(), self.width(), self.min)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn closed_form_statistics() {
        let uniform = Uniform::new(2.0, 8.0).unwrap();
        assert_relative_eq!(uniform.mean(), 5.0);
        assert_relative_eq!(uniform.median(), 5.0);
        assert_relative_eq!(uniform.variance(), 3.0);
        assert_relative_eq!(uniform.std_dev(), 3.0_f64.sqrt());
        assert_relative_eq!(uniform.entropy(), 6.0_f64.ln());
        assert_relative_eq!(uniform.prob(3.0), 1.0 / 6.0);
        assert_eq!(uniform.prob(9.0), 0.0);
        assert_eq!(uniform.log_prob(1.0), f64::NEG_INFINITY);
    }

    #[test]
    fn cdf_and_quantile_are_inverse() {
        let uniform = Uniform::new(-1.0, 3.0).unwrap();
        for p in [0.0, 0.25, 0.5, 0.9, 1.0] {
            let x = uniform.quantile(p).unwrap();
            assert_relative_eq!(uniform.cdf(x), p, epsilon = 1e-12);
            assert_relative_eq!(uniform.survival(x), 1.0 - p, epsilon = 1e-12);
        }
        assert_eq!(uniform.cdf(-5.0), 0.0);
        assert_eq!(uniform.cdf(5.0), 1.0);
        assert_eq!(
            uniform.quantile(1.5),
            Err(DistributionError::ProbabilityOutOfRange(1.5))
        );
    }

    #[test]
    fn parameters() {
        let mut uniform = Uniform::new(0.0, 1.0).unwrap();
        uniform.set_parameters(&[4.0, 5.0]).unwrap();
        assert_eq!(uniform.parameters(), [4.0, 5.0]);
        assert_eq!(
            uniform.set_parameters(&[1.0]),
            Err(DistributionError::ParameterCount { expected: 2, found: 1 })
        );
        assert!(uniform.set_parameters(&[5.0, 4.0]).is_err());
        assert_eq!(uniform.parameters(), [4.0, 5.0]);
        assert!(Uniform::new(1.0, 1.0).is_err());
    }

    #[test]
    fn samples_stay_in_support() {
        let uniform = Uniform::new(10.0, 12.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<f64> = (0..1000).map(|_| uniform.sample(&mut rng)).collect();
        assert!(draws.iter().all(|&x| (10.0..12.0).contains(&x)));
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!((mean - 11.0).abs() < 0.1);
    }
}
