//! Floating-rate scenario matrix

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{Result, YieldError};

/// Sampled floating rates, one row per trial and one column per period
///
/// Stored row-major so a trial's full schedule is a contiguous slice.
#[derive(Debug, Clone)]
pub struct ScenarioMatrix {
    num_simulations: usize,
    num_periods: usize,
    rates: Vec<f64>,
}

impl ScenarioMatrix {
    /// Draw `num_simulations x num_periods` rates from N(mean, std_dev)
    ///
    /// Draws are taken trial by trial, period by period.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        mean: f64,
        std_dev: f64,
        num_simulations: usize,
        num_periods: usize,
    ) -> Result<Self> {
        let normal =
            Normal::new(mean, std_dev).map_err(|_| YieldError::InvalidDistribution { mean, std_dev })?;

        let rates = (0..num_simulations * num_periods)
            .map(|_| normal.sample(&mut *rng))
            .collect();

        Ok(Self {
            num_simulations,
            num_periods,
            rates,
        })
    }

    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    pub fn num_periods(&self) -> usize {
        self.num_periods
    }

    /// Rates for one trial
    pub fn row(&self, trial: usize) -> &[f64] {
        let start = trial * self.num_periods;
        &self.rates[start..start + self.num_periods]
    }

    /// Iterate over trials in draw order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.num_simulations).map(move |trial| self.row(trial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let matrix = ScenarioMatrix::sample(&mut rng, 2.5, 0.5, 100, 12).unwrap();
        assert_eq!(matrix.num_simulations(), 100);
        assert_eq!(matrix.num_periods(), 12);
        assert_eq!(matrix.rows().count(), 100);
        assert!(matrix.rows().all(|row| row.len() == 12));
    }

    #[test]
    fn test_zero_periods() {
        let mut rng = StdRng::seed_from_u64(7);
        let matrix = ScenarioMatrix::sample(&mut rng, 2.5, 0.5, 5, 0).unwrap();
        assert_eq!(matrix.rows().count(), 5);
        assert!(matrix.rows().all(|row| row.is_empty()));
    }

    #[test]
    fn test_zero_volatility_is_constant() {
        let mut rng = StdRng::seed_from_u64(1);
        let matrix = ScenarioMatrix::sample(&mut rng, 2.5, 0.0, 10, 4).unwrap();
        assert!(matrix.rows().flatten().all(|&rate| rate == 2.5));
    }

    #[test]
    fn test_sample_moments() {
        let mut rng = StdRng::seed_from_u64(42);
        let matrix = ScenarioMatrix::sample(&mut rng, 2.5, 0.5, 2_000, 12).unwrap();
        let n = (matrix.num_simulations() * matrix.num_periods()) as f64;
        let mean = matrix.rows().flatten().sum::<f64>() / n;
        let var = matrix.rows().flatten().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
        assert_abs_diff_eq!(mean, 2.5, epsilon = 0.02);
        assert_abs_diff_eq!(var.sqrt(), 0.5, epsilon = 0.02);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let a = ScenarioMatrix::sample(&mut StdRng::seed_from_u64(9), 2.5, 0.5, 50, 3).unwrap();
        let b = ScenarioMatrix::sample(&mut StdRng::seed_from_u64(9), 2.5, 0.5, 50, 3).unwrap();
        assert_eq!(a.rates, b.rates);
    }
}
