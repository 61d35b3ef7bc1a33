//! Seeded mock data for demos and tests
//!
//! Same seed, same output: every draw goes through one `StdRng`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

use crate::core_types::HeatSample;
use crate::encoding::Domain;

/// Months in a seasonal series
pub const MONTHS: usize = 12;

/// Deterministic generator for monthly series and scattered samples
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    rng: StdRng,
}

impl FixtureGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Twelve monthly temperatures: a half-sine season over `base` plus up to
    /// ±1 °C of jitter.
    ///
    /// `temp[i] = base + sin(i/11 · π) · variance + jitter`, so January and
    /// December sit near `base` and mid-year peaks near `base + variance`.
    pub fn monthly_temperatures(&mut self, base: f64, variance: f64) -> [f64; MONTHS] {
        let last = (MONTHS - 1) as f64;
        std::array::from_fn(|i| {
            let season = (i as f64 / last * PI).sin() * variance;
            let jitter = (self.rng.random::<f64>() - 0.5) * 2.0;
            base + season + jitter
        })
    }

    /// Monthly series for a named district.
    ///
    /// Names containing "industrial" start 2 °C warmer (base 32 instead of
    /// 30) and names containing "center" swing wider (variance 8 instead of
    /// 6). Matching ignores case.
    pub fn district_temperatures(&mut self, name: &str) -> [f64; MONTHS] {
        let name = name.to_lowercase();
        let base = if name.contains("industrial") { 32.0 } else { 30.0 };
        let variance = if name.contains("center") { 8.0 } else { 6.0 };
        self.monthly_temperatures(base, variance)
    }

    /// Shift a series by the heat-island contribution `suhii · 2` °C.
    #[must_use]
    pub fn suhii_adjusted(series: &[f64], suhii: f64) -> Vec<f64> {
        series.iter().map(|t| t + suhii * 2.0).collect()
    }

    /// `n` samples with values uniform in `domain`.
    pub fn sample_points(&mut self, n: usize, domain: &Domain) -> Vec<HeatSample> {
        (0..n)
            .map(|_| HeatSample::new(self.rng.random_range(domain.min()..domain.max())))
            .collect()
    }

    /// `n` samples with a primary value in `primary` and a secondary value in
    /// `secondary`.
    pub fn sample_pairs(
        &mut self,
        n: usize,
        primary: &Domain,
        secondary: &Domain,
    ) -> Vec<HeatSample> {
        (0..n)
            .map(|_| {
                let value = self.rng.random_range(primary.min()..primary.max());
                let suhii = self.rng.random_range(secondary.min()..secondary.max());
                HeatSample::new(value).with_secondary(suhii)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_series() {
        let a = FixtureGenerator::new(7).monthly_temperatures(30.0, 6.0);
        let b = FixtureGenerator::new(7).monthly_temperatures(30.0, 6.0);
        assert_eq!(a, b);
        let c = FixtureGenerator::new(8).monthly_temperatures(30.0, 6.0);
        assert_ne!(a, c);
    }

    #[test]
    fn test_seasonal_shape_within_jitter() {
        let series = FixtureGenerator::new(1).monthly_temperatures(30.0, 6.0);
        for (i, t) in series.iter().enumerate() {
            let season = 30.0 + (i as f64 / 11.0 * PI).sin() * 6.0;
            assert!((t - season).abs() <= 1.0, "month {i}: {t} vs {season}");
        }
    }

    #[test]
    fn test_district_names() {
        let plain = FixtureGenerator::new(3).district_temperatures("Riverside");
        let industrial = FixtureGenerator::new(3).district_temperatures("North Industrial Zone");
        // Same jitter draws, so the only difference is the base
        for (p, i) in plain.iter().zip(&industrial) {
            assert!((i - p - 2.0).abs() < 1e-9);
        }
        let center = FixtureGenerator::new(3).district_temperatures("City CENTER");
        assert!((center[0] - plain[0]).abs() < 1e-9);
        assert!(center[5] > plain[5]);
    }

    #[test]
    fn test_suhii_adjusted() {
        assert_eq!(
            FixtureGenerator::suhii_adjusted(&[20.0, 25.0], 1.5),
            vec![23.0, 28.0]
        );
    }

    #[test]
    fn test_sample_points_stay_in_domain() {
        let mut generator = FixtureGenerator::new(42);
        let samples = generator.sample_points(200, &Domain::TEMPERATURE);
        assert_eq!(samples.len(), 200);
        assert!(samples.iter().all(|s| Domain::TEMPERATURE.contains(s.value)));

        let pairs = generator.sample_pairs(50, &Domain::TEMPERATURE, &Domain::SUHII);
        assert!(pairs
            .iter()
            .all(|s| s.secondary.is_some_and(|v| Domain::SUHII.contains(v))));
    }
}
