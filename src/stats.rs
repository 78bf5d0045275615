//! Noise-distribution accumulator used by tests to check that measured
//! noise stays within the bound a parameter set promises, instead of
//! checking exact ciphertext values.

#[derive(Debug, Default, Clone)]
pub struct Stats {
    samples: Vec<f64>,
}

impl Stats {
    pub fn new() -> Self {
        Stats { samples: Vec::new() }
    }

    pub fn add_more(&mut self, values: &[f64]) {
        self.samples.extend_from_slice(values);
    }

    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    pub fn std_dev(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .samples
            .iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>()
            / self.samples.len() as f64;
        variance.sqrt()
    }

    /// `log2` of the absolute standard deviation, the usual way noise
    /// budgets are reported: a smaller (more negative) value is tighter
    /// noise relative to the torus.
    pub fn std_log2(&self) -> f64 {
        self.std_dev().abs().log2()
    }
}
